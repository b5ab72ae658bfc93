//! Favorites / cart icon links with count badges.

use leptos::prelude::*;
use leptos_router::components::A;

/// Badge text for a list length; nothing is shown for an empty list
pub fn badge_label(count: usize) -> Option<String> {
    (count > 0).then(|| count.to_string())
}

#[component]
pub fn BadgeLink(
    href: &'static str,
    /// Font Awesome class of the icon
    icon: &'static str,
    #[prop(into)] count: Signal<usize>,
) -> impl IntoView {
    view! {
        <A href=href attr:class="relative text-gray-600 hover:text-black">
            <i class=format!("fas {} text-xl", icon)></i>
            {move || badge_label(count.get()).map(|text| view! {
                <span class="absolute -top-2 -right-2 bg-red-500 text-white text-xs rounded-full w-5 h-5 flex items-center justify-center">
                    {text}
                </span>
            })}
        </A>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_label() {
        assert_eq!(badge_label(0), None);
        assert_eq!(badge_label(1).as_deref(), Some("1"));
        assert_eq!(badge_label(12).as_deref(), Some("12"));
    }
}
