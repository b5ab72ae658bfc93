//! Skills / FAQ accordion. Items open and close independently.

use leptos::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccordionState {
    open: Vec<bool>,
}

impl AccordionState {
    pub fn new(len: usize) -> Self {
        Self { open: vec![false; len] }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    /// Flip one item; out-of-range indices are ignored
    pub fn toggle(&mut self, index: usize) {
        if let Some(flag) = self.open.get_mut(index) {
            *flag = !*flag;
        }
    }
}

pub fn content_style(open: bool) -> &'static str {
    if open { "display: block;" } else { "display: none;" }
}

pub fn arrow_style(open: bool) -> &'static str {
    if open { "transform: rotate(180deg);" } else { "transform: rotate(0deg);" }
}

#[component]
pub fn Accordion(
    /// `(title, body)` pairs
    items: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    let state = RwSignal::new(AccordionState::new(items.len()));

    view! {
        <div class="accordion">
            {items.into_iter().enumerate().map(|(index, (title, body))| {
                let is_open = move || state.with(|s| s.is_open(index));
                view! {
                    <div class="accordion-item">
                        <button
                            class="accordion-header"
                            on:click=move |_| state.update(|s| s.toggle(index))
                        >
                            <span>{title}</span>
                            <span class="arrow-icon" style=move || arrow_style(is_open())>"▾"</span>
                        </button>
                        <div class="accordion-content" style=move || content_style(is_open())>
                            <p>{body}</p>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_toggle_independently() {
        let mut s = AccordionState::new(3);
        s.toggle(0);
        s.toggle(1);
        assert!(s.is_open(0));
        assert!(s.is_open(1));
        s.toggle(1);
        assert!(s.is_open(0));
        assert!(!s.is_open(1));
        assert!(!s.is_open(2));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut s = AccordionState::new(1);
        s.toggle(5);
        assert!(!s.is_open(5));
        assert_eq!(s, AccordionState::new(1));
    }

    #[test]
    fn test_styles() {
        assert_eq!(content_style(true), "display: block;");
        assert_eq!(arrow_style(false), "transform: rotate(0deg);");
    }
}
