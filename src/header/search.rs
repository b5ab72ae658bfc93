//! Search box state: query text plus the suggestions flag.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

use crate::routes;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchBox {
    query: String,
    suggestions_open: bool,
}

impl SearchBox {
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Suggestions render only while open and there is something typed
    pub fn shows_suggestions(&self) -> bool {
        self.suggestions_open && !self.query.is_empty()
    }

    pub fn input(&mut self, text: String) {
        self.suggestions_open = !text.is_empty();
        self.query = text;
    }

    pub fn focus(&mut self) {
        self.suggestions_open = !self.query.is_empty();
    }

    pub fn pointer_outside(&mut self) {
        self.suggestions_open = false;
    }

    /// Returns the results URL, or `None` for a blank query (state untouched)
    pub fn submit(&mut self) -> Option<String> {
        if self.query.trim().is_empty() {
            return None;
        }
        let url = routes::search_url(&self.query);
        self.query.clear();
        self.suggestions_open = false;
        Some(url)
    }

    /// Placeholder until the suggestions endpoint exists
    pub fn suggestion_hint(&self) -> String {
        format!("Type and press Enter to search for \"{}\"", self.query)
    }
}

/// Search form with the suggestions dropdown
#[component]
pub fn SearchBar() -> impl IntoView {
    let search = RwSignal::new(SearchBox::default());
    let wrapper = NodeRef::<html::Div>::new();
    let navigate = use_navigate();

    // Close suggestions on any press outside the wrapper
    let outside_handle = window_event_listener(ev::mousedown, move |ev| {
        let Some(wrapper) = wrapper.get_untracked() else { return };
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .map(|node| wrapper.contains(Some(&node)))
            .unwrap_or(false);
        if !inside && search.with_untracked(SearchBox::shows_suggestions) {
            search.update(SearchBox::pointer_outside);
        }
    });
    on_cleanup(move || outside_handle.remove());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(url) = search.try_update(SearchBox::submit).flatten() {
            log::debug!("[SEARCH] Navigating to {}", url);
            navigate(&url, Default::default());
        }
    };

    view! {
        <div class="relative" node_ref=wrapper>
            <form class="flex items-center" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Search"
                    class="border border-gray-300 rounded px-3 py-1 text-sm w-40"
                    prop:value=move || search.with(|s| s.query().to_string())
                    on:input=move |ev| search.update(|s| s.input(event_target_value(&ev)))
                    on:focus=move |_| search.update(SearchBox::focus)
                />
                <button type="submit" class="ml-2 text-gray-600 hover:text-black">
                    <i class="fas fa-search"></i>
                </button>
            </form>

            // Suggestions endpoint is not wired yet; show the submit hint
            <Show when=move || search.with(SearchBox::shows_suggestions)>
                <div class="absolute top-full left-0 right-0 bg-white border border-gray-300 rounded shadow-lg mt-1 max-h-60 overflow-y-auto">
                    <div class="p-2 text-sm text-gray-500">
                        {move || search.with(SearchBox::suggestion_hint)}
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_opens_suggestions() {
        let mut s = SearchBox::default();
        s.input("run".into());
        assert!(s.shows_suggestions());
        s.input(String::new());
        assert!(!s.shows_suggestions());
    }

    #[test]
    fn test_focus_reopens_with_existing_query() {
        let mut s = SearchBox::default();
        s.focus();
        assert!(!s.shows_suggestions());
        s.input("boots".into());
        s.pointer_outside();
        assert!(!s.shows_suggestions());
        s.focus();
        assert!(s.shows_suggestions());
    }

    #[test]
    fn test_whitespace_submit_is_ignored() {
        let mut s = SearchBox::default();
        s.input("   ".into());
        assert_eq!(s.submit(), None);
        assert_eq!(s.query(), "   ");
        assert!(s.shows_suggestions());
    }

    #[test]
    fn test_submit_escapes_and_clears() {
        let mut s = SearchBox::default();
        s.input(" trail runner ".into());
        assert_eq!(s.submit().as_deref(), Some("/plp?search=%20trail%20runner%20"));
        assert_eq!(s.query(), "");
        assert!(!s.shows_suggestions());
    }

    #[test]
    fn test_hint_quotes_query() {
        let mut s = SearchBox::default();
        s.input("socks".into());
        assert_eq!(s.suggestion_hint(), "Type and press Enter to search for \"socks\"");
    }
}
