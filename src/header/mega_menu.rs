//! Hover state for the category mega-menu.
//!
//! Leaving a category trigger does not close the menu right away: it arms a
//! dismissal that a timer redeems later with the token it was given.
//! Re-entering a trigger or the panel disarms it, so a stale timer that
//! fires afterwards finds its token no longer pending and does nothing.

use super::slug::slugify;
use crate::routes;

/// Identifies one armed dismissal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissToken(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MegaMenu {
    hovered: Option<String>,
    pending: Option<DismissToken>,
    generation: u64,
}

impl MegaMenu {
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn is_dismiss_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn enter_category(&mut self, key: &str) {
        self.pending = None;
        self.hovered = Some(key.to_string());
    }

    /// Arm a dismissal; the caller schedules a timer carrying the token
    pub fn leave_trigger(&mut self) -> DismissToken {
        self.generation += 1;
        let token = DismissToken(self.generation);
        self.pending = Some(token);
        token
    }

    pub fn enter_panel(&mut self) {
        self.pending = None;
    }

    pub fn leave_panel(&mut self) {
        self.dismiss();
    }

    /// Timer callback. Returns whether the menu was closed.
    pub fn dismiss_elapsed(&mut self, token: DismissToken) -> bool {
        if self.pending == Some(token) {
            self.dismiss();
            true
        } else {
            false
        }
    }

    /// Commit a leaf item: returns the filtered listing URL and closes the menu
    pub fn select(&mut self, item_label: &str) -> Option<String> {
        let category = self.hovered.take()?;
        self.pending = None;
        Some(routes::subcategory_url(&category, &slugify(item_label)))
    }

    pub fn dismiss(&mut self) {
        self.hovered = None;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moving_into_panel_keeps_menu() {
        let mut menu = MegaMenu::default();
        menu.enter_category("men");
        let token = menu.leave_trigger();
        menu.enter_panel();
        assert!(!menu.dismiss_elapsed(token));
        assert_eq!(menu.hovered(), Some("men"));
    }

    #[test]
    fn test_timer_without_reentry_dismisses() {
        let mut menu = MegaMenu::default();
        menu.enter_category("women");
        let token = menu.leave_trigger();
        assert!(menu.is_dismiss_pending());
        assert!(menu.dismiss_elapsed(token));
        assert_eq!(menu.hovered(), None);
    }

    #[test]
    fn test_stale_token_ignored_after_rearm() {
        let mut menu = MegaMenu::default();
        menu.enter_category("men");
        let first = menu.leave_trigger();
        menu.enter_category("kids");
        let second = menu.leave_trigger();
        assert!(!menu.dismiss_elapsed(first));
        assert_eq!(menu.hovered(), Some("kids"));
        assert!(menu.dismiss_elapsed(second));
    }

    #[test]
    fn test_only_one_category_hovered() {
        let mut menu = MegaMenu::default();
        menu.enter_category("men");
        menu.enter_category("women");
        assert_eq!(menu.hovered(), Some("women"));
    }

    #[test]
    fn test_leave_panel_dismisses_immediately() {
        let mut menu = MegaMenu::default();
        menu.enter_category("men");
        menu.enter_panel();
        menu.leave_panel();
        assert_eq!(menu.hovered(), None);
    }

    #[test]
    fn test_select_builds_url_and_clears() {
        let mut menu = MegaMenu::default();
        menu.enter_category("men");
        assert_eq!(
            menu.select("Running Shoes!!").as_deref(),
            Some("/plp?category=men&subcategory=running-shoes")
        );
        assert_eq!(menu.hovered(), None);
        assert_eq!(menu.select("Running"), None);
    }
}
