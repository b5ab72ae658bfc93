//! Scroll-spy: which navigation link reflects the section in view.
//!
//! The observer only reports entries whose intersection changed, so the
//! last sample per section is kept between batches. Among sections that
//! currently intersect, the one whose top edge is nearest the viewport top
//! wins; equal distances fall back to document order. The hero region
//! overrides everything while its midpoint band covers the viewport middle.

use std::cmp::Ordering;
use std::collections::HashMap;

use leptos::prelude::*;
use leptos_subscriptions::Intersection;

pub const HERO_ID: &str = "hero";

#[derive(Debug, Clone, PartialEq)]
pub enum NavHighlight {
    /// Hero in view: every link gets the hero style, `#hero` is active
    Hero,
    Section(String),
    /// Nothing in view
    Cleared,
}

/// Hero counts as in view while it spans the vertical middle of the viewport
pub fn hero_in_view(top: f64, bottom: f64, viewport_height: f64) -> bool {
    let middle = viewport_height / 2.0;
    top < middle && bottom > middle
}

#[derive(Debug, Clone, Default)]
pub struct SpyState {
    /// Section ids in document order, hero excluded
    order: Vec<String>,
    samples: HashMap<String, Intersection>,
}

impl SpyState {
    pub fn new<'a>(section_ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            order: section_ids
                .into_iter()
                .filter(|id| *id != HERO_ID)
                .map(str::to_string)
                .collect(),
            samples: HashMap::new(),
        }
    }

    /// Resolve, ranking intersecting sections by `current_top` where it
    /// answers. A section that stays in view is not re-reported, so its
    /// recorded top is stale until the observer next fires for it.
    pub fn apply<F>(
        &mut self,
        batch: Vec<Intersection>,
        hero_visible: bool,
        current_top: F,
    ) -> NavHighlight
    where
        F: Fn(&str) -> Option<f64>,
    {
        for sample in batch {
            if sample.id != HERO_ID {
                self.samples.insert(sample.id.clone(), sample);
            }
        }

        if hero_visible {
            return NavHighlight::Hero;
        }

        self.order
            .iter()
            .enumerate()
            .filter_map(|(pos, id)| {
                self.samples
                    .get(id)
                    .filter(|s| s.is_intersecting)
                    .map(|s| (current_top(id).unwrap_or(s.top).abs(), pos, id))
            })
            .min_by(|a, b| {
                a.0.partial_cmp(&b.0)
                    .unwrap_or(Ordering::Equal)
                    .then(a.1.cmp(&b.1))
            })
            .map(|(_, _, id)| NavHighlight::Section(id.clone()))
            .unwrap_or(NavHighlight::Cleared)
    }
}

/// Class list for the link pointing at `#target`
pub fn link_class(highlight: &NavHighlight, target: &str) -> String {
    let mut class = String::from("nav-link");
    match highlight {
        NavHighlight::Hero => {
            class.push_str(" hero-active");
            if target == HERO_ID {
                class.push_str(" active");
            }
        }
        NavHighlight::Section(id) if id == target => class.push_str(" active"),
        _ => {}
    }
    class
}

/// Navigation bar whose links follow `highlight`
#[component]
pub fn SpyNav(
    /// `(section id, label)` pairs
    links: Vec<(&'static str, &'static str)>,
    highlight: ReadSignal<NavHighlight>,
) -> impl IntoView {
    view! {
        <nav class="spy-nav">
            {links.into_iter().map(|(target, label)| view! {
                <a
                    href=format!("#{}", target)
                    class=move || highlight.with(|h| link_class(h, target))
                >
                    {label}
                </a>
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, is_intersecting: bool, top: f64) -> Intersection {
        Intersection { id: id.to_string(), is_intersecting, top }
    }

    fn no_tops(_: &str) -> Option<f64> {
        None
    }

    fn spy() -> SpyState {
        SpyState::new(["hero", "about", "skills", "projects", "contact"])
    }

    #[test]
    fn test_hero_overrides_everything() {
        let mut s = spy();
        let h = s.apply(vec![sample("skills", true, 10.0)], true, no_tops);
        assert_eq!(h, NavHighlight::Hero);
        assert_eq!(link_class(&h, "skills"), "nav-link hero-active");
        assert_eq!(link_class(&h, "hero"), "nav-link hero-active active");
    }

    #[test]
    fn test_nearest_to_top_wins_not_batch_order() {
        let mut s = spy();
        let h = s.apply(
            vec![sample("about", true, -40.0), sample("skills", true, 300.0)],
            false,
            no_tops,
        );
        assert_eq!(h, NavHighlight::Section("about".into()));
    }

    #[test]
    fn test_ties_use_document_order() {
        let mut s = spy();
        let h = s.apply(
            vec![sample("projects", true, 5.0), sample("skills", true, -5.0)],
            false,
            no_tops,
        );
        assert_eq!(h, NavHighlight::Section("skills".into()));
    }

    #[test]
    fn test_state_persists_across_batches() {
        let mut s = spy();
        s.apply(vec![sample("about", true, 0.0)], false, no_tops);
        // a batch that only reports an unrelated exit keeps `about`
        let h = s.apply(vec![sample("contact", false, 900.0)], false, no_tops);
        assert_eq!(h, NavHighlight::Section("about".into()));
        let h = s.apply(vec![sample("about", false, -700.0)], false, no_tops);
        assert_eq!(h, NavHighlight::Cleared);
        assert_eq!(link_class(&h, "about"), "nav-link");
    }

    #[test]
    fn test_current_tops_override_recorded_ones() {
        let mut s = spy();
        s.apply(vec![sample("about", true, 0.0)], false, no_tops);
        // `about` scrolled up without being re-reported; `skills` just entered
        let h = s.apply(vec![sample("skills", true, 120.0)], false, |id| match id {
            "about" => Some(-400.0),
            "skills" => Some(120.0),
            _ => None,
        });
        assert_eq!(h, NavHighlight::Section("skills".into()));

        // without fresh positions the recorded top of `about` still wins
        let mut s = spy();
        s.apply(vec![sample("about", true, 0.0)], false, no_tops);
        let h = s.apply(vec![sample("skills", true, 120.0)], false, no_tops);
        assert_eq!(h, NavHighlight::Section("about".into()));
    }

    #[test]
    fn test_unknown_ids_ignored() {
        let mut s = spy();
        let h = s.apply(vec![sample("footer", true, 0.0)], false, no_tops);
        assert_eq!(h, NavHighlight::Cleared);
    }

    #[test]
    fn test_hero_in_view() {
        assert!(hero_in_view(-100.0, 500.0, 800.0));
        assert!(!hero_in_view(-700.0, 300.0, 800.0));
        assert!(!hero_in_view(400.0, 1200.0, 800.0));
    }
}
