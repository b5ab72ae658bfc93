//! Portfolio Page
//!
//! Single-page marketing layout: hero, about, skills accordion, project
//! showcase with a detail panel, and contact. The top navigation follows
//! the section in view.

mod accordion;
mod detail_panel;
mod projects;
mod scroll_spy;

use accordion::Accordion;
use detail_panel::ProjectShowcase;
use projects::PROJECT_CARDS;
use scroll_spy::{hero_in_view, NavHighlight, SpyNav, SpyState, HERO_ID};

use leptos::prelude::*;
use leptos_subscriptions::{vertical_extent, viewport_height, IntersectionWatch};

use crate::context::use_app_context;

const SECTIONS: &[(&str, &str)] = &[
    (HERO_ID, "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

const SKILLS: &[(&str, &str)] = &[
    ("Systems programming", "Rust, C, profiling and low-level performance work."),
    ("Web front ends", "Leptos, WASM, TypeScript and accessible UI."),
    ("Infrastructure", "Containers, CI pipelines, observability."),
];

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let root_margin = use_app_context().with_config(|c| c.spy_root_margin.clone());
    let (highlight, set_highlight) = signal(NavHighlight::Cleared);
    let watch = StoredValue::new_local(None::<IntersectionWatch>);

    // Sections exist once the view is mounted, so observe from an effect
    Effect::new(move |_| {
        if watch.with_value(Option::is_some) {
            return;
        }
        let mut spy = SpyState::new(SECTIONS.iter().map(|(id, _)| *id));
        let observer = IntersectionWatch::new(&root_margin, move |batch| {
            let hero_visible = vertical_extent(HERO_ID)
                .map(|(top, bottom)| hero_in_view(top, bottom, viewport_height()))
                .unwrap_or(false);
            let next = spy.apply(batch, hero_visible, |id| vertical_extent(id).map(|(top, _)| top));
            if highlight.with_untracked(|h| *h != next) {
                set_highlight.set(next);
            }
        });
        if let Some(observer) = observer {
            observer.observe_ids(SECTIONS.iter().map(|(id, _)| *id));
            watch.set_value(Some(observer));
        }
    });

    on_cleanup(move || {
        // Dropping the watch disconnects the observer
        watch.try_update_value(|w| w.take());
    });

    view! {
        <div class="portfolio">
            <SpyNav links=SECTIONS.to_vec() highlight=highlight />

            <section id="hero" class="section hero">
                <h1>"Building fast, careful software"</h1>
                <p>"Engineer focused on systems and the web."</p>
            </section>

            <section id="about" class="section">
                <h2>"About"</h2>
                <p>"I design and ship products end to end, from storage layers to user interfaces."</p>
            </section>

            <section id="skills" class="section">
                <h2>"Skills"</h2>
                <Accordion items=SKILLS.to_vec() />
            </section>

            <section id="projects" class="section">
                <h2>"Projects"</h2>
                <ProjectShowcase cards=PROJECT_CARDS />
            </section>

            <section id="contact" class="section">
                <h2>"Contact"</h2>
                <p>"hello@example.com"</p>
            </section>
        </div>
    }
}
