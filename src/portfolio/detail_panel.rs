//! Project detail slide-in panel.
//!
//! Opening shows the panel first and adds the `active` class a moment later
//! so the slide transition has a starting frame. Closing drops `active`
//! and only hides the panel once the transition reports it has finished.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use leptos_subscriptions::ElementListener;

use crate::context::use_app_context;
use crate::models::ProjectRecord;
use crate::portfolio::projects::find_project;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelPhase {
    #[default]
    Hidden,
    /// Displayed, waiting for the activation tick
    Revealed,
    Active,
    /// `active` removed, waiting for the transition to end
    Closing,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelState {
    record: Option<ProjectRecord>,
    phase: PanelPhase,
}

impl PanelState {
    pub fn record(&self) -> Option<&ProjectRecord> {
        self.record.as_ref()
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    /// Populate and reveal. Unknown ids leave the panel untouched; an
    /// already active panel only swaps its record and stays active.
    pub fn open<F>(&mut self, id: &str, lookup: F) -> bool
    where
        F: FnOnce(&str) -> Option<ProjectRecord>,
    {
        match lookup(id) {
            Some(record) => {
                self.record = Some(record);
                if self.phase != PanelPhase::Active {
                    self.phase = PanelPhase::Revealed;
                }
                true
            }
            None => false,
        }
    }

    /// Whether the activation tick is still owed
    pub fn awaiting_activation(&self) -> bool {
        self.phase == PanelPhase::Revealed
    }

    pub fn activate(&mut self) -> bool {
        if self.phase == PanelPhase::Revealed {
            self.phase = PanelPhase::Active;
            true
        } else {
            false
        }
    }

    pub fn close(&mut self) -> bool {
        match self.phase {
            PanelPhase::Revealed | PanelPhase::Active => {
                self.phase = PanelPhase::Closing;
                true
            }
            _ => false,
        }
    }

    pub fn transition_finished(&mut self) -> bool {
        if self.phase == PanelPhase::Closing {
            self.phase = PanelPhase::Hidden;
            true
        } else {
            false
        }
    }

    pub fn class(&self) -> &'static str {
        match self.phase {
            PanelPhase::Hidden => "detail-panel hidden",
            PanelPhase::Active => "detail-panel active",
            PanelPhase::Revealed | PanelPhase::Closing => "detail-panel",
        }
    }
}

/// Grid of project cards plus the detail panel they open
#[component]
pub fn ProjectShowcase(
    /// `(id, title, teaser)`
    cards: &'static [(&'static str, &'static str, &'static str)],
) -> impl IntoView {
    let open_delay = use_app_context().with_config(|c| c.panel_open_delay_ms);
    let state = RwSignal::new(PanelState::default());
    let panel_ref = NodeRef::<html::Div>::new();
    let open_timer = StoredValue::new_local(None::<Timeout>);
    let closing_listener = StoredValue::new_local(None::<ElementListener>);

    on_cleanup(move || {
        open_timer.try_update_value(|t| t.take());
        closing_listener.try_update_value(|l| l.take());
    });

    let show_details = move |id: &'static str| {
        let opened = state.try_update(|s| s.open(id, find_project)).unwrap_or(false);
        if !opened {
            log::debug!("[PANEL] No record for `{}`", id);
            return;
        }
        // A close still in flight must not hide the panel we just opened
        closing_listener.update_value(|l| {
            l.take();
        });
        if !state.with_untracked(PanelState::awaiting_activation) {
            return;
        }
        let timer = Timeout::new(open_delay, move || {
            state.try_update(PanelState::activate);
        });
        open_timer.set_value(Some(timer));
    };

    let hide_details = move |_| {
        // A pending activation would re-open the panel mid-close
        open_timer.update_value(|t| {
            t.take();
        });
        if !state.try_update(PanelState::close).unwrap_or(false) {
            return;
        }
        let Some(el) = panel_ref.get_untracked() else {
            state.update(|s| {
                s.transition_finished();
            });
            return;
        };
        let target: &web_sys::EventTarget = el.as_ref();
        let listener = ElementListener::once(target, "transitionend", move |_| {
            state.try_update(PanelState::transition_finished);
        });
        closing_listener.set_value(listener);
    };

    let field = move |pick: fn(&ProjectRecord) -> &String| {
        move || state.with(|s| s.record().map(|r| pick(r).clone()))
    };

    view! {
        <div class="project-grid">
            {cards.iter().map(|&(id, title, teaser)| view! {
                <div class="project-card" data-project-id=id on:click=move |_| show_details(id)>
                    <h3>{title}</h3>
                    <p>{teaser}</p>
                </div>
            }).collect_view()}
        </div>

        <div id="project-details-panel" class=move || state.with(PanelState::class) node_ref=panel_ref>
            <button class="close-btn" on:click=hide_details>"×"</button>
            <h2 id="detail-title">{field(|r| &r.title)}</h2>
            <span id="detail-status" class="status-pill">{field(|r| &r.status)}</span>
            <p id="detail-description">{field(|r| &r.description)}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_id_is_noop() {
        let mut p = PanelState::default();
        assert!(!p.open("nope", find_project));
        assert_eq!(p, PanelState::default());

        p.open("parallelai", find_project);
        p.activate();
        let before = p.clone();
        assert!(!p.open("project4", find_project));
        assert_eq!(p, before);
    }

    #[test]
    fn test_open_populates_then_activates() {
        let mut p = PanelState::default();
        assert!(p.open("overcoffee", find_project));
        let rec = p.record().unwrap();
        assert_eq!(rec.title, "Over Coffee");
        assert_eq!(rec.status, "LIVE");
        assert!(rec.description.starts_with("A social networking app"));
        assert_eq!(p.class(), "detail-panel");
        assert!(p.activate());
        assert_eq!(p.phase(), PanelPhase::Active);
        assert_eq!(p.class(), "detail-panel active");
    }

    #[test]
    fn test_close_waits_for_transition() {
        let mut p = PanelState::default();
        p.open("parallelai", find_project);
        p.activate();
        assert!(p.close());
        assert_eq!(p.class(), "detail-panel");
        assert!(p.transition_finished());
        assert_eq!(p.class(), "detail-panel hidden");
        assert!(!p.transition_finished());
    }

    #[test]
    fn test_transition_end_ignored_while_open() {
        let mut p = PanelState::default();
        p.open("parallelai", find_project);
        p.activate();
        assert!(!p.transition_finished());
        assert_eq!(p.phase(), PanelPhase::Active);
    }

    #[test]
    fn test_reopen_while_active_swaps_record_only() {
        let mut p = PanelState::default();
        p.open("parallelai", find_project);
        p.activate();
        assert!(p.open("overcoffee", find_project));
        assert_eq!(p.phase(), PanelPhase::Active);
        assert_eq!(p.class(), "detail-panel active");
        assert!(!p.awaiting_activation());
        assert_eq!(p.record().map(|r| r.title.as_str()), Some("Over Coffee"));
    }

    #[test]
    fn test_reopen_while_closing_reveals_again() {
        let mut p = PanelState::default();
        p.open("parallelai", find_project);
        p.activate();
        p.close();
        assert!(p.open("overcoffee", find_project));
        assert!(p.awaiting_activation());
        assert!(p.activate());
        assert!(!p.transition_finished());
        assert_eq!(p.class(), "detail-panel active");
    }

    #[test]
    fn test_stale_activation_after_close() {
        let mut p = PanelState::default();
        p.open("parallelai", find_project);
        p.close();
        assert!(!p.activate());
        assert_eq!(p.phase(), PanelPhase::Closing);
    }
}
