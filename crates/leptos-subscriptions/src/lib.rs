//! Leptos Subscription Guards
//!
//! RAII handles for DOM subscriptions that leptos has no helper for.
//! Each guard owns the JS closure it registered; dropping the guard
//! removes the listener or disconnects the observer.
//!
//! Guards are `!Send`, so components keep them in
//! `StoredValue::new_local` and clear that slot in `on_cleanup`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Look up an element by id in the current document
pub fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// `(top, bottom)` of an element's bounding client rect
pub fn vertical_extent(id: &str) -> Option<(f64, f64)> {
    let rect = element_by_id(id)?.get_bounding_client_rect();
    Some((rect.top(), rect.bottom()))
}

/// Viewport height in CSS pixels (0.0 when unavailable)
pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Listener on an arbitrary event target, removed on drop
pub struct ElementListener {
    target: web_sys::EventTarget,
    event: String,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl ElementListener {
    /// Register `handler` for the first `event` only.
    ///
    /// The browser detaches the listener after it fires; dropping the guard
    /// before that detaches it early.
    pub fn once<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Option<Self>
    where
        F: FnOnce(web_sys::Event) + 'static,
    {
        let mut handler = Some(handler);
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            if let Some(handler) = handler.take() {
                handler(ev);
            }
        });

        let options = web_sys::AddEventListenerOptions::new();
        options.set_once(true);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;

        Some(Self {
            target: target.clone(),
            event: event.to_string(),
            callback,
        })
    }
}

impl Drop for ElementListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(&self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// One observed entry, copied out of the JS object
#[derive(Clone, Debug, PartialEq)]
pub struct Intersection {
    pub id: String,
    pub is_intersecting: bool,
    /// `boundingClientRect.top` at observation time
    pub top: f64,
}

/// `IntersectionObserver` wrapper, disconnected on drop
pub struct IntersectionWatch {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl IntersectionWatch {
    /// Create an observer on the viewport with the given root margin.
    ///
    /// `handler` receives each batch in the order the browser delivered it.
    pub fn new<F>(root_margin: &str, mut handler: F) -> Option<Self>
    where
        F: FnMut(Vec<Intersection>) + 'static,
    {
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                    .map(|entry| Intersection {
                        id: entry.target().id(),
                        is_intersecting: entry.is_intersecting(),
                        top: entry.bounding_client_rect().top(),
                    })
                    .collect();
                handler(batch);
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        let observer = match web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("[subscriptions] IntersectionObserver unavailable: {:?}", err);
                return None;
            }
        };

        Some(Self {
            observer,
            _callback: callback,
        })
    }

    /// Start observing `target`
    pub fn observe(&self, target: &web_sys::Element) {
        self.observer.observe(target);
    }

    /// Observe every element id that exists in the document; missing ids are skipped
    pub fn observe_ids<'a>(&self, ids: impl IntoIterator<Item = &'a str>) {
        for id in ids {
            match element_by_id(id) {
                Some(el) => self.observe(&el),
                None => log::debug!("[subscriptions] no element #{} to observe", id),
            }
        }
    }
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
