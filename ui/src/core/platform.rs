//! Host environment glue: ambient signals (locale, color scheme), the theme
//! marker on the document root, and DOM helpers used by the views.
//!
//! Everything touching `web_sys` is gated on `wasm32`; native builds get
//! inert fallbacks so the pure logic stays testable with `cargo test`.

use std::fmt;
use std::rc::Rc;

use dioxus::prelude::{try_consume_context, use_hook};

use crate::core::site;
use crate::preferences::Theme;
use crate::sections::SectionExtent;

/// Ambient environment a preference store consults and decorates.
pub trait Host {
    /// Preferred locale string of the host (`"es-MX"`, `"en"`...), if any.
    fn locale_hint(&self) -> Option<String>;
    /// Whether the host asks for a dark color scheme.
    fn prefers_dark(&self) -> bool;
    /// Apply the visual marker style rules key on.
    fn apply_theme(&self, theme: Theme);
}

/// The running browser (or an inert stand-in on native targets).
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserHost;

impl Host for BrowserHost {
    fn locale_hint(&self) -> Option<String> {
        crate::i18n::requested_locale()
    }

    fn prefers_dark(&self) -> bool {
        prefers_dark_scheme()
    }

    fn apply_theme(&self, theme: Theme) {
        mark_root_theme(theme);
    }
}

/// Scoped event subscription. Dropping (or cancelling) the handle detaches
/// the listener exactly once.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

#[cfg(target_arch = "wasm32")]
fn listen(
    target: web_sys::EventTarget,
    event: &'static str,
    mut handler: impl FnMut() + 'static,
) -> Option<Subscription> {
    use wasm_bindgen::{closure::Closure, JsCast};

    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        handler();
    });
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .ok()?;

    Some(Subscription::new(move || {
        let _ = target.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        drop(callback);
    }))
}

/// Where views get their DOM event listeners from.
pub trait EventSource {
    fn window_scroll(&self, handler: Box<dyn FnMut()>) -> Option<Subscription>;
    fn element_event(
        &self,
        id: &str,
        event: &'static str,
        handler: Box<dyn FnMut()>,
    ) -> Option<Subscription>;
}

/// Listens on the real window and document.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserEvents;

impl EventSource for BrowserEvents {
    fn window_scroll(&self, handler: Box<dyn FnMut()>) -> Option<Subscription> {
        on_window_scroll(handler)
    }

    fn element_event(
        &self,
        id: &str,
        event: &'static str,
        handler: Box<dyn FnMut()>,
    ) -> Option<Subscription> {
        on_element_event(id, event, handler)
    }
}

/// Shared [`EventSource`] handle carried through context.
#[derive(Clone)]
pub struct Events(Rc<dyn EventSource>);

impl Events {
    pub fn new(source: Rc<dyn EventSource>) -> Self {
        Self(source)
    }

    pub fn window_scroll(&self, handler: impl FnMut() + 'static) -> Option<Subscription> {
        self.0.window_scroll(Box::new(handler))
    }

    pub fn element_event(
        &self,
        id: &str,
        event: &'static str,
        handler: impl FnMut() + 'static,
    ) -> Option<Subscription> {
        self.0.element_event(id, event, Box::new(handler))
    }
}

impl Default for Events {
    fn default() -> Self {
        Self::new(Rc::new(BrowserEvents))
    }
}

impl fmt::Debug for Events {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Events")
    }
}

/// The event source provided by an ancestor, else the browser.
pub fn use_events() -> Events {
    use_hook(|| try_consume_context::<Events>().unwrap_or_default())
}

/// Attach `handler` to window scroll events.
pub fn on_window_scroll(handler: impl FnMut() + 'static) -> Option<Subscription> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        listen(window.into(), "scroll", handler)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = handler;
        None
    }
}

/// Attach `handler` to `event` on the element with DOM id `id`.
pub fn on_element_event(
    id: &str,
    event: &'static str,
    handler: impl FnMut() + 'static,
) -> Option<Subscription> {
    #[cfg(target_arch = "wasm32")]
    {
        let element = web_sys::window()?.document()?.get_element_by_id(id)?;
        listen(element.into(), event, handler)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (id, event, handler);
        None
    }
}

pub fn scroll_y() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

/// Vertical extent of the element with DOM id `id`, if it is mounted.
pub fn element_extent(id: &str) -> Option<SectionExtent> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let element: web_sys::HtmlElement = web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into()
            .ok()?;
        Some(SectionExtent::new(
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        None
    }
}

pub fn scroll_to_element(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

pub fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    {
        use web_sys::{ScrollBehavior, ScrollToOptions};

        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Run `task` once after `delay_ms`. Dropping the handle first cancels it.
/// Native builds never run the task.
pub fn after_delay(delay_ms: u32, task: impl FnOnce() + 'static) -> Subscription {
    #[cfg(target_arch = "wasm32")]
    {
        let timeout = gloo_timers::callback::Timeout::new(delay_ms, task);
        Subscription::new(move || drop(timeout.cancel()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (delay_ms, task);
        Subscription::new(|| {})
    }
}

/// Post a string message into the iframe with DOM id `id`.
/// Returns `false` when the frame is missing or not yet loaded.
pub fn post_to_frame(id: &str, payload: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{JsCast, JsValue};

        let frame = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlIFrameElement>().ok());
        match frame.and_then(|f| f.content_window()) {
            Some(target) => target
                .post_message(&JsValue::from_str(payload), "*")
                .is_ok(),
            None => false,
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (id, payload);
        false
    }
}

/// Origin of the current page (`https://example.com`), used by embeds.
pub fn window_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.location().origin().ok()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn prefers_dark_scheme() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

fn mark_root_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let _ = root
            .class_list()
            .toggle_with_force(site::THEME_DARK_CLASS, theme.is_dark());
        let _ = root.set_attribute("data-theme", theme.code());
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (theme, site::THEME_DARK_CLASS);
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn subscription_releases_once_on_drop() {
        let released = Rc::new(Cell::new(0u32));
        let counter = released.clone();
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));
        assert_eq!(released.get(), 0);
        drop(subscription);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn cancel_is_the_same_as_drop() {
        let released = Rc::new(Cell::new(0u32));
        let counter = released.clone();
        Subscription::new(move || counter.set(counter.get() + 1)).cancel();
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn replacing_a_slot_releases_the_previous_listener() {
        let released = Rc::new(Cell::new(0u32));
        let mut slot: Option<Subscription> = None;
        for _ in 0..3 {
            let counter = released.clone();
            slot = Some(Subscription::new(move || counter.set(counter.get() + 1)));
        }
        assert_eq!(released.get(), 2);
        slot.take();
        assert_eq!(released.get(), 3);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_dom_helpers_are_inert() {
        assert_eq!(scroll_y(), 0.0);
        assert!(element_extent("projects").is_none());
        assert!(on_window_scroll(|| {}).is_none());
        assert!(!post_to_frame(site::LANDING_PLAYER_ID, "{}"));
    }
}
