//! Page selection and scroll-spy section tracking for the single-page layout.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;

use crate::core::platform::{self, use_events, Events, Subscription};
use crate::core::site;

/// Top-level pages. The home page stacks every [`SectionId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Automation,
}

/// Regions of the home page, in top-to-bottom order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    Projects,
    Videos,
    Contact,
}

impl SectionId {
    pub const ORDERED: [SectionId; 4] = [
        SectionId::Home,
        SectionId::Projects,
        SectionId::Videos,
        SectionId::Contact,
    ];

    /// DOM id of the section's wrapper element.
    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Projects => "projects",
            SectionId::Videos => "videos",
            SectionId::Contact => "contact",
        }
    }

    /// Message key of the section's nav label.
    pub fn nav_key(self) -> &'static str {
        match self {
            SectionId::Home => "nav-home",
            SectionId::Projects => "nav-projects",
            SectionId::Videos => "nav-videos",
            SectionId::Contact => "nav-contact",
        }
    }
}

/// Vertical extent `[top, top + height)` of a rendered section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Tracks which section is "current" for nav highlighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveSectionTracker {
    active: SectionId,
    offset: f64,
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        Self::new(site::NAV_OFFSET)
    }
}

impl ActiveSectionTracker {
    pub fn new(offset: f64) -> Self {
        Self {
            active: SectionId::Home,
            offset,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Re-evaluate from a scroll offset. The first section whose extent holds
    /// `scroll_y + offset` wins; sections without an extent are skipped. With
    /// no match the previous section stays. Returns whether it changed.
    pub fn observe<F>(&mut self, scroll_y: f64, mut extent_of: F) -> bool
    where
        F: FnMut(SectionId) -> Option<SectionExtent>,
    {
        let position = scroll_y + self.offset;
        let hit = SectionId::ORDERED
            .into_iter()
            .find(|section| extent_of(*section).is_some_and(|extent| extent.contains(position)));

        match hit {
            Some(section) if section != self.active => {
                self.active = section;
                true
            }
            _ => false,
        }
    }

    pub fn select(&mut self, section: SectionId) {
        self.active = section;
    }

    pub fn reset(&mut self) {
        self.active = SectionId::Home;
    }
}

/// The page toggle plus the active-section state it governs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageView {
    page: Page,
    tracker: ActiveSectionTracker,
}

impl PageView {
    pub fn page(&self) -> Page {
        self.page
    }

    pub fn active_section(&self) -> SectionId {
        self.tracker.active()
    }

    /// Switching pages always restarts tracking at the top section.
    pub fn switch_to(&mut self, page: Page) {
        self.page = page;
        self.tracker.reset();
    }

    /// Scroll updates only count while the home page is shown.
    pub fn on_scroll<F>(&mut self, scroll_y: f64, extent_of: F) -> bool
    where
        F: FnMut(SectionId) -> Option<SectionExtent>,
    {
        self.page == Page::Home && self.tracker.observe(scroll_y, extent_of)
    }

    pub fn select_section(&mut self, section: SectionId) {
        self.tracker.select(section);
    }
}

fn measure(section: SectionId) -> Option<SectionExtent> {
    platform::element_extent(section.dom_id())
}

/// Holds the window scroll listener: at most one, and only while home shows.
#[derive(Debug)]
pub struct ScrollListener {
    events: Events,
    current: Option<Subscription>,
}

impl ScrollListener {
    pub fn new(events: Events) -> Self {
        Self {
            events,
            current: None,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.current.is_some()
    }

    /// Attach `handler` when `page` is home and nothing is attached yet;
    /// release the listener on any other page.
    pub fn follow(&mut self, page: Page, handler: impl FnMut() + 'static) {
        match page {
            Page::Home if self.current.is_none() => {
                self.current = self.events.window_scroll(handler);
            }
            Page::Home => {}
            Page::Automation => self.release(),
        }
    }

    pub fn release(&mut self) {
        self.current.take();
    }
}

/// Keep `view`'s active section in sync with the window scroll position.
///
/// Only scroll events move the highlight; nothing is measured on mount, so a
/// freshly reset view stays on [`SectionId::Home`] until the user scrolls.
pub fn use_section_spy(view: Signal<PageView>) {
    let events = use_events();
    let listener = use_hook(|| Rc::new(RefCell::new(ScrollListener::new(events))));

    {
        let listener = listener.clone();
        use_drop(move || {
            listener.borrow_mut().release();
        });
    }

    use_effect(move || {
        let page = view.read().page();
        listener.borrow_mut().follow(page, move || {
            let mut view = view;
            let changed = view.with_mut(|v| v.on_scroll(platform::scroll_y(), measure));
            if changed {
                debug!(section = ?view.peek().active_section(), "active section changed");
            }
        });
    });
}

/// Switch pages from a UI action: reset tracking and return to the top.
pub fn go_to_page(mut view: Signal<PageView>, page: Page) {
    view.with_mut(|v| v.switch_to(page));
    platform::scroll_to_top();
}

/// Jump to a home-page section from a UI action.
pub fn go_to_section(mut view: Signal<PageView>, section: SectionId) {
    view.with_mut(|v| {
        if v.page() != Page::Home {
            v.switch_to(Page::Home);
        }
        v.select_section(section);
    });
    platform::scroll_to_element(section.dom_id());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::platform::test_support::CountingEvents;
    use std::cell::Cell;

    fn layout(section: SectionId) -> Option<SectionExtent> {
        Some(match section {
            SectionId::Home => SectionExtent::new(0.0, 800.0),
            SectionId::Projects => SectionExtent::new(800.0, 1200.0),
            SectionId::Videos => SectionExtent::new(2000.0, 1000.0),
            SectionId::Contact => SectionExtent::new(3000.0, 1000.0),
        })
    }

    #[test]
    fn picks_section_containing_offset_position() {
        let mut tracker = ActiveSectionTracker::new(100.0);

        tracker.observe(750.0, layout);
        assert_eq!(tracker.active(), SectionId::Projects);

        tracker.observe(2950.0, layout);
        assert_eq!(tracker.active(), SectionId::Contact);

        tracker.observe(-50.0, layout);
        assert_eq!(tracker.active(), SectionId::Home);
    }

    #[test]
    fn boundaries_are_half_open() {
        let mut tracker = ActiveSectionTracker::new(100.0);
        tracker.observe(700.0, layout);
        assert_eq!(tracker.active(), SectionId::Projects);
        tracker.observe(699.0, layout);
        assert_eq!(tracker.active(), SectionId::Home);
    }

    #[test]
    fn no_match_keeps_previous_section() {
        let mut tracker = ActiveSectionTracker::new(100.0);
        tracker.observe(2100.0, layout);
        assert_eq!(tracker.active(), SectionId::Videos);

        assert!(!tracker.observe(10_000.0, layout));
        assert_eq!(tracker.active(), SectionId::Videos);
    }

    #[test]
    fn missing_sections_are_skipped() {
        let mut tracker = ActiveSectionTracker::new(100.0);
        let partial = |section: SectionId| match section {
            SectionId::Projects => None,
            other => layout(other),
        };
        tracker.observe(900.0, partial);
        assert_eq!(tracker.active(), SectionId::Home);
        tracker.observe(2100.0, partial);
        assert_eq!(tracker.active(), SectionId::Videos);
    }

    #[test]
    fn first_match_wins_for_overlapping_extents() {
        let mut tracker = ActiveSectionTracker::new(0.0);
        tracker.select(SectionId::Contact);
        let overlapping = |section: SectionId| match section {
            SectionId::Projects | SectionId::Videos => Some(SectionExtent::new(0.0, 100.0)),
            _ => None,
        };
        assert!(tracker.observe(50.0, overlapping));
        assert_eq!(tracker.active(), SectionId::Projects);
    }

    #[test]
    fn scroll_ignored_off_home_page() {
        let mut view = PageView::default();
        view.switch_to(Page::Automation);
        assert!(!view.on_scroll(2100.0, layout));
        assert_eq!(view.active_section(), SectionId::Home);
    }

    #[test]
    fn leaving_and_returning_home_resets_section() {
        let mut view = PageView::default();
        view.on_scroll(3050.0, layout);
        assert_eq!(view.active_section(), SectionId::Contact);

        view.switch_to(Page::Automation);
        assert_eq!(view.active_section(), SectionId::Home);

        view.switch_to(Page::Home);
        assert_eq!(view.page(), Page::Home);
        assert_eq!(view.active_section(), SectionId::Home);
    }

    #[test]
    fn dom_ids_are_unique() {
        let mut ids: Vec<_> = SectionId::ORDERED.iter().map(|s| s.dom_id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), SectionId::ORDERED.len());
    }

    #[test]
    fn listener_attaches_once_per_home_visit() {
        let events = Rc::new(CountingEvents::default());
        let mut listener = ScrollListener::new(Events::new(events.clone()));

        listener.follow(Page::Home, || {});
        listener.follow(Page::Home, || {});
        assert!(listener.is_attached());
        assert_eq!(events.counts(), (1, 0));

        listener.follow(Page::Automation, || {});
        assert!(!listener.is_attached());
        assert_eq!(events.counts(), (1, 1));

        listener.follow(Page::Automation, || {});
        listener.follow(Page::Home, || {});
        assert_eq!(events.counts(), (2, 1));

        drop(listener);
        assert_eq!(events.counts(), (2, 2));
    }

    #[derive(Clone, Default)]
    struct SpyHarness {
        view: Rc<Cell<Option<Signal<PageView>>>>,
    }

    fn spy_app(harness: SpyHarness) -> Element {
        let view = use_signal(PageView::default);
        harness.view.set(Some(view));
        use_section_spy(view);
        rsx! { div {} }
    }

    fn settle(dom: &mut VirtualDom) {
        for _ in 0..3 {
            let _ = dom.render_immediate_to_vec();
            dom.process_events();
        }
    }

    #[test]
    fn spy_listener_follows_page_switches_and_unmount() {
        let events = Rc::new(CountingEvents::default());
        let harness = SpyHarness::default();
        let mut dom = VirtualDom::new_with_props(spy_app, harness.clone())
            .with_root_context(Events::new(events.clone()));
        dom.rebuild_in_place();
        settle(&mut dom);
        assert_eq!(events.counts(), (1, 0));

        let view = harness.view.get().expect("spy mounted");
        dom.in_runtime(|| go_to_page(view, Page::Automation));
        settle(&mut dom);
        assert_eq!(events.counts(), (1, 1));

        dom.in_runtime(|| go_to_page(view, Page::Home));
        settle(&mut dom);
        assert_eq!(events.counts(), (2, 1));
        assert_eq!(dom.in_runtime(|| view.peek().active_section()), SectionId::Home);

        dom.in_runtime(|| go_to_section(view, SectionId::Videos));
        settle(&mut dom);
        assert_eq!(events.counts(), (2, 1));
        assert_eq!(dom.in_runtime(|| view.peek().active_section()), SectionId::Videos);

        drop(dom);
        assert_eq!(events.counts(), (2, 2));
    }
}
