use dioxus::prelude::*;

use crate::components::{AppNavbar, SiteFooter};
use crate::sections::{use_section_spy, Page, PageView};
use crate::views::{AutomationPage, Home};

/// Root layout. Owns the page toggle and the scroll-driven section state.
#[component]
pub fn Shell() -> Element {
    let view = use_signal(PageView::default);
    use_section_spy(view);
    let page = view.read().page();

    rsx! {
        AppNavbar { view }
        main { class: "site-main",
            if page == Page::Home {
                Home { view }
            } else {
                AutomationPage {}
            }
        }
        if page == Page::Home {
            SiteFooter {}
        }
    }
}
