use dioxus::prelude::*;

use crate::core::platform;
use crate::sections::{PageView, SectionId};
use crate::views::{ContactSection, LandingSection, ProjectsSection, VideosSection};

/// The portfolio page: every tracked section stacked in order.
#[component]
pub fn Home(view: Signal<PageView>) -> Element {
    // A nav click from another page selects a section before this page mounts.
    let target = use_hook(|| view.peek().active_section());
    use_effect(move || {
        if target != SectionId::Home {
            platform::scroll_to_element(target.dom_id());
        }
    });

    rsx! {
        section { id: SectionId::Home.dom_id(), class: "page-section page-section--landing",
            LandingSection { view }
        }
        section { id: SectionId::Projects.dom_id(), class: "page-section",
            ProjectsSection {}
        }
        section { id: SectionId::Videos.dom_id(), class: "page-section page-section--alt",
            VideosSection {}
        }
        section { id: SectionId::Contact.dom_id(), class: "page-section",
            ContactSection {}
        }
    }
}
