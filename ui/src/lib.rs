//! Shared UI crate for the portfolio site. Preferences, translations, content
//! and every view live here; platform crates only mount [`views::Shell`].

pub mod content;
pub mod core;
pub mod i18n;
pub mod preferences;
pub mod sections;
pub mod views;

pub mod components {
    // Top bar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    mod project_card;
    mod site_footer;
    mod toggles;
    mod video_card;

    pub use project_card::ProjectCard;
    pub use site_footer::SiteFooter;
    pub use toggles::{LanguageSwitch, ThemeToggle};
    pub use video_card::VideoCard;
}
