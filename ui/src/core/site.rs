//! Static site configuration: owner details, outbound links and layout constants.

pub const OWNER_NAME: &str = "Lino Cruz";
pub const COPYRIGHT_YEAR: u16 = 2024;

pub const CONTACT_EMAIL: &str = "linoeduardocd@gmail.com";
pub const CONTACT_PHONE: &str = "+51 943476578";
pub const CONTACT_LOCATION: &str = "cix, PE";

/// Served from the web crate's public folder.
pub const RESUME_PATH: &str = "/resume.pdf";
pub const RESUME_DOWNLOAD_NAME: &str = "LinoCruz_Resume.pdf";

pub const GITHUB_PROFILE_URL: &str = "https://github.com/LinoCruz";
pub const SOURCE_URL: &str = "https://github.com/LinoCruz/portfoliov2";
pub const VIDEOS_URL: &str = "https://www.youtube.com/results?search_query=Lino+Cruz";

/// Height compensation for the fixed navigation bar when tracking scroll.
pub const NAV_OFFSET: f64 = 100.0;

pub const LANGUAGE_STORAGE_KEY: &str = "language";
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on `<html>` while the dark theme is active.
pub const THEME_DARK_CLASS: &str = "dark";

/// DOM id of the landing page's embedded player.
pub const LANDING_PLAYER_ID: &str = "landing-player";
