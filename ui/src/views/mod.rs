mod automation;
mod contact;
mod home;
mod landing;
mod projects;
mod shell;
mod videos;

pub use automation::AutomationPage;
pub use contact::ContactSection;
pub use home::Home;
pub use landing::LandingSection;
pub use projects::ProjectsSection;
pub use shell::Shell;
pub use videos::VideosSection;
