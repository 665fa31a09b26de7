use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::i18n::use_translations_provider;
use ui::preferences::use_preferences_provider;
use ui::views::Shell;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("[web] logger already initialised: {err}");
    }
    info!("starting portfolio");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Both providers must run before any view reads language or theme.
    use_preferences_provider();
    use_translations_provider();

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Shell {}
    }
}
