use dioxus::prelude::*;
use portfolio_landing::Route;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Runs once the first render is in the document.
    use_effect(|| {
        #[cfg(target_arch = "wasm32")]
        portfolio_landing::boot::start_in_browser();
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
