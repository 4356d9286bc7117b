use dioxus::prelude::*;

use ui::core::store::ResultStore;
use ui::views::{Compare, Home, Keywords, Transformer, Vader};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/analyze/vader")]
    Vader {},
    #[route("/analyze/transformer")]
    Transformer {},
    #[route("/analyze/keywords")]
    Keywords {},
    #[route("/compare")]
    Compare {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Results survive page navigation: the store lives above the router.
    use_context_provider(|| Signal::new(ResultStore::new()));

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// A web-specific router layout wrapping every page in the shared navbar.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        nav { class: "navbar",
            span { class: "navbar__brand", "SentiScope" }
            div { class: "navbar__links",
                Link { class: "navbar__link", to: Route::Home {}, "Home" }
                Link { class: "navbar__link", to: Route::Vader {}, "VADER" }
                Link { class: "navbar__link", to: Route::Transformer {}, "Hugging Face" }
                Link { class: "navbar__link", to: Route::Keywords {}, "Top Words" }
                Link { class: "navbar__link", to: Route::Compare {}, "Compare" }
            }
        }
        Outlet::<Route> {}
    }
}
