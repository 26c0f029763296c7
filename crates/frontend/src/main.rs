mod components;
mod coords;
mod pages;

use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/squad/:positions")]
    SquadView { positions: String },
}

#[component]
fn Home() -> Element {
    rsx! {
        pages::profile::Profile { initial_positions: None::<String> }
    }
}

#[component]
fn SquadView(positions: String) -> Element {
    rsx! {
        pages::profile::Profile { initial_positions: Some(positions) }
    }
}

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: CSS }
        Router::<Route> {}
    }
}

fn main() {
    dioxus::logger::initialize_default();
    launch(App);
}
