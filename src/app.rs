use dioxus::prelude::*;

use crate::pages::{Gallery, Home, StoryView};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The application shell
/// - `/stories` - Every Card story, in documentation order
/// - `/stories/:name` - A single story by slug
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/stories")]
    Gallery {},
    #[route("/stories/:name")]
    StoryView { name: String },
}

/// Root application component.
///
/// Provides global styles and routing.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
