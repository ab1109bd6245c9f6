//! Single story view
//!
//! Handles `/stories/:name`, accepting story names or slugs.

use cardkit_ui::{stories, Card};
use dioxus::prelude::*;

use super::nav::NavHeader;
use crate::app::Route;

#[component]
pub fn StoryView(name: String) -> Element {
    let story = match stories::find(&name) {
        Ok(story) => story,
        Err(e) => {
            tracing::warn!("{}", e);
            return rsx! {
                NavHeader {}
                div { class: "empty-state",
                    p { class: "empty-message", "{e}" }
                    Link { class: "nav-link", to: Route::Gallery {}, "back to all stories" }
                }
            };
        }
    };

    let json = serde_json::to_string_pretty(&story.config).unwrap_or_default();

    rsx! {
        NavHeader {}
        main { class: "gallery",
            section { class: "story story--single",
                h2 { class: "story__name", "{story.name}" }
                Card { config: story.config.clone() }
                pre { class: "story__args", "{json}" }
            }
        }
    }
}
