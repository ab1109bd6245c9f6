//! Story gallery - every Card story in documentation order.

use cardkit_ui::stories;
use cardkit_ui::Card;
use dioxus::prelude::*;

use super::nav::NavHeader;
use crate::app::Route;

#[component]
pub fn Gallery() -> Element {
    let doc = stories::component_doc();
    let all = stories::all();
    tracing::debug!("Showing {} stories for {}", all.len(), doc.title);

    rsx! {
        NavHeader {}
        main { class: "gallery gallery--{doc.layout}",
            header { class: "gallery__header",
                h1 { class: "gallery__title", "{doc.title}" }
                p { class: "gallery__subtitle",
                    "{doc.subtitle} \u{00B7} {doc.status}"
                }
            }
            div { class: "gallery__grid",
                for story in all {
                    section { key: "{story.name}", class: "story",
                        Link {
                            class: "story__name",
                            to: Route::StoryView { name: story.slug() },
                            "{story.name}"
                        }
                        Card { config: story.config.clone() }
                    }
                }
            }
        }
    }
}
