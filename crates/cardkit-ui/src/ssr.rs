//! Static HTML rendering
//!
//! Builds a throwaway [`VirtualDom`], rebuilds it once and serializes it
//! with `dioxus-ssr`. Used by the CLI and as the oracle in render tests.

use dioxus::prelude::*;

use crate::card::{Card, CardConfig};
use crate::shell::Shell;
use crate::stories::Story;

/// Render any root component to HTML
pub fn render_component(root: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render a single card
pub fn render_card(config: CardConfig) -> String {
    let mut dom = VirtualDom::new_with_props(StaticCard, StaticCardProps { config });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

pub fn render_shell() -> String {
    render_component(Shell)
}

/// Render a story with its name as a heading
pub fn render_story(story: &Story) -> String {
    let props = StaticStoryProps {
        name: story.name.to_string(),
        config: story.config.clone(),
    };
    let mut dom = VirtualDom::new_with_props(StaticStory, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[component]
fn StaticCard(config: CardConfig) -> Element {
    rsx! {
        Card { config: config }
    }
}

#[component]
fn StaticStory(name: String, config: CardConfig) -> Element {
    rsx! {
        section { class: "story",
            h2 { class: "story__name", "{name}" }
            Card { config: config }
        }
    }
}
