//! Documentation stories for the Card component
//!
//! Named example configurations shown by the story gallery. The same
//! fixtures seed the render tests.

use crate::card::CardConfig;
use crate::error::{CardError, CardResult};

const SUB_TITLE: &str = "Food security and climate change analyses, adaptation planning, and good practices in food security adaptation programming.";
const TITLE: &str = "The Climate Adaption Mangement and Innovation Initiative";
const METADATA: &str = "Publication";
const URL: &str = "https://www.wfp.org";
const IMAGE: &str = "http://www1.wfp.org/sites/default/files/images/yemen-hero-min.jpg";

/// Documentation metadata for a component
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentDoc {
    /// Sidebar path, e.g. `Components/Card`
    pub title: &'static str,
    pub tags: &'static [&'static str],
    pub layout: &'static str,
    pub subtitle: &'static str,
    pub status: &'static str,
}

/// A named example configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Story {
    pub name: &'static str,
    pub config: CardConfig,
}

impl Story {
    /// `SimpleCardWithImage` -> `simple-card-with-image`
    pub fn slug(&self) -> String {
        slugify(self.name)
    }
}

pub fn component_doc() -> ComponentDoc {
    ComponentDoc {
        title: "Components/Card",
        tags: &["autodocs"],
        layout: "fullscreen",
        subtitle: "Component",
        status: "released",
    }
}

/// All stories in display order
pub fn all() -> Vec<Story> {
    vec![
        Story {
            name: "SimpleCard",
            config: CardConfig::simple_card()
                .sub_title(SUB_TITLE)
                .title(TITLE)
                .metadata(METADATA)
                .url(URL)
                .external(true),
        },
        Story {
            name: "SimpleCardWithImage",
            config: CardConfig::simple_card()
                .sub_title(SUB_TITLE)
                .title(TITLE)
                .metadata(METADATA)
                .image(IMAGE),
        },
        Story {
            name: "Overlay",
            config: CardConfig::overlay()
                .image(IMAGE)
                .sub_title(SUB_TITLE)
                .title(TITLE)
                .metadata(METADATA)
                .width("350px")
                .height("400px"),
        },
    ]
}

/// Look a story up by name or slug, ignoring case
pub fn find(name: &str) -> CardResult<Story> {
    let wanted = slugify(name);
    all()
        .into_iter()
        .find(|story| story.slug() == wanted)
        .ok_or_else(|| CardError::UnknownStory(name.to_string()))
}

fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for ch in name.chars() {
        let boundary = ch.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit());
        if boundary {
            slug.push('-');
        }
        match ch {
            '_' | ' ' => slug.push('-'),
            _ => slug.push(ch.to_ascii_lowercase()),
        }
        prev = Some(ch);
    }
    slug
}
