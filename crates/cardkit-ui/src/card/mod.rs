//! Card Component
//!
//! Cards display content composed of different kinds of objects. They are
//! multi-purpose boxes, usually teasing some content behind a link.
//!
//! Two variants:
//! - `simple-card`: the image (if any) is an `<img>` above the info block
//! - `overlay`: the image is a background, painted behind the whole card and
//!   again inside the info block

mod config;
mod layout;

use dioxus::prelude::*;

pub use config::{CardConfig, CardKind, DEFAULT_CARD_HEIGHT, DEFAULT_CARD_WIDTH};
pub use layout::{CardLayout, LinkWrap, BASE_CLASS, LINK_CLASS};

/// Renders a card from its configuration
///
/// # Design Notes
///
/// - Classes: `card__box`, `card__box--{kind}`, `card__box--link` when
///   linked, then the caller's `class_name`
/// - Linked cards get `width` / `min-height` on both the container and the
///   link; unlinked cards get no size style at all
/// - Extra attributes go to the link when linked, to the container otherwise
/// - Children are appended after the info block
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Card {
///         config: CardConfig::simple_card()
///             .metadata("Publication")
///             .title("Climate Adaptation")
///             .url("https://www.wfp.org")
///             .external(true),
///         "aria-label": "Climate Adaptation",
///         span { class: "card__badge", "new" }
///     }
/// }
/// ```
#[component]
pub fn Card(
    /// What to render
    config: CardConfig,
    /// Pass-through attributes
    #[props(extends = GlobalAttributes)]
    attributes: Vec<Attribute>,
    /// Rendered after the info block
    children: Element,
) -> Element {
    let layout = CardLayout::compose(&config);
    tracing::trace!(
        kind = %config.kind,
        linked = layout.link.is_some(),
        "rendering card"
    );

    let classes = layout.classes.to_string();
    let overlay = layout.is_overlay();
    let background = layout.background_style.clone().unwrap_or_default();

    let content = rsx! {
        if overlay {
            div { class: "card__box__background", style: "{background}" }
        }

        if let Some((src, alt)) = &layout.photo {
            img {
                src: "{src}",
                alt: alt.clone(),
                class: "demo--header-photo",
            }
        }

        div { class: "card__box__info",
            div {
                if overlay {
                    div { class: "card__box__info__background", style: "{background}" }
                }
                if let Some(metadata) = &layout.metadata {
                    p { class: "card__box__info__metadata", "{metadata}" }
                }
                if let Some(title) = &layout.title {
                    h3 { class: "card__box__info__title", "{title}" }
                }
                if let Some(sub_title) = &layout.sub_title {
                    p { class: "card__box__info__subtitle", "{sub_title}" }
                }
            }
        }

        {children}
    };

    match layout.link {
        Some(link) => rsx! {
            div {
                class: "{classes}",
                style: "{link.size_style}",
                a {
                    href: link.href.clone(),
                    target: link.target(),
                    style: "{link.size_style}",
                    ..attributes,
                    {content}
                }
            }
        },
        None => rsx! {
            div {
                class: "{classes}",
                ..attributes,
                {content}
            }
        },
    }
}
