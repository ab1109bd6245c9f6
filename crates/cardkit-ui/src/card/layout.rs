//! Pure class and style derivation for [`Card`](super::Card).

use crate::class_list::ClassList;

use super::config::{present, CardConfig, CardKind};

pub const BASE_CLASS: &str = "card__box";
pub const LINK_CLASS: &str = "card__box--link";

/// Link wrapping applied when the card renders as a link
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkWrap {
    /// `href`; `None` renders a link with no target (inert but harmless)
    pub href: Option<String>,
    /// Opens in a new browsing context (`target="_blank"`)
    pub new_tab: bool,
    /// Inline `width` / `min-height` style shared by container and link
    pub size_style: String,
}

impl LinkWrap {
    /// Value of the `target` attribute, if any
    pub fn target(&self) -> Option<&'static str> {
        self.new_tab.then_some("_blank")
    }
}

/// Everything the renderer derives from a [`CardConfig`] before emitting markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardLayout {
    pub classes: ClassList,
    /// `background-image` declaration, overlay cards only
    pub background_style: Option<String>,
    /// `(src, alt)` of the photo, simple cards with an image only
    pub photo: Option<(String, Option<String>)>,
    pub metadata: Option<String>,
    pub title: Option<String>,
    pub sub_title: Option<String>,
    /// `Some` when the content is wrapped in a link
    pub link: Option<LinkWrap>,
}

impl CardLayout {
    pub fn compose(config: &CardConfig) -> Self {
        let classes = ClassList::new(BASE_CLASS)
            .with(config.kind.class())
            .with_if(config.is_link, LINK_CLASS)
            .with_opt(present(&config.class_name));

        // Overlays are painted even without an image; url() stays empty.
        let background_style = (config.kind == CardKind::Overlay).then(|| {
            format!(
                "background-image: url({});",
                config.image.as_deref().unwrap_or_default()
            )
        });

        let photo = match (config.kind, present(&config.image)) {
            // An explicitly empty title still yields alt="" (decorative image).
            (CardKind::SimpleCard, Some(src)) => Some((src.to_string(), config.title.clone())),
            _ => None,
        };

        let link = config.is_link.then(|| LinkWrap {
            href: present(&config.url).map(str::to_string),
            new_tab: config.is_external,
            size_style: format!(
                "width: {}; min-height: {};",
                config.effective_width(),
                config.effective_height()
            ),
        });

        Self {
            classes,
            background_style,
            photo,
            metadata: present(&config.metadata).map(str::to_string),
            title: present(&config.title).map(str::to_string),
            sub_title: present(&config.sub_title).map(str::to_string),
            link,
        }
    }

    pub fn is_overlay(&self) -> bool {
        self.background_style.is_some()
    }
}
