//! Card configuration
//!
//! Every default lives in [`CardConfig::new`]. The serde representation uses
//! the camelCase prop names of the component API (`subTitle`, `isLink`, ...).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

/// Default card width when none is configured
pub const DEFAULT_CARD_WIDTH: &str = "300px";
/// Default card height when none is configured
pub const DEFAULT_CARD_HEIGHT: &str = "260px";

/// Visual variant of a card
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardKind {
    /// Plain box, image (if any) rendered as an `<img>`
    SimpleCard,
    /// Image painted as a CSS background behind the content
    Overlay,
}

impl CardKind {
    pub const ALL: [CardKind; 2] = [CardKind::SimpleCard, CardKind::Overlay];

    /// The kebab-case name used in class tokens and config files
    pub fn as_str(&self) -> &'static str {
        match self {
            CardKind::SimpleCard => "simple-card",
            CardKind::Overlay => "overlay",
        }
    }

    /// The variant class token, e.g. `card__box--overlay`
    pub fn class(&self) -> &'static str {
        match self {
            CardKind::SimpleCard => "card__box--simple-card",
            CardKind::Overlay => "card__box--overlay",
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardKind {
    type Err = CardError;

    fn from_str(s: &str) -> CardResult<Self> {
        CardKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CardError::UnknownKind(s.to_string()))
    }
}

/// Configuration of a single card render.
///
/// Owned by the caller and supplied fresh on every render. Empty strings are
/// treated exactly like absent values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardConfig {
    /// Search-friendly title (ideally 50 characters, max 100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Short sentence explaining the content (max 180 characters)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,
    /// Additional metadata shown above the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    /// An optimized photograph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub kind: CardKind,
    /// Render the card as a link
    #[serde(default = "default_is_link")]
    pub is_link: bool,
    /// Open the link in a new browsing context
    #[serde(default)]
    pub is_external: bool,
    /// Link target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Overrides the default width ("300px")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_width: Option<String>,
    /// Overrides the default height ("260px")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_height: Option<String>,
    /// Extra class appended after the generated ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

fn default_is_link() -> bool {
    true
}

impl CardConfig {
    /// A config of the given kind with every other field at its default
    pub fn new(kind: CardKind) -> Self {
        Self {
            title: None,
            sub_title: None,
            metadata: None,
            image: None,
            kind,
            is_link: default_is_link(),
            is_external: false,
            url: None,
            card_width: None,
            card_height: None,
            class_name: None,
        }
    }

    pub fn simple_card() -> Self {
        Self::new(CardKind::SimpleCard)
    }

    pub fn overlay() -> Self {
        Self::new(CardKind::Overlay)
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn sub_title(mut self, sub_title: impl Into<String>) -> Self {
        self.sub_title = Some(sub_title.into());
        self
    }

    pub fn metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn link(mut self, is_link: bool) -> Self {
        self.is_link = is_link;
        self
    }

    pub fn external(mut self, is_external: bool) -> Self {
        self.is_external = is_external;
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.card_width = Some(width.into());
        self
    }

    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.card_height = Some(height.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> CardResult<Self> {
        let config: CardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would escape their inline style declaration
    pub fn validate(&self) -> CardResult<()> {
        check_dimension("cardWidth", self.card_width.as_deref())?;
        check_dimension("cardHeight", self.card_height.as_deref())?;
        check_image(self.image.as_deref())?;
        Ok(())
    }

    /// Width actually applied, falling back to [`DEFAULT_CARD_WIDTH`]
    pub fn effective_width(&self) -> &str {
        present(&self.card_width).unwrap_or(DEFAULT_CARD_WIDTH)
    }

    /// Height actually applied, falling back to [`DEFAULT_CARD_HEIGHT`]
    pub fn effective_height(&self) -> &str {
        present(&self.card_height).unwrap_or(DEFAULT_CARD_HEIGHT)
    }
}

/// Treat `Some("")` like `None`
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn check_dimension(field: &'static str, value: Option<&str>) -> CardResult<()> {
    match value {
        Some(v) if v.contains([';', '"', '{', '}', '\n', '\r']) => {
            Err(CardError::InvalidDimension {
                field,
                value: v.to_string(),
            })
        }
        _ => Ok(()),
    }
}

// The image is spliced into `url(...)` unquoted.
fn check_image(value: Option<&str>) -> CardResult<()> {
    match value {
        Some(v) if v.contains([')', ';', '"', '{', '}', '\n', '\r']) => {
            Err(CardError::InvalidImage(v.to_string()))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let config = CardConfig::new(CardKind::SimpleCard);
        assert!(config.is_link);
        assert!(!config.is_external);
        assert_eq!(config.title, None);
        assert_eq!(config.effective_width(), "300px");
        assert_eq!(config.effective_height(), "260px");
    }

    #[test]
    fn test_empty_dimensions_fall_back() {
        let config = CardConfig::overlay().width("").height("");
        assert_eq!(config.effective_width(), DEFAULT_CARD_WIDTH);
        assert_eq!(config.effective_height(), DEFAULT_CARD_HEIGHT);

        let config = CardConfig::overlay().width("350px").height("400px");
        assert_eq!(config.effective_width(), "350px");
        assert_eq!(config.effective_height(), "400px");
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("simple-card".parse::<CardKind>().unwrap(), CardKind::SimpleCard);
        assert_eq!("overlay".parse::<CardKind>().unwrap(), CardKind::Overlay);
        assert!(matches!(
            "Overlay".parse::<CardKind>(),
            Err(CardError::UnknownKind(k)) if k == "Overlay"
        ));
    }

    #[test]
    fn test_kind_class() {
        for kind in CardKind::ALL {
            assert_eq!(kind.class(), format!("card__box--{}", kind));
        }
    }

    #[test]
    fn test_from_json_camel_case() {
        let config = CardConfig::from_json(
            r#"{
                "kind": "overlay",
                "subTitle": "S",
                "cardWidth": "350px",
                "isExternal": true,
                "className": "promo"
            }"#,
        )
        .unwrap();

        assert_eq!(config.kind, CardKind::Overlay);
        assert_eq!(config.sub_title.as_deref(), Some("S"));
        assert_eq!(config.card_width.as_deref(), Some("350px"));
        assert!(config.is_external);
        assert_eq!(config.class_name.as_deref(), Some("promo"));
        // isLink defaults to true when omitted
        assert!(config.is_link);
    }

    #[test]
    fn test_from_json_requires_kind() {
        assert!(matches!(
            CardConfig::from_json(r#"{"title": "T"}"#),
            Err(CardError::Json(_))
        ));
        assert!(matches!(
            CardConfig::from_json(r#"{"kind": "hero"}"#),
            Err(CardError::Json(_))
        ));
    }

    #[test]
    fn test_validate_rejects_style_escapes() {
        let config = CardConfig::simple_card().width("10px; background: red");
        assert!(matches!(
            config.validate(),
            Err(CardError::InvalidDimension { field: "cardWidth", .. })
        ));

        let config = CardConfig::simple_card().height("calc(100% - 2rem)");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_image_style_escape() {
        let config = CardConfig::overlay().image("x); position: fixed; inset: 0; (y");
        assert!(matches!(config.validate(), Err(CardError::InvalidImage(_))));

        let config = CardConfig::overlay().image("http://img/a\"b");
        assert!(matches!(config.validate(), Err(CardError::InvalidImage(_))));

        assert!(matches!(
            CardConfig::from_json(r#"{"kind": "overlay", "image": "x); color: red"}"#),
            Err(CardError::InvalidImage(_))
        ));

        let config = CardConfig::overlay().image("http://img/photo-1.jpg?w=300&h=200");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip_omits_unset_fields() {
        let config = CardConfig::simple_card().title("T");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("subTitle"));
        assert!(json.contains(r#""kind":"simple-card""#));
        assert_eq!(CardConfig::from_json(&json).unwrap(), config);
    }
}
