//! Command-line arguments and the non-window modes.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cardkit_ui::{ssr, stories, CardConfig};
use clap::Parser;

/// cardkit - Card components with a story gallery
#[derive(Parser, Debug)]
#[command(name = "cardkit-desktop")]
#[command(about = "Card component gallery and static renderer")]
pub struct Args {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print the available story names and exit
    #[arg(short, long)]
    pub list: bool,

    /// Print a story as HTML and exit
    #[arg(short, long, value_name = "STORY", conflicts_with = "list")]
    pub render: Option<String>,

    /// Render a card from a JSON config file and exit
    #[arg(short, long, value_name = "PATH", conflicts_with_all = ["list", "render"])]
    pub config: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 700.0)]
    pub width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    pub height: f64,
}

/// What the binary does for a given set of arguments
#[derive(Debug, PartialEq)]
pub enum Mode {
    List,
    RenderStory(String),
    RenderConfig(PathBuf),
    Desktop,
}

impl Args {
    pub fn mode(&self) -> Mode {
        if self.list {
            Mode::List
        } else if let Some(name) = &self.render {
            Mode::RenderStory(name.clone())
        } else if let Some(path) = &self.config {
            Mode::RenderConfig(path.clone())
        } else {
            Mode::Desktop
        }
    }
}

pub fn list_stories(out: &mut impl Write) -> Result<()> {
    let doc = stories::component_doc();
    writeln!(out, "{} ({})", doc.title, doc.status)?;
    for story in stories::all() {
        writeln!(out, "  {:<22} {}", story.name, story.slug())?;
    }
    Ok(())
}

pub fn render_story(name: &str, out: &mut impl Write) -> Result<()> {
    let story = stories::find(name)?;
    tracing::debug!("Rendering story {}", story.name);
    writeln!(out, "{}", ssr::render_story(&story))?;
    Ok(())
}

pub fn render_config(path: &Path, out: &mut impl Write) -> Result<()> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read card config {}", path.display()))?;
    let config = CardConfig::from_json(&json)
        .with_context(|| format!("Invalid card config {}", path.display()))?;
    tracing::debug!("Rendering {} card from {}", config.kind, path.display());
    writeln!(out, "{}", ssr::render_card(config))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("cardkit-desktop").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_mode_selection() {
        assert_eq!(parse(&[]).mode(), Mode::Desktop);
        assert_eq!(parse(&["--list"]).mode(), Mode::List);
        assert_eq!(
            parse(&["--render", "overlay"]).mode(),
            Mode::RenderStory("overlay".to_string())
        );
        assert_eq!(
            parse(&["-c", "card.json"]).mode(),
            Mode::RenderConfig(PathBuf::from("card.json"))
        );
    }

    #[test]
    fn test_conflicting_modes_rejected() {
        let result = Args::try_parse_from(["cardkit-desktop", "--list", "--render", "overlay"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_window_defaults() {
        let args = parse(&["-vv"]);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.width, 700.0);
        assert_eq!(args.height, 900.0);
    }

    #[test]
    fn test_list_stories() {
        let mut out = Vec::new();
        list_stories(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Components/Card (released)"));
        assert!(text.contains("SimpleCardWithImage"));
        assert!(text.contains("simple-card-with-image"));
    }

    #[test]
    fn test_render_unknown_story() {
        let mut out = Vec::new();
        let err = render_story("Hero", &mut out).unwrap_err();
        assert_eq!(err.to_string(), "Unknown story: Hero");
        assert!(out.is_empty());
    }

    #[test]
    fn test_render_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.json");
        std::fs::write(&path, r#"{"kind": "overlay", "title": "T", "isLink": false}"#).unwrap();

        let mut out = Vec::new();
        render_config(&path, &mut out).unwrap();
        let html = String::from_utf8(out).unwrap();
        assert!(html.contains(r#"class="card__box card__box--overlay""#));
        assert!(html.contains("card__box__info__title"));
        assert!(!html.contains("<a"));
    }

    #[test]
    fn test_render_config_rejects_bad_dimension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.json");
        std::fs::write(&path, r#"{"kind": "simple-card", "cardWidth": "1px; color: red"}"#)
            .unwrap();

        let err = render_config(&path, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().starts_with("Invalid card config"));
        assert!(format!("{:#}", err).contains("Invalid cardWidth"));
    }

    #[test]
    fn test_render_config_rejects_image_style_escape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.json");
        std::fs::write(
            &path,
            r#"{"kind": "overlay", "image": "x); position: fixed; inset: 0; z-index: 9999; (y"}"#,
        )
        .unwrap();

        let mut out = Vec::new();
        let err = render_config(&path, &mut out).unwrap_err();
        assert!(err.to_string().starts_with("Invalid card config"));
        assert!(format!("{:#}", err).contains("Invalid image"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_render_config_missing_file() {
        let err = render_config(Path::new("/nonexistent/card.json"), &mut Vec::new()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read card config"));
    }
}
