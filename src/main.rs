//! cardkit desktop
//!
//! Hosts the application shell and the Card story gallery in a Dioxus
//! desktop window, or renders cards to HTML on stdout.
//!
//! ## Usage
//!
//! ```bash
//! # Open the desktop window
//! cardkit-desktop
//!
//! # List the documented stories
//! cardkit-desktop --list
//!
//! # Print a story as static HTML
//! cardkit-desktop --render simple-card-with-image
//!
//! # Render a card described in JSON (camelCase prop names)
//! cardkit-desktop --config card.json
//! ```

#![allow(non_snake_case)]

mod app;
mod cli;
mod pages;
mod theme;

use anyhow::Result;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Mode};

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.mode() {
        Mode::List => cli::list_stories(&mut std::io::stdout()),
        Mode::RenderStory(name) => cli::render_story(&name, &mut std::io::stdout()),
        Mode::RenderConfig(path) => cli::render_config(&path, &mut std::io::stdout()),
        Mode::Desktop => {
            launch_desktop(args.width, args.height);
            Ok(())
        }
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the default level
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn launch_desktop(width: f64, height: f64) {
    tracing::info!("Opening cardkit window ({}x{})", width, height);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("cardkit")
            .with_inner_size(dioxus::desktop::LogicalSize::new(width, height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
