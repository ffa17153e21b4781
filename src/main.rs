#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use greetcard_core::{CardConfig, Revision};
use tracing_subscriber::EnvFilter;

/// Configuration resolved at startup
static CARD_CONFIG: OnceLock<CardConfig> = OnceLock::new();

/// Get the card configuration (resolved from file and command line)
pub fn get_card_config() -> CardConfig {
    CARD_CONFIG.get().cloned().unwrap_or_default()
}

/// Greeting Card - an animated card that opens on click
#[derive(Parser, Debug)]
#[command(name = "greetcard-desktop")]
#[command(about = "An animated greeting card for one special recipient")]
struct Args {
    /// Card revision: classic, responsive or dialog (or 1, 2, 3)
    #[arg(short, long)]
    revision: Option<Revision>,

    /// Name the message is addressed to
    #[arg(long)]
    recipient: Option<String>,

    /// Name signed under the message
    #[arg(long)]
    sender: Option<String>,

    /// JSON config file (defaults to <config dir>/greetcard/card.json if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the ornament layout
    #[arg(long)]
    seed: Option<u64>,

    /// Window width in logical pixels
    #[arg(long)]
    width: Option<u32>,

    /// Window height in logical pixels
    #[arg(long)]
    height: Option<u32>,
}

impl Args {
    /// Command line values win over the config file.
    fn apply(self, config: &mut CardConfig) {
        if let Some(revision) = self.revision {
            config.revision = revision;
        }
        if let Some(recipient) = self.recipient {
            config.recipient = recipient;
        }
        if let Some(sender) = self.sender {
            config.sender = sender;
        }
        if let Some(seed) = self.seed {
            config.ornament_seed = seed;
        }
        if let Some(width) = self.width {
            config.window_width = width;
        }
        if let Some(height) = self.height {
            config.window_height = height;
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = Args::parse();

    let config_path = args.config.take();
    let mut config = CardConfig::load(config_path.as_deref())
        .with_context(|| match &config_path {
            Some(path) => format!("failed to load config from {}", path.display()),
            None => "failed to load default config".to_string(),
        })?;
    args.apply(&mut config);
    config.validate()?;

    tracing::info!(
        "Starting '{}' revision for {} ({}x{})",
        config.revision,
        config.recipient,
        config.window_width,
        config.window_height
    );

    let title = format!("For {}", config.recipient.trim());
    let window = WindowBuilder::new()
        .with_title(&title)
        .with_inner_size(dioxus::desktop::LogicalSize::new(
            config.window_width as f64,
            config.window_height as f64,
        ))
        .with_resizable(config.revision.policy().responsive);

    let _ = CARD_CONFIG.set(config);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_config() {
        let args = Args::try_parse_from([
            "greetcard-desktop",
            "--revision",
            "2",
            "--recipient",
            "Ada",
            "--width",
            "400",
        ])
        .unwrap();

        let mut config = CardConfig::default();
        args.apply(&mut config);
        assert_eq!(config.revision, Revision::Responsive);
        assert_eq!(config.recipient, "Ada");
        assert_eq!(config.window_width, 400);
        assert_eq!(config.window_height, 900);
    }

    #[test]
    fn unknown_revision_rejected() {
        assert!(Args::try_parse_from(["greetcard-desktop", "-r", "v9"]).is_err());
    }

    #[test]
    fn no_flags_leave_config_untouched() {
        let args = Args::try_parse_from(["greetcard-desktop"]).unwrap();
        let mut config = CardConfig::default();
        args.apply(&mut config);
        assert_eq!(config, CardConfig::default());
    }
}
