use clap::Parser;
use std::path::PathBuf;

use sketchboard::config::{ColorSpec, Config};
use sketchboard::input::Tool;
use sketchboard::{backend, util};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SKETCHBOARD_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "sketchboard")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Desktop drawing canvas for Wayland compositors")]
struct Cli {
    /// Read settings from this file instead of ~/.config/sketchboard/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory the save prompt starts in
    #[arg(long, short = 'o', value_name = "DIR")]
    output: Option<String>,

    /// Initial tool (freehand, line, rectangle, oval, eraser)
    #[arg(long, short = 't', value_name = "TOOL")]
    tool: Option<Tool>,

    /// Initial color: a palette name or #rrggbb
    #[arg(long, value_name = "COLOR", value_parser = parse_color)]
    color: Option<ColorSpec>,

    /// Initial brush width in pixels (1-40)
    #[arg(
        long,
        short = 'w',
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..=40)
    )]
    width: Option<u32>,
}

fn parse_color(value: &str) -> Result<ColorSpec, String> {
    match util::name_to_color(value) {
        Some(_) => Ok(ColorSpec::from(value)),
        None => Err(format!(
            "unknown color '{}' (expected a palette name or #rrggbb)",
            value
        )),
    }
}

/// Loads the configuration, falling back to defaults when it cannot be read.
fn load_config(path: Option<&PathBuf>) -> Config {
    let loaded = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {:#}. Using defaults.", e);
        Config::default()
    })
}

/// Applies command-line overrides on top of the loaded configuration.
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(dir) = &cli.output {
        config.export.save_directory = dir.clone();
    }
    if let Some(tool) = cli.tool {
        config.drawing.default_tool = tool;
    }
    if let Some(color) = &cli.color {
        config.drawing.default_color = color.clone();
    }
    if let Some(width) = cli.width {
        config.drawing.default_width = width;
    }
    config.validate_and_clamp();
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Check for Wayland environment
    if std::env::var("WAYLAND_DISPLAY").is_err() {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        log::error!("Please run inside a Wayland session (GNOME, KDE Plasma, Sway, etc.).");
        return Err(anyhow::anyhow!("WAYLAND_DISPLAY not set"));
    }

    let mut config = load_config(cli.config.as_ref());
    apply_overrides(&mut config, &cli);

    log::info!("Starting Sketchboard");
    log::info!("Press F1 for keyboard shortcuts");
    backend::run_wayland(config)?;
    log::info!("Sketchboard closed.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_config_defaults() {
        let cli = Cli::try_parse_from([
            "sketchboard",
            "--tool",
            "oval",
            "--color",
            "#00ff00",
            "--width",
            "12",
            "--output",
            "/tmp/drawings",
        ])
        .unwrap();

        let mut config = Config::default();
        apply_overrides(&mut config, &cli);
        assert_eq!(config.drawing.default_tool, Tool::Oval);
        assert_eq!(config.drawing.default_width, 12);
        assert_eq!(config.export.save_directory, "/tmp/drawings");
        assert_eq!(config.drawing.default_color, ColorSpec::from("#00ff00"));
    }

    #[test]
    fn invalid_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["sketchboard", "--width", "41"]).is_err());
        assert!(Cli::try_parse_from(["sketchboard", "--color", "mauve"]).is_err());
        assert!(Cli::try_parse_from(["sketchboard", "--tool", "spray"]).is_err());
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("absent.toml")));
        assert_eq!(config.drawing.default_width, 4);
    }
}
