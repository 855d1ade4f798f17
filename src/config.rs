//! Launch options for the GUI.

use crate::layout::{LayoutSelector, ViewportClass, DEFAULT_BREAKPOINT};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct LaunchConfig {
    /// Content JSON to load instead of the bundled content
    pub content_path: Option<PathBuf>,
    /// Built-in theme to start with, overriding the saved preference
    pub theme: Option<String>,
    /// Wide/narrow threshold in logical pixels
    pub breakpoint: f32,
    /// Pins the layout regardless of window width
    pub forced_layout: Option<ViewportClass>,
    /// Skips entrance and panel animations
    pub reduce_motion: bool,
    pub show_help: bool,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            content_path: None,
            theme: None,
            breakpoint: DEFAULT_BREAKPOINT,
            forced_layout: None,
            reduce_motion: false,
            show_help: false,
        }
    }
}

impl LaunchConfig {
    /// Parses options from process arguments (without the program name).
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut config = LaunchConfig::default();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--content" => {
                    i += 1;
                    if i >= args.len() {
                        anyhow::bail!("--content requires a file path argument");
                    }
                    config.content_path = Some(PathBuf::from(&args[i]));
                }
                "--theme" => {
                    i += 1;
                    if i >= args.len() {
                        anyhow::bail!("--theme requires a theme name");
                    }
                    config.theme = Some(args[i].clone());
                }
                "--breakpoint" => {
                    i += 1;
                    if i >= args.len() {
                        anyhow::bail!("--breakpoint requires a width in pixels");
                    }
                    let breakpoint: f32 = args[i]
                        .parse()
                        .with_context(|| format!("invalid breakpoint '{}'", args[i]))?;
                    if !(breakpoint.is_finite() && breakpoint > 0.0) {
                        anyhow::bail!("breakpoint must be a positive width, got {}", breakpoint);
                    }
                    config.breakpoint = breakpoint;
                }
                "--layout" => {
                    i += 1;
                    if i >= args.len() {
                        anyhow::bail!("--layout requires wide or narrow");
                    }
                    let class = args[i].parse::<ViewportClass>().map_err(anyhow::Error::msg)?;
                    config.forced_layout = Some(class);
                }
                "--reduce-motion" => {
                    config.reduce_motion = true;
                }
                "-h" | "--help" => {
                    config.show_help = true;
                }
                other => {
                    tracing::warn!(argument = other, "ignoring unknown argument");
                }
            }
            i += 1;
        }

        Ok(config)
    }

    pub fn layout_selector(&self) -> LayoutSelector {
        LayoutSelector::new(self.breakpoint).with_forced(self.forced_layout)
    }

    pub fn usage() -> &'static str {
        "Portfolio Viewer\n\
         Usage: folio-gui [OPTIONS]\n\
         \n\
         OPTIONS:\n\
         \x20 --content <PATH>      Load portfolio content from a JSON file\n\
         \x20 --theme <NAME>        Start with a built-in theme (Dark, Dracula, Light, Nord, Serika)\n\
         \x20 --breakpoint <PX>     Width at which the wide layout is used (default: 768)\n\
         \x20 --layout <wide|narrow> Always use one layout\n\
         \x20 --reduce-motion       Show everything in its final state without animating\n\
         \x20 -h, --help            Show this help"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LaunchConfig::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, LaunchConfig::default());
        assert_eq!(config.layout_selector().classify(800.0), ViewportClass::Wide);
    }

    #[test]
    fn test_all_options() {
        let config = LaunchConfig::from_args([
            "--content", "me.json", "--theme", "Nord", "--breakpoint", "1024", "--layout", "narrow",
            "--reduce-motion",
        ])
        .unwrap();
        assert_eq!(config.content_path, Some(PathBuf::from("me.json")));
        assert_eq!(config.theme.as_deref(), Some("Nord"));
        assert_eq!(config.breakpoint, 1024.0);
        assert_eq!(config.forced_layout, Some(ViewportClass::Narrow));
        assert!(config.reduce_motion);
        assert_eq!(config.layout_selector().classify(2000.0), ViewportClass::Narrow);
    }

    #[test]
    fn test_missing_values_fail() {
        assert!(LaunchConfig::from_args(["--content"]).is_err());
        assert!(LaunchConfig::from_args(["--theme"]).is_err());
        assert!(LaunchConfig::from_args(["--breakpoint", "wide"]).is_err());
        assert!(LaunchConfig::from_args(["--breakpoint", "-5"]).is_err());
        assert!(LaunchConfig::from_args(["--layout", "tall"]).is_err());
    }

    #[test]
    fn test_unknown_arguments_are_ignored() {
        let config = LaunchConfig::from_args(["--verbose", "-h"]).unwrap();
        assert!(config.show_help);
    }
}
