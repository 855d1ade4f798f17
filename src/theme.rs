//! Theme support module for the portfolio GUI
//!
//! This module provides the color palettes used by every visual component.
//! A palette is a [`ThemeDescriptor`] of exactly four colors; the built-in
//! palettes (Dark, Light, Dracula, Nord, Serika) live in a [`ThemeManager`].
//!
//! # Examples
//!
//! ```
//! use rfolio::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dracula = manager.get_theme("Dracula").unwrap();
//! println!("Dracula background: {:?}", dracula.colors.background);
//! ```

use egui::Color32;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of the palette used when nothing else is configured.
pub const DEFAULT_THEME: &str = "Dark";

static CATALOG: Lazy<ThemeManager> = Lazy::new(ThemeManager::new);

/// Returns the shared, immutable palette catalog.
pub fn catalog() -> &'static ThemeManager {
    &CATALOG
}

/// Errors raised when a palette cannot be resolved or parsed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("theme '{0}' not found")]
    UnknownTheme(String),
    #[error("invalid hex color '{0}' (expected #rrggbb)")]
    InvalidHex(String),
}

/// The four colors that make up a palette.
///
/// Replaced wholesale on every theme change, never mutated field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDescriptor {
    #[serde(with = "hex_color")]
    pub background: Color32,
    #[serde(with = "hex_color")]
    pub main_color: Color32,
    #[serde(with = "hex_color")]
    pub sub_color: Color32,
    #[serde(with = "hex_color")]
    pub text_color: Color32,
}

impl ThemeDescriptor {
    /// Builds a descriptor from four `#rrggbb` strings.
    pub fn from_hex(background: &str, main_color: &str, sub_color: &str, text_color: &str) -> Result<Self, ThemeError> {
        Ok(Self {
            background: parse_hex(background)?,
            main_color: parse_hex(main_color)?,
            sub_color: parse_hex(sub_color)?,
            text_color: parse_hex(text_color)?,
        })
    }

    /// Returns true if the background is closer to black than to white.
    pub fn is_dark(&self) -> bool {
        let c = self.background;
        let luma = 0.299 * c.r() as f32 + 0.587 * c.g() as f32 + 0.114 * c.b() as f32;
        luma < 128.0
    }
}

/// A palette with its catalog metadata
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeDescriptor,
}

/// Catalog of the built-in palettes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        for theme in [dark_theme(), light_theme(), dracula_theme(), nord_theme(), serika_theme()] {
            themes.insert(theme.name.clone(), theme);
        }

        Self { themes }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns the default palette.
    pub fn default_theme(&self) -> &Theme {
        &self.themes[DEFAULT_THEME]
    }

    /// Returns a list of all available theme names
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Returns the name following `current` in sorted order, wrapping around.
    ///
    /// Unknown names map to the default theme.
    pub fn next_theme_name(&self, current: Option<&str>) -> &str {
        let names = self.list_themes();
        match current.and_then(|name| names.iter().position(|n| *n == name)) {
            Some(pos) => names[(pos + 1) % names.len()],
            None => DEFAULT_THEME,
        }
    }

    /// Finds the catalog palette whose colors equal `colors`, if any.
    pub fn find_by_colors(&self, colors: &ThemeDescriptor) -> Option<&Theme> {
        self.themes.values().find(|t| t.colors == *colors)
    }

    /// Applies a palette to egui visuals
    pub fn apply_theme(&self, colors: &ThemeDescriptor, visuals: &mut egui::Visuals) {
        // Background colors
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.background;
        visuals.extreme_bg_color = adjust_brightness(colors.background, if colors.is_dark() { 0.7 } else { 0.96 });
        visuals.faint_bg_color = with_alpha(colors.sub_color, 24);

        // Text
        visuals.override_text_color = Some(colors.text_color);

        // Selection
        visuals.selection.bg_fill = with_alpha(colors.main_color, 80);
        visuals.selection.stroke.color = colors.main_color;

        // Widgets
        visuals.widgets.noninteractive.bg_fill = colors.background;
        visuals.widgets.noninteractive.bg_stroke.color = with_alpha(colors.sub_color, 90);
        visuals.widgets.inactive.weak_bg_fill = with_alpha(colors.sub_color, 30);
        visuals.widgets.hovered.weak_bg_fill = with_alpha(colors.main_color, 50);
        visuals.widgets.active.weak_bg_fill = with_alpha(colors.main_color, 90);

        visuals.hyperlink_color = colors.main_color;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn palette(name: &str, description: &str, hex: [&str; 4]) -> Theme {
    Theme {
        name: name.to_string(),
        description: description.to_string(),
        colors: ThemeDescriptor {
            background: hex_to_color32(hex[0]),
            main_color: hex_to_color32(hex[1]),
            sub_color: hex_to_color32(hex[2]),
            text_color: hex_to_color32(hex[3]),
        },
    }
}

fn dark_theme() -> Theme {
    palette("Dark", "Near-black background with a warm accent", ["#111111", "#e2b714", "#646669", "#d1d0c5"])
}

fn light_theme() -> Theme {
    palette("Light", "Paper white with a blue accent", ["#f8f8f8", "#2862c8", "#8a8a8a", "#1e1e1e"])
}

/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    palette("Dracula", "Dracula color palette", ["#282a36", "#bd93f9", "#6272a4", "#f8f8f2"])
}

/// Polar Night background, Frost accent
fn nord_theme() -> Theme {
    palette("Nord", "Arctic, north-bluish palette", ["#2e3440", "#88c0d0", "#616e88", "#eceff4"])
}

fn serika_theme() -> Theme {
    palette("Serika", "Light beige with a golden accent", ["#e1e1e3", "#e2b714", "#aaaeb3", "#323437"])
}

fn parse_hex(hex: &str) -> Result<Color32, ThemeError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ThemeError::InvalidHex(hex.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ThemeError::InvalidHex(hex.to_string()))
    };
    Ok(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    parse_hex(hex).unwrap_or(Color32::from_rgb(0, 0, 0))
}

/// Formats a color as a lowercase `#rrggbb` string (alpha is dropped)
pub fn color32_to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

mod hex_color {
    use egui::Color32;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::color32_to_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color32, D::Error> {
        let hex = String::deserialize(deserializer)?;
        super::parse_hex(&hex).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_themes_sorted() {
        let manager = ThemeManager::new();
        assert_eq!(manager.list_themes(), vec!["Dark", "Dracula", "Light", "Nord", "Serika"]);
    }

    #[test]
    fn test_next_theme_wraps() {
        let manager = ThemeManager::new();
        assert_eq!(manager.next_theme_name(Some("Dark")), "Dracula");
        assert_eq!(manager.next_theme_name(Some("Serika")), "Dark");
        assert_eq!(manager.next_theme_name(None), DEFAULT_THEME);
        assert_eq!(manager.next_theme_name(Some("Missing")), DEFAULT_THEME);
    }

    #[test]
    fn test_hex_round_trip() {
        let color = hex_to_color32("#bd93f9");
        assert_eq!(color, Color32::from_rgb(0xbd, 0x93, 0xf9));
        assert_eq!(color32_to_hex(color), "#bd93f9");
    }

    #[test]
    fn test_invalid_hex_rejected() {
        assert_eq!(parse_hex("#12345"), Err(ThemeError::InvalidHex("#12345".to_string())));
        assert!(parse_hex("#zzzzzz").is_err());
        assert_eq!(hex_to_color32("nope"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_descriptor_serde_uses_hex_strings() {
        let manager = ThemeManager::new();
        let colors = manager.get_theme("Nord").unwrap().colors;
        let json = serde_json::to_string(&colors).unwrap();
        assert!(json.contains("\"background\":\"#2e3440\""));
        let parsed: ThemeDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, colors);
    }

    #[test]
    fn test_descriptor_missing_field_is_rejected() {
        let json = r##"{"background":"#000000","main_color":"#ffffff","sub_color":"#777777"}"##;
        assert!(serde_json::from_str::<ThemeDescriptor>(json).is_err());
    }

    #[test]
    fn test_find_by_colors() {
        let manager = ThemeManager::new();
        let light = manager.get_theme("Light").unwrap().colors;
        assert_eq!(manager.find_by_colors(&light).map(|t| t.name.as_str()), Some("Light"));
        assert!(!light.is_dark());
        assert!(manager.default_theme().colors.is_dark());
    }
}
