//! Theme configuration for scrim overlays
//!
//! Provides configurable colors for the scrim and dialog surface.
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/scrim/theme.yaml

use iced::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root theme configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Colors for the overlay layers
    pub overlay: OverlayColors,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            overlay: OverlayColors::default(),
        }
    }
}

/// Overlay color configuration
///
/// Colors are specified as hex strings (e.g., "#1A1A1A")
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayColors {
    /// Scrim color behind the dialog (default: black)
    pub scrim: String,
    /// Scrim opacity, 0.0-1.0 (default: 0.6)
    pub scrim_opacity: f32,
    /// Dialog surface background (default: dark grey)
    pub surface: String,
}

impl Default for OverlayColors {
    fn default() -> Self {
        Self {
            scrim: "#000000".to_string(),
            scrim_opacity: 0.6,
            surface: "#262626".to_string(),
        }
    }
}

impl OverlayColors {
    /// Scrim color with its opacity applied
    pub fn scrim_color(&self) -> Color {
        let base = parse_hex_color(&self.scrim);
        Color {
            a: self.scrim_opacity.clamp(0.0, 1.0),
            ..base
        }
    }

    /// Dialog surface background color
    pub fn surface_color(&self) -> Color {
        parse_hex_color(&self.surface)
    }
}

/// Parse a hex color string to an iced Color
///
/// Supports formats: "#RRGGBB" or "RRGGBB"
/// Returns white on parse failure
fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        log::warn!("Invalid hex color '{}', using white", hex);
        return Color::WHITE;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

    Color::from_rgb8(r, g, b)
}

/// Default scrim color (matches OverlayColors::default())
pub const DEFAULT_SCRIM: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.6,
};

/// Get the default theme file path
///
/// Returns: ~/.config/scrim/theme.yaml
pub fn default_theme_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("scrim")
        .join("theme.yaml")
}

/// Load theme configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_theme(path: &Path) -> ThemeConfig {
    log::info!("load_theme: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_theme: Theme file doesn't exist, using defaults");
        return ThemeConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<ThemeConfig>(&contents) {
            Ok(config) => {
                log::info!("load_theme: Loaded custom theme");
                config
            }
            Err(e) => {
                log::warn!("load_theme: Failed to parse: {}, using defaults", e);
                ThemeConfig::default()
            }
        },
        Err(e) => {
            log::warn!("load_theme: Failed to read file: {}, using defaults", e);
            ThemeConfig::default()
        }
    }
}

/// Save theme configuration to a YAML file
pub fn save_theme(config: &ThemeConfig, path: &Path) -> anyhow::Result<()> {
    log::info!("save_theme: Saving to {:?}", path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(path, yaml)?;

    log::info!("save_theme: Saved successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_with_and_without_hash() {
        let c = parse_hex_color("#33CC66");
        assert!((c.g - 0.8).abs() < 0.01);
        let c2 = parse_hex_color("33CC66");
        assert_eq!(c, c2);
    }

    #[test]
    fn invalid_hex_falls_back_to_white() {
        assert_eq!(parse_hex_color("#12"), Color::WHITE);
        assert_eq!(parse_hex_color("not-a-color"), Color::WHITE);
    }

    #[test]
    fn default_scrim_matches_config_default() {
        let colors = OverlayColors::default();
        let scrim = colors.scrim_color();
        assert!((scrim.a - DEFAULT_SCRIM.a).abs() < f32::EPSILON);
        assert_eq!(scrim.r, DEFAULT_SCRIM.r);
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let config: ThemeConfig =
            serde_yaml::from_str("overlay:\n  scrim_opacity: 0.8\n").unwrap();
        assert!((config.overlay.scrim_opacity - 0.8).abs() < f32::EPSILON);
        assert_eq!(config.overlay.scrim, "#000000");
    }

    #[test]
    fn scrim_opacity_is_clamped() {
        let colors = OverlayColors {
            scrim_opacity: 2.0,
            ..OverlayColors::default()
        };
        assert_eq!(colors.scrim_color().a, 1.0);
    }
}
