//! Semantic color tokens for the application.
//!
//! Tonal surface hierarchy plus a primary accent, deserialized from TOML
//! theme files via hex color strings.

use iced::Color;
use serde::Deserialize;

// ── Hex color serde ─────────────────────────────────────────────────

mod hex_color {
    use iced::Color;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex_color(&s).map_err(serde::de::Error::custom)
    }

    pub(super) fn parse_hex_color(s: &str) -> Result<Color, String> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return Err(format!("invalid hex color: {s}"));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| format!("{s}: {e}"))
        };
        match hex.len() {
            6 => Ok(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => {
                let a = channel(6..8)?;
                Ok(Color::from_rgba8(
                    channel(0..2)?,
                    channel(2..4)?,
                    channel(4..6)?,
                    a as f32 / 255.0,
                ))
            }
            _ => Err(format!("invalid hex color: {s}")),
        }
    }
}

// ── TOML intermediate structs ──────────────────────────────────────

/// Raw TOML theme file structure.
///
/// Each file defines one theme with both dark and light variants.
#[derive(Debug, Deserialize)]
pub struct ThemeFile {
    pub meta: ThemeMeta,
    pub dark: ThemeVariant,
    pub light: ThemeVariant,
}

#[derive(Debug, Deserialize)]
pub struct ThemeMeta {
    pub name: String,
}

/// A single appearance variant (dark or light) within a theme.
#[derive(Debug, Deserialize)]
pub struct ThemeVariant {
    pub surface: SurfaceColors,
    pub text: TextColors,
    pub primary: PrimaryColors,
    pub accent: AccentColors,
}

#[derive(Debug, Deserialize)]
pub struct SurfaceColors {
    #[serde(with = "hex_color")]
    pub container_lowest: Color,
    #[serde(with = "hex_color")]
    pub base: Color,
    #[serde(with = "hex_color")]
    pub container_low: Color,
    #[serde(with = "hex_color")]
    pub container: Color,
    #[serde(with = "hex_color")]
    pub container_high: Color,
    #[serde(with = "hex_color")]
    pub container_highest: Color,
    #[serde(with = "hex_color")]
    pub bright: Color,
}

#[derive(Debug, Deserialize)]
pub struct TextColors {
    #[serde(with = "hex_color")]
    pub on_surface: Color,
    #[serde(with = "hex_color")]
    pub on_surface_variant: Color,
    #[serde(with = "hex_color")]
    pub outline: Color,
    #[serde(with = "hex_color")]
    pub outline_variant: Color,
}

#[derive(Debug, Deserialize)]
pub struct PrimaryColors {
    #[serde(with = "hex_color")]
    pub base: Color,
    #[serde(with = "hex_color")]
    pub hover: Color,
    #[serde(with = "hex_color")]
    pub dim: Color,
    #[serde(with = "hex_color")]
    pub on_primary: Color,
    #[serde(with = "hex_color")]
    pub container: Color,
    #[serde(with = "hex_color")]
    pub on_container: Color,
}

#[derive(Debug, Deserialize)]
pub struct AccentColors {
    #[serde(with = "hex_color")]
    pub rating: Color,
    #[serde(with = "hex_color")]
    pub error: Color,
}

// Re-export ThemeMode from core so there's a single source of truth.
pub use marquee_core::config::ThemeMode;

// ── ColorScheme ────────────────────────────────────────────────────

/// All semantic color tokens for the application.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surfaces (low -> high elevation)
    pub surface_container_lowest: Color,
    pub surface: Color,
    pub surface_container_low: Color,
    pub surface_container: Color,
    pub surface_container_high: Color,
    pub surface_container_highest: Color,
    pub surface_bright: Color,

    // Text hierarchy
    pub on_surface: Color,
    pub on_surface_variant: Color,
    pub outline: Color,
    pub outline_variant: Color,

    // Primary accent (marquee amber)
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_dim: Color,
    pub on_primary: Color,
    pub primary_container: Color,
    pub on_primary_container: Color,

    pub rating: Color,
    pub error: Color,
}

impl ColorScheme {
    /// Build a ColorScheme from a single theme variant.
    pub fn from_variant(v: &ThemeVariant) -> Self {
        Self {
            surface_container_lowest: v.surface.container_lowest,
            surface: v.surface.base,
            surface_container_low: v.surface.container_low,
            surface_container: v.surface.container,
            surface_container_high: v.surface.container_high,
            surface_container_highest: v.surface.container_highest,
            surface_bright: v.surface.bright,

            on_surface: v.text.on_surface,
            on_surface_variant: v.text.on_surface_variant,
            outline: v.text.outline,
            outline_variant: v.text.outline_variant,

            primary: v.primary.base,
            primary_hover: v.primary.hover,
            primary_dim: v.primary.dim,
            on_primary: v.primary.on_primary,
            primary_container: v.primary.container,
            on_primary_container: v.primary.on_container,

            rating: v.accent.rating,
            error: v.accent.error,
        }
    }
}
