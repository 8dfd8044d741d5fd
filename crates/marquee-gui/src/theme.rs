//! Amber-on-charcoal theme with tonal surfaces.
//!
//! Each theme is a single TOML file containing both dark and light variants.
//! Supports the embedded default and user-provided themes from
//! `~/.config/marquee/themes/`.

mod catalog;
mod colors;

// Re-export everything so `crate::theme::*` paths stay flat.
pub use catalog::*;
pub use colors::*;

use iced::Theme;

/// Embedded default theme TOML source (contains both dark and light).
pub(crate) const DEFAULT_THEME_TOML: &str = include_str!("../assets/themes/default.toml");

/// A fully loaded theme with both appearance variants.
#[derive(Debug, Clone)]
pub struct MarqueeTheme {
    pub name: String,
    pub dark: ColorScheme,
    pub light: ColorScheme,
}

impl MarqueeTheme {
    /// Load a theme from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        let file: ThemeFile =
            toml::from_str(toml_str).map_err(|e| format!("theme parse error: {e}"))?;
        Ok(Self {
            name: file.meta.name.clone(),
            dark: ColorScheme::from_variant(&file.dark),
            light: ColorScheme::from_variant(&file.light),
        })
    }

    /// Load the embedded default theme.
    pub fn default_theme() -> Self {
        Self::from_toml(DEFAULT_THEME_TOML).expect("embedded default theme is valid TOML")
    }

    /// Get the color scheme for a resolved mode (Dark or Light).
    pub fn colors(&self, mode: ThemeMode) -> &ColorScheme {
        match mode {
            ThemeMode::Light => &self.light,
            // Dark is the fallback for both Dark and System.
            _ => &self.dark,
        }
    }

    /// Build the iced Theme for a given mode.
    pub fn iced_theme(&self, mode: ThemeMode) -> Theme {
        build_theme(&self.name, self.colors(mode))
    }
}

/// Resolve `ThemeMode::System` to a concrete Dark or Light.
pub fn resolve_mode(mode: ThemeMode) -> ThemeMode {
    match mode {
        ThemeMode::System => match dark_light::detect() {
            Ok(dark_light::Mode::Light) => ThemeMode::Light,
            _ => ThemeMode::Dark,
        },
        other => other,
    }
}

/// Embedded default plus any parseable `*.toml` in the user themes directory.
pub fn available_themes() -> Vec<MarqueeTheme> {
    let mut themes = vec![MarqueeTheme::default_theme()];

    let Some(user_themes) = user_themes_dir() else {
        return themes;
    };
    let Ok(entries) = std::fs::read_dir(&user_themes) else {
        return themes;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.extension().is_some_and(|e| e == "toml") {
            continue;
        }
        match std::fs::read_to_string(&path) {
            Ok(content) => match MarqueeTheme::from_toml(&content) {
                Ok(theme) => themes.push(theme),
                Err(e) => tracing::warn!("Skipping theme {}: {e}", path.display()),
            },
            Err(e) => tracing::warn!("Cannot read {}: {e}", path.display()),
        }
    }

    themes
}

/// Find a theme by name, falling back to the embedded default.
pub fn find_theme(name: &str) -> MarqueeTheme {
    available_themes()
        .into_iter()
        .find(|t| t.name == name)
        .unwrap_or_else(|| {
            tracing::warn!(theme = name, "theme not found, using default");
            MarqueeTheme::default_theme()
        })
}

fn user_themes_dir() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("", "", "marquee").map(|dirs| dirs.config_dir().join("themes"))
}

/// Build the iced Theme from a ColorScheme.
pub fn build_theme(name: &str, cs: &ColorScheme) -> Theme {
    use iced::theme::Palette;

    Theme::custom(
        name.to_string(),
        Palette {
            background: cs.surface,
            text: cs.on_surface,
            primary: cs.primary,
            success: cs.primary_container,
            warning: cs.rating,
            danger: cs.error,
        },
    )
}
