//! Theme configuration options for lst
//!
//! This module defines the colors used for names, indicators and long format
//! columns, read from the `[theme]` table of lst.toml.
//!
//! Also holds the logic to apply user overrides on top of a preset.

use crate::config::presets::*;
use crate::utils::parse_color;

use crossterm::style::Color;
use serde::Deserialize;

use std::sync::LazyLock;

/// Theme configuration options
/// # Examples
/// ```toml
/// [theme]
/// name = "gruvbox-dark"
/// directory = "#83a598"
/// executable = "green"
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Theme {
    name: Option<String>,
    #[serde(deserialize_with = "deserialize_color_field")]
    directory: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    executable: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    symlink: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    broken_link: Color,
    /// Backup and scratch files
    #[serde(deserialize_with = "deserialize_color_field")]
    temporary: Color,
    indicator: IndicatorTheme,
    #[serde(deserialize_with = "deserialize_color_field")]
    size: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    dir_size: Color,
    /// Owner and group columns
    #[serde(deserialize_with = "deserialize_color_field")]
    names: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    error: Color,
    /// The `...` marker under a truncated grid
    #[serde(deserialize_with = "deserialize_color_field")]
    truncation: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            name: None,
            directory: Color::Blue,
            executable: Color::Green,
            symlink: Color::Cyan,
            broken_link: Color::DarkRed,
            temporary: Color::DarkGrey,
            indicator: IndicatorTheme::default(),
            size: Color::AnsiValue(110),
            dir_size: Color::AnsiValue(61),
            names: Color::Grey,
            error: Color::DarkRed,
            truncation: Color::DarkGrey,
        }
    }
}

/// Macro to override a field in the target theme if it differs from the default theme.
/// This is used to apply user-defined overrides on top of a preset theme.
macro_rules! override_if_changed {
    ($target:ident, $user:ident, $default:ident, $field:ident) => {
        if $user.$field != $default.$field {
            $target.$field = $user.$field.clone();
        }
    };
}

impl Theme {
    /// Internal default theme, used when a color is set to "default".
    pub fn internal_defaults() -> &'static Self {
        static DEFAULT: LazyLock<Theme> = LazyLock::new(Theme::default);
        &DEFAULT
    }

    // Getters with fallbacks to the internal defaults

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn directory(&self) -> Color {
        self.directory.or(Theme::internal_defaults().directory)
    }

    pub fn executable(&self) -> Color {
        self.executable.or(Theme::internal_defaults().executable)
    }

    pub fn symlink(&self) -> Color {
        self.symlink.or(Theme::internal_defaults().symlink)
    }

    pub fn broken_link(&self) -> Color {
        self.broken_link.or(Theme::internal_defaults().broken_link)
    }

    pub fn temporary(&self) -> Color {
        self.temporary.or(Theme::internal_defaults().temporary)
    }

    pub fn indicator(&self) -> &IndicatorTheme {
        &self.indicator
    }

    pub fn size(&self) -> Color {
        self.size.or(Theme::internal_defaults().size)
    }

    pub fn dir_size(&self) -> Color {
        self.dir_size.or(Theme::internal_defaults().dir_size)
    }

    pub fn names(&self) -> Color {
        self.names.or(Theme::internal_defaults().names)
    }

    pub fn error(&self) -> Color {
        self.error.or(Theme::internal_defaults().error)
    }

    pub fn truncation(&self) -> Color {
        self.truncation.or(Theme::internal_defaults().truncation)
    }

    /// Apply user overrides on top of a preset theme if a known preset name is provided.
    /// If no preset name is provided or the name is unknown, returns the theme as is.
    pub fn with_overrides(self) -> Self {
        let preset = match self.name.as_deref() {
            Some("gruvbox-dark") | Some("gruvbox") => Some(gruvbox_dark()),
            Some("gruvbox-light") => Some(gruvbox_light()),
            Some("catppuccin-mocha") | Some("catppuccin") => Some(catppuccin_mocha()),
            Some("catppuccin-latte") => Some(catppuccin_latte()),
            Some("nord") => Some(nord()),
            Some("tokyonight") | Some("tokyonight-night") => Some(tokyonight_night()),
            Some("dracula") => Some(dracula()),
            Some("solarized-dark") => Some(solarized_dark()),
            Some(other) => {
                log::debug!("unknown theme preset '{}', using colors as given", other);
                None
            }
            None => None,
        };

        if let Some(mut base) = preset {
            base.apply_user_overrides(self);
            base
        } else {
            self
        }
    }

    /// Apply user overrides on top of the current theme.
    /// Only fields that differ from the default theme are taken from `user`.
    fn apply_user_overrides(&mut self, user: Theme) {
        let defaults = Theme::default();

        override_if_changed!(self, user, defaults, directory);
        override_if_changed!(self, user, defaults, executable);
        override_if_changed!(self, user, defaults, symlink);
        override_if_changed!(self, user, defaults, broken_link);
        override_if_changed!(self, user, defaults, temporary);
        override_if_changed!(self, user, defaults, indicator);
        override_if_changed!(self, user, defaults, size);
        override_if_changed!(self, user, defaults, dir_size);
        override_if_changed!(self, user, defaults, names);
        override_if_changed!(self, user, defaults, error);
        override_if_changed!(self, user, defaults, truncation);

        if user.name.is_some() {
            self.name = user.name.clone();
        }
    }
}

/// Colors of the classification characters after a name.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct IndicatorTheme {
    #[serde(deserialize_with = "deserialize_color_field")]
    directory: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    executable: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    symlink: Color,
    /// Fifos and sockets
    #[serde(deserialize_with = "deserialize_color_field")]
    special: Color,
}

impl Default for IndicatorTheme {
    fn default() -> Self {
        Self {
            directory: Color::DarkBlue,
            executable: Color::DarkGreen,
            symlink: Color::DarkCyan,
            special: Color::DarkGrey,
        }
    }
}

impl IndicatorTheme {
    pub fn directory(&self) -> Color {
        self.directory.or(Theme::internal_defaults().indicator.directory)
    }

    pub fn executable(&self) -> Color {
        self.executable
            .or(Theme::internal_defaults().indicator.executable)
    }

    pub fn symlink(&self) -> Color {
        self.symlink.or(Theme::internal_defaults().indicator.symlink)
    }

    pub fn special(&self) -> Color {
        self.special.or(Theme::internal_defaults().indicator.special)
    }
}

/// Trait to provide a fallback color if the original color is Reset.
trait ColorFallback {
    fn or(self, fallback: Color) -> Color;
}

/// If the color is Reset, returns the fallback color, otherwise returns self.
impl ColorFallback for Color {
    fn or(self, fallback: Color) -> Color {
        if let Color::Reset = self {
            fallback
        } else {
            self
        }
    }
}

// Helper function to deserialize Theme colors
fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_color(&s))
}

/// Helper function to convert RGB tuples to [Color] instances.
fn rgb(c: (u8, u8, u8)) -> Color {
    Color::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

/// Palette struct to apply internal themes to the central [make_theme] function.
pub struct Palette {
    pub directory: (u8, u8, u8),
    pub executable: (u8, u8, u8),
    pub symlink: (u8, u8, u8),
    pub error: (u8, u8, u8),
    pub muted: (u8, u8, u8),
    pub accent: (u8, u8, u8),
    pub text: (u8, u8, u8),
}

/// Centralized function to create a Theme from a Palette.
/// Indicators reuse the name colors; the muted color marks scratch files.
pub fn make_theme(name: &str, palette: Palette) -> Theme {
    let directory = rgb(palette.directory);
    let executable = rgb(palette.executable);
    let symlink = rgb(palette.symlink);
    let error = rgb(palette.error);
    let muted = rgb(palette.muted);

    Theme {
        name: Some(name.to_string()),
        directory,
        executable,
        symlink,
        broken_link: error,
        temporary: muted,
        indicator: IndicatorTheme {
            directory,
            executable,
            symlink,
            special: muted,
        },
        size: rgb(palette.accent),
        dir_size: muted,
        names: rgb(palette.text),
        error,
        truncation: muted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_falls_back_to_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let theme: Theme = toml::from_str(
            r##"
            directory = "default"
            executable = "#00ff00"
            "##,
        )?;
        assert_eq!(theme.directory(), Color::Blue);
        assert_eq!(theme.executable(), Color::Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(theme.symlink(), Color::Cyan);
        assert_eq!(theme.indicator().special(), Color::DarkGrey);
        Ok(())
    }

    #[test]
    fn preset_with_user_override() -> Result<(), Box<dyn std::error::Error>> {
        let theme: Theme = toml::from_str(
            r##"
            name = "nord"
            symlink = "magenta"
            [indicator]
            directory = "white"
            "##,
        )?;
        let theme = theme.with_overrides();
        let nord = nord();

        assert_eq!(theme.name(), Some("nord"));
        assert_eq!(theme.directory(), nord.directory());
        assert_eq!(theme.symlink(), Color::Magenta);
        // The indicator table is overridden as a whole
        assert_eq!(theme.indicator().directory(), Color::White);
        assert_eq!(theme.indicator().symlink(), Color::DarkCyan);
        Ok(())
    }

    #[test]
    fn unknown_preset_keeps_user_theme() {
        let theme = Theme {
            name: Some("nope".into()),
            ..Theme::default()
        }
        .with_overrides();
        assert_eq!(theme.directory(), Color::Blue);
    }
}
