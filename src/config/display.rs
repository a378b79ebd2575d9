//! Display configuration options for lst
//!
//! This module defines the `[display]` options read from lst.toml: layout,
//! name decoration, colors, sizes and dates.

use crate::core::formatter::SizeStyle;
use crate::core::{NongraphicMode, QuoteMode};
use crate::ui::Layout;
use crate::ui::long::DEFAULT_LONG_FORMAT;

use serde::Deserialize;

/// When to emit color escapes.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorWhen {
    Always,
    Never,
    /// Only when stdout is a terminal
    #[default]
    Auto,
}

impl ColorWhen {
    pub fn enabled(self, is_tty: bool) -> bool {
        match self {
            ColorWhen::Always => true,
            ColorWhen::Never => false,
            ColorWhen::Auto => is_tty,
        }
    }
}

impl std::str::FromStr for ColorWhen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "always" | "yes" | "force" => Ok(ColorWhen::Always),
            "never" | "no" | "none" => Ok(ColorWhen::Never),
            "auto" | "tty" | "if-tty" => Ok(ColorWhen::Auto),
            _ => Err(format!(
                "invalid color '{}' (valid: always, yes, never, no, auto, tty)",
                s
            )),
        }
    }
}

/// Display configuration options
///
/// Default values are provided for all options so a partial `[display]`
/// table only changes what it names.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Display {
    layout: Layout,
    classify: bool,
    icons: bool,
    color: ColorWhen,
    quoting: QuoteMode,
    nongraphic: NongraphicMode,
    human_readable: SizeStyle,
    long_format: String,
    date_format: Option<String>,
    width: Option<usize>,
    separator: usize,
    truncate: bool,
}

/// Public methods for accessing display configuration options
impl Display {
    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn classify(&self) -> bool {
        self.classify
    }

    pub fn icons(&self) -> bool {
        self.icons
    }

    pub fn color(&self) -> ColorWhen {
        self.color
    }

    pub fn quoting(&self) -> QuoteMode {
        self.quoting
    }

    pub fn nongraphic(&self) -> NongraphicMode {
        self.nongraphic
    }

    pub fn human_readable(&self) -> SizeStyle {
        self.human_readable
    }

    pub fn long_format(&self) -> &str {
        &self.long_format
    }

    pub fn date_format(&self) -> Option<&str> {
        self.date_format.as_deref()
    }

    /// Fixed output width. None means the terminal width.
    pub fn width(&self) -> Option<usize> {
        self.width.filter(|&w| w > 0)
    }

    pub fn separator(&self) -> usize {
        self.separator.max(1)
    }

    /// Cut the grid at the terminal height on a live terminal.
    pub fn truncate(&self) -> bool {
        self.truncate
    }
}

impl Default for Display {
    fn default() -> Self {
        Display {
            layout: Layout::Grid,
            classify: true,
            icons: false,
            color: ColorWhen::Auto,
            quoting: QuoteMode::Auto,
            nongraphic: NongraphicMode::Escape,
            human_readable: SizeStyle::Bytes,
            long_format: DEFAULT_LONG_FORMAT.to_string(),
            date_format: None,
            width: None,
            separator: 2,
            truncate: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_table_keeps_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let display: Display = toml::from_str(
            r#"
            layout = "long"
            human_readable = "si"
            width = 0
            separator = 0
            "#,
        )?;
        assert_eq!(display.layout(), Layout::Long);
        assert_eq!(display.human_readable(), SizeStyle::Si);
        assert!(display.classify());
        assert_eq!(display.long_format(), DEFAULT_LONG_FORMAT);
        assert_eq!(display.width(), None);
        assert_eq!(display.separator(), 1);
        Ok(())
    }

    #[test]
    fn color_when() {
        assert_eq!("yes".parse::<ColorWhen>(), Ok(ColorWhen::Always));
        assert_eq!("tty".parse::<ColorWhen>(), Ok(ColorWhen::Auto));
        assert!("sometimes".parse::<ColorWhen>().is_err());
        assert!(ColorWhen::Auto.enabled(true));
        assert!(!ColorWhen::Auto.enabled(false));
    }
}
