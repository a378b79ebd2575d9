//! The main config loading module for lst.
//!
//! Handles loading and deserializing settings from `lst.toml`.
//!
//! Provides the main [Config] struct, as well as the internal [RawConfig] used for parsing.
//!
//! Also implements `lst --init`, which writes a commented default config.

use crate::config::Display;
use crate::config::Theme;
use crate::config::{General, InternalGeneral};
use crate::error::LstError;
use crate::utils::get_home;

use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Raw configuration as read from the toml file
/// It uses owned types and is then converted into the main [Config] struct.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct RawConfig {
    general: General,
    display: Display,
    theme: Theme,
}

/// Main configuration struct for lst
/// Command line flags are applied on top of it when building the run settings.
#[derive(Debug, Clone)]
pub struct Config {
    general: InternalGeneral,
    display: Display,
    theme: Theme,
}

/// Conversion from RawConfig to Config
impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: InternalGeneral::from(raw.general),
            display: raw.display,
            theme: raw.theme.with_overrides(),
        }
    }
}

impl Config {
    /// Load configuration from the default path
    /// A missing file or a file that fails to parse yields the defaults.
    pub fn load() -> Self {
        let path = Self::default_path();

        if !path.exists() {
            log::debug!("no config at {:?}, using internal defaults", path);
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                log::debug!("loaded config from {:?}", path);
                config
            }
            Err(e) => {
                eprintln!("lst: {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, LstError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from toml text.
    pub fn parse(content: &str) -> Result<Self, LstError> {
        let raw: RawConfig = toml::from_str(content)?;
        Ok(raw.into())
    }

    // Getters

    #[inline]
    pub(crate) fn general(&self) -> &InternalGeneral {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Determine the default configuration file path.
    /// Checks the LST_CONFIG environment variable first,
    /// Checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/lst/lst.toml,
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("LST_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("lst/lst.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/lst/lst.toml");
        }
        PathBuf::from("lst.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> Result<(), LstError> {
        if path.exists() {
            return Err(LstError::ConfigExists(path.to_path_buf()));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)?;
        println!("Default config generated at {:?}", path);
        Ok(())
    }
}

/// Default configuration options
impl Default for Config {
    fn default() -> Self {
        RawConfig::default().into()
    }
}

const DEFAULT_TOML: &str = r##"# lst.toml - default configuration for lst

# Note:
# Commented values are the internal defaults of lst
# Command line flags override anything set here.
# Use hex codes (eg. "#RRGGBB") or terminal colors ("cyan")

[general]
# all = false                 # -a, include . and ..
# almost_all = false          # -A
# sort = "name"               # none, name, extension, size, time, version, length
# reverse = false
# dirs_first = false
# case_sensitive = false
# time = "write"              # write, access, creation
# dereference = false         # -L
# ignore = []                 # glob patterns, eg. ["target", "*.o"]
# ignore_backups = false      # -B, hides *~ *.bak *.tmp

[display]
# layout = "grid"             # grid, single, long
# classify = true             # append / @ | = *
# icons = false               # needs a Nerd Font
# color = "auto"              # always, never, auto
# quoting = "auto"            # auto, always, never
# nongraphic = "escape"       # escape, hide, show
# human_readable = "bytes"    # bytes, binary, si
# long_format = "$t$p $l $o $g $s $d $n"
# date_format = "%Y-%m-%d %H:%M"
# width = 80
# separator = 2
# truncate = true             # cut the grid at the terminal height

[theme]
# name = "default"            # gruvbox-dark, gruvbox-light, catppuccin-mocha,
                              # catppuccin-latte, nord, tokyonight, dracula, solarized-dark
# directory = "blue"
# executable = "green"
# symlink = "cyan"
# broken_link = "darkred"
# temporary = "darkgrey"
# size = "default"
# dir_size = "default"
# names = "grey"
# error = "darkred"
# truncation = "darkgrey"

# [theme.indicator]
# directory = "darkblue"
# executable = "darkgreen"
# symlink = "darkcyan"
# special = "darkgrey"
"##;
