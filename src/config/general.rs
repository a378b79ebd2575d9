//! The general configuration settings for lst.
//!
//! This module defines the [General] struct for deserializing the `[general]`
//! table of lst.toml and the [InternalGeneral] struct used by the rest of lst.
//!
//! It covers which entries are shown and how they are ordered.

use crate::core::{SortMode, TimeMode, Visibility};

use serde::Deserialize;

/// Patterns added by `ignore_backups`.
pub const BACKUP_PATTERNS: [&str; 3] = ["*~", "*.bak", "*.tmp"];

#[derive(Deserialize, Debug)]
#[serde(default)]
pub(crate) struct General {
    all: bool,
    almost_all: bool,
    sort: SortMode,
    reverse: bool,
    dirs_first: bool,
    case_sensitive: bool,
    time: TimeMode,
    dereference: bool,
    ignore: Vec<String>,
    ignore_backups: bool,
}

impl Default for General {
    fn default() -> Self {
        General {
            all: false,
            almost_all: false,
            sort: SortMode::Name,
            reverse: false,
            dirs_first: false,
            case_sensitive: false,
            time: TimeMode::Write,
            dereference: false,
            ignore: Vec::new(),
            ignore_backups: false,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct InternalGeneral {
    visibility: Visibility,
    sort: SortMode,
    reverse: bool,
    dirs_first: bool,
    case_sensitive: bool,
    time: TimeMode,
    dereference: bool,
    ignore: Vec<String>,
}

impl From<General> for InternalGeneral {
    fn from(g: General) -> Self {
        let visibility = if g.all {
            Visibility::All
        } else if g.almost_all {
            Visibility::AlmostAll
        } else {
            Visibility::Visible
        };

        let mut ignore = g.ignore;
        if g.ignore_backups {
            ignore.extend(BACKUP_PATTERNS.iter().map(|p| p.to_string()));
        }

        Self {
            visibility,
            sort: g.sort,
            reverse: g.reverse,
            dirs_first: g.dirs_first,
            case_sensitive: g.case_sensitive,
            time: g.time,
            dereference: g.dereference,
            ignore,
        }
    }
}

impl InternalGeneral {
    #[inline]
    pub(crate) fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub(crate) fn sort(&self) -> SortMode {
        self.sort
    }

    #[inline]
    pub(crate) fn reverse(&self) -> bool {
        self.reverse
    }

    #[inline]
    pub(crate) fn dirs_first(&self) -> bool {
        self.dirs_first
    }

    #[inline]
    pub(crate) fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    #[inline]
    pub(crate) fn time(&self) -> TimeMode {
        self.time
    }

    #[inline]
    pub(crate) fn dereference(&self) -> bool {
        self.dereference
    }

    #[inline]
    pub(crate) fn ignore(&self) -> &[String] {
        &self.ignore
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_wins_over_almost_all() -> Result<(), Box<dyn std::error::Error>> {
        let general: General = toml::from_str("all = true\nalmost_all = true")?;
        assert_eq!(InternalGeneral::from(general).visibility(), Visibility::All);

        let general: General = toml::from_str("almost_all = true")?;
        assert_eq!(
            InternalGeneral::from(general).visibility(),
            Visibility::AlmostAll
        );
        Ok(())
    }

    #[test]
    fn backups_extend_ignore_list() -> Result<(), Box<dyn std::error::Error>> {
        let general: General = toml::from_str(
            r#"
            ignore = ["target"]
            ignore_backups = true
            sort = "version"
            time = "access"
            "#,
        )?;
        let general = InternalGeneral::from(general);
        assert_eq!(general.ignore(), ["target", "*~", "*.bak", "*.tmp"]);
        assert_eq!(general.sort(), SortMode::Version);
        assert_eq!(general.time(), TimeMode::Access);
        assert!(!general.dirs_first());
        Ok(())
    }
}
