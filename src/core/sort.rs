//! Ordering of entry lists.
//!
//! A [SortStrategy] is built once per [sort_entries] call from the run's
//! [SortMode] and flags, then handed to the stable `sort_by`.
//! `reverse` flips every comparator result instead of reversing the list
//! afterwards, so ties keep their traversal order in both directions.

use crate::core::Entry;
use crate::core::natural::{natural_compare, natural_compare_folded};

use serde::Deserialize;

use std::cmp::Ordering;

/// Primary sort key.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Traversal order
    None,
    #[default]
    Name,
    Extension,
    /// Largest first
    Size,
    /// Newest first
    Time,
    /// Natural order of the final component
    Version,
    /// Shortest display width first
    #[serde(alias = "length")]
    NameLength,
}

impl std::str::FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(SortMode::None),
            "name" => Ok(SortMode::Name),
            "extension" => Ok(SortMode::Extension),
            "size" => Ok(SortMode::Size),
            "time" => Ok(SortMode::Time),
            "version" => Ok(SortMode::Version),
            "length" | "name-length" => Ok(SortMode::NameLength),
            _ => Err(format!(
                "invalid sort '{}' (valid: none, name, extension, size, time, version, length)",
                s
            )),
        }
    }
}

/// Comparator state for one sort call.
#[derive(Debug, Clone, Copy)]
pub struct SortStrategy {
    mode: SortMode,
    reverse: bool,
    case_sensitive: bool,
}

impl SortStrategy {
    pub fn new(mode: SortMode, reverse: bool, case_sensitive: bool) -> Self {
        Self {
            mode,
            reverse,
            case_sensitive,
        }
    }

    /// Compares two entries under this strategy, `reverse` included.
    pub fn compare(&self, a: &Entry, b: &Entry) -> Ordering {
        let ord = match self.mode {
            SortMode::None => Ordering::Equal,
            SortMode::Name => self.by_name(a, b),
            SortMode::Extension => self
                .compare_bytes(a.extension_bytes(), b.extension_bytes())
                .then_with(|| self.by_name(a, b)),
            SortMode::Size => b.size().cmp(&a.size()).then_with(|| self.by_name(a, b)),
            SortMode::Time => b.time().cmp(&a.time()).then_with(|| self.by_name(a, b)),
            SortMode::Version => {
                let (x, y) = (a.name_bytes(), b.name_bytes());
                let ord = if self.case_sensitive {
                    natural_compare(x, y)
                } else {
                    natural_compare_folded(x, y)
                };
                ord.then_with(|| self.by_name(a, b))
            }
            SortMode::NameLength => a
                .display_width()
                .cmp(&b.display_width())
                .then_with(|| self.by_name(a, b)),
        };
        self.apply_reverse(ord)
    }

    #[inline]
    fn apply_reverse(&self, ord: Ordering) -> Ordering {
        if self.reverse { ord.reverse() } else { ord }
    }

    fn by_name(&self, a: &Entry, b: &Entry) -> Ordering {
        self.compare_bytes(
            a.path().as_os_str().as_encoded_bytes(),
            b.path().as_os_str().as_encoded_bytes(),
        )
    }

    /// Byte compare, ASCII-folded unless case sensitive.
    /// Folded ties fall back to the exact bytes so `A` sorts before `a`.
    fn compare_bytes(&self, a: &[u8], b: &[u8]) -> Ordering {
        if self.case_sensitive {
            return a.cmp(b);
        }
        a.iter()
            .map(u8::to_ascii_lowercase)
            .cmp(b.iter().map(u8::to_ascii_lowercase))
            .then_with(|| a.cmp(b))
    }
}

/// Sorts `entries` in place.
///
/// With `dirs_first` a stable partition runs after the primary sort.
/// Directories stay in front when `reverse` is set; only their order
/// among themselves is reversed.
pub fn sort_entries(
    entries: &mut [Entry],
    mode: SortMode,
    reverse: bool,
    case_sensitive: bool,
    dirs_first: bool,
) {
    let strategy = SortStrategy::new(mode, reverse, case_sensitive);
    if mode != SortMode::None {
        entries.sort_by(|a, b| strategy.compare(a, b));
    }
    if dirs_first {
        entries.sort_by_key(|e| !e.is_dir());
    }
}
