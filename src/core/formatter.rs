//! Field formatting for the long listing.
//!
//! Turns [Entry](crate::core::Entry) attributes into the text of a long
//! format column: type letter, permissions, sizes and dates.

use crate::core::EntryKind;
use crate::error::FormatError;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};

/// Dates older than six months show the year instead of the time of day.
pub const OLD_DATE_FORMAT: &str = "%d. %b  %Y";
pub const RECENT_DATE_FORMAT: &str = "%d. %b %H:%M";

const UNITS_1024: [&str; 7] = ["", "K", "M", "G", "T", "P", "E"];
const UNITS_1000: [&str; 7] = ["", "k", "M", "G", "T", "P", "E"];

/// Unit base of human readable sizes.
#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SizeStyle {
    /// Plain byte counts
    #[default]
    Bytes,
    /// Powers of 1024
    Binary,
    /// Powers of 1000
    Si,
}

impl SizeStyle {
    fn base(self) -> Option<u64> {
        match self {
            SizeStyle::Bytes => None,
            SizeStyle::Binary => Some(1024),
            SizeStyle::Si => Some(1000),
        }
    }
}

/// The single letter of the long listing's type column.
pub fn type_letter(kind: EntryKind) -> char {
    match kind {
        EntryKind::Regular => '-',
        EntryKind::Directory => 'd',
        EntryKind::Symlink => 'l',
        EntryKind::Block => 'b',
        EntryKind::Character => 'c',
        EntryKind::Fifo => 'p',
        EntryKind::Socket => 's',
        EntryKind::NotFound | EntryKind::Unknown => '?',
    }
}

/// Formats permission bits in the `rwxr-xr-x` style.
pub fn format_rwx(mode: u32) -> String {
    let mut chars = ['-'; 9];
    let shifts = [6, 3, 0];
    for (i, &shift) in shifts.iter().enumerate() {
        let base = i * 3;
        if (mode >> (shift + 2)) & 1u32 != 0 {
            chars[base] = 'r';
        }
        if (mode >> (shift + 1)) & 1u32 != 0 {
            chars[base + 1] = 'w';
        }
        if (mode >> shift) & 1u32 != 0 {
            chars[base + 2] = 'x';
        }
    }
    chars.iter().collect()
}

/// Formats permission bits as three octal digits.
pub fn format_octal(mode: u32) -> String {
    format!("{:03o}", mode & 0o777)
}

/// Formats a byte count.
///
/// Human readable styles divide by the base while the value exceeds it and
/// print one decimal with a unit letter. Values not above the base stay plain
/// integers.
///
/// # Returns
/// The formatted number and the unit suffix (empty for plain integers).
pub fn format_size(size: u64, style: SizeStyle) -> (String, &'static str) {
    let Some(base) = style.base() else {
        return (size.to_string(), "");
    };

    let units = if base == 1000 { &UNITS_1000 } else { &UNITS_1024 };
    let mut value = size as f64;
    let mut power = 0;
    while value > base as f64 && power + 1 < units.len() {
        value /= base as f64;
        power += 1;
    }

    if power == 0 {
        (size.to_string(), "")
    } else {
        (format!("{:.1}", value), units[power])
    }
}

/// Width of a formatted size, unit included.
pub fn size_width(size: u64, style: SizeStyle) -> usize {
    let (num, unit) = format_size(size, style);
    num.len() + unit.len()
}

/// Validates a user supplied strftime format.
pub fn validate_date_format(format: &str) -> Result<(), FormatError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(FormatError::InvalidDate(format.to_string()));
    }
    Ok(())
}

/// Formats an epoch timestamp in local time.
///
/// Without a custom format, timestamps before `six_months_ago` print the year
/// and recent ones print the time of day.
///
/// # Returns
/// None if the timestamp cannot be represented.
pub fn format_date(secs: i64, six_months_ago: i64, custom: Option<&str>) -> Option<String> {
    let dt: DateTime<Local> = Local.timestamp_opt(secs, 0).single()?;
    let fmt = match custom {
        Some(f) => f,
        None if secs < six_months_ago => OLD_DATE_FORMAT,
        None => RECENT_DATE_FORMAT,
    };
    Some(dt.format(fmt).to_string())
}
