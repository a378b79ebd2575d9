//! Long listing.
//!
//! A long format is a template like `$t$p $l $o $g $s $d $n`. Each `$x`
//! placeholder names one column, everything else is printed as is.
//!
//! | Field | Column                   |
//! |-------|--------------------------|
//! | `$t`  | type letter              |
//! | `$p`  | permissions, `rwxr-xr-x` |
//! | `$P`  | permissions, octal       |
//! | `$l`  | hard link count          |
//! | `$o`  | owner                    |
//! | `$g`  | group                    |
//! | `$s`  | size                     |
//! | `$d`  | date                     |
//! | `$n`  | name and link target     |

use crate::core::formatter::{format_date, format_octal, format_rwx, format_size, size_width, type_letter};
use crate::core::session::UNKNOWN_NAME;
use crate::core::unicode::{display_width, pad_bytes, padding_offset, write_spaces};
use crate::core::{Entry, Session};
use crate::error::FormatError;
use crate::ui::render::{RenderOptions, name_width, paint, print_file_name};

use crossterm::style::Color;

use std::io::{self, Write};

pub const DEFAULT_LONG_FORMAT: &str = "$t$p $l $o $g $s $d $n";

const DIR_SIZE: &str = "<DIR>";
const UNKNOWN: &[u8] = b"?";

/// One column of the long listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LongColumn {
    Type,
    Rwx,
    Octal,
    Links,
    Owner,
    Group,
    Size,
    Date,
    Name,
    /// Literal text between placeholders
    Text(String),
}

impl LongColumn {
    fn from_letter(letter: char) -> Option<Self> {
        Some(match letter {
            't' => LongColumn::Type,
            'p' => LongColumn::Rwx,
            'P' => LongColumn::Octal,
            'l' => LongColumn::Links,
            'o' => LongColumn::Owner,
            'g' => LongColumn::Group,
            's' => LongColumn::Size,
            'd' => LongColumn::Date,
            'n' => LongColumn::Name,
            _ => return None,
        })
    }
}

/// Parses a long format template.
///
/// # Errors
/// Unknown placeholder letters, placeholders used twice and a trailing `$`.
pub fn parse_long_format(format: &str) -> Result<Vec<LongColumn>, FormatError> {
    let mut columns = Vec::new();
    let mut seen = Vec::new();
    let mut text = String::new();
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        if c != '$' {
            text.push(c);
            continue;
        }
        let letter = chars.next().ok_or(FormatError::Dangling)?;
        let column = LongColumn::from_letter(letter).ok_or(FormatError::UnknownField(letter))?;
        if seen.contains(&letter) {
            return Err(FormatError::Duplicate(letter));
        }
        seen.push(letter);

        if !text.is_empty() {
            columns.push(LongColumn::Text(std::mem::take(&mut text)));
        }
        columns.push(column);
    }

    if !text.is_empty() {
        columns.push(LongColumn::Text(text));
    }
    Ok(columns)
}

/// The columns of [DEFAULT_LONG_FORMAT].
pub fn defaults() -> Vec<LongColumn> {
    use LongColumn::*;
    let gap = || Text(" ".to_string());
    vec![
        Type,
        Rwx,
        gap(),
        Links,
        gap(),
        Owner,
        gap(),
        Group,
        gap(),
        Size,
        gap(),
        Date,
        gap(),
        Name,
    ]
}

/// Column widths, the max over all entries.
#[derive(Debug, Default)]
struct Widths {
    links: usize,
    owner: usize,
    group: usize,
    size: usize,
    date: usize,
    name: usize,
}

/// Prints one row per entry.
pub fn print_long<W: Write>(
    out: &mut W,
    entries: &[Entry],
    opts: &RenderOptions,
    session: &Session,
) -> io::Result<()> {
    let columns = &opts.long_format;
    let name_is_last = matches!(columns.last(), Some(LongColumn::Name));
    let custom_date = opts.date_format.as_deref();

    let dates: Vec<Option<String>> = entries
        .iter()
        .map(|e| {
            if e.status_failed() || e.time() == 0 {
                None
            } else {
                format_date(e.time(), session.six_months_ago(), custom_date)
            }
        })
        .collect();

    let mut widths = Widths {
        links: 1,
        owner: 1,
        group: 1,
        size: 1,
        // Both default formats are 13 columns wide
        date: if custom_date.is_some() { 1 } else { 13 },
        name: 0,
    };
    for (entry, date) in entries.iter().zip(&dates) {
        if let Some(d) = entry.details() {
            widths.links = widths.links.max(d.link_count.to_string().len());
            widths.owner = widths.owner.max(display_width(d.owner.as_bytes()));
            widths.group = widths.group.max(display_width(d.group.as_bytes()));
        }
        if entry.is_dir() {
            widths.size = widths.size.max(DIR_SIZE.len());
        } else if !entry.status_failed() {
            widths.size = widths.size.max(size_width(entry.size(), opts.size_style));
        }
        if custom_date.is_some()
            && let Some(d) = date
        {
            widths.date = widths.date.max(display_width(d.as_bytes()));
        }
        if !name_is_last {
            widths.name = widths.name.max(name_width(entry, opts));
        }
    }

    let theme = &opts.theme;
    let error = opts.tint(theme.error());

    for (entry, date) in entries.iter().zip(&dates) {
        let details = entry.details();
        for (idx, column) in columns.iter().enumerate() {
            let is_last = idx + 1 == columns.len();
            match column {
                LongColumn::Type => {
                    let mut buf = [0u8; 4];
                    out.write_all(type_letter(entry.kind()).encode_utf8(&mut buf).as_bytes())?;
                }
                LongColumn::Rwx => match details {
                    Some(d) => out.write_all(format_rwx(d.mode).as_bytes())?,
                    None => paint(out, error, b"?????????")?,
                },
                LongColumn::Octal => match details {
                    Some(d) => out.write_all(format_octal(d.mode).as_bytes())?,
                    None => paint(out, error, b"???")?,
                },
                LongColumn::Links => match details {
                    Some(d) => {
                        let count = d.link_count.to_string();
                        right(out, None, count.as_bytes(), widths.links)?;
                    }
                    None => right(out, error, UNKNOWN, widths.links)?,
                },
                LongColumn::Owner => {
                    let owner = details.map_or(UNKNOWN_NAME, |d| d.owner.as_str());
                    print_name_field(out, opts, owner, widths.owner)?;
                }
                LongColumn::Group => {
                    let group = details.map_or(UNKNOWN_NAME, |d| d.group.as_str());
                    print_name_field(out, opts, group, widths.group)?;
                }
                LongColumn::Size => {
                    if entry.is_dir() {
                        let color = opts.tint(theme.dir_size());
                        right(out, color, DIR_SIZE.as_bytes(), widths.size)?;
                    } else if entry.status_failed() {
                        right(out, error, UNKNOWN, widths.size)?;
                    } else {
                        let (number, unit) = format_size(entry.size(), opts.size_style);
                        let text = format!("{}{}", number, unit);
                        right(out, opts.tint(theme.size()), text.as_bytes(), widths.size)?;
                    }
                }
                LongColumn::Date => match date {
                    Some(d) => {
                        out.write_all(d.as_bytes())?;
                        if !is_last {
                            write_spaces(out, widths.date.saturating_sub(display_width(d.as_bytes())))?;
                        }
                    }
                    None => right(out, error, UNKNOWN, widths.date)?,
                },
                LongColumn::Name => {
                    let printed = print_file_name(out, entry, opts)?;
                    if !is_last {
                        write_spaces(out, widths.name.saturating_sub(printed))?;
                    }
                }
                LongColumn::Text(text) => out.write_all(text.as_bytes())?,
            }
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Writes `text` right-aligned to `width` display columns.
fn right<W: Write>(out: &mut W, color: Option<Color>, text: &[u8], width: usize) -> io::Result<()> {
    write_spaces(out, width.saturating_sub(display_width(text)))?;
    paint(out, color, text)
}

/// Owner and group, right-aligned. Unresolved names are drawn as errors.
fn print_name_field<W: Write>(out: &mut W, opts: &RenderOptions, name: &str, width: usize) -> io::Result<()> {
    let color = if name == UNKNOWN_NAME {
        opts.theme.error()
    } else {
        opts.theme.names()
    };
    let bytes = name.as_bytes();
    let mut padded = Vec::with_capacity(width + bytes.len());
    pad_bytes(&mut padded, bytes, width + padding_offset(bytes))?;
    paint(out, opts.tint(color), &padded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Details, EntryKind, EntryOptions, Status};

    use std::path::PathBuf;

    const NOW: i64 = 1_700_000_000;
    const SIX_MONTHS: i64 = 183 * 24 * 3600;

    fn session() -> Session {
        Session::with_clock(NOW - SIX_MONTHS)
    }

    fn entry(name: &str, kind: EntryKind, size: u64, details: Option<Details>) -> Entry {
        let status = Status {
            kind,
            size,
            modified: Some(NOW - 60),
            ..Status::default()
        };
        let e = Entry::new(PathBuf::from(name), Ok(&status), &EntryOptions::default());
        match details {
            Some(d) => e.with_details(d),
            None => e,
        }
    }

    fn details(owner: &str, mode: u32) -> Details {
        Details {
            link_count: 1,
            owner: owner.to_string(),
            group: "staff".to_string(),
            mode,
        }
    }

    fn render(entries: &[Entry], format: &str) -> Result<String, Box<dyn std::error::Error>> {
        let opts = RenderOptions {
            long_format: parse_long_format(format)?,
            ..RenderOptions::default()
        };
        let mut out = Vec::new();
        print_long(&mut out, entries, &opts, &session())?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn parse_fields_and_text() -> Result<(), FormatError> {
        let columns = parse_long_format("[$t] $n!")?;
        assert_eq!(
            columns,
            vec![
                LongColumn::Text("[".into()),
                LongColumn::Type,
                LongColumn::Text("] ".into()),
                LongColumn::Name,
                LongColumn::Text("!".into()),
            ]
        );
        assert_eq!(parse_long_format(DEFAULT_LONG_FORMAT)?, defaults());
        Ok(())
    }

    #[test]
    fn parse_rejects_bad_templates() {
        assert_eq!(parse_long_format("$x"), Err(FormatError::UnknownField('x')));
        assert_eq!(parse_long_format("$n $n"), Err(FormatError::Duplicate('n')));
        assert_eq!(parse_long_format("$t$"), Err(FormatError::Dangling));
    }

    #[test]
    fn directory_row() -> Result<(), Box<dyn std::error::Error>> {
        let docs = entry("docs", EntryKind::Directory, 0, Some(details("me", 0o755)));
        let text = render(&[docs], "$t$p $s $n")?;
        assert_eq!(text, "drwxr-xr-x <DIR> docs/\n");
        Ok(())
    }

    #[test]
    fn sizes_and_names_are_right_aligned() -> Result<(), Box<dyn std::error::Error>> {
        let entries = [
            entry("big", EntryKind::Regular, 12345, Some(details("root", 0o644))),
            entry("small", EntryKind::Regular, 7, Some(details("me", 0o600))),
        ];
        let text = render(&entries, "$o $s $n")?;
        assert_eq!(text, "root 12345 big\n  me     7 small\n");
        Ok(())
    }

    #[test]
    fn failed_entries_show_markers() -> Result<(), Box<dyn std::error::Error>> {
        let err = io::Error::from(io::ErrorKind::PermissionDenied);
        let failed = Entry::new(PathBuf::from("locked"), Err(&err), &EntryOptions::default());
        let ok = entry("file", EntryKind::Regular, 100, Some(details("me", 0o644)));
        let text = render(&[ok, failed], "$t $s $d $n")?;
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("- 100 "));
        // Size is right-aligned to three columns, the date to thirteen
        assert_eq!(lines[1], format!("?   ? {}? locked", " ".repeat(12)));
        Ok(())
    }

    #[test]
    fn name_column_is_padded_when_not_last() -> Result<(), Box<dyn std::error::Error>> {
        let entries = [
            entry("a", EntryKind::Regular, 1, None),
            entry("abc", EntryKind::Regular, 2, None),
        ];
        let text = render(&entries, "$n|$s")?;
        assert_eq!(text, "a  |1\nabc|2\n");
        Ok(())
    }

    #[test]
    fn custom_date_format_sizes_the_column() -> Result<(), Box<dyn std::error::Error>> {
        let opts = RenderOptions {
            long_format: parse_long_format("$d|$n")?,
            date_format: Some("%Y".to_string()),
            ..RenderOptions::default()
        };
        let entries = [entry("a", EntryKind::Regular, 1, None)];
        let mut out = Vec::new();
        print_long(&mut out, &entries, &opts, &session())?;
        assert_eq!(String::from_utf8(out)?, "2023|a\n");
        Ok(())
    }
}
