//! Rendering entry points for lst.
//!
//! [print_entries] dispatches a sorted slice of entries to one of the three
//! layouts. The name printing shared by all of them lives here: colors,
//! icons, classification indicators and link targets.

use crate::config::Theme;
use crate::core::{Entry, EntryKind, Session, SizeStyle};
use crate::ui::columns::ColumnLayout;
use crate::ui::icons::{icon_width, nerd_font_icon};
use crate::ui::long::{self, LongColumn};

use crossterm::queue;
use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};
use serde::Deserialize;

use std::io::{self, Write};

/// How entries are laid out.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Width-balanced columns
    #[default]
    Grid,
    /// One name per line
    #[serde(rename = "single", alias = "oneline")]
    SingleColumn,
    /// One detailed row per entry
    Long,
}

/// Everything the renderers need to know for a run.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub layout: Layout,
    pub classify: bool,
    pub icons: bool,
    pub color: bool,
    pub size_style: SizeStyle,
    pub date_format: Option<String>,
    pub long_format: Vec<LongColumn>,
    /// Output width in columns
    pub width: usize,
    pub separator: usize,
    /// Grid rows to print before cutting off with a `...` marker
    pub max_rows: Option<usize>,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            layout: Layout::Grid,
            classify: true,
            icons: false,
            color: false,
            size_style: SizeStyle::Bytes,
            date_format: None,
            long_format: long::defaults(),
            width: 80,
            separator: 2,
            max_rows: None,
            theme: Theme::default(),
        }
    }
}

impl RenderOptions {
    /// `color` if colored output is on.
    #[inline]
    pub(crate) fn tint(&self, color: Color) -> Option<Color> {
        self.color.then_some(color)
    }

    /// Whether link targets are printed after names.
    #[inline]
    pub fn shows_targets(&self) -> bool {
        matches!(self.layout, Layout::Long | Layout::SingleColumn)
    }
}

/// Prints `entries` in the configured layout.
pub fn print_entries<W: Write>(
    out: &mut W,
    entries: &[Entry],
    opts: &RenderOptions,
    session: &Session,
) -> io::Result<()> {
    match opts.layout {
        Layout::Grid => {
            let mut layout = ColumnLayout::new(opts.width, opts.separator);
            for entry in entries {
                layout.add(entry, name_width(entry, opts), entry.is_quoted());
            }
            layout.print(out, opts)
        }
        Layout::SingleColumn => {
            for entry in entries {
                print_file_name(out, entry, opts)?;
                out.write_all(b"\n")?;
            }
            Ok(())
        }
        Layout::Long => long::print_long(out, entries, opts, session),
    }
}

/// Writes `bytes` in `color`, resetting afterwards.
pub(crate) fn paint<W: Write>(out: &mut W, color: Option<Color>, bytes: &[u8]) -> io::Result<()> {
    match color {
        Some(c) => {
            queue!(out, SetForegroundColor(c))?;
            out.write_all(bytes)?;
            queue!(out, ResetColor)
        }
        None => out.write_all(bytes),
    }
}

/// Writes `bytes` dimmed and in `color`.
pub(crate) fn paint_dim<W: Write>(out: &mut W, color: Option<Color>, bytes: &[u8]) -> io::Result<()> {
    match color {
        Some(c) => {
            queue!(out, SetAttribute(Attribute::Dim), SetForegroundColor(c))?;
            out.write_all(bytes)?;
            queue!(out, ResetColor, SetAttribute(Attribute::Reset))
        }
        None => out.write_all(bytes),
    }
}

/// Prints icon, name and indicator of `entry`, followed by its link target
/// when the layout shows targets.
///
/// # Returns
/// The number of terminal columns written.
pub fn print_file_name<W: Write>(out: &mut W, entry: &Entry, opts: &RenderOptions) -> io::Result<usize> {
    let mut width = print_name(out, entry, opts)?;

    if opts.shows_targets()
        && let Some(target) = entry.target()
    {
        out.write_all(b" -> ")?;
        width += 4 + print_name(out, target, opts)?;
    }
    Ok(width)
}

fn print_name<W: Write>(out: &mut W, entry: &Entry, opts: &RenderOptions) -> io::Result<usize> {
    let color = name_color(entry, &opts.theme).and_then(|c| opts.tint(c));
    let mut width = 0;

    if opts.icons {
        let icon = nerd_font_icon(entry);
        paint(out, color, icon.as_bytes())?;
        out.write_all(b" ")?;
        width += icon_width(icon) + 1;
    }

    paint(out, color, entry.display_name())?;
    width += entry.display_width();

    if opts.classify
        && let Some(indicator) = entry.indicator()
    {
        let mut buf = [0u8; 4];
        let color = indicator_color(entry, &opts.theme).and_then(|c| opts.tint(c));
        paint(out, color, indicator.encode_utf8(&mut buf).as_bytes())?;
        width += 1;
    }
    Ok(width)
}

/// Columns [print_file_name] writes for `entry`.
pub fn name_width(entry: &Entry, opts: &RenderOptions) -> usize {
    let mut width = own_name_width(entry, opts);
    if opts.shows_targets()
        && let Some(target) = entry.target()
    {
        width += 4 + own_name_width(target, opts);
    }
    width
}

fn own_name_width(entry: &Entry, opts: &RenderOptions) -> usize {
    let mut width = entry.display_width();
    if opts.icons {
        width += icon_width(nerd_font_icon(entry)) + 1;
    }
    if opts.classify && entry.indicator().is_some() {
        width += 1;
    }
    width
}

/// Color of an entry's name, None for plain text.
pub fn name_color(entry: &Entry, theme: &Theme) -> Option<Color> {
    if entry.is_temporary() {
        return Some(theme.temporary());
    }
    match entry.kind() {
        EntryKind::Directory => Some(theme.directory()),
        EntryKind::Symlink if entry.is_link_broken() => Some(theme.broken_link()),
        EntryKind::Symlink => Some(theme.symlink()),
        EntryKind::NotFound => Some(theme.broken_link()),
        EntryKind::Regular if entry.is_executable() => Some(theme.executable()),
        _ => None,
    }
}

/// Color of an entry's classification indicator.
pub fn indicator_color(entry: &Entry, theme: &Theme) -> Option<Color> {
    let indicator = theme.indicator();
    match entry.kind() {
        EntryKind::Directory => Some(indicator.directory()),
        EntryKind::Symlink => Some(indicator.symlink()),
        EntryKind::Fifo | EntryKind::Socket => Some(indicator.special()),
        EntryKind::Regular if entry.is_executable() => Some(indicator.executable()),
        _ => None,
    }
}
