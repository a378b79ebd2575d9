//! Grid layout.
//!
//! [ColumnLayout] packs entries into as few rows as the output width allows.
//! Entries arrive already sorted, one at a time. Each goes into the first
//! column that still has room for another row; when the grid gets too wide
//! the row count grows and every cell is dealt again, column by column, into
//! fewer columns. Cells are stored column-major, the last column may be short.
//!
//! When any name in the grid is quoted, unquoted names get a leading space so
//! that the names themselves line up.

use crate::core::Entry;
use crate::core::unicode::write_spaces;
use crate::ui::render::{RenderOptions, paint_dim, print_file_name};

use std::io::{self, Write};

#[derive(Debug, Clone, Copy)]
struct Cell<'a> {
    entry: &'a Entry,
    width: usize,
    quoted: bool,
}

impl Cell<'_> {
    /// Width without the opening quote.
    #[inline]
    fn aligned_width(&self) -> usize {
        self.width - usize::from(self.quoted)
    }
}

#[derive(Debug, Default)]
struct Column<'a> {
    cells: Vec<Cell<'a>>,
    width: usize,
}

impl<'a> Column<'a> {
    fn push(&mut self, cell: Cell<'a>) {
        self.width = self.width.max(cell.aligned_width());
        self.cells.push(cell);
    }
}

#[derive(Debug)]
pub struct ColumnLayout<'a> {
    columns: Vec<Column<'a>>,
    rows: usize,
    any_quoted: bool,
    count: usize,
    output_width: usize,
    separator: usize,
}

impl<'a> ColumnLayout<'a> {
    pub fn new(output_width: usize, separator: usize) -> Self {
        Self {
            columns: Vec::new(),
            rows: 1,
            any_quoted: false,
            count: 0,
            output_width,
            separator,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns.len()
    }

    /// Adds the next entry. `width` is what printing its name takes.
    pub fn add(&mut self, entry: &'a Entry, width: usize, quoted: bool) {
        // A quoted name is at least its two quotes wide
        let quoted = quoted && width > 0;
        let cell = Cell {
            entry,
            width,
            quoted,
        };

        let rows = self.rows;
        match self.columns.iter_mut().find(|c| c.cells.len() < rows) {
            Some(column) => column.push(cell),
            None => {
                let mut column = Column::default();
                column.push(cell);
                self.columns.push(column);
            }
        }
        self.any_quoted |= quoted;
        self.count += 1;

        while self.columns.len() > 1 && self.total_width() >= self.output_width {
            self.rows += 1;
            self.reorder();
        }
    }

    /// Projected width of the whole grid.
    fn total_width(&self) -> usize {
        let sum: usize = self.columns.iter().map(|c| c.width).sum();
        let gaps = self.columns.len().saturating_sub(1);
        sum + gaps * (self.separator + usize::from(self.any_quoted))
    }

    /// Number of columns needed for the current row count.
    ///
    /// Starts from half the old column count and adds enough columns for
    /// whatever does not fit into those.
    fn new_column_count(&self) -> usize {
        let halved = self.columns.len() / 2;
        let left = self.count.saturating_sub(halved * self.rows);
        halved + left.div_ceil(self.rows)
    }

    /// Deals every cell again, column-major, into the new column count.
    fn reorder(&mut self) {
        let count = self.new_column_count();
        let mut columns: Vec<Column<'a>> = (0..count).map(|_| Column::default()).collect();

        let cells = std::mem::take(&mut self.columns)
            .into_iter()
            .flat_map(|c| c.cells);
        for (i, cell) in cells.enumerate() {
            columns[i / self.rows].push(cell);
        }

        columns.retain(|c| !c.cells.is_empty());
        self.columns = columns;
    }

    /// Prints the grid row by row.
    ///
    /// The last cell of a row is neither padded nor followed by a separator.
    pub fn print<W: Write>(&self, out: &mut W, opts: &RenderOptions) -> io::Result<()> {
        let shown = opts.max_rows.map_or(self.rows, |max| self.rows.min(max.max(1)));
        let quote_pad = usize::from(self.any_quoted);

        for row in 0..shown {
            let Some(last) = self.columns.iter().rposition(|c| row < c.cells.len()) else {
                continue;
            };
            for (idx, column) in self.columns[..=last].iter().enumerate() {
                let Some(cell) = column.cells.get(row) else {
                    continue;
                };
                let lead = usize::from(self.any_quoted && !cell.quoted);
                if lead == 1 {
                    out.write_all(b" ")?;
                }
                let printed = print_file_name(out, cell.entry, opts)?;
                if idx < last {
                    let field = column.width + quote_pad;
                    let used = printed + lead;
                    write_spaces(out, field.saturating_sub(used) + self.separator)?;
                }
            }
            out.write_all(b"\n")?;
        }

        if shown < self.rows {
            let color = opts.tint(opts.theme.truncation());
            paint_dim(out, color, b"...")?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EntryKind, EntryOptions, Status};

    use rand::Rng;
    use std::path::PathBuf;

    fn files(names: &[&str]) -> Vec<Entry> {
        let status = Status {
            kind: EntryKind::Regular,
            ..Status::default()
        };
        names
            .iter()
            .map(|n| Entry::new(PathBuf::from(n), Ok(&status), &EntryOptions::default()))
            .collect()
    }

    fn uniform(count: usize, width: usize) -> Vec<Entry> {
        let names: Vec<String> = (0..count)
            .map(|i| format!("{}{}", "x".repeat(width - 1), i % 10))
            .collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        files(&refs)
    }

    fn render(entries: &[Entry], opts: &RenderOptions) -> io::Result<String> {
        let mut layout = ColumnLayout::new(opts.width, opts.separator);
        for e in entries {
            layout.add(e, e.display_width(), e.is_quoted());
        }
        let mut out = Vec::new();
        layout.print(&mut out, opts)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Smallest row count whose grid fits, by brute force.
    fn minimal_rows(count: usize, width: usize, sep: usize, output: usize) -> usize {
        (1..=count)
            .find(|&rows| {
                let cols = count.div_ceil(rows);
                cols == 1 || cols * width + (cols - 1) * sep < output
            })
            .unwrap_or(1)
    }

    #[test]
    fn everything_on_one_row_when_it_fits() -> io::Result<()> {
        let entries = files(&["a", "bb", "ccc"]);
        let text = render(&entries, &RenderOptions::default())?;
        assert_eq!(text, "a  bb  ccc\n");
        Ok(())
    }

    #[test]
    fn fills_columns_top_to_bottom() -> io::Result<()> {
        let entries = files(&["aaaa", "bbbb", "cccc", "dddd", "eeee"]);
        let opts = RenderOptions {
            width: 20,
            ..RenderOptions::default()
        };
        // Five cells of width 4 fit three to a row at width 20
        let text = render(&entries, &opts)?;
        assert_eq!(text, "aaaa  cccc  eeee\nbbbb  dddd\n");
        Ok(())
    }

    #[test]
    fn short_names_are_padded_but_row_ends_are_not() -> io::Result<()> {
        let entries = files(&["a", "bbbbbb", "cc", "d"]);
        let opts = RenderOptions {
            width: 12,
            ..RenderOptions::default()
        };
        let text = render(&entries, &opts)?;
        assert_eq!(text, "a       cc\nbbbbbb  d\n");
        Ok(())
    }

    #[test]
    fn quoted_names_keep_alignment() -> io::Result<()> {
        let entries = files(&["a b", "c"]);
        let text = render(&entries, &RenderOptions::default())?;
        // The unquoted name gets a leading space
        assert_eq!(text, "'a b'   c\n");
        Ok(())
    }

    #[test]
    fn uniform_widths_use_minimal_rows() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let count = rng.random_range(1..60);
            let width = rng.random_range(1..12);
            let output = rng.random_range(2..120);
            let entries = uniform(count, width);

            let mut layout = ColumnLayout::new(output, 2);
            for e in &entries {
                layout.add(e, e.display_width(), false);
            }
            assert_eq!(
                layout.rows(),
                minimal_rows(count, width, 2, output),
                "count {} width {} output {}",
                count,
                width,
                output
            );
        }
    }

    #[test]
    fn a_wide_entry_never_reduces_rows() {
        let entries = uniform(30, 3);
        let wide = files(&["a_much_wider_name_than_the_rest"]);
        let mut layout = ColumnLayout::new(40, 2);
        for e in &entries {
            layout.add(e, e.display_width(), false);
        }
        let before = layout.rows();
        layout.add(&wide[0], wide[0].display_width(), false);
        assert!(layout.rows() >= before);
    }

    #[test]
    fn truncated_grid_ends_with_marker() -> io::Result<()> {
        let entries = uniform(10, 5);
        let opts = RenderOptions {
            width: 6,
            max_rows: Some(3),
            ..RenderOptions::default()
        };
        let text = render(&entries, &opts)?;
        assert_eq!(text, "xxxx0\nxxxx1\nxxxx2\n...\n");
        Ok(())
    }
}
