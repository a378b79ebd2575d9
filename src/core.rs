//! Core listing logic for lst.
//!
//! This module contains the non-rendering pieces of a listing:
//! - [fm]: the [MetadataSource] seam to the file system and its [LocalFs] implementation.
//! - [entry]: the normalized per-file [Entry] record.
//! - [decorate]: quoting and escaping of raw names.
//! - [unicode]: UTF-8 decoding and display width.
//! - [natural]: natural ("version") ordering.
//! - [sort]: the sort engine.
//! - [glob]: ignore pattern matching.
//! - [formatter]: long format field formatting.
//! - [session]: per-run state.
//! - [listing]: the driver tying argument paths to the renderers.

pub mod decorate;
pub mod entry;
pub mod fm;
pub mod formatter;
pub mod glob;
pub mod listing;
pub mod natural;
pub mod session;
pub mod sort;
pub mod unicode;

pub use decorate::{NongraphicMode, QuoteMode, decorate};
pub use entry::{Details, Entry, EntryKind, EntryOptions};
pub use fm::{Identity, LocalFs, MetadataSource, Status, TimeMode};
pub use formatter::SizeStyle;
pub use glob::glob_match;
pub use listing::{Settings, Visibility, run};
pub use natural::natural_compare;
pub use session::Session;
pub use sort::{SortMode, SortStrategy, sort_entries};
