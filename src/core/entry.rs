//! The per-file record consumed by every renderer.
//!
//! An [Entry] is built once from a path and its [Status] (or the error the
//! stat call produced). Its display name is decorated at construction and
//! never touched again.

use crate::core::decorate::{Decorated, NongraphicMode, QuoteMode, decorate};
use crate::core::fm::{Status, TimeMode, final_component};
use crate::core::unicode::display_width;

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};

/// Type of a file system object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryKind {
    Regular,
    Directory,
    Symlink,
    Block,
    Character,
    Fifo,
    Socket,
    NotFound,
    #[default]
    Unknown,
}

/// Settings that shape how entries are built. Fixed for a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryOptions {
    pub quoting: QuoteMode,
    pub nongraphic: NongraphicMode,
    pub time_mode: TimeMode,
}

/// Long-format detail. Only gathered when the long format is in use.
#[derive(Debug, Clone, PartialEq)]
pub struct Details {
    pub link_count: u64,
    pub owner: String,
    pub group: String,
    /// Permission bits, `0o777` masked
    pub mode: u32,
}

/// Represents a single file system object in a listing.
#[derive(Debug, Clone)]
pub struct Entry {
    path: PathBuf,
    name: Box<OsStr>,
    display: Decorated,
    display_width: usize,
    kind: EntryKind,
    flags: u8,
    size: u64,
    time: i64,
    details: Option<Details>,
    /// One hop only: a target never has a target of its own
    target: Option<Box<Entry>>,
}

impl Entry {
    // Flag bit definitions
    pub(crate) const IS_EXECUTABLE: u8 = 1 << 0;
    pub(crate) const IS_TEMPORARY: u8 = 1 << 1;
    pub(crate) const IS_HIDDEN: u8 = 1 << 2;
    pub(crate) const LINK_BROKEN: u8 = 1 << 3;
    pub(crate) const STATUS_FAILED: u8 = 1 << 4;

    /// Builds an entry from a path and the outcome of its stat call.
    pub fn new(path: PathBuf, status: Result<&Status, &io::Error>, opts: &EntryOptions) -> Self {
        let name = final_component(&path).to_os_string();
        Self::named(path, name, status, opts)
    }

    /// Builds the leaf entry for a symlink target.
    /// Its name is the link text as stored, not only its final component.
    pub fn link_target(
        stored: PathBuf,
        status: Result<&Status, &io::Error>,
        opts: &EntryOptions,
    ) -> Self {
        let name = stored.clone().into_os_string();
        Self::named(stored, name, status, opts)
    }

    /// Builds an entry whose name is not the final component of its path,
    /// like `.` and `..` inside a listed directory.
    pub fn named(
        path: PathBuf,
        name: OsString,
        status: Result<&Status, &io::Error>,
        opts: &EntryOptions,
    ) -> Self {
        let raw = name.as_encoded_bytes();
        let display = decorate(raw, opts.quoting, opts.nongraphic);
        let display_width = display_width(&display.bytes);

        let mut flags = 0u8;
        if raw.first() == Some(&b'.') {
            flags |= Self::IS_HIDDEN;
        }
        if is_temporary_name(raw) {
            flags |= Self::IS_TEMPORARY;
        }

        let (kind, size, time) = match status {
            Ok(s) => {
                if s.executable {
                    flags |= Self::IS_EXECUTABLE;
                }
                let size = if s.kind == EntryKind::Directory { 0 } else { s.size };
                (s.kind, size, s.time(opts.time_mode).unwrap_or(0))
            }
            Err(e) => {
                flags |= Self::STATUS_FAILED;
                let kind = if e.kind() == io::ErrorKind::NotFound {
                    EntryKind::NotFound
                } else {
                    EntryKind::Unknown
                };
                (kind, 0, 0)
            }
        };

        Entry {
            path,
            name: name.into_boxed_os_str(),
            display,
            display_width,
            kind,
            flags,
            size,
            time,
            details: None,
            target: None,
        }
    }

    /// Attaches long-format detail.
    pub fn with_details(mut self, details: Details) -> Self {
        self.details = Some(details);
        self
    }

    /// Attaches a resolved link target. The target's own target is dropped.
    pub fn with_target(mut self, target: Option<Entry>, broken: bool) -> Self {
        self.target = target.map(|mut t| {
            t.target = None;
            Box::new(t)
        });
        if broken {
            self.flags |= Self::LINK_BROKEN;
        }
        self
    }

    // Accessors

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw name as listed, usually the final path component.
    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_bytes(&self) -> &[u8] {
        self.name().as_encoded_bytes()
    }

    /// Decorated name as printed.
    #[inline]
    pub fn display_name(&self) -> &[u8] {
        &self.display.bytes
    }

    /// Terminal width of [Entry::display_name].
    #[inline]
    pub fn display_width(&self) -> usize {
        self.display_width
    }

    /// Whether the display name starts with a quote character.
    #[inline]
    pub fn is_quoted(&self) -> bool {
        self.display.quoted
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    #[inline]
    pub fn is_symlink(&self) -> bool {
        self.kind == EntryKind::Symlink
    }

    #[inline]
    pub fn is_executable(&self) -> bool {
        self.flags & Self::IS_EXECUTABLE != 0
    }

    #[inline]
    pub fn is_temporary(&self) -> bool {
        self.flags & Self::IS_TEMPORARY != 0
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.flags & Self::IS_HIDDEN != 0
    }

    #[inline]
    pub fn is_link_broken(&self) -> bool {
        self.flags & Self::LINK_BROKEN != 0
    }

    #[inline]
    pub fn status_failed(&self) -> bool {
        self.flags & Self::STATUS_FAILED != 0
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Seconds since the epoch, as selected by the run's [TimeMode]. 0 when unknown.
    #[inline]
    pub fn time(&self) -> i64 {
        self.time
    }

    #[inline]
    pub fn details(&self) -> Option<&Details> {
        self.details.as_ref()
    }

    #[inline]
    pub fn target(&self) -> Option<&Entry> {
        self.target.as_deref()
    }

    /// Extension bytes without the dot. Dotfiles like `.bashrc` have none.
    pub fn extension_bytes(&self) -> &[u8] {
        Path::new(self.name())
            .extension()
            .map(OsStr::as_encoded_bytes)
            .unwrap_or_default()
    }

    /// Classification character appended after the name.
    pub fn indicator(&self) -> Option<char> {
        match self.kind {
            EntryKind::Directory => Some('/'),
            EntryKind::Symlink => Some('@'),
            EntryKind::Fifo => Some('|'),
            EntryKind::Socket => Some('='),
            EntryKind::Regular if self.is_executable() => Some('*'),
            _ => None,
        }
    }
}

/// Backup and scratch files: `name~`, `*.tmp`, `*.bak`.
fn is_temporary_name(raw: &[u8]) -> bool {
    if raw.last() == Some(&b'~') {
        return true;
    }
    let lower = raw.to_ascii_lowercase();
    lower.ends_with(b".tmp") || lower.ends_with(b".bak")
}
