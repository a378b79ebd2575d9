//! The listing driver.
//!
//! [run] turns the paths given on the command line into printed listings.
//! Paths that are files (or directories under `-d`) are collected as singles
//! and printed first, then every directory gets its own block:
//!
//! ```text
//! file.txt
//!
//! src:
//! core  main.rs
//! ```
//!
//! Labels are printed when more than one block is shown or when a path was
//! missing.

use crate::core::entry::{Details, Entry, EntryKind, EntryOptions};
use crate::core::fm::{MetadataSource, final_component, link_target_path};
use crate::core::glob::matches_any;
use crate::core::session::{EXIT_TROUBLE, Session, UNKNOWN_NAME};
use crate::core::sort::{SortMode, sort_entries};
use crate::ui::{Layout, RenderOptions, print_entries};

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Exit status when a directory could not be read.
pub const EXIT_MINOR: i32 = 1;

/// Which dotfiles are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Hide names starting with `.`
    #[default]
    Visible,
    /// Show dotfiles but not `.` and `..`
    AlmostAll,
    /// Show dotfiles, `.` and `..`
    All,
}

/// Settings for one run, config and command line merged.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub visibility: Visibility,
    pub sort: SortMode,
    pub reverse: bool,
    pub case_sensitive: bool,
    pub dirs_first: bool,
    pub entry: EntryOptions,
    /// Follow symlinks when reading metadata
    pub dereference: bool,
    /// List directory arguments themselves, not their contents
    pub list_directories: bool,
    /// Glob patterns of names to skip
    pub ignore: Vec<String>,
    pub render: RenderOptions,
}

impl Settings {
    #[inline]
    fn is_long(&self) -> bool {
        self.render.layout == Layout::Long
    }

    fn sort(&self, entries: &mut [Entry]) {
        sort_entries(
            entries,
            self.sort,
            self.reverse,
            self.case_sensitive,
            self.dirs_first,
        );
    }
}

/// Lists `paths` (or `.` when empty) into `out`.
///
/// Per-entry failures are reported on stderr through `session` and recorded
/// in its exit status; only write errors end the run early.
pub fn run<S, W>(
    settings: &Settings,
    paths: &[PathBuf],
    source: &S,
    session: &mut Session,
    out: &mut W,
) -> io::Result<()>
where
    S: MetadataSource + ?Sized,
    W: Write,
{
    let current = [PathBuf::from(".")];
    let paths = if paths.is_empty() { &current[..] } else { paths };

    let mut singles = Vec::new();
    let mut groups: Vec<(&Path, Vec<Entry>)> = Vec::new();
    let mut need_label = false;

    for path in paths {
        let followed = source.stat(path, true);
        if let Err(e) = &followed
            && source.stat(path, false).is_err()
        {
            if e.kind() == io::ErrorKind::NotFound {
                session.report_missing(path);
            } else {
                session.report_path(path, &e.to_string());
                session.set_exit_status(EXIT_TROUBLE);
            }
            need_label = true;
            continue;
        }

        let is_dir = matches!(&followed, Ok(s) if s.kind == EntryKind::Directory);
        if is_dir && !settings.list_directories {
            match list_dir(settings, source, session, path) {
                Some(entries) => groups.push((path.as_path(), entries)),
                None => need_label = true,
            }
        } else {
            // Singles show the path as given
            let name = path.as_os_str().to_os_string();
            singles.push(build_entry(settings, source, session, path.clone(), Some(name)));
        }
    }

    log::debug!(
        "listing {} singles and {} directories",
        singles.len(),
        groups.len()
    );

    if !singles.is_empty() {
        settings.sort(&mut singles);
        print_entries(out, &singles, &settings.render, session)?;
    }

    let need_label = need_label || !singles.is_empty() || groups.len() > 1;
    let mut separate = !singles.is_empty();

    for (path, mut entries) in groups {
        if separate {
            out.write_all(b"\n")?;
        }
        separate = true;
        if need_label {
            writeln!(out, "{}:", path.display())?;
        }
        settings.sort(&mut entries);
        print_entries(out, &entries, &settings.render, session)?;
    }
    Ok(())
}

/// Reads and filters the entries of `dir`.
/// Returns None if the directory cannot be read.
fn list_dir<S: MetadataSource + ?Sized>(
    settings: &Settings,
    source: &S,
    session: &mut Session,
    dir: &Path,
) -> Option<Vec<Entry>> {
    let children = match source.enumerate(dir) {
        Ok(children) => children,
        Err(e) => {
            session.report_path(dir, &format!("cannot open directory: {}", e));
            session.set_exit_status(EXIT_MINOR);
            return None;
        }
    };

    let mut entries = Vec::with_capacity(children.len() + 2);
    if settings.visibility == Visibility::All {
        for dots in [".", ".."] {
            let entry = build_entry(settings, source, session, dir.join(dots), Some(dots.into()));
            entries.push(entry);
        }
    }

    for child in children {
        let name = final_component(&child);
        if settings.visibility == Visibility::Visible && name.as_encoded_bytes().first() == Some(&b'.') {
            continue;
        }
        if !settings.ignore.is_empty() && matches_any(&settings.ignore, &name.to_string_lossy()) {
            continue;
        }
        entries.push(build_entry(settings, source, session, child, None));
    }
    Some(entries)
}

/// Stats `path` and builds its entry, with long detail and link target when
/// the layout needs them.
fn build_entry<S: MetadataSource + ?Sized>(
    settings: &Settings,
    source: &S,
    session: &mut Session,
    path: PathBuf,
    name: Option<OsString>,
) -> Entry {
    let status = source.stat(&path, settings.dereference);
    if let Err(e) = &status {
        session.report(&path, &e.to_string());
    }

    let name = name.unwrap_or_else(|| final_component(&path).to_os_string());
    let mut entry = Entry::named(path, name, status.as_ref(), &settings.entry);

    let Ok(status) = status else {
        return entry;
    };

    if settings.is_long() {
        let (owner, group) = match status.identity {
            Some(identity) => session.owner_and_group(source, identity),
            None => (UNKNOWN_NAME.to_string(), UNKNOWN_NAME.to_string()),
        };
        entry = entry.with_details(Details {
            link_count: status.link_count,
            owner,
            group,
            mode: status.mode,
        });
    }

    if entry.is_symlink() && settings.render.shows_targets() {
        entry = attach_target(settings, source, entry);
    }
    entry
}

/// Resolves one hop of a symlink. The link is broken when its contents cannot
/// be read or nothing exists at the place it points to.
fn attach_target<S: MetadataSource + ?Sized>(settings: &Settings, source: &S, link: Entry) -> Entry {
    let Some(stored) = source.resolve_link_target(link.path()) else {
        return link.with_target(None, true);
    };

    let resolved = link_target_path(link.path(), &stored);
    let status = source.stat(&resolved, true);
    let broken = status.is_err();
    let target = Entry::link_target(stored, status.as_ref(), &settings.entry);
    link.with_target(Some(target), broken)
}
