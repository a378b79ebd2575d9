//! File system access for lst.
//!
//! Everything lst needs from the operating system goes through the
//! [MetadataSource] trait: directory enumeration, stat, symlink resolution
//! and owner/group name lookup. [LocalFs] is the real implementation;
//! tests substitute their own sources to feed synthetic metadata.
//!
//! Metadata is normalized into a [Status] so that entries can be built
//! without touching `std::fs` types.

use crate::core::EntryKind;

use std::ffi::OsStr;
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Which file time an entry carries. Fixed for the whole run.
#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeMode {
    #[default]
    Write,
    Access,
    Creation,
}

impl std::str::FromStr for TimeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "write" | "mtime" | "modification" => Ok(TimeMode::Write),
            "access" | "atime" | "use" => Ok(TimeMode::Access),
            "creation" | "birth" | "ctime" => Ok(TimeMode::Creation),
            _ => Err(format!(
                "invalid time '{}' (valid: write, access, creation)",
                s
            )),
        }
    }
}

/// OS identity used to look up owner and group names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity {
    pub uid: u32,
    pub gid: u32,
}

/// Normalized result of a stat call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Status {
    pub kind: EntryKind,
    /// Permission bits, `0o777` masked
    pub mode: u32,
    pub size: u64,
    pub modified: Option<i64>,
    pub accessed: Option<i64>,
    pub created: Option<i64>,
    pub link_count: u64,
    pub identity: Option<Identity>,
    pub executable: bool,
}

impl Status {
    /// Builds a [Status] from std metadata.
    /// `path` is only used on Windows to detect executables by extension.
    #[cfg_attr(not(windows), allow(unused_variables))]
    pub fn from_metadata(meta: &Metadata, path: &Path) -> Self {
        let kind = kind_of(&meta.file_type());
        let mut status = Status {
            kind,
            size: if kind == EntryKind::Directory { 0 } else { meta.len() },
            modified: meta.modified().ok().map(epoch_secs),
            accessed: meta.accessed().ok().map(epoch_secs),
            created: meta.created().ok().map(epoch_secs),
            link_count: 1,
            ..Status::default()
        };

        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;

            status.mode = meta.mode() & 0o777;
            status.link_count = meta.nlink();
            status.identity = Some(Identity {
                uid: meta.uid(),
                gid: meta.gid(),
            });
            status.executable = kind == EntryKind::Regular && status.mode & EXEC_FLAG != 0;
        }

        #[cfg(windows)]
        {
            status.mode = if meta.permissions().readonly() {
                0o444
            } else {
                0o666
            };
            if kind == EntryKind::Directory {
                status.mode |= 0o111;
            }
            status.executable = kind == EntryKind::Regular
                && path
                    .extension()
                    .and_then(OsStr::to_str)
                    .is_some_and(is_executable_extension);
        }

        status
    }

    /// The timestamp selected by `mode`, if the platform provides it.
    pub fn time(&self, mode: TimeMode) -> Option<i64> {
        match mode {
            TimeMode::Write => self.modified,
            TimeMode::Access => self.accessed,
            TimeMode::Creation => self.created,
        }
    }
}

/// Any execute bit set
#[cfg(unix)]
const EXEC_FLAG: u32 = 0o111;

#[cfg(windows)]
fn is_executable_extension(ext: &str) -> bool {
    matches!(
        ext.to_ascii_lowercase().as_str(),
        "exe" | "com" | "bat" | "cmd" | "ps1"
    )
}

fn epoch_secs(t: SystemTime) -> i64 {
    match t.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    }
}

fn kind_of(ft: &fs::FileType) -> EntryKind {
    if ft.is_dir() {
        return EntryKind::Directory;
    }
    if ft.is_symlink() {
        return EntryKind::Symlink;
    }
    if ft.is_file() {
        return EntryKind::Regular;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::FileTypeExt;
        if ft.is_block_device() {
            return EntryKind::Block;
        }
        if ft.is_char_device() {
            return EntryKind::Character;
        }
        if ft.is_fifo() {
            return EntryKind::Fifo;
        }
        if ft.is_socket() {
            return EntryKind::Socket;
        }
    }

    EntryKind::Unknown
}

/// Source of file system metadata.
///
/// Failures are returned to the caller, which turns them into
/// `status_failed` entries instead of aborting the listing.
pub trait MetadataSource {
    /// Paths of the entries of `dir`, in whatever order the platform yields them.
    fn enumerate(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    /// Metadata for `path`, following symlinks when `dereference` is set.
    fn stat(&self, path: &Path, dereference: bool) -> io::Result<Status>;

    /// Contents of the symlink at `path`, exactly as stored in the link.
    fn resolve_link_target(&self, path: &Path) -> Option<PathBuf>;

    /// Owner and group names for `identity`, if both can be resolved.
    fn owner_and_group(&self, identity: Identity) -> Option<(String, String)>;
}

/// [MetadataSource] backed by the local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl MetadataSource for LocalFs {
    fn enumerate(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut paths = Vec::with_capacity(256);
        for entry in fs::read_dir(dir)? {
            match entry {
                Ok(e) => paths.push(e.path()),
                Err(e) => log::debug!("skipping unreadable entry in {}: {}", dir.display(), e),
            }
        }
        Ok(paths)
    }

    fn stat(&self, path: &Path, dereference: bool) -> io::Result<Status> {
        let meta = if dereference {
            fs::metadata(path)?
        } else {
            fs::symlink_metadata(path)?
        };
        Ok(Status::from_metadata(&meta, path))
    }

    fn resolve_link_target(&self, path: &Path) -> Option<PathBuf> {
        fs::read_link(path).ok()
    }

    #[cfg(unix)]
    fn owner_and_group(&self, identity: Identity) -> Option<(String, String)> {
        let owner = users::get_user_by_uid(identity.uid)?;
        let group = users::get_group_by_gid(identity.gid)?;
        Some((
            owner.name().to_string_lossy().into_owned(),
            group.name().to_string_lossy().into_owned(),
        ))
    }

    #[cfg(not(unix))]
    fn owner_and_group(&self, _identity: Identity) -> Option<(String, String)> {
        None
    }
}

/// Resolves a link's stored target against the directory containing the link.
pub fn link_target_path(link: &Path, stored: &Path) -> PathBuf {
    if stored.is_absolute() {
        stored.to_path_buf()
    } else {
        link.parent().unwrap_or_else(|| Path::new("")).join(stored)
    }
}

/// Final component of `path`, or the whole path when it has none (`.`, `/`, `..`).
pub fn final_component(path: &Path) -> &OsStr {
    path.file_name().unwrap_or(path.as_os_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn stat_regular_file() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let file_path = tmp.path().join("hello.txt");
        let mut file = File::create(&file_path)?;
        write!(file, "abc123")?;

        let status = LocalFs.stat(&file_path, false)?;
        assert_eq!(status.kind, EntryKind::Regular);
        assert_eq!(status.size, 6);
        assert!(status.modified.is_some());
        Ok(())
    }

    #[test]
    fn stat_directory_has_zero_size() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let dir_path = tmp.path().join("emptydir");
        fs::create_dir(&dir_path)?;

        let status = LocalFs.stat(&dir_path, false)?;
        assert_eq!(status.kind, EntryKind::Directory);
        assert_eq!(status.size, 0);
        Ok(())
    }

    #[test]
    fn stat_nonexistent() {
        let path = PathBuf::from("/path/does/not/exist");
        let err = LocalFs.stat(&path, false).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn enumerate_lists_children() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        File::create(tmp.path().join("a"))?;
        File::create(tmp.path().join("b"))?;
        let mut names: Vec<_> = LocalFs
            .enumerate(tmp.path())?
            .into_iter()
            .map(|p| final_component(&p).to_os_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["a", "b"]);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn symlink_is_not_followed_without_dereference() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let target = tmp.path().join("target");
        fs::create_dir(&target)?;
        let link = tmp.path().join("link");
        std::os::unix::fs::symlink("target", &link)?;

        assert_eq!(LocalFs.stat(&link, false)?.kind, EntryKind::Symlink);
        assert_eq!(LocalFs.stat(&link, true)?.kind, EntryKind::Directory);
        assert_eq!(
            LocalFs.resolve_link_target(&link),
            Some(PathBuf::from("target"))
        );
        assert_eq!(link_target_path(&link, Path::new("target")), target);
        Ok(())
    }

    #[test]
    fn final_component_of_dot() {
        assert_eq!(final_component(Path::new(".")), OsStr::new("."));
        assert_eq!(final_component(Path::new("src/main.rs")), OsStr::new("main.rs"));
    }
}
