//! Module for mapping file types and names to Nerd Font icons.
//!
//! [nerd_font_icon] takes an [Entry] and returns the icon drawn in front of
//! its name when icons are enabled. Lookups try the exact name first and then
//! the ASCII-lowercased name.

use crate::core::Entry;
use crate::utils::with_lowered_stack;

use phf::phf_map;
use unicode_width::UnicodeWidthStr;

/// File extension to icon mapping
/// For example, "rs" maps to the Rust icon.
static EXT_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "rs" => "\u{e7a8}",
    "py" => "\u{e606}",
    "js" => "\u{e74e}",
    "ts" => "\u{e628}",
    "tsx" => "\u{e7ba}",
    "jsx" => "\u{e7ba}",
    "md" => "\u{f48a}",
    "html" => "\u{e736}",
    "css" => "\u{e749}",
    "json" => "\u{e60b}",
    "xml" => "\u{f05c0}",
    "sh" => "\u{e795}",
    "bash" => "\u{e795}",
    "zsh" => "\u{e795}",
    "fish" => "\u{e795}",
    "go" => "\u{e627}",
    "java" => "\u{e738}",
    "c" => "\u{e61e}",
    "cpp" => "\u{e61d}",
    "cc" => "\u{e61d}",
    "h" => "\u{f0fd}",
    "hh" => "\u{f0fd}",
    "hpp" => "\u{f0fd}",
    "php" => "\u{e73d}",
    "rb" => "\u{e791}",
    "swift" => "\u{e755}",
    "kt" => "\u{e634}",
    "lua" => "\u{e620}",
    "vue" => "\u{e6a0}",
    "sql" => "\u{e706}",
    "lock" => "\u{f023}",
    "exe" => "\u{f17a}",
    "dll" => "\u{f17a}",
    "msi" => "\u{f17a}",
    "bat" => "\u{e795}",
    "cmd" => "\u{e795}",
    "ps1" => "\u{e795}",
    "zip" => "\u{f1c6}",
    "tar" => "\u{f1c6}",
    "gz" => "\u{f1c6}",
    "xz" => "\u{f1c6}",
    "7z" => "\u{f1c6}",
    "mp3" => "\u{f001}",
    "flac" => "\u{f001}",
    "mp4" => "\u{f008}",
    "mkv" => "\u{f008}",
    "png" => "\u{f1c5}",
    "jpg" => "\u{f1c5}",
    "jpeg" => "\u{f1c5}",
    "gif" => "\u{f1c5}",
    "svg" => "\u{f1c5}",
    "pdf" => "\u{f1c1}",
    "doc" => "\u{f1c2}",
    "docx" => "\u{f1c2}",
    "xls" => "\u{f1c3}",
    "xlsx" => "\u{f1c3}",
    "ppt" => "\u{f1c4}",
    "pptx" => "\u{f1c4}",
    "txt" => "\u{f15c}",
    "log" => "\u{f18d}",
    "toml" => "\u{e615}",
    "yml" => "\u{e615}",
    "yaml" => "\u{e615}",
    "ini" => "\u{e615}",
    "cfg" => "\u{e615}",
    "conf" => "\u{e615}",
    "iso" => "\u{f0a0}",
    "img" => "\u{f0a0}",
    "patch" => "\u{e728}",
    "diff" => "\u{e728}",
    "bak" => "\u{f0c5}",
    "tmp" => "\u{f0c5}",
};

/// Special file names
/// For example, "Cargo.toml" maps to the Rust icon.
pub(crate) static SPECIAL_FILE_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "readme" => "\u{f48a}",
    "readme.md" => "\u{f48a}",
    "license" => "\u{f0219}",
    "license-mit" => "\u{f0219}",
    "license-apache" => "\u{f0219}",
    "copying" => "\u{f0219}",
    "makefile" => "\u{e779}",
    "cmakelists.txt" => "\u{e779}",
    ".gitignore" => "\u{e702}",
    ".gitconfig" => "\u{e702}",
    ".gitmodules" => "\u{e702}",
    "cargo.toml" => "\u{e7a8}",
    "cargo.lock" => "\u{f023}",
    "dockerfile" => "\u{f308}",
    "package.json" => "\u{e71e}",
    ".env" => "\u{f462}",
    ".bashrc" => "\u{e795}",
    ".zshrc" => "\u{e795}",
    ".vimrc" => "\u{e62b}",
    "todo" => "\u{f0ae}",
};

/// Special directory names
/// For example, ".git" maps to the git folder icon.
pub(crate) static SPECIAL_DIR_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "bin" => "\u{e5fc}",
    "lib" => "\u{f121}",
    "src" => "\u{f121}",
    "node_modules" => "\u{e5fa}",
    ".git" => "\u{e5fb}",
    ".github" => "\u{e5fd}",
    ".config" => "\u{e5fc}",
    "target" => "\u{f487}",
};

const DIR_ICON: &str = "\u{e5ff}";
const FILE_ICON: &str = "\u{f15b}";
const LINK_ICON: &str = "\u{f481}";
const BROKEN_LINK_ICON: &str = "\u{f127}";
const SPECIAL_ICON: &str = "\u{f2db}";

/// Get the Nerd Font icon for a given entry.
/// Directories, links and special files get fixed icons; regular files are
/// looked up by full name and then by extension.
pub(crate) fn nerd_font_icon(entry: &Entry) -> &'static str {
    let name_str = entry.name().to_string_lossy();
    let name = name_str.as_ref();

    if entry.is_symlink() {
        return if entry.is_link_broken() {
            BROKEN_LINK_ICON
        } else {
            LINK_ICON
        };
    }

    if entry.is_dir() {
        if let Some(icon) = SPECIAL_DIR_ICON_MAP.get(name) {
            return icon;
        }
        if let Some(icon) = with_lowered_stack(name, |s| SPECIAL_DIR_ICON_MAP.get(s).copied()) {
            return icon;
        }
        return DIR_ICON;
    }

    if !matches!(
        entry.kind(),
        crate::core::EntryKind::Regular | crate::core::EntryKind::Unknown
    ) {
        return SPECIAL_ICON;
    }

    if let Some(icon) = with_lowered_stack(name, |s| SPECIAL_FILE_ICON_MAP.get(s).copied()) {
        return icon;
    }

    if let Some(dot_idx) = name.rfind('.')
        && dot_idx > 0
        && dot_idx < name.len() - 1
    {
        let ext = &name[dot_idx + 1..];
        if let Some(icon) = EXT_ICON_MAP.get(ext) {
            return icon;
        }
        if let Some(icon) = with_lowered_stack(ext, |s| EXT_ICON_MAP.get(s).copied()) {
            return icon;
        }
    }

    FILE_ICON
}

/// Columns an icon takes, not counting the space after it.
pub(crate) fn icon_width(icon: &str) -> usize {
    UnicodeWidthStr::width(icon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entry::{EntryKind, EntryOptions};
    use crate::core::fm::Status;

    use std::path::PathBuf;

    fn entry(name: &str, kind: EntryKind) -> Entry {
        let status = Status {
            kind,
            ..Status::default()
        };
        Entry::new(PathBuf::from(name), Ok(&status), &EntryOptions::default())
    }

    #[test]
    fn extension_lookup_ignores_case() {
        let lower = nerd_font_icon(&entry("main.rs", EntryKind::Regular));
        let upper = nerd_font_icon(&entry("MAIN.RS", EntryKind::Regular));
        assert_eq!(lower, "\u{e7a8}");
        assert_eq!(lower, upper);
    }

    #[test]
    fn special_names_win_over_extensions() {
        assert_eq!(
            nerd_font_icon(&entry("Cargo.toml", EntryKind::Regular)),
            "\u{e7a8}"
        );
        assert_eq!(nerd_font_icon(&entry(".git", EntryKind::Directory)), "\u{e5fb}");
        assert_eq!(nerd_font_icon(&entry("misc", EntryKind::Directory)), DIR_ICON);
    }

    #[test]
    fn fallbacks() {
        assert_eq!(nerd_font_icon(&entry("noext", EntryKind::Regular)), FILE_ICON);
        assert_eq!(nerd_font_icon(&entry(".hidden", EntryKind::Regular)), FILE_ICON);
        assert_eq!(nerd_font_icon(&entry("pipe", EntryKind::Fifo)), SPECIAL_ICON);
        assert_eq!(icon_width(FILE_ICON), 1);
    }
}
