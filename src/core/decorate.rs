//! Quoting and escaping of raw file names for display.
//!
//! A raw name is decorated exactly once, when its [Entry](crate::core::Entry)
//! is built. Renderers only ever print the decorated bytes.

use crate::core::unicode::Codepoints;

use serde::Deserialize;

/// Quotes shell-special names as `'name'`, names with quotes as `"it's"`.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuoteMode {
    #[default]
    Auto,
    /// Always wrap in double quotes
    Always,
    /// Never quote
    Never,
}

/// What to do with ASCII control characters in names.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NongraphicMode {
    #[default]
    Escape,
    Hide,
    Show,
}

/// Use `\ooo` instead of `\xHH` for escaped control characters.
const ESCAPE_OCTAL: bool = false;

// Quote the name if it starts with any of these
const QUOTE_IF_FIRST: &[u8] = b"#~";
// Quote the name if it contains any of these
const QUOTE_IF_ANYWHERE: &[u8] = b" !$&()*;<=>[^`|";

/// A decorated name and whether it begins with a quote character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorated {
    pub bytes: Box<[u8]>,
    pub quoted: bool,
}

/// Picks the quote character for `raw`, if any.
fn quote_char(raw: &[u8], mode: QuoteMode) -> Option<u8> {
    match mode {
        QuoteMode::Never => return None,
        QuoteMode::Always => return Some(b'"'),
        QuoteMode::Auto => {}
    }

    let mut has_single = false;
    let mut has_double = false;
    let mut special = false;
    for &c in raw {
        match c {
            b'\'' => has_single = true,
            b'"' => has_double = true,
            c if QUOTE_IF_ANYWHERE.contains(&c) => special = true,
            _ => {}
        }
    }

    if let Some(first) = raw.first()
        && QUOTE_IF_FIRST.contains(first)
    {
        special = true;
    }
    if raw == b"{" || raw == b"}" {
        special = true;
    }

    if has_single && !has_double {
        Some(b'"')
    } else if has_double || special {
        Some(b'\'')
    } else {
        None
    }
}

fn push_escape(c: u8, out: &mut Vec<u8>) {
    const DIGITS: &[u8; 16] = b"0123456789ABCDEF";
    out.push(b'\\');
    if ESCAPE_OCTAL {
        out.extend_from_slice(&[b'0' + c / 64, b'0' + (c / 8) % 8, b'0' + c % 8]);
    } else {
        out.extend_from_slice(&[b'x', DIGITS[(c / 16) as usize], DIGITS[(c % 16) as usize]]);
    }
}

/// Decorates a raw file name for display.
///
/// # Returns
/// The quoted/escaped bytes and whether a leading quote was produced.
pub fn decorate(raw: &[u8], quoting: QuoteMode, nongraphic: NongraphicMode) -> Decorated {
    let quote = quote_char(raw, quoting);
    let mut out = Vec::with_capacity(raw.len() + raw.len() / 4 + 2);

    if let Some(q) = quote {
        out.push(q);
    }

    let mut pos = 0;
    for (cp, len) in Codepoints::new(raw) {
        let bytes = &raw[pos..pos + len];
        pos += len;

        if quote.is_some_and(|q| cp == q as u32) {
            out.push(b'\\');
            out.extend_from_slice(bytes);
        } else if cp < 0x80 && !(0x20..0x7f).contains(&cp) {
            match nongraphic {
                NongraphicMode::Escape => push_escape(cp as u8, &mut out),
                NongraphicMode::Hide => out.push(b'?'),
                NongraphicMode::Show => out.extend_from_slice(bytes),
            }
        } else {
            out.extend_from_slice(bytes);
        }
    }

    if let Some(q) = quote {
        out.push(q);
    }

    Decorated {
        bytes: out.into_boxed_slice(),
        quoted: quote.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auto(name: &str) -> (String, bool) {
        let d = decorate(name.as_bytes(), QuoteMode::Auto, NongraphicMode::Escape);
        (String::from_utf8_lossy(&d.bytes).into_owned(), d.quoted)
    }

    #[test]
    fn plain_names_are_untouched() {
        assert_eq!(auto("plainfile.txt"), ("plainfile.txt".into(), false));
        assert_eq!(auto("漢字.md"), ("漢字.md".into(), false));
    }

    #[test]
    fn apostrophe_gets_double_quotes_without_escaping() {
        assert_eq!(auto("it's"), ("\"it's\"".into(), true));
    }

    #[test]
    fn spaces_and_specials_get_single_quotes() {
        assert_eq!(auto("a file"), ("'a file'".into(), true));
        assert_eq!(auto("x|y"), ("'x|y'".into(), true));
        assert_eq!(auto("#notes"), ("'#notes'".into(), true));
        assert_eq!(auto("~backup"), ("'~backup'".into(), true));
        assert_eq!(auto("{"), ("'{'".into(), true));
        assert_eq!(auto("a{b"), ("a{b".into(), false));
        // '#' only matters up front
        assert_eq!(auto("c#"), ("c#".into(), false));
    }

    #[test]
    fn both_quote_styles_escape_single_quotes() {
        assert_eq!(auto("say \"it's\""), ("'say \"it\\'s\"'".into(), true));
        assert_eq!(auto("\"q\""), ("'\"q\"'".into(), true));
    }

    #[test]
    fn always_mode_escapes_double_quotes() {
        let d = decorate(b"a\"b", QuoteMode::Always, NongraphicMode::Escape);
        assert_eq!(&*d.bytes, b"\"a\\\"b\"");
        let d = decorate(b"plain", QuoteMode::Always, NongraphicMode::Escape);
        assert_eq!(&*d.bytes, b"\"plain\"");
    }

    #[test]
    fn never_mode_suppresses_quotes() {
        let d = decorate(b"a file", QuoteMode::Never, NongraphicMode::Escape);
        assert_eq!(&*d.bytes, b"a file");
        assert!(!d.quoted);
    }

    #[test]
    fn control_characters_per_mode() {
        let raw = b"a\tb\x7f";
        assert_eq!(
            &*decorate(raw, QuoteMode::Auto, NongraphicMode::Escape).bytes,
            b"a\\x09b\\x7F"
        );
        assert_eq!(
            &*decorate(raw, QuoteMode::Auto, NongraphicMode::Hide).bytes,
            b"a?b?"
        );
        assert_eq!(
            &*decorate(raw, QuoteMode::Auto, NongraphicMode::Show).bytes,
            raw
        );
    }

    #[test]
    fn invalid_utf8_is_copied_verbatim() {
        let raw = [b'x', 0xff, b'y'];
        let d = decorate(&raw, QuoteMode::Auto, NongraphicMode::Escape);
        assert_eq!(&*d.bytes, &raw);
    }
}
