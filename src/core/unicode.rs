//! UTF-8 decoding and terminal display width for lst.
//!
//! Names are handled as raw bytes throughout lst since file names are not
//! guaranteed to be valid UTF-8. These helpers decode codepoints out of such
//! byte strings without ever reading past the slice and compute how many
//! terminal cells the result occupies.
//!
//! Malformed or truncated sequences are not an error: the lead byte is taken
//! as a single width-1 "character" and decoding continues with the next byte.

/// Codepoint returned for an empty slice. Has a display width of 0.
pub const NUL: u32 = 0;

/// Decodes the first codepoint of `bytes`.
///
/// # Returns
/// The codepoint and the number of bytes it occupies.
/// Invalid sequences yield the lead byte itself with a length of 1.
pub fn decode(bytes: &[u8]) -> (u32, usize) {
    let Some(&lead) = bytes.first() else {
        return (NUL, 0);
    };

    let (len, init) = match lead {
        0x00..=0x7f => return (lead as u32, 1),
        0xc2..=0xdf => (2, (lead & 0x1f) as u32),
        0xe0..=0xef => (3, (lead & 0x0f) as u32),
        0xf0..=0xf4 => (4, (lead & 0x07) as u32),
        _ => return (lead as u32, 1),
    };

    if bytes.len() < len {
        return (lead as u32, 1);
    }

    let mut cp = init;
    for &b in &bytes[1..len] {
        if b & 0xc0 != 0x80 {
            return (lead as u32, 1);
        }
        cp = (cp << 6) | (b & 0x3f) as u32;
    }

    // Reject overlong forms, surrogates and values past U+10FFFF
    let valid = match len {
        3 => cp >= 0x800 && !(0xd800..=0xdfff).contains(&cp),
        4 => (0x10000..=0x10ffff).contains(&cp),
        _ => true,
    };
    if !valid {
        return (lead as u32, 1);
    }

    (cp, len)
}

/// Iterator over `(codepoint, byte_length)` pairs of a byte string.
pub struct Codepoints<'a> {
    rest: &'a [u8],
}

impl<'a> Codepoints<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { rest: bytes }
    }
}

impl Iterator for Codepoints<'_> {
    type Item = (u32, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let (cp, len) = decode(self.rest);
        self.rest = &self.rest[len..];
        Some((cp, len))
    }
}

/// Terminal width of a single codepoint.
///
/// Zero-width characters are not special-cased; only the [NUL] sentinel is 0.
pub fn width(cp: u32) -> usize {
    if cp == NUL {
        return 0;
    }
    let wide = cp >= 0x1100
        && (cp <= 0x115f
            || cp == 0x2329
            || cp == 0x232a
            || ((0x2e80..=0xa4cf).contains(&cp) && cp != 0x303f)
            || (0xac00..=0xd7a3).contains(&cp)
            || (0xf900..=0xfaff).contains(&cp)
            || (0xfe10..=0xfe19).contains(&cp)
            || (0xfe30..=0xfe6f).contains(&cp)
            || (0xff00..=0xff60).contains(&cp)
            || (0xffe0..=0xffe6).contains(&cp)
            || (0x20000..=0x2fffd).contains(&cp)
            || (0x30000..=0x3fffd).contains(&cp));
    1 + wide as usize
}

/// Sum of [width] over every codepoint in `bytes`.
pub fn display_width(bytes: &[u8]) -> usize {
    Codepoints::new(bytes).map(|(cp, _)| width(cp)).sum()
}

/// Number of bytes `bytes` occupies beyond its display width.
///
/// Padding primitives that count bytes (like [pad_bytes]) add this to the
/// requested column width so wide and multi-byte text still lines up.
pub fn padding_offset(bytes: &[u8]) -> usize {
    Codepoints::new(bytes)
        .map(|(cp, len)| len.saturating_sub(width(cp)))
        .sum()
}

/// Writes `bytes` right-aligned in a field of `field_len` bytes.
pub fn pad_bytes<W: std::io::Write>(out: &mut W, bytes: &[u8], field_len: usize) -> std::io::Result<()> {
    write_spaces(out, field_len.saturating_sub(bytes.len()))?;
    out.write_all(bytes)
}

/// Writes `n` spaces.
pub fn write_spaces<W: std::io::Write>(out: &mut W, n: usize) -> std::io::Result<()> {
    const SPACES: &[u8; 64] = &[b' '; 64];
    let mut left = n;
    while left > 0 {
        let chunk = left.min(SPACES.len());
        out.write_all(&SPACES[..chunk])?;
        left -= chunk;
    }
    Ok(())
}
