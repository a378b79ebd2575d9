//! Natural ("version") ordering of file names.
//!
//! Names are split into alternating runs of non-digits and digits. Non-digit
//! runs compare character by character, digit runs compare by numeric value,
//! so `img2` sorts before `img10`.

use std::cmp::Ordering;

/// Compares two names in natural order.
///
/// Names that only differ in the spelling of equal numbers (`a01`, `a1`)
/// are ordered by their raw bytes so the result is a total order.
pub fn natural_compare(a: &[u8], b: &[u8]) -> Ordering {
    natural_walk(a, b, false).then_with(|| a.cmp(b))
}

/// Like [natural_compare] but ASCII letters are compared case-insensitively first.
///
/// Names equal under folding fall back to the case-sensitive order.
pub fn natural_compare_folded(a: &[u8], b: &[u8]) -> Ordering {
    natural_walk(a, b, true).then_with(|| natural_compare(a, b))
}

fn natural_walk(mut a: &[u8], mut b: &[u8], fold: bool) -> Ordering {
    loop {
        // Empty strings first
        match (a.is_empty(), b.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }

        // Dotfiles first
        match (a[0] == b'.', b[0] == b'.') {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }

        let a_text = leading_run(a, |c| !c.is_ascii_digit());
        let b_text = leading_run(b, |c| !c.is_ascii_digit());
        let ord = compare_text(&a[..a_text], &b[..b_text], fold);
        if ord != Ordering::Equal {
            return ord;
        }
        a = &a[a_text..];
        b = &b[b_text..];

        let a_num = leading_run(a, |c| c.is_ascii_digit());
        let b_num = leading_run(b, |c| c.is_ascii_digit());
        let ord = compare_digits(&a[..a_num], &b[..b_num]);
        if ord != Ordering::Equal {
            return ord;
        }
        a = &a[a_num..];
        b = &b[b_num..];
    }
}

fn leading_run(s: &[u8], pred: impl Fn(u8) -> bool) -> usize {
    s.iter().position(|&c| !pred(c)).unwrap_or(s.len())
}

/// `~` sorts lowest, other punctuation next, then everything by byte value.
fn char_rank(c: u8, fold: bool) -> (u8, u8) {
    let c = if fold { c.to_ascii_lowercase() } else { c };
    match c {
        b'~' => (0, c),
        c if c.is_ascii_punctuation() => (1, c),
        c => (2, c),
    }
}

fn compare_text(a: &[u8], b: &[u8], fold: bool) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| char_rank(x, fold).cmp(&char_rank(y, fold)))
        .find(|o| o.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

/// Compares two digit runs by value. Works for runs of any length.
fn compare_digits(a: &[u8], b: &[u8]) -> Ordering {
    let a = &a[leading_run(a, |c| c == b'0')..];
    let b = &b[leading_run(b, |c| c == b'0')..];
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
