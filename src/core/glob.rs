//! Shell-style glob matching for ignore patterns.
//!
//! - `*` matches zero or more characters
//! - `?` matches exactly one character
//! - `[abc]`, `[a-z]` match one character of a set or range
//! - `[!abc]` or `[^abc]` negate the set
//! - `\x` matches `x` literally
//!
//! Names are matched before entries are built, so matching works on the
//! lossy UTF-8 form of the raw name.

use std::cell::Cell;

/// Upper bound on recursive calls for one match.
/// Patterns like `*a*a*a*b` would otherwise backtrack exponentially.
const MAX_MATCH_CALLS: usize = 100_000;

/// Matches the whole of `name` against `pattern`.
///
/// # Examples
/// ```
/// use lst::core::glob_match;
///
/// assert!(glob_match("*.bak", "notes.bak"));
/// assert!(glob_match("[!.]*", "visible"));
/// assert!(!glob_match("*~", "notes"));
/// ```
pub fn glob_match(pattern: &str, name: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let name: Vec<char> = name.chars().collect();
    let calls = Cell::new(0usize);
    match_bounded(&pattern, 0, &name, 0, &calls)
}

/// Returns true if any pattern in `patterns` matches `name`.
pub fn matches_any<S: AsRef<str>>(patterns: &[S], name: &str) -> bool {
    patterns.iter().any(|p| glob_match(p.as_ref(), name))
}

fn match_bounded(
    pattern: &[char],
    pi: usize,
    name: &[char],
    ni: usize,
    calls: &Cell<usize>,
) -> bool {
    let count = calls.get() + 1;
    calls.set(count);
    if count > MAX_MATCH_CALLS {
        return false;
    }

    let Some(&p) = pattern.get(pi) else {
        return ni >= name.len();
    };

    match p {
        '*' => {
            let mut next = pi;
            while pattern.get(next) == Some(&'*') {
                next += 1;
            }
            if next >= pattern.len() {
                return true;
            }
            (ni..=name.len()).any(|start| match_bounded(pattern, next, name, start, calls))
        }
        '?' => ni < name.len() && match_bounded(pattern, pi + 1, name, ni + 1, calls),
        '[' => {
            let Some(&c) = name.get(ni) else {
                return false;
            };
            match char_class(&pattern[pi..], c) {
                Some((true, len)) => match_bounded(pattern, pi + len, name, ni + 1, calls),
                Some((false, _)) => false,
                // Unclosed bracket is a literal '['
                None => c == '[' && match_bounded(pattern, pi + 1, name, ni + 1, calls),
            }
        }
        '\\' if pi + 1 < pattern.len() => {
            name.get(ni) == Some(&pattern[pi + 1])
                && match_bounded(pattern, pi + 2, name, ni + 1, calls)
        }
        c => name.get(ni) == Some(&c) && match_bounded(pattern, pi + 1, name, ni + 1, calls),
    }
}

/// Evaluates a `[...]` class at the start of `pattern` against `c`.
///
/// # Returns
/// Whether `c` is in the class and how many pattern chars the class spans,
/// or `None` if the class is never closed.
fn char_class(pattern: &[char], c: char) -> Option<(bool, usize)> {
    let mut idx = 1;
    let mut negate = false;
    if matches!(pattern.get(idx), Some('!' | '^')) {
        negate = true;
        idx += 1;
    }

    // A ']' right after the opening is literal
    let first = idx;
    let mut matched = false;

    loop {
        let &ch = pattern.get(idx)?;
        if ch == ']' && idx > first {
            return Some((matched != negate, idx + 1));
        }

        let (lo, step) = if ch == '\\' {
            (*pattern.get(idx + 1)?, 2)
        } else {
            (ch, 1)
        };

        if pattern.get(idx + step) == Some(&'-')
            && let Some(&hi) = pattern.get(idx + step + 1)
            && hi != ']'
        {
            if (lo..=hi).contains(&c) {
                matched = true;
            }
            idx += step + 2;
            continue;
        }

        if lo == c {
            matched = true;
        }
        idx += step;
    }
}
