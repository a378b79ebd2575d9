//! Helpers for lst.
//!
//! Small utilities used across lst:
//! - Color parsing from names or hex codes
//! - Locating the home directory
//! - Lowercasing short strings without a heap allocation

use crossterm::style::Color;
use std::path::PathBuf;

/// Names up to this length are lowercased on the stack.
const LOWER_STACK_LEN: usize = 64;

/// Parses a string (color name or hex) into a crossterm [Color]
///
/// Supports standard names (red, darkred, grey, etc.) as well as hex values (#RRGGBB or #RGB).
/// Unknown values map to [Color::Reset], which the theme treats as "use the default".
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "black" => Color::Black,
        "red" => Color::Red,
        "darkred" => Color::DarkRed,
        "green" => Color::Green,
        "darkgreen" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "darkyellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "darkblue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "darkmagenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "darkcyan" => Color::DarkCyan,
        "white" => Color::White,
        "grey" | "gray" => Color::Grey,
        "darkgrey" | "darkgray" => Color::DarkGrey,
        _ => {
            if let Some(color) = s.strip_prefix('#') {
                match color.len() {
                    6 => {
                        if let Ok(rgb) = u32::from_str_radix(color, 16) {
                            return from_rgb(rgb);
                        }
                    }
                    3 => {
                        let expanded = color
                            .chars()
                            .map(|c| format!("{}{}", c, c))
                            .collect::<String>();
                        if let Ok(rgb) = u32::from_str_radix(&expanded, 16) {
                            return from_rgb(rgb);
                        }
                    }
                    _ => {}
                }
            }
            // fallback
            Color::Reset
        }
    }
}

fn from_rgb(rgb: u32) -> Color {
    Color::Rgb {
        r: ((rgb >> 16) & 0xFF) as u8,
        g: ((rgb >> 8) & 0xFF) as u8,
        b: (rgb & 0xFF) as u8,
    }
}

pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Calls `f` with an ASCII-lowercased copy of `s`.
///
/// Short strings are lowercased into a stack buffer; longer ones allocate.
pub fn with_lowered_stack<T>(s: &str, f: impl FnOnce(&str) -> T) -> T {
    if s.len() > LOWER_STACK_LEN {
        return f(&s.to_ascii_lowercase());
    }
    let mut buf = [0u8; LOWER_STACK_LEN];
    let lowered = &mut buf[..s.len()];
    lowered.copy_from_slice(s.as_bytes());
    lowered.make_ascii_lowercase();
    // ASCII lowercasing keeps UTF-8 valid
    match std::str::from_utf8(lowered) {
        Ok(l) => f(l),
        Err(_) => f(&s.to_ascii_lowercase()),
    }
}
