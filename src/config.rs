//! Configuration for lst.
//!
//! Settings are read once at startup from `lst.toml`:
//! - [general]: which entries are listed and how they are sorted.
//! - [display]: layout, name decoration and column formats.
//! - [theme] and [presets]: colors.
//! - [load]: file lookup, parsing and `lst --init`.
//!
//! Command line flags are layered on top in [crate::utils::cli].

pub mod display;
pub mod general;
pub mod load;
pub mod presets;
pub mod theme;

pub use display::{ColorWhen, Display};
pub(crate) use general::{General, InternalGeneral};
pub use load::Config;
pub use theme::{IndicatorTheme, Theme};
