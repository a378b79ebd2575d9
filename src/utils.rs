//! Miscellaneous utilities for lst.
//!
//! - [cli]: command line parsing and merging with the config.
//! - [helpers]: color parsing, the home directory and small string helpers.

pub mod cli;
pub mod helpers;

pub use helpers::{get_home, parse_color, with_lowered_stack};
