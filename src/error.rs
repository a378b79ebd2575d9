//! Error types for lst.
//!
//! [LstError] is what a run can fail with as a whole. Per-entry metadata
//! failures are not errors at this level; they are reported through the
//! [Session](crate::core::Session) and the listing continues.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Invalid long format template or date format.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid format specifier '${0}' (valid: $t $p $P $l $o $g $s $d $n)")]
    UnknownField(char),

    #[error("duplicate format specifier '${0}'")]
    Duplicate(char),

    #[error("format ends with a lone '$'")]
    Dangling,

    #[error("invalid date format '{0}'")]
    InvalidDate(String),
}

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum LstError {
    /// Writing the listing failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Bad `--format` or `--time-style` value.
    #[error("{0}")]
    Format(#[from] FormatError),

    /// Invalid command line value.
    #[error("invalid argument '{value}' for '--{option}'")]
    InvalidArgument { option: &'static str, value: String },

    /// Config file already present at the `--init` target.
    #[error("config file already exists at {0:?}")]
    ConfigExists(PathBuf),
}

impl LstError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LstError::Format(_) | LstError::InvalidArgument { .. } => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_and_exit_codes() {
        let err = LstError::from(FormatError::Duplicate('n'));
        assert_eq!(err.to_string(), "duplicate format specifier '$n'");
        assert_eq!(err.exit_code(), 2);

        let err = LstError::from(io::Error::from(io::ErrorKind::BrokenPipe));
        assert_eq!(err.exit_code(), 1);
    }
}
