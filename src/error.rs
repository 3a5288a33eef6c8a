//! Error types for declared-size parsing.
//!
//! Parsing is the only fallible edge of the crate. Inside the engine a value
//! that fails to resolve degrades to "unconstrained" instead of erroring, so
//! a malformed constraint can never abort a drag in progress.

use thiserror::Error;

/// Errors produced when parsing a declared dimension string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseDimensionError {
    /// The input was empty or whitespace
    #[error("empty dimension")]
    Empty,

    /// The numeric portion did not parse as a finite number
    #[error("invalid number in dimension {0:?}")]
    InvalidNumber(String),

    /// The unit suffix is not one of px, %, vw, vh, vmax, vmin
    #[error("unrecognized unit in dimension {0:?}")]
    UnknownUnit(String),
}
