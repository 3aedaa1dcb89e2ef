//! Error types for barcode rendering.
//!
//! Rendering only fails on malformed input; geometry that merely produces a
//! degenerate canvas is not an error.

use thiserror::Error;

/// Main error type for render operations.
///
/// Module rows are validated before any painting happens, so a failed render
/// never returns a partially painted canvas.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// The row sequence was empty.
    #[error("code contains no lines")]
    EmptyCode,

    /// A row did not match the module count of the first row.
    ///
    /// All rows of one symbol must be the same length; the first row fixes
    /// the expected module count.
    #[error("line {line} has {found} modules, expected {expected}")]
    LineMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid module {found:?} at line {line} column {column}")]
    InvalidModule {
        line: usize,
        column: usize,
        found: char,
    },
}
