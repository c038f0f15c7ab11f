//! Diagnostics raised while reading a single path description
//!
//! None of these abort a character. The interpreter records them on its
//! result and keeps whatever geometry was produced before the fault.

use thiserror::Error;

/// Lexical failures. Tokenizing stops at the first one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TokenizeError {
    #[error("invalid number '{literal}' at offset {offset}")]
    InvalidNumber { offset: usize, literal: String },

    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { offset: usize, ch: char },

    #[error("operand at offset {offset} appears before any command letter")]
    MissingCommand { offset: usize },
}

/// Everything that can go wrong while turning one path string into points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    /// Recognised but unimplemented (arcs, smooth quadratics, close-path)
    /// or entirely unknown letters. Skipped.
    #[error("unsupported command '{letter}' at offset {offset}")]
    UnsupportedCommand { letter: char, offset: usize },

    /// Finite operands whose sum left the `f64` range, such as a relative
    /// offset near `f64::MAX` applied to a pen already far from the origin.
    #[error("command '{letter}' at offset {offset} leaves the representable coordinate range")]
    NonFinite { letter: char, offset: usize },

    #[error("command '{letter}' at offset {offset} needs {expected} operands, found {found}")]
    InsufficientOperands {
        letter: char,
        offset: usize,
        expected: usize,
        found: usize,
    },
}

impl PathError {
    /// Whether interpretation of the current path stopped at this error.
    pub fn truncates(&self) -> bool {
        !matches!(self, PathError::UnsupportedCommand { .. })
    }
}
