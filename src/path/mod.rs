//! Path description reading
//!
//! Turns the compact SVG-style path grammar into ordered point runs:
//! - Tokenizing into command letters and operands
//! - Interpreting commands against an explicit pen state
//! - Flattening curves on a fixed parametric grid

pub mod error;
pub mod interpreter;
pub mod sampling;
pub mod tokenizer;

pub use error::{PathError, TokenizeError};
pub use interpreter::{Interpretation, PathInterpreter, PenState};
pub use sampling::{SampleGrid, DEFAULT_CURVE_STEPS};
pub use tokenizer::{tokenize, RawCommand, Tokenizer};
