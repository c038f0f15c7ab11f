//! strokedata
pub mod batch;
pub mod character;
pub mod core;
pub mod data;
pub mod io;
pub mod logging;
pub mod path;
pub mod qa;
#[cfg(test)]
mod tests;

pub use character::{normalize, CharacterRecord, Stroke, StrokeError, StrokePoint};
