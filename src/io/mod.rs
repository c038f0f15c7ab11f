//! Reading and writing converted stroke data

pub mod dataset;

pub use dataset::{DatasetWriter, StrokeDataset, COMBINED_FILE};
