//! Input data: character sets and the stroke sources behind them

pub mod charsets;
pub mod embedded;
pub mod hanzi_writer;
pub mod kanjivg;
pub mod source;

pub use charsets::{CharacterEntry, CharacterSet};
pub use embedded::EmbeddedSource;
pub use hanzi_writer::{HanziWriterDir, HanziWriterDocument};
pub use kanjivg::KanjiVgDir;
pub use source::{FallbackChain, PathSource, SourceError, SourceKind};
