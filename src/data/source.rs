//! Where raw path strings come from
//!
//! A [`PathSource`] answers one question: the ordered path strings for a
//! character. Directory sources read files downloaded ahead of time, the
//! embedded table covers the basic hanzi offline, and [`FallbackChain`]
//! tries several in turn.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::charsets::CharacterEntry;
use super::embedded::EmbeddedSource;
use super::hanzi_writer::HanziWriterDir;
use super::kanjivg::KanjiVgDir;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no stroke data for U+{codepoint:04X}")]
    NotFound { codepoint: u32 },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed SVG in {}: {source}", .path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::Error,
    },

    #[error("malformed JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read a cached file, mapping a missing file to `NotFound`.
pub(crate) fn read_cached(path: &Path, codepoint: u32) -> Result<String, SourceError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => SourceError::NotFound { codepoint },
        _ => SourceError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

pub trait PathSource: Send + Sync {
    fn name(&self) -> &str;

    /// Path strings for one character, in stroke order.
    fn paths(&self, entry: CharacterEntry) -> Result<Vec<String>, SourceError>;
}

/// Tries each source in order and returns the first hit.
pub struct FallbackChain {
    sources: Vec<Box<dyn PathSource>>,
}

impl FallbackChain {
    pub fn new(sources: Vec<Box<dyn PathSource>>) -> Self {
        Self { sources }
    }
}

impl PathSource for FallbackChain {
    fn name(&self) -> &str {
        "fallback"
    }

    /// A source that fails for any reason hands over to the next one. The
    /// last error is returned when every source fails.
    fn paths(&self, entry: CharacterEntry) -> Result<Vec<String>, SourceError> {
        let mut last = SourceError::NotFound {
            codepoint: entry.codepoint,
        };
        for source in &self.sources {
            match source.paths(entry) {
                Ok(paths) => return Ok(paths),
                Err(e) => {
                    debug!("{} ({}): {e}", source.name(), entry.symbol);
                    last = e;
                }
            }
        }
        Err(last)
    }
}

/// Source selection for the CLI and settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// KanjiVG SVG files named by five-digit hex codepoint
    #[default]
    Kanjivg,
    /// Hanzi Writer JSON files named by the character
    HanziWriter,
    /// Built-in placeholder strokes for the basic hanzi
    Embedded,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Kanjivg => "kanjivg",
            SourceKind::HanziWriter => "hanzi-writer",
            SourceKind::Embedded => "embedded",
        }
    }

    /// Build the source, reading files from `cache_dir`. Directory sources
    /// fall back to the embedded table when `with_embedded` is set.
    pub fn open(self, cache_dir: &Path, with_embedded: bool) -> Box<dyn PathSource> {
        let primary: Box<dyn PathSource> = match self {
            SourceKind::Kanjivg => Box::new(KanjiVgDir::new(cache_dir)),
            SourceKind::HanziWriter => Box::new(HanziWriterDir::new(cache_dir)),
            SourceKind::Embedded => return Box::new(EmbeddedSource),
        };
        if with_embedded {
            Box::new(FallbackChain::new(vec![primary, Box::new(EmbeddedSource)]))
        } else {
            primary
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str, Option<Vec<String>>);

    impl PathSource for Fixed {
        fn name(&self) -> &str {
            self.0
        }

        fn paths(&self, entry: CharacterEntry) -> Result<Vec<String>, SourceError> {
            self.1.clone().ok_or(SourceError::NotFound {
                codepoint: entry.codepoint,
            })
        }
    }

    #[test]
    fn chain_returns_first_hit() {
        let chain = FallbackChain::new(vec![
            Box::new(Fixed("empty", None)),
            Box::new(Fixed("a", Some(vec!["M0,0".to_string()]))),
            Box::new(Fixed("b", Some(vec!["M1,1".to_string()]))),
        ]);
        assert_eq!(chain.paths(CharacterEntry::from('一')).unwrap(), vec!["M0,0"]);
    }

    #[test]
    fn chain_reports_last_failure() {
        let chain = FallbackChain::new(vec![Box::new(Fixed("empty", None))]);
        let err = chain.paths(CharacterEntry::from('一')).unwrap_err();
        assert!(matches!(err, SourceError::NotFound { codepoint: 0x4E00 }));
    }

    #[test]
    fn directory_source_falls_back_to_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let source = SourceKind::Kanjivg.open(dir.path(), true);
        assert_eq!(source.paths(CharacterEntry::from('三')).unwrap().len(), 3);

        let strict = SourceKind::Kanjivg.open(dir.path(), false);
        assert!(strict.paths(CharacterEntry::from('三')).is_err());
    }
}
