//! KanjiVG SVG documents
//!
//! Each stroke is one `<path>` element and document order is stroke order.
//! Only the `d` attributes are read; grouping and stroke-number labels are
//! ignored.

use std::path::PathBuf;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::charsets::CharacterEntry;
use super::source::{PathSource, SourceError};

/// Cache file name: five lower-case hex digits, as KanjiVG names them.
pub fn file_name(codepoint: u32) -> String {
    format!("{codepoint:05x}.svg")
}

/// Extract every path's `d` attribute in document order.
pub fn extract_paths(svg: &str) -> Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(svg);
    let mut paths = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"path" => {
                if let Some(d) = get_attr(&e, "d") {
                    paths.push(d);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paths)
}

fn get_attr(e: &BytesStart, name: &str) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == name.as_bytes())
        .and_then(|attr| String::from_utf8(attr.value.to_vec()).ok())
}

/// A directory of downloaded KanjiVG files.
#[derive(Debug, Clone)]
pub struct KanjiVgDir {
    root: PathBuf,
}

impl KanjiVgDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn file_for(&self, codepoint: u32) -> PathBuf {
        self.root.join(file_name(codepoint))
    }
}

impl PathSource for KanjiVgDir {
    fn name(&self) -> &str {
        "kanjivg"
    }

    fn paths(&self, entry: CharacterEntry) -> Result<Vec<String>, SourceError> {
        let path = self.file_for(entry.codepoint);
        let svg = super::source::read_cached(&path, entry.codepoint)?;
        extract_paths(&svg).map_err(|source| SourceError::Xml { path, source })
    }
}
