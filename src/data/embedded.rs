//! Built-in placeholder strokes for the basic hanzi
//!
//! Stroke counts are accurate. The strokes themselves are
//! evenly spaced horizontal bars on a 1000-unit canvas, enough to drive
//! a trainer offline until real data has been downloaded.

use super::charsets::CharacterEntry;
use super::source::{PathSource, SourceError};

/// Character, stroke count
const TABLE: [(char, usize); 100] = [
    ('一', 1), ('二', 2), ('三', 3), ('四', 5), ('五', 4),
    ('六', 4), ('七', 2), ('八', 2), ('九', 2), ('十', 2),
    ('人', 2), ('口', 3), ('手', 4), ('日', 4), ('月', 4),
    ('水', 4), ('火', 4), ('木', 4), ('金', 8), ('土', 3),
    ('大', 3), ('小', 3), ('中', 4), ('上', 3), ('下', 3),
    ('左', 5), ('右', 5), ('天', 4), ('地', 6), ('山', 3),
    ('田', 5), ('石', 5), ('目', 5), ('耳', 6), ('心', 4),
    ('门', 3), ('女', 3), ('子', 3), ('马', 3), ('牛', 4),
    ('羊', 6), ('鸟', 5), ('鱼', 8), ('米', 6), ('竹', 6),
    ('丝', 5), ('虫', 6), ('贝', 4), ('见', 4), ('车', 4),
    ('风', 4), ('云', 4), ('雨', 8), ('雪', 11), ('电', 5),
    ('刀', 2), ('力', 2), ('又', 2), ('文', 4), ('方', 4),
    ('不', 4), ('也', 3), ('了', 2), ('在', 6), ('有', 6),
    ('我', 7), ('你', 7), ('他', 5), ('她', 6), ('好', 6),
    ('来', 7), ('去', 5), ('出', 5), ('入', 2), ('本', 5),
    ('白', 5), ('红', 6), ('长', 4), ('多', 6), ('少', 4),
    ('高', 10), ('开', 4), ('生', 5), ('学', 8), ('工', 3),
    ('用', 5), ('走', 7), ('飞', 3), ('吃', 6), ('喝', 12),
    ('看', 9), ('听', 7), ('说', 9), ('读', 10), ('写', 5),
    ('坐', 7), ('站', 10), ('爱', 10), ('笑', 10), ('哭', 10),
];

/// Stroke count of a basic hanzi, if the table has it.
pub fn stroke_count(symbol: char) -> Option<usize> {
    TABLE
        .iter()
        .find(|(c, _)| *c == symbol)
        .map(|&(_, count)| count)
}

/// Horizontal bars from x=200 to x=800, spread over y in 200..800.
pub fn placeholder_paths(stroke_count: usize) -> Vec<String> {
    let spacing = 600 / (stroke_count + 1);
    (1..=stroke_count)
        .map(|i| {
            let y = 200 + spacing * i;
            format!("M 200 {y} L 800 {y}")
        })
        .collect()
}

/// Source backed by the built-in table.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl PathSource for EmbeddedSource {
    fn name(&self) -> &str {
        "embedded"
    }

    fn paths(&self, entry: CharacterEntry) -> Result<Vec<String>, SourceError> {
        stroke_count(entry.symbol)
            .map(placeholder_paths)
            .ok_or(SourceError::NotFound {
                codepoint: entry.codepoint,
            })
    }
}
