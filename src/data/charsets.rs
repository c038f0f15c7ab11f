//! Character sets the converter knows how to build

use std::fmt;
use std::str::FromStr;

/// Hiragana in common use, ぁ through ゖ
pub const HIRAGANA: std::ops::Range<u32> = 0x3041..0x3097;

/// Katakana in common use, ァ through ヶ
pub const KATAKANA: std::ops::Range<u32> = 0x30A1..0x30F7;

/// Zero through ten, then the large-number characters.
///
/// 零 rather than 〇 for zero since the stroke sources cover it better.
pub const CHINESE_NUMERALS: &str = "零一二三四五六七八九十百千万億";

/// The hundred characters taught first to young learners of Chinese.
pub const BASIC_HANZI: &str = concat!(
    "一二三四五六七八九十",
    "人口手日月水火木金土",
    "大小中上下左右天地山",
    "田石目耳心门女子马牛",
    "羊鸟鱼米竹丝虫贝见车",
    "风云雨雪电刀力又文方",
    "不也了在有我你他她好",
    "来去出入本白红长多少",
    "高开生学工用走飞吃喝",
    "看听说读写坐站爱笑哭",
);

/// One character to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CharacterEntry {
    pub codepoint: u32,
    pub symbol: char,
}

impl From<char> for CharacterEntry {
    fn from(symbol: char) -> Self {
        Self {
            codepoint: symbol as u32,
            symbol,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterSet {
    Hiragana,
    Katakana,
    ChineseNumerals,
    BasicHanzi,
    /// Every distinct non-whitespace character of the string, in order
    Custom(String),
}

impl CharacterSet {
    pub fn name(&self) -> &str {
        match self {
            CharacterSet::Hiragana => "hiragana",
            CharacterSet::Katakana => "katakana",
            CharacterSet::ChineseNumerals => "numerals",
            CharacterSet::BasicHanzi => "hanzi",
            CharacterSet::Custom(_) => "custom",
        }
    }

    /// File written for this set by `convert`
    pub fn file_name(&self) -> String {
        format!("{}_strokes.json", self.name())
    }

    pub fn entries(&self) -> Vec<CharacterEntry> {
        match self {
            CharacterSet::Hiragana => from_range(HIRAGANA),
            CharacterSet::Katakana => from_range(KATAKANA),
            CharacterSet::ChineseNumerals => from_str_unique(CHINESE_NUMERALS),
            CharacterSet::BasicHanzi => from_str_unique(BASIC_HANZI),
            CharacterSet::Custom(chars) => from_str_unique(chars),
        }
    }
}

fn from_range(range: std::ops::Range<u32>) -> Vec<CharacterEntry> {
    range
        .filter_map(char::from_u32)
        .map(CharacterEntry::from)
        .collect()
}

fn from_str_unique(chars: &str) -> Vec<CharacterEntry> {
    let mut entries: Vec<CharacterEntry> = Vec::new();
    for symbol in chars.chars().filter(|c| !c.is_whitespace()) {
        let entry = CharacterEntry::from(symbol);
        if !entries.contains(&entry) {
            entries.push(entry);
        }
    }
    entries
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterSet {
    type Err = String;

    /// Accepts a built-in set name or `custom:<characters>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(chars) = s.strip_prefix("custom:") {
            if chars.trim().is_empty() {
                return Err("custom set needs at least one character".to_string());
            }
            return Ok(CharacterSet::Custom(chars.to_string()));
        }
        match s.to_ascii_lowercase().as_str() {
            "hiragana" => Ok(CharacterSet::Hiragana),
            "katakana" => Ok(CharacterSet::Katakana),
            "numerals" | "numbers" => Ok(CharacterSet::ChineseNumerals),
            "hanzi" | "basic" => Ok(CharacterSet::BasicHanzi),
            other => Err(format!(
                "unknown character set '{other}' (expected hiragana, katakana, numerals, hanzi or custom:<chars>)"
            )),
        }
    }
}
