use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of chapters in the text. Chapter ids run from 1 to this value.
pub const CHAPTER_COUNT: u16 = 114;

/// Identifier of a chapter, guaranteed to be within `1..=CHAPTER_COUNT`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u16", into = "u16")]
pub struct ChapterId(u16);

impl ChapterId {
    pub fn new(id: u16) -> Option<Self> {
        (1..=CHAPTER_COUNT).contains(&id).then_some(Self(id))
    }

    pub fn get(self) -> u16 {
        self.0
    }

    /// The following chapter, or `None` after the last one.
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    /// The preceding chapter, or `None` before the first one.
    pub fn previous(self) -> Option<Self> {
        Self::new(self.0.saturating_sub(1))
    }
}

impl TryFrom<u16> for ChapterId {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("chapter id {value} is outside 1..={CHAPTER_COUNT}"))
    }
}

impl From<ChapterId> for u16 {
    fn from(id: ChapterId) -> Self {
        id.0
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Where a chapter was revealed.
///
/// Decoding never fails: anything that is not a spelling of Makkah is Medinan.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(from = "String")]
pub enum RevelationPlace {
    #[serde(rename = "makkah")]
    Meccan,
    #[serde(rename = "madinah")]
    Medinan,
}

impl From<String> for RevelationPlace {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "makkah" | "mecca" | "makka" => RevelationPlace::Meccan,
            _ => RevelationPlace::Medinan,
        }
    }
}

impl RevelationPlace {
    /// Label shown next to a chapter.
    pub fn label(self) -> &'static str {
        match self {
            RevelationPlace::Meccan => "Makkiyah",
            RevelationPlace::Medinan => "Madaniyah",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TranslatedName {
    pub name: String,
    #[serde(default)]
    pub language_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Chapter {
    pub id: ChapterId,
    pub name_simple: String,
    pub name_arabic: String,
    pub translated_name: TranslatedName,
    pub verses_count: u32,
    pub revelation_place: RevelationPlace,
}

/// Supplementary description of a chapter. `text` carries inline markup.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ChapterInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub short_text: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// One translation entry of a verse. `text` may contain footnote markup.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Translation {
    #[serde(default)]
    pub resource_id: Option<u32>,
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Verse {
    pub id: u32,
    /// Composite "chapter:verse" key.
    pub verse_key: String,
    pub text_uthmani: String,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

/// Parameters of a verses-by-chapter request.
#[derive(Debug, Clone, PartialEq)]
pub struct VerseQuery {
    /// Translation edition to attach to each verse.
    pub translation_id: u32,
    /// Page size requested from the source.
    pub per_page: u32,
}

/// Verse fields requested alongside the translation.
pub const VERSE_FIELDS: &[&str] = &["text_uthmani", "verse_key"];

// ============================================================================
// Response envelopes
// ============================================================================

#[derive(Deserialize, Debug)]
pub(crate) struct ChapterListResponse {
    pub chapters: Vec<Chapter>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ChapterResponse {
    pub chapter: Chapter,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ChapterInfoResponse {
    #[serde(default)]
    pub chapter_info: Option<ChapterInfo>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct VersesResponse {
    pub verses: Vec<Verse>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct Pagination {
    #[serde(default)]
    pub next_page: Option<u32>,
}
