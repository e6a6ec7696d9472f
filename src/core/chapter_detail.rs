//! # Chapter Detail
//!
//! Fetches chapter metadata, verses and chapter info concurrently and merges
//! them into one display-ready `ChapterDetail`. All three must succeed; any
//! failure settles the view into a single generic error.
//!
//! Prose passes through the normalizer here, while the view model is built,
//! so no annotated markup is reachable from what the view renders.

use futures::future::try_join3;
use log::{debug, info, warn};

use crate::content::{Chapter, ChapterId, ChapterInfo, ContentSource, Verse, VerseQuery};
use crate::core::normalize::{markup_to_plain, strip_annotations};
use crate::core::view_state::ViewState;

/// Message shown when any of the three detail requests fails.
pub const DETAIL_ERROR_MESSAGE: &str = "failed to fetch chapter data";

/// Identifies one detail load: the chapter it was issued for and its generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub chapter_id: ChapterId,
    pub generation: u64,
}

/// What a detail load asks of the source besides the chapter id.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRequest {
    pub language: String,
    pub verses: VerseQuery,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerseView {
    pub id: u32,
    pub verse_key: String,
    /// Verse number within the chapter, taken from the key.
    pub number: u32,
    pub text_uthmani: String,
    /// First translation with annotations removed.
    pub translation: String,
    /// Whether a separator follows this verse. False only for the last verse.
    pub has_separator: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfoView {
    pub other_name: Option<String>,
    /// Plain-text description, empty when the source has none.
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChapterDetail {
    pub chapter: Chapter,
    pub verses: Vec<VerseView>,
    pub info: Option<InfoView>,
}

/// Runs the three requests for `chapter_id` concurrently and settles the detail view.
pub async fn load_detail(
    source: &dyn ContentSource,
    chapter_id: ChapterId,
    request: &DetailRequest,
) -> ViewState<ChapterDetail> {
    debug!("Loading detail for chapter {chapter_id}");

    let fetched = try_join3(
        source.chapter(chapter_id),
        source.verses_by_chapter(chapter_id, &request.verses),
        source.chapter_info(chapter_id, &request.language),
    )
    .await;

    match fetched {
        Ok((chapter, verses, info)) => {
            info!(
                "Loaded chapter {chapter_id} ({} verses, info: {})",
                verses.len(),
                info.is_some()
            );
            ViewState::Ready(build_detail(chapter, verses, info))
        }
        Err(e) => {
            warn!("Failed to fetch chapter {chapter_id} from {}: {e}", source.name());
            ViewState::Error(DETAIL_ERROR_MESSAGE.to_string())
        }
    }
}

/// Merges the three fetched resources into the view model.
pub fn build_detail(chapter: Chapter, verses: Vec<Verse>, info: Option<ChapterInfo>) -> ChapterDetail {
    let verses = verses
        .into_iter()
        .enumerate()
        .map(|(index, verse)| {
            let number = verse_number(&verse.verse_key).unwrap_or_else(|| {
                warn!(
                    "Malformed verse key {:?}, using position {}",
                    verse.verse_key,
                    index + 1
                );
                index as u32 + 1
            });
            let translation = single_line(&markup_to_plain(&strip_annotations(
                verse.translations.first().map(|t| t.text.as_str()),
            )));
            VerseView {
                id: verse.id,
                number,
                has_separator: number != chapter.verses_count,
                text_uthmani: verse.text_uthmani,
                translation,
                verse_key: verse.verse_key,
            }
        })
        .collect();

    let info = info.map(|info| InfoView {
        other_name: info.name.filter(|name| !name.trim().is_empty()),
        description: markup_to_plain(&strip_annotations(info.text.as_deref())),
    });

    ChapterDetail {
        chapter,
        verses,
        info,
    }
}

/// Collapses every whitespace run, line breaks included, into one space.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The verse number after the `:` of a "chapter:verse" key.
pub fn verse_number(verse_key: &str) -> Option<u32> {
    let (_, number) = verse_key.split_once(':')?;
    number.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{RevelationPlace, SourceError, Translation};
    use crate::test_support::{FakeSource, Resource, chapter, id_of, verses};

    fn request() -> DetailRequest {
        DetailRequest {
            language: "id".to_string(),
            verses: VerseQuery {
                translation_id: 33,
                per_page: 50,
            },
        }
    }

    #[test]
    fn test_verse_number_parsing() {
        assert_eq!(verse_number("1:7"), Some(7));
        assert_eq!(verse_number("2:286"), Some(286));
        assert_eq!(verse_number("7"), None);
        assert_eq!(verse_number("1:x"), None);
    }

    #[test]
    fn test_separator_omitted_after_last_verse() {
        let ch = chapter(1, "Al-Fatihah", "Pembukaan", 7, RevelationPlace::Meccan);
        let detail = build_detail(ch.clone(), verses(ch.id, 7), None);
        let separators: Vec<(u32, bool)> = detail
            .verses
            .iter()
            .map(|v| (v.number, v.has_separator))
            .collect();
        assert_eq!(
            separators,
            vec![
                (1, true),
                (2, true),
                (3, true),
                (4, true),
                (5, true),
                (6, true),
                (7, false)
            ]
        );
    }

    #[test]
    fn test_translations_are_normalized() {
        let ch = chapter(1, "Al-Fatihah", "Pembukaan", 7, RevelationPlace::Meccan);
        let detail = build_detail(ch.clone(), verses(ch.id, 2), None);
        assert_eq!(detail.verses[0].translation, "Translation 1");
        assert!(detail.verses.iter().all(|v| !v.translation.contains("<sup")));
    }

    #[test]
    fn test_translation_markup_and_entities_are_removed() {
        let ch = chapter(1, "Al-Fatihah", "Pembukaan", 7, RevelationPlace::Meccan);
        let mut vs = verses(ch.id, 1);
        vs[0].translations[0].text =
            "<i>Segala puji</i> bagi Allah,<br/>Tuhan &amp; Pemelihara<sup foot_note=\"1\">1</sup>"
                .into();
        let detail = build_detail(ch, vs, None);
        assert_eq!(
            detail.verses[0].translation,
            "Segala puji bagi Allah, Tuhan & Pemelihara"
        );
    }

    #[test]
    fn test_verse_without_translation_renders_empty() {
        let ch = chapter(112, "Al-Ikhlas", "Ikhlas", 4, RevelationPlace::Meccan);
        let verse = Verse {
            id: 1,
            verse_key: "112:1".into(),
            text_uthmani: "قل".into(),
            translations: Vec::<Translation>::new(),
        };
        let detail = build_detail(ch, vec![verse], None);
        assert_eq!(detail.verses[0].translation, "");
    }

    #[test]
    fn test_malformed_key_falls_back_to_position() {
        let ch = chapter(112, "Al-Ikhlas", "Ikhlas", 2, RevelationPlace::Meccan);
        let mut vs = verses(ch.id, 2);
        vs[1].verse_key = "broken".into();
        let detail = build_detail(ch, vs, None);
        assert_eq!(detail.verses[1].number, 2);
        assert!(!detail.verses[1].has_separator);
    }

    #[test]
    fn test_info_is_stripped_to_plain_text() {
        let ch = chapter(1, "Al-Fatihah", "Pembukaan", 7, RevelationPlace::Meccan);
        let info = ChapterInfo {
            name: Some("  ".into()),
            text: Some("<p>Opening<sup foot_note=\"1\">1</sup> chapter.</p>".into()),
            ..Default::default()
        };
        let detail = build_detail(ch, vec![], Some(info));
        let info = detail.info.expect("info present");
        assert_eq!(info.other_name, None);
        assert_eq!(info.description, "Opening chapter.");
    }

    #[tokio::test]
    async fn test_load_detail_ready_when_all_succeed() {
        let source = FakeSource::sample();
        let state = load_detail(&source, id_of(1), &request()).await;
        let detail = state.ready().expect("detail should be ready");
        assert_eq!(detail.chapter.name_simple, "Al-Fatihah");
        assert_eq!(detail.verses.len(), 7);
        assert_eq!(
            detail.info.as_ref().map(|i| i.description.as_str()),
            Some("Al-Fatihah\nAbout this chapter.")
        );

        let mut calls = source.calls();
        calls.sort();
        assert_eq!(calls, vec!["Chapter:1", "Info:1", "Verses:1"]);
    }

    #[tokio::test]
    async fn test_load_detail_is_all_or_nothing() {
        let source = FakeSource::sample().failing(
            Resource::Verses,
            SourceError::Api {
                status: 500,
                message: "boom".into(),
            },
        );
        let state = load_detail(&source, id_of(1), &request()).await;
        assert_eq!(state, ViewState::Error(DETAIL_ERROR_MESSAGE.to_string()));
    }

    #[tokio::test]
    async fn test_load_detail_decode_failure_is_error() {
        let source = FakeSource::sample()
            .failing(Resource::Info, SourceError::Decode("missing field".into()));
        let state = load_detail(&source, id_of(2), &request()).await;
        assert_eq!(state.error(), Some(DETAIL_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn test_load_detail_without_info() {
        let mut source = FakeSource::sample();
        source.infos.clear();
        let state = load_detail(&source, id_of(112), &request()).await;
        let detail = state.ready().expect("detail should be ready");
        assert!(detail.info.is_none());
        assert_eq!(detail.verses.len(), 4);
    }
}
