//! # Chapter List
//!
//! Loads the chapter collection for the list view and filters it as the user
//! types. Two translated names come back from the source untranslated; they
//! are replaced with their localized labels before anything is shown.

use log::{info, warn};

use crate::content::{Chapter, ContentSource};
use crate::core::view_state::ViewState;

/// Message shown when the chapter collection cannot be fetched.
pub const LIST_ERROR_MESSAGE: &str = "failed to fetch chapter list";

/// Source-language names the source leaves untranslated, with their replacements.
const NAME_OVERRIDES: &[(&str, &str)] = &[
    ("The Beneficent", "Maha Pengasih"),
    ("The Mercy Giving", "Maha Penyayang"),
];

/// Fetches every chapter in `language` and settles the list view.
///
/// Order is kept as the source returns it.
pub async fn load_all(source: &dyn ContentSource, language: &str) -> ViewState<Vec<Chapter>> {
    match source.chapters(language).await {
        Ok(chapters) => {
            info!("Loaded {} chapters from {}", chapters.len(), source.name());
            ViewState::Ready(apply_name_overrides(chapters))
        }
        Err(e) => {
            warn!("Failed to fetch chapter list from {}: {e}", source.name());
            ViewState::Error(LIST_ERROR_MESSAGE.to_string())
        }
    }
}

/// Rewrites the translated names listed in `NAME_OVERRIDES`; others pass through.
pub fn apply_name_overrides(chapters: Vec<Chapter>) -> Vec<Chapter> {
    chapters
        .into_iter()
        .map(|mut chapter| {
            if let Some((_, replacement)) = NAME_OVERRIDES
                .iter()
                .find(|(raw, _)| *raw == chapter.translated_name.name)
            {
                chapter.translated_name.name = (*replacement).to_string();
            }
            chapter
        })
        .collect()
}

/// Chapters whose simple or translated name contains `term`, ignoring case.
///
/// An empty term keeps every chapter. The input is never reordered.
pub fn filter<'a>(chapters: &'a [Chapter], term: &str) -> Vec<&'a Chapter> {
    let needle = term.to_lowercase();
    chapters
        .iter()
        .filter(|chapter| {
            needle.is_empty()
                || chapter.name_simple.to_lowercase().contains(&needle)
                || chapter.translated_name.name.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{RevelationPlace, SourceError};
    use crate::test_support::{FakeSource, Resource, chapter};

    fn names(chapters: &[&Chapter]) -> Vec<String> {
        chapters.iter().map(|c| c.name_simple.clone()).collect()
    }

    #[test]
    fn test_filter_empty_term_is_identity() {
        let chapters = FakeSource::sample().chapters;
        let filtered = filter(&chapters, "");
        assert_eq!(filtered.len(), chapters.len());
        assert!(filtered.iter().zip(&chapters).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let chapters = vec![chapter(1, "Al-Fatihah", "Pembukaan", 7, RevelationPlace::Meccan)];
        assert_eq!(names(&filter(&chapters, "al-fat")), vec!["Al-Fatihah"]);
        assert_eq!(names(&filter(&chapters, "AL-FAT")), vec!["Al-Fatihah"]);
        assert!(filter(&chapters, "xyz").is_empty());
    }

    #[test]
    fn test_filter_matches_translated_name() {
        let chapters = FakeSource::sample().chapters;
        assert_eq!(names(&filter(&chapters, "sapi")), vec!["Al-Baqarah"]);
    }

    #[test]
    fn test_filter_keeps_source_order() {
        let chapters = FakeSource::sample().chapters;
        assert_eq!(
            names(&filter(&chapters, "al-")),
            vec!["Al-Fatihah", "Al-Baqarah", "Al-Ikhlas"]
        );
    }

    #[test]
    fn test_overrides_known_names() {
        let chapters = vec![
            chapter(55, "Ar-Rahman", "The Beneficent", 78, RevelationPlace::Medinan),
            chapter(99, "Az-Zalzalah", "The Mercy Giving", 8, RevelationPlace::Medinan),
            chapter(1, "Al-Fatihah", "Pembukaan", 7, RevelationPlace::Meccan),
        ];
        let rewritten = apply_name_overrides(chapters);
        assert_eq!(rewritten[0].translated_name.name, "Maha Pengasih");
        assert_eq!(rewritten[1].translated_name.name, "Maha Penyayang");
        assert_eq!(rewritten[2].translated_name.name, "Pembukaan");
    }

    #[test]
    fn test_override_requires_exact_match() {
        let chapters = vec![chapter(55, "Ar-Rahman", "the beneficent", 78, RevelationPlace::Medinan)];
        let rewritten = apply_name_overrides(chapters);
        assert_eq!(rewritten[0].translated_name.name, "the beneficent");
    }

    #[tokio::test]
    async fn test_load_all_applies_overrides_in_order() {
        let source = FakeSource::sample();
        let state = load_all(&source, "id").await;
        let chapters = state.ready().expect("list should be ready");
        let ids: Vec<u16> = chapters.iter().map(|c| c.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 55, 112]);
        assert_eq!(chapters[2].translated_name.name, "Maha Pengasih");
    }

    #[tokio::test]
    async fn test_load_all_surfaces_failure() {
        let source = FakeSource::sample()
            .failing(Resource::Chapters, SourceError::Network("unreachable".into()));
        let state = load_all(&source, "id").await;
        assert_eq!(state, ViewState::Error(LIST_ERROR_MESSAGE.to_string()));
    }
}
