//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::content::{
    Chapter, ChapterId, ChapterInfo, ContentSource, RevelationPlace, SourceError, TranslatedName,
    Translation, Verse, VerseQuery,
};
use crate::core::state::{App, Settings};

/// The resources a `FakeSource` can be told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Chapters,
    Chapter,
    Verses,
    Info,
}

/// An in-memory content source with scripted failures and per-chapter latency.
#[derive(Default)]
pub struct FakeSource {
    pub chapters: Vec<Chapter>,
    pub verses: HashMap<ChapterId, Vec<Verse>>,
    pub infos: HashMap<ChapterId, ChapterInfo>,
    pub failures: HashMap<Resource, SourceError>,
    pub delays: HashMap<ChapterId, Duration>,
    /// Every call, as "resource:chapter", in the order it was made.
    pub calls: Mutex<Vec<String>>,
}

impl FakeSource {
    /// Four chapters with verses and info, including one whose translated name needs overriding.
    pub fn sample() -> Self {
        let chapters = vec![
            chapter(1, "Al-Fatihah", "Pembukaan", 7, RevelationPlace::Meccan),
            chapter(2, "Al-Baqarah", "Sapi Betina", 286, RevelationPlace::Medinan),
            chapter(55, "Ar-Rahman", "The Beneficent", 78, RevelationPlace::Medinan),
            chapter(112, "Al-Ikhlas", "Ikhlas", 4, RevelationPlace::Meccan),
        ];

        let mut source = Self::default();
        for ch in &chapters {
            source.verses.insert(ch.id, verses(ch.id, ch.verses_count));
            source.infos.insert(
                ch.id,
                ChapterInfo {
                    name: Some(format!("Other name of {}", ch.name_simple)),
                    short_text: None,
                    source: None,
                    text: Some(format!(
                        "<h2>{}</h2><p>About this chapter<sup foot_note=\"9\">9</sup>.</p>",
                        ch.name_simple
                    )),
                },
            );
        }
        source.chapters = chapters;
        source
    }

    pub fn failing(mut self, resource: Resource, error: SourceError) -> Self {
        self.failures.insert(resource, error);
        self
    }

    pub fn delayed(mut self, id: u16, delay: Duration) -> Self {
        self.delays.insert(id_of(id), delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    async fn enter(&self, resource: Resource, id: Option<ChapterId>) -> Result<(), SourceError> {
        if let Ok(mut calls) = self.calls.lock() {
            let label = match id {
                Some(id) => format!("{resource:?}:{id}"),
                None => format!("{resource:?}"),
            };
            calls.push(label);
        }
        if let Some(delay) = id.and_then(|id| self.delays.get(&id)) {
            tokio::time::sleep(*delay).await;
        }
        match self.failures.get(&resource) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ContentSource for FakeSource {
    fn name(&self) -> &str {
        "fake"
    }

    async fn chapters(&self, _language: &str) -> Result<Vec<Chapter>, SourceError> {
        self.enter(Resource::Chapters, None).await?;
        Ok(self.chapters.clone())
    }

    async fn chapter(&self, id: ChapterId) -> Result<Chapter, SourceError> {
        self.enter(Resource::Chapter, Some(id)).await?;
        self.chapters
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| SourceError::Api {
                status: 404,
                message: "chapter not found".into(),
            })
    }

    async fn verses_by_chapter(
        &self,
        id: ChapterId,
        _query: &VerseQuery,
    ) -> Result<Vec<Verse>, SourceError> {
        self.enter(Resource::Verses, Some(id)).await?;
        Ok(self.verses.get(&id).cloned().unwrap_or_default())
    }

    async fn chapter_info(
        &self,
        id: ChapterId,
        _language: &str,
    ) -> Result<Option<ChapterInfo>, SourceError> {
        self.enter(Resource::Info, Some(id)).await?;
        Ok(self.infos.get(&id).cloned())
    }
}

pub fn id_of(id: u16) -> ChapterId {
    ChapterId::new(id).expect("test chapter id in range")
}

pub fn chapter(
    id: u16,
    name_simple: &str,
    translated: &str,
    verses_count: u32,
    revelation_place: RevelationPlace,
) -> Chapter {
    Chapter {
        id: id_of(id),
        name_simple: name_simple.to_string(),
        name_arabic: format!("سورة {id}"),
        translated_name: TranslatedName {
            name: translated.to_string(),
            language_name: Some("indonesian".to_string()),
        },
        verses_count,
        revelation_place,
    }
}

/// `count` verses whose translations carry a footnote marker.
pub fn verses(chapter_id: ChapterId, count: u32) -> Vec<Verse> {
    (1..=count)
        .map(|n| Verse {
            id: n,
            verse_key: format!("{chapter_id}:{n}"),
            text_uthmani: format!("نص {n}"),
            translations: vec![Translation {
                resource_id: Some(33),
                text: format!("Translation {n}<sup foot_note=\"{n}\">{n}</sup>"),
            }],
        })
        .collect()
}

/// Creates a test App backed by the sample `FakeSource`.
pub fn test_app() -> App {
    App::new(Arc::new(FakeSource::sample()), Settings::default())
}
