//! quran.com v4 content source.
//!
//! Plain JSON over HTTPS, no authentication. Every call is a single GET except
//! verses-by-chapter, which follows `pagination.next_page` until the chapter
//! is complete.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::source::{ContentSource, SourceError};
use super::types::{
    Chapter, ChapterId, ChapterInfo, ChapterInfoResponse, ChapterListResponse, ChapterResponse,
    VERSE_FIELDS, Verse, VerseQuery, VersesResponse,
};

pub const DEFAULT_BASE_URL: &str = "https://api.quran.com/api/v4";

/// Upper bound on followed verse pages. The longest chapter has 286 verses.
const MAX_VERSE_PAGES: u32 = 300;

pub struct QuranComSource {
    base_url: String,
    client: reqwest::Client,
}

impl QuranComSource {
    /// Builds a source for `base_url` (or the public API) whose requests give up after `timeout`.
    pub fn new(base_url: Option<String>, timeout: Duration) -> Result<Self, SourceError> {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        if reqwest::Url::parse(&base_url).is_err() {
            return Err(SourceError::Config(format!("invalid base URL: {base_url}")));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Config(e.to_string()))?;

        info!("quran.com source at {base_url} (timeout {}s)", timeout.as_secs());
        Ok(Self { base_url, client })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, SourceError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url} {query:?}");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        debug!("{path} -> {status}");

        if !status.is_success() {
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("quran.com API error on {path}: {} - {}", status.as_u16(), err_body);
            return Err(SourceError::Api {
                status: status.as_u16(),
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| SourceError::Decode(format!("{path}: {e}")))
    }
}

#[async_trait]
impl ContentSource for QuranComSource {
    fn name(&self) -> &str {
        "quran.com"
    }

    async fn chapters(&self, language: &str) -> Result<Vec<Chapter>, SourceError> {
        let response: ChapterListResponse = self
            .get_json("/chapters", &[("language", language.to_string())])
            .await?;
        Ok(response.chapters)
    }

    async fn chapter(&self, id: ChapterId) -> Result<Chapter, SourceError> {
        let response: ChapterResponse = self.get_json(&format!("/chapters/{id}"), &[]).await?;
        Ok(response.chapter)
    }

    async fn verses_by_chapter(
        &self,
        id: ChapterId,
        query: &VerseQuery,
    ) -> Result<Vec<Verse>, SourceError> {
        let path = format!("/verses/by_chapter/{id}");
        let mut verses = Vec::new();
        let mut page = 1u32;

        loop {
            let params = [
                ("translations", query.translation_id.to_string()),
                ("fields", VERSE_FIELDS.join(",")),
                ("per_page", query.per_page.to_string()),
                ("page", page.to_string()),
            ];
            let response: VersesResponse = self.get_json(&path, &params).await?;
            verses.extend(response.verses);

            match response.pagination.and_then(|p| p.next_page) {
                Some(next) if next > page && next <= MAX_VERSE_PAGES => page = next,
                _ => break,
            }
        }

        debug!("chapter {id}: {} verses over {page} page(s)", verses.len());
        Ok(verses)
    }

    async fn chapter_info(
        &self,
        id: ChapterId,
        language: &str,
    ) -> Result<Option<ChapterInfo>, SourceError> {
        let response: ChapterInfoResponse = self
            .get_json(
                &format!("/chapters/{id}/info"),
                &[("language", language.to_string())],
            )
            .await?;
        Ok(response.chapter_info)
    }
}
