use std::fmt;

use async_trait::async_trait;

use super::types::{Chapter, ChapterId, ChapterInfo, Verse, VerseQuery};

/// Errors that can occur while talking to a content source.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceError {
    /// Source misconfigured (bad base URL, client could not be built).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The source answered with a non-success status.
    Api { status: u16, message: String },
    /// The body did not match the expected shape.
    Decode(String),
}

impl SourceError {
    /// True for failures of the transport class (network and status errors).
    pub fn is_transport(&self) -> bool {
        matches!(self, SourceError::Network(_) | SourceError::Api { .. })
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Config(msg) => write!(f, "config error: {msg}"),
            SourceError::Network(msg) => write!(f, "network error: {msg}"),
            SourceError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            SourceError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for SourceError {}

/// Read-only access to chapter content.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Returns the name of the source.
    fn name(&self) -> &str;

    /// The full chapter collection with names translated into `language`.
    async fn chapters(&self, language: &str) -> Result<Vec<Chapter>, SourceError>;

    /// Metadata for a single chapter.
    async fn chapter(&self, id: ChapterId) -> Result<Chapter, SourceError>;

    /// Every verse of a chapter, in order, with the requested translation attached.
    async fn verses_by_chapter(
        &self,
        id: ChapterId,
        query: &VerseQuery,
    ) -> Result<Vec<Verse>, SourceError>;

    /// Supplementary chapter description in `language`, if the source has one.
    async fn chapter_info(
        &self,
        id: ChapterId,
        language: &str,
    ) -> Result<Option<ChapterInfo>, SourceError>;
}
