pub mod quran_com;
pub mod source;
pub mod types;

pub use quran_com::QuranComSource;
pub use source::{ContentSource, SourceError};
pub use types::{
    CHAPTER_COUNT, Chapter, ChapterId, ChapterInfo, RevelationPlace, TranslatedName, Translation,
    Verse, VerseQuery,
};
