use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use surah::content::ChapterId;
use surah::core::config::{self, CliOverrides};

#[derive(Parser)]
#[command(name = "surah", about = "Terminal reader for the chapters of the Qur'an")]
struct Args {
    /// Language for chapter names and chapter info (e.g. "id", "en")
    #[arg(short, long)]
    language: Option<String>,

    /// Translation edition attached to each verse
    #[arg(short, long)]
    translation: Option<u32>,

    /// Base URL of the content API
    #[arg(long)]
    base_url: Option<String>,

    /// Open this chapter (1-114) instead of the chapter list
    #[arg(short, long, value_parser = parse_chapter)]
    chapter: Option<ChapterId>,
}

fn parse_chapter(value: &str) -> Result<ChapterId, String> {
    let id: u16 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a chapter number"))?;
    ChapterId::try_from(id)
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to surah.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("surah.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().map_err(std::io::Error::other)?;
    let overrides = CliOverrides {
        language: args.language,
        translation_id: args.translation,
        base_url: args.base_url,
    };
    let resolved = config::resolve(&file_config, &overrides);

    log::info!(
        "Surah starting up (language={}, translation={}, source={})",
        resolved.language,
        resolved.translation_id,
        resolved.base_url
    );

    surah::tui::run(resolved, args.chapter)
}
