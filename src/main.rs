use anyhow::Result;
use clap::{Arg, Command};
use std::path::PathBuf;
use tracing::{error, info, warn};

use lecture_scribe::{Config, FormatSelector, ModelSize, OutputLocation, TranscriptExporter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("transcribe_video=info,lecture_scribe=info,warn")
        .init();

    let matches = Command::new("transcribe-video")
        .version("0.1.0")
        .about("Transcribe a lecture video with Whisper and export subtitles")
        .arg(
            Arg::new("video")
                .value_name("VIDEO_PATH")
                .help("Video or audio file to transcribe")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output-dir")
                .value_name("OUTPUT_DIR")
                .help("Directory for transcripts, or 'none' to write next to the video")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("model")
                .value_name("MODEL_SIZE")
                .help("Whisper model size")
                .value_parser([
                    "tiny", "base", "small", "medium", "large", "large-v1", "large-v2", "large-v3",
                ])
                .index(3),
        )
        .arg(
            Arg::new("format")
                .value_name("OUTPUT_FORMAT")
                .help("Output format to write")
                .value_parser(["txt", "vtt", "srt", "json", "all"])
                .index(4),
        )
        .get_matches();

    // Load configuration
    let config = Config::load();

    let video_path = PathBuf::from(matches.get_one::<String>("video").unwrap());
    let location = match matches.get_one::<String>("output-dir").unwrap().as_str() {
        "none" => OutputLocation::Alongside,
        dir => OutputLocation::Dir(PathBuf::from(dir)),
    };
    let model = match matches.get_one::<String>("model") {
        Some(size) => size.parse::<ModelSize>()?,
        None => config.transcription.model,
    };
    let selection = match matches.get_one::<String>("format") {
        Some(format) => format.parse::<FormatSelector>()?,
        None => FormatSelector::All,
    };

    info!("🎬 Video Transcription");
    info!("📹 Input: {}", video_path.display());
    info!("⚙️  Model: {}", model);

    let exporter = TranscriptExporter::new(location);
    match exporter
        .export_with_whisper(&config.transcription, model, &video_path, selection)
        .await
    {
        Ok((result, files)) => {
            info!("✅ Transcription complete! {} file(s) written", files.len());
            if let Some(language) = &result.language {
                info!("🌐 Detected language: {}", language);
            }
            if result.is_empty() {
                warn!("⚠️  No speech detected in the input");
            }
            print_preview(&result.text);
            Ok(())
        }
        Err(e) => {
            error!("❌ Transcription failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print the first 500 characters of the transcript between rule lines.
fn print_preview(text: &str) {
    let rule = "-".repeat(50);
    info!("Transcription preview:");
    info!("{}", rule);

    let mut preview: String = text.chars().take(500).collect();
    if preview.len() < text.len() {
        preview.push_str("...");
    }
    info!("{}", preview);
    info!("{}", rule);
}
