/// Lecture Scribe - Whisper transcription and extractive summary export
///
/// Command-line tooling that delegates speech-to-text to the external
/// whisper CLI and sentence ranking to an external summarizer, then formats
/// the results as plain text, WebVTT, SubRip, and JSON documents.

pub mod config;
pub mod error;
pub mod export;
pub mod subtitle;
pub mod summarize;
pub mod transcript;
pub mod whisper;

// Re-export main types for easy access
pub use crate::config::{Config, SummaryConfig, TranscriptionConfig};
pub use crate::error::{Error, Result};
pub use crate::export::{
    export_summary, ExportedFile, FormatSelector, OutputFormat, OutputLocation, SummaryOutcome,
    TranscriptExporter,
};
pub use crate::subtitle::{format_timestamp, write_srt, write_vtt};
pub use crate::summarize::{SummaryMethod, Summarizer, SumySummarizer};
pub use crate::transcript::{Segment, TranscriptResult};
pub use crate::whisper::{ModelSize, Transcriber, WhisperTranscriber};
