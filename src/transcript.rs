use serde::{Deserialize, Serialize};

/// A timed span of transcript text. Offsets are seconds from the start of
/// the media, with `start <= end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    /// Text as the provider produced it; writers trim it at emit time
    pub text: String,
}

impl Segment {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// Complete result of one transcription call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptResult {
    /// Full transcription text, pre-joined by the provider
    pub text: String,
    /// Language reported by the provider, if any
    pub language: Option<String>,
    /// Timed segments in chronological order
    pub segments: Vec<Segment>,
}

impl TranscriptResult {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.segments.is_empty()
    }
}
