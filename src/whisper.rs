use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tempfile::TempDir;
use tokio::process::Command;
use tracing::{debug, info};

use crate::config::TranscriptionConfig;
use crate::error::{Error, Result};
use crate::transcript::{Segment, TranscriptResult};

/// Model sizes accepted by the whisper CLI's `--model` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ModelSize {
    Tiny,
    Base,
    Small,
    #[default]
    Medium,
    Large,
    LargeV1,
    LargeV2,
    LargeV3,
}

impl ModelSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelSize::Tiny => "tiny",
            ModelSize::Base => "base",
            ModelSize::Small => "small",
            ModelSize::Medium => "medium",
            ModelSize::Large => "large",
            ModelSize::LargeV1 => "large-v1",
            ModelSize::LargeV2 => "large-v2",
            ModelSize::LargeV3 => "large-v3",
        }
    }
}

impl FromStr for ModelSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tiny" => Ok(ModelSize::Tiny),
            "base" => Ok(ModelSize::Base),
            "small" => Ok(ModelSize::Small),
            "medium" => Ok(ModelSize::Medium),
            "large" => Ok(ModelSize::Large),
            "large-v1" => Ok(ModelSize::LargeV1),
            "large-v2" => Ok(ModelSize::LargeV2),
            "large-v3" => Ok(ModelSize::LargeV3),
            other => Err(Error::Provider(format!("unsupported model size: {}", other))),
        }
    }
}

impl std::fmt::Display for ModelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Narrow interface to a speech-to-text provider.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe a media file in full. May block for minutes on long
    /// media; no timeout is imposed here.
    async fn transcribe(&self, media_path: &Path) -> Result<TranscriptResult>;
}

/// Transcription provider backed by the external `whisper` command-line
/// tool. The model runs entirely inside that process; this struct only
/// shells out and parses the JSON it writes.
#[derive(Debug, Clone)]
pub struct WhisperTranscriber {
    command: String,
    model: ModelSize,
    language: Option<String>,
}

impl WhisperTranscriber {
    /// Resolve a transcriber for the given model size, verifying the
    /// whisper CLI is reachable.
    pub async fn load(config: &TranscriptionConfig, model: ModelSize) -> Result<Self> {
        info!("Loading Whisper model: {}", model);
        info!("This may take a moment on first run...");

        if !Self::check_command_available(&config.command).await {
            return Err(Error::Provider(format!(
                "whisper command not found: {} (install openai-whisper)",
                config.command
            )));
        }

        Ok(Self {
            command: config.command.clone(),
            model,
            language: config.language.clone(),
        })
    }

    async fn check_command_available(cmd_name: &str) -> bool {
        Command::new(cmd_name)
            .arg("--help")
            .output()
            .await
            .map(|output| output.status.success())
            .unwrap_or(false)
    }
}

#[async_trait]
impl Transcriber for WhisperTranscriber {
    async fn transcribe(&self, media_path: &Path) -> Result<TranscriptResult> {
        // Scratch directory for the CLI's JSON output, removed on drop.
        let scratch = TempDir::new()?;

        let mut cmd = Command::new(&self.command);
        cmd.arg(media_path)
            .arg("--model")
            .arg(self.model.as_str())
            .arg("--output_dir")
            .arg(scratch.path())
            .arg("--output_format")
            .arg("json")
            .arg("--verbose")
            .arg("False");

        if let Some(language) = &self.language {
            cmd.arg("--language").arg(language);
        }

        info!("🎤 Transcribing: {}", media_path.display());
        info!("This may take several minutes depending on video length...");
        debug!("Executing command: {:?}", cmd);

        let output = cmd
            .output()
            .await
            .map_err(|e| Error::Provider(format!("failed to run {}: {}", self.command, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Provider(format!(
                "whisper exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let stem = media_path.file_stem().unwrap_or_default().to_string_lossy();
        let json_path = scratch.path().join(format!("{}.json", stem));
        let json = tokio::fs::read_to_string(&json_path).await.map_err(|_| {
            Error::Provider(format!(
                "whisper produced no JSON output at {}",
                json_path.display()
            ))
        })?;

        let raw: WhisperOutput = serde_json::from_str(&json)
            .map_err(|e| Error::Provider(format!("failed to parse whisper output: {}", e)))?;

        Ok(raw.into_result())
    }
}

/// JSON document written by the whisper CLI. Fields we do not consume
/// (token ids, decode probabilities) are ignored.
#[derive(Debug, Deserialize)]
struct WhisperOutput {
    #[serde(default)]
    text: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    segments: Vec<WhisperSegment>,
}

#[derive(Debug, Deserialize)]
struct WhisperSegment {
    start: f64,
    end: f64,
    text: String,
}

impl WhisperOutput {
    fn into_result(self) -> TranscriptResult {
        let segments = self
            .segments
            .into_iter()
            .map(|seg| Segment {
                start: seg.start,
                end: seg.end,
                text: seg.text,
            })
            .collect();

        TranscriptResult {
            text: self.text,
            language: self.language,
            segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_size_parsing() {
        assert_eq!("tiny".parse::<ModelSize>().unwrap(), ModelSize::Tiny);
        assert_eq!("medium".parse::<ModelSize>().unwrap(), ModelSize::Medium);
        assert_eq!("large-v3".parse::<ModelSize>().unwrap(), ModelSize::LargeV3);

        let err = "enormous".parse::<ModelSize>().unwrap_err();
        assert!(matches!(err, Error::Provider(_)));
        assert!(err.to_string().contains("unsupported model size"));
    }

    #[test]
    fn test_model_size_display() {
        assert_eq!(ModelSize::Medium.to_string(), "medium");
        assert_eq!(ModelSize::LargeV2.to_string(), "large-v2");
        assert_eq!(ModelSize::default(), ModelSize::Medium);
    }

    #[test]
    fn test_whisper_output_parsing() {
        let json = r#"{
            "text": " Hello world.",
            "segments": [
                {
                    "id": 0, "seek": 0, "start": 0.0, "end": 1.5,
                    "text": " Hello", "tokens": [50364], "temperature": 0.0,
                    "avg_logprob": -0.25, "compression_ratio": 1.1,
                    "no_speech_prob": 0.02
                },
                {
                    "id": 1, "seek": 0, "start": 1.5, "end": 3.0,
                    "text": " world.", "tokens": [50440], "temperature": 0.0,
                    "avg_logprob": -0.31, "compression_ratio": 1.1,
                    "no_speech_prob": 0.01
                }
            ],
            "language": "en"
        }"#;

        let output: WhisperOutput = serde_json::from_str(json).unwrap();
        let result = output.into_result();

        assert_eq!(result.text, " Hello world.");
        assert_eq!(result.language.as_deref(), Some("en"));
        assert_eq!(result.segments.len(), 2);
        // Raw provider text is kept; trimming happens in the writers.
        assert_eq!(result.segments[0].text, " Hello");
        assert_eq!(result.segments[1].end, 3.0);
    }

    #[test]
    fn test_whisper_output_missing_fields() {
        let output: WhisperOutput = serde_json::from_str("{}").unwrap();
        let result = output.into_result();
        assert!(result.text.is_empty());
        assert!(result.language.is_none());
        assert!(result.segments.is_empty());
    }

    #[test]
    fn test_command_availability() {
        let available = tokio_test::block_on(WhisperTranscriber::check_command_available(
            "definitely-not-a-real-command-xyz",
        ));
        assert!(!available);
    }

    #[tokio::test]
    async fn test_load_fails_without_command() {
        let config = TranscriptionConfig {
            command: "definitely-not-a-real-command-xyz".to_string(),
            ..Default::default()
        };
        let err = WhisperTranscriber::load(&config, ModelSize::Tiny)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Provider(_)));
    }
}
