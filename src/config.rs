use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::summarize::SummaryMethod;
use crate::whisper::ModelSize;

/// Configuration for the lecture-scribe tools
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Transcription provider settings
    pub transcription: TranscriptionConfig,

    /// Summarization provider settings
    pub summary: SummaryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptionConfig {
    /// Command used to invoke the whisper CLI
    pub command: String,

    /// Default model size
    pub model: ModelSize,

    /// Language hint for transcription; autodetected when unset
    pub language: Option<String>,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            command: "whisper".to_string(),
            model: ModelSize::Medium,
            language: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Command used to invoke the summarizer CLI
    pub command: String,

    /// Default number of sentences to extract
    pub sentence_count: usize,

    /// Default sentence-ranking method
    pub method: SummaryMethod,

    /// Tokenizer language passed to the summarizer
    pub language: String,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            command: "sumy".to_string(),
            sentence_count: 30,
            method: SummaryMethod::LexRank,
            language: "english".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the first config file found, falling back to
    /// defaults. Environment overrides apply on top either way.
    pub fn load() -> Self {
        let config_paths = ["lecture-scribe.toml", "config/lecture-scribe.toml"];

        let mut config = Config::default();
        for path in &config_paths {
            if let Ok(config_str) = std::fs::read_to_string(path) {
                match toml::from_str(&config_str) {
                    Ok(parsed) => {
                        info!("📄 Loaded configuration from: {}", path);
                        config = parsed;
                        break;
                    }
                    Err(e) => {
                        warn!("Failed to parse config file {}: {}", path, e);
                    }
                }
            }
        }

        config.apply_env();
        config
    }

    /// Override settings from environment variables
    fn apply_env(&mut self) {
        if let Ok(command) = std::env::var("LECTURE_SCRIBE_WHISPER_CMD") {
            self.transcription.command = command;
        }

        if let Ok(model) = std::env::var("LECTURE_SCRIBE_MODEL") {
            match model.parse() {
                Ok(model) => self.transcription.model = model,
                Err(e) => warn!("Ignoring LECTURE_SCRIBE_MODEL: {}", e),
            }
        }

        if let Ok(language) = std::env::var("LECTURE_SCRIBE_LANGUAGE") {
            self.transcription.language = Some(language);
        }

        if let Ok(command) = std::env::var("LECTURE_SCRIBE_SUMY_CMD") {
            self.summary.command = command;
        }
    }
}
