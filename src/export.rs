use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::info;

use crate::config::TranscriptionConfig;
use crate::error::{Error, Result};
use crate::subtitle;
use crate::summarize::{self, Summarizer};
use crate::transcript::TranscriptResult;
use crate::whisper::{ModelSize, Transcriber, WhisperTranscriber};

/// Output formats the transcript exporter can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Vtt,
    Srt,
    Json,
}

impl OutputFormat {
    /// Every format, in the order the exporter writes them.
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Text,
        OutputFormat::Vtt,
        OutputFormat::Srt,
        OutputFormat::Json,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Vtt => "vtt",
            OutputFormat::Srt => "srt",
            OutputFormat::Json => "json",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Text transcript",
            OutputFormat::Vtt => "VTT file",
            OutputFormat::Srt => "SRT file",
            OutputFormat::Json => "JSON file",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "txt" | "text" => Ok(OutputFormat::Text),
            "vtt" => Ok(OutputFormat::Vtt),
            "srt" => Ok(OutputFormat::Srt),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Provider(format!("unknown output format: {}", other))),
        }
    }
}

/// Requested output selection: one format, or all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatSelector {
    One(OutputFormat),
    All,
}

impl FormatSelector {
    /// Concrete formats this selection expands to.
    pub fn formats(&self) -> Vec<OutputFormat> {
        match self {
            FormatSelector::All => OutputFormat::ALL.to_vec(),
            FormatSelector::One(format) => vec![*format],
        }
    }
}

impl FromStr for FormatSelector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "all" {
            Ok(FormatSelector::All)
        } else {
            Ok(FormatSelector::One(s.parse()?))
        }
    }
}

/// Where transcript exports land and how they are named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLocation {
    /// Next to the input media, named `{stem}_transcript.{ext}`
    Alongside,
    /// Inside a directory (created if needed), named `{stem}.{ext}`
    Dir(PathBuf),
}

impl OutputLocation {
    /// Resolve the output path for one format of one media file.
    pub fn resolve(&self, media_path: &Path, format: OutputFormat) -> PathBuf {
        let stem = media_path.file_stem().unwrap_or_default().to_string_lossy();
        match self {
            OutputLocation::Alongside => {
                media_path.with_file_name(format!("{}_transcript.{}", stem, format.extension()))
            }
            OutputLocation::Dir(dir) => dir.join(format!("{}.{}", stem, format.extension())),
        }
    }
}

/// One file written by the transcript exporter.
#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub format: OutputFormat,
    pub path: PathBuf,
}

/// Drives one transcription export: validate the input, call the provider,
/// write every requested format.
pub struct TranscriptExporter {
    location: OutputLocation,
}

impl TranscriptExporter {
    pub fn new(location: OutputLocation) -> Self {
        Self { location }
    }

    /// Export `media_path` through `transcriber` into the requested formats.
    ///
    /// The input path is checked before the provider is invoked. Formats are
    /// written sequentially; files already written when a later step fails
    /// are left on disk.
    pub async fn export(
        &self,
        transcriber: &dyn Transcriber,
        media_path: &Path,
        selection: FormatSelector,
    ) -> Result<(TranscriptResult, Vec<ExportedFile>)> {
        if !media_path.exists() {
            return Err(Error::MissingInput(media_path.to_path_buf()));
        }

        if let OutputLocation::Dir(dir) = &self.location {
            tokio::fs::create_dir_all(dir).await?;
        }

        let result = transcriber.transcribe(media_path).await?;

        let mut written = Vec::new();
        for format in selection.formats() {
            let path = self.location.resolve(media_path, format);
            self.write_format(&result, format, &path).await?;
            info!("✓ {} saved: {}", format.label(), path.display());
            written.push(ExportedFile { format, path });
        }

        Ok((result, written))
    }

    /// Full whisper-CLI export: validate the input, load the provider, then
    /// run [`export`](Self::export).
    ///
    /// The input check comes first, so a missing file never spawns the
    /// whisper command.
    pub async fn export_with_whisper(
        &self,
        config: &TranscriptionConfig,
        model: ModelSize,
        media_path: &Path,
        selection: FormatSelector,
    ) -> Result<(TranscriptResult, Vec<ExportedFile>)> {
        if !media_path.exists() {
            return Err(Error::MissingInput(media_path.to_path_buf()));
        }

        let transcriber = WhisperTranscriber::load(config, model).await?;
        self.export(&transcriber, media_path, selection).await
    }

    async fn write_format(
        &self,
        result: &TranscriptResult,
        format: OutputFormat,
        path: &Path,
    ) -> Result<()> {
        match format {
            OutputFormat::Text => {
                tokio::fs::write(path, &result.text).await?;
            }
            OutputFormat::Vtt => {
                let file = File::create(path)?;
                let mut out = BufWriter::new(file);
                subtitle::write_vtt(&mut out, &result.segments)?;
                out.flush()?;
            }
            OutputFormat::Srt => {
                let file = File::create(path)?;
                let mut out = BufWriter::new(file);
                subtitle::write_srt(&mut out, &result.segments)?;
                out.flush()?;
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(result)
                    .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
                tokio::fs::write(path, json).await?;
            }
        }
        Ok(())
    }
}

/// Outcome of one summary export.
#[derive(Debug, Clone)]
pub struct SummaryOutcome {
    pub path: PathBuf,
    pub sentences: Vec<String>,
}

/// Drive one summary export: validate the input, rank sentences through
/// `summarizer`, write the numbered report to `output_path`.
pub async fn export_summary(
    summarizer: &dyn Summarizer,
    input_path: &Path,
    output_path: &Path,
    sentence_count: usize,
) -> Result<SummaryOutcome> {
    if !input_path.exists() {
        return Err(Error::MissingInput(input_path.to_path_buf()));
    }

    info!("Reading transcript from: {}", input_path.display());
    info!("Generating summary with {} sentences...", sentence_count);

    let sentences = summarizer.summarize(input_path, sentence_count).await?;

    let file = File::create(output_path)?;
    let mut out = BufWriter::new(file);
    summarize::write_report(&mut out, &sentences, sentence_count, summarizer.method())?;
    out.flush()?;

    info!("✓ Summary saved: {}", output_path.display());

    Ok(SummaryOutcome {
        path: output_path.to_path_buf(),
        sentences,
    })
}
