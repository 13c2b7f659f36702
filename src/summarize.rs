use std::io::{self, Write};
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::process::Command;
use tracing::{debug, info};

use crate::config::SummaryConfig;
use crate::error::{Error, Result};

/// Width of the `=` rule lines in the summary report.
const RULE_WIDTH: usize = 80;

/// Sentence-ranking methods understood by the summarizer CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMethod {
    #[default]
    LexRank,
    Lsa,
    Luhn,
}

impl SummaryMethod {
    /// Parse a method selector. Unrecognized values fall back to LexRank.
    pub fn parse_or_default(s: &str) -> Self {
        match s {
            "lexrank" => SummaryMethod::LexRank,
            "lsa" => SummaryMethod::Lsa,
            "luhn" => SummaryMethod::Luhn,
            _ => SummaryMethod::LexRank,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryMethod::LexRank => "lexrank",
            SummaryMethod::Lsa => "lsa",
            SummaryMethod::Luhn => "luhn",
        }
    }

    /// Subcommand name the sumy CLI uses for this method.
    fn subcommand(&self) -> &'static str {
        match self {
            SummaryMethod::LexRank => "lex-rank",
            SummaryMethod::Lsa => "lsa",
            SummaryMethod::Luhn => "luhn",
        }
    }
}

impl std::fmt::Display for SummaryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Narrow interface to an extractive summarization provider.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Parse the document at `input` and return the `sentence_count` top
    /// ranked sentences, in the provider's order.
    async fn summarize(&self, input: &Path, sentence_count: usize) -> Result<Vec<String>>;

    /// Ranking method this summarizer applies.
    fn method(&self) -> SummaryMethod;
}

/// Summarization provider backed by the external `sumy` command-line tool.
/// Sentence splitting and ranking both happen inside that process; stdout
/// comes back one sentence per line.
#[derive(Debug, Clone)]
pub struct SumySummarizer {
    command: String,
    method: SummaryMethod,
    language: String,
}

impl SumySummarizer {
    pub fn new(config: &SummaryConfig, method: SummaryMethod) -> Self {
        match method {
            SummaryMethod::LexRank => info!("Using LexRank algorithm (best for coherent summaries)"),
            SummaryMethod::Lsa => info!("Using LSA algorithm"),
            SummaryMethod::Luhn => info!("Using Luhn algorithm"),
        }

        Self {
            command: config.command.clone(),
            method,
            language: config.language.clone(),
        }
    }
}

#[async_trait]
impl Summarizer for SumySummarizer {
    async fn summarize(&self, input: &Path, sentence_count: usize) -> Result<Vec<String>> {
        let mut cmd = Command::new(&self.command);
        cmd.arg(self.method.subcommand())
            .arg(format!("--length={}", sentence_count))
            .arg(format!("--language={}", self.language))
            .arg(format!("--file={}", input.display()))
            .arg("--format=plaintext");

        debug!("Executing command: {:?}", cmd);

        let output = cmd
            .output()
            .await
            .map_err(|e| Error::Provider(format!("failed to run {}: {}", self.command, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Provider(format!(
                "summarizer exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let sentences = stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Ok(sentences)
    }

    fn method(&self) -> SummaryMethod {
        self.method
    }
}

/// Write the fixed-format summary report: a rule, a title naming the
/// requested sentence count, the numbered sentences each followed by a
/// blank line, and an attribution footer naming the method.
pub fn write_report<W: Write>(
    out: &mut W,
    sentences: &[String],
    sentence_count: usize,
    method: SummaryMethod,
) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "{}", rule)?;
    writeln!(out, "SUMMARY - {} Key Sentences (Extractive)", sentence_count)?;
    writeln!(out, "{}", rule)?;
    writeln!(out)?;

    for (index, sentence) in sentences.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, sentence)?;
        writeln!(out)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(
        out,
        "Generated using {} - Extractive Summarization",
        method.as_str().to_uppercase()
    )?;
    writeln!(out, "All sentences are directly from the original transcript")?;
    writeln!(out, "{}", rule)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_report(sentences: &[String], count: usize, method: SummaryMethod) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, sentences, count, method).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_method_parse_or_default() {
        assert_eq!(SummaryMethod::parse_or_default("lexrank"), SummaryMethod::LexRank);
        assert_eq!(SummaryMethod::parse_or_default("lsa"), SummaryMethod::Lsa);
        assert_eq!(SummaryMethod::parse_or_default("luhn"), SummaryMethod::Luhn);
        // Unknown selectors, including wrong case, fall back to LexRank.
        assert_eq!(SummaryMethod::parse_or_default("textrank"), SummaryMethod::LexRank);
        assert_eq!(SummaryMethod::parse_or_default("LSA"), SummaryMethod::LexRank);
        assert_eq!(SummaryMethod::parse_or_default(""), SummaryMethod::LexRank);
    }

    #[test]
    fn test_method_subcommand() {
        assert_eq!(SummaryMethod::LexRank.subcommand(), "lex-rank");
        assert_eq!(SummaryMethod::Lsa.subcommand(), "lsa");
        assert_eq!(SummaryMethod::Luhn.subcommand(), "luhn");
    }

    #[test]
    fn test_report_layout() {
        let sentences: Vec<String> = (1..=5).map(|i| format!("Sentence number {}.", i)).collect();
        let report = render_report(&sentences, 5, SummaryMethod::LexRank);
        let rule = "=".repeat(80);

        assert!(report.starts_with(&format!("{}\nSUMMARY - 5 Key Sentences (Extractive)\n{}\n\n", rule, rule)));

        for i in 1..=5 {
            assert!(
                report.contains(&format!("{}. Sentence number {}.\n\n", i, i)),
                "entry {} missing or not followed by a blank line",
                i
            );
        }
        assert!(!report.contains("6. "));

        assert!(report.contains("Generated using LEXRANK - Extractive Summarization\n"));
        assert!(report.contains("All sentences are directly from the original transcript\n"));
        assert!(report.ends_with(&format!("{}\n", rule)));
    }

    #[test]
    fn test_report_title_uses_requested_count() {
        // The provider may return fewer sentences than requested; the title
        // still names the requested count.
        let sentences = vec!["Only one.".to_string()];
        let report = render_report(&sentences, 30, SummaryMethod::Luhn);

        assert!(report.contains("SUMMARY - 30 Key Sentences (Extractive)"));
        assert!(report.contains("1. Only one.\n\n"));
        assert!(report.contains("Generated using LUHN - Extractive Summarization"));
    }

    #[test]
    fn test_report_with_no_sentences() {
        let report = render_report(&[], 10, SummaryMethod::Lsa);
        assert!(report.contains("SUMMARY - 10 Key Sentences (Extractive)"));
        assert!(!report.contains("1. "));
        assert!(report.contains("Generated using LSA - Extractive Summarization"));
    }
}
