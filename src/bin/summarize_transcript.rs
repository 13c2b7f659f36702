use anyhow::Result;
use clap::{Arg, Command};
use std::path::PathBuf;
use tracing::{error, info};

use lecture_scribe::{export_summary, Config, SummaryMethod, SumySummarizer};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("summarize_transcript=info,lecture_scribe=info,warn")
        .init();

    let matches = Command::new("summarize-transcript")
        .version("0.1.0")
        .about("Extract the key sentences of a transcript into a summary report")
        .arg(
            Arg::new("input")
                .value_name("INPUT_FILE")
                .help("Transcript text file to summarize")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .value_name("OUTPUT_FILE")
                .help("Path for the summary report")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("sentences")
                .value_name("SENTENCE_COUNT")
                .help("Number of sentences to extract")
                .index(3),
        )
        .arg(
            Arg::new("method")
                .value_name("METHOD")
                .help("Ranking method: lexrank, lsa, or luhn (unknown values use lexrank)")
                .index(4),
        )
        .get_matches();

    // Load configuration
    let config = Config::load();

    let input_path = PathBuf::from(matches.get_one::<String>("input").unwrap());
    let output_path = PathBuf::from(matches.get_one::<String>("output").unwrap());
    let sentence_count: usize = match matches.get_one::<String>("sentences") {
        Some(raw) => raw.parse()?,
        None => config.summary.sentence_count,
    };
    let method = match matches.get_one::<String>("method") {
        Some(raw) => SummaryMethod::parse_or_default(raw),
        None => config.summary.method,
    };

    info!("📝 Transcript Summarizer");

    let summarizer = SumySummarizer::new(&config.summary, method);

    match export_summary(&summarizer, &input_path, &output_path, sentence_count).await {
        Ok(outcome) => {
            info!("✅ Summary complete! {} sentences extracted", outcome.sentences.len());
            print_preview(&outcome.sentences);
            Ok(())
        }
        Err(e) => {
            error!("❌ Summarization failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print the first three selected sentences between rule lines.
fn print_preview(sentences: &[String]) {
    let rule = "-".repeat(60);
    info!("Preview (first 3 sentences):");
    info!("{}", rule);
    for (index, sentence) in sentences.iter().take(3).enumerate() {
        info!("{}. {}", index + 1, sentence);
    }
    info!("{}", rule);
}
