// Vibe CLI Entry Point
// Reads profile text from arguments or stdin and prints its vibe.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{Read, Write};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use vibe_core::{AnalyzerConfig, AppError, ProfileAnalyzer, VibeReport};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Parser)]
#[command(name = "vibe")]
#[command(about = "Detect personality tags and vibe from profile text")]
struct Args {
    /// Text to analyze (reads stdin when omitted)
    text: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Log output format
    #[arg(long, value_enum, default_value = "pretty", env = "VIBE_LOG_FORMAT")]
    log_format: LogFormat,
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Positional words joined with spaces, or all of `stdin` when there are none
fn read_input(words: &[String], mut stdin: impl Read) -> Result<String, AppError> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let mut buf = String::new();
    stdin.read_to_string(&mut buf)?;
    Ok(buf)
}

fn write_report(out: &mut impl Write, report: &VibeReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(report)?)?,
        OutputFormat::Text => {
            writeln!(out, "vibe:       {}", report.result.vibe)?;
            writeln!(out, "tags:       {}", report.result.tags.join(", "))?;
            writeln!(out, "confidence: {:.2}", report.result.confidence)?;
            writeln!(out, "summary:    {}", report.result.summary)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    // Missing .env is fine
    let _ = dotenv::dotenv();

    let args = Args::parse();
    init_logging(args.log_format);

    let config = AnalyzerConfig::from_env().context("Invalid VIBE_* configuration")?;
    let analyzer = ProfileAnalyzer::new(config);

    let text = read_input(&args.text, std::io::stdin()).context("Failed to read profile text")?;
    let report = analyzer.analyze_text(&text)?;
    info!("{}", report.summary_line());

    write_report(&mut std::io::stdout().lock(), &report, args.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_words_are_joined() {
        let words = vec!["I".to_string(), "love".to_string(), "travel".to_string()];
        let text = read_input(&words, "ignored stdin".as_bytes()).unwrap();
        assert_eq!(text, "I love travel");
    }

    #[test]
    fn test_stdin_used_without_words() {
        let text = read_input(&[], "family and career\n".as_bytes()).unwrap();
        assert_eq!(text, "family and career\n");
    }

    #[test]
    fn test_text_output() {
        let report = ProfileAnalyzer::default().analyze_text("I love to travel").unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &report, OutputFormat::Text).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(
            printed,
            "vibe:       Energetic\n\
             tags:       Adventurous\n\
             confidence: 0.60\n\
             summary:    Speech analysis suggests a energetic personality who values Adventurous.\n"
        );
    }

    #[test]
    fn test_json_output() {
        let report = ProfileAnalyzer::default().analyze_text("gym").unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &report, OutputFormat::Json).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["result"]["vibe"], "Active");
    }
}
