//! Profile Analyzer Tests
//!
//! Validation, batching and report contents.

use crate::config::AnalyzerConfig;
use crate::error::AppError;
use crate::models::ProfileText;
use crate::vibe::ProfileAnalyzer;

#[test]
fn test_report_contains_trace() {
    let analyzer = ProfileAnalyzer::default();
    let report = analyzer
        .analyze(&ProfileText::new("Startup founder who loves dogs and hiking"))
        .expect("analysis should succeed");

    assert_eq!(report.trace.matched_triggers, vec!["startup", "dog"]);
    assert_eq!(report.trace.token_count, 7);
    assert!(!report.trace.used_fallback);
    assert_eq!(report.result.vibe, "Driven & Caring");
}

#[test]
fn test_limit_counts_characters_not_bytes() {
    let analyzer = ProfileAnalyzer::new(AnalyzerConfig {
        max_input_chars: 5,
        ..Default::default()
    });

    // 5 characters, 10 bytes
    assert!(analyzer.analyze_text("ééééé").is_ok());
    assert!(analyzer.analyze_text("éééééé").is_err());
}

#[test]
fn test_batch_isolates_failures() {
    let analyzer = ProfileAnalyzer::new(AnalyzerConfig {
        max_input_chars: 20,
        ..Default::default()
    });

    let texts = vec![
        "travel".to_string(),
        "a very long bio that exceeds the limit".to_string(),
        "".to_string(),
    ];
    let results = analyzer.analyze_batch(&texts);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().result.vibe, "Energetic");
    assert!(matches!(results[1], Err(AppError::Validation(_))));
    assert_eq!(results[2].as_ref().unwrap().result.vibe, "Mysterious");
}

#[test]
fn test_report_serializes() {
    let report = ProfileAnalyzer::default().analyze_text("code and coffee").unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["result"]["vibe"], "Intellectual");
    assert_eq!(json["result"]["tags"][0], "Tech-Savvy");
    assert_eq!(json["trace"]["match_count"], 1);
    assert!(json["timestamp"].is_string());

    let line = report.summary_line();
    assert!(line.contains("Vibe: Intellectual"));
    assert!(line.contains("Matches: 1"));
}

#[test]
fn test_analyzer_is_shareable_across_threads() {
    let analyzer = std::sync::Arc::new(ProfileAnalyzer::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let analyzer = analyzer.clone();
            std::thread::spawn(move || analyzer.analyze_text("family career").unwrap().result)
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}
