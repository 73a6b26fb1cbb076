//! Integration tests for placement prep

use placement_prep::analysis::scoring::Confidence;
use placement_prep::analysis::AnalysisEngine;
use placement_prep::config::OutputFormat;
use placement_prep::input::{InputManager, JdSource};
use placement_prep::output::{export_text, save_report_to_file, suggest_filename, PrepReport, ReportGenerator};
use placement_prep::storage::{FileStore, HistoryStore, KeyValueStore};
use placement_prep::PrepError;
use std::path::{Path, PathBuf};

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_jd.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("Software Development Engineer"));
    assert!(text.contains("PostgreSQL"));
    assert!(text.contains("CI/CD"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_jd.md");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("Frontend Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_jd.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(PrepError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(PrepError::InvalidInput(_))));
}

#[tokio::test]
async fn test_analyze_file_end_to_end() {
    let mut manager = InputManager::new();
    let source = JdSource::File(PathBuf::from("tests/fixtures/sample_jd.txt"));
    let jd_text = manager.load(&source).await.unwrap();

    let entry = AnalysisEngine::new().analyze("Acme Payments", "Backend Engineer", &jd_text);
    let flat = entry.flat_skills();

    for skill in ["DSA", "Java", "REST", "SQL", "PostgreSQL", "Docker", "CI/CD", "Git"] {
        assert!(flat.iter().any(|s| s == skill), "missing {}", skill);
    }
    assert_eq!(entry.base_score, 85);
    assert_eq!(entry.final_score, entry.base_score);
    assert_eq!(entry.round_mapping.len(), 3);
    assert!(entry.round_mapping[1].description.contains("Backend logic"));
    assert!(entry.questions.len() >= 6 && entry.questions.len() <= 10);
}

#[tokio::test]
async fn test_history_in_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let engine = AnalysisEngine::new();

    let first = engine.analyze("Google", "SDE", "DSA and System Design");
    let mut second = engine.analyze("Acme", "Frontend Engineer", "React, JavaScript and CSS");
    {
        let mut history = HistoryStore::new(FileStore::new(dir.path()));
        history.save(&first).unwrap();
        history.save(&second).unwrap();
    }

    // A fresh store over the same directory sees the persisted history.
    let mut history = HistoryStore::new(FileStore::new(dir.path()));
    let listed = history.list().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);

    second.toggle_skill("React");
    assert!(history.update(&second).unwrap());

    let stored = history.get(&second.id).unwrap().unwrap();
    assert_eq!(stored.confidence_of("React"), Confidence::Know);
    assert_eq!(stored.final_score, stored.base_score + 2);
    assert_eq!(history.latest().unwrap().unwrap().id, second.id);
}

#[test]
fn test_corrupt_history_file_is_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    store
        .set("placement_prep_analysis_history", r#"[{"id": 1}, {"id": "x", "finalScore": "high"}]"#)
        .unwrap();

    let history = HistoryStore::new(store);
    assert!(history.list().unwrap().is_empty());
    assert!(history.latest().unwrap().is_none());
}

#[test]
fn test_export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let entry = AnalysisEngine::new().analyze("", "", "Kafka and Redis");
    let report = PrepReport::from_entry(&entry);

    let generator = ReportGenerator::with_options(false, false, true, true, true);
    let content = generator.generate_report(&report, &OutputFormat::Text).unwrap();
    assert_eq!(content, export_text(&report));

    let target = dir.path().join(suggest_filename(&OutputFormat::Text, &entry.company));
    save_report_to_file(&content, &target).unwrap();

    assert!(target.ends_with("Analysis_Job.txt"));
    let saved = std::fs::read_to_string(&target).unwrap();
    assert!(saved.contains("SKILLS:\n- Redis (practice)\n- Kafka (practice)"));
}

#[test]
fn test_non_utf8_history_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    std::fs::write(store.path_for("placement_prep_analysis_history"), [0xff, 0xfe, b'[', b']']).unwrap();

    let mut history = HistoryStore::new(store);
    assert!(history.list().unwrap().is_empty());

    let entry = AnalysisEngine::new().analyze("Acme", "Dev", "Kafka");
    history.save(&entry).unwrap();
    assert_eq!(history.latest().unwrap().unwrap().id, entry.id);
}

#[tokio::test]
async fn test_cache_can_be_disabled() {
    let mut manager = InputManager::new().with_cache(false);
    let path = Path::new("tests/fixtures/sample_jd.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Tailwind"));
    assert_eq!(manager.cache_size(), 0);
}
