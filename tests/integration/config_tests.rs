//! Configuration loading tests

use modguard::{ModerationConfig, ModerationError, ModerationOrchestrator, Severity, Validate};
use std::io::Write;

#[tokio::test]
async fn test_from_file_roundtrip() {
    let yaml = r#"
thresholds:
  toxicity_block: 0.9
  toxicity_flag: 0.4
runtime:
  detector_timeout_ms: 500
  max_concurrency: 4
"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let config = ModerationConfig::from_file(file.path()).await.unwrap();
    assert_eq!(config.thresholds.toxicity_block, 0.9);
    assert_eq!(config.thresholds.toxicity_flag, 0.4);
    assert_eq!(config.runtime.detector_timeout_ms, 500);
    assert_eq!(config.runtime.max_concurrency, 4);
    // Untouched sections keep their defaults.
    assert!(!config.lexicon.crisis_high.is_empty());
}

#[tokio::test]
async fn test_from_file_rejects_invalid_thresholds() {
    let yaml = r#"
thresholds:
  toxicity_block: 0.3
  toxicity_flag: 0.7
"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let err = ModerationConfig::from_file(file.path()).await.unwrap_err();
    assert!(matches!(err, ModerationError::Config(_)));
}

#[tokio::test]
async fn test_from_file_missing_path_errors() {
    let err = ModerationConfig::from_file("/nonexistent/modguard.yaml")
        .await
        .unwrap_err();
    assert!(matches!(err, ModerationError::Config(_)));
}

#[tokio::test]
async fn test_custom_lexicon_drives_the_pipeline() {
    let yaml = r#"
lexicon:
  crisis_high: ["rote phrase alpha"]
  crisis_medium: ["rote phrase beta"]
  crisis_low: ["rote phrase gamma"]
  intensifiers: ["omega"]
"#;
    let config: ModerationConfig = serde_yaml::from_str(yaml).unwrap();
    let orchestrator = ModerationOrchestrator::new(config).unwrap();

    assert_eq!(
        orchestrator.classify_crisis("she said rote phrase alpha twice"),
        Severity::High
    );
    assert_eq!(
        orchestrator.classify_crisis("rote phrase gamma omega"),
        Severity::Medium
    );
    // The default phrases were replaced wholesale.
    assert_eq!(
        orchestrator.classify_crisis("I feel hopeless"),
        Severity::None
    );
}

#[test]
fn test_invalid_config_rejected_by_orchestrator() {
    let mut config = ModerationConfig::default();
    config.runtime.max_concurrency = 0;
    assert!(config.validate().is_err());
    assert!(ModerationOrchestrator::new(config).is_err());
}
