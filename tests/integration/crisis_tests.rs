//! Standalone crisis classifier tests
//!
//! Verifies the chat-facing crisis entry point and its consistency with the
//! full moderation pipeline.

use crate::common::default_orchestrator;
use modguard::{CrisisClassifier, ModerationDecision, Severity};

#[tokio::test]
async fn test_classifier_tiers() {
    let orchestrator = default_orchestrator();

    assert_eq!(
        orchestrator.classify_crisis("I want to end my life"),
        Severity::High
    );
    assert_eq!(
        orchestrator.classify_crisis("everything feels worthless"),
        Severity::Medium
    );
    assert_eq!(
        orchestrator.classify_crisis("I'm so tired of everything"),
        Severity::Low
    );
    assert_eq!(
        orchestrator.classify_crisis("the bus was late again"),
        Severity::None
    );
}

#[tokio::test]
async fn test_intensifier_bumps_one_tier_and_caps() {
    let orchestrator = default_orchestrator();

    assert_eq!(
        orchestrator.classify_crisis("I'm so tired of everything, goodbye"),
        Severity::Medium
    );
    assert_eq!(
        orchestrator.classify_crisis("I have a plan to end my life"),
        Severity::High
    );
}

#[tokio::test]
async fn test_assessment_exposes_matched_phrases() {
    let orchestrator = default_orchestrator();

    let assessment = orchestrator.assess_crisis("I feel hopeless and worthless");
    assert!(assessment.is_crisis());
    assert_eq!(assessment.severity, Severity::Medium);
    assert!(
        assessment
            .matched_phrases
            .contains(&"hopeless".to_string())
    );
    assert!(
        assessment
            .matched_phrases
            .contains(&"worthless".to_string())
    );
}

#[tokio::test]
async fn test_classifier_agrees_with_pipeline_severity() {
    // The standalone classifier and the crisis detector share one lexicon;
    // for any input they must report the same severity.
    let orchestrator = default_orchestrator();

    let inputs = [
        "I want to kill myself tonight",
        "I feel hopeless",
        "I want to disappear",
        "Have a nice day!",
    ];
    for input in inputs {
        let standalone = orchestrator.classify_crisis(input);
        let pipeline = orchestrator.moderate(input, "user-1").await.unwrap();
        assert_eq!(
            standalone, pipeline.severity,
            "classifier and pipeline disagree on {:?}",
            input
        );
        if standalone != Severity::None {
            assert_eq!(pipeline.decision, ModerationDecision::Blocked);
        }
    }
}

#[test]
fn test_supportive_templates_by_severity() {
    assert!(CrisisClassifier::supportive_response(Severity::None).is_none());
    let low = CrisisClassifier::supportive_response(Severity::Low).unwrap();
    let medium = CrisisClassifier::supportive_response(Severity::Medium).unwrap();
    let high = CrisisClassifier::supportive_response(Severity::High).unwrap();

    assert_ne!(low, medium);
    assert_ne!(medium, high);
    assert!(high.contains("988"));
}
