//! Moderation pipeline tests
//!
//! Scenario and property coverage for `moderate`, `moderate_batch`, and
//! `moderate_ai_response` with the default detector set.

use crate::common::{FailingDetector, StaticDetector, default_orchestrator, orchestrator_with};
use modguard::{
    ModerationConfig, ModerationDecision, ModerationOrchestrator, ModerationReason,
    ResponseContext, Severity, SignalKind,
};
use std::sync::Arc;

#[tokio::test]
async fn test_high_tier_crisis_blocks_with_high_severity() {
    let orchestrator = default_orchestrator();

    let result = orchestrator
        .moderate("I've been thinking about suicide", "user-1")
        .await
        .unwrap();

    assert_eq!(result.decision, ModerationDecision::Blocked);
    assert_eq!(result.severity, Severity::High);
    assert!(result.reasons.contains(&ModerationReason::CrisisContent));
}

#[tokio::test]
async fn test_crisis_with_capped_intensifier() {
    // "kill myself" is already weight 3; "tonight" cannot push it further.
    let orchestrator = default_orchestrator();

    let result = orchestrator
        .moderate("I want to kill myself tonight", "user-1")
        .await
        .unwrap();

    assert_eq!(result.decision, ModerationDecision::Blocked);
    assert_eq!(result.severity, Severity::High);
    assert!(result.reasons.contains(&ModerationReason::CrisisContent));
}

#[tokio::test]
async fn test_medium_crisis_still_blocks() {
    // Any crisis match blocks, regardless of severity level.
    let orchestrator = default_orchestrator();

    let result = orchestrator
        .moderate("I feel hopeless about this test", "user-1")
        .await
        .unwrap();

    assert_eq!(result.decision, ModerationDecision::Blocked);
    assert_eq!(result.severity, Severity::Medium);
    assert!(result.reasons.contains(&ModerationReason::CrisisContent));
}

#[tokio::test]
async fn test_low_tier_phrase_bumped_exactly_one_level() {
    let orchestrator = default_orchestrator();

    let base = orchestrator
        .moderate("I want to disappear", "user-1")
        .await
        .unwrap();
    assert_eq!(base.severity, Severity::Low);

    let bumped = orchestrator
        .moderate("I want to disappear tonight", "user-1")
        .await
        .unwrap();
    assert_eq!(bumped.severity, Severity::Medium);
}

#[tokio::test]
async fn test_profanity_only_is_flagged() {
    let orchestrator = default_orchestrator();

    let result = orchestrator
        .moderate("This movie was fucking great", "user-1")
        .await
        .unwrap();

    assert_eq!(result.decision, ModerationDecision::Flagged);
    assert_eq!(
        result.reasons.iter().copied().collect::<Vec<_>>(),
        vec![ModerationReason::Profanity]
    );
    assert_eq!(result.severity, Severity::None);
}

#[tokio::test]
async fn test_clean_text_is_approved_with_empty_reasons() {
    let orchestrator = default_orchestrator();

    let result = orchestrator
        .moderate("Have a nice day!", "user-1")
        .await
        .unwrap();

    assert_eq!(result.decision, ModerationDecision::Approved);
    assert!(result.reasons.is_empty());
    assert!(!result.degraded);
    assert!((0.0..=1.0).contains(&result.confidence));
}

#[tokio::test]
async fn test_adding_crisis_phrase_never_relaxes_the_decision() {
    let orchestrator = default_orchestrator();

    let inputs = [
        "Have a nice day!",
        "This movie was fucking great",
        "you are such an idiot and a loser",
    ];
    for input in inputs {
        let before = orchestrator.moderate(input, "user-1").await.unwrap();
        let appended = format!("{} and I want to kill myself", input);
        let after = orchestrator.moderate(&appended, "user-1").await.unwrap();

        assert!(
            after.decision >= before.decision,
            "decision for {:?} moved away from blocked",
            input
        );
        assert_eq!(after.decision, ModerationDecision::Blocked);
    }
}

#[tokio::test]
async fn test_confidence_bounds_hold_across_inputs() {
    let orchestrator = default_orchestrator();

    let inputs = [
        "Have a nice day!",
        "I feel hopeless",
        "fuck this shit asshole",
        "Click here for free money https://spam.example https://more.example",
        "I want to kill myself tonight",
    ];
    for input in inputs {
        let result = orchestrator.moderate(input, "user-1").await.unwrap();
        assert!(
            (0.0..=1.0).contains(&result.confidence),
            "confidence out of range for {:?}",
            input
        );
    }
}

#[tokio::test]
async fn test_idempotent_verdicts_for_identical_input() {
    let orchestrator = default_orchestrator();

    let first = orchestrator
        .moderate("I feel hopeless tonight", "user-1")
        .await
        .unwrap();
    let second = orchestrator
        .moderate("I feel hopeless tonight", "user-1")
        .await
        .unwrap();

    assert_eq!(first.decision, second.decision);
    assert_eq!(first.reasons, second.reasons);
    assert_eq!(first.severity, second.severity);
    assert_eq!(first.confidence, second.confidence);
    assert_eq!(first.degraded, second.degraded);
    // id/timestamp/processing time are per-call and expected to differ.
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_batch_preserves_input_order() {
    let orchestrator = default_orchestrator();

    let texts = vec![
        "I want to kill myself".to_string(),
        "Have a nice day!".to_string(),
        "This movie was fucking great".to_string(),
    ];
    let results = orchestrator.moderate_batch(&texts, "user-1").await.unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].decision, ModerationDecision::Blocked);
    assert_eq!(results[1].decision, ModerationDecision::Approved);
    assert_eq!(results[2].decision, ModerationDecision::Flagged);
    for (text, result) in texts.iter().zip(&results) {
        assert_eq!(&result.content, text);
    }
}

#[tokio::test]
async fn test_batch_larger_than_concurrency_cap() {
    let mut config = ModerationConfig::default();
    config.runtime.max_concurrency = 2;
    let orchestrator = ModerationOrchestrator::new(config).unwrap();

    let texts: Vec<String> = (0..7).map(|i| format!("message number {}", i)).collect();
    let results = orchestrator.moderate_batch(&texts, "user-1").await.unwrap();

    assert_eq!(results.len(), 7);
    for (text, result) in texts.iter().zip(&results) {
        assert_eq!(&result.content, text);
        assert_eq!(result.decision, ModerationDecision::Approved);
    }
}

#[tokio::test]
async fn test_mean_confidence_with_injected_detectors() {
    let orchestrator = orchestrator_with(vec![
        Arc::new(StaticDetector::new(SignalKind::Toxicity, 0.0, 0.5)),
        Arc::new(StaticDetector::new(SignalKind::Sentiment, 0.5, 0.7)),
        Arc::new(StaticDetector::new(SignalKind::Spam, 0.0, 0.9)),
    ]);

    let result = orchestrator.moderate("anything", "user-1").await.unwrap();
    assert!((result.confidence - 0.7).abs() < 1e-9);
}

#[tokio::test]
async fn test_degraded_detector_does_not_fail_the_call() {
    let orchestrator = orchestrator_with(vec![
        Arc::new(FailingDetector::new(SignalKind::Toxicity)),
        Arc::new(StaticDetector::new(SignalKind::Sentiment, 0.5, 0.6)),
    ]);

    let result = orchestrator.moderate("hello there", "user-1").await.unwrap();
    assert!(result.degraded);
    assert_eq!(result.decision, ModerationDecision::Approved);
}

#[tokio::test]
async fn test_injected_crisis_signal_dominates() {
    let orchestrator = orchestrator_with(vec![
        Arc::new(
            StaticDetector::new(SignalKind::Crisis, 0.33, 0.9).with_severity(Severity::Low),
        ),
        Arc::new(StaticDetector::new(SignalKind::Toxicity, 0.0, 0.7)),
    ]);

    let result = orchestrator.moderate("anything", "user-1").await.unwrap();
    assert_eq!(result.decision, ModerationDecision::Blocked);
    assert_eq!(result.severity, Severity::Low);
}

#[tokio::test]
async fn test_ai_response_medical_advice_is_flagged() {
    let orchestrator = default_orchestrator();
    let context = ResponseContext::for_user("user-1");

    let result = orchestrator
        .moderate_ai_response(
            "Based on what you describe, I can diagnose you; adjust your dosage.",
            &context,
        )
        .await
        .unwrap();

    assert_eq!(result.decision, ModerationDecision::Flagged);
    assert!(result.reasons.contains(&ModerationReason::MedicalAdvice));
    assert_eq!(result.user_id, "user-1");
}

#[tokio::test]
async fn test_ai_response_advice_checks_do_not_apply_to_user_input() {
    let orchestrator = default_orchestrator();

    // The same wording as user input runs without the advice detector.
    let result = orchestrator
        .moderate("my doctor changed my dosage yesterday", "user-1")
        .await
        .unwrap();

    assert_eq!(result.decision, ModerationDecision::Approved);
    assert!(result.reasons.is_empty());
}

#[tokio::test]
async fn test_ai_response_crisis_still_dominates_advice() {
    let orchestrator = default_orchestrator();
    let context = ResponseContext::for_user("user-1");

    let result = orchestrator
        .moderate_ai_response(
            "Maybe you should leave them; no wonder you feel hopeless.",
            &context,
        )
        .await
        .unwrap();

    assert_eq!(result.decision, ModerationDecision::Blocked);
    assert!(result.reasons.contains(&ModerationReason::CrisisContent));
    assert!(
        result
            .reasons
            .contains(&ModerationReason::InappropriateAdvice)
    );
}

#[tokio::test]
async fn test_result_serializes_downstream_contract() {
    let orchestrator = default_orchestrator();

    let result = orchestrator
        .moderate("I feel hopeless", "user-7")
        .await
        .unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["user_id"], "user-7");
    assert_eq!(json["decision"], "blocked");
    assert_eq!(json["severity"], "medium");
    assert!(json["reasons"].as_array().unwrap().contains(
        &serde_json::Value::String("crisis_content".to_string())
    ));
    assert!(json["timestamp"].is_string());
    assert!(json["processing_time_ms"].is_u64());
}
