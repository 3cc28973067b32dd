use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_result() -> AssessmentResult {
    AssessmentResult {
        label: "High".to_owned(),
        score: 9.0,
        keywords: vec!["overwhelmed".to_owned(), "panic".to_owned()],
    }
}

fn make_entry() -> HistoryEntry {
    HistoryEntry {
        text: "hard to sleep lately".to_owned(),
        label: "Low".to_owned(),
        score: 2.0,
        keywords: vec!["sleep".to_owned()],
    }
}

// =============================================================
// AssessmentRequest serde
// =============================================================

#[test]
fn request_serializes_text_field() {
    let req = AssessmentRequest { text: "feeling anxious".to_owned() };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({ "text": "feeling anxious" }));
}

#[test]
fn request_allows_empty_text() {
    let req = AssessmentRequest { text: String::new() };
    let json = serde_json::to_string(&req).unwrap();
    assert_eq!(json, r#"{"text":""}"#);
}

// =============================================================
// AssessmentResult serde
// =============================================================

#[test]
fn result_round_trip() {
    let result = make_result();
    let json = serde_json::to_string(&result).unwrap();
    let back: AssessmentResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, back);
}

#[test]
fn result_deserializes_from_service_reply() {
    let json = r#"{
        "label": "High",
        "score": 9,
        "keywords": ["overwhelmed", "panic", "depressed"]
    }"#;
    let result: AssessmentResult = serde_json::from_str(json).unwrap();
    assert_eq!(result.label, "High");
    assert!((result.score - 9.0).abs() < f64::EPSILON);
    assert_eq!(result.keywords.len(), 3);
}

#[test]
fn result_defaults_keywords_when_missing() {
    let json = r#"{ "label": "Minimal", "score": 0 }"#;
    let result: AssessmentResult = serde_json::from_str(json).unwrap();
    assert!(result.keywords.is_empty());
}

#[test]
fn result_requires_label_and_score() {
    assert!(serde_json::from_str::<AssessmentResult>(r#"{ "score": 1 }"#).is_err());
    assert!(serde_json::from_str::<AssessmentResult>(r#"{ "label": "Low" }"#).is_err());
}

// =============================================================
// HistoryEntry serde
// =============================================================

#[test]
fn entry_round_trip() {
    let entry = make_entry();
    let json = serde_json::to_string(&entry).unwrap();
    let back: HistoryEntry = serde_json::from_str(&json).unwrap();
    assert_eq!(entry, back);
}

#[test]
fn history_deserializes_as_ordered_array() {
    let json = r#"[
        { "text": "newest", "label": "High", "score": 8, "keywords": ["panic"] },
        { "text": "older", "label": "Minimal", "score": 0, "keywords": [] }
    ]"#;
    let entries: Vec<HistoryEntry> = serde_json::from_str(json).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].text, "newest");
    assert_eq!(entries[1].label, "Minimal");
}

#[test]
fn history_entry_defaults_keywords_when_missing() {
    let json = r#"{ "text": "calm day", "label": "Minimal", "score": 0 }"#;
    let entry: HistoryEntry = serde_json::from_str(json).unwrap();
    assert!(entry.keywords.is_empty());
}

#[test]
fn empty_history_is_valid() {
    let entries: Vec<HistoryEntry> = serde_json::from_str("[]").unwrap();
    assert!(entries.is_empty());
}
