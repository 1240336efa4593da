use healthaccess_core::models::answer::OptionValue;
use healthaccess_core::models::record::SavedAssessment;
use healthaccess_storage::error::StorageError;
use healthaccess_storage::results::ResultsLog;

fn record(questionnaire_id: &str, minute: u32) -> SavedAssessment {
    let completed_at: jiff::Timestamp = format!("2026-01-15T10:{minute:02}:00Z").parse().unwrap();
    SavedAssessment::new(
        questionnaire_id,
        "Test Assessment",
        vec![OptionValue::Int(3)],
        &serde_json::json!({ "kind": "risk_score", "score": minute }),
        completed_at,
    )
    .unwrap()
}

#[tokio::test]
async fn missing_log_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let log = ResultsLog::open(dir.path());

    assert!(log.load().await.unwrap().is_empty());
    assert!(log.latest_for("general-health").await.unwrap().is_none());
    assert!(!log.clear().await.unwrap());
}

#[tokio::test]
async fn append_persists_records_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let log = ResultsLog::open(dir.path());

    log.append(record("general-health", 1)).await.unwrap();
    log.append(record("diabetes-risk", 2)).await.unwrap();

    let reopened = ResultsLog::open(dir.path());
    let records = reopened.load().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].questionnaire_id, "general-health");
    assert_eq!(records[1].questionnaire_id, "diabetes-risk");

    let listed = reopened.list().await.unwrap();
    assert_eq!(listed[0].questionnaire_id, "diabetes-risk");
}

#[tokio::test]
async fn log_keeps_only_the_ten_most_recent() {
    let dir = tempfile::tempdir().unwrap();
    let log = ResultsLog::open(dir.path());
    assert_eq!(log.max_entries(), 10);

    let mut dropped = 0;
    for minute in 0..12 {
        dropped += log.append(record("heart-health", minute)).await.unwrap();
    }
    assert_eq!(dropped, 2);

    let records = log.load().await.unwrap();
    assert_eq!(records.len(), 10);
    assert_eq!(records.first().unwrap().result["score"], 2);
    assert_eq!(records.last().unwrap().result["score"], 11);
}

#[tokio::test]
async fn cap_uses_completion_time_not_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let log = ResultsLog::open(dir.path()).with_max_entries(2);

    log.append(record("general-health", 30)).await.unwrap();
    log.append(record("general-health", 10)).await.unwrap();
    log.append(record("general-health", 20)).await.unwrap();

    let scores: Vec<i64> = log
        .list()
        .await
        .unwrap()
        .iter()
        .map(|r| r.result["score"].as_i64().unwrap())
        .collect();
    assert_eq!(scores, vec![30, 20]);
}

#[tokio::test]
async fn prune_applies_a_lowered_cap() {
    let dir = tempfile::tempdir().unwrap();
    let log = ResultsLog::open(dir.path());
    for minute in 0..5 {
        log.append(record("diabetes-risk", minute)).await.unwrap();
    }

    let smaller = ResultsLog::open(dir.path()).with_max_entries(3);
    assert_eq!(smaller.prune().await.unwrap(), 2);
    assert_eq!(smaller.prune().await.unwrap(), 0);
    assert_eq!(smaller.load().await.unwrap().len(), 3);
}

#[tokio::test]
async fn get_by_id_and_latest_for() {
    let dir = tempfile::tempdir().unwrap();
    let log = ResultsLog::open(dir.path());

    let early = record("diabetes-risk", 5);
    let early_id = early.id;
    log.append(early).await.unwrap();
    log.append(record("heart-health", 6)).await.unwrap();
    log.append(record("diabetes-risk", 7)).await.unwrap();

    assert_eq!(log.get(early_id).await.unwrap().result["score"], 5);
    assert!(matches!(
        log.get(42).await,
        Err(StorageError::RecordNotFound { id: 42 })
    ));

    let latest = log.latest_for("diabetes-risk").await.unwrap().unwrap();
    assert_eq!(latest.result["score"], 7);
}

#[tokio::test]
async fn clear_removes_the_log() {
    let dir = tempfile::tempdir().unwrap();
    let log = ResultsLog::open(dir.path());
    log.append(record("general-health", 1)).await.unwrap();
    assert!(log.path().exists());

    assert!(log.clear().await.unwrap());
    assert!(!log.path().exists());
    assert!(log.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn export_writes_a_newest_first_backup() {
    let dir = tempfile::tempdir().unwrap();
    let log = ResultsLog::open(dir.path().join("data"));
    log.append(record("general-health", 1)).await.unwrap();
    log.append(record("heart-health", 2)).await.unwrap();

    let dest = dir.path().join("backups").join("export.json");
    assert_eq!(log.export(&dest).await.unwrap(), 2);

    let body = std::fs::read_to_string(&dest).unwrap();
    let exported: Vec<SavedAssessment> = serde_json::from_str(&body).unwrap();
    assert_eq!(exported[0].questionnaire_id, "heart-health");
    assert_eq!(exported[1].questionnaire_id, "general-health");
}

#[tokio::test]
async fn corrupt_log_is_a_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let log = ResultsLog::open(dir.path());
    std::fs::write(log.path(), b"not json").unwrap();

    assert!(matches!(
        log.load().await,
        Err(StorageError::Serialization(_))
    ));
}
