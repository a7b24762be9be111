use kids_core::model::{AppState, GameKind, STORAGE_KEY};
use kids_core::time::fixed_now;
use storage::repository::{DocumentRecord, DocumentRepository, Storage};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_roundtrip_persists_document() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_documents?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert!(repo.get_document(STORAGE_KEY).await.unwrap().is_none());

    let mut state = AppState::default();
    state.record_correct(GameKind::Counting);
    let record = DocumentRecord::new(STORAGE_KEY, state.to_json().unwrap(), fixed_now());
    repo.put_document(&record).await.expect("put");

    let fetched = repo
        .get_document(STORAGE_KEY)
        .await
        .expect("get")
        .expect("present");
    assert_eq!(fetched, record);
    assert_eq!(AppState::from_json(&fetched.body).unwrap(), state);
}

#[tokio::test]
async fn sqlite_upsert_overwrites_and_migrate_is_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_upsert?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");
    repo.migrate().await.expect("second migrate");

    let first = DocumentRecord::new("k", "{}", fixed_now());
    let second = DocumentRecord::new(
        "k",
        r#"{"voiceOn":false}"#,
        fixed_now() + chrono::Duration::minutes(1),
    );
    repo.put_document(&first).await.unwrap();
    repo.put_document(&second).await.unwrap();

    let fetched = repo.get_document("k").await.unwrap().unwrap();
    assert_eq!(fetched, second);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents")
        .fetch_one(repo.pool())
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn sqlite_file_survives_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("progress.sqlite3");
    let url = format!("sqlite://{}?mode=rwc", path.display());

    {
        let storage = Storage::sqlite(&url).await.expect("open");
        storage
            .documents
            .put_document(&DocumentRecord::new(STORAGE_KEY, r#"{"voiceOn":false}"#, fixed_now()))
            .await
            .expect("put");
    }

    let reopened = Storage::sqlite(&url).await.expect("reopen");
    let fetched = reopened
        .documents
        .get_document(STORAGE_KEY)
        .await
        .expect("get")
        .expect("present");
    assert!(!AppState::from_json(&fetched.body).unwrap().voice_on);
}
