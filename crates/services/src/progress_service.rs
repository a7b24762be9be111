use std::sync::Arc;

use kids_core::model::{AppState, GameKind, GameProgress, PrepStep, STORAGE_KEY};
use storage::repository::{DocumentRecord, DocumentRepository};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::Clock;
use crate::error::ProgressServiceError;

/// Loads and saves the progress document and applies progress mutations.
///
/// Callers own the `AppState` and hand it in by reference. Every mutation is
/// flushed to storage before returning. Writes are serialized, so overlapping
/// saves land in the order they acquired the write lock.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    documents: Arc<dyn DocumentRepository>,
    write_lock: Arc<Mutex<()>>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, documents: Arc<dyn DocumentRepository>) -> Self {
        Self {
            clock,
            documents,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Load the persisted state merged over the defaults.
    ///
    /// A missing document yields the defaults. So does a document that cannot
    /// be decoded; that case is logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the backend cannot be read.
    pub async fn load(&self) -> Result<AppState, ProgressServiceError> {
        let Some(record) = self.documents.get_document(STORAGE_KEY).await? else {
            debug!("no stored progress, starting fresh");
            return Ok(AppState::default());
        };

        match AppState::from_json(&record.body) {
            Ok(state) => Ok(state),
            Err(err) => {
                warn!(error = %err, "stored progress is unreadable, using defaults");
                Ok(AppState::default())
            }
        }
    }

    /// # Errors
    ///
    /// Returns `ProgressServiceError` if encoding or persistence fails.
    pub async fn save(&self, state: &AppState) -> Result<(), ProgressServiceError> {
        let _guard = self.write_lock.lock().await;
        self.write(state).await
    }

    /// Persist whatever `latest` returns once it is this caller's turn to write.
    ///
    /// UI code mutates its state synchronously and then calls this with a
    /// reader of that state. An older snapshot can never overwrite a newer one.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` if encoding or persistence fails.
    pub async fn save_latest<F>(&self, latest: F) -> Result<AppState, ProgressServiceError>
    where
        F: FnOnce() -> AppState,
    {
        let _guard = self.write_lock.lock().await;
        let state = latest();
        self.write(&state).await?;
        Ok(state)
    }

    async fn write(&self, state: &AppState) -> Result<(), ProgressServiceError> {
        let record = DocumentRecord::new(STORAGE_KEY, state.to_json()?, self.clock.now());
        self.documents.put_document(&record).await?;
        Ok(())
    }

    /// Award a star and a completion to `game`, then persist.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` if persistence fails. The in-memory
    /// state keeps the increment either way.
    pub async fn record_correct(
        &self,
        state: &mut AppState,
        game: GameKind,
    ) -> Result<GameProgress, ProgressServiceError> {
        state.record_correct(game);
        let progress = state.progress.game(game);
        debug!(%game, stars = progress.stars, done = progress.done, "correct answer");
        self.save(state).await?;
        Ok(progress)
    }

    /// # Errors
    ///
    /// Returns `ProgressServiceError` if persistence fails.
    pub async fn reset(&self, state: &mut AppState) -> Result<(), ProgressServiceError> {
        state.reset();
        debug!("progress reset");
        self.save(state).await
    }

    /// # Errors
    ///
    /// Returns `ProgressServiceError` if persistence fails.
    pub async fn toggle_voice(&self, state: &mut AppState) -> Result<bool, ProgressServiceError> {
        let voice_on = state.toggle_voice();
        self.save(state).await?;
        Ok(voice_on)
    }

    /// Current prep step; a clamped step index is written back.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` if persistence fails.
    pub async fn open_prep(
        &self,
        state: &mut AppState,
    ) -> Result<&'static PrepStep, ProgressServiceError> {
        let step = state.prep_step();
        self.save(state).await?;
        Ok(step)
    }

    /// # Errors
    ///
    /// Returns `ProgressServiceError` if persistence fails.
    pub async fn advance_prep(
        &self,
        state: &mut AppState,
    ) -> Result<&'static PrepStep, ProgressServiceError> {
        let step = state.advance_prep();
        self.save(state).await?;
        Ok(step)
    }

    /// Award prep progress for starting the current step and return it.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` if persistence fails.
    pub async fn start_prep_step(
        &self,
        state: &mut AppState,
    ) -> Result<&'static PrepStep, ProgressServiceError> {
        let step = state.start_prep_step();
        debug!(game = %step.game, "prep step started");
        self.save(state).await?;
        Ok(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kids_core::time::{fixed_clock, fixed_now};
    use storage::repository::{InMemoryRepository, StorageError};

    fn service(repo: &InMemoryRepository) -> ProgressService {
        ProgressService::new(fixed_clock(), Arc::new(repo.clone()))
    }

    #[tokio::test]
    async fn empty_store_loads_defaults() {
        let repo = InMemoryRepository::new();
        let state = service(&repo).load().await.unwrap();
        assert_eq!(state, AppState::default());
    }

    #[tokio::test]
    async fn corrupt_document_loads_defaults() {
        let repo = InMemoryRepository::new();
        repo.put_document(&DocumentRecord::new(STORAGE_KEY, "][", fixed_now()))
            .await
            .unwrap();
        let state = service(&repo).load().await.unwrap();
        assert_eq!(state, AppState::default());
    }

    #[tokio::test]
    async fn record_correct_persists_immediately() {
        let repo = InMemoryRepository::new();
        let svc = service(&repo);
        let mut state = svc.load().await.unwrap();

        let progress = svc
            .record_correct(&mut state, GameKind::Colors)
            .await
            .unwrap();
        assert_eq!(progress, GameProgress { stars: 1, done: 1 });

        let stored = repo.get_document(STORAGE_KEY).await.unwrap().unwrap();
        assert_eq!(stored.updated_at, fixed_now());
        let reloaded = AppState::from_json(&stored.body).unwrap();
        assert_eq!(reloaded.progress.colors, GameProgress { stars: 1, done: 1 });
    }

    #[tokio::test]
    async fn reset_persists_zeroes() {
        let repo = InMemoryRepository::new();
        let svc = service(&repo);
        let mut state = AppState::default();
        svc.record_correct(&mut state, GameKind::Letters).await.unwrap();
        svc.toggle_voice(&mut state).await.unwrap();

        svc.reset(&mut state).await.unwrap();

        assert_eq!(svc.load().await.unwrap(), AppState::default());
    }

    #[tokio::test]
    async fn prep_flow_persists_step_and_stars() {
        let repo = InMemoryRepository::new();
        let svc = service(&repo);
        let mut state = AppState::default();
        state.progress.prep.step_index = 7;

        let step = svc.open_prep(&mut state).await.unwrap();
        assert_eq!(step.game, GameKind::Letters);
        assert_eq!(svc.load().await.unwrap().progress.prep.step_index, 2);

        let next = svc.advance_prep(&mut state).await.unwrap();
        assert_eq!(next.game, GameKind::Colors);

        let started = svc.start_prep_step(&mut state).await.unwrap();
        assert_eq!(started.game, GameKind::Colors);
        let stored = svc.load().await.unwrap();
        assert_eq!(stored.progress.prep.tally, GameProgress { stars: 1, done: 1 });
        assert_eq!(stored.progress.prep.step_index, 0);
    }

    /// Delays only its first write, so a later write would finish first.
    #[derive(Default)]
    struct SlowFirstWriteRepo {
        inner: InMemoryRepository,
        writes: std::sync::atomic::AtomicUsize,
    }

    #[async_trait::async_trait]
    impl DocumentRepository for SlowFirstWriteRepo {
        async fn get_document(&self, key: &str) -> Result<Option<DocumentRecord>, StorageError> {
            self.inner.get_document(key).await
        }

        async fn put_document(&self, record: &DocumentRecord) -> Result<(), StorageError> {
            let n = self
                .writes
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            if n == 0 {
                tokio::time::sleep(std::time::Duration::from_millis(30)).await;
            }
            self.inner.put_document(record).await
        }
    }

    #[tokio::test]
    async fn overlapping_saves_keep_the_newest_state() {
        let repo = Arc::new(SlowFirstWriteRepo::default());
        let svc = ProgressService::new(fixed_clock(), repo);
        let current = Arc::new(std::sync::Mutex::new(AppState::default()));

        current.lock().unwrap().record_correct(GameKind::Colors);
        let first = tokio::spawn({
            let svc = svc.clone();
            let current = Arc::clone(&current);
            async move { svc.save_latest(move || *current.lock().unwrap()).await }
        });
        // Let the first save read its state and stall inside the write.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        current.lock().unwrap().record_correct(GameKind::Colors);
        let second = {
            let current = Arc::clone(&current);
            svc.save_latest(move || *current.lock().unwrap()).await.unwrap()
        };
        let first = first.await.unwrap().unwrap();

        assert_eq!(first.progress.colors.stars, 1);
        assert_eq!(second.progress.colors.stars, 2);
        let stored = svc.load().await.unwrap();
        assert_eq!(stored.progress.colors, GameProgress { stars: 2, done: 2 });
    }

    struct FailingRepo;

    #[async_trait::async_trait]
    impl DocumentRepository for FailingRepo {
        async fn get_document(&self, _key: &str) -> Result<Option<DocumentRecord>, StorageError> {
            Err(StorageError::Connection("fail".to_string()))
        }

        async fn put_document(&self, _record: &DocumentRecord) -> Result<(), StorageError> {
            Err(StorageError::Connection("fail".to_string()))
        }
    }

    #[tokio::test]
    async fn storage_failures_surface_but_keep_memory_state() {
        let svc = ProgressService::new(fixed_clock(), Arc::new(FailingRepo));
        assert!(matches!(
            svc.load().await,
            Err(ProgressServiceError::Storage(_))
        ));

        let mut state = AppState::default();
        let err = svc.record_correct(&mut state, GameKind::Counting).await;
        assert!(err.is_err());
        assert_eq!(state.progress.counting, GameProgress { stars: 1, done: 1 });
    }
}
