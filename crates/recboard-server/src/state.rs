use std::sync::Arc;

use recboard_storage::error::StorageError;
use recboard_storage::memory::MemoryStore;
use recboard_storage::repository::RecommendationRepository;
use recboard_storage::sheets::SheetsStore;
use recboard_storage::store::TabularStore;

use crate::config::{BoardConfig, StoreConfig};

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub repo: RecommendationRepository,
    pub config: Arc<BoardConfig>,
}

impl AppState {
    pub fn new(repo: RecommendationRepository, config: BoardConfig) -> Self {
        Self {
            repo,
            config: Arc::new(config),
        }
    }

    /// Wire the configured store backend behind a repository.
    pub fn from_config(config: BoardConfig) -> Result<Self, StorageError> {
        let store = build_store(&config.store)?;
        Ok(Self::new(RecommendationRepository::new(store), config))
    }
}

pub fn build_store(config: &StoreConfig) -> Result<Arc<dyn TabularStore>, StorageError> {
    match config {
        StoreConfig::Memory => {
            tracing::info!("using in-memory store with seed data");
            Ok(Arc::new(MemoryStore::seeded()))
        }
        StoreConfig::Sheets {
            spreadsheet_id,
            credentials,
            timeout,
        } => {
            tracing::info!(spreadsheet_id = %spreadsheet_id, "using Google Sheets store");
            let store = SheetsStore::new(spreadsheet_id.clone(), credentials.clone(), *timeout)?;
            Ok(Arc::new(store))
        }
    }
}
