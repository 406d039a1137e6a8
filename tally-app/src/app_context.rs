use crate::application::VoteLedger;
use crate::infrastructure::db::{self, VoteRepository};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tally_errors::AppError;

#[derive(Clone)]
pub struct AppContext {
    pub ledger: Arc<VoteLedger>,
}

impl AppContext {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            ledger: Arc::new(VoteLedger::new(VoteRepository::new(db))),
        }
    }

    /// Opens the pool and brings the schema up to date.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let db = db::create_connection(database_url, max_connections)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to connect to database: {}", e)))?;
        db::run_migrations(&db)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to run migrations: {}", e)))?;
        tracing::info!("Database ready");
        Ok(Self::new(db))
    }
}
