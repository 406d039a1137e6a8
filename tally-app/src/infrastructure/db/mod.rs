pub mod entities;
mod vote_repository;

pub use vote_repository::{InsertOutcome, VoteRepository};

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use std::time::Duration;

pub async fn create_connection(
    database_url: &str,
    max_connections: u32,
) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url);
    // Every pooled connection to an in-memory SQLite URL opens its own
    // private database, so keep exactly one alive.
    if database_url.contains(":memory:") {
        opt.max_connections(1).min_connections(1);
    } else {
        opt.max_connections(max_connections.max(1))
            .min_connections(1)
            .idle_timeout(Duration::from_secs(600));
    }
    opt.connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    Database::connect(opt).await
}

pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    let migration = include_str!("../../../../migrations/001_votes.sql");
    let backend = db.get_database_backend();

    for statement in migration.split(';') {
        let statement = statement.trim();
        if !statement.is_empty() {
            db.execute(Statement::from_string(backend, statement.to_string()))
                .await?;
        }
    }

    tracing::debug!("Migrations applied");
    Ok(())
}

#[cfg(test)]
pub(crate) async fn memory_db() -> DatabaseConnection {
    let db = create_connection("sqlite::memory:", 1).await.unwrap();
    run_migrations(&db).await.unwrap();
    db
}
