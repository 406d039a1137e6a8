use super::entities::{vote, Vote};
use crate::domain::{Choice, Tally};
use sea_orm::sea_query::Expr;
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr, PaginatorTrait, SqlErr};

/// What happened to an insert attempt that reached the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// The UNIQUE constraint on `session_id` rejected the row.
    Duplicate,
}

#[derive(Clone)]
pub struct VoteRepository {
    db: DatabaseConnection,
}

impl VoteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Single-statement insert. Duplicates are detected by the storage
    /// constraint, never by a prior lookup.
    pub async fn insert(&self, session_id: &str, choice: Choice) -> Result<InsertOutcome, DbErr> {
        let active = vote::ActiveModel {
            session_id: Set(session_id.to_string()),
            choice: Set(choice.as_str().to_string()),
            ..Default::default()
        };

        match Vote::insert(active).exec(&self.db).await {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Ok(InsertOutcome::Duplicate),
                _ => Err(err),
            },
        }
    }

    pub async fn exists(&self, session_id: &str) -> Result<bool, DbErr> {
        let count = Vote::find()
            .filter(vote::Column::SessionId.eq(session_id))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    pub async fn tally(&self) -> Result<Tally, DbErr> {
        let rows: Vec<(String, i64)> = Vote::find()
            .select_only()
            .column(vote::Column::Choice)
            .column_as(Expr::col(vote::Column::Id).count(), "count")
            .group_by(vote::Column::Choice)
            .into_tuple()
            .all(&self.db)
            .await?;

        let counts = rows.into_iter().filter_map(|(choice, count)| {
            let choice = choice.parse::<Choice>().ok()?;
            Some((choice, u64::try_from(count).unwrap_or(0)))
        });
        Ok(Tally::from_counts(counts))
    }
}
