use crate::domain::{Choice, Tally};
use crate::infrastructure::db::{InsertOutcome, VoteRepository};
use tally_errors::AppError;

/// Records one vote per session identifier and reports tallies.
pub struct VoteLedger {
    votes: VoteRepository,
}

impl VoteLedger {
    pub fn new(votes: VoteRepository) -> Self {
        Self { votes }
    }

    /// Validates, then attempts one insert. Returns the normalized choice
    /// that was recorded.
    pub async fn submit_vote(&self, choice: &str, session_id: &str) -> Result<Choice, AppError> {
        let choice: Choice = choice.parse()?;
        let session_id = session_id.trim();
        if session_id.is_empty() {
            return Err(AppError::MissingSessionId);
        }

        match self.votes.insert(session_id, choice).await {
            Ok(InsertOutcome::Inserted) => {
                tracing::info!(%choice, "Vote recorded");
                Ok(choice)
            }
            Ok(InsertOutcome::Duplicate) => {
                tracing::debug!(session_id, "Duplicate vote rejected");
                Err(AppError::AlreadyVoted)
            }
            Err(e) => Err(AppError::Database(e.to_string())),
        }
    }

    pub async fn results(&self) -> Result<Tally, AppError> {
        self.votes
            .tally()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// An empty identifier has never voted; storage is not consulted.
    pub async fn has_voted(&self, session_id: &str) -> Result<bool, AppError> {
        let session_id = session_id.trim();
        if session_id.is_empty() {
            return Ok(false);
        }

        self.votes
            .exists(session_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
