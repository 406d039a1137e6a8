#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("JSON body required")]
    MalformedRequest,

    #[error("choice must be \"yes\" or \"no\"")]
    InvalidChoice,

    #[error("session_id is required")]
    MissingSessionId,

    #[error("you have already voted")]
    AlreadyVoted,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message safe to hand back to a client. Storage and internal failures
    /// never leak driver text.
    pub fn user_message(&self) -> String {
        match self {
            Self::Database(_) | Self::Internal(_) => "internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(feature = "server")]
mod server_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        already_voted: Option<bool>,
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = match &self {
                AppError::MalformedRequest
                | AppError::InvalidChoice
                | AppError::MissingSessionId => StatusCode::BAD_REQUEST,
                AppError::AlreadyVoted => StatusCode::CONFLICT,
                AppError::Database(msg) | AppError::Internal(msg) => {
                    tracing::error!("{}: {}", StatusCode::INTERNAL_SERVER_ERROR, msg);
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            let body = ErrorResponse {
                error: self.user_message(),
                already_voted: matches!(self, AppError::AlreadyVoted).then_some(true),
            };
            (status, Json(body)).into_response()
        }
    }

}
