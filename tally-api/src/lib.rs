pub mod config;
mod routes;

pub use config::{Config, ConfigError};
pub use routes::{router, CheckRequest, CheckResponse, VoteRequest, VoteResponse};
