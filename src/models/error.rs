use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeaderboardError {
    #[error("Cannot place an empty group of entries")]
    EmptyGroup,

    #[error("Cannot place an empty group of entries for date {0}")]
    EmptyDateGroup(String),

    #[error("Invalid time {time} for {username} on {date}")]
    InvalidTime { username: String, date: String, time: f64 },

    #[error("Invalid date key: {0}")]
    InvalidDate(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LeaderboardError>;
