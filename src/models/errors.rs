use thiserror::Error;

/// Game-specific error types
#[derive(Debug, Error)]
pub enum GameError {
    /// No session is registered under this id
    #[error("session not found: {0}")]
    SessionNotFound(String),

    /// More islands were requested than free cells remain
    #[error("cannot place {requested} islands, only {available} free cells")]
    IslandCapacity { requested: usize, available: usize },

    /// An ocean entity was found outside the grid during its tick
    #[error("{entity} is outside the grid at ({x}, {y})")]
    EntityOutOfBounds { entity: String, x: i32, y: i32 },

    /// Invalid input provided by the player
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;
