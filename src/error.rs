//! Centralized error types for the maze engine.
//!
//! Nothing in the engine core is fatal: most of these are logged and the
//! frame carries on. They exist so the places that *can* fail (layout
//! parsing, drawing, asset loading) report something typed.

/// Main error type for the engine.
///
/// This is the primary error type used in public APIs and at the
/// application edge.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Entity error: {0}")]
    Entity(#[from] EntityError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("SDL error: {0}")]
    Sdl(String),
}

/// Why a sprite sheet image could not be loaded.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to decode image '{path}': {reason}")]
    Decode { path: String, reason: String },
}

/// Errors related to sprite sheets, animations and drawing.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TextureError {
    #[error("Rendering failed: {0}")]
    RenderFailed(String),

    #[error("Invalid frame duration: {0}")]
    InvalidFrameDuration(f32),

    #[error("Animation has no frames")]
    EmptyAnimation,
}

/// Errors raised while building a maze layout.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MapError {
    #[error("Invalid tile code '{token}' at row {row}, column {col}")]
    InvalidCode { token: String, row: usize, col: usize },

    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("Maze layout is empty")]
    Empty,
}

/// Errors related to world entities.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum EntityError {
    #[error("No object registered under key '{0}'")]
    NotFound(String),
}

/// Errors raised while reading command-line settings.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Invalid value '{value}' for {flag}")]
    InvalidValue { flag: String, value: String },
}

/// Result type for engine operations.
pub type GameResult<T> = Result<T, GameError>;
