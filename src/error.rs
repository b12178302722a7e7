use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while building the game index
pub enum IndexError {
    #[error("Games directory not found at {}", .0.display())]
    /// The games root does not exist. This is the only condition that stops a run.
    MissingRootDirectory(PathBuf),

    #[error("Could not read config.json for {folder}: {reason}")]
    /// A game's `config.json` exists but could not be read or parsed
    UnreadableConfig { folder: String, reason: String },

    #[error("Ignoring \"{key}\" in config.json for {folder}: {reason}")]
    /// A recognised key in `config.json` holds a value that is not a string
    InvalidConfigKey {
        folder: String,
        key: String,
        reason: String,
    },

    #[error("Could not inspect game directory {folder}: {source}")]
    /// Any other filesystem failure scoped to a single game directory
    Inspect {
        folder: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read an entry of the games directory: {0}")]
    /// A single entry of the games root listing could not be read
    ListEntry(#[source] std::io::Error),

    #[error(transparent)]
    /// Forwards the errors from `std::io::Error`
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// Forwards the errors from `serde_json::Error`
    Serialize(#[from] serde_json::Error),
}

/// A type alias for `Result<T, IndexError>`
pub type IndexResult<T> = std::result::Result<T, IndexError>;
