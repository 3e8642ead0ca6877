//! Error types for toggle-engine

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("block not found: {name}")]
    BlockNotFound { name: String },

    #[error("Invalid block marker pattern `{pattern}`: {message}")]
    InvalidMarker { pattern: String, message: String },

    #[error("Unknown marker profile: {name}")]
    UnknownProfile { name: String },
}

impl Error {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::BlockNotFound { name: name.into() }
    }
}
