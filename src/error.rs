//! Error types for the ring_light library
//!
//! The color and guide geometry functions are total and never fail. Errors
//! only come out of the studio layer: storage, share links and preset import.

use thiserror::Error;

/// Result type alias for ring_light operations
pub type Result<T> = std::result::Result<T, LightError>;

/// Error types for studio state, persistence and sharing
#[derive(Error, Debug)]
pub enum LightError {
    /// A share link lacked the brightness (`b`) or temperature (`t`) parameter
    #[error("Missing brightness (b) or temperature (t) parameters")]
    MissingShareParameters,

    /// Share link parameters were present but unparsable or out of range
    #[error("Invalid parameter values. Brightness: 0-100, Temperature: 2700-9000")]
    InvalidShareParameters,

    /// Reading or writing a storage entry failed
    #[error("Storage error for key '{key}'")]
    StorageError {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed
    #[error("Serialization error: {context}")]
    SerializationError {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A preset import payload was not a JSON array of presets
    #[error("Preset import failed: {reason}")]
    PresetImport { reason: String },

    /// No preset exists with the given id
    #[error("Unknown preset: {id}")]
    UnknownPreset { id: String },
}

impl LightError {
    /// Create a storage error with context
    pub fn storage(key: impl Into<String>, source: std::io::Error) -> Self {
        Self::StorageError {
            key: key.into(),
            source,
        }
    }

    /// Create a serialization error with context
    pub fn serialization(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::SerializationError {
            context: context.into(),
            source,
        }
    }

    /// Check if the studio can keep running on defaults after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LightError::MissingShareParameters
                | LightError::InvalidShareParameters
                | LightError::PresetImport { .. }
                | LightError::UnknownPreset { .. }
                | LightError::SerializationError { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            LightError::MissingShareParameters | LightError::InvalidShareParameters => {
                "This share link is incomplete or invalid.".to_string()
            }
            LightError::PresetImport { .. } => {
                "Could not import presets. Please check the file and try again.".to_string()
            }
            LightError::UnknownPreset { id } => format!("Preset '{id}' no longer exists."),
            _ => "Your settings could not be saved.".to_string(),
        }
    }
}
