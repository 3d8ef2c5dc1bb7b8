use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while creating or checking a skill.
#[derive(Error, Debug)]
pub enum SkillBuilderError {
    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The target skill directory is already present.
    #[error("Directory \"{}\" already exists", display_name(.path))]
    AlreadyExists { path: PathBuf },

    /// Writing one of the generated files failed.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No `skill.json` in the checked directory.
    #[error("skill.json not found in current directory")]
    MetadataNotFound { dir: PathBuf },

    /// `skill.json` exists but cannot be read as a metadata object.
    #[error("malformed skill.json: {message}")]
    Metadata { message: String },
}

fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Convenience alias for `Result<T, SkillBuilderError>`.
pub type Result<T> = std::result::Result<T, SkillBuilderError>;
