use std::io;
use std::path::PathBuf;

/// Library-wide error type for setup-ts operations.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error("{0}")]
    Io(#[from] io::Error),
    /// A required input file is absent from the project.
    #[error("required input file not found: {}", .0.display())]
    MissingInput(PathBuf),
    /// The manifest could not be parsed or re-serialized.
    #[error("package.json: {0}")]
    ManifestJson(#[from] serde_json::Error),
    /// The manifest document is not a JSON object.
    #[error("package.json: not a JSON object")]
    ManifestNotObject,
    /// A manifest section exists but is not a JSON object.
    #[error("package.json: `{0}` must be a JSON object")]
    ManifestSection(&'static str),
    /// An anchored edit could not locate its anchor text.
    #[error("{file}: anchor not found: `{anchor}`")]
    AnchorNotFound {
        file: &'static str,
        anchor: &'static str,
    },
}
