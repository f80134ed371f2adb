use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("model artifact not found: {0}")]
    ArtifactNotFound(PathBuf),

    #[error("reading model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("parsing model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown artifact kind {0:?}")]
    UnknownKind(String),

    #[error("artifact kind {found:?} where a {expected} was expected")]
    WrongKind {
        expected: &'static str,
        found: String,
    },

    #[error("malformed vectorizer artifact: {0}")]
    MalformedVectorizer(String),

    #[error("malformed classifier artifact: {0}")]
    MalformedClassifier(String),

    #[error(
        "vectorizer dimension {vectorizer} does not match classifier features {classifier}"
    )]
    DimensionMismatch {
        vectorizer: usize,
        classifier: usize,
    },
}
