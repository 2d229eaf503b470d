// File: src/error.rs

/// Failures surfaced by the converter. Malformed script is never an error;
/// only the rule pass cap and storage problems are.
#[derive(Debug, thiserror::Error)]
pub enum G2pError {
    #[error("rule group did not settle for /{word}/ after {passes} passes")]
    RuleDivergence { word: String, passes: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("lexicon encoding error: {0}")]
    Encode(#[from] bincode::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not persist file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

pub type Result<T> = std::result::Result<T, G2pError>;
