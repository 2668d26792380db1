use thiserror::Error;

#[derive(Debug, Error)]
pub enum Id3Error {
    #[error("label sequence is empty")]
    EmptyLabels,

    #[error("no candidate attributes left to split on")]
    NoCandidateAttributes,

    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("row has no value for attribute '{attribute}'")]
    MissingValue { attribute: String },

    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("dataset is empty")]
    EmptyDataset,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Id3Error>;
