use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    /// Rule `type` tags are a closed set; an unrecognized tag is a hard
    /// decode error because silently dropping a rule would change data.
    #[error("unknown rule type `{0}`")]
    UnknownRuleType(String),
    #[error("invalid campaign document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CodecError>;
