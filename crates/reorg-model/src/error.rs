use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("rule index {index} out of bounds (rule set has {len} rules)")]
    RuleIndexOutOfBounds { index: usize, len: usize },
    #[error("no rule with id `{0}`")]
    UnknownRuleId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
