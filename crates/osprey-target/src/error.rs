use thiserror::Error;

#[derive(Debug, Error)]
pub enum TargetError {
    #[error("invalid target definition for {label}: {reason}")]
    InvalidDefinition { label: String, reason: String },
}

pub type Result<T> = std::result::Result<T, TargetError>;
