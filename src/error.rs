use thiserror::Error;

pub type VizResult<T> = Result<T, VizError>;

#[derive(Debug, Error)]
pub enum VizError {
    #[error("invalid selector: {0}")]
    InvalidSelector(String),

    #[error("invalid layout config: {0}")]
    InvalidLayout(String),

    #[error("invalid draw primitive: {0}")]
    InvalidPrimitive(String),

    #[error("renderer backend failure: {0}")]
    Backend(String),
}
