use series::BinningError;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl PipelineError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

impl From<BinningError> for PipelineError {
    fn from(err: BinningError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

pub type PipelineResult<T> = Result<T, PipelineError>;
