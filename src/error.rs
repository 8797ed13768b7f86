use thiserror::Error;

pub type ScaleResult<T> = Result<T, ScaleError>;

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("invalid window: size={window_seconds}s, sample={sample_seconds}s")]
    InvalidWindow {
        window_seconds: i64,
        sample_seconds: i64,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
