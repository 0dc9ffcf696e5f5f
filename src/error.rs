use std::time::SystemTimeError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("malformed payload: {0}")]
    Parse(String),
    #[error("checksum mismatch: expected {expected}, found {found}")]
    Checksum { expected: String, found: String },
    #[error(transparent)]
    Time(#[from] SystemTimeError),
}

pub type VietQrResult<T> = std::result::Result<T, Error>;
