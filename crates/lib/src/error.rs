#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Subprocess(String),
    #[error("{0}")]
    Write(String),
    #[error("{0}")]
    InvalidValue(String),
}
