use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReelError {
    #[error("{0}")]
    Api(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReelError>;
