use thiserror::Error;

#[derive(Error, Debug)]
pub enum MilimError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Failed to load file: {0}")]
    FailedToLoadFile(String),

    #[error("Failed to load unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("MilimError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for MilimError {
    fn from(error: std::io::Error) -> Self {
        MilimError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for MilimError {
    fn from(error: reqwest::Error) -> Self {
        MilimError::Reqwest(Box::new(error))
    }
}
