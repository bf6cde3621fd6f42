use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Failed to fetch site content")]
    FetchFailed,

    #[error("Failed to update site content")]
    UpdateFailed,

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
