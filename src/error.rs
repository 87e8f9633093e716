pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Short text surfaced as a transient notification; validation problems
    /// all collapse into the correction prompt the edit form shows.
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation(_) | Error::BadRequest(_) => {
                "Please fill all required fields.".to_string()
            }
            Error::NotFound(msg) => msg.clone(),
            Error::Unauthorized(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}
