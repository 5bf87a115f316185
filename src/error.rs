use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordFormatError {
    #[error("stored password has no {{id}} prefix")]
    MissingEncoderId,
    #[error("no password encoder mapped for id \"{0}\"")]
    UnknownEncoder(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a port number, got \"{0}\"")]
    InvalidPort(String),
    #[error("SECURITY_USER_NAME must not be empty")]
    EmptyUsername,
    #[error("SECURITY_USER_PASSWORD: {0}")]
    Password(#[from] PasswordFormatError),
}
