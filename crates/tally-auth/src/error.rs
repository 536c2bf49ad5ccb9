use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials: check your username and password")]
    InvalidCredentials,

    #[error("no username given")]
    MissingUsername,
}
