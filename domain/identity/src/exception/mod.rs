pub type IdentityResult<T> = Result<T, IdentityException>;

#[derive(Debug, thiserror::Error)]
pub enum IdentityException {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Identity internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for IdentityException {
    fn from(e: anyhow::Error) -> Self {
        IdentityException::InternalError { source: e }
    }
}
