use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("no `window` in this environment")]
    NoWindow,
    #[error("no wallet namespace injected in this window")]
    NamespaceMissing,
    #[error("`{0}` is not callable on the wallet host object")]
    NotCallable(&'static str),
    #[error("wallet host rejected `{method}`: {detail}")]
    Rejected {
        method: &'static str,
        detail: String,
    },
    #[error("could not encode the `{method}` argument: {detail}")]
    Encode {
        method: &'static str,
        detail: String,
    },
    #[error("could not decode the `{method}` response: {detail}")]
    Decode {
        method: &'static str,
        detail: String,
    },
}

impl From<BackendError> for cip30::Error {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Decode { method, detail } => {
                cip30::Error::MalformedResponse { method, detail }
            }
            other => cip30::Error::host(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, BackendError>;
