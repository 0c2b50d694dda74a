use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Raised by the wallet host while servicing a call: user rejection,
    // extension fault, connection loss. The contract does not let us
    // distinguish these, so the cause is carried opaquely.
    #[error("wallet host: {0}")]
    Host(Box<dyn std::error::Error + Send + Sync>),

    // The host answered with a value outside the contract shape
    #[error("malformed host response for `{method}`: {detail}")]
    MalformedResponse {
        method: &'static str,
        detail: String,
    },
}

impl Error {
    /// Wrap a host-side fault.
    pub fn host<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Host(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
