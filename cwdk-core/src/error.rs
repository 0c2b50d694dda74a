use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Precondition failures
    #[error("no wallet connection, activate a provider first")]
    NotConnected,
    #[error("no wallet provider registered under `{0}`")]
    ProviderNotFound(String),
    #[error("wallet provider `{0}` does not support collateral queries")]
    CollateralUnsupported(String),

    // Contract pass-through
    #[error(transparent)]
    Contract(#[from] cip30::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
