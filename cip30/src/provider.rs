use crate::api::WalletApi;
use crate::error::Result;
use crate::types::WalletMetadata;

/// What a provider answered to the `enable` handshake.
pub enum EnableOutcome {
    /// The common case: a distinct api handle was returned.
    Api(Box<dyn WalletApi>),
    /// Legacy boolean signature. `true` means "use the host namespace
    /// itself as the handle"; anything else is a refusal.
    Legacy(bool),
}

/// One entry of the host namespace, prior to activation.
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait WalletProvider {
    /// Identifying metadata, or `None` when any of the required fields
    /// (api version, icon, name) is missing. This is the only validation
    /// the contract defines; entries without metadata are skipped by
    /// enumeration, not reported as errors.
    fn metadata(&self) -> Option<WalletMetadata>;

    /// Run the activation handshake. Suspends until the host resolves
    /// it, typically behind a user-consent dialog.
    async fn enable(&self) -> Result<EnableOutcome>;

    /// Whether this provider has already granted access to the calling
    /// application. Does not trigger a consent dialog.
    async fn is_enabled(&self) -> Result<bool>;
}
