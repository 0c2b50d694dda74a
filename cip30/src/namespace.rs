use crate::api::WalletApi;
use crate::error::Result;
use crate::provider::WalletProvider;

/// The host-provided mapping from provider key to wallet provider.
///
/// In a browser this is the injected `window.cardano` object; tests
/// implement it over plain collections. Enumeration order is whatever
/// the host yields and is not guaranteed stable.
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait HostNamespace {
    /// Provider keys in host enumeration order.
    fn keys(&self) -> Vec<String>;

    /// Look up a provider entry by key.
    fn provider(&self, key: &str) -> Option<Box<dyn WalletProvider>>;

    /// Namespace-level data signing. Some legacy wallets expose
    /// `signData` here instead of on the handle they return from
    /// `enable`; see `cwdk-core`'s quirk handling.
    async fn sign_data(&self, address: &str, message: &str) -> Result<String>;

    /// The namespace itself viewed as an api handle, for providers that
    /// answer `enable` with the legacy boolean signature.
    fn legacy_api(&self) -> Box<dyn WalletApi>;
}
