use cip30::{CollateralSource, EnableOutcome, HostNamespace, WalletApi, WalletDescriptor};

use crate::error::{Error, Result};
use crate::quirks::WalletQuirk;

/// Everything a successful activation records. Swapped in and out as one
/// value, so the connection is never half-updated.
struct Connection {
    api: Box<dyn WalletApi>,
    provider_key: String,
    quirk: WalletQuirk,
    collateral: CollateralSource,
}

/// Client-side bridge to a wallet provider namespace.
///
/// The bridge owns the namespace it is constructed over and holds at
/// most one active provider connection. Enumeration
/// ([`wallets`](Self::wallets)) works at any time; every forwarding
/// operation requires a connection and fails with
/// [`Error::NotConnected`] until the first successful
/// [`activate`](Self::activate).
///
/// Calls are expected to be issued sequentially by the embedding
/// application. Two racing activations are last-write-wins on the
/// connection; that interleaving is unsupported.
pub struct WalletBridge<N: HostNamespace> {
    namespace: N,
    connection: Option<Connection>,
}

impl<N: HostNamespace> WalletBridge<N> {
    /// Create a disconnected bridge over `namespace`.
    pub fn new(namespace: N) -> Self {
        Self {
            namespace,
            connection: None,
        }
    }

    /// The wallets currently advertised by the host namespace.
    ///
    /// Entries missing any identifying field are skipped silently, per
    /// the contract. Order follows host enumeration and is not
    /// guaranteed stable. No side effects; never touches the
    /// connection.
    pub fn wallets(&self) -> Vec<WalletDescriptor> {
        self.namespace
            .keys()
            .into_iter()
            .filter_map(|key| {
                let metadata = self.namespace.provider(&key)?.metadata()?;
                Some(WalletDescriptor::new(key, metadata))
            })
            .collect()
    }

    /// Key of the currently connected provider, if any.
    pub fn active_provider_key(&self) -> Option<&str> {
        self.connection
            .as_ref()
            .map(|connection| connection.provider_key.as_str())
    }

    /// Run the `enable` handshake for the provider registered under
    /// `provider_key` and, on success, make it the active connection.
    ///
    /// The quirk profile and the collateral source are resolved here,
    /// once, and recorded alongside the handle. Re-activation simply
    /// overwrites the current connection.
    ///
    /// Every failure mode (unknown key, user rejection, host fault,
    /// legacy refusal) is logged and reported as `false`; no error is
    /// raised and an existing connection is left in place.
    pub async fn activate(&mut self, provider_key: &str) -> bool {
        let Some(provider) = self.namespace.provider(provider_key) else {
            log::warn!("no wallet provider registered under `{provider_key}`");
            return false;
        };

        let api: Box<dyn WalletApi> = match provider.enable().await {
            Ok(EnableOutcome::Api(api)) => api,
            // Legacy signature: the namespace itself is the handle.
            Ok(EnableOutcome::Legacy(true)) => self.namespace.legacy_api(),
            Ok(EnableOutcome::Legacy(false)) => {
                log::warn!("wallet provider `{provider_key}` refused activation");
                return false;
            }
            Err(err) => {
                log::warn!("activating wallet provider `{provider_key}` failed: {err}");
                return false;
            }
        };

        let quirk = WalletQuirk::for_provider(provider_key);
        let collateral = api.collateral_source();
        log::debug!(
            "wallet provider `{provider_key}` activated, quirk {quirk:?}, collateral {collateral:?}"
        );

        self.connection = Some(Connection {
            api,
            provider_key: provider_key.to_string(),
            quirk,
            collateral,
        });
        true
    }

    /// Whether the provider registered under `provider_key` has already
    /// granted access. Forwards to the provider's `isEnabled` query and
    /// never touches the connection.
    pub async fn is_activated(&self, provider_key: &str) -> Result<bool> {
        let provider = self
            .namespace
            .provider(provider_key)
            .ok_or_else(|| Error::ProviderNotFound(provider_key.to_string()))?;
        Ok(provider.is_enabled().await?)
    }

    /// Re-attach the bridge to an already enabled provider, re-fetching
    /// its handle.
    ///
    /// This never activates a wallet that has not granted access yet;
    /// a provider that reports not-enabled fails with
    /// [`Error::NotConnected`].
    pub async fn select_wallet(&mut self, provider_key: &str) -> Result<()> {
        if !self.is_activated(provider_key).await? {
            return Err(Error::NotConnected);
        }
        if self.activate(provider_key).await {
            Ok(())
        } else {
            Err(Error::NotConnected)
        }
    }

    /// Drop the active connection, returning the bridge to its
    /// disconnected state. The provider itself stays enabled on the
    /// host side.
    pub fn disconnect(&mut self) {
        if let Some(connection) = self.connection.take() {
            log::debug!(
                "disconnected from wallet provider `{}`",
                connection.provider_key
            );
        }
    }

    /// Ask the active wallet to sign a transaction, returning the
    /// signed transaction hex.
    pub async fn sign_transaction(&self, tx: &str, partial_sign: Option<bool>) -> Result<String> {
        Ok(self.connection()?.api.sign_tx(tx, partial_sign).await?)
    }

    /// Submit a signed transaction through the active wallet, returning
    /// the transaction id.
    pub async fn submit_transaction(&self, tx: &str) -> Result<String> {
        Ok(self.connection()?.api.submit_tx(tx).await?)
    }

    /// Addresses the active wallet has used. No pagination is applied,
    /// even though the provider contract supports it.
    pub async fn used_addresses(&self) -> Result<Vec<String>> {
        Ok(self.connection()?.api.get_used_addresses(None).await?)
    }

    /// UTXOs of the active wallet, with the optional value filter
    /// passed through verbatim.
    pub async fn utxos(&self, value: Option<String>) -> Result<Option<Vec<String>>> {
        Ok(self.connection()?.api.get_utxos(value).await?)
    }

    /// Collateral UTXOs of the active wallet, dispatched through the
    /// collateral source resolved at activation.
    pub async fn collateral(&self) -> Result<Option<Vec<String>>> {
        let connection = self.connection()?;
        match connection.collateral {
            CollateralSource::Primary => Ok(connection.api.get_collateral().await?),
            CollateralSource::Experimental => {
                Ok(connection.api.experimental_get_collateral().await?)
            }
            CollateralSource::Unsupported => Err(Error::CollateralUnsupported(
                connection.provider_key.clone(),
            )),
        }
    }

    /// The active wallet's reward address.
    pub async fn reward_address(&self) -> Result<String> {
        Ok(self.connection()?.api.get_reward_address().await?)
    }

    /// All reward addresses known to the active wallet.
    pub async fn reward_addresses(&self) -> Result<Vec<String>> {
        Ok(self.connection()?.api.get_reward_addresses().await?)
    }

    /// Sign an arbitrary message with the key behind `address`,
    /// dispatched through the quirk profile recorded at activation.
    pub async fn sign_data(&self, address: &str, message: &str) -> Result<String> {
        let connection = self.connection()?;
        match connection.quirk {
            WalletQuirk::Standard => Ok(connection.api.sign_data(address, message).await?),
            WalletQuirk::NamespaceSignData => {
                Ok(self.namespace.sign_data(address, message).await?)
            }
        }
    }

    fn connection(&self) -> Result<&Connection> {
        self.connection.as_ref().ok_or(Error::NotConnected)
    }
}
