use crate::error::Result;
use crate::types::{CollateralSource, Paginate};

/// Operation set of an activated provider.
///
/// This is the capability object a provider hands out after a successful
/// `enable` handshake. Every suspending method is a single round-trip to
/// the wallet host; payloads (transactions, values, addresses) travel as
/// CBOR hex strings and are passed through unvalidated in both
/// directions.
///
/// - For native targets the returned futures are `Send`
/// - For WASM targets the `Send` bound is omitted since the browser is
///   single-threaded
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait WalletApi {
    /// Addresses the wallet has used, optionally paginated.
    async fn get_used_addresses(&self, paginate: Option<Paginate>) -> Result<Vec<String>>;

    /// UTXOs controlled by the wallet, optionally filtered to cover
    /// `value` (a CBOR hex encoded amount). The host may answer with no
    /// list at all.
    async fn get_utxos(&self, value: Option<String>) -> Result<Option<Vec<String>>>;

    /// Collateral UTXOs via the top-level `getCollateral` call.
    ///
    /// Only valid when [`collateral_source`](Self::collateral_source)
    /// reports [`CollateralSource::Primary`].
    async fn get_collateral(&self) -> Result<Option<Vec<String>>>;

    /// Collateral UTXOs via the `experimental` namespace, for providers
    /// that predate the top-level call.
    async fn experimental_get_collateral(&self) -> Result<Option<Vec<String>>>;

    /// Which of the two collateral calls this handle supports, if any.
    ///
    /// A plain capability probe; does not suspend and does not reach the
    /// host.
    fn collateral_source(&self) -> CollateralSource;

    /// Ask the wallet to sign a transaction and return the signed
    /// transaction hex. `partial_sign` is forwarded verbatim; leaving it
    /// unset lets the host apply its own default.
    async fn sign_tx(&self, tx: &str, partial_sign: Option<bool>) -> Result<String>;

    /// Submit a signed transaction, returning the transaction id.
    async fn submit_tx(&self, tx: &str) -> Result<String>;

    /// The wallet's reward address.
    async fn get_reward_address(&self) -> Result<String>;

    /// All reward addresses known to the wallet.
    async fn get_reward_addresses(&self) -> Result<Vec<String>>;

    /// Sign an arbitrary message with the key behind `address`.
    async fn sign_data(&self, address: &str, message: &str) -> Result<String>;
}
