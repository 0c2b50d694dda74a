use serde::{Deserialize, Serialize};

/// Identifying fields every conforming provider advertises on its
/// namespace entry. An entry missing any of them is not a usable wallet
/// and is skipped during enumeration.
///
/// Field names follow the host convention (`apiVersion`, `icon`, `name`)
/// on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletMetadata {
    /// Contract version implemented by the provider.
    pub api_version: String,
    /// Wallet icon as a data URI.
    pub icon: String,
    /// Human-readable wallet name.
    pub name: String,
}

/// A provider entry as reported by wallet enumeration.
///
/// `key` is the entry's name in the host namespace and is the only
/// identity a provider has; pass it to activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletDescriptor {
    pub key: String,
    #[serde(flatten)]
    pub metadata: WalletMetadata,
}

impl WalletDescriptor {
    pub fn new(key: impl Into<String>, metadata: WalletMetadata) -> Self {
        Self {
            key: key.into(),
            metadata,
        }
    }
}

/// Page selector accepted by the address listing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginate {
    pub page: u32,
    pub limit: u32,
}

/// How an activated provider exposes collateral queries.
///
/// Resolved once, right after activation, so forwarding never has to
/// probe the handle again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollateralSource {
    /// `getCollateral` is exposed at the top level of the api handle.
    Primary,
    /// Collateral is only reachable under the `experimental` namespace.
    Experimental,
    /// The provider exposes no collateral query at all.
    Unsupported,
}
