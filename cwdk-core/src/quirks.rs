use cip30::constants;

/// Known behavioral deviations from the connector contract, keyed by
/// provider. The profile is selected once at activation time, so the
/// forwarding path never matches on provider key strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletQuirk {
    /// Fully conforming provider.
    Standard,
    /// Nami exposes `signData` on the host namespace instead of on the
    /// api handle it returns from `enable`.
    NamespaceSignData,
}

impl WalletQuirk {
    /// Quirk profile for the provider registered under `key`.
    pub fn for_provider(key: &str) -> Self {
        match key {
            constants::NAMI => Self::NamespaceSignData,
            _ => Self::Standard,
        }
    }
}
