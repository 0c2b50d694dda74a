//! # Browser backend
//!
//! **WASM-only crate**: implements the `cip30` contract over the wallet
//! namespace browser extensions inject into `window` (`window.cardano`).
//!
//! ## Build Requirements
//!
//! The implementation only exists for the `wasm32-unknown-unknown`
//! target:
//!
//! ```bash
//! cargo build -p backend-browser --target wasm32-unknown-unknown
//! ```
//!
//! On native targets the crate compiles to an empty library, so building
//! the whole workspace stays possible without the WASM toolchain.
//!
//! ## Usage
//!
//! [`bridge_from_window`] locates the injected namespace and wraps it in
//! a ready-to-use [`cwdk_core::WalletBridge`]. For embedding scenarios
//! where the namespace object is obtained some other way, construct an
//! [`InjectedNamespace`] from it directly.

#[cfg(target_arch = "wasm32")]
mod api;
#[cfg(target_arch = "wasm32")]
mod error;
#[cfg(target_arch = "wasm32")]
mod interop;
#[cfg(target_arch = "wasm32")]
mod namespace;
#[cfg(target_arch = "wasm32")]
mod provider;

#[cfg(target_arch = "wasm32")]
pub use api::InjectedApi;
#[cfg(target_arch = "wasm32")]
pub use error::{BackendError, Result};
#[cfg(target_arch = "wasm32")]
pub use namespace::InjectedNamespace;
#[cfg(target_arch = "wasm32")]
pub use provider::InjectedProvider;

// Re-export the kit for consumers of this backend
#[cfg(target_arch = "wasm32")]
pub use cwdk_core::{self, WalletBridge};

/// Bridge over the `window.cardano` namespace of the current browsing
/// context.
#[cfg(target_arch = "wasm32")]
pub fn bridge_from_window() -> Result<WalletBridge<InjectedNamespace>> {
    Ok(WalletBridge::new(InjectedNamespace::from_window()?))
}
