//! Bindings for the CIP-30 dApp-wallet web bridge contract.
//!
//! Wallet extensions inject one object per wallet under a shared global
//! namespace. Each entry advertises identifying metadata and an `enable`
//! handshake that, after user consent, yields an api handle carrying the
//! full operation set (address listing, UTXO queries, transaction
//! signing and submission, data signing).
//!
//! This crate only describes that contract. The traits here are
//! implemented by platform backends (see `backend-browser` for the
//! injected-namespace implementation) and consumed by `cwdk-core`, which
//! adds connection state on top.

pub mod constants;
mod error;

mod api;
mod namespace;
mod provider;
mod types;

pub use api::WalletApi;
pub use error::{Error, Result};
pub use namespace::HostNamespace;
pub use provider::{EnableOutcome, WalletProvider};
pub use types::{CollateralSource, Paginate, WalletDescriptor, WalletMetadata};
