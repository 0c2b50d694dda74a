//! Connection state and call forwarding over a host namespace.

mod bridge;

pub use bridge::WalletBridge;
