mod bridge;
mod error;
mod quirks;

// re-export the contract crate for consumers who need to provide
// implementors
pub use cip30;

pub use bridge::WalletBridge;
pub use error::{Error, Result};
pub use quirks::WalletQuirk;
