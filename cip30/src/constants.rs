//! Provider keys of well-known wallet extensions.
//!
//! Any string key found in the host namespace is a valid provider; these
//! are only the ones this kit knows by name (Nami because of its
//! `signData` placement, the others for convenience).

pub const NAMI: &str = "nami";
pub const CCVAULT: &str = "ccvault";
pub const FLINT: &str = "flint";
