//! Seeds used to derive record slot addresses.

/// The fixed domain tag prefixed to the owner's address when deriving a record slot.
pub const RECORD_SEED: &[u8] = b"data";
