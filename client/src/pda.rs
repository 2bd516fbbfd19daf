//! PDA helpers for deriving record store program addresses.

use record_store_interface::seeds::RECORD_SEED;
use solana_address::Address;

/// Returns the `owner`'s record slot address and its canonical bump.
pub fn find_record_address(owner: &Address) -> (Address, u8) {
    Address::find_program_address(
        &[RECORD_SEED, owner.as_ref()],
        &record_store_interface::program::ID,
    )
}
