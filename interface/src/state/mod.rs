use solana_address::Address;

pub mod record_header;
pub mod transmutable;

pub const SYSTEM_PROGRAM_ID: Address = Address::new_from_array([0; 32]);
