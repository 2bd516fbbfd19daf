#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "client")]
extern crate alloc;

pub mod error;
pub mod instructions;
pub mod seeds;
pub mod state;
pub mod utils;

pub mod program {
    solana_address::declare_id!("3qCWrtEG4NZUri5rMvvNVhS6fUeA7HkEirtDk8kgW4QH");
}
