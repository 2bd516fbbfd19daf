#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod context;
mod debug;
mod instructions;
mod shared;
mod validation;

pub use record_store_interface::program::ID;
pub use shared::account_resize::RentAdjustment;

#[cfg(not(feature = "no-entrypoint"))]
mod entrypoint;
