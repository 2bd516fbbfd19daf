//! Client-side utilities for interacting with the record store program.
//!
//! Includes network configuration, transaction submission, record and token context helpers,
//! PDA derivations, and in-process test helpers.

pub mod config;
pub mod context;
pub mod logs;
pub mod mollusk_helpers;
pub mod pda;
pub mod transactions;
pub mod views;

pub use logs::LogColor;
