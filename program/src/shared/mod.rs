//! Shared utilities and helpers for `record-store` program logic.

pub mod account_resize;
pub mod seeds;
