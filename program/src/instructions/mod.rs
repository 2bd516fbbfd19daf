pub mod initialize;
pub mod update;

pub use initialize::process_initialize;
pub use update::process_update;
