pub mod initialize_context;
pub mod update_context;
