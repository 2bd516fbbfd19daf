//! Account views that validate a raw [`pinocchio::AccountView`] once at load time.

pub mod owner_account_view;
pub mod record_account_view;
pub mod system_program_view;
pub mod uninitialized_record_view;
