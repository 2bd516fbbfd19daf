use pinocchio::AccountView;
use record_store_interface::{
    error::RecordStoreError,
    state::SYSTEM_PROGRAM_ID,
};

#[derive(Clone)]
pub struct SystemProgramView<'a> {
    pub account: &'a AccountView,
}

impl<'a> SystemProgramView<'a> {
    #[inline(always)]
    pub fn new(account: &'a AccountView) -> Result<SystemProgramView<'a>, RecordStoreError> {
        if account.address() != &SYSTEM_PROGRAM_ID {
            return Err(RecordStoreError::InvalidSystemProgram);
        }

        Ok(Self { account })
    }
}
