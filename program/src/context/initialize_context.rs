//! See [`InitializeContext`].

use pinocchio::AccountView;
use record_store_interface::error::RecordStoreError;

use crate::validation::{
    owner_account_view::OwnerAccountView,
    system_program_view::SystemProgramView,
    uninitialized_record_view::UninitializedRecordView,
};

/// The account context for the `Initialize` instruction.
#[derive(Clone)]
pub struct InitializeContext<'a> {
    pub owner: OwnerAccountView<'a>,
    pub record: UninitializedRecordView<'a>,
    pub system_program: SystemProgramView<'a>,
}

impl<'a> InitializeContext<'a> {
    pub fn load(accounts: &'a [AccountView]) -> Result<InitializeContext<'a>, RecordStoreError> {
        let [owner, record, system_program, ..] = accounts else {
            return Err(RecordStoreError::NotEnoughAccountKeys);
        };

        let owner = OwnerAccountView::new(owner)?;
        let record = UninitializedRecordView::new(record, owner.account.address())?;
        let system_program = SystemProgramView::new(system_program)?;

        Ok(Self {
            owner,
            record,
            system_program,
        })
    }
}
