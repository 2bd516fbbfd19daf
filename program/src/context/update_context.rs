//! See [`UpdateContext`].

use pinocchio::AccountView;
use record_store_interface::error::RecordStoreError;

use crate::validation::{
    owner_account_view::OwnerAccountView,
    record_account_view::RecordAccountView,
    system_program_view::SystemProgramView,
};

/// The account context for the `Update` instruction. The accounts are in the same order as
/// [`super::initialize_context::InitializeContext`].
#[derive(Clone)]
pub struct UpdateContext<'a> {
    pub owner: OwnerAccountView<'a>,
    pub record: RecordAccountView<'a>,
    pub system_program: SystemProgramView<'a>,
}

impl<'a> UpdateContext<'a> {
    /// The record account's data is borrowed and released while loading, so no borrows are held
    /// once this returns.
    pub fn load(accounts: &'a [AccountView]) -> Result<UpdateContext<'a>, RecordStoreError> {
        let [owner, record, system_program, ..] = accounts else {
            return Err(RecordStoreError::NotEnoughAccountKeys);
        };

        let owner = OwnerAccountView::new(owner)?;
        let record = RecordAccountView::new(record, owner.account.address())?;
        let system_program = SystemProgramView::new(system_program)?;

        Ok(Self {
            owner,
            record,
            system_program,
        })
    }
}
