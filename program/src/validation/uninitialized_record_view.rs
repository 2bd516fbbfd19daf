use pinocchio::{
    AccountView,
    Address,
};
use record_store_interface::{
    error::RecordStoreError,
    seeds::RECORD_SEED,
};

/// A record slot that doesn't exist yet, verified to sit at the owner's canonical derived
/// address.
#[derive(Clone)]
pub struct UninitializedRecordView<'a> {
    pub account: &'a AccountView,
    /// The canonical bump for the derived address.
    pub bump: u8,
}

impl<'a> UninitializedRecordView<'a> {
    #[inline(always)]
    pub fn new(
        account: &'a AccountView,
        owner: &Address,
    ) -> Result<UninitializedRecordView<'a>, RecordStoreError> {
        let (expected, bump) =
            Address::find_program_address(&[RECORD_SEED, owner.as_ref()], &crate::ID);

        if account.address() != &expected {
            return Err(RecordStoreError::InvalidRecordAddress);
        }

        // Only this program can assign the slot to itself, so ownership alone marks it as
        // initialized.
        if account.owned_by(&crate::ID) {
            return Err(RecordStoreError::AlreadyInitialized);
        }

        Ok(Self { account, bump })
    }
}
