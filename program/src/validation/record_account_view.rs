use pinocchio::{
    AccountView,
    Address,
};
use record_store_interface::{
    error::RecordStoreError,
    state::{
        record_header::RecordHeader,
        transmutable::load,
    },
};

/// An initialized record slot whose header names the passed owner.
#[derive(Clone)]
pub struct RecordAccountView<'a> {
    pub account: &'a AccountView,
}

impl<'a> RecordAccountView<'a> {
    /// Checks program ownership, the header discriminant, and that `owner` is the owner stored in
    /// the header.
    ///
    /// Slots are only ever created at the canonical derived address of the owner written into
    /// their header, so a matching header also proves the address derivation.
    #[inline(always)]
    pub fn new(
        account: &'a AccountView,
        owner: &Address,
    ) -> Result<RecordAccountView<'a>, RecordStoreError> {
        if !account.owned_by(&crate::ID) {
            return Err(RecordStoreError::NotInitialized);
        }

        let data = account
            .try_borrow()
            .map_err(|_| RecordStoreError::NotInitialized)?;

        // Safety: All bit patterns are valid; the discriminant is checked below.
        let header = unsafe { load::<RecordHeader>(&data) }
            .map_err(|_| RecordStoreError::NotInitialized)?;
        header.verify_discriminant()?;

        if !header.is_owned_by(owner) {
            return Err(RecordStoreError::Unauthorized);
        }

        Ok(Self { account })
    }
}
