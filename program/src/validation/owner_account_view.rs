use pinocchio::AccountView;
use record_store_interface::error::RecordStoreError;

/// The owner identity. Only checks that it signed; whether it actually owns a given record is
/// checked against the record header.
#[derive(Clone)]
pub struct OwnerAccountView<'a> {
    pub account: &'a AccountView,
}

impl<'a> OwnerAccountView<'a> {
    #[inline(always)]
    pub fn new(account: &'a AccountView) -> Result<OwnerAccountView<'a>, RecordStoreError> {
        if !account.is_signer() {
            return Err(RecordStoreError::Unauthorized);
        }

        Ok(Self { account })
    }
}
