use mollusk_svm::result::Check;
use record_store_interface::error::RecordStoreError;

/// Extension trait for converting a [`RecordStoreError`] directly into a [`Check`] that asserts
/// the instruction failed with that error.
pub trait IntoCheckFailure {
    fn into_check_failure(self) -> Check<'static>;
}

impl IntoCheckFailure for RecordStoreError {
    fn into_check_failure(self) -> Check<'static> {
        Check::err(self.into())
    }
}
