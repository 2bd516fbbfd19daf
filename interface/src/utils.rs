use crate::state::record_header::RECORD_HEADER_SIZE;

/// Returns the record length implied by a record slot's total account data length, or `None` if
/// the account is too small to hold a header.
#[inline(always)]
pub const fn record_len(data_len: usize) -> Option<usize> {
    data_len.checked_sub(RECORD_HEADER_SIZE)
}

/// Returns the account data length required to store a record of `record_len` bytes.
#[inline(always)]
pub const fn account_space(record_len: usize) -> usize {
    RECORD_HEADER_SIZE + record_len
}
