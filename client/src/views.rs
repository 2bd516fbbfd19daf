//! Owned, client-side views of record slot accounts.

use anyhow::{
    anyhow,
    bail,
};
use record_store_interface::{
    state::{
        record_header::RecordHeader,
        transmutable::load,
    },
    utils::record_len,
};
use solana_address::Address;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordView {
    /// The owner identity stored in the slot header.
    pub owner: Address,
    pub bump: u8,
    /// The record bytes, exactly as last written.
    pub data: Vec<u8>,
}

impl RecordView {
    pub fn as_utf8(&self) -> anyhow::Result<&str> {
        std::str::from_utf8(&self.data).map_err(|e| anyhow!("Record isn't valid UTF-8: {e}"))
    }
}

/// Views raw record slot account data. Doesn't check the account's owning program; see
/// [`try_record_view_from_owner_and_data`].
pub fn try_record_view(data: &[u8]) -> anyhow::Result<RecordView> {
    // Safety: All bit patterns are valid; the discriminant is checked below.
    let header = unsafe { load::<RecordHeader>(data) }?;
    header.verify_discriminant()?;

    let len = record_len(data.len()).ok_or(anyhow!("Record slot is shorter than its header"))?;

    Ok(RecordView {
        owner: header.owner,
        bump: header.bump,
        data: data[data.len() - len..].to_vec(),
    })
}

/// Views a record slot after checking that `account_owner` is the record store program.
pub fn try_record_view_from_owner_and_data(
    account_owner: Address,
    data: &[u8],
) -> anyhow::Result<RecordView> {
    if account_owner != record_store_interface::program::ID {
        bail!("Account isn't owned by the record store program: {account_owner}");
    }
    try_record_view(data)
}
