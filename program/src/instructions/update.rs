use pinocchio::{
    AccountView,
    ProgramResult,
};
use record_store_interface::{
    state::record_header::RECORD_HEADER_SIZE,
    utils::account_space,
};

use crate::{
    context::update_context::UpdateContext,
    debug,
    shared::account_resize::resize_with_rent,
};

/// Replaces the owner's record with `new_record`, resizing the slot to fit it exactly.
///
/// On a size change the slot's balance is settled against the owner so it holds exactly the
/// rent-exempt minimum for its new size. An empty `new_record` shrinks the slot down to its
/// header.
pub fn process_update(accounts: &[AccountView], new_record: &[u8]) -> ProgramResult {
    let ctx = UpdateContext::load(accounts)?;
    let owner = ctx.owner.account;
    let record = ctx.record.account;

    let new_size = account_space(new_record.len());
    if record.data_len() != new_size {
        debug!("resizing record slot: {} -> {}", record.data_len(), new_size);
        resize_with_rent(owner, record, new_size)?;
    }

    let mut data = record.try_borrow_mut()?;
    data[RECORD_HEADER_SIZE..].copy_from_slice(new_record);

    Ok(())
}
