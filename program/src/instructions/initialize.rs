use pinocchio::{
    cpi::Signer,
    error::ProgramError,
    sysvars::{
        rent::Rent,
        Sysvar,
    },
    AccountView,
    ProgramResult,
};
use record_store_interface::{
    state::{
        record_header::{
            RecordHeader,
            RECORD_HEADER_SIZE,
        },
        transmutable::load_mut,
    },
};

use crate::{
    context::initialize_context::InitializeContext,
    debug,
    record_seeds,
    shared::account_resize::check_payer_funds,
};

/// Creates the owner's record slot at its derived address with an empty record.
///
/// The slot is created with exactly [`RECORD_HEADER_SIZE`] bytes of space and the rent-exempt
/// minimum for that size, paid by the owner. A derived address that already holds lamports is
/// topped up or refunded to that same minimum.
pub fn process_initialize(accounts: &[AccountView]) -> ProgramResult {
    let ctx = InitializeContext::load(accounts)?;
    let owner = ctx.owner.account;
    let record = ctx.record.account;

    let bump_seed = [ctx.record.bump];
    let seeds = record_seeds!(owner.address(), &bump_seed);
    let signers = [Signer::from(&seeds)];

    let rent = Rent::get()?;
    let lamports_required = rent.minimum_balance(RECORD_HEADER_SIZE);
    let current_lamports = record.lamports();

    if current_lamports == 0 {
        check_payer_funds(owner, lamports_required, &rent)?;

        pinocchio_system::instructions::CreateAccount {
            from: owner,
            to: record,
            lamports: lamports_required,
            space: RECORD_HEADER_SIZE as u64,
            owner: &crate::ID,
        }
        .invoke_signed(&signers)?;
    } else {
        // Someone already sent lamports to the derived address, which makes `CreateAccount`
        // fail. Top it up to the minimum and allocate and assign it in place instead.
        let top_up = lamports_required.saturating_sub(current_lamports);
        if top_up > 0 {
            check_payer_funds(owner, top_up, &rent)?;

            pinocchio_system::instructions::Transfer {
                from: owner,
                to: record,
                lamports: top_up,
            }
            .invoke()?;
        }

        pinocchio_system::instructions::Allocate {
            account: record,
            space: RECORD_HEADER_SIZE as u64,
        }
        .invoke_signed(&signers)?;

        pinocchio_system::instructions::Assign {
            account: record,
            owner: &crate::ID,
        }
        .invoke_signed(&signers)?;

        // The slot is program owned now, so anything above the minimum goes to the owner.
        let excess = current_lamports.saturating_sub(lamports_required);
        if excess > 0 {
            let owner_lamports = owner
                .lamports()
                .checked_add(excess)
                .ok_or(ProgramError::ArithmeticOverflow)?;
            record.set_lamports(lamports_required);
            owner.set_lamports(owner_lamports);
        }

        debug!("initialized prefunded record slot: {}", current_lamports);
    }

    let mut data = record.try_borrow_mut()?;
    // Safety: The account was just allocated with `RECORD_HEADER_SIZE` zeroed bytes.
    let header = unsafe { load_mut::<RecordHeader>(&mut data) }?;
    *header = RecordHeader::init(ctx.record.bump, owner.address());

    Ok(())
}
