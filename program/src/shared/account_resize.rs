use pinocchio::{
    error::ProgramError,
    sysvars::{
        rent::Rent,
        Sysvar,
    },
    AccountView,
    ProgramResult,
};
use record_store_interface::error::RecordStoreError;

use crate::debug;

/// The lamport movement needed for an account to hold exactly the rent-exempt minimum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RentAdjustment {
    /// The account already holds exactly the minimum.
    None,
    /// The payer must transfer this many lamports to the account.
    Fund(u64),
    /// This many lamports above the minimum must be returned to the payer.
    Refund(u64),
}

impl RentAdjustment {
    #[inline(always)]
    pub const fn compute(current_lamports: u64, required_lamports: u64) -> Self {
        if required_lamports > current_lamports {
            RentAdjustment::Fund(required_lamports - current_lamports)
        } else if current_lamports > required_lamports {
            RentAdjustment::Refund(current_lamports - required_lamports)
        } else {
            RentAdjustment::None
        }
    }
}

/// Whether a payer holding `payer_lamports` can pay `debit` and end up either emptied or still
/// holding at least `payer_minimum`. The runtime rejects anything in between as rent paying.
#[inline(always)]
pub const fn can_pay(payer_lamports: u64, debit: u64, payer_minimum: u64) -> bool {
    match payer_lamports.checked_sub(debit) {
        Some(0) => true,
        Some(remaining) => remaining >= payer_minimum,
        None => false,
    }
}

/// Fails with [`RecordStoreError::InsufficientFunds`] unless `payer` can pay `debit` per
/// [`can_pay`].
#[inline(always)]
pub fn check_payer_funds(
    payer: &AccountView,
    debit: u64,
    rent: &Rent,
) -> Result<(), RecordStoreError> {
    if !can_pay(payer.lamports(), debit, rent.minimum_balance(payer.data_len())) {
        return Err(RecordStoreError::InsufficientFunds);
    }
    Ok(())
}

/// Resizes `account` to `new_size` bytes and settles its rent with `payer` so that `account`
/// ends up holding exactly the rent-exempt minimum for `new_size`.
///
/// - Growth: `payer` transfers the incremental rent through the system program before the
///   resize. Fails with [`RecordStoreError::InsufficientFunds`] if `payer` can't cover it or
///   would be left below its own rent-exempt minimum.
/// - Shrinkage: the excess lamports are moved directly from `account` back to `payer`, which is
///   allowed because `account` is owned by this program.
///
/// Caller must guarantee there are no active borrows of `account`'s data, and that `payer` is a
/// writable, system-owned signer.
pub fn resize_with_rent(
    payer: &AccountView,
    account: &AccountView,
    new_size: usize,
) -> ProgramResult {
    let rent = Rent::get()?;
    let required_lamports = rent.minimum_balance(new_size);

    match RentAdjustment::compute(account.lamports(), required_lamports) {
        RentAdjustment::Fund(lamports) => {
            check_payer_funds(payer, lamports, &rent)?;
            pinocchio_system::instructions::Transfer {
                from: payer,
                to: account,
                lamports,
            }
            .invoke()?;
            debug!("funded record slot: {}", lamports);
        }
        RentAdjustment::Refund(lamports) => {
            let payer_lamports = payer
                .lamports()
                .checked_add(lamports)
                .ok_or(ProgramError::ArithmeticOverflow)?;
            account.set_lamports(required_lamports);
            payer.set_lamports(payer_lamports);
            debug!("refunded record slot: {}", lamports);
        }
        RentAdjustment::None => (),
    }

    account.resize(new_size)
}

#[cfg(test)]
mod tests {
    use super::{
        can_pay,
        RentAdjustment,
    };

    const EMPTY_ACCOUNT_MINIMUM: u64 = 890_880;

    #[test]
    fn growth_requires_funding_the_difference() {
        assert_eq!(
            RentAdjustment::compute(1_238_880, 1_552_080),
            RentAdjustment::Fund(313_200)
        );
    }

    #[test]
    fn shrinkage_refunds_the_excess() {
        assert_eq!(
            RentAdjustment::compute(1_552_080, 1_447_680),
            RentAdjustment::Refund(104_400)
        );
    }

    #[test]
    fn exact_balance_needs_nothing() {
        assert_eq!(RentAdjustment::compute(890_880, 890_880), RentAdjustment::None);
        assert_eq!(RentAdjustment::compute(0, 0), RentAdjustment::None);
    }

    #[test]
    fn prefunded_account_is_never_charged_twice() {
        // A third party already sent more than the new minimum, so growth refunds instead.
        assert_eq!(
            RentAdjustment::compute(2_000_000, 1_552_080),
            RentAdjustment::Refund(447_920)
        );
    }

    #[test]
    fn payer_must_stay_rent_exempt_or_be_emptied() {
        let debit = 313_200;
        assert!(can_pay(debit, debit, EMPTY_ACCOUNT_MINIMUM));
        assert!(can_pay(debit + EMPTY_ACCOUNT_MINIMUM, debit, EMPTY_ACCOUNT_MINIMUM));
        assert!(!can_pay(debit + 1, debit, EMPTY_ACCOUNT_MINIMUM));
        assert!(!can_pay(debit + EMPTY_ACCOUNT_MINIMUM - 1, debit, EMPTY_ACCOUNT_MINIMUM));
        assert!(!can_pay(debit - 1, debit, EMPTY_ACCOUNT_MINIMUM));
    }
}
