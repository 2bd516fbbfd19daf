use solana_address::Address;
use static_assertions::const_assert_eq;

use crate::{
    error::{
        RecordStoreError,
        RecordStoreResult,
    },
    state::transmutable::Transmutable,
};

pub const RECORD_HEADER_SIZE: usize = 34;
pub const RECORD_ACCOUNT_DISCRIMINANT: u8 = 0xDA;

/// The fixed header at the start of every record slot. The record bytes follow immediately
/// after it, so the record length is always `data_len - RECORD_HEADER_SIZE`.
#[repr(C)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordHeader {
    discriminant: u8,
    /// The canonical bump of the record slot's derived address.
    pub bump: u8,
    /// The owner identity, the only signer allowed to update the record.
    pub owner: Address,
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid; the discriminant is checked explicitly.
unsafe impl Transmutable for RecordHeader {
    const LEN: usize = RECORD_HEADER_SIZE;
}

const_assert_eq!(RECORD_HEADER_SIZE, size_of::<RecordHeader>());
const_assert_eq!(align_of::<RecordHeader>(), 1);

impl RecordHeader {
    pub fn init(bump: u8, owner: &Address) -> Self {
        RecordHeader {
            discriminant: RECORD_ACCOUNT_DISCRIMINANT,
            bump,
            owner: *owner,
        }
    }

    #[inline(always)]
    pub fn verify_discriminant(&self) -> RecordStoreResult {
        if self.discriminant != RECORD_ACCOUNT_DISCRIMINANT {
            return Err(RecordStoreError::InvalidAccountDiscriminant);
        }
        Ok(())
    }

    #[inline(always)]
    pub fn is_owned_by(&self, signer: &Address) -> bool {
        &self.owner == signer
    }

    /// Returns the header as its raw account bytes.
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8; RECORD_HEADER_SIZE] {
        // Safety: `RecordHeader` is `#[repr(C)]`, align 1, and exactly `RECORD_HEADER_SIZE` bytes.
        unsafe { &*(self as *const Self as *const [u8; RECORD_HEADER_SIZE]) }
    }
}
