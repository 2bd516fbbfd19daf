use solana_program_error::ProgramError;

use crate::error::RecordStoreError;

pub mod initialize;
pub mod update;

/// The first byte of every instruction's data.
///
/// Both instructions take the same accounts:
///  0. `[WRITE, SIGNER]` Owner
///  1. `[WRITE]` Record slot derived from [`crate::seeds::RECORD_SEED`] and the owner
///  2. `[READ]` System program
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    any(test, feature = "client"),
    derive(strum_macros::FromRepr, strum_macros::EnumIter, strum_macros::Display)
)]
pub enum InstructionTag {
    Initialize,
    Update,
}

impl TryFrom<u8> for InstructionTag {
    type Error = ProgramError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(InstructionTag::Initialize),
            1 => Ok(InstructionTag::Update),
            _ => Err(RecordStoreError::InvalidInstructionTag.into()),
        }
    }
}
