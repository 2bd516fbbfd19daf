//! Client-side builder for the `Initialize` instruction.

#[cfg(feature = "client")]
pub use client::*;

#[cfg(feature = "client")]
mod client {
    use alloc::vec;

    use solana_address::Address;
    use solana_instruction::{
        AccountMeta,
        Instruction,
    };

    use crate::{
        instructions::InstructionTag,
        state::SYSTEM_PROGRAM_ID,
    };

    /// Creates the `owner`'s empty record slot at `record`, funded by the owner.
    pub fn initialize(owner: &Address, record: &Address) -> Instruction {
        Instruction {
            program_id: crate::program::ID,
            accounts: vec![
                AccountMeta::new(*owner, true),
                AccountMeta::new(*record, false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ],
            data: vec![InstructionTag::Initialize as u8],
        }
    }
}
