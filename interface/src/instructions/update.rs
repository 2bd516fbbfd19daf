//! Client-side builder for the `Update` instruction.

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

    /// Replaces the record at `record` with `new_record` in full.
    ///
    /// Instruction data layout:
    ///   - [0]: the instruction tag, 1 byte
    ///   - [1..]: the complete new record, `new_record.len()` bytes
    pub fn update(owner: &Address, record: &Address, new_record: &[u8]) -> Instruction {
        let mut data = vec![InstructionTag::Update as u8];
        data.extend_from_slice(new_record);

        Instruction {
            program_id: crate::program::ID,
            accounts: vec![
                AccountMeta::new(*owner, true),
                AccountMeta::new(*record, false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ],
            data,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn update_data_is_tag_then_raw_record() {
            let owner = Address::new_from_array([1; 32]);
            let record = Address::new_from_array([2; 32]);
            let ix = update(&owner, &record, "片云".as_bytes());

            assert_eq!(ix.data[0], InstructionTag::Update as u8);
            assert_eq!(&ix.data[1..], "片云".as_bytes());
            assert!(ix.accounts[0].is_signer && ix.accounts[0].is_writable);
            assert!(!ix.accounts[1].is_signer && ix.accounts[1].is_writable);
            assert!(!ix.accounts[2].is_writable);
        }
    }
}
