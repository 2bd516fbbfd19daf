use pinocchio::{
    no_allocator,
    nostd_panic_handler,
    program_entrypoint,
    AccountView,
    Address,
    ProgramResult,
};
use record_store_interface::{
    error::RecordStoreError,
    instructions::InstructionTag,
};

use crate::instructions::*;

program_entrypoint!(process_instruction);
no_allocator!();
nostd_panic_handler!();

#[inline(always)]
pub fn process_instruction(
    _program_id: &Address,
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let [tag, remaining @ ..] = instruction_data else {
        return Err(RecordStoreError::InvalidInstructionTag.into());
    };

    match InstructionTag::try_from(*tag)? {
        InstructionTag::Initialize => process_initialize(accounts),
        InstructionTag::Update => process_update(accounts, remaining),
    }
}
