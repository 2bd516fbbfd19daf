//! Record-level context for building, sending and reading a single owner's record slot.

use anyhow::{
    bail,
    Context,
};
use record_store_interface::instructions::{
    initialize::initialize,
    update::update,
};
use solana_address::Address;
use solana_instruction::Instruction;
use solana_sdk::signature::{
    Keypair,
    Signature,
    Signer,
};

use crate::{
    pda::find_record_address,
    transactions::CustomRpcClient,
    views::{
        try_record_view_from_owner_and_data,
        RecordView,
    },
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordContext {
    pub owner: Address,
    pub record: Address,
    pub bump: u8,
}

impl RecordContext {
    pub fn new(owner: Address) -> Self {
        let (record, bump) = find_record_address(&owner);
        Self {
            owner,
            record,
            bump,
        }
    }

    pub fn initialize(&self) -> Instruction {
        initialize(&self.owner, &self.record)
    }

    pub fn update(&self, new_record: &[u8]) -> Instruction {
        update(&self.owner, &self.record, new_record)
    }

    fn check_signer(&self, owner: &Keypair) -> anyhow::Result<()> {
        if owner.pubkey() != self.owner {
            bail!(
                "Signer {} isn't the record owner {}",
                owner.pubkey(),
                self.owner
            );
        }
        Ok(())
    }

    pub async fn send_initialize(
        &self,
        rpc: &CustomRpcClient,
        owner: &Keypair,
    ) -> anyhow::Result<Signature> {
        self.check_signer(owner)?;
        rpc.send_single_signer(owner, [self.initialize()]).await
    }

    pub async fn send_update(
        &self,
        rpc: &CustomRpcClient,
        owner: &Keypair,
        new_record: &[u8],
    ) -> anyhow::Result<Signature> {
        self.check_signer(owner)?;
        rpc.send_single_signer(owner, [self.update(new_record)])
            .await
    }

    /// Fetches and views the record slot. Reading never mutates the slot.
    pub async fn view_record(&self, rpc: &CustomRpcClient) -> anyhow::Result<RecordView> {
        let account = rpc
            .get_account(&self.record)
            .await
            .context("Record slot doesn't exist, has it been initialized?")?;
        try_record_view_from_owner_and_data(account.owner, &account.data)
    }
}
