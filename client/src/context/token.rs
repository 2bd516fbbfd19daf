//! Token-level context containing mint metadata and helpers for deriving associated token accounts
//! and building token instructions.
//!
//! The instruction builders come from `spl-token-2022-interface`, which accepts both the SPL token
//! program and the token 2022 program IDs.

use anyhow::{
    anyhow,
    Context,
};
use solana_address::Address;
use solana_instruction::Instruction;
use solana_sdk::{
    program_pack::Pack,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
};
use solana_system_interface::instruction::create_account;
use spl_associated_token_account_interface::{
    address::get_associated_token_address_with_program_id,
    instruction::{
        create_associated_token_account,
        create_associated_token_account_idempotent,
    },
};
use spl_token_2022_interface::{
    check_spl_token_program_account,
    instruction::{
        approve_checked,
        burn_checked,
        close_account,
        freeze_account,
        initialize_mint2,
        mint_to_checked,
        revoke,
        set_authority,
        thaw_account,
        transfer_checked,
        AuthorityType,
    },
};
use spl_token_interface::state::{
    Account as TokenAccount,
    Mint,
};

use crate::transactions::CustomRpcClient;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenContext {
    pub mint_authority: Option<Address>,
    pub freeze_authority: Option<Address>,
    pub mint_address: Address,
    pub token_program: Address,
    pub mint_decimals: u8,
}

impl TokenContext {
    pub const fn new(
        mint_authority: Option<Address>,
        freeze_authority: Option<Address>,
        mint_address: Address,
        token_program: Address,
        mint_decimals: u8,
    ) -> Self {
        Self {
            mint_authority,
            freeze_authority,
            mint_address,
            token_program,
            mint_decimals,
        }
    }

    /// Creates a [`TokenContext`] from an on-chain mint account's owner and data.
    ///
    /// Validates that the owner is a recognized SPL token program and unpacks the mint to extract
    /// the authorities and decimals.
    pub fn from_account_data(
        mint_address: Address,
        owner: Address,
        data: &[u8],
    ) -> anyhow::Result<Self> {
        check_spl_token_program_account(&owner)?;
        let mint = Mint::unpack(&data[..Mint::LEN.min(data.len())])?;
        Ok(Self::new(
            mint.mint_authority.into(),
            mint.freeze_authority.into(),
            mint_address,
            owner,
            mint.decimals,
        ))
    }

    fn mint_authority(&self) -> anyhow::Result<&Address> {
        self.mint_authority
            .as_ref()
            .ok_or(anyhow!("Token doesn't have a mint authority."))
    }

    fn freeze_authority(&self) -> anyhow::Result<&Address> {
        self.freeze_authority
            .as_ref()
            .ok_or(anyhow!("Token doesn't have a freeze authority."))
    }

    pub fn get_ata_for(&self, owner: &Address) -> Address {
        get_associated_token_address_with_program_id(
            owner,
            &self.mint_address,
            &self.token_program,
        )
    }

    /// Builds the create-account and `initialize_mint2` instructions for this mint, funded by
    /// `funder` with `rent_lamports`.
    ///
    /// The mint address must sign the create-account instruction.
    pub fn create_mint(
        &self,
        funder: &Address,
        rent_lamports: u64,
    ) -> anyhow::Result<[Instruction; 2]> {
        let create = create_account(
            funder,
            &self.mint_address,
            rent_lamports,
            Mint::LEN as u64,
            &self.token_program,
        );
        let initialize = initialize_mint2(
            &self.token_program,
            &self.mint_address,
            self.mint_authority()?,
            self.freeze_authority.as_ref(),
            self.mint_decimals,
        )?;
        Ok([create, initialize])
    }

    /// Builds a create-ATA instruction for the given `owner`, funded by `funder`.
    pub fn create_ata(&self, funder: &Address, owner: &Address) -> Instruction {
        create_associated_token_account(funder, owner, &self.mint_address, &self.token_program)
    }

    /// Builds an idempotent create-ATA instruction for the given `owner`, funded by `funder`.
    pub fn create_ata_idempotent(&self, funder: &Address, owner: &Address) -> Instruction {
        create_associated_token_account_idempotent(
            funder,
            owner,
            &self.mint_address,
            &self.token_program,
        )
    }

    /// Builds a `mint_to_checked` instruction that mints `amount` tokens to the `owner`'s
    /// associated token account.
    ///
    /// To mint directly to an associated token account, use [TokenContext::mint_to_ata]
    pub fn mint_to_owner(&self, owner: &Address, amount: u64) -> anyhow::Result<Instruction> {
        self.mint_to_ata(&self.get_ata_for(owner), amount)
    }

    /// Builds a `mint_to_checked` instruction that mints `amount` tokens to `destination_ata`.
    pub fn mint_to_ata(
        &self,
        destination_ata: &Address,
        amount: u64,
    ) -> anyhow::Result<Instruction> {
        Ok(mint_to_checked(
            &self.token_program,
            &self.mint_address,
            destination_ata,
            self.mint_authority()?,
            &[],
            amount,
            self.mint_decimals,
        )?)
    }

    /// Builds a `transfer_checked` instruction between the two owners' associated token accounts.
    pub fn transfer(
        &self,
        source_owner: &Address,
        destination_owner: &Address,
        amount: u64,
    ) -> anyhow::Result<Instruction> {
        Ok(transfer_checked(
            &self.token_program,
            &self.get_ata_for(source_owner),
            &self.mint_address,
            &self.get_ata_for(destination_owner),
            source_owner,
            &[],
            amount,
            self.mint_decimals,
        )?)
    }

    pub fn freeze(&self, owner: &Address) -> anyhow::Result<Instruction> {
        Ok(freeze_account(
            &self.token_program,
            &self.get_ata_for(owner),
            &self.mint_address,
            self.freeze_authority()?,
            &[],
        )?)
    }

    pub fn thaw(&self, owner: &Address) -> anyhow::Result<Instruction> {
        Ok(thaw_account(
            &self.token_program,
            &self.get_ata_for(owner),
            &self.mint_address,
            self.freeze_authority()?,
            &[],
        )?)
    }

    /// Builds an `approve_checked` instruction letting `delegate` move up to `amount` tokens out
    /// of the `owner`'s associated token account.
    pub fn approve(
        &self,
        owner: &Address,
        delegate: &Address,
        amount: u64,
    ) -> anyhow::Result<Instruction> {
        Ok(approve_checked(
            &self.token_program,
            &self.get_ata_for(owner),
            &self.mint_address,
            delegate,
            owner,
            &[],
            amount,
            self.mint_decimals,
        )?)
    }

    pub fn revoke(&self, owner: &Address) -> anyhow::Result<Instruction> {
        Ok(revoke(
            &self.token_program,
            &self.get_ata_for(owner),
            owner,
            &[],
        )?)
    }

    pub fn burn(&self, owner: &Address, amount: u64) -> anyhow::Result<Instruction> {
        Ok(burn_checked(
            &self.token_program,
            &self.get_ata_for(owner),
            &self.mint_address,
            owner,
            &[],
            amount,
            self.mint_decimals,
        )?)
    }

    /// Builds a `close_account` instruction for the `owner`'s associated token account, sending
    /// its lamports to `destination`. The token account must hold no tokens.
    pub fn close_account(
        &self,
        owner: &Address,
        destination: &Address,
    ) -> anyhow::Result<Instruction> {
        Ok(close_account(
            &self.token_program,
            &self.get_ata_for(owner),
            destination,
            owner,
            &[],
        )?)
    }

    /// Builds a `set_authority` instruction for `account`, which is either the mint or a token
    /// account depending on `authority_type`. A `None` authority removes it permanently.
    pub fn set_authority(
        &self,
        account: &Address,
        current_authority: &Address,
        authority_type: AuthorityType,
        new_authority: Option<&Address>,
    ) -> anyhow::Result<Instruction> {
        Ok(set_authority(
            &self.token_program,
            account,
            new_authority,
            authority_type,
            current_authority,
            &[],
        )?)
    }

    /// Fetches and unpacks the `owner`'s associated token account.
    pub async fn get_token_account(
        &self,
        rpc: &CustomRpcClient,
        owner: &Address,
    ) -> anyhow::Result<TokenAccount> {
        let ata = self.get_ata_for(owner);
        let account = rpc.get_account(&ata).await?;
        TokenAccount::unpack(&account.data[..TokenAccount::LEN.min(account.data.len())])
            .with_context(|| format!("Couldn't unpack token account {ata}"))
    }

    pub async fn send_create_mint(
        &self,
        rpc: &CustomRpcClient,
        funder: &Keypair,
        mint: &Keypair,
    ) -> anyhow::Result<Signature> {
        let rent_lamports = rpc
            .client
            .get_minimum_balance_for_rent_exemption(Mint::LEN)
            .await
            .context("Couldn't fetch the mint's rent-exempt minimum")?;
        let instructions = self.create_mint(&funder.pubkey(), rent_lamports)?;
        rpc.send_and_confirm_txn(funder, &[mint], &instructions)
            .await
    }

    pub async fn send_create_ata(
        &self,
        rpc: &CustomRpcClient,
        funder: &Keypair,
        owner: &Address,
    ) -> anyhow::Result<Signature> {
        rpc.send_single_signer(funder, [self.create_ata_idempotent(&funder.pubkey(), owner)])
            .await
    }

    pub async fn send_mint_to_owner(
        &self,
        rpc: &CustomRpcClient,
        mint_authority: &Keypair,
        owner: &Address,
        amount: u64,
    ) -> anyhow::Result<Signature> {
        rpc.send_single_signer(mint_authority, [self.mint_to_owner(owner, amount)?])
            .await
    }

    pub async fn send_transfer(
        &self,
        rpc: &CustomRpcClient,
        source_owner: &Keypair,
        destination_owner: &Address,
        amount: u64,
    ) -> anyhow::Result<Signature> {
        let instruction = self.transfer(&source_owner.pubkey(), destination_owner, amount)?;
        rpc.send_single_signer(source_owner, [instruction]).await
    }

    pub async fn send_freeze(
        &self,
        rpc: &CustomRpcClient,
        freeze_authority: &Keypair,
        owner: &Address,
    ) -> anyhow::Result<Signature> {
        rpc.send_single_signer(freeze_authority, [self.freeze(owner)?])
            .await
    }

    pub async fn send_thaw(
        &self,
        rpc: &CustomRpcClient,
        freeze_authority: &Keypair,
        owner: &Address,
    ) -> anyhow::Result<Signature> {
        rpc.send_single_signer(freeze_authority, [self.thaw(owner)?])
            .await
    }

    pub async fn send_approve(
        &self,
        rpc: &CustomRpcClient,
        owner: &Keypair,
        delegate: &Address,
        amount: u64,
    ) -> anyhow::Result<Signature> {
        rpc.send_single_signer(owner, [self.approve(&owner.pubkey(), delegate, amount)?])
            .await
    }

    pub async fn send_revoke(
        &self,
        rpc: &CustomRpcClient,
        owner: &Keypair,
    ) -> anyhow::Result<Signature> {
        rpc.send_single_signer(owner, [self.revoke(&owner.pubkey())?])
            .await
    }

    pub async fn send_burn(
        &self,
        rpc: &CustomRpcClient,
        owner: &Keypair,
        amount: u64,
    ) -> anyhow::Result<Signature> {
        rpc.send_single_signer(owner, [self.burn(&owner.pubkey(), amount)?])
            .await
    }

    pub async fn send_close_account(
        &self,
        rpc: &CustomRpcClient,
        owner: &Keypair,
        destination: &Address,
    ) -> anyhow::Result<Signature> {
        rpc.send_single_signer(owner, [self.close_account(&owner.pubkey(), destination)?])
            .await
    }

    pub async fn send_set_authority(
        &self,
        rpc: &CustomRpcClient,
        account: &Address,
        current_authority: &Keypair,
        authority_type: AuthorityType,
        new_authority: Option<&Address>,
    ) -> anyhow::Result<Signature> {
        let instruction = self.set_authority(
            account,
            &current_authority.pubkey(),
            authority_type,
            new_authority,
        )?;
        rpc.send_single_signer(current_authority, [instruction])
            .await
    }
}
