use std::time::Duration;

use anyhow::Context;
use itertools::Itertools;
use record_store_interface::{
    error::RecordStoreError,
    instructions::InstructionTag,
};
use solana_account::Account;
use solana_address::Address;
use solana_client::{
    client_error::{
        ClientError,
        ClientErrorKind,
    },
    nonblocking::rpc_client::RpcClient,
    rpc_config::RpcTransactionConfig,
    rpc_request::{
        RpcError,
        RpcResponseErrorData,
    },
    rpc_response::RpcSimulateTransactionResult,
};
use solana_commitment_config::CommitmentConfig;
use solana_compute_budget_interface::ComputeBudgetInstruction;
use solana_instruction::Instruction;
use solana_instruction_error::InstructionError;
use solana_sdk::{
    message::Message,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    transaction::Transaction,
};
use solana_transaction_error::TransactionError;
use solana_transaction_status::UiTransactionEncoding;

use crate::{
    config::{
        ClientConfig,
        Cluster,
    },
    logs::{
        log_error,
        log_info,
        log_program_logs,
        log_signature,
        log_warning,
    },
};

pub const DEFAULT_FUND_AMOUNT: u64 = 10_000_000_000;
const AIRDROP_CONFIRMATION_ATTEMPTS: usize = 10;
const AIRDROP_POLL_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Clone, Debug)]
pub struct SendTransactionConfig {
    /// Prepends compute unit limit and price instructions when set.
    pub compute_budget: Option<u32>,
    /// Prints the confirmed transaction's program logs.
    pub debug_logs: Option<bool>,
}

impl Default for SendTransactionConfig {
    fn default() -> Self {
        SendTransactionConfig {
            compute_budget: Default::default(),
            debug_logs: Some(true),
        }
    }
}

/// A nonblocking RPC client bound to one [`ClientConfig`], with a single parametrized path for
/// building, signing, sending and confirming transactions.
pub struct CustomRpcClient {
    pub client: RpcClient,
    pub config: SendTransactionConfig,
    pub cluster: Cluster,
}

impl Default for CustomRpcClient {
    fn default() -> Self {
        Self::new(&ClientConfig::default(), None)
    }
}

impl CustomRpcClient {
    pub fn new(client_config: &ClientConfig, config: Option<SendTransactionConfig>) -> Self {
        Self {
            client: RpcClient::new_with_commitment(
                client_config.rpc_url(),
                client_config.commitment_config(),
            ),
            config: config.unwrap_or_default(),
            cluster: client_config.cluster,
        }
    }

    pub async fn get_balance(&self, address: &Address) -> anyhow::Result<u64> {
        self.client
            .get_balance(address)
            .await
            .with_context(|| format!("Couldn't retrieve the balance of {address}"))
    }

    pub async fn get_account(&self, address: &Address) -> anyhow::Result<Account> {
        self.client
            .get_account(address)
            .await
            .with_context(|| format!("Couldn't retrieve account {address}"))
    }

    /// Airdrops [`DEFAULT_FUND_AMOUNT`] lamports to `address` and waits a bounded amount of time
    /// for the airdrop to confirm.
    pub async fn fund_account(&self, address: &Address) -> anyhow::Result<()> {
        let airdrop_signature = self
            .client
            .request_airdrop(address, DEFAULT_FUND_AMOUNT)
            .await
            .context("Failed to request airdrop")?;

        for _ in 0..AIRDROP_CONFIRMATION_ATTEMPTS {
            if self
                .client
                .confirm_transaction(&airdrop_signature)
                .await
                .context("Couldn't confirm airdrop")?
            {
                return Ok(());
            }
            tokio::time::sleep(AIRDROP_POLL_INTERVAL).await;
        }

        log_warning("Airdrop unconfirmed", airdrop_signature);
        Ok(())
    }

    /// Creates a new keypair and funds it with [`CustomRpcClient::fund_account`].
    pub async fn fund_new_account(&self) -> anyhow::Result<Keypair> {
        let keypair = Keypair::new();
        self.fund_account(&keypair.pubkey()).await?;
        Ok(keypair)
    }

    pub async fn send_single_signer(
        &self,
        signer: &Keypair,
        instructions: impl AsRef<[Instruction]>,
    ) -> anyhow::Result<Signature> {
        self.send_and_confirm_txn(signer, &[], instructions.as_ref())
            .await
    }

    /// Builds a transaction from `instructions` paid for by `payer`, signs it with `payer` and
    /// `signers`, then sends and confirms it.
    ///
    /// Duplicate signers (including `payer` passed again in `signers`) are signed for once. On
    /// failure, custom record store errors are decoded from the preflight result and logged.
    pub async fn send_and_confirm_txn(
        &self,
        payer: &Keypair,
        signers: &[&Keypair],
        instructions: &[Instruction],
    ) -> anyhow::Result<Signature> {
        let instructions = [
            self.config.compute_budget.map_or(vec![], |budget| {
                vec![
                    ComputeBudgetInstruction::set_compute_unit_limit(budget),
                    ComputeBudgetInstruction::set_compute_unit_price(1),
                ]
            }),
            instructions.to_vec(),
        ]
        .concat();

        let blockhash = self
            .client
            .get_latest_blockhash()
            .await
            .context("Couldn't fetch the latest blockhash")?;

        let msg = Message::new(&instructions, Some(&payer.pubkey()));
        let all_signers = std::iter::once(payer)
            .chain(signers.iter().copied())
            .unique_by(|kp| kp.pubkey())
            .collect::<Vec<_>>();

        let mut tx = Transaction::new_unsigned(msg);
        tx.try_sign(&all_signers, blockhash)
            .context("Couldn't sign transaction")?;

        match self.client.send_and_confirm_transaction(&tx).await {
            Ok(sig) => {
                log_signature(self.cluster, sig);
                if matches!(self.config.debug_logs, Some(true)) {
                    match self.get_transaction_logs(&sig).await {
                        Ok(logs) => log_program_logs(&logs),
                        Err(e) => log_warning("Couldn't fetch transaction logs", e),
                    }
                }
                Ok(sig)
            }
            Err(error) => {
                log_instruction_error(&error, &instructions);
                log_info("Payer", payer.pubkey());

                Err(error).context("Failed transaction submission")
            }
        }
    }

    pub async fn get_transaction_logs(&self, sig: &Signature) -> anyhow::Result<Vec<String>> {
        let encoded = self
            .client
            .get_transaction_with_config(
                sig,
                RpcTransactionConfig {
                    encoding: Some(UiTransactionEncoding::Json),
                    commitment: Some(CommitmentConfig::confirmed()),
                    max_supported_transaction_version: Some(0),
                },
            )
            .await
            .context("Should be able to fetch transaction with config")?;

        let logs: Option<Vec<String>> = encoded
            .transaction
            .meta
            .and_then(|meta| meta.log_messages.into());

        Ok(logs.unwrap_or_default())
    }
}

/// Extracts the failing instruction's index and error from a client error, whether it came from
/// the preflight simulation or from the confirmed transaction.
pub fn instruction_error(error: &ClientError) -> Option<(u8, InstructionError)> {
    let transaction_error: TransactionError = match error.kind() {
        ClientErrorKind::RpcError(RpcError::RpcResponseError {
            data:
                RpcResponseErrorData::SendTransactionPreflightFailure(RpcSimulateTransactionResult {
                    err: Some(ui_err),
                    ..
                }),
            ..
        }) => ui_err.clone().into(),
        ClientErrorKind::TransactionError(transaction_error) => transaction_error.clone(),
        _ => return None,
    };

    match transaction_error {
        TransactionError::InstructionError(ixn_idx, ixn_error) => Some((ixn_idx, ixn_error)),
        _ => None,
    }
}

/// Decodes a [`RecordStoreError`] from a failed transaction, if a record store instruction
/// failed with one.
pub fn decode_record_store_error(
    error: &ClientError,
    instructions: &[Instruction],
) -> Option<RecordStoreError> {
    let (ixn_idx, InstructionError::Custom(code)) = instruction_error(error)? else {
        return None;
    };
    let instruction = instructions.get(ixn_idx as usize)?;
    if instruction.program_id != record_store_interface::program::ID {
        return None;
    }
    u8::try_from(code).ok().and_then(RecordStoreError::from_repr)
}

pub fn log_instruction_error(error: &ClientError, instructions: &[Instruction]) {
    let Some((ixn_idx, ixn_error)) = instruction_error(error) else {
        log_error("Client error", error);
        return;
    };

    let record_store_instruction = instructions
        .get(ixn_idx as usize)
        .filter(|ixn| ixn.program_id == record_store_interface::program::ID);

    match (record_store_instruction, &ixn_error) {
        (Some(instruction), InstructionError::Custom(_)) => {
            let tag = instruction
                .data
                .first()
                .and_then(|tag| InstructionTag::try_from(*tag).ok());
            match (tag, decode_record_store_error(error, instructions)) {
                (Some(tag), Some(record_store_error)) => {
                    log_error("Record store error", format!("({tag}, {record_store_error})"))
                }
                _ => log_error("Record store error", &ixn_error),
            }
        }
        _ => log_error(format!("Instruction {ixn_idx} error"), &ixn_error),
    }
}
