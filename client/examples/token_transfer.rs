use client::{
    config::ClientConfig,
    context::token::TokenContext,
    print_kv,
    transactions::CustomRpcClient,
};
use solana_sdk::signature::{
    Keypair,
    Signer,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env()?;
    let rpc = CustomRpcClient::new(&config, None);
    let authority = rpc.fund_new_account().await?;
    let recipient = Keypair::new();
    let mint = Keypair::new();

    let token = TokenContext::new(
        Some(authority.pubkey()),
        None,
        mint.pubkey(),
        spl_token_interface::ID,
        6,
    );
    token.send_create_mint(&rpc, &authority, &mint).await?;
    token.send_create_ata(&rpc, &authority, &authority.pubkey()).await?;
    token.send_create_ata(&rpc, &authority, &recipient.pubkey()).await?;
    token
        .send_mint_to_owner(&rpc, &authority, &authority.pubkey(), 1_000_000)
        .await?;

    token
        .send_transfer(&rpc, &authority, &recipient.pubkey(), 400_000)
        .await?;

    let sender = token.get_token_account(&rpc, &authority.pubkey()).await?;
    let receiver = token.get_token_account(&rpc, &recipient.pubkey()).await?;
    print_kv!("Sender", sender.amount);
    print_kv!("Recipient", receiver.amount);

    Ok(())
}
