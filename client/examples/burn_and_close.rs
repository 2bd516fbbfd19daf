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
    let owner = rpc.fund_new_account().await?;
    let mint = Keypair::new();

    let token = TokenContext::new(
        Some(owner.pubkey()),
        None,
        mint.pubkey(),
        spl_token_interface::ID,
        6,
    );
    token.send_create_mint(&rpc, &owner, &mint).await?;
    token.send_create_ata(&rpc, &owner, &owner.pubkey()).await?;
    token
        .send_mint_to_owner(&rpc, &owner, &owner.pubkey(), 5_000)
        .await?;

    // Burn everything so the token account can be closed.
    token.send_burn(&rpc, &owner, 5_000).await?;
    let emptied = token.get_token_account(&rpc, &owner.pubkey()).await?;
    print_kv!("Balance", emptied.amount);

    let before = rpc.get_balance(&owner.pubkey()).await?;
    token
        .send_close_account(&rpc, &owner, &owner.pubkey())
        .await?;
    let after = rpc.get_balance(&owner.pubkey()).await?;
    print_kv!("Reclaimed", format!("{before} -> {after}"));

    Ok(())
}
