use client::{
    config::ClientConfig,
    context::token::TokenContext,
    logs::log_warning,
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
    let holder = rpc.fund_new_account().await?;
    let mint = Keypair::new();

    let token = TokenContext::new(
        Some(authority.pubkey()),
        Some(authority.pubkey()),
        mint.pubkey(),
        spl_token_interface::ID,
        6,
    );
    token.send_create_mint(&rpc, &authority, &mint).await?;
    token.send_create_ata(&rpc, &authority, &holder.pubkey()).await?;
    token.send_create_ata(&rpc, &authority, &authority.pubkey()).await?;
    token
        .send_mint_to_owner(&rpc, &authority, &holder.pubkey(), 1_000)
        .await?;

    token.send_freeze(&rpc, &authority, &holder.pubkey()).await?;
    let frozen = token.get_token_account(&rpc, &holder.pubkey()).await?;
    print_kv!("State", format!("{:?}", frozen.state));

    if token
        .send_transfer(&rpc, &holder, &authority.pubkey(), 1)
        .await
        .is_err()
    {
        log_warning("Transfer rejected", "the holder's token account is frozen");
    }

    token.send_thaw(&rpc, &authority, &holder.pubkey()).await?;
    let thawed = token.get_token_account(&rpc, &holder.pubkey()).await?;
    print_kv!("State", format!("{:?}", thawed.state));
    token
        .send_transfer(&rpc, &holder, &authority.pubkey(), 1)
        .await?;

    Ok(())
}
