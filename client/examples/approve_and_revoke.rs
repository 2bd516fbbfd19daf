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
    let delegate = Keypair::new();
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
        .send_mint_to_owner(&rpc, &owner, &owner.pubkey(), 10_000)
        .await?;

    token
        .send_approve(&rpc, &owner, &delegate.pubkey(), 2_500)
        .await?;
    let approved = token.get_token_account(&rpc, &owner.pubkey()).await?;
    print_kv!("Delegate", format!("{:?}", approved.delegate));
    print_kv!("Delegated", approved.delegated_amount);

    token.send_revoke(&rpc, &owner).await?;
    let revoked = token.get_token_account(&rpc, &owner.pubkey()).await?;
    print_kv!("Delegate", format!("{:?}", revoked.delegate));

    Ok(())
}
