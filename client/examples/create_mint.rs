//! Creates a new SPL token mint owned by a freshly funded authority.

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
    let mint = Keypair::new();

    let token = TokenContext::new(
        Some(authority.pubkey()),
        Some(authority.pubkey()),
        mint.pubkey(),
        spl_token_interface::ID,
        9,
    );
    token.send_create_mint(&rpc, &authority, &mint).await?;

    let account = rpc.get_account(&token.mint_address).await?;
    let on_chain =
        TokenContext::from_account_data(token.mint_address, account.owner, &account.data)?;
    print_kv!("Mint", on_chain.mint_address);
    print_kv!("Decimals", on_chain.mint_decimals);
    print_kv!("Mint authority", format!("{:?}", on_chain.mint_authority));
    print_kv!("Freeze authority", format!("{:?}", on_chain.freeze_authority));

    Ok(())
}
