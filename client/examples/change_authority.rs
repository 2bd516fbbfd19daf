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
use spl_token_2022_interface::instruction::AuthorityType;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env()?;
    let rpc = CustomRpcClient::new(&config, None);
    let authority = rpc.fund_new_account().await?;
    let new_authority = Keypair::new();
    let mint = Keypair::new();

    let token = TokenContext::new(
        Some(authority.pubkey()),
        Some(authority.pubkey()),
        mint.pubkey(),
        spl_token_interface::ID,
        6,
    );
    token.send_create_mint(&rpc, &authority, &mint).await?;

    token
        .send_set_authority(
            &rpc,
            &token.mint_address,
            &authority,
            AuthorityType::MintTokens,
            Some(&new_authority.pubkey()),
        )
        .await?;
    // Removing the freeze authority is permanent.
    token
        .send_set_authority(
            &rpc,
            &token.mint_address,
            &authority,
            AuthorityType::FreezeAccount,
            None,
        )
        .await?;

    let account = rpc.get_account(&token.mint_address).await?;
    let updated =
        TokenContext::from_account_data(token.mint_address, account.owner, &account.data)?;
    print_kv!("Mint authority", format!("{:?}", updated.mint_authority));
    print_kv!("Freeze authority", format!("{:?}", updated.freeze_authority));

    Ok(())
}
