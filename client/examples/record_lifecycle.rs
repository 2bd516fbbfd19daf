//! Initializes a fresh owner's record, grows it, then shrinks it to multi-byte UTF-8.

use client::{
    config::ClientConfig,
    context::record::RecordContext,
    logs::{
        log_divider,
        LogColor,
    },
    print_kv,
    transactions::CustomRpcClient,
};
use solana_sdk::signature::Signer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env()?;
    let rpc = CustomRpcClient::new(&config, None);
    let owner = rpc.fund_new_account().await?;
    let record = RecordContext::new(owner.pubkey());

    print_kv!("Owner", record.owner);
    print_kv!("Record", record.record, LogColor::Highlight);

    record.send_initialize(&rpc, &owner).await?;
    let initial = record.view_record(&rpc).await?;
    print_kv!("Initial", format!("{:?}", initial.as_utf8()?));

    for new_record in ["The quick brown form jumps over the lazy dog", "片云天共远，永夜月同孤"] {
        log_divider();
        let balance_before = rpc.get_balance(&record.owner).await?;
        record.send_update(&rpc, &owner, new_record.as_bytes()).await?;
        let balance_after = rpc.get_balance(&record.owner).await?;

        let view = record.view_record(&rpc).await?;
        print_kv!("Record", format!("{:?}", view.as_utf8()?), LogColor::Highlight);
        print_kv!("Bytes", view.data.len());
        print_kv!(
            "Owner balance",
            format!("{balance_before} -> {balance_after}")
        );
        print_kv!(
            "Slot balance",
            rpc.get_balance(&record.record).await?
        );
    }

    Ok(())
}
