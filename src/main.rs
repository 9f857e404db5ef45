#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = apc_api::run().await {
        eprintln!("apc-api fatal: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
