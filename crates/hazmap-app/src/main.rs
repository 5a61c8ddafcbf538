use anyhow::Result;
use hazmap_core::Config;

#[tokio::main]
async fn main() -> Result<()> {
    hazmap_core::init()?;

    let (config, _validation) = Config::load_validated()?;

    tracing::info!("hazmap started");

    if let Err(e) = hazmap_app::run(&config).await {
        tracing::error!("Session ended with error: {}", e);
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }

    Ok(())
}
