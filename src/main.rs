use anyhow::Context;
use log::info;

use pokedex::{build_rocket, config::DexConfig, dex::Dex};

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DexConfig::load()?;
    info!("Loading dataset from {}", config.data_dir.display());
    let dex = Dex::load(&config).context("Failed to load the pokedex dataset")?;

    let _rocket = build_rocket(dex)?
        .launch()
        .await
        .context("Server failed")?;

    Ok(())
}
