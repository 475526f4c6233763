use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod profile;
mod worksheet;

#[cfg(test)]
mod tests;

use self::cli::Cli;

const DEFAULT_FILTER: &str =
    "kaku=info,kaku_core=info,kaku_layout=info,kaku_pdf=info,kaku_lang_japanese=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; everything has a default
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .init();

    let cli = Cli::parse();
    let config = profile::load_config(cli.config.as_deref())?;

    worksheet::run(&cli, &config).await?;

    Ok(())
}
