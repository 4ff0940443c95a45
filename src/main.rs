use anyhow::Context;
use clap::Parser;
use prodman::api::HttpProductsApi;
use prodman::cli::Cli;
use prodman::{logging, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = cli.load_config()?;
    cli.apply(&mut config);
    config.validate()?;

    let log_path = logging::init_tracing(&config.logging)?;
    tracing::info!(
        base_url = %config.api.base_url,
        log_file = %log_path.display(),
        "Starting prodman v{}",
        env!("CARGO_PKG_VERSION")
    );

    let api = HttpProductsApi::new(&config.api.base_url)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime
        .block_on(ui::runtime::run(
            api,
            &config.api.base_url,
            config.ui.tick_rate(),
        ))
        .context("Terminal UI failed")?;

    Ok(())
}
