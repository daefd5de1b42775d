//! Fetcher entry point: prints the warm-up helpers, then the three sample
//! fetches.

use std::io::{self, Write};

use color_eyre::eyre::{Result, WrapErr, eyre};
use fetcher::bootstrap::build_showcase;
use fetcher::config::FetcherSettings;
use fetcher::domain::PrimerReport;
use fetcher::inbound::console::{render_primer, render_showcase};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let settings =
        FetcherSettings::load().map_err(|error| eyre!("failed to load settings: {error}"))?;
    init_tracing(settings.log_json);

    let primer = PrimerReport::with_defaults().await;
    render_primer(&primer, &mut io::stdout().lock()).wrap_err("failed to write primer")?;

    let service = build_showcase(&settings).wrap_err("failed to wire fetch adapters")?;
    let report = service.run().await;

    let mut stdout = io::stdout().lock();
    render_showcase(&report, &mut stdout).wrap_err("failed to write fetch results")?;
    stdout.flush().wrap_err("failed to flush stdout")
}

fn init_tracing(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}
