//! Pipeline entry point: `reconstruct <config.toml>`.

use std::path::Path;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use reconstruct::config::Config;
use reconstruct::pipeline;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args()
        .nth(1)
        .context("usage: reconstruct <config.toml>")?;
    let config = Config::load(Path::new(&config_path))?;

    pipeline::run(&config)
}
