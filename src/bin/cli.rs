// src/bin/cli.rs
use clap::Parser;
use color_eyre::eyre::eyre;
use incident_scrape::{cli, log, loge};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(true);

    let args = cli::Cli::parse();
    cli::run(args).map_err(|e| {
        loge!("CLI: {e}");
        eyre!("{e}")
    })
}
