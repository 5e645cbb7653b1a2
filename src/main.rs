mod app;
mod color;
mod config;
mod data;
mod present;
mod state;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;

use config::{Cli, Config};
use present::{NativePresenter, Presenter};

/// Load the configured file and hand the table to `presenter`.
fn run(config: &Config, presenter: &mut dyn Presenter) -> Result<()> {
    let table = data::load_table(&config.input)
        .with_context(|| format!("loading points from {}", config.input.display()))?;
    presenter.present(table, config.mode)
}

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::resolve(Cli::parse())?;
    log::debug!("{config:?}");

    let mut presenter = NativePresenter {
        source: config.input.clone(),
        show_labels: config.show_labels,
    };
    run(&config, &mut presenter).inspect_err(|e| log::error!("{e:#}"))
}
