use anyhow::Result;

mod app;
mod config;
mod state;
mod ui;

fn main() -> Result<()> {
    let config = config::Config::from_env();
    config::init_logging(&config)?;
    log::info!("starting with {config:?}");

    app::run::run(&config)
}
