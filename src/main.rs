use anyhow::Context;
use clap::Parser;
use golrs::{cell, Args, CellSet, Sim, View};
use tracing::info;

pub fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("golrs=warn".parse()?),
        )
        .init();

    let args = Args::parse();
    let terminal = termion::terminal_size().context("failed to read the terminal size")?;
    let config = args.into_config(terminal)?;
    info!(?config, "starting");

    let actives = config.initial_cells(cell!(0, 0));
    let simulation = Sim::<CellSet>::spawn(actives, config.interval, config.running);
    let view = View::spawn(simulation.handle(), config.viewport);

    view.join().context("terminal view failed")?;
    simulation.join()?;
    Ok(())
}
