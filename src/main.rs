use clap::Parser;
use gatein::{
    cli::{init_verbose, Cli, Command, FULL_VERSION},
    commands::{export, view},
    utils::util::{handle_error_and_exit, Result},
};
use std::time;

fn runner() -> Result<()> {
    let cli = Cli::parse();
    init_verbose(&cli);
    log::trace!("CLI options set: {:?}", cli);

    log::info!(
        "Running {}-{} [{}]",
        env!("CARGO_PKG_NAME"),
        &**FULL_VERSION,
        cli.command.name()
    );

    let start_timer = time::Instant::now();
    match cli.command {
        Command::View(args) => {
            log::trace!("View arguments: {:#?}", args);
            view(args)?
        }
        Command::Export(args) => {
            log::trace!("Export arguments: {:#?}", args);
            export(args)?
        }
    }
    log::info!("Total execution time: {:.2?}", start_timer.elapsed());

    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_error_and_exit(e);
    }
}
