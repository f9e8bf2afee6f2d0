use clap::Parser;
use miette::{Context, IntoDiagnostic, Result};
use tracing::info;

use fitrkr_seed::cli::menu::{self, Session};
use fitrkr_seed::cli::Cli;
use fitrkr_seed::core::{logging, Catalog, Config};

fn main() -> Result<()> {
    // Install miette's fancy error handler for startup failures
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let _cli = Cli::parse();

    let config = Config::load()?;
    logging::init(&config.log_file());

    let conn_string = config.conn_string()?;
    info!(database = conn_string, "opening catalog");

    let catalog = Catalog::open(conn_string)
        .into_diagnostic()
        .wrap_err("Failed to connect to database")?;

    let mut session = Session::new(catalog, config.data_dir());
    menu::run(&mut session)
}
