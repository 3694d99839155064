mod commands;
mod print;
mod setup;

use clap::Parser;
use greenbook::error::Result;
use setup::{Cli, Commands};
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = commands::init_context(&cli);
    match cli.command {
        Some(Commands::List) | None => commands::handle_list(&ctx),
        Some(Commands::Add {
            name,
            phone,
            email,
            notes,
        }) => commands::handle_add(&mut ctx, name, phone, email, notes),
        Some(Commands::Edit {
            id,
            name,
            phone,
            email,
            notes,
        }) => commands::handle_edit(&mut ctx, id, name, phone, email, notes),
        Some(Commands::Delete { id }) => commands::handle_delete(&mut ctx, id),
    }
}

/// Logs go to stderr so they never mix with table output.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("greenbook=debug")
    } else {
        EnvFilter::new("warn")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
