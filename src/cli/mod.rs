pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let result = match &cli.command {
        types::Commands::Generate { .. } => commands::handle_generate_command(&cli.command),
        types::Commands::Headings { .. } => commands::handle_headings_command(&cli.command),
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
