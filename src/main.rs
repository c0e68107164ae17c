// Module declarations
mod cli;
mod config;
mod headings;
mod toc;
mod utils;

fn main() {
    // Run the CLI
    cli::run();
}
