use clap::Parser;
use climate_search::cli::{self, Args};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    cli::setup_logging(&args);

    match cli::run(&args) {
        Ok(_stats) => {
            // Success - the report has already been printed
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
