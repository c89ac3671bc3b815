use clap::Parser;

mod app;
mod catalog;
mod cli;
mod config;
mod control;
mod error;
mod logging;
mod mpris;
mod runtime;
mod transport;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::Args::parse();
    runtime::run(args)
}
