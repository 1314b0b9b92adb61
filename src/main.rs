use clap::Parser;
use colored::Colorize;
use kubo::cli::Cli;
use std::process;

fn main() {
    if let Err(e) = kubo::cli::run(Cli::parse()) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
