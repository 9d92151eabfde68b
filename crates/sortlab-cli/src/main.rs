use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    generate::{self, GenerateArgs},
    sort::{self, SortArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "sortlab", version, about = "Instrumented sorting algorithms CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sort a dataset file with one engine (or all three) and report
    /// elapsed time and step counts.
    Sort(SortArgs),
    /// Generate dataset files of uniformly random integers.
    Generate(GenerateArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Sort(args) => sort::run(&args),
        Command::Generate(args) => generate::run(&args),
    }
}
