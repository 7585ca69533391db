mod check;
mod completions;
mod cron;
mod generate;
mod page;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use cron::CronCommand;
use eyre::Result;
use generate::GenerateCommand;

fn exit_with(report: miette::Report) -> ! {
    eprintln!("{:?}", report);
    std::process::exit(1);
}

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for pagegen_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| exit_with(miette::Report::new(*e)))
    }
}

impl<T> UnwrapOrExit<T> for std::result::Result<T, pagegen_react::GenerateError> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| exit_with(miette::Report::new(e)))
    }
}

impl<T> UnwrapOrExit<T> for pagegen_cron::Result<T> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| exit_with(miette::Report::new(e)))
    }
}

#[derive(Parser)]
#[command(name = "pagegen")]
#[command(version)]
#[command(about = "Scaffold React table pages from column metadata")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Cron(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a page component from table metadata
    Generate(GenerateCommand),

    /// Validate table metadata and report lints without generating
    Check(CheckCommand),

    /// Encode or decode scheduler expressions
    Cron(CronCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
