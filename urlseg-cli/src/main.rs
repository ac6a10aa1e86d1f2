//! Command-line interface for urlseg

use clap::Parser;
use std::process::ExitCode;
use urlseg_cli::commands::Commands;
use urlseg_cli::CliError;

/// URL-aware tokenizer
#[derive(Debug, Parser)]
#[command(name = "urlseg", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Tokenize(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Config(args) => args.execute(),
        Commands::List { subcommand } => {
            subcommand.execute();
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        // Results were already printed; only the exit status is left to report
        Err(err) if matches!(err.downcast_ref::<CliError>(), Some(CliError::NoMatch(_))) => {
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}
