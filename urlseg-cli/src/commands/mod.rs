//! CLI command implementations

use clap::Subcommand;

pub mod check;
pub mod config;
pub mod tokenize;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text into tokens, keeping URLs intact
    Tokenize(tokenize::TokenizeArgs),

    /// Test whether candidates are complete URLs
    Check(check::CheckArgs),

    /// Print the effective affix configuration
    Config(config::ConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) {
        match self {
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text     - One token per line");
                println!("  json     - JSON array of tokens with offsets, kind and URL flag");
                println!("  markdown - Markdown table of tokens");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn tokenize_cmd() -> Commands {
        Commands::Tokenize(tokenize::TokenizeArgs {
            input: vec!["test.txt".to_string()],
            output: None,
            format: tokenize::OutputFormat::Text,
            affixes: None,
            prefix: vec![],
            suffix: vec![],
            quiet: false,
            verbose: 0,
        })
    }

    #[test]
    fn test_commands_debug_format() {
        let debug_str = format!("{:?}", tokenize_cmd());
        assert!(debug_str.contains("Tokenize"));
        assert!(debug_str.contains("test.txt"));

        let list_cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Formats"));
    }

    #[test]
    fn test_enum_variants_completeness() {
        let commands = [
            tokenize_cmd(),
            Commands::Check(check::CheckArgs {
                candidates: vec!["www.red-stars.com".to_string()],
                json: false,
            }),
            Commands::Config(config::ConfigArgs {
                affixes: Some(PathBuf::from("marks.toml")),
            }),
            Commands::List {
                subcommand: ListCommands::Formats,
            },
        ];

        let names: Vec<&str> = commands
            .iter()
            .map(|cmd| match cmd {
                Commands::Tokenize(_) => "tokenize",
                Commands::Check(_) => "check",
                Commands::Config(_) => "config",
                Commands::List { .. } => "list",
            })
            .collect();
        assert_eq!(names, ["tokenize", "check", "config", "list"]);
    }
}
