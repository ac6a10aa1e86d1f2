//! Tokenize command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use urlseg_core::{tokenize_batch, Tokenizer};

use crate::affix_source::AffixSource;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Input files or patterns (supports glob, `-` reads stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Affix configuration file (TOML) replacing the built-in marks
    #[arg(long, value_name = "FILE")]
    pub affixes: Option<PathBuf>,

    /// Extra prefix mark, may be repeated
    #[arg(long, value_name = "CHAR")]
    pub prefix: Vec<char>,

    /// Extra suffix mark, may be repeated
    #[arg(long, value_name = "CHAR")]
    pub suffix: Vec<char>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one token per line
    Text,
    /// JSON array of tokens with metadata
    Json,
    /// Markdown table of tokens
    Markdown,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting tokenization");
        log::debug!("Arguments: {:?}", self);

        let source = AffixSource::from_arg(self.affixes.as_ref());
        let rules = source.load_rules(&self.prefix, &self.suffix)?;
        let tokenizer = Tokenizer::with_affixes(&rules);

        let inputs = resolve_patterns(&self.input)?;
        log::info!("Found {} input(s) to process", inputs.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(inputs.len() as u64);

        let mut texts = Vec::with_capacity(inputs.len());
        for input in &inputs {
            let text = FileReader::read_source(input)?;
            progress.file_read(&input.display_name(), text.len());
            texts.push(text);
        }

        progress.set_stage("Tokenizing");
        let batches = tokenize_batch(&tokenizer, &texts);

        progress.set_stage("Writing output");
        let mut formatter = self.create_formatter()?;
        let multiple = inputs.len() > 1;
        let mut total = 0;
        for (input, tokens) in inputs.iter().zip(&batches) {
            let name = input.display_name();
            if multiple {
                formatter.begin_source(&name)?;
            }
            for token in tokens {
                formatter.format_token(token)?;
            }
            log::debug!("{}: {} tokens", name, tokens.len());
            total += tokens.len();
        }

        formatter.finish()?;
        progress.finish();

        log::info!("Emitted {} tokens from {} input(s)", total, inputs.len());
        Ok(())
    }

    fn create_formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when run from tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
