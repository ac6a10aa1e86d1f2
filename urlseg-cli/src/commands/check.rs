//! Check command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use urlseg_core::matches_url;

use crate::error::CliError;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Candidate strings to test
    #[arg(value_name = "CANDIDATE", required = true)]
    pub candidates: Vec<String>,

    /// Print results as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Outcome for one candidate
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CheckResult<'a> {
    /// The candidate as given
    pub candidate: &'a str,
    /// Whether the whole candidate is a URL
    pub url: bool,
}

impl CheckArgs {
    /// Match every candidate
    pub fn results(&self) -> Vec<CheckResult<'_>> {
        self.candidates
            .iter()
            .map(|candidate| CheckResult {
                candidate,
                url: matches_url(candidate),
            })
            .collect()
    }

    /// Execute the check command; fails with [`CliError::NoMatch`] if any candidate is rejected
    pub fn execute(&self) -> Result<()> {
        let results = self.results();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&results)?);
        } else {
            for result in &results {
                let verdict = if result.url { "match" } else { "no-match" };
                println!("{verdict}\t{}", result.candidate);
            }
        }

        let misses = results.iter().filter(|r| !r.url).count();
        if misses > 0 {
            return Err(CliError::NoMatch(misses).into());
        }
        Ok(())
    }
}
