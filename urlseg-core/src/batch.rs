//! Multi-document tokenization
//!
//! Documents are independent, so with the `parallel` feature they are spread
//! over the rayon pool. Output order always follows input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::tokenizer::{Token, Tokenizer};

/// Documents below this total size are always processed sequentially
pub const PARALLEL_THRESHOLD: usize = 64 * 1024;

/// Tokenize each document, returning one token list per document
pub fn tokenize_batch<'a, D>(tokenizer: &Tokenizer<'_>, documents: &'a [D]) -> Vec<Vec<Token<'a>>>
where
    D: AsRef<str> + Sync,
{
    let total: usize = documents.iter().map(|d| d.as_ref().len()).sum();

    #[cfg(feature = "parallel")]
    {
        if documents.len() > 1 && total >= PARALLEL_THRESHOLD {
            tracing::debug!(
                documents = documents.len(),
                bytes = total,
                threads = rayon::current_num_threads(),
                "tokenizing batch in parallel"
            );
            return documents
                .par_iter()
                .map(|doc| tokenizer.tokenize(doc.as_ref()))
                .collect();
        }
    }

    tracing::debug!(documents = documents.len(), bytes = total, "tokenizing batch");
    documents
        .iter()
        .map(|doc| tokenizer.tokenize(doc.as_ref()))
        .collect()
}
