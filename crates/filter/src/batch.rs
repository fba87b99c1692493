//! The line-oriented batch protocol: a count line followed by that many
//! block-list domains, then a count line followed by that many queries, with
//! one `Bad`/`Good` verdict line written per query.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::checker::DomainChecker;
use crate::domain::Domain;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("expected a count line, got {line:?}")]
    MalformedCount {
        line: String,
        source: std::num::ParseIntError,
    },
    #[error("input ended after {received} of {expected} expected lines")]
    TruncatedInput { expected: usize, received: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Reads one line and parses it as a non-negative count. A missing line or
/// anything that does not parse is an error, never a silent zero.
pub fn read_count(input: &mut impl BufRead) -> Result<usize, BatchError> {
    let line = read_line(input)?.ok_or(BatchError::TruncatedInput {
        expected: 1,
        received: 0,
    })?;
    line.trim()
        .parse()
        .map_err(|source| BatchError::MalformedCount { line, source })
}

/// Reads exactly `count` domain lines. Running out of input before `count`
/// lines is an error rather than an under-read.
pub fn read_domains(input: &mut impl BufRead, count: usize) -> Result<Vec<Domain>, BatchError> {
    // The count is untrusted input, so only pre-allocate a bounded amount and
    // let the vector grow as lines actually arrive.
    let mut domains = Vec::with_capacity(count.min(1024));
    for received in 0..count {
        match read_line(input)? {
            Some(line) => domains.push(Domain::new(&line)),
            None => {
                return Err(BatchError::TruncatedInput {
                    expected: count,
                    received,
                })
            }
        }
    }
    Ok(domains)
}

/// Runs one whole batch: block-list in, checker up, verdicts out.
pub fn run(input: &mut impl BufRead, output: &mut impl Write) -> Result<(), BatchError> {
    let forbidden_count = read_count(input)?;
    let checker: DomainChecker = read_domains(input, forbidden_count)?.into_iter().collect();
    debug!(read = forbidden_count, retained = checker.len(), "block-list loaded");

    let query_count = read_count(input)?;
    let queries = read_domains(input, query_count)?;
    debug!(queries = query_count, "evaluating queries");

    for domain in &queries {
        let verdict = if checker.is_forbidden(domain) {
            "Bad"
        } else {
            "Good"
        };
        writeln!(output, "{verdict}")?;
    }
    Ok(())
}

/// Returns the next line without its trailing newline, or `None` at
/// end-of-input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}
