use std::io::Write;

use tracing::{info, instrument, trace};

use crate::circuit::Circuit;
use crate::common::Result;
use crate::instrument::{self as markers, E_SEARCH_COLOR};
use crate::oracle::{verify, Verdict};

#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Give up after this many candidates. The search is unbounded without it.
    pub limit: Option<usize>,
    /// Print every candidate and its mismatch, not just the accepted circuit.
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub circuit: Circuit,
    /// Number of candidates checked, the accepted one included.
    pub examined: usize,
}

/// Renders the first `count` circuits, each followed by a blank line.
#[instrument(level = "debug", skip(circuits, out))]
pub fn enumerate<I, W>(circuits: I, count: usize, out: &mut W) -> Result<usize>
where
    I: IntoIterator<Item = Circuit>,
    W: Write,
{
    let mut written = 0;
    for circuit in circuits.into_iter().take(count) {
        writeln!(out, "{}", circuit)?;
        writeln!(out)?;
        written += 1;
    }
    Ok(written)
}

/// Pulls circuits until one matches the Fredkin gate.
///
/// Returns `None` if the stream runs dry or `config.limit` is reached first.
#[instrument(level = "debug", skip(circuits, out))]
pub fn search<I, W>(
    circuits: I,
    config: &SearchConfig,
    out: &mut W,
) -> Result<Option<SearchOutcome>>
where
    I: IntoIterator<Item = Circuit>,
    W: Write,
{
    markers::begin("search", E_SEARCH_COLOR);
    let outcome = search_inner(circuits, config, out);
    markers::end();
    outcome
}

fn search_inner<I, W>(
    circuits: I,
    config: &SearchConfig,
    out: &mut W,
) -> Result<Option<SearchOutcome>>
where
    I: IntoIterator<Item = Circuit>,
    W: Write,
{
    let mut examined = 0;
    for circuit in circuits {
        if config.limit.map_or(false, |limit| examined >= limit) {
            info!(examined, "search limit reached");
            return Ok(None);
        }
        examined += 1;

        if config.verbose {
            writeln!(out, "{}", circuit)?;
        }
        match verify(&circuit)? {
            Verdict::Accepted => {
                if !config.verbose {
                    writeln!(out, "{}", circuit)?;
                }
                writeln!(out)?;
                info!(examined, gates = circuit.len(), "found circuit");
                return Ok(Some(SearchOutcome { circuit, examined }));
            }
            Verdict::Rejected(mismatch) => {
                trace!(examined, %mismatch, "rejected");
                if config.verbose {
                    writeln!(out, "{}", mismatch)?;
                    writeln!(out)?;
                }
            }
        }
    }
    info!(examined, "generator exhausted");
    Ok(None)
}
