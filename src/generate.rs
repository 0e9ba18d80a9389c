use std::mem;

use itertools::Itertools;
use tracing::debug;

use crate::circuit::{Circuit, Gate};
use crate::instrument::{self, E_GEN_COLOR};
use crate::util::branching_factor;

/// Input arity of the Fredkin gate.
pub const FREDKIN_INPUTS: usize = 3;

/// Breadth-first enumeration of Toffoli circuits.
///
/// Every circuit in the frontier is extended by every Toffoli gate whose
/// controls are an unordered pair of distinct earlier positions and whose
/// target is any earlier position. Children are emitted one per call to
/// `next`, ordered by prefix, then control pair (lexicographic), then target
/// (ascending). All circuits of length `L` come out before any of length
/// `L + 1`.
///
/// There is no pruning: round `k` holds `round_size(inputs, k)` circuits and
/// the frontier keeps all of them alive until the round is done.
#[derive(Debug, Clone)]
pub struct Generator {
    // Circuits of length `len`, being extended this round.
    frontier: Vec<Circuit>,
    // Circuits of length `len + 1` emitted so far.
    next_frontier: Vec<Circuit>,
    pairs: Vec<(usize, usize)>,
    len: usize,
    round: usize,

    // Cursor into frontier x pairs x targets.
    prefix: usize,
    pair: usize,
    target: usize,
}

/// A fresh generator starting from the three Fredkin inputs.
pub fn generate() -> Generator {
    Generator::new()
}

impl Generator {
    pub fn new() -> Self {
        Self::with_inputs(FREDKIN_INPUTS)
    }

    /// Starts from a circuit of `inputs` input gates. With fewer than two
    /// inputs there is no control pair and the generator is empty.
    pub fn with_inputs(inputs: usize) -> Self {
        Generator {
            frontier: vec![Circuit::with_inputs(inputs)],
            next_frontier: Vec::new(),
            pairs: control_pairs(inputs),
            len: inputs,
            round: 1,
            prefix: 0,
            pair: 0,
            target: 0,
        }
    }

    /// Current round, starting at 1. Round `k` emits circuits with `k`
    /// Toffoli gates.
    pub fn round(&self) -> usize {
        self.round
    }

    /// Number of circuits being extended in the current round.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Length of the circuits being extended in the current round.
    pub fn prefix_len(&self) -> usize {
        self.len
    }

    fn advance(&mut self) {
        instrument::begin("advance round", E_GEN_COLOR);
        self.frontier = mem::take(&mut self.next_frontier);
        self.len += 1;
        self.round += 1;
        self.pairs = control_pairs(self.len);
        self.prefix = 0;
        self.pair = 0;
        self.target = 0;
        debug!(
            round = self.round,
            frontier = self.frontier.len(),
            branching = branching_factor(self.len),
            "advancing generator"
        );
        instrument::end();
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Generator {
    type Item = Circuit;

    fn next(&mut self) -> Option<Circuit> {
        loop {
            if self.prefix >= self.frontier.len() {
                if self.next_frontier.is_empty() {
                    return None;
                }
                self.advance();
                continue;
            }
            if self.pair >= self.pairs.len() {
                self.pair = 0;
                self.prefix += 1;
                continue;
            }

            let (control1, control2) = self.pairs[self.pair];
            let gate = Gate::toffoli(control1, control2, self.target);
            let circuit = self.frontier[self.prefix].append(gate);

            self.target += 1;
            if self.target == self.len {
                self.target = 0;
                self.pair += 1;
            }

            self.next_frontier.push(circuit.clone());
            return Some(circuit);
        }
    }
}

fn control_pairs(len: usize) -> Vec<(usize, usize)> {
    (0..len).tuple_combinations().collect()
}
