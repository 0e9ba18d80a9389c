use std::fmt;

use crate::common::{Error, Result};

// -------------------------------------------------------------------------------------------------
// Gates

/// Controlled-controlled-NOT over three positions of the value vector.
///
/// The output is `values[target] ^ (values[control1] & values[control2])`.
/// The target may coincide with one of the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Toffoli {
    pub control1: usize,
    pub control2: usize,
    pub target: usize,
}

impl Toffoli {
    pub fn new(control1: usize, control2: usize, target: usize) -> Self {
        debug_assert_ne!(control1, control2, "Toffoli controls must be distinct");
        Toffoli {
            control1,
            control2,
            target,
        }
    }

    #[inline]
    pub fn evaluate(&self, values: &[bool]) -> bool {
        let x = values[self.target];
        if values[self.control1] && values[self.control2] {
            !x
        } else {
            x
        }
    }

    /// Largest index this gate reads.
    pub(crate) fn max_index(&self) -> usize {
        self.control1.max(self.control2).max(self.target)
    }
}

impl fmt::Display for Toffoli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Toffoli(({}, {}) ! {})",
            self.control1, self.control2, self.target
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    // Source wire, its value is supplied by the caller.
    Input,

    Toffoli(Toffoli),
}

impl Gate {
    pub fn toffoli(control1: usize, control2: usize, target: usize) -> Self {
        Gate::Toffoli(Toffoli::new(control1, control2, target))
    }

    /// Computes the output of this gate from the values of earlier positions.
    ///
    /// Inputs have no rule of their own and yield `None`; the circuit
    /// evaluator fills them in from the boundary values.
    pub fn evaluate(&self, values: &[bool]) -> Option<bool> {
        match self {
            Gate::Input => None,
            Gate::Toffoli(t) => Some(t.evaluate(values)),
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, Gate::Input)
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Input => write!(f, "Input()"),
            Gate::Toffoli(t) => write!(f, "{}", t),
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Circuit

/// An ordered sequence of gates where every gate reads only earlier positions.
///
/// The leading run of `Input` gates are the boundary inputs. By convention the
/// last two positions are the outputs (see `oracle::verify`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Circuit {
    gates: Vec<Gate>,
}

impl Circuit {
    /// Wraps `gates` without checking the structural invariants.
    ///
    /// Only `try_new` rejects an `Input` placed after a Toffoli gate; such a
    /// circuit panics in `evaluate`.
    pub fn new(gates: Vec<Gate>) -> Self {
        Circuit { gates }
    }

    /// Like `new`, but rejects forward references, duplicated controls and
    /// inputs placed after the first non-input gate.
    pub fn try_new(gates: Vec<Gate>) -> Result<Self> {
        let mut seen_gate = false;
        for (position, gate) in gates.iter().enumerate() {
            match gate {
                Gate::Input if seen_gate => return Err(Error::LateInput { position }),
                Gate::Input => {}
                Gate::Toffoli(t) => {
                    seen_gate = true;
                    if t.control1 == t.control2 {
                        return Err(Error::DuplicateControl { position });
                    }
                    let index = t.max_index();
                    if index >= position {
                        return Err(Error::ForwardReference { position, index });
                    }
                }
            }
        }
        Ok(Circuit { gates })
    }

    /// A circuit made of `n` inputs and nothing else.
    pub fn with_inputs(n: usize) -> Self {
        Circuit {
            gates: vec![Gate::Input; n],
        }
    }

    /// Returns a new circuit with `gate` appended, leaving `self` untouched.
    pub fn append(&self, gate: Gate) -> Circuit {
        let mut gates = Vec::with_capacity(self.gates.len() + 1);
        gates.extend_from_slice(&self.gates);
        gates.push(gate);
        Circuit { gates }
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    pub fn num_inputs(&self) -> usize {
        self.gates.iter().take_while(|g| g.is_input()).count()
    }

    /// Simulates the circuit, producing one value per gate.
    ///
    /// Gates are trusted to read earlier positions only and inputs to form a
    /// leading run; a circuit breaking either panics here. Use `try_new` to
    /// catch them up front.
    pub fn evaluate(&self, inputs: &[bool]) -> Result<Vec<bool>> {
        let expected = self.num_inputs();
        if inputs.len() != expected {
            return Err(Error::InputArity {
                expected,
                actual: inputs.len(),
            });
        }

        let mut values = Vec::with_capacity(self.gates.len());
        for (i, gate) in self.gates.iter().enumerate() {
            let value = match gate {
                Gate::Input => inputs[i],
                Gate::Toffoli(t) => t.evaluate(&values),
            };
            values.push(value);
        }

        Ok(values)
    }

    /// The designated outputs of an evaluation: its last two values.
    pub fn outputs(values: &[bool]) -> Option<(bool, bool)> {
        match values {
            [.., x, y] => Some((*x, *y)),
            _ => None,
        }
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, gate) in self.gates.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", i, gate)?;
        }
        Ok(())
    }
}
