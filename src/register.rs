use std::fmt;

use crate::circuit::Toffoli;
use crate::common::{Error, Result};

/// Toffoli gates acting in place on a fixed register of wires.
///
/// Unlike `Circuit`, positions name wires rather than gates: applying
/// `Toffoli(a, b, t)` overwrites wire `t` with `t ^ (a & b)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterCircuit {
    width: usize,
    gates: Vec<Toffoli>,
}

impl RegisterCircuit {
    pub fn try_new(width: usize, gates: Vec<Toffoli>) -> Result<Self> {
        for (position, gate) in gates.iter().enumerate() {
            if gate.control1 == gate.control2 {
                return Err(Error::DuplicateControl { position });
            }
            let index = gate.max_index();
            if index >= width {
                return Err(Error::WireOutOfRange {
                    position,
                    index,
                    width,
                });
            }
        }
        Ok(RegisterCircuit { width, gates })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn gates(&self) -> &[Toffoli] {
        &self.gates
    }

    /// Runs every gate in order and returns the final state of the register.
    pub fn apply(&self, inputs: &[bool]) -> Result<Vec<bool>> {
        if inputs.len() != self.width {
            return Err(Error::InputArity {
                expected: self.width,
                actual: inputs.len(),
            });
        }

        let mut wires = inputs.to_vec();
        for gate in &self.gates {
            wires[gate.target] = gate.evaluate(&wires);
        }
        Ok(wires)
    }
}

impl fmt::Display for RegisterCircuit {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple() {
        let circuit = RegisterCircuit::try_new(4, vec![Toffoli::new(0, 1, 2)]).unwrap();
        let output = circuit.apply(&[true, true, false, true]).unwrap();
        assert_eq!(output, vec![true, true, true, true]);
    }

    #[test]
    fn three_wires() {
        let circuit = RegisterCircuit::try_new(3, vec![Toffoli::new(0, 1, 2)]).unwrap();
        let output = circuit.apply(&[true, true, false]).unwrap();
        assert_eq!(output, vec![true, true, true]);
    }

    #[test]
    fn toffoli_is_an_involution() {
        let gate = Toffoli::new(0, 2, 1);
        let circuit = RegisterCircuit::try_new(3, vec![gate, gate]).unwrap();
        for inputs in crate::util::assignments(3) {
            assert_eq!(circuit.apply(&inputs).unwrap(), inputs);
        }
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(matches!(
            RegisterCircuit::try_new(3, vec![Toffoli::new(0, 1, 3)]),
            Err(Error::WireOutOfRange {
                position: 0,
                index: 3,
                width: 3
            })
        ));
        let circuit = RegisterCircuit::try_new(3, vec![]).unwrap();
        assert!(matches!(
            circuit.apply(&[true]),
            Err(Error::InputArity {
                expected: 3,
                actual: 1
            })
        ));
    }

    #[test]
    fn render() {
        let circuit =
            RegisterCircuit::try_new(3, vec![Toffoli::new(0, 1, 2), Toffoli::new(1, 2, 0)]).unwrap();
        assert_eq!(
            circuit.to_string(),
            "0: Toffoli((0, 1) ! 2)\n1: Toffoli((1, 2) ! 0)"
        );
    }
}
