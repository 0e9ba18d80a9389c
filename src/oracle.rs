use std::fmt;

use tracing::instrument;

use crate::circuit::{Circuit, Gate};
use crate::common::Result;
use crate::instrument::{self as markers, E_CHECK_COLOR};
use crate::util::assignments;

/// Conditional swap: exchanges `x` and `y` when `switch` is set.
#[inline]
pub fn fredkin(switch: bool, x: bool, y: bool) -> (bool, bool) {
    if switch {
        (y, x)
    } else {
        (x, y)
    }
}

/// The first assignment on which a circuit disagrees with the oracle.
///
/// Renders as `(switch, x, y): (expected) != (actual)` with lowercase
/// `true`/`false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub inputs: (bool, bool, bool),
    pub expected: (bool, bool),
    pub actual: (bool, bool),
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}: {:?} != {:?}",
            self.inputs, self.expected, self.actual
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(Mismatch),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Compares `circuit` with the Fredkin gate on all eight inputs.
///
/// The inputs are fed as `(switch, x, y)` in the order of `util::assignments`,
/// and the last two values of the evaluation are always taken as the outputs,
/// whatever the shape of the circuit. Stops at the first disagreement.
///
/// Fails only if the circuit does not have exactly three inputs.
#[instrument(level = "trace", skip_all)]
pub fn verify(circuit: &Circuit) -> Result<Verdict> {
    markers::begin("verify", E_CHECK_COLOR);
    let verdict = verify_inner(circuit);
    markers::end();
    verdict
}

fn verify_inner(circuit: &Circuit) -> Result<Verdict> {
    for inputs in assignments(3) {
        let (switch, x, y) = (inputs[0], inputs[1], inputs[2]);
        let expected = fredkin(switch, x, y);
        let values = circuit.evaluate(&inputs)?;

        // Three inputs guarantee at least two values.
        let actual = Circuit::outputs(&values).unwrap_or_default();
        if expected != actual {
            return Ok(Verdict::Rejected(Mismatch {
                inputs: (switch, x, y),
                expected,
                actual,
            }));
        }
    }
    Ok(Verdict::Accepted)
}

pub fn check(circuit: &Circuit) -> Result<bool> {
    Ok(verify(circuit)?.is_accepted())
}

/// The first circuit the search accepts: three Toffoli gates, each
/// conditioned on the switch.
///
/// ```text
/// 3 = y ^ (switch & x)
/// 4 = x ^ (switch & 3)
/// 5 = 3 ^ (switch & y)
/// ```
pub fn reference_circuit() -> Circuit {
    Circuit::new(vec![
        Gate::Input,
        Gate::Input,
        Gate::Input,
        Gate::toffoli(0, 1, 2),
        Gate::toffoli(0, 3, 1),
        Gate::toffoli(0, 2, 3),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    // Longer, built from x ^ y: 3 = x & !y, 4 = x | y, 5 = x ^ y.
    fn xor_swap_circuit() -> Circuit {
        Circuit::new(vec![
            Gate::Input,
            Gate::Input,
            Gate::Input,
            Gate::toffoli(1, 2, 1),
            Gate::toffoli(1, 3, 2),
            Gate::toffoli(1, 2, 4),
            Gate::toffoli(0, 5, 1),
            Gate::toffoli(0, 5, 2),
        ])
    }

    #[test]
    fn oracle() {
        assert_eq!(fredkin(false, true, false), (true, false));
        assert_eq!(fredkin(true, true, false), (false, true));
        assert_eq!(fredkin(true, true, true), (true, true));
        assert_eq!(fredkin(false, false, true), (false, true));
    }

    #[test]
    fn no_false_accept() {
        let verdict = verify(&Circuit::with_inputs(3)).unwrap();
        let expected = Mismatch {
            inputs: (true, true, false),
            expected: (false, true),
            actual: (true, false),
        };
        assert_eq!(verdict, Verdict::Rejected(expected));
        assert_eq!(
            expected.to_string(),
            "(true, true, false): (false, true) != (true, false)"
        );
    }

    #[test]
    fn accepts_reference() {
        for circuit in [reference_circuit(), xor_swap_circuit()] {
            assert!(Circuit::try_new(circuit.gates().to_vec()).is_ok());
            assert!(check(&circuit).unwrap());
        }
    }

    #[test]
    fn soundness() {
        // The checker agrees with a direct comparison over all inputs.
        let reference = reference_circuit();
        let mut candidates: Vec<Circuit> = crate::generate::generate().take(300).collect();
        candidates.push(reference);
        candidates.push(xor_swap_circuit());
        for circuit in candidates {
            let direct = assignments(3).all(|v| {
                let values = circuit.evaluate(&v).unwrap();
                Circuit::outputs(&values) == Some(fredkin(v[0], v[1], v[2]))
            });
            assert_eq!(check(&circuit).unwrap(), direct);
        }
    }

    #[test]
    fn breaking_one_gate_rejects() {
        let mut gates = reference_circuit().gates().to_vec();
        gates[5] = Gate::toffoli(0, 2, 1);
        let verdict = verify(&Circuit::new(gates)).unwrap();
        assert!(!verdict.is_accepted());
    }

    #[test]
    fn wrong_arity_propagates() {
        let circuit = Circuit::with_inputs(4);
        assert!(matches!(
            check(&circuit),
            Err(Error::InputArity {
                expected: 4,
                actual: 3
            })
        ));
    }
}
