use itertools::Itertools;
use num_integer::binomial;

/// All assignments of `n` booleans, `true` before `false`, lexicographically.
///
/// For `n = 3` this yields `(T,T,T), (T,T,F), (T,F,T), ... (F,F,F)`.
pub fn assignments(n: usize) -> impl Iterator<Item = Vec<bool>> {
    (0..n).map(|_| [true, false]).multi_cartesian_product()
}

/// Number of Toffoli gates that can be appended to a circuit of `len` gates:
/// an unordered pair of distinct controls times any target.
#[inline]
pub fn branching_factor(len: usize) -> usize {
    if len < 2 {
        return 0;
    }
    binomial(len, 2) * len
}

/// Number of circuits the generator emits in `round` (starting at 1) when it
/// starts from `inputs` input gates. `None` on overflow.
pub fn round_size(inputs: usize, round: usize) -> Option<usize> {
    (0..round).try_fold(1usize, |acc, k| acc.checked_mul(branching_factor(inputs + k)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignments() {
        let all: Vec<Vec<bool>> = assignments(3).collect();
        assert_eq!(all.len(), 8);
        assert_eq!(all[0], vec![true, true, true]);
        assert_eq!(all[1], vec![true, true, false]);
        assert_eq!(all[2], vec![true, false, true]);
        assert_eq!(all[7], vec![false, false, false]);
        assert!(all.iter().all_unique());
    }

    #[test]
    fn test_branching_factor() {
        assert!(branching_factor(0) == 0);
        assert!(branching_factor(1) == 0);
        assert!(branching_factor(2) == 2);
        assert!(branching_factor(3) == 9);
        assert!(branching_factor(4) == 24);
        assert!(branching_factor(5) == 50);
    }

    #[test]
    fn test_round_size() {
        assert_eq!(round_size(3, 0), Some(1));
        assert_eq!(round_size(3, 1), Some(9));
        assert_eq!(round_size(3, 2), Some(9 * 24));
        assert_eq!(round_size(3, 3), Some(9 * 24 * 50));
        assert_eq!(round_size(3, 64), None);
    }
}
