//! Generic backtracking search.
//!
//! A [`Strategy`] describes the problem: which values may extend a partial solution, and
//! when a partial solution is complete. [`backtrack`] walks the search tree depth-first
//! with one explicit candidate stack per position and hands every complete solution to a
//! callback. Complete solutions are never extended further.
//!
//! ```
//! use combalg::backtrack::{backtrack, Strategy};
//!
//! /// Binary strings of length `n` without two adjacent ones.
//! struct NoAdjacentOnes(usize);
//!
//! impl Strategy<u8> for NoAdjacentOnes {
//!     fn candidates(&mut self, partial: &[u8]) -> Vec<u8> {
//!         match partial.last() {
//!             Some(&1) => vec![0],
//!             _ => vec![0, 1],
//!         }
//!     }
//!
//!     fn is_solution(&self, partial: &[u8]) -> bool {
//!         partial.len() == self.0
//!     }
//! }
//!
//! let mut found = Vec::new();
//! let count = backtrack(&mut NoAdjacentOnes(3), |s| found.push(s.to_vec()));
//! assert_eq!(count, 5);
//! assert_eq!(found[0], vec![0, 0, 0]);
//! ```

use log::{debug, trace};

/// Problem description for [`backtrack`].
pub trait Strategy<T> {
    /// Values that may follow `partial`, in the order they should be tried.
    ///
    /// An empty list means `partial` is a dead end.
    fn candidates(&mut self, partial: &[T]) -> Vec<T>;

    /// Whether `partial` is a complete solution.
    fn is_solution(&self, partial: &[T]) -> bool;
}

/// Runs the search, calling `accumulate` on every solution in the order found.
///
/// Returns the number of solutions.
pub fn backtrack<T, S, F>(strategy: &mut S, mut accumulate: F) -> usize
where
    S: Strategy<T> + ?Sized,
    F: FnMut(&[T]),
{
    let mut solution: Vec<T> = Vec::new();
    // stacks[i] holds the untried candidates for position i, next one on top.
    let mut stacks: Vec<Vec<T>> = Vec::new();
    let mut found = 0;

    if strategy.is_solution(&solution) {
        accumulate(&solution);
        return 1;
    }
    stacks.push(reversed(strategy.candidates(&solution)));

    while let Some(top) = stacks.last_mut() {
        let Some(c) = top.pop() else {
            trace!("no candidates left at position {}", solution.len());
            stacks.pop();
            solution.pop();
            continue;
        };
        solution.push(c);
        if strategy.is_solution(&solution) {
            found += 1;
            accumulate(&solution);
            solution.pop();
        } else {
            stacks.push(reversed(strategy.candidates(&solution)));
        }
    }

    debug!("backtrack: {} solutions", found);
    found
}

fn reversed<T>(mut candidates: Vec<T>) -> Vec<T> {
    candidates.reverse();
    candidates
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    /// Vectors over 1..=9 of a given length whose sum is a multiple of `modulus`.
    struct SumMultipleOf {
        len: usize,
        modulus: usize,
    }

    impl Strategy<usize> for SumMultipleOf {
        fn candidates(&mut self, partial: &[usize]) -> Vec<usize> {
            let sum: usize = partial.iter().sum();
            if partial.len() + 1 == self.len {
                (1..=9).filter(|c| (sum + c) % self.modulus == 0).collect()
            } else {
                (1..=9).collect()
            }
        }

        fn is_solution(&self, partial: &[usize]) -> bool {
            partial.len() == self.len
        }
    }

    #[test]
    fn test_sum_multiple_of() {
        let mut strategy = SumMultipleOf { len: 4, modulus: 5 };
        let mut solutions = Vec::new();
        let count = backtrack(&mut strategy, |s| solutions.push(s.to_vec()));
        let expected = (1..=9usize)
            .flat_map(|a| (1..=9).flat_map(move |b| (1..=9).flat_map(move |c| (1..=9).map(move |d| [a, b, c, d]))))
            .filter(|v| v.iter().sum::<usize>() % 5 == 0)
            .count();
        println!("{} solutions", count);
        assert_eq!(count, expected);
        assert_eq!(solutions.len(), count);
        assert!(solutions.iter().all(|s| s.len() == 4 && s.iter().sum::<usize>() % 5 == 0));
        // Candidates are tried in the given order, so solutions come out lexicographically.
        assert!(solutions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(solutions[0], vec![1, 1, 1, 2]);
    }

    /// Permutations of `0..n` as a backtracking problem.
    struct Permutations(usize);

    impl Strategy<usize> for Permutations {
        fn candidates(&mut self, partial: &[usize]) -> Vec<usize> {
            (0..self.0).filter(|x| !partial.contains(x)).collect()
        }

        fn is_solution(&self, partial: &[usize]) -> bool {
            partial.len() == self.0
        }
    }

    #[test]
    fn test_permutations_by_backtracking() {
        assert_eq!(backtrack(&mut Permutations(5), |_| {}), 120);
        let mut first = None;
        backtrack(&mut Permutations(3), |s| {
            first.get_or_insert_with(|| s.to_vec());
        });
        assert_eq!(first, Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_dead_ends_and_empty_solution() {
        struct Nothing;
        impl Strategy<u8> for Nothing {
            fn candidates(&mut self, _partial: &[u8]) -> Vec<u8> {
                Vec::new()
            }
            fn is_solution(&self, _partial: &[u8]) -> bool {
                false
            }
        }
        assert_eq!(backtrack(&mut Nothing, |_| panic!("no solutions expected")), 0);

        struct Empty;
        impl Strategy<u8> for Empty {
            fn candidates(&mut self, _partial: &[u8]) -> Vec<u8> {
                vec![1]
            }
            fn is_solution(&self, _partial: &[u8]) -> bool {
                true
            }
        }
        let mut seen = Vec::new();
        assert_eq!(backtrack(&mut Empty, |s| seen.push(s.to_vec())), 1);
        assert_eq!(seen, vec![Vec::<u8>::new()]);
    }
}
