//! Integer partitions and set partitions.
//!
//! [`integer_partitions`] implements algorithm ZS1 of Zoghbi and Stojmenovic: partitions
//! are produced as non-increasing part lists in reverse lexicographic order, from `[n]`
//! down to `[1, 1, ..., 1]`.
//!
//! [`set_partitions`] follows Nijenhuis and Wilf: a partition of `{0, ..., n-1}` is kept as
//! a [`SetPartition`], i.e. the class label of every index (in restricted growth form)
//! together with the population of every class, and the successor of a partition is
//! computed in place.

use log::debug;

/// Returns an iterator over all partitions of `n`, in reverse lexicographic order.
///
/// ```
/// use combalg::partition::integer_partitions;
///
/// let all: Vec<_> = integer_partitions(4).collect();
/// assert_eq!(all, vec![vec![4], vec![3, 1], vec![2, 2], vec![2, 1, 1], vec![1, 1, 1, 1]]);
/// ```
pub fn integer_partitions(n: usize) -> IntegerPartitions {
    debug!("integer_partitions(n = {})", n);
    IntegerPartitions::new(n)
}

#[derive(Debug, Clone)]
pub struct IntegerPartitions {
    /// Parts; everything from position `h` on is 1.
    x: Vec<usize>,
    /// Number of parts.
    m: usize,
    /// Number of parts greater than 1.
    h: usize,
    done: bool,
}

impl IntegerPartitions {
    fn new(n: usize) -> Self {
        let mut x = vec![1; n];
        let (m, h) = match x.first_mut() {
            Some(first) => {
                *first = n;
                (1, 1)
            }
            None => (0, 0),
        };
        Self { x, m, h, done: false }
    }

    /// Parts of the current partition, largest first.
    pub fn current(&self) -> &[usize] {
        &self.x[..self.m]
    }

    /// Moves to the next partition. Returns `false` if the current one is the last.
    pub fn advance(&mut self) -> bool {
        if self.x.first().map_or(true, |&x0| x0 == 1) {
            return false;
        }
        let x = &mut self.x;
        if x[self.h - 1] == 2 {
            self.m += 1;
            x[self.h - 1] = 1;
            self.h -= 1;
        } else {
            let r = x[self.h - 1] - 1;
            let mut t = self.m - self.h + 1;
            x[self.h - 1] = r;
            while t >= r {
                x[self.h] = r;
                t -= r;
                self.h += 1;
            }
            self.m = if t == 0 { self.h } else { self.h + 1 };
            if t > 1 {
                x[self.h] = t;
                self.h += 1;
            }
        }
        true
    }
}

impl Iterator for IntegerPartitions {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let parts = self.current().to_vec();
        self.done = !self.advance();
        Some(parts)
    }
}

/// Partition of the index set `{0, ..., n-1}` into classes.
///
/// # Invariants
///
/// - `labels[i] < num_classes` for every index `i`
/// - labels are in restricted growth form: label `c > 0` first appears after label `c - 1`
/// - `populations[c]` is the number of indices labeled `c`, and is zero for `c >= num_classes`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SetPartition {
    populations: Vec<usize>,
    labels: Vec<usize>,
    num_classes: usize,
}

impl SetPartition {
    /// The partition of `n` indices into one class (no class at all for `n = 0`).
    pub fn single_class(n: usize) -> Self {
        let mut populations = vec![0; n];
        if let Some(first) = populations.first_mut() {
            *first = n;
        }
        Self {
            populations,
            labels: vec![0; n],
            num_classes: usize::from(n > 0),
        }
    }

    /// Builds a partition from arbitrary class labels: indices with equal labels share a class.
    ///
    /// Labels are renumbered in order of first appearance.
    ///
    /// ```
    /// use combalg::partition::SetPartition;
    ///
    /// let p = SetPartition::from_labels(&[7, 3, 7, 9]);
    /// assert_eq!(p.labels(), &[0, 1, 0, 2]);
    /// assert_eq!(p.populations(), &[2, 1, 1]);
    /// ```
    pub fn from_labels(raw: &[usize]) -> Self {
        let n = raw.len();
        let mut seen: Vec<(usize, usize)> = Vec::new();
        let mut labels = Vec::with_capacity(n);
        let mut populations = vec![0; n];
        for &x in raw {
            let label = match seen.iter().find(|&&(r, _)| r == x) {
                Some(&(_, label)) => label,
                None => {
                    seen.push((x, seen.len()));
                    seen.len() - 1
                }
            };
            labels.push(label);
            populations[label] += 1;
        }
        Self {
            populations,
            labels,
            num_classes: seen.len(),
        }
    }

    /// Size of the underlying index set.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Class label of every index.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Population of every class.
    pub fn populations(&self) -> &[usize] {
        &self.populations[..self.num_classes]
    }

    /// Indices grouped by class, classes ordered by their smallest index.
    pub fn blocks(&self) -> Vec<Vec<usize>> {
        let mut blocks: Vec<Vec<usize>> = self.populations().iter().map(|&p| Vec::with_capacity(p)).collect();
        for (i, &label) in self.labels.iter().enumerate() {
            blocks[label].push(i);
        }
        blocks
    }

    /// Groups `elements` by class.
    ///
    /// # Panics
    ///
    /// Panics if `elements.len() != self.len()`.
    pub fn apply<T: Clone>(&self, elements: &[T]) -> Vec<Vec<T>> {
        assert_eq!(elements.len(), self.len(), "partition and elements must have equal sizes");
        self.blocks()
            .into_iter()
            .map(|block| block.into_iter().map(|i| elements[i].clone()).collect())
            .collect()
    }

    /// Checks all the structural invariants.
    pub fn is_valid(&self) -> bool {
        let n = self.len();
        if self.populations.len() != n || self.num_classes > n {
            return false;
        }
        let mut counts = vec![0; n];
        let mut next_new = 0;
        for &label in self.labels.iter() {
            if label >= self.num_classes || label > next_new {
                return false;
            }
            if label == next_new {
                next_new += 1;
            }
            counts[label] += 1;
        }
        next_new == self.num_classes
            && counts == self.populations
            && self.populations().iter().sum::<usize>() == n
    }

    /// Moves to the successor in restricted growth order.
    ///
    /// Returns `false` if this is the last partition (every index in its own class).
    fn advance(&mut self) -> bool {
        let n = self.len();
        if self.num_classes == n {
            return false;
        }
        let p = &mut self.populations;
        let q = &mut self.labels;

        // Trailing indices sitting alone in their class move back to class 0.
        let mut m = n;
        let l = loop {
            let l = q[m - 1];
            if p[l] != 1 {
                break l;
            }
            q[m - 1] = 0;
            m -= 1;
        };
        let moved = n - m;
        for i in 0..moved {
            p[self.num_classes - 1 - i] = 0;
        }
        self.num_classes -= moved;
        p[0] += moved;

        if l == self.num_classes - 1 {
            p[self.num_classes] = 0;
            self.num_classes += 1;
        }
        q[m - 1] = l + 1;
        p[l] -= 1;
        p[l + 1] += 1;
        true
    }
}

/// Returns an iterator over all `B(n)` partitions of `{0, ..., n-1}`, in restricted growth order.
///
/// ```
/// use combalg::partition::set_partitions;
///
/// let labels: Vec<Vec<usize>> = set_partitions(3).map(|p| p.labels().to_vec()).collect();
/// assert_eq!(labels, vec![
///     vec![0, 0, 0],
///     vec![0, 0, 1],
///     vec![0, 1, 0],
///     vec![0, 1, 1],
///     vec![0, 1, 2],
/// ]);
/// ```
pub fn set_partitions(n: usize) -> SetPartitions {
    debug!("set_partitions(n = {})", n);
    SetPartitions {
        state: SetPartition::single_class(n),
        done: false,
    }
}

#[derive(Debug, Clone)]
pub struct SetPartitions {
    state: SetPartition,
    done: bool,
}

impl SetPartitions {
    pub fn current(&self) -> &SetPartition {
        &self.state
    }

    /// Moves to the next partition. Returns `false` if the current one is the last.
    pub fn advance(&mut self) -> bool {
        self.state.advance()
    }
}

impl Iterator for SetPartitions {
    type Item = SetPartition;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let partition = self.state.clone();
        self.done = !self.advance();
        Some(partition)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use num_bigint::BigUint;
    use test_log::test;

    use super::*;
    use crate::count::{bell_number, integer_partition_count};

    #[test]
    fn test_integer_partitions_5() {
        let all: Vec<_> = integer_partitions(5).collect();
        for p in all.iter() {
            println!("{:?}", p);
        }
        assert_eq!(
            all,
            vec![
                vec![5],
                vec![4, 1],
                vec![3, 2],
                vec![3, 1, 1],
                vec![2, 2, 1],
                vec![2, 1, 1, 1],
                vec![1, 1, 1, 1, 1],
            ]
        );
    }

    #[test]
    fn test_integer_partitions_counts() {
        for n in 0..=20 {
            let all: Vec<_> = integer_partitions(n).collect();
            assert_eq!(BigUint::from(all.len()), integer_partition_count(n), "p({})", n);
            for p in all.iter() {
                assert_eq!(p.iter().sum::<usize>(), n);
                assert!(p.windows(2).all(|w| w[0] >= w[1]));
                assert!(p.iter().all(|&x| x > 0));
            }
            // Reverse lexicographic.
            assert!(all.windows(2).all(|w| w[0] > w[1]));
        }
        assert_eq!(integer_partitions(15).count(), 176);
    }

    #[test]
    fn test_integer_partitions_edge_cases() {
        assert_eq!(integer_partitions(0).collect::<Vec<_>>(), vec![Vec::<usize>::new()]);
        assert_eq!(integer_partitions(1).collect::<Vec<_>>(), vec![vec![1]]);
        assert_eq!(integer_partitions(2).collect::<Vec<_>>(), vec![vec![2], vec![1, 1]]);
    }

    #[test]
    fn test_integer_partitions_state_machine() {
        let mut state = integer_partitions(3);
        assert_eq!(state.current(), &[3]);
        assert!(state.advance());
        assert_eq!(state.current(), &[2, 1]);
        assert!(state.advance());
        assert_eq!(state.current(), &[1, 1, 1]);
        assert!(!state.advance());
    }

    #[test]
    fn test_set_partitions_counts() {
        for n in 0..=9 {
            let all: Vec<_> = set_partitions(n).collect();
            assert_eq!(BigUint::from(all.len()), bell_number(n), "B({})", n);
            let distinct: HashSet<_> = all.iter().map(|p| p.labels().to_vec()).collect();
            assert_eq!(distinct.len(), all.len());
            for p in all.iter() {
                assert!(p.is_valid(), "invalid partition {:?}", p);
                assert!(p.num_classes() <= n);
                assert_eq!(p.populations().iter().sum::<usize>(), n);
            }
        }
        assert_eq!(set_partitions(5).count(), 52);
    }

    #[test]
    fn test_set_partitions_ends() {
        let all: Vec<_> = set_partitions(4).collect();
        assert_eq!(all.first().unwrap().num_classes(), 1);
        assert_eq!(all.first().unwrap().populations(), &[4]);
        assert_eq!(all.last().unwrap().labels(), &[0, 1, 2, 3]);
        assert_eq!(all.last().unwrap().populations(), &[1, 1, 1, 1]);

        let empty: Vec<_> = set_partitions(0).collect();
        assert_eq!(empty.len(), 1);
        assert_eq!(empty[0].num_classes(), 0);
        assert!(empty[0].is_valid());
    }

    #[test]
    fn test_set_partition_blocks() {
        let p = SetPartition::from_labels(&[0, 1, 0, 2, 1]);
        assert!(p.is_valid());
        assert_eq!(p.blocks(), vec![vec![0, 2], vec![1, 4], vec![3]]);
        assert_eq!(p.apply(&['a', 'b', 'c', 'd', 'e']), vec![vec!['a', 'c'], vec!['b', 'e'], vec!['d']]);
    }

    #[test]
    fn test_set_partition_invalid() {
        let p = SetPartition {
            populations: vec![1, 1, 0],
            labels: vec![1, 0, 0],
            num_classes: 2,
        };
        assert!(!p.is_valid());
    }
}
