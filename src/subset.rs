//! Enumeration of subsets.
//!
//! Elements are addressed by position, so duplicate values are distinct elements:
//!
//! ```
//! use combalg::subset::powerset;
//!
//! let subsets: Vec<_> = powerset(&['a', 'a']).collect();
//! assert_eq!(subsets, vec![vec!['a', 'a'], vec!['a'], vec!['a'], vec![]]);
//! ```
//!
//! Besides [`powerset`] and [`k_subsets`] over arbitrary elements, this module provides
//! three orderings of the subsets of `0..n`: binary counting ([`powerset_binary`]),
//! reflected Gray code ([`powerset_gray`]) and lexicographic index lists
//! ([`powerset_lexicographic`]).

use log::debug;

use crate::error::{check_at_most, Result};

/// Binary increment of `bits` (least significant first).
///
/// Returns `false` when the counter wraps around to all zeros.
fn increment(bits: &mut [bool]) -> bool {
    for bit in bits.iter_mut() {
        if *bit {
            *bit = false;
        } else {
            *bit = true;
            return true;
        }
    }
    false
}

/// Returns an iterator over all `2^n` subsets of `elements`.
///
/// Each subset of the tail is yielded first with the head prepended and then without it,
/// so the first subset is the whole sequence and the last one is empty.
pub fn powerset<T: Clone>(elements: &[T]) -> Powerset<'_, T> {
    debug!("powerset(n = {})", elements.len());
    Powerset::new(elements)
}

#[derive(Debug, Clone)]
pub struct Powerset<'a, T> {
    elements: &'a [T],
    /// `excluded[i]` is bit `i` of the index of the current subset.
    excluded: Vec<bool>,
    done: bool,
}

impl<'a, T: Clone> Powerset<'a, T> {
    pub fn new(elements: &'a [T]) -> Self {
        Self {
            elements,
            excluded: vec![false; elements.len()],
            done: false,
        }
    }
}

impl<T: Clone> Iterator for Powerset<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let subset = self
            .elements
            .iter()
            .zip(&self.excluded)
            .filter(|(_, excluded)| !**excluded)
            .map(|(x, _)| x.clone())
            .collect();
        self.done = !increment(&mut self.excluded);
        Some(subset)
    }
}

/// Returns an iterator over the `C(n, k)` subsets of size `k`, in lexicographic order of positions.
///
/// Fails if `k` exceeds the number of elements.
///
/// ```
/// use combalg::subset::k_subsets;
///
/// let subsets: Vec<_> = k_subsets(&[1, 2, 3, 4], 2).unwrap().collect();
/// assert_eq!(subsets[0], vec![1, 2]);
/// assert_eq!(subsets[5], vec![3, 4]);
/// assert_eq!(subsets.len(), 6);
/// ```
pub fn k_subsets<T: Clone>(elements: &[T], k: usize) -> Result<KSubsets<'_, T>> {
    debug!("k_subsets(n = {}, k = {})", elements.len(), k);
    check_at_most(k, elements.len())?;
    Ok(KSubsets::new(elements, k))
}

#[derive(Debug, Clone)]
pub struct KSubsets<'a, T> {
    elements: &'a [T],
    indices: Vec<usize>,
    done: bool,
}

impl<'a, T: Clone> KSubsets<'a, T> {
    fn new(elements: &'a [T], k: usize) -> Self {
        assert!(k <= elements.len());
        Self {
            elements,
            indices: (0..k).collect(),
            done: false,
        }
    }

    /// Positions of the current subset, strictly increasing.
    pub fn current(&self) -> &[usize] {
        &self.indices
    }

    /// Moves to the next subset. Returns `false` if the current one is the last.
    pub fn advance(&mut self) -> bool {
        let n = self.elements.len();
        let k = self.indices.len();
        // Position `i` may hold at most `n - k + i`.
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) else {
            return false;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl<T: Clone> Iterator for KSubsets<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let subset = self.indices.iter().map(|&i| self.elements[i].clone()).collect();
        self.done = !self.advance();
        Some(subset)
    }
}

/// Returns an iterator over all subsets of `0..n` as membership vectors, in binary counting order.
///
/// Starts with the empty set and ends with the full set.
pub fn powerset_binary(n: usize) -> PowersetBinary {
    PowersetBinary {
        bits: vec![false; n],
        done: false,
    }
}

#[derive(Debug, Clone)]
pub struct PowersetBinary {
    bits: Vec<bool>,
    done: bool,
}

impl Iterator for PowersetBinary {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let subset = self.bits.clone();
        self.done = !increment(&mut self.bits);
        Some(subset)
    }
}

/// Returns an iterator over all subsets of `0..n` as membership vectors, in reflected Gray code order.
///
/// Consecutive subsets differ in exactly one position.
/// Starts with the empty set and ends with `{n-1}`.
///
/// ```
/// use combalg::subset::powerset_gray;
///
/// let codes: Vec<Vec<bool>> = powerset_gray(2).collect();
/// assert_eq!(codes, vec![
///     vec![false, false],
///     vec![true, false],
///     vec![true, true],
///     vec![false, true],
/// ]);
/// ```
pub fn powerset_gray(n: usize) -> PowersetGray {
    PowersetGray {
        bits: vec![false; n],
        ones: 0,
        done: false,
    }
}

#[derive(Debug, Clone)]
pub struct PowersetGray {
    bits: Vec<bool>,
    ones: usize,
    done: bool,
}

impl PowersetGray {
    fn is_last(&self) -> bool {
        match self.bits.last() {
            None => true,
            Some(&last) => last && self.ones == 1,
        }
    }

    fn advance(&mut self) {
        let j = if self.ones % 2 == 0 {
            0
        } else {
            // Flip the bit right after the lowest set one.
            self.bits.iter().position(|&b| b).map_or(0, |i| i + 1)
        };
        self.bits[j] = !self.bits[j];
        if self.bits[j] {
            self.ones += 1;
        } else {
            self.ones -= 1;
        }
    }
}

impl Iterator for PowersetGray {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let subset = self.bits.clone();
        if self.is_last() {
            self.done = true;
        } else {
            self.advance();
        }
        Some(subset)
    }
}

/// Returns an iterator over all subsets of `0..n` as increasing index lists, in lexicographic order.
///
/// ```
/// use combalg::subset::powerset_lexicographic;
///
/// let subsets: Vec<Vec<usize>> = powerset_lexicographic(3).collect();
/// assert_eq!(subsets, vec![
///     vec![],
///     vec![0],
///     vec![0, 1],
///     vec![0, 1, 2],
///     vec![0, 2],
///     vec![1],
///     vec![1, 2],
///     vec![2],
/// ]);
/// ```
pub fn powerset_lexicographic(n: usize) -> PowersetLexicographic {
    PowersetLexicographic {
        n,
        list: Vec::with_capacity(n),
        done: false,
    }
}

#[derive(Debug, Clone)]
pub struct PowersetLexicographic {
    n: usize,
    list: Vec<usize>,
    done: bool,
}

impl PowersetLexicographic {
    fn advance(&mut self) -> bool {
        match self.list.last().copied() {
            None => {
                if self.n == 0 {
                    return false;
                }
                self.list.push(0);
            }
            Some(last) if last + 1 < self.n => {
                self.list.push(last + 1);
            }
            Some(_) => {
                self.list.pop();
                match self.list.last_mut() {
                    None => return false,
                    Some(last) => *last += 1,
                }
            }
        }
        true
    }
}

impl Iterator for PowersetLexicographic {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let subset = self.list.clone();
        self.done = !self.advance();
        Some(subset)
    }
}
