//! Enumeration of compositions of `n` into `k` non-negative parts.
//!
//! There are `C(n + k - 1, k - 1)` of them. They are generated in the order
//! `(n, 0, ..., 0), (n-1, 1, 0, ...), ..., (0, ..., 0, n)`: every step moves one unit
//! from the leading non-zero part one place to the right, returning the rest of that
//! part to position 0.

use log::debug;

use crate::error::{check_parts, Result};

/// Returns an iterator over the compositions of `n` into `k` parts.
///
/// Fails if `k == 0`.
///
/// ```
/// use combalg::composition::compositions;
///
/// let all: Vec<_> = compositions(2, 2).unwrap().collect();
/// assert_eq!(all, vec![vec![2, 0], vec![1, 1], vec![0, 2]]);
/// ```
pub fn compositions(n: usize, k: usize) -> Result<Compositions> {
    debug!("compositions(n = {}, k = {})", n, k);
    check_parts(k)?;
    Ok(Compositions::new(n, k))
}

#[derive(Debug, Clone)]
pub struct Compositions {
    n: usize,
    parts: Vec<usize>,
    /// Value of the part that was split last.
    t: usize,
    /// Position of the leading non-zero part, once it is not position 0.
    h: usize,
    done: bool,
}

impl Compositions {
    fn new(n: usize, k: usize) -> Self {
        assert!(k > 0);
        let mut parts = vec![0; k];
        parts[0] = n;
        Self {
            n,
            parts,
            t: n,
            h: 0,
            done: false,
        }
    }

    pub fn current(&self) -> &[usize] {
        &self.parts
    }

    /// Moves to the next composition. Returns `false` if the current one is the last.
    pub fn advance(&mut self) -> bool {
        let k = self.parts.len();
        if self.parts[k - 1] == self.n {
            return false;
        }
        if self.t != 1 {
            self.h = 0;
        }
        self.t = self.parts[self.h];
        assert!(self.t > 0, "composition pointer must rest on a non-zero part");
        self.parts[self.h] = 0;
        self.parts[0] = self.t - 1;
        self.parts[self.h + 1] += 1;
        self.h += 1;
        true
    }
}

impl Iterator for Compositions {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let parts = self.parts.clone();
        self.done = !self.advance();
        Some(parts)
    }
}
