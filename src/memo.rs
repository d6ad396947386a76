//! Grow-only memo tables for integer sequences defined by a recurrence.
//!
//! A [`MemoTable`] stores the dense prefix `a(0), a(1), ..., a(len - 1)` of a sequence
//! whose `n`-th term is computable from the terms below it. Looking up `a(n)` extends
//! the prefix bottom-up under the table's lock, so a term is computed at most once per
//! process and is never observed half-written.
//!
//! ```
//! use combalg::memo::MemoTable;
//! use num_bigint::BigUint;
//!
//! fn fib(prev: &[BigUint], n: usize) -> BigUint {
//!     if n < 2 {
//!         BigUint::from(n)
//!     } else {
//!         &prev[n - 1] + &prev[n - 2]
//!     }
//! }
//!
//! static FIB: MemoTable = MemoTable::new("fib", fib);
//! assert_eq!(FIB.get(10), BigUint::from(55u32));
//! assert_eq!(FIB.len(), 11);
//! ```

use std::sync::{Mutex, MutexGuard};

use log::debug;
use num_bigint::BigUint;

/// Computes the `n`-th term given all the terms `0..n` before it.
pub type Step = fn(&[BigUint], usize) -> BigUint;

pub struct MemoTable {
    name: &'static str,
    step: Step,
    terms: Mutex<Vec<BigUint>>,
}

impl MemoTable {
    pub const fn new(name: &'static str, step: Step) -> Self {
        Self {
            name,
            step,
            terms: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<BigUint>> {
        // Terms are pushed whole, so a panic elsewhere cannot leave a torn entry behind.
        self.terms.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn extend(&self, terms: &mut Vec<BigUint>, n: usize) {
        if terms.len() > n {
            return;
        }
        debug!("memo[{}]: extending {} -> {}", self.name, terms.len(), n + 1);
        while terms.len() <= n {
            let i = terms.len();
            let term = (self.step)(terms, i);
            terms.push(term);
        }
    }

    /// Returns the `n`-th term, computing any missing terms up to `n`.
    pub fn get(&self, n: usize) -> BigUint {
        let mut terms = self.lock();
        self.extend(&mut terms, n);
        terms[n].clone()
    }

    /// Returns a snapshot of the terms `0..=n`.
    pub fn prefix(&self, n: usize) -> Vec<BigUint> {
        let mut terms = self.lock();
        self.extend(&mut terms, n);
        terms[..=n].to_vec()
    }

    /// Number of terms memoized so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl std::fmt::Debug for MemoTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoTable")
            .field("name", &self.name)
            .field("len", &self.len())
            .finish()
    }
}
