//! Exact counting functions.
//!
//! All counts are [`BigUint`]: Bell numbers and partition numbers outgrow `u64` quickly
//! (`B(26)` already does), and the samplers in [`random`][crate::random] derive their
//! selection probabilities from these exact values.
//!
//! The three sequences defined by recurrences ([`bell_number`], [`integer_partition_count`],
//! [`rooted_tree_count`]) are memoized process-wide in a [`MemoTable`] each.

use log::debug;
use num_bigint::BigUint;
use num_traits::One;

use crate::memo::MemoTable;

/// Bell numbers `B(n)`.
pub static BELL_NUMBERS: MemoTable = MemoTable::new("bell", bell_step);

/// Partition numbers `p(n)`.
pub static PARTITION_COUNTS: MemoTable = MemoTable::new("partitions", partition_step);

/// Numbers `t(n)` of unlabeled rooted trees with `n` vertices.
pub static ROOTED_TREE_COUNTS: MemoTable = MemoTable::new("rooted-trees", rooted_tree_step);

/// `n! = 1 * 2 * ... * n`.
pub fn factorial(n: usize) -> BigUint {
    (1..=n).fold(BigUint::one(), |acc, i| acc * i)
}

/// Falling factorial `(n)_k = n * (n-1) * ... * (n-k+1)`.
///
/// Zero when `k > n`, since the product then passes through zero.
pub fn falling_factorial(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::ZERO;
    }
    (n - k + 1..=n).fold(BigUint::one(), |acc, i| acc * i)
}

/// Binomial coefficient `C(n, k) = (n)_k / k!`.
///
/// Returns zero when `k > n`.
///
/// ```
/// use combalg::count::binomial;
/// use num_bigint::BigUint;
///
/// assert_eq!(binomial(5, 3), BigUint::from(10u32));
/// assert_eq!(binomial(3, 5), BigUint::ZERO);
/// ```
pub fn binomial(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::ZERO;
    }
    falling_factorial(n, k) / factorial(k)
}

/// Bell number `B(n)`: the number of set partitions of an `n`-element set.
pub fn bell_number(n: usize) -> BigUint {
    debug!("bell_number({})", n);
    BELL_NUMBERS.get(n)
}

/// Partition number `p(n)`: the number of integer partitions of `n`.
pub fn integer_partition_count(n: usize) -> BigUint {
    debug!("integer_partition_count({})", n);
    PARTITION_COUNTS.get(n)
}

/// Number `t(n)` of unlabeled rooted trees on `n` vertices, with `t(0) = 0`.
pub fn rooted_tree_count(n: usize) -> BigUint {
    debug!("rooted_tree_count({})", n);
    ROOTED_TREE_COUNTS.get(n)
}

// B(n) = sum_{k=0}^{n-1} C(n-1, k) B(k)
fn bell_step(prev: &[BigUint], n: usize) -> BigUint {
    if n == 0 {
        return BigUint::one();
    }
    let mut c = BigUint::one();
    let mut sum = BigUint::ZERO;
    for (k, b) in prev.iter().enumerate().take(n) {
        sum += &c * b;
        c = c * (n - 1 - k) / (k + 1);
    }
    sum
}

/// Weighted term of the partition recurrence: part `d` used `j` times.
///
/// `n p(n) = sum over all (j, d) with j*d <= n of d * p(n - j*d)`.
pub(crate) fn partition_weight(p: &[BigUint], n: usize, j: usize, d: usize) -> BigUint {
    &p[n - j * d] * d
}

fn partition_step(prev: &[BigUint], n: usize) -> BigUint {
    if n <= 1 {
        return BigUint::one();
    }
    let mut sum = BigUint::ZERO;
    for j in 1..=n {
        for d in 1..=n / j {
            sum += partition_weight(prev, n, j, d);
        }
    }
    assert_eq!(&sum % n, BigUint::ZERO, "partition recurrence must divide exactly");
    sum / n
}

/// Weighted term of the rooted tree recurrence: `j` copies of a `d`-vertex subtree.
///
/// `(n-1) t(n) = sum over all (j, d) with j*d <= n-1 of d * t(d) * t(n - j*d)`.
pub(crate) fn rooted_tree_weight(t: &[BigUint], n: usize, j: usize, d: usize) -> BigUint {
    &t[d] * &t[n - j * d] * d
}

fn rooted_tree_step(prev: &[BigUint], n: usize) -> BigUint {
    match n {
        0 => return BigUint::ZERO,
        1 | 2 => return BigUint::one(),
        _ => {}
    }
    let mut sum = BigUint::ZERO;
    for m in 1..n {
        // sum over divisors d of m of d * t(d)
        let mut s = BigUint::ZERO;
        for d in (1..=m).filter(|d| m % d == 0) {
            s += &prev[d] * d;
        }
        sum += &prev[n - m] * s;
    }
    assert_eq!(&sum % (n - 1), BigUint::ZERO, "rooted tree recurrence must divide exactly");
    sum / (n - 1)
}
