//! # combalg: Combinatorial Algorithms in Rust
//!
//! **`combalg`** enumerates and randomly generates classical combinatorial objects:
//! subsets, k-subsets, compositions, permutations, integer partitions, set partitions
//! and rooted trees.
//!
//! The algorithms come from
//! - A. Nijenhuis and H. S. Wilf, *Combinatorial Algorithms for Computers and Calculators*, 2nd ed., 1978;
//! - A. Zoghbi and I. Stojmenovic, *Fast Algorithms for Generating Integer Partitions*, 1998.
//!
//! ## Key Features
//!
//! - **Lazy, Restartable Enumeration**: Every enumerator is an [`Iterator`] over an explicit state.
//!   Stopping early is always fine, and calling the constructor again restarts the sequence.
//! - **Exact Counting**: Counts are [`BigUint`][num_bigint::BigUint], memoized process-wide
//!   in lock-guarded tables ([`memo`]).
//! - **Uniform Sampling**: Each sampler produces every object of its class with equal
//!   probability, driven by exact counts rather than floating point weights.
//! - **Explicit Randomness**: Samplers take the random source as an argument, so seeded runs
//!   are reproducible.
//!
//! ## Basic Usage
//!
//! ```rust
//! use combalg::count::{bell_number, integer_partition_count};
//! use combalg::partition::{integer_partitions, set_partitions};
//! use combalg::random::Sampler;
//! use num_bigint::BigUint;
//!
//! // 1. Enumerate
//! let partitions: Vec<Vec<usize>> = integer_partitions(5).collect();
//! assert_eq!(partitions.len(), 7);
//! assert_eq!(partitions[1], vec![4, 1]);
//!
//! // 2. Count
//! assert_eq!(integer_partition_count(15), BigUint::from(176u32));
//! assert_eq!(bell_number(5), BigUint::from(52u32));
//! assert_eq!(set_partitions(5).count(), 52);
//!
//! // 3. Sample
//! let mut sampler = Sampler::seed_from_u64(1);
//! let tree = sampler.rooted_tree(10);
//! assert!(tree.is_valid());
//! let parts = sampler.integer_partition(100);
//! assert_eq!(parts.iter().sum::<usize>(), 100);
//! ```
//!
//! ## Core Components
//!
//! - **[`count`]**: Binomial coefficients, Bell numbers, partition numbers, rooted tree numbers.
//! - **[`subset`]**, **[`composition`]**, **[`permutation`]**, **[`partition`]**: Enumerators.
//! - **[`random`]**: Uniform samplers for every class, including rooted trees ([`tree`]).
//! - **[`backtrack`]**: A generic backtracking search driven by a [`Strategy`][backtrack::Strategy].

pub mod backtrack;
pub mod composition;
pub mod count;
pub mod dot;
pub mod error;
pub mod memo;
pub mod partition;
pub mod permutation;
pub mod random;
pub mod subset;
pub mod tree;

pub use error::{CombError, Result};
