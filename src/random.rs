//! Uniform random generation of combinatorial objects.
//!
//! Every sampler takes the random source explicitly (`&mut R` with `R: Rng`), so a seeded
//! generator reproduces the same objects. [`Sampler`] bundles one generator with all the
//! sampling functions.
//!
//! Samplers for partitions and trees follow Nijenhuis and Wilf: a weighted choice is made
//! among the terms of the counting recurrence of the class, using the exact counts from
//! [`count`][crate::count]. The choice draws a uniform integer below the total weight and
//! picks the first term whose cumulative weight exceeds it, so no floating point rounding
//! is involved.

use log::debug;
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::count::{partition_weight, rooted_tree_weight, BELL_NUMBERS, PARTITION_COUNTS, ROOTED_TREE_COUNTS};
use crate::error::{check_at_most, check_parts, Result};
use crate::partition::SetPartition;
use crate::tree::RootedTree;

/// Random subset: every element is kept independently with probability 1/2.
///
/// This is uniform over the whole powerset, not over subsets of a given size.
pub fn random_subset<T: Clone, R: Rng + ?Sized>(elements: &[T], rng: &mut R) -> Vec<T> {
    elements.iter().filter(|_| rng.gen_bool(0.5)).cloned().collect()
}

/// Random `k`-subset, keeping the original relative order of the elements.
///
/// Each element is selected with probability `needed / remaining` in a single pass.
/// Fails if `k` exceeds the number of elements.
pub fn random_k_subset<T: Clone, R: Rng + ?Sized>(elements: &[T], k: usize, rng: &mut R) -> Result<Vec<T>> {
    check_at_most(k, elements.len())?;
    let mut needed = k;
    let mut remaining = elements.len();
    let mut subset = Vec::with_capacity(k);
    for x in elements {
        if needed == 0 {
            break;
        }
        if rng.gen_range(0..remaining) < needed {
            subset.push(x.clone());
            needed -= 1;
        }
        remaining -= 1;
    }
    assert_eq!(subset.len(), k);
    Ok(subset)
}

/// Random composition of `n` into `k` non-negative parts.
///
/// A random `(k-1)`-subset of `{1, ..., n+k-1}` marks the separators between parts.
/// Fails if `k == 0`.
pub fn random_composition<R: Rng + ?Sized>(n: usize, k: usize, rng: &mut R) -> Result<Vec<usize>> {
    check_parts(k)?;
    let universe: Vec<usize> = (1..n + k).collect();
    let separators = random_k_subset(&universe, k - 1, rng)?;
    let mut parts = Vec::with_capacity(k);
    let mut prev = 0;
    for a in separators {
        parts.push(a - prev - 1);
        prev = a;
    }
    parts.push(n + k - 1 - prev);
    Ok(parts)
}

/// Random permutation by Fisher-Yates shuffle.
pub fn random_permutation<T: Clone, R: Rng + ?Sized>(elements: &[T], rng: &mut R) -> Vec<T> {
    let mut a = elements.to_vec();
    let n = a.len();
    for m in 0..n.saturating_sub(1) {
        let l = rng.gen_range(m..n);
        a.swap(m, l);
    }
    a
}

/// Uniformly random integer partition of `n`, parts in non-increasing order.
pub fn random_integer_partition<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    debug!("random_integer_partition(n = {})", n);
    let p = PARTITION_COUNTS.prefix(n);
    let mut parts = Vec::new();
    let mut m = n;
    while m > 0 {
        let (copies, part) = choose_parts(&p, m, rng);
        parts.extend(std::iter::repeat(part).take(copies));
        m -= copies * part;
    }
    parts.sort_unstable_by(|a, b| b.cmp(a));
    parts
}

/// Picks `(j, d)`, i.e. `j` copies of part `d`, with probability `d p(m - j d) / (m p(m))`.
fn choose_parts<R: Rng + ?Sized>(p: &[BigUint], m: usize, rng: &mut R) -> (usize, usize) {
    let total = &p[m] * m;
    let r = rng.gen_biguint_below(&total);
    let mut acc = BigUint::ZERO;
    for j in 1..=m {
        for d in 1..=m / j {
            acc += partition_weight(p, m, j, d);
            if r < acc {
                return (j, d);
            }
        }
    }
    unreachable!("partition weights for m = {} sum to m p(m)", m)
}

/// Uniformly random partition of `{0, ..., n-1}`.
pub fn random_index_partition<R: Rng + ?Sized>(n: usize, rng: &mut R) -> SetPartition {
    debug!("random_index_partition(n = {})", n);
    if n == 0 {
        return SetPartition::single_class(0);
    }
    let bell = BELL_NUMBERS.prefix(n);
    let mut labels = vec![0; n];
    let mut m = n;
    let mut class = 0;
    while m > 0 {
        let k = choose_class_size(&bell, m, rng);
        for label in labels[m - k..m].iter_mut() {
            *label = class;
        }
        class += 1;
        m -= k;
    }
    // Classes were carved off the end; shuffle to spread them over all positions.
    let labels = random_permutation(&labels, rng);
    SetPartition::from_labels(&labels)
}

/// Picks the size `k` of the class holding a fixed element, with probability
/// `C(m-1, k-1) B(m-k) / B(m)`.
fn choose_class_size<R: Rng + ?Sized>(bell: &[BigUint], m: usize, rng: &mut R) -> usize {
    let r = rng.gen_biguint_below(&bell[m]);
    let mut acc = BigUint::ZERO;
    // c = C(m-1, k-1)
    let mut c = BigUint::one();
    for k in 1..=m {
        acc += &c * &bell[m - k];
        if r < acc {
            return k;
        }
        c = c * (m - k) / k;
    }
    unreachable!("class size weights for m = {} sum to B(m)", m)
}

/// Uniformly random set partition of `elements`.
///
/// Blocks are ordered by their first element.
pub fn random_set_partition<T: Clone, R: Rng + ?Sized>(elements: &[T], rng: &mut R) -> Vec<Vec<T>> {
    random_index_partition(elements.len(), rng).apply(elements)
}

enum Task {
    /// Build a random tree with this many vertices and push it.
    Build(usize),
    /// Pop a subtree and a main tree, attach `copies` copies of the subtree to the main root.
    Splice { copies: usize, size: usize },
}

/// Random rooted tree on `n` vertices, rooted at vertex 0.
///
/// Every unlabeled shape is equally likely, each with probability `1 / t(n)`.
///
/// A tree on `m > 1` vertices is built from a random tree on `m - j d` vertices by
/// attaching `j` copies of one random tree on `d` vertices to its root, where `(j, d)` is
/// chosen with probability `d t(d) t(m - j d) / ((m - 1) t(m))`. Both smaller trees are
/// built the same way; pending work is kept on an explicit stack.
pub fn random_rooted_tree<R: Rng + ?Sized>(n: usize, rng: &mut R) -> RootedTree {
    debug!("random_rooted_tree(n = {})", n);
    if n == 0 {
        return RootedTree::default();
    }
    let t = ROOTED_TREE_COUNTS.prefix(n);

    let mut tasks = vec![Task::Build(n)];
    let mut built: Vec<Vec<Option<usize>>> = Vec::new();
    while let Some(task) = tasks.pop() {
        match task {
            Task::Build(1) => built.push(vec![None]),
            Task::Build(m) => {
                let (copies, size) = choose_subtrees(&t, m, rng);
                // The main tree is built first, so the subtree ends up on top.
                tasks.push(Task::Splice { copies, size });
                tasks.push(Task::Build(size));
                tasks.push(Task::Build(m - copies * size));
            }
            Task::Splice { copies, size } => {
                let (Some(sub), Some(mut main)) = (built.pop(), built.pop()) else {
                    unreachable!("splice always follows two builds");
                };
                assert_eq!(sub.len(), size);
                for _ in 0..copies {
                    let base = main.len();
                    // The subtree root now hangs off the main root; other vertices shift by `base`.
                    main.extend(sub.iter().map(|p| Some(p.map_or(0, |q| q + base))));
                }
                built.push(main);
            }
        }
    }

    let parents = built.pop().unwrap_or_default();
    assert!(built.is_empty());
    assert_eq!(parents.len(), n);
    RootedTree::from_parents_unchecked(parents)
}

/// Picks `(j, d)`, i.e. `j` copies of a `d`-vertex subtree, with probability
/// `d t(d) t(m - j d) / ((m - 1) t(m))`.
fn choose_subtrees<R: Rng + ?Sized>(t: &[BigUint], m: usize, rng: &mut R) -> (usize, usize) {
    let total = &t[m] * (m - 1);
    let r = rng.gen_biguint_below(&total);
    let mut acc = BigUint::ZERO;
    for d in 1..m {
        for j in 1..=(m - 1) / d {
            acc += rooted_tree_weight(t, m, j, d);
            if r < acc {
                return (j, d);
            }
        }
    }
    unreachable!("rooted tree weights for m = {} sum to (m - 1) t(m)", m)
}

/// A random source together with all the samplers.
///
/// ```
/// use combalg::random::Sampler;
///
/// let mut a = Sampler::seed_from_u64(42);
/// let mut b = Sampler::seed_from_u64(42);
/// assert_eq!(a.integer_partition(30), b.integer_partition(30));
/// assert_eq!(a.permutation(&[1, 2, 3, 4, 5]), b.permutation(&[1, 2, 3, 4, 5]));
/// ```
#[derive(Debug, Clone)]
pub struct Sampler<R: ?Sized = ChaCha8Rng> {
    rng: R,
}

impl Sampler<ChaCha8Rng> {
    /// Reproducible sampler.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Sampler seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> Sampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_rng(self) -> R {
        self.rng
    }
}

/// The sampling methods also work behind a trait object, e.g. `Box<Sampler<dyn RngCore>>`.
impl<R: Rng + ?Sized> Sampler<R> {
    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn subset<T: Clone>(&mut self, elements: &[T]) -> Vec<T> {
        random_subset(elements, &mut self.rng)
    }

    pub fn k_subset<T: Clone>(&mut self, elements: &[T], k: usize) -> Result<Vec<T>> {
        random_k_subset(elements, k, &mut self.rng)
    }

    pub fn composition(&mut self, n: usize, k: usize) -> Result<Vec<usize>> {
        random_composition(n, k, &mut self.rng)
    }

    pub fn permutation<T: Clone>(&mut self, elements: &[T]) -> Vec<T> {
        random_permutation(elements, &mut self.rng)
    }

    pub fn integer_partition(&mut self, n: usize) -> Vec<usize> {
        random_integer_partition(n, &mut self.rng)
    }

    pub fn index_partition(&mut self, n: usize) -> SetPartition {
        random_index_partition(n, &mut self.rng)
    }

    pub fn set_partition<T: Clone>(&mut self, elements: &[T]) -> Vec<Vec<T>> {
        random_set_partition(elements, &mut self.rng)
    }

    pub fn rooted_tree(&mut self, n: usize) -> RootedTree {
        random_rooted_tree(n, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use test_log::test;

    use super::*;
    use crate::partition::integer_partitions;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(2024)
    }

    #[test]
    fn test_random_subset() {
        let mut rng = rng();
        let elements: Vec<usize> = (0..10).collect();
        let mut hits = vec![0usize; 10];
        let trials = 20_000;
        for _ in 0..trials {
            let s = random_subset(&elements, &mut rng);
            assert!(s.windows(2).all(|w| w[0] < w[1]));
            for x in s {
                hits[x] += 1;
            }
        }
        println!("hits = {:?}", hits);
        for h in hits {
            assert!((9_000..=11_000).contains(&h));
        }
    }

    #[test]
    fn test_random_k_subset_frequencies() {
        let mut rng = rng();
        let elements: Vec<usize> = (0..20).collect();
        let k = 5;
        let trials = 40_000;
        let mut hits = vec![0usize; 20];
        for _ in 0..trials {
            let s = random_k_subset(&elements, k, &mut rng).unwrap();
            assert_eq!(s.len(), k);
            assert!(s.windows(2).all(|w| w[0] < w[1]));
            for x in s {
                hits[x] += 1;
            }
        }
        // Each element is chosen with probability k/n = 1/4.
        println!("hits = {:?}", hits);
        for h in hits {
            assert!((9_000..=11_000).contains(&h), "frequency {} too far from 10000", h);
        }
    }

    #[test]
    fn test_random_k_subset_edge_cases() {
        let mut rng = rng();
        let elements = ['a', 'b', 'c'];
        assert_eq!(random_k_subset(&elements, 0, &mut rng).unwrap(), Vec::<char>::new());
        assert_eq!(random_k_subset(&elements, 3, &mut rng).unwrap(), vec!['a', 'b', 'c']);
        assert!(random_k_subset(&elements, 4, &mut rng).is_err());
    }

    #[test]
    fn test_random_composition() {
        let mut rng = rng();
        for (n, k) in [(0, 1), (0, 4), (5, 1), (6, 2), (10, 4), (3, 7)] {
            for _ in 0..200 {
                let c = random_composition(n, k, &mut rng).unwrap();
                assert_eq!(c.len(), k);
                assert_eq!(c.iter().sum::<usize>(), n);
            }
        }
        assert!(random_composition(3, 0, &mut rng).is_err());
    }

    #[test]
    fn test_random_composition_covers_all() {
        let mut rng = rng();
        let seen: HashSet<Vec<usize>> = (0..2_000).map(|_| random_composition(6, 2, &mut rng).unwrap()).collect();
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn test_random_permutation() {
        let mut rng = rng();
        let elements = [1, 2, 3];
        let mut counts: HashMap<Vec<i32>, usize> = HashMap::new();
        for _ in 0..6_000 {
            let p = random_permutation(&elements, &mut rng);
            *counts.entry(p).or_default() += 1;
        }
        println!("counts = {:?}", counts);
        assert_eq!(counts.len(), 6);
        for &c in counts.values() {
            assert!((800..=1_200).contains(&c));
        }
        assert!(random_permutation(&Vec::<i32>::new(), &mut rng).is_empty());
        assert_eq!(random_permutation(&[9], &mut rng), vec![9]);
    }

    #[test]
    fn test_random_integer_partition_valid() {
        let mut rng = rng();
        assert!(random_integer_partition(0, &mut rng).is_empty());
        assert_eq!(random_integer_partition(1, &mut rng), vec![1]);
        for n in 1..=60 {
            let p = random_integer_partition(n, &mut rng);
            assert_eq!(p.iter().sum::<usize>(), n);
            assert!(p.windows(2).all(|w| w[0] >= w[1]));
            assert!(p.iter().all(|&x| x > 0));
        }
    }

    #[test]
    fn test_random_integer_partition_uniform() {
        let mut rng = rng();
        let n = 7;
        let mut counts: HashMap<Vec<usize>, usize> = integer_partitions(n).map(|p| (p, 0)).collect();
        assert_eq!(counts.len(), 15);
        for _ in 0..15_000 {
            let p = random_integer_partition(n, &mut rng);
            *counts.get_mut(&p).expect("sampled partition must be enumerated") += 1;
        }
        for (p, c) in counts.iter() {
            println!("{:?} {}", p, c);
            assert!((800..=1_200).contains(c), "{:?} sampled {} times", p, c);
        }
    }

    #[test]
    fn test_random_set_partition() {
        let mut rng = rng();
        assert!(random_set_partition(&Vec::<u8>::new(), &mut rng).is_empty());
        assert_eq!(random_set_partition(&['x'], &mut rng), vec![vec!['x']]);

        let elements: Vec<usize> = (0..12).collect();
        for _ in 0..100 {
            let blocks = random_set_partition(&elements, &mut rng);
            let mut all: Vec<usize> = blocks.iter().flatten().copied().collect();
            all.sort();
            assert_eq!(all, elements);
            assert!(blocks.iter().all(|b| !b.is_empty()));
            // Blocks are ordered by their first element.
            assert!(blocks.windows(2).all(|w| w[0][0] < w[1][0]));
        }
    }

    #[test]
    fn test_random_index_partition_uniform() {
        let mut rng = rng();
        let mut counts: HashMap<Vec<usize>, usize> = HashMap::new();
        for _ in 0..15_000 {
            let p = random_index_partition(4, &mut rng);
            assert!(p.is_valid());
            *counts.entry(p.labels().to_vec()).or_default() += 1;
        }
        // B(4) = 15
        assert_eq!(counts.len(), 15);
        for (labels, c) in counts.iter() {
            println!("{:?} {}", labels, c);
            assert!((800..=1_200).contains(c), "{:?} sampled {} times", labels, c);
        }
    }

    #[test]
    fn test_random_rooted_tree_valid() {
        let mut rng = rng();
        assert!(random_rooted_tree(0, &mut rng).is_empty());
        let single = random_rooted_tree(1, &mut rng);
        assert_eq!(single.parents(), &[None]);
        for n in 1..=40 {
            for _ in 0..20 {
                let tree = random_rooted_tree(n, &mut rng);
                assert_eq!(tree.len(), n);
                assert_eq!(tree.root(), Some(0));
                assert_eq!(tree.edges().len(), n - 1);
                assert!(tree.is_valid(), "invalid tree {}", tree);
            }
        }
    }

    #[test]
    fn test_sampler_reproducible() {
        let mut a = Sampler::seed_from_u64(7);
        let mut b = Sampler::seed_from_u64(7);
        assert_eq!(a.rooted_tree(25), b.rooted_tree(25));
        assert_eq!(a.set_partition(&[1, 2, 3, 4, 5, 6]), b.set_partition(&[1, 2, 3, 4, 5, 6]));
        assert_eq!(a.composition(10, 3).unwrap(), b.composition(10, 3).unwrap());
        assert_eq!(a.k_subset(&[1, 2, 3, 4], 2).unwrap(), b.k_subset(&[1, 2, 3, 4], 2).unwrap());
        assert_eq!(a.subset(&[1, 2, 3, 4]), b.subset(&[1, 2, 3, 4]));
        assert_eq!(a.index_partition(9), b.index_partition(9));
    }

    #[test]
    fn test_sampler_behind_trait_object() {
        use rand::RngCore;

        let mut boxed: Box<Sampler<dyn RngCore>> = Box::new(Sampler::seed_from_u64(5));
        let mut plain = Sampler::seed_from_u64(5);
        assert_eq!(boxed.integer_partition(20), plain.integer_partition(20));
        assert_eq!(boxed.rooted_tree(12), plain.rooted_tree(12));
        assert_eq!(boxed.permutation(&[1, 2, 3, 4]), plain.permutation(&[1, 2, 3, 4]));

        let rng: &mut dyn RngCore = boxed.rng();
        let _ = rng.next_u32();
    }
}
