use clap::{Parser, Subcommand};
use log::info;
use num_bigint::BigUint;
use num_traits::One;

use combalg::composition::compositions;
use combalg::count::{bell_number, binomial, factorial, integer_partition_count, rooted_tree_count};
use combalg::partition::{integer_partitions, set_partitions};
use combalg::permutation::permutations;
use combalg::random::Sampler;
use combalg::subset::{k_subsets, powerset};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Seed for the random generator (random if omitted).
    #[clap(long, value_name = "INT", global = true)]
    seed: Option<u64>,

    /// Print at most this many objects when enumerating.
    #[clap(long, value_name = "INT", default_value = "50", global = true)]
    limit: usize,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Enumerate all objects of a class.
    Enumerate {
        #[command(subcommand)]
        class: Class,
    },
    /// Draw uniformly random objects of a class.
    Sample {
        #[command(subcommand)]
        class: Class,

        /// Number of samples.
        #[clap(long, short, value_name = "INT", default_value = "5")]
        count: usize,
    },
    /// Print exact counts for n = 0..=N.
    Count {
        #[arg(value_name = "N", default_value = "20")]
        n: usize,
    },
}

#[derive(Debug, Clone, Subcommand)]
enum Class {
    Subsets { n: usize },
    KSubsets { n: usize, k: usize },
    Compositions { n: usize, k: usize },
    Permutations { n: usize },
    IntegerPartitions { n: usize },
    SetPartitions { n: usize },
    RootedTrees { n: usize },
}

impl Class {
    fn size(&self) -> usize {
        match *self {
            Class::Subsets { n }
            | Class::KSubsets { n, .. }
            | Class::Compositions { n, .. }
            | Class::Permutations { n }
            | Class::IntegerPartitions { n }
            | Class::SetPartitions { n }
            | Class::RootedTrees { n } => n,
        }
    }
}

/// Lazily formatted objects of `class`, built over `elements` where the class needs them.
fn listing<'a>(class: &Class, elements: &'a [usize]) -> color_eyre::Result<Box<dyn Iterator<Item = String> + 'a>> {
    let lines: Box<dyn Iterator<Item = String> + 'a> = match *class {
        Class::Subsets { .. } => Box::new(powerset(elements).map(|s| format!("{:?}", s))),
        Class::KSubsets { k, .. } => Box::new(k_subsets(elements, k)?.map(|s| format!("{:?}", s))),
        Class::Compositions { n, k } => Box::new(compositions(n, k)?.map(|c| format!("{:?}", c))),
        Class::Permutations { .. } => Box::new(permutations(elements).map(|p| format!("{:?}", p))),
        Class::IntegerPartitions { n } => Box::new(integer_partitions(n).map(|p| format!("{:?}", p))),
        Class::SetPartitions { n } => Box::new(set_partitions(n).map(|p| {
            format!("{:?} (p = {:?}, q = {:?}, nc = {})", p.blocks(), p.populations(), p.labels(), p.num_classes())
        })),
        Class::RootedTrees { .. } => {
            color_eyre::eyre::bail!("rooted trees can only be sampled");
        }
    };
    Ok(lines)
}

/// Number of objects of `class`, from the counting functions.
fn total(class: &Class) -> BigUint {
    match *class {
        Class::Subsets { n } => BigUint::one() << n,
        Class::KSubsets { n, k } => binomial(n, k),
        Class::Compositions { n, k } => binomial(n + k - 1, k - 1),
        Class::Permutations { n } => factorial(n),
        Class::IntegerPartitions { n } => integer_partition_count(n),
        Class::SetPartitions { n } => bell_number(n),
        Class::RootedTrees { n } => rooted_tree_count(n),
    }
}

fn enumerate(class: &Class, limit: usize) -> color_eyre::Result<()> {
    let elements: Vec<usize> = (1..=class.size()).collect();
    let mut shown = 0usize;
    for line in listing(class, &elements)?.take(limit) {
        println!("{}", line);
        shown += 1;
    }
    let total = total(class);
    if BigUint::from(shown) < total {
        println!("... ({} more)", &total - shown);
    }
    println!("Total: {}", total);
    Ok(())
}

fn sample(class: &Class, count: usize, sampler: &mut Sampler) -> color_eyre::Result<()> {
    for _ in 0..count {
        match *class {
            Class::Subsets { n } => {
                let elements: Vec<usize> = (1..=n).collect();
                println!("{:?}", sampler.subset(&elements));
            }
            Class::KSubsets { n, k } => {
                let elements: Vec<usize> = (1..=n).collect();
                println!("{:?}", sampler.k_subset(&elements, k)?);
            }
            Class::Compositions { n, k } => println!("{:?}", sampler.composition(n, k)?),
            Class::Permutations { n } => {
                let elements: Vec<usize> = (1..=n).collect();
                println!("{:?}", sampler.permutation(&elements));
            }
            Class::IntegerPartitions { n } => println!("{:?}", sampler.integer_partition(n)),
            Class::SetPartitions { n } => {
                let elements: Vec<usize> = (1..=n).collect();
                println!("{:?}", sampler.set_partition(&elements));
            }
            Class::RootedTrees { n } => {
                let tree = sampler.rooted_tree(n);
                println!("{} (height {})", tree, tree.height());
            }
        }
    }
    Ok(())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let args = Cli::parse();
    info!("args = {:?}", args);

    match &args.command {
        Command::Enumerate { class } => enumerate(class, args.limit)?,
        Command::Sample { class, count } => {
            let mut sampler = match args.seed {
                Some(seed) => Sampler::seed_from_u64(seed),
                None => Sampler::from_entropy(),
            };
            sample(class, *count, &mut sampler)?;
        }
        Command::Count { n } => {
            println!("{:>4} {:>12} {:>24} {:>24} {:>24}", "n", "C(n, n/2)", "B(n)", "p(n)", "t(n)");
            for i in 0..=*n {
                println!(
                    "{:>4} {:>12} {:>24} {:>24} {:>24}",
                    i,
                    binomial(i, i / 2),
                    bell_number(i),
                    integer_partition_count(i),
                    rooted_tree_count(i)
                );
            }
        }
    }

    let time_total = time_total.elapsed();
    info!("All done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}
