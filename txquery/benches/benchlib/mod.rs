use std::{collections::BTreeSet, ops::Range};

use rand::{distributions::Uniform, prelude::Distribution, seq::SliceRandom, thread_rng};

pub fn uniform_sorted_set(range: Range<u32>, cardinality: usize) -> Vec<u32> {
    let rng = &mut thread_rng();
    let dist = Uniform::from(range);

    let mut set: BTreeSet<u32> = BTreeSet::new();
    while set.len() < cardinality {
        set.insert(dist.sample(rng));
    }
    set.iter().copied().collect()
}

/// `count` transactions of `length` items drawn from `0..universe`.
pub fn uniform_transactions(count: usize, length: usize, universe: u32) -> Vec<Vec<u32>> {
    (0..count)
        .map(|_| uniform_sorted_set(0..universe, length))
        .collect()
}

/// Queries built from items of random transactions, so each has at least
/// one match.
pub fn queries_from(transactions: &[Vec<u32>], count: usize, length: usize) -> Vec<Vec<u32>> {
    let rng = &mut thread_rng();
    (0..count)
        .map(|_| {
            let source = transactions.choose(rng).expect("no transactions");
            source.choose_multiple(rng, length).copied().collect()
        })
        .collect()
}
