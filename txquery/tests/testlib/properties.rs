use std::collections::BTreeSet;

use txquery::{rank, Corpus, Item, Ranked, TransactionId};

/// Result ids are exactly the transactions whose item set covers the query.
pub fn prop_containment_correct(result: &[TransactionId], corpus: &Corpus, query: &[Item]) -> bool {
    prop_strictly_increasing(result) &&
    prop_result_ids_all_match(result, corpus, query) &&
    prop_all_matches_in_result(result, corpus, query)
}

pub fn prop_strictly_increasing<T: Ord>(result: &[T]) -> bool {
    result.windows(2).all(|w| w[0] < w[1])
}

fn covers(transaction: &[Item], query: &[Item]) -> bool {
    let transaction: BTreeSet<Item> = transaction.iter().copied().collect();
    !query.is_empty() && query.iter().all(|item| transaction.contains(item))
}

// If an id is in the result, then its transaction covers the query.
fn prop_result_ids_all_match(result: &[TransactionId], corpus: &Corpus, query: &[Item]) -> bool {
    result.iter().all(|&id| covers(corpus.multiset(id), query))
}

// If a transaction covers the query, then its id is in the result.
fn prop_all_matches_in_result(result: &[TransactionId], corpus: &Corpus, query: &[Item]) -> bool {
    corpus
        .multisets()
        .iter()
        .enumerate()
        .filter(|(_, transaction)| covers(transaction, query))
        .all(|(id, _)| result.contains(&(id as TransactionId)))
}

pub fn prop_is_subset(small: &[TransactionId], large: &[TransactionId]) -> bool {
    small.iter().all(|id| large.contains(id))
}

pub fn prop_rank_ordered(ranked: &[Ranked]) -> bool {
    rank::is_rank_ordered(ranked) && ranked.iter().all(|r| r.score > 0.0)
}
