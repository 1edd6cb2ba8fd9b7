//! Ordering and truncation of relevance results.

use std::cmp::Ordering;

use crate::TransactionId;

/// A scored transaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked {
    pub score: f64,
    pub id: TransactionId,
}

impl Ranked {
    pub fn new(score: f64, id: TransactionId) -> Self {
        Self { score, id }
    }
}

/// Descending by score, then descending by id.
pub fn cmp_ranked(a: &Ranked, b: &Ranked) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.id.cmp(&a.id))
}

/// Sorts into rank order and keeps the first `limit` entries, if given.
pub fn sort_and_truncate(ranked: &mut Vec<Ranked>, limit: Option<usize>) {
    ranked.sort_unstable_by(cmp_ranked);
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
}

/// True when `ranked` is in rank order.
pub fn is_rank_ordered(ranked: &[Ranked]) -> bool {
    ranked.windows(2).all(|w| cmp_ranked(&w[0], &w[1]) != Ordering::Greater)
}
