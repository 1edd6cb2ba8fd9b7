use std::cmp::Ordering;

use crate::{visitor::Visitor, Containment, ContainmentQuery, Corpus, Item, TransactionId};

/// Brute force containment: merge each transaction's set view against the
/// query.
pub struct NaiveScan<'a> {
    corpus: &'a Corpus,
}

impl<'a> NaiveScan<'a> {
    pub fn new(corpus: &'a Corpus) -> Self {
        Self { corpus }
    }
}

impl Containment for NaiveScan<'_> {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn visit_matches(&self, query: &ContainmentQuery, visitor: &mut dyn Visitor<TransactionId>) {
        if query.is_empty() {
            return;
        }
        for (id, set) in self.corpus.iter_sets() {
            if is_subset(query, set) {
                visitor.visit(id);
            }
        }
    }
}

/// Merge subset test over two ascending, duplicate free sequences.
///
/// A query item smaller than the current transaction item can no longer be
/// matched, so the test fails right there.
pub fn is_subset(query: &[Item], transaction: &[Item]) -> bool {
    let mut idx_q = 0;
    let mut idx_t = 0;

    while idx_q < query.len() && idx_t < transaction.len() {
        match query[idx_q].cmp(&transaction[idx_t]) {
            Ordering::Less => return false,
            Ordering::Greater => idx_t += 1,
            Ordering::Equal => {
                idx_q += 1;
                idx_t += 1;
            }
        }
    }

    idx_q == query.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subset_examples() {
        assert!(is_subset(&[1, 3], &[1, 2, 3]));
        assert!(!is_subset(&[1, 3], &[2, 3]));
        assert!(!is_subset(&[1, 3], &[1, 2]));
        assert!(is_subset(&[], &[1, 2]));
        assert!(!is_subset(&[4], &[]));
        assert!(!is_subset(&[1, 9], &[1, 2, 3]));
    }

    #[test]
    fn scan_in_id_order() {
        let corpus = Corpus::new(vec![vec![1, 2, 3], vec![2, 3], vec![1, 3], vec![1, 2]]);
        let naive = NaiveScan::new(&corpus);
        assert_eq!(naive.matches(&ContainmentQuery::new([1, 3])), vec![0, 2]);
        assert_eq!(naive.matches(&ContainmentQuery::new([2])), vec![0, 1, 3]);
        assert_eq!(naive.count(&ContainmentQuery::new([3, 1])), 2);
    }
}
