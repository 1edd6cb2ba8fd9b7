//! Normalized views of the transactions and queries the engines consume.

use std::ops::Deref;

use smallvec::SmallVec;

use crate::{Error, Item, Result, TransactionId};

/// Immutable transaction corpus.
///
/// Each transaction is kept twice: the multiset view in original order with
/// duplicates (relevance counts occurrences) and the set view, sorted and
/// deduplicated (containment engines merge against it).
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    multisets: Vec<Vec<Item>>,
    sets: Vec<Vec<Item>>,
}

impl Corpus {
    pub fn new(transactions: Vec<Vec<Item>>) -> Self {
        let sets = transactions
            .iter()
            .map(|t| sorted_distinct(t.iter().copied()))
            .collect();

        Self {
            multisets: transactions,
            sets,
        }
    }

    /// Number of transactions, N.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn sets(&self) -> &[Vec<Item>] {
        &self.sets
    }

    pub fn multisets(&self) -> &[Vec<Item>] {
        &self.multisets
    }

    pub fn set(&self, id: TransactionId) -> &[Item] {
        &self.sets[id as usize]
    }

    pub fn multiset(&self, id: TransactionId) -> &[Item] {
        &self.multisets[id as usize]
    }

    /// `(id, set view)` pairs in id order.
    pub fn iter_sets(&self) -> impl Iterator<Item = (TransactionId, &[Item])> + '_ {
        self.sets
            .iter()
            .enumerate()
            .map(|(id, set)| (id as TransactionId, set.as_slice()))
    }

    pub fn max_item(&self) -> Option<Item> {
        self.sets.iter().filter_map(|s| s.last().copied()).max()
    }
}

/// A containment query: distinct items in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContainmentQuery(SmallVec<[Item; 8]>);

impl ContainmentQuery {
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        let mut items: SmallVec<[Item; 8]> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self(items)
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.0
    }
}

impl Deref for ContainmentQuery {
    type Target = [Item];

    fn deref(&self) -> &[Item] {
        &self.0
    }
}

impl AsRef<[Item]> for ContainmentQuery {
    fn as_ref(&self) -> &[Item] {
        &self.0
    }
}

impl From<&[Item]> for ContainmentQuery {
    fn from(items: &[Item]) -> Self {
        Self::new(items.iter().copied())
    }
}

/// Queries exactly as read: original order, duplicates kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBatch {
    queries: Vec<Vec<Item>>,
}

impl QueryBatch {
    pub fn new(queries: Vec<Vec<Item>>) -> Self {
        Self { queries }
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Relevance view of every query.
    pub fn raw(&self) -> &[Vec<Item>] {
        &self.queries
    }

    /// Containment view of every query.
    pub fn containment(&self) -> Vec<ContainmentQuery> {
        self.queries
            .iter()
            .map(|q| ContainmentQuery::from(q.as_slice()))
            .collect()
    }

    /// Narrows the batch to the single query at `index`.
    pub fn select(self, index: usize) -> Result<QueryBatch> {
        let len = self.queries.len();
        let query = self.queries
            .into_iter()
            .nth(index)
            .ok_or(Error::QueryOutOfRange { index, len })?;
        Ok(QueryBatch::new(vec![query]))
    }
}

fn sorted_distinct(items: impl Iterator<Item = Item>) -> Vec<Item> {
    let mut set: Vec<Item> = items.collect();
    set.sort_unstable();
    set.dedup();
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_stay_consistent() {
        let corpus = Corpus::new(vec![vec![3, 1, 3, 2], vec![], vec![7, 7]]);
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.set(0), &[1, 2, 3]);
        assert_eq!(corpus.multiset(0), &[3, 1, 3, 2]);
        assert!(corpus.set(1).is_empty());
        assert_eq!(corpus.set(2), &[7]);
        assert_eq!(corpus.max_item(), Some(7));
    }

    #[test]
    fn containment_query_normalizes() {
        let query = ContainmentQuery::new([5, 1, 5, 3]);
        assert_eq!(query.as_slice(), &[1, 3, 5]);
    }

    #[test]
    fn select_single_query() {
        let batch = QueryBatch::new(vec![vec![1], vec![2, 2], vec![3]]);
        assert_eq!(batch.clone().select(1).unwrap().raw(), &[vec![2, 2]]);
        assert_eq!(
            batch.select(3),
            Err(Error::QueryOutOfRange { index: 3, len: 3 }),
        );
    }

    #[test]
    fn empty_corpus_has_no_max() {
        assert_eq!(Corpus::default().max_item(), None);
        assert_eq!(Corpus::new(vec![vec![], vec![]]).max_item(), None);
    }
}
