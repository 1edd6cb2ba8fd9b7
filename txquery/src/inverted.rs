use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    intersect::run_svs, visitor::Visitor, Containment, ContainmentQuery, Corpus, Item,
    TransactionId,
};

/// Item to ascending postings list of the transactions holding it.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: BTreeMap<Item, Vec<TransactionId>>,
}

impl InvertedIndex {
    pub fn build(corpus: &Corpus) -> Self {
        let mut postings: BTreeMap<Item, Vec<TransactionId>> = BTreeMap::new();

        // Ids are visited in ascending order, so every list is born sorted.
        for (id, set) in corpus.iter_sets() {
            for &item in set {
                postings.entry(item).or_default().push(id);
            }
        }

        let index = Self { postings };
        debug!(
            items = index.item_count(),
            postings = index.total_postings(),
            "built inverted index"
        );
        index
    }

    /// Postings for `item`, empty when the item is unknown.
    pub fn postings(&self, item: Item) -> &[TransactionId] {
        self.postings.get(&item).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `(item, postings)` pairs in ascending item order.
    pub fn iter(&self) -> impl Iterator<Item = (Item, &[TransactionId])> + '_ {
        self.postings.iter().map(|(&item, list)| (item, list.as_slice()))
    }

    pub fn item_count(&self) -> usize {
        self.postings.len()
    }

    pub fn total_postings(&self) -> usize {
        self.postings.values().map(Vec::len).sum()
    }
}

impl Containment for InvertedIndex {
    fn name(&self) -> &'static str {
        "inverted"
    }

    /// Intersects the postings of the query items in query order, stopping
    /// once the running result is empty.
    fn visit_matches(&self, query: &ContainmentQuery, visitor: &mut dyn Visitor<TransactionId>) {
        let lists: Vec<&[TransactionId]> = query.iter().map(|&item| self.postings(item)).collect();
        run_svs(&lists, visitor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postings_are_sorted_and_distinct() {
        let corpus = Corpus::new(vec![vec![3, 1, 1], vec![2], vec![1, 2]]);
        let index = InvertedIndex::build(&corpus);
        assert_eq!(index.postings(1), &[0, 2]);
        assert_eq!(index.postings(2), &[1, 2]);
        assert_eq!(index.postings(3), &[0]);
        assert!(index.postings(4).is_empty());
        assert_eq!(index.total_postings(), 5);
    }

    #[test]
    fn intersection_of_postings() {
        let corpus = Corpus::new(vec![vec![1, 2, 3], vec![2, 3], vec![1, 3], vec![1, 2]]);
        let index = InvertedIndex::build(&corpus);
        assert_eq!(index.matches(&ContainmentQuery::new([1, 3])), vec![0, 2]);
        assert_eq!(index.matches(&ContainmentQuery::new([1, 2, 3])), vec![0]);
        assert!(index.matches(&ContainmentQuery::new([1, 7])).is_empty());
        assert!(index.matches(&ContainmentQuery::default()).is_empty());
    }
}
