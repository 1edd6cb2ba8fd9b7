use std::collections::BTreeMap;

use smallvec::SmallVec;
use tracing::debug;

use crate::{
    rank::Ranked,
    relevance::{score, Rarity},
    Corpus, Item, Relevance, TransactionId,
};

/// `(transaction id, occurrence count)`, count at least 1.
pub type Occurrence = (TransactionId, u32);

/// Occurrence counts of the query items within one transaction.
pub type OccurrenceRow = SmallVec<[(Item, u32); 4]>;

/// Item to ascending occurrence postings, plus a rarity weight per item.
#[derive(Debug, Clone, Default)]
pub struct OccurrenceIndex {
    postings: BTreeMap<Item, Vec<Occurrence>>,
    rarity: Rarity,
    transaction_count: usize,
}

impl OccurrenceIndex {
    pub fn build(corpus: &Corpus) -> Self {
        let mut postings: BTreeMap<Item, Vec<Occurrence>> = BTreeMap::new();

        for (id, transaction) in corpus.multisets().iter().enumerate() {
            let id = id as TransactionId;
            for &item in transaction {
                let list = postings.entry(item).or_default();
                if let Some((last_id, count)) = list.last_mut() {
                    if *last_id == id {
                        *count += 1;
                        continue;
                    }
                }
                list.push((id, 1));
            }
        }

        let rarity = Rarity::from_document_frequencies(
            postings.iter().map(|(&item, list)| (item, list.len())),
            corpus.len(),
        );

        debug!(items = postings.len(), transactions = corpus.len(), "built occurrence index");
        Self {
            postings,
            rarity,
            transaction_count: corpus.len(),
        }
    }

    pub fn rarity(&self) -> &Rarity {
        &self.rarity
    }

    /// Occurrence postings for `item`, empty when the item is unknown.
    pub fn postings(&self, item: Item) -> &[Occurrence] {
        self.postings.get(&item).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `(item, rarity, postings)` in ascending item order.
    pub fn iter(&self) -> impl Iterator<Item = (Item, f64, &[Occurrence])> + '_ {
        self.postings
            .iter()
            .map(|(&item, list)| (item, self.rarity.weight(item), list.as_slice()))
    }

    pub fn item_count(&self) -> usize {
        self.postings.len()
    }

    pub fn transaction_count(&self) -> usize {
        self.transaction_count
    }

    /// Union of the occurrence postings of the distinct query items, keyed
    /// by transaction id.
    pub fn union(&self, query: &[Item]) -> BTreeMap<TransactionId, OccurrenceRow> {
        let mut union: BTreeMap<TransactionId, OccurrenceRow> = BTreeMap::new();

        for (i, &item) in query.iter().enumerate() {
            if query[..i].contains(&item) {
                continue;
            }
            for &(id, count) in self.postings(item) {
                union.entry(id).or_default().push((item, count));
            }
        }
        union
    }
}

impl Relevance for OccurrenceIndex {
    fn name(&self) -> &'static str {
        "relevance-inverted"
    }

    fn scores(&self, query: &[Item]) -> Vec<Ranked> {
        self.union(query)
            .into_iter()
            .filter_map(|(id, row)| {
                let score = score(query, &self.rarity, |item| {
                    row.iter()
                        .find(|&&(i, _)| i == item)
                        .map(|&(_, count)| count)
                        .unwrap_or(0)
                });
                (score > 0.0).then(|| Ranked::new(score, id))
            })
            .collect()
    }
}
