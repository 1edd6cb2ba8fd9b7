//! Rarity weights and the scan based relevance reference.

use std::collections::BTreeMap;

use crate::{rank::Ranked, Corpus, Item, Relevance, TransactionId};

/// Inverse document frequency style weights: `N / df(item)` for every item
/// present in at least one transaction. Unknown items weigh nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rarity {
    weights: BTreeMap<Item, f64>,
}

impl Rarity {
    /// `document_frequencies` yields each item with the number of distinct
    /// transactions holding it.
    pub fn from_document_frequencies(
        document_frequencies: impl IntoIterator<Item = (Item, usize)>,
        transaction_count: usize) -> Self
    {
        let weights = document_frequencies
            .into_iter()
            .filter(|&(_, df)| df > 0)
            .map(|(item, df)| (item, transaction_count as f64 / df as f64))
            .collect();
        Self { weights }
    }

    pub fn from_corpus(corpus: &Corpus) -> Self {
        let mut frequencies: BTreeMap<Item, usize> = BTreeMap::new();
        for set in corpus.sets() {
            for &item in set {
                *frequencies.entry(item).or_default() += 1;
            }
        }
        Self::from_document_frequencies(frequencies, corpus.len())
    }

    pub fn weight(&self, item: Item) -> f64 {
        self.weights.get(&item).copied().unwrap_or(0.0)
    }

    pub fn get(&self, item: Item) -> Option<f64> {
        self.weights.get(&item).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Reference relevance engine: scans every transaction's multiset view and
/// counts query items linearly.
pub struct NaiveRelevance<'a> {
    corpus: &'a Corpus,
    rarity: &'a Rarity,
}

impl<'a> NaiveRelevance<'a> {
    pub fn new(corpus: &'a Corpus, rarity: &'a Rarity) -> Self {
        Self { corpus, rarity }
    }
}

impl Relevance for NaiveRelevance<'_> {
    fn name(&self) -> &'static str {
        "relevance-naive"
    }

    fn scores(&self, query: &[Item]) -> Vec<Ranked> {
        let mut ranked = Vec::new();
        for (id, transaction) in self.corpus.multisets().iter().enumerate() {
            let score = score(query, self.rarity, |item| {
                transaction.iter().filter(|&&t| t == item).count() as u32
            });
            if score > 0.0 {
                ranked.push(Ranked::new(score, id as TransactionId));
            }
        }
        ranked
    }
}

/// Sum over query items, repeats included, of occurrence times rarity.
///
/// Both relevance engines accumulate through here in query order so their
/// scores are bit-identical.
pub(crate) fn score(query: &[Item], rarity: &Rarity, occurrences: impl Fn(Item) -> u32) -> f64 {
    query
        .iter()
        .fold(0.0, |acc, &item| acc + occurrences(item) as f64 * rarity.weight(item))
}
