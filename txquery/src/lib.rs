pub mod bitmap;
pub mod bitslice;
pub mod corpus;
pub mod error;
pub mod export;
pub mod intersect;
pub mod inverted;
pub mod naive;
pub mod occurrence;
pub mod parse;
pub mod rank;
pub mod relevance;
pub mod signature;
pub mod visitor;

pub use {
    bitslice::BitSliceIndex,
    corpus::{ContainmentQuery, Corpus, QueryBatch},
    error::{Error, Result},
    export::Export,
    inverted::InvertedIndex,
    naive::NaiveScan,
    occurrence::OccurrenceIndex,
    rank::Ranked,
    relevance::NaiveRelevance,
    signature::SignatureIndex,
};

use visitor::{Counter, VecWriter, Visitor};

/// Item identifier. Doubles as a bit position in signature bitmaps.
pub type Item = u32;

/// Position of a transaction in the corpus, 0-based.
pub type TransactionId = u32;

/// A containment engine answers "which transactions contain every item of
/// the query?". Matching ids are visited in ascending order.
///
/// All engines agree that an empty query matches nothing.
pub trait Containment: Sync {
    fn name(&self) -> &'static str;

    fn visit_matches(&self, query: &ContainmentQuery, visitor: &mut dyn Visitor<TransactionId>);

    fn matches(&self, query: &ContainmentQuery) -> Vec<TransactionId> {
        let mut writer = VecWriter::new();
        self.visit_matches(query, &mut writer);
        writer.into()
    }

    fn count(&self, query: &ContainmentQuery) -> usize {
        let mut counter = Counter::new();
        self.visit_matches(query, &mut counter);
        counter.count()
    }

    /// Evaluates a batch, results in query order.
    fn evaluate(&self, queries: &[ContainmentQuery]) -> Vec<Vec<TransactionId>> {
        queries.iter().map(|q| self.matches(q)).collect()
    }
}

/// A relevance engine scores transactions by rarity-weighted overlap with a
/// query.
pub trait Relevance: Sync {
    fn name(&self) -> &'static str;

    /// Every transaction with a positive score, in no particular order.
    fn scores(&self, query: &[Item]) -> Vec<Ranked>;

    fn rank(&self, query: &[Item], limit: Option<usize>) -> Vec<Ranked> {
        let mut ranked = self.scores(query);
        rank::sort_and_truncate(&mut ranked, limit);
        ranked
    }

    /// Evaluates a batch, results in query order.
    fn evaluate<Q: AsRef<[Item]>>(&self, queries: &[Q], limit: Option<usize>) -> Vec<Vec<Ranked>>
    where
        Self: Sized,
    {
        queries.iter().map(|q| self.rank(q.as_ref(), limit)).collect()
    }
}
