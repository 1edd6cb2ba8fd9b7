use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    bitmap::Bitmap, visitor::Visitor, Containment, ContainmentQuery, Corpus, Item, TransactionId,
};

/// The transpose of the signature index: one bitmap per item, bit `j` set
/// iff transaction `j` holds the item. Slices are `N` bits wide.
#[derive(Debug, Clone, Default)]
pub struct BitSliceIndex {
    slices: BTreeMap<Item, Bitmap>,
    transaction_count: usize,
}

impl BitSliceIndex {
    pub fn build(corpus: &Corpus) -> Self {
        let transaction_count = corpus.len();
        let mut slices: BTreeMap<Item, Bitmap> = BTreeMap::new();

        for (id, set) in corpus.iter_sets() {
            for &item in set {
                slices
                    .entry(item)
                    .or_insert_with(|| Bitmap::new(transaction_count))
                    .insert(id);
            }
        }

        debug!(items = slices.len(), transaction_count, "built bit-slice index");
        Self { slices, transaction_count }
    }

    pub fn slice(&self, item: Item) -> Option<&Bitmap> {
        self.slices.get(&item)
    }

    /// `(item, slice)` pairs in ascending item order.
    pub fn slices(&self) -> impl Iterator<Item = (Item, &Bitmap)> + '_ {
        self.slices.iter().map(|(&item, slice)| (item, slice))
    }

    pub fn item_count(&self) -> usize {
        self.slices.len()
    }

    pub fn transaction_count(&self) -> usize {
        self.transaction_count
    }
}

impl Containment for BitSliceIndex {
    fn name(&self) -> &'static str {
        "bitslice"
    }

    /// ANDs the slices of every query item. There is no identity slice to
    /// start from, so an empty query matches nothing; an unknown item zeroes
    /// the result.
    fn visit_matches(&self, query: &ContainmentQuery, visitor: &mut dyn Visitor<TransactionId>) {
        let Some((&first, rest)) = query.split_first() else {
            return;
        };
        let Some(first_slice) = self.slices.get(&first) else {
            return;
        };

        let mut result = first_slice.clone();
        for item in rest {
            match self.slices.get(item) {
                Some(slice) => result.intersect_with(slice),
                None => return,
            }
            if result.is_empty() {
                return;
            }
        }

        result.visit_ones(visitor);
    }
}
