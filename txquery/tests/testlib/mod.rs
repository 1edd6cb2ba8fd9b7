pub mod properties;

use quickcheck::{Arbitrary, Gen};
use txquery::{ContainmentQuery, Corpus, Item};

// Wider than one 64-bit word so bitmaps span several words.
const UNIVERSE: u32 = 150;

fn item(g: &mut Gen) -> Item {
    u32::arbitrary(g) % UNIVERSE
}

fn items(g: &mut Gen, max_len: usize) -> Vec<Item> {
    let len = usize::arbitrary(g) % (max_len + 1);
    (0..len).map(|_| item(g)).collect()
}

// Arbitrary Corpus //
#[derive(Debug, Clone)]
pub struct Transactions(pub Vec<Vec<Item>>);

impl Transactions {
    pub fn corpus(&self) -> Corpus {
        Corpus::new(self.0.clone())
    }
}

impl Arbitrary for Transactions {
    fn arbitrary(g: &mut Gen) -> Self {
        let count = usize::arbitrary(g) % 48;
        Self((0..count).map(|_| items(g, 12)).collect())
    }
}

/// Query drawn mostly from items of an existing transaction, so matches are
/// common rather than accidental.
fn query_for(transactions: &[Vec<Item>], g: &mut Gen) -> Vec<Item> {
    if transactions.is_empty() || bool::arbitrary(g) && bool::arbitrary(g) {
        let mut query = items(g, 4);
        if query.is_empty() {
            query.push(item(g));
        }
        return query;
    }

    let source = &transactions[usize::arbitrary(g) % transactions.len()];
    let mut query: Vec<Item> = source.iter().copied().filter(|_| bool::arbitrary(g)).collect();
    if bool::arbitrary(g) && bool::arbitrary(g) {
        query.push(item(g));
    }
    if query.is_empty() {
        query.push(source.first().copied().unwrap_or_else(|| item(g)));
    }
    query
}

// Arbitrary Workload //
#[derive(Debug, Clone)]
pub struct Workload {
    pub transactions: Transactions,
    pub queries: Vec<Vec<Item>>,
}

impl Workload {
    pub fn containment_queries(&self) -> Vec<ContainmentQuery> {
        self.queries
            .iter()
            .map(|q| ContainmentQuery::from(q.as_slice()))
            .collect()
    }
}

impl Arbitrary for Workload {
    fn arbitrary(g: &mut Gen) -> Self {
        let transactions = Transactions::arbitrary(g);
        let count = usize::arbitrary(g) % 6 + 1;
        let queries = (0..count).map(|_| query_for(&transactions.0, g)).collect();
        Self { transactions, queries }
    }
}

// Arbitrary pair of nested queries //
#[derive(Debug, Clone)]
pub struct NestedQueries {
    pub transactions: Transactions,
    pub small: ContainmentQuery,
    pub large: ContainmentQuery,
}

impl Arbitrary for NestedQueries {
    fn arbitrary(g: &mut Gen) -> Self {
        let transactions = Transactions::arbitrary(g);
        let small = query_for(&transactions.0, g);
        let mut large = small.clone();
        large.extend(query_for(&transactions.0, g));

        Self {
            transactions,
            small: ContainmentQuery::new(small),
            large: ContainmentQuery::new(large),
        }
    }
}
