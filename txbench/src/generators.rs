//! Synthetic transaction workloads. Item popularity follows a Zipf
//! distribution, so a few items appear in most transactions and the long
//! tail is rare.

use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};
use txquery::Item;
use zipf::ZipfDistribution;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenParams {
    pub transactions: usize,
    pub mean_length: usize,
    pub universe: usize,
    pub exponent: f64,
    pub queries: usize,
    pub query_length: usize,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            transactions: 10_000,
            mean_length: 10,
            universe: 1_000,
            exponent: 1.0,
            queries: 100,
            query_length: 3,
        }
    }
}

fn item_distribution(params: &GenParams) -> Result<ZipfDistribution, String> {
    ZipfDistribution::new(params.universe, params.exponent)
        .map_err(|()| format!(
            "Failed to create discrete Zipf distribution with (num_elements = {}, exponent = {}).",
            params.universe, params.exponent
        ))
}

/// Transactions of uniformly drawn length with mean `mean_length`. Items may
/// repeat within a transaction.
pub fn gen_transactions(params: &GenParams, rng: &mut impl Rng) -> Result<Vec<Vec<Item>>, String> {
    if params.mean_length == 0 {
        return Err("mean_length must be at least 1".to_string());
    }
    let items = item_distribution(params)?;
    let max_length = 2 * params.mean_length - 1;

    let transactions: Vec<Vec<Item>> = (0..params.transactions)
        .map(|_| {
            let length = rng.gen_range(1..=max_length);
            (0..length)
                .map(|_| (rng.sample(&items) - 1) as Item)
                .collect::<Vec<Item>>()
        })
        .collect();
    Ok(transactions)
}

/// Queries of up to `query_length` distinct items taken from one random
/// transaction each, so every query has at least one match.
pub fn gen_queries(
    transactions: &[Vec<Item>],
    params: &GenParams,
    rng: &mut impl Rng) -> Result<Vec<Vec<Item>>, String>
{
    let sources: Vec<&Vec<Item>> = transactions.iter().filter(|t| !t.is_empty()).collect();
    if sources.is_empty() {
        return Err("cannot draw queries from an empty corpus".to_string());
    }

    let queries: Vec<Vec<Item>> = (0..params.queries)
        .map(|_| {
            let mut distinct = sources[rng.gen_range(0..sources.len())].clone();
            distinct.sort_unstable();
            distinct.dedup();
            let mut query: Vec<Item> = distinct
                .choose_multiple(rng, params.query_length)
                .copied()
                .collect();
            query.sort_unstable();
            query
        })
        .collect();
    Ok(queries)
}

/// One comma separated record per line.
pub fn to_text(records: &[Vec<Item>]) -> String {
    let mut text = String::new();
    for record in records {
        let fields: Vec<String> = record.iter().map(|i| i.to_string()).collect();
        text.push_str(&fields.join(","));
        text.push('\n');
    }
    text
}
