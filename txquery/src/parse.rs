//! Delimited text input.
//!
//! One record per line, fields separated by commas. Every `[` and `]` in a
//! field is dropped and surrounding whitespace ignored, so `1, 2, 3`,
//! `[1, 2, 3]` and `[[1], 2, 3]` all read the same. A blank or whitespace
//! only line is an empty record, in transaction and query files alike. Any
//! other field that is not a nonnegative `u32` aborts the parse.

use crate::{Corpus, Error, Item, QueryBatch, Result};

pub fn parse_records(text: &str) -> Result<Vec<Vec<Item>>> {
    text.lines()
        .enumerate()
        .map(|(i, line)| parse_record(line, i + 1))
        .collect()
}

pub fn parse_transactions(text: &str) -> Result<Corpus> {
    parse_records(text).map(Corpus::new)
}

pub fn parse_queries(text: &str) -> Result<QueryBatch> {
    parse_records(text).map(QueryBatch::new)
}

fn parse_record(line: &str, line_number: usize) -> Result<Vec<Item>> {
    if line.trim().is_empty() {
        return Ok(Vec::new());
    }

    line.split(',')
        .map(|field| {
            let cleaned: String = field.chars().filter(|&c| c != '[' && c != ']').collect();
            cleaned.trim().parse::<Item>().map_err(|_| Error::Malformed {
                line: line_number,
                field: field.to_string(),
            })
        })
        .collect()
}
