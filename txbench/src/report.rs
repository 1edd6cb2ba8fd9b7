use std::{fs::File, path::Path};

use serde::Serialize;

use crate::{run::MethodRun, timer::to_nanos};

/// Size figures of a built index. Fields that do not apply are omitted.
#[derive(Serialize, Debug, Default, Clone, PartialEq)]
pub struct IndexStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitmaps: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postings: Option<usize>,
}

#[derive(Serialize, Debug)]
pub struct Report {
    pub transactions: usize,
    pub queries: usize,
    pub methods: Vec<MethodReport>,
}

#[derive(Serialize, Debug)]
pub struct MethodReport {
    pub method: String,
    // Nanoseconds
    pub build: u64,
    pub query: u64,
    pub results: usize,
    pub index: IndexStats,
}

impl Report {
    pub fn new(transactions: usize, queries: usize, runs: &[MethodRun]) -> Self {
        let methods = runs
            .iter()
            .map(|run| MethodReport {
                method: run.method.name().to_string(),
                build: to_nanos(run.build),
                query: to_nanos(run.query),
                results: run.outcome.total_results(),
                index: run.stats.clone(),
            })
            .collect();

        Self { transactions, queries, methods }
    }
}

pub fn write_results(report: &Report, path: &Path) -> Result<(), String> {
    let results_file = File::options()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)
        .map_err(|e| format!(
            "failed to open file {}:\n{}",
            path.to_str().unwrap_or("<unknown>"),
            e
        ))?;

    serde_json::to_writer_pretty(results_file, report)
        .map_err(|e| e.to_string())?;

    Ok(())
}
