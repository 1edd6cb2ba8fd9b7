//! Builds the selected indexes and evaluates the query batch with each
//! method.

use std::{fs, path::Path, time::Duration};

use indicatif::ParallelProgressIterator;
use rayon::prelude::*;
use tracing::info;
use txquery::{
    parse, relevance::Rarity, BitSliceIndex, Containment, ContainmentQuery, Corpus, Export,
    InvertedIndex, Item, NaiveRelevance, NaiveScan, OccurrenceIndex, QueryBatch, Ranked,
    Relevance, SignatureIndex, TransactionId,
};

use crate::{
    config::Settings,
    fmt_open_err,
    methods::{Method, MethodKind},
    path_str,
    report::IndexStats,
    timer::time,
};

/// Parsed inputs of a run.
pub struct Workload {
    pub corpus: Corpus,
    pub queries: QueryBatch,
}

impl Workload {
    /// Reads both input files and applies the single query selector.
    pub fn load(settings: &Settings) -> Result<Self, String> {
        let corpus = parse::parse_transactions(&read_input(&settings.transactions)?)
            .map_err(|e| format!("{}: {}", path_str(&settings.transactions), e))?;
        let mut queries = parse::parse_queries(&read_input(&settings.queries)?)
            .map_err(|e| format!("{}: {}", path_str(&settings.queries), e))?;

        if let Some(index) = settings.query {
            queries = queries.select(index).map_err(|e| e.to_string())?;
        }

        Ok(Self { corpus, queries })
    }
}

fn read_input(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| fmt_open_err(e, path))
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Containment(Vec<Vec<TransactionId>>),
    Relevance(Vec<Vec<Ranked>>),
}

impl Outcome {
    pub fn total_results(&self) -> usize {
        match self {
            Outcome::Containment(results) => results.iter().map(Vec::len).sum(),
            Outcome::Relevance(results) => results.iter().map(Vec::len).sum(),
        }
    }
}

pub struct MethodRun {
    pub method: Method,
    pub build: Duration,
    pub query: Duration,
    pub outcome: Outcome,
    pub stats: IndexStats,
}

/// Runs every selected method over the workload, in selector order.
pub fn run_methods(settings: &Settings, workload: &Workload) -> Result<Vec<MethodRun>, String> {
    let containment_queries = workload.queries.containment();

    settings.selector
        .methods()
        .into_iter()
        .map(|method| {
            info!(%method, "running");
            run_method(method, settings, workload, &containment_queries)
        })
        .collect()
}

fn run_method(
    method: Method,
    settings: &Settings,
    workload: &Workload,
    containment_queries: &[ContainmentQuery]) -> Result<MethodRun, String>
{
    let corpus = &workload.corpus;
    let queries = workload.queries.raw();

    let run = match method {
        Method::Naive => {
            let engine = NaiveScan::new(corpus);
            containment_run(method, Duration::ZERO, &engine, containment_queries, settings, IndexStats::default())
        }
        Method::Signature => {
            let (build, index) = time(|| SignatureIndex::build(corpus));
            dump(settings, method, &index)?;
            let stats = IndexStats {
                bitmaps: Some(index.len()),
                width: Some(index.width()),
                ..Default::default()
            };
            containment_run(method, build, &index, containment_queries, settings, stats)
        }
        Method::Bitslice => {
            let (build, index) = time(|| BitSliceIndex::build(corpus));
            dump(settings, method, &index)?;
            let stats = IndexStats {
                bitmaps: Some(index.item_count()),
                width: Some(index.transaction_count()),
                ..Default::default()
            };
            containment_run(method, build, &index, containment_queries, settings, stats)
        }
        Method::Inverted => {
            let (build, index) = time(|| InvertedIndex::build(corpus));
            dump(settings, method, &index)?;
            let stats = IndexStats {
                items: Some(index.item_count()),
                postings: Some(index.total_postings()),
                ..Default::default()
            };
            containment_run(method, build, &index, containment_queries, settings, stats)
        }
        Method::RelevanceNaive => {
            let (build, rarity) = time(|| Rarity::from_corpus(corpus));
            let engine = NaiveRelevance::new(corpus, &rarity);
            let stats = IndexStats {
                items: Some(rarity.len()),
                ..Default::default()
            };
            relevance_run(method, build, &engine, queries, settings, stats)
        }
        Method::RelevanceInverted => {
            let (build, index) = time(|| OccurrenceIndex::build(corpus));
            dump(settings, method, &index)?;
            let stats = IndexStats {
                items: Some(index.item_count()),
                ..Default::default()
            };
            relevance_run(method, build, &index, queries, settings, stats)
        }
    };

    Ok(run)
}

fn containment_run(
    method: Method,
    build: Duration,
    engine: &dyn Containment,
    queries: &[ContainmentQuery],
    settings: &Settings,
    stats: IndexStats) -> MethodRun
{
    let (query, results): (Duration, Vec<Vec<TransactionId>>) = time(|| {
        if settings.parallel {
            queries
                .par_iter()
                .progress_count(queries.len() as u64)
                .map(|q| engine.matches(q))
                .collect()
        } else {
            engine.evaluate(queries)
        }
    });

    MethodRun { method, build, query, outcome: Outcome::Containment(results), stats }
}

fn relevance_run(
    method: Method,
    build: Duration,
    engine: &dyn Relevance,
    queries: &[Vec<Item>],
    settings: &Settings,
    stats: IndexStats) -> MethodRun
{
    let limit = settings.limit;
    let (query, results): (Duration, Vec<Vec<Ranked>>) = time(|| {
        if settings.parallel {
            queries
                .par_iter()
                .progress_count(queries.len() as u64)
                .map(|q| engine.rank(q, limit))
                .collect()
        } else {
            queries.iter().map(|q| engine.rank(q, limit)).collect()
        }
    });

    MethodRun { method, build, query, outcome: Outcome::Relevance(results), stats }
}

/// Writes the index dump for `method` when a dump directory is configured.
/// Runs outside the timed sections.
fn dump(settings: &Settings, method: Method, index: &dyn Export) -> Result<(), String> {
    let (Some(dir), Some(file)) = (&settings.dump_dir, method.dump_file()) else {
        return Ok(());
    };

    fs::create_dir_all(dir)
        .map_err(|e| format!("failed to create directory {}: {}", path_str(dir), e))?;

    let path = dir.join(file);
    fs::write(&path, index.export())
        .map_err(|e| format!("failed to write {}: {}", path_str(&path), e))?;

    info!(path = path_str(&path), "wrote index dump");
    Ok(())
}

/// Checks that every method of the same kind produced identical results.
pub fn verify(runs: &[MethodRun]) -> Result<(), String> {
    for kind in [MethodKind::Containment, MethodKind::Relevance] {
        let mut same_kind = runs.iter().filter(|r| r.method.kind() == kind);
        let Some(reference) = same_kind.next() else {
            continue;
        };

        for other in same_kind {
            if let Some(query) = first_difference(&reference.outcome, &other.outcome) {
                return Err(format!(
                    "{} and {} disagree on query #{}",
                    reference.method, other.method, query
                ));
            }
        }
    }
    Ok(())
}

fn first_difference(a: &Outcome, b: &Outcome) -> Option<usize> {
    fn position<T: PartialEq>(a: &[T], b: &[T]) -> Option<usize> {
        if a.len() != b.len() {
            return Some(a.len().min(b.len()));
        }
        a.iter().zip(b).position(|(x, y)| x != y)
    }

    match (a, b) {
        (Outcome::Containment(a), Outcome::Containment(b)) => position(a, b),
        (Outcome::Relevance(a), Outcome::Relevance(b)) => position(a, b),
        _ => Some(0),
    }
}
