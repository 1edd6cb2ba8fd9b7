mod benchlib;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use txquery::{
    BitSliceIndex, Containment, ContainmentQuery, Corpus, InvertedIndex, NaiveRelevance,
    NaiveScan, OccurrenceIndex, Relevance, SignatureIndex,
};

const SAMPLE_SIZE: usize = 16;
const UNIVERSE: u32 = 1000;
const TRANSACTION_LENGTH: usize = 16;
const QUERY_COUNT: usize = 32;
const QUERY_LENGTH: usize = 3;

criterion_group!(benches,
    bench_containment,
    bench_relevance,
);
criterion_main!(benches);

fn bench_containment(c: &mut Criterion) {
    let mut group = c.benchmark_group("containment");
    group.sample_size(SAMPLE_SIZE);

    const K: usize = 1000;
    for size in [K, 4 * K, 16 * K] {
        let transactions = benchlib::uniform_transactions(size, TRANSACTION_LENGTH, UNIVERSE);
        let queries: Vec<ContainmentQuery> =
            benchlib::queries_from(&transactions, QUERY_COUNT, QUERY_LENGTH)
            .into_iter()
            .map(ContainmentQuery::new)
            .collect();
        let corpus = Corpus::new(transactions);

        let engines: [Box<dyn Containment + '_>; 4] = [
            Box::new(NaiveScan::new(&corpus)),
            Box::new(SignatureIndex::build(&corpus)),
            Box::new(BitSliceIndex::build(&corpus)),
            Box::new(InvertedIndex::build(&corpus)),
        ];

        for engine in &engines {
            group.bench_with_input(BenchmarkId::new(engine.name(), size), &queries,
                |b, queries| b.iter(|| engine.evaluate(queries)));
        }
    }
    group.finish();
}

fn bench_relevance(c: &mut Criterion) {
    let mut group = c.benchmark_group("relevance");
    group.sample_size(SAMPLE_SIZE);

    const K: usize = 1000;
    for size in [K, 4 * K, 16 * K] {
        let transactions = benchlib::uniform_transactions(size, TRANSACTION_LENGTH, UNIVERSE);
        let queries = benchlib::queries_from(&transactions, QUERY_COUNT, QUERY_LENGTH);
        let corpus = Corpus::new(transactions);
        let index = OccurrenceIndex::build(&corpus);
        let naive = NaiveRelevance::new(&corpus, index.rarity());

        group.bench_with_input(BenchmarkId::new(naive.name(), size), &queries,
            |b, queries| b.iter(|| naive.evaluate(queries, Some(10))));
        group.bench_with_input(BenchmarkId::new(index.name(), size), &queries,
            |b, queries| b.iter(|| index.evaluate(queries, Some(10))));
    }
    group.finish();
}
