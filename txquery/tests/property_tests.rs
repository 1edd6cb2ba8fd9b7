#[macro_use(quickcheck)]
extern crate quickcheck;
mod testlib;
use testlib::{
    properties::{prop_containment_correct, prop_is_subset, prop_rank_ordered},
    NestedQueries, Transactions, Workload,
};
use txquery::{
    relevance::Rarity, BitSliceIndex, Containment, ContainmentQuery, InvertedIndex, NaiveRelevance,
    NaiveScan, OccurrenceIndex, Relevance, SignatureIndex,
};

quickcheck! {
    fn containment_methods_agree(workload: Workload) -> bool {
        let corpus = workload.transactions.corpus();
        let queries = workload.containment_queries();

        let expected = NaiveScan::new(&corpus).evaluate(&queries);
        let signature = SignatureIndex::build(&corpus).evaluate(&queries);
        let bitslice = BitSliceIndex::build(&corpus).evaluate(&queries);
        let inverted = InvertedIndex::build(&corpus).evaluate(&queries);

        signature == expected && bitslice == expected && inverted == expected
    }

    fn containment_correct(workload: Workload) -> bool {
        let corpus = workload.transactions.corpus();
        let engines: [Box<dyn Containment + '_>; 4] = [
            Box::new(NaiveScan::new(&corpus)),
            Box::new(SignatureIndex::build(&corpus)),
            Box::new(BitSliceIndex::build(&corpus)),
            Box::new(InvertedIndex::build(&corpus)),
        ];

        workload.containment_queries().iter().all(|query| {
            engines.iter().all(|engine| {
                prop_containment_correct(&engine.matches(query), &corpus, query)
            })
        })
    }

    fn empty_query_matches_nothing(transactions: Transactions) -> bool {
        let corpus = transactions.corpus();
        let empty = ContainmentQuery::default();

        NaiveScan::new(&corpus).matches(&empty).is_empty() &&
        SignatureIndex::build(&corpus).matches(&empty).is_empty() &&
        BitSliceIndex::build(&corpus).matches(&empty).is_empty() &&
        InvertedIndex::build(&corpus).matches(&empty).is_empty()
    }

    fn containment_monotone(nested: NestedQueries) -> bool {
        let corpus = nested.transactions.corpus();
        let index = InvertedIndex::build(&corpus);
        let naive = NaiveScan::new(&corpus);

        prop_is_subset(&index.matches(&nested.large), &index.matches(&nested.small)) &&
        prop_is_subset(&naive.matches(&nested.large), &naive.matches(&nested.small))
    }

    fn bitslices_transpose_signatures(transactions: Transactions) -> bool {
        let corpus = transactions.corpus();
        let signatures = SignatureIndex::build(&corpus);
        let bitslice = BitSliceIndex::build(&corpus);

        let forward = signatures.signatures().iter().enumerate().all(|(id, signature)| {
            signature.iter_ones().all(|item| {
                bitslice.slice(item).map_or(false, |slice| slice.contains(id as u32))
            })
        });
        let backward = bitslice.slices().all(|(item, slice)| {
            slice.iter_ones().all(|id| signatures.signature(id).contains(item))
        });
        forward && backward
    }

    fn relevance_methods_agree(workload: Workload) -> bool {
        let corpus = workload.transactions.corpus();
        let index = OccurrenceIndex::build(&corpus);
        let naive = NaiveRelevance::new(&corpus, index.rarity());

        naive.evaluate(&workload.queries, None) == index.evaluate(&workload.queries, None)
    }

    fn relevance_rank_ordered(workload: Workload) -> bool {
        let corpus = workload.transactions.corpus();
        let index = OccurrenceIndex::build(&corpus);

        workload.queries.iter().all(|query| prop_rank_ordered(&index.rank(query, None)))
    }

    fn truncation_is_prefix(workload: Workload, limit: usize) -> bool {
        let limit = limit % 12;
        let corpus = workload.transactions.corpus();
        let index = OccurrenceIndex::build(&corpus);
        let naive = NaiveRelevance::new(&corpus, index.rarity());

        workload.queries.iter().all(|query| {
            let full = index.rank(query, None);
            let prefix = &full[..limit.min(full.len())];
            index.rank(query, Some(limit)) == prefix && naive.rank(query, Some(limit)) == prefix
        })
    }

    fn rarity_is_n_over_document_frequency(transactions: Transactions) -> bool {
        let corpus = transactions.corpus();
        let index = OccurrenceIndex::build(&corpus);
        let postings = InvertedIndex::build(&corpus);

        let defined = postings.iter().all(|(item, ids)| {
            let weight = index.rarity().weight(item);
            weight > 0.0 && weight == corpus.len() as f64 / ids.len() as f64
        });
        defined &&
            index.rarity().len() == postings.item_count() &&
            *index.rarity() == Rarity::from_corpus(&corpus)
    }
}
