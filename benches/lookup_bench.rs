use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use slangdex::config::SlangdexConfig;
use slangdex::dictionary::{RelationshipRecord, RelationshipTable};
use slangdex::expansion::{SearchTermExpander, build_alternative_index};
use slangdex::lexicon::Lexicon;
use slangdex::matcher::{FindOptions, FuzzyMatcher, WordListing};

fn generate_records(count: usize) -> Vec<RelationshipRecord> {
    (0..count)
        .map(|i| {
            RelationshipRecord::new(format!("term{i}"))
                .with_alternatives([format!("alt{i}"), format!("variant {i}")])
                .with_related([format!("term{}", (i + 1) % count)])
        })
        .collect()
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for count in [100, 1_000, 5_000] {
        let table = Arc::new(RelationshipTable::from_records(generate_records(count)));
        group.bench_function(format!("records_{count}"), |b| {
            b.iter(|| black_box(build_alternative_index(black_box(&table))))
        });
    }

    group.finish();
}

fn bench_expansion(c: &mut Criterion) {
    let table = Arc::new(RelationshipTable::from_records(generate_records(1_000)));
    let expander = SearchTermExpander::new(Arc::new(build_alternative_index(&table)));
    let mut group = c.benchmark_group("expansion");

    for term in ["alt500", "variant 5", "term999", "missing"] {
        group.bench_function(term, |b| b.iter(|| black_box(expander.expand(black_box(term)))));
    }

    group.finish();
}

fn bench_find_words(c: &mut Criterion) {
    let words: Vec<WordListing> = (0..2_000)
        .map(|i| WordListing::new(format!("word{i}"), format!("definition number {i}")))
        .collect();
    let matcher = FuzzyMatcher::default();
    let options = FindOptions::default();

    c.bench_function("find_words_2000", |b| {
        b.iter(|| black_box(matcher.find_words(black_box("wrod12"), &words, Some(10), &options)))
    });

    let lexicon = Lexicon::builtin(SlangdexConfig::default());
    c.bench_function("suggest_builtin", |b| {
        b.iter(|| black_box(lexicon.suggest(black_box("riz"), Some(10))))
    });
}

criterion_group!(benches, bench_index_build, bench_expansion, bench_find_words);
criterion_main!(benches);
