use criterion::{criterion_group, criterion_main, Criterion};
use tfidf_schemes::{CombinedScheme, Corpus, Document, SchemeSelection, TfIdfEngine};

/// deterministic synthetic corpus with a skewed vocabulary
fn synthetic_documents(doc_num: usize, doc_len: usize) -> Vec<Document> {
    let mut state: u32 = 0x9E37_79B9;
    (0..doc_num)
        .map(|i| {
            let terms = (0..doc_len).map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                // squaring skews toward low ids, like natural text
                let r = (state % 1000) as u64;
                format!("term{}", r * r / 1000)
            });
            Document::new(terms.collect::<Vec<_>>(), format!("doc{}", i + 1))
        })
        .collect()
}

fn tfidf_benchmark(c: &mut Criterion) {
    let documents = synthetic_documents(2_000, 300);

    c.bench_function("build_corpus", |b| {
        b.iter(|| Corpus::new(documents.clone()))
    });

    let engine = TfIdfEngine::new(Corpus::new(documents));
    let selection = SchemeSelection::combined(CombinedScheme::Standard);

    c.bench_function("calculate_scores", |b| {
        b.iter(|| engine.calculate_with(&selection))
    });

    c.bench_function("par_calculate_scores", |b| {
        b.iter(|| engine.par_calculate_scores(&selection))
    });
}

criterion_group!(benches, tfidf_benchmark);
criterion_main!(benches);
