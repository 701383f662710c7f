use criterion::{criterion_group, criterion_main, Criterion};
use leaserank::graph::{EdgeWeight, Subgraph, TransactionGraph};
use leaserank::ingest::TransactionRecord;
use leaserank::ranking::{self, RankingConfig};

/// Deterministic synthetic workload: every lessee transacts with a few
/// lessors picked by modular striding, spread over two provinces.
fn synthetic_records(lessees: usize, lessors: usize) -> Vec<TransactionRecord> {
    let mut records = Vec::with_capacity(lessees * 4);
    for i in 0..lessees {
        for j in 0..4 {
            let lessor = (i * 7 + j * 13) % lessors;
            records.push(TransactionRecord {
                lessee: format!("L{i:04}"),
                lessor: format!("R{lessor:04}"),
                lessee_province: (if i % 3 == 0 { "Shandong" } else { "Hebei" }).into(),
                lessor_province: "Jiangsu".into(),
                industry: (if i % 2 == 0 { "Agriculture" } else { "Mining" }).into(),
                property_value: ((i * (j + 1) + 17) % 1000) as f64,
                lessor_kind: "private".to_string(),
                value_bin: None,
            });
        }
    }
    records
}

fn ranking_benchmark(c: &mut Criterion) {
    let records = synthetic_records(600, 120);
    let graph = TransactionGraph::build(&records);
    let config = RankingConfig::default();

    c.bench_function("build_graph", |b| {
        b.iter(|| TransactionGraph::build(&records).edge_count())
    });

    c.bench_function("extract_province_subgraph", |b| {
        b.iter(|| Subgraph::by_province(&graph, "Shandong").node_count())
    });

    c.bench_function("rank_province_by_count", |b| {
        let sub = Subgraph::by_province(&graph, "Shandong");
        b.iter(|| ranking::rank(&sub, EdgeWeight::Count, &config))
    });

    c.bench_function("rank_province_by_value", |b| {
        let sub = Subgraph::by_province(&graph, "Shandong");
        b.iter(|| ranking::rank(&sub, EdgeWeight::TotalValue, &config))
    });
}

criterion_group!(benches, ranking_benchmark);
criterion_main!(benches);
