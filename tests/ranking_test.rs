use leaserank::graph::{EdgeWeight, Subgraph, TransactionGraph};
use leaserank::ingest::TransactionRecord;
use leaserank::persistence::GraphSnapshot;
use leaserank::ranking::{self, RankingConfig};
use leaserank::recommend::Recommender;
use std::sync::Arc;

fn record(
    lessee: &str,
    province: &str,
    industry: &str,
    lessor: &str,
    value: f64,
) -> TransactionRecord {
    TransactionRecord {
        lessee: lessee.to_string(),
        lessor: lessor.to_string(),
        lessee_province: province.into(),
        lessor_province: "LessorLand".into(),
        industry: industry.into(),
        property_value: value,
        lessor_kind: "private".to_string(),
        value_bin: None,
    }
}

fn service(records: Vec<TransactionRecord>) -> Recommender {
    let graph = TransactionGraph::build(&records);
    let snapshot = GraphSnapshot::new(records, graph, Vec::new());
    Recommender::new(Arc::new(snapshot), RankingConfig::default(), 8)
}

#[test]
fn test_count_weight_prefers_frequent_partner() {
    let graph = TransactionGraph::build(&[
        record("L1", "P", "Agriculture", "R1", 500.0),
        record("L1", "P", "Agriculture", "R1", 300.0),
        record("L1", "P", "Agriculture", "R2", 100.0),
    ]);
    let sub = Subgraph::by_province(&graph, "P");

    let ranked = ranking::rank(&sub, EdgeWeight::Count, &RankingConfig::default());
    assert_eq!(ranked, vec!["R1", "R2"]);
}

#[test]
fn test_results_are_sorted_and_bounded() {
    let mut records = Vec::new();
    for i in 0..25 {
        // R00 gets the most transactions, R01 the next most, and so on
        for _ in 0..(25 - i) {
            records.push(record("L1", "P", "I", &format!("R{i:02}"), 10.0));
        }
    }
    let graph = TransactionGraph::build(&records);
    let sub = Subgraph::by_province(&graph, "P");

    let config = RankingConfig::default();
    let ranked = ranking::rank(&sub, EdgeWeight::Count, &config);

    assert!(ranked.len() <= config.top_n);
    assert_eq!(ranked[0], "R00");
    assert_eq!(ranked[1], "R01");

    // Two identical calls agree exactly
    assert_eq!(ranked, ranking::rank(&sub, EdgeWeight::Count, &config));
}

#[tokio::test]
async fn test_unmatched_cohort_yields_four_empty_lists() {
    let service = service(vec![record("L1", "P", "Agriculture", "R1", 100.0)]);

    let set = service.recommend("Atlantis", "Alchemy").await;
    assert!(set.province_by_count.recommendations.is_empty());
    assert!(set.province_by_value.recommendations.is_empty());
    assert!(set.industry_by_count.recommendations.is_empty());
    assert!(set.industry_by_value.recommendations.is_empty());
}

#[tokio::test]
async fn test_four_dimensions_use_their_own_filter_and_weight() {
    let service = service(vec![
        // Province P: R1 frequent, R2 valuable
        record("L1", "P", "Agriculture", "R1", 10.0),
        record("L1", "P", "Agriculture", "R1", 10.0),
        record("L1", "P", "Agriculture", "R2", 5000.0),
        // Industry Mining sits in another province
        record("L2", "P2", "Mining", "R3", 100.0),
    ]);

    let set = service.recommend("P", "Mining").await;
    assert_eq!(set.province_by_count.recommendations[0], "R1");
    assert_eq!(set.province_by_value.recommendations[0], "R2");
    assert_eq!(set.industry_by_count.recommendations, vec!["R3"]);
    assert_eq!(set.industry_by_value.recommendations, vec!["R3"]);
}
