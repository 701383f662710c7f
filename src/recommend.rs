//! Recommendation service over the active snapshot
//!
//! Holds the shared snapshot behind an atomic swap: installing a new build
//! replaces the `Arc` for new queries while in-flight queries finish on
//! the snapshot they started with. Each query fans out into four
//! sub-rankings (province/industry crossed with count/value weights).

use crate::graph::{EdgeWeight, Subgraph};
use crate::persistence::GraphSnapshot;
use crate::ranking::{self, RankingConfig};
use lru::LruCache;
use serde::Serialize;
use std::collections::BTreeSet;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

/// One labeled sub-ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedList {
    /// Human-readable explanation of the ranking dimension
    pub reason: String,
    /// Lessor identifiers, best first, at most `top_n`
    pub recommendations: Vec<String>,
}

/// The four sub-rankings answering one query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationSet {
    pub province_by_count: RankedList,
    pub province_by_value: RankedList,
    pub industry_by_count: RankedList,
    pub industry_by_value: RankedList,
}

/// Dropdown options derived from the active snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryOptions {
    pub provinces: Vec<String>,
    pub industries: Vec<String>,
}

type CacheKey = (Uuid, String, String);

/// Query-side service state shared across all connections
pub struct Recommender {
    snapshot: RwLock<Arc<GraphSnapshot>>,
    cache: Mutex<LruCache<CacheKey, Arc<RecommendationSet>>>,
    ranking: RankingConfig,
}

impl Recommender {
    pub fn new(snapshot: Arc<GraphSnapshot>, ranking: RankingConfig, cache_capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(cache_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            snapshot: RwLock::new(snapshot),
            cache: Mutex::new(LruCache::new(capacity)),
            ranking,
        }
    }

    /// The snapshot answering queries right now
    pub async fn snapshot(&self) -> Arc<GraphSnapshot> {
        self.snapshot.read().await.clone()
    }

    /// Atomically install a freshly built snapshot.
    ///
    /// Queries already holding the previous `Arc` keep using it; stale
    /// cache entries die with their snapshot id.
    pub async fn install(&self, snapshot: Arc<GraphSnapshot>) {
        info!(snapshot = %snapshot.id, "installing snapshot");
        *self.snapshot.write().await = snapshot;
    }

    /// Sorted distinct provinces and industries of the lessee population
    pub async fn options(&self) -> QueryOptions {
        let snapshot = self.snapshot().await;
        let mut provinces = BTreeSet::new();
        let mut industries = BTreeSet::new();
        for node in snapshot.graph.lessees() {
            provinces.insert(node.province().as_str().to_string());
            if let Some(industry) = node.industry() {
                industries.insert(industry.as_str().to_string());
            }
        }
        QueryOptions {
            provinces: provinces.into_iter().collect(),
            industries: industries.into_iter().collect(),
        }
    }

    /// Produce the four sub-rankings for a (province, industry) query.
    pub async fn recommend(&self, province: &str, industry: &str) -> Arc<RecommendationSet> {
        let snapshot = self.snapshot().await;
        let key = (
            snapshot.id,
            province.to_string(),
            industry.to_string(),
        );
        if let Some(hit) = self.cache.lock().unwrap().get(&key) {
            debug!(province, industry, "recommendation cache hit");
            return hit.clone();
        }

        let by_province = Subgraph::by_province(&snapshot.graph, province);
        let by_industry = Subgraph::by_industry(&snapshot.graph, industry);
        debug!(
            province,
            industry,
            province_nodes = by_province.node_count(),
            province_edges = by_province.edge_count(),
            industry_nodes = by_industry.node_count(),
            industry_edges = by_industry.edge_count(),
            "subgraphs extracted"
        );

        let set = Arc::new(RecommendationSet {
            province_by_count: RankedList {
                reason: format!("Frequent cooperation within province {province}"),
                recommendations: ranking::rank(&by_province, EdgeWeight::Count, &self.ranking),
            },
            province_by_value: RankedList {
                reason: format!("High total transaction value within province {province}"),
                recommendations: ranking::rank(&by_province, EdgeWeight::TotalValue, &self.ranking),
            },
            industry_by_count: RankedList {
                reason: format!("Frequent cooperation within the {industry} industry"),
                recommendations: ranking::rank(&by_industry, EdgeWeight::Count, &self.ranking),
            },
            industry_by_value: RankedList {
                reason: format!("High total transaction value within the {industry} industry"),
                recommendations: ranking::rank(&by_industry, EdgeWeight::TotalValue, &self.ranking),
            },
        });

        self.cache.lock().unwrap().put(key, set.clone());
        set
    }
}
