//! Snapshot persistence for trained model artifacts
//!
//! A snapshot bundles the cleaned record table, the built graph, and the
//! value bin boundaries into one versioned, compressed, checksummed blob.
//! Written once by the training binary, loaded once at serve startup.

use crate::graph::TransactionGraph;
use crate::ingest::TransactionRecord;
use chrono::{DateTime, Utc};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::io::{Read, Write};
use std::path::Path;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

/// On-disk format version; bumped on breaking layout changes
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

const SNAPSHOT_MAGIC: &[u8; 4] = b"LRSN";
const CHECKSUM_LEN: usize = 32;
const HEADER_LEN: usize = SNAPSHOT_MAGIC.len() + 4 + CHECKSUM_LEN;

/// Snapshot I/O errors
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Encode(#[from] bincode::Error),

    #[error("not a snapshot file")]
    BadMagic,

    #[error("unsupported snapshot format version {0}")]
    UnsupportedVersion(u32),

    #[error("snapshot checksum mismatch")]
    ChecksumMismatch,
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// One immutable, versioned training artifact.
///
/// Serving installs a whole snapshot at a time; the `id` distinguishes
/// builds, so caches keyed on it never leak results across snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Identity of this build
    pub id: Uuid,
    /// Build timestamp
    pub created_at: DateTime<Utc>,
    /// Cleaned record table the graph was built from
    pub records: Vec<TransactionRecord>,
    /// The global transaction graph
    pub graph: TransactionGraph,
    /// Property-value bin boundaries selected during training
    pub value_boundaries: Vec<f64>,
}

impl GraphSnapshot {
    pub fn new(
        records: Vec<TransactionRecord>,
        graph: TransactionGraph,
        value_boundaries: Vec<f64>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            records,
            graph,
            value_boundaries,
        }
    }

    /// Write the snapshot: magic, format version, SHA-256 of the
    /// compressed payload, then the gzip-compressed bincode payload.
    pub fn save(&self, path: impl AsRef<Path>) -> SnapshotResult<()> {
        let payload = bincode::serialize(self)?;
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&payload)?;
        let compressed = encoder.finish()?;
        let checksum = Sha256::digest(&compressed);

        let mut out = Vec::with_capacity(HEADER_LEN + compressed.len());
        out.extend_from_slice(SNAPSHOT_MAGIC);
        out.extend_from_slice(&SNAPSHOT_FORMAT_VERSION.to_le_bytes());
        out.extend_from_slice(&checksum);
        out.extend_from_slice(&compressed);
        std::fs::write(path.as_ref(), &out)?;

        info!(
            path = %path.as_ref().display(),
            snapshot = %self.id,
            bytes = out.len(),
            "snapshot written"
        );
        Ok(())
    }

    /// Load and verify a snapshot written by [`GraphSnapshot::save`].
    pub fn load(path: impl AsRef<Path>) -> SnapshotResult<GraphSnapshot> {
        let raw = std::fs::read(path.as_ref())?;
        if raw.len() < HEADER_LEN || !raw.starts_with(SNAPSHOT_MAGIC) {
            return Err(SnapshotError::BadMagic);
        }

        let mut version_bytes = [0u8; 4];
        version_bytes.copy_from_slice(&raw[4..8]);
        let version = u32::from_le_bytes(version_bytes);
        if version != SNAPSHOT_FORMAT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(version));
        }

        let stored_checksum = &raw[8..HEADER_LEN];
        let compressed = &raw[HEADER_LEN..];
        if Sha256::digest(compressed).as_slice() != stored_checksum {
            return Err(SnapshotError::ChecksumMismatch);
        }

        let mut payload = Vec::new();
        GzDecoder::new(compressed).read_to_end(&mut payload)?;
        let snapshot: GraphSnapshot = bincode::deserialize(&payload)?;

        info!(
            path = %path.as_ref().display(),
            snapshot = %snapshot.id,
            nodes = snapshot.graph.node_count(),
            edges = snapshot.graph.edge_count(),
            records = snapshot.records.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }
}
