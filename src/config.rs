//! Load-time configuration for a word network.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What to do with an edge record naming a word missing from the vertex list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnknownEdgePolicy {
    /// Drop the edge and log a warning.
    #[default]
    Skip,
    /// Abort construction.
    Fail,
}

/// Configuration used when building a [`WordNetwork`](crate::WordNetwork).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Number of symbol table buckets. `None` sizes the table from the vertex count.
    pub bucket_count: Option<usize>,

    /// Handling of edges with an unknown endpoint.
    pub unknown_edge_policy: UnknownEdgePolicy,
}

impl NetworkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = Some(bucket_count);
        self
    }

    pub fn with_unknown_edge_policy(mut self, policy: UnknownEdgePolicy) -> Self {
        self.unknown_edge_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.bucket_count == Some(0) {
            return Err(Error::Config("bucket_count must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Bucket count to use for a vocabulary of `vertex_count` words.
    pub fn buckets_for(&self, vertex_count: usize) -> usize {
        self.bucket_count.unwrap_or_else(|| next_prime(vertex_count))
    }
}

/// Smallest prime `>= n` (2 for anything below 2).
pub fn next_prime(n: usize) -> usize {
    let mut candidate = n.max(2);
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut divisor = 3;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}
