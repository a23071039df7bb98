//! Undirected word graph loaded from a vertex list and an edge list.
//!
//! Words are mapped to dense ids by a chained hash table ([`SymbolTable`]);
//! the graph itself ([`WordGraph`]) is an adjacency matrix over those ids.
//! [`WordNetwork`] ties the two together and answers neighbor, bounded
//! neighborhood, connected component, and shortest path queries by word.

pub mod config;
pub mod data_cleaning;
pub mod error;
pub mod frontier;
pub mod network;
pub mod report;
pub mod symbol_table;
pub mod word_graph;

pub use config::{NetworkConfig, UnknownEdgePolicy};
pub use error::{Error, Result};
pub use network::{NetworkStats, WordNetwork};
pub use report::{answer, OutputFormat, Query, QueryReport};
pub use symbol_table::SymbolTable;
pub use word_graph::WordGraph;
