//! Query dispatch and console rendering.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::network::{NetworkStats, WordNetwork};

/// How answers are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// A named query against a loaded network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Neighbors { word: String, distance: Option<usize> },
    Components,
    Path { from: String, to: String },
    Stats,
}

/// The answer to a [`Query`], ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum QueryReport {
    Neighbors {
        word: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        distance: Option<usize>,
        neighbors: Vec<String>,
    },
    Components {
        components: Vec<Vec<String>>,
    },
    Path {
        from: String,
        to: String,
        path: Vec<String>,
    },
    Stats(NetworkStats),
    /// Unknown word or unreachable destination.
    NotFound {
        message: String,
    },
}

fn owned(words: Vec<&str>) -> Vec<String> {
    words.into_iter().map(str::to_string).collect()
}

/// Runs `query`. Lookup misses become [`QueryReport::NotFound`]; anything
/// else is returned as an error.
pub fn answer(network: &WordNetwork, query: &Query) -> Result<QueryReport> {
    let outcome = match query {
        Query::Neighbors { word, distance } => {
            let neighbors = match distance {
                Some(distance) => network.list_neighbors_within(word, *distance),
                None => network.list_neighbors(word),
            };
            neighbors.map(|neighbors| QueryReport::Neighbors {
                word: word.clone(),
                distance: *distance,
                neighbors: owned(neighbors),
            })
        }
        Query::Components => Ok(QueryReport::Components {
            components: network
                .list_connected_components()
                .into_iter()
                .map(owned)
                .collect(),
        }),
        Query::Path { from, to } => {
            network
                .find_shortest_path(from, to)
                .map(|path| QueryReport::Path {
                    from: from.clone(),
                    to: to.clone(),
                    path: owned(path),
                })
        }
        Query::Stats => Ok(QueryReport::Stats(network.stats())),
    };

    match outcome {
        Err(err) if err.is_lookup_miss() => Ok(QueryReport::NotFound {
            message: err.to_string(),
        }),
        other => other,
    }
}

impl QueryReport {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Human => Ok(self.to_string()),
            OutputFormat::Json => serde_json::to_string_pretty(self).map_err(Error::from),
        }
    }
}

/// Human-readable form, one word per line.
impl fmt::Display for QueryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryReport::Neighbors { word, distance: None, neighbors } => {
                writeln!(f, "Neighbors of {word}:")?;
                write_lines(f, neighbors)
            }
            QueryReport::Neighbors { word, distance: Some(distance), neighbors } => {
                writeln!(f, "Neighbors of {word} within distance {distance}:")?;
                write_lines(f, neighbors)
            }
            QueryReport::Components { components } => {
                for (index, component) in components.iter().enumerate() {
                    writeln!(f, "Connected component {}:", index + 1)?;
                    write_lines(f, component)?;
                }
                Ok(())
            }
            QueryReport::Path { from, to, path } => {
                writeln!(f, "Shortest path from {from} to {to}:")?;
                write_lines(f, path)
            }
            QueryReport::Stats(stats) => {
                writeln!(f, "Vertices: {}", stats.vertex_count)?;
                writeln!(f, "Edges: {}", stats.edge_count)?;
                writeln!(f, "Skipped edges: {}", stats.skipped_edges)?;
                writeln!(f, "Buckets: {}", stats.bucket_count)?;
                writeln!(f, "Longest chain: {}", stats.longest_chain)?;
                writeln!(f, "Connected components: {}", stats.component_count)?;
                writeln!(f, "Largest component: {}", stats.largest_component)?;
                writeln!(f, "Isolated vertices: {}", stats.isolated_vertices)
            }
            QueryReport::NotFound { message } => writeln!(f, "{message}"),
        }
    }
}

fn write_lines(f: &mut fmt::Formatter<'_>, words: &[String]) -> fmt::Result {
    for word in words {
        writeln!(f, "{word}")?;
    }
    Ok(())
}
