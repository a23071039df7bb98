//! The word network: symbol table plus graph, loaded once and queried by word.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{NetworkConfig, UnknownEdgePolicy};
use crate::data_cleaning::{self, EdgeRecord};
use crate::error::{Error, Result};
use crate::symbol_table::SymbolTable;
use crate::word_graph::WordGraph;

/// Summary numbers about a loaded network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkStats {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub skipped_edges: usize,
    pub bucket_count: usize,
    pub longest_chain: usize,
    pub component_count: usize,
    pub largest_component: usize,
    pub isolated_vertices: usize,
}

/// Read-only word graph built from a vertex list and an edge list.
#[derive(Debug, Clone)]
pub struct WordNetwork {
    words: SymbolTable,
    graph: WordGraph,
    skipped_edges: usize,
}

impl WordNetwork {
    /// Loads the network from a vertex file and an edge file.
    pub fn from_files(
        vertex_path: impl AsRef<Path>,
        edge_path: impl AsRef<Path>,
        config: &NetworkConfig,
    ) -> Result<Self> {
        let vertices = data_cleaning::read_vertices(vertex_path.as_ref())?;
        let edges = data_cleaning::read_edges(edge_path.as_ref())?;
        Self::from_parts(&vertices, &edges, config)
    }

    /// Builds the network from already tokenized input.
    ///
    /// Every vertex token gets the next id, starting at 0. Edges naming an
    /// unknown word are handled according to `config.unknown_edge_policy`.
    pub fn from_parts<S: AsRef<str>>(
        vertices: &[S],
        edges: &[EdgeRecord],
        config: &NetworkConfig,
    ) -> Result<Self> {
        config.validate()?;
        if vertices.is_empty() {
            return Err(Error::EmptyVocabulary);
        }

        let mut words = SymbolTable::with_buckets(config.buckets_for(vertices.len()));
        for (id, word) in vertices.iter().enumerate() {
            let word = word.as_ref();
            if let Some(first) = words.search_by_key(word) {
                warn!(word, first, id, "duplicate vertex; lookups resolve to the first id");
            }
            words.insert(word, id); // id order = file order
        }

        let mut graph = WordGraph::new(vertices.len()); // sized by what was actually loaded
        let mut skipped_edges = 0;
        for edge in edges {
            match (words.search_by_key(&edge.first), words.search_by_key(&edge.second)) {
                (Some(a), Some(b)) => graph.insert(a, b)?,
                (first, _) => {
                    let word = if first.is_none() { &edge.first } else { &edge.second }; // report the first missing word
                    if config.unknown_edge_policy == UnknownEdgePolicy::Fail {
                        return Err(Error::UnknownEdgeEndpoint {
                            line: edge.line,
                            word: word.clone(),
                        });
                    }
                    warn!(line = edge.line, word = %word, "skipping edge with unknown word");
                    skipped_edges += 1; // edge dropped, graph untouched
                }
            }
        }

        info!(
            vertices = vertices.len(),
            edges = graph.edge_count(),
            skipped_edges,
            buckets = words.bucket_count(),
            longest_chain = words.longest_chain(),
            "word network loaded"
        );
        Ok(Self {
            words,
            graph,
            skipped_edges,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.id_of(word).is_some()
    }

    pub fn id_of(&self, word: &str) -> Option<usize> {
        self.words.search_by_key(word)
    }

    pub fn word_of(&self, id: usize) -> Option<&str> {
        self.words.search_by_index(id)
    }

    pub fn graph(&self) -> &WordGraph {
        &self.graph
    }

    fn require(&self, word: &str) -> Result<usize> {
        self.id_of(word)
            .ok_or_else(|| Error::WordNotFound(word.to_string()))
    }

    fn to_words(&self, ids: impl IntoIterator<Item = usize>) -> Vec<&str> {
        // every id below vertex_count was inserted at load time
        ids.into_iter().filter_map(|id| self.word_of(id)).collect()
    }

    /// Direct neighbors of `word`, in ascending id order.
    pub fn list_neighbors(&self, word: &str) -> Result<Vec<&str>> {
        let id = self.require(word)?;
        debug!(word, id, "listing neighbors");
        Ok(self.to_words(self.graph.neighbors(id)))
    }

    /// Every word at most `distance` edges from `word`, in depth-first
    /// first-visit order. Distance 0 yields just `word`.
    pub fn list_neighbors_within(&self, word: &str, distance: usize) -> Result<Vec<&str>> {
        let id = self.require(word)?;
        debug!(word, id, distance, "listing neighbors within distance");
        Ok(self.to_words(self.graph.within_distance(id, distance)?))
    }

    /// All connected components, ordered by their lowest-id word.
    pub fn list_connected_components(&self) -> Vec<Vec<&str>> {
        let components = self.graph.connected_components();
        debug!(count = components.len(), "listed connected components");
        components
            .into_iter()
            .map(|component| self.to_words(component))
            .collect()
    }

    /// Fewest-edge path from `from` to `to`, both included. A word has no
    /// path to itself.
    pub fn find_shortest_path(&self, from: &str, to: &str) -> Result<Vec<&str>> {
        let origin = self.require(from)?;
        let destination = self.require(to)?; // either word unknown fails before searching
        debug!(from, to, "searching shortest path");
        match self.graph.shortest_path(origin, destination)? {
            Some(path) => Ok(self.to_words(path)),
            None => Err(Error::NoPath {
                from: from.to_string(),
                to: to.to_string(),
            }),
        }
    }

    pub fn stats(&self) -> NetworkStats {
        let components = self.graph.connected_components();
        NetworkStats {
            vertex_count: self.vertex_count(),
            edge_count: self.graph.edge_count(),
            skipped_edges: self.skipped_edges,
            bucket_count: self.words.bucket_count(),
            longest_chain: self.words.longest_chain(),
            component_count: components.len(),
            largest_component: components.iter().map(Vec::len).max().unwrap_or(0), // never empty once loaded
            isolated_vertices: (0..self.vertex_count())
                .filter(|&id| self.graph.degree(id) == 0)
                .count(),
        }
    }
}
