//! Readers for the two input files: the vertex list and the edge list.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// One `word1,word2` line of the edge list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EdgeRecord {
    pub first: String,
    pub second: String,
    #[serde(skip)]
    pub line: u64,
}

impl EdgeRecord {
    pub fn new(first: &str, second: &str) -> Self {
        Self {
            first: first.to_string(),
            second: second.to_string(),
            line: 0,
        }
    }
}

/// Whitespace-separated vertex tokens, in file order.
pub fn read_vertices(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let file = File::open(path)?;
    parse_vertices(BufReader::new(file))
}

pub fn parse_vertices<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        words.extend(line?.split_whitespace().map(str::to_string)); // any layout, one or many per line
    }
    Ok(words)
}

/// Edge records, in file order. Fields are trimmed and blank lines skipped.
pub fn read_edges(path: impl AsRef<Path>) -> Result<Vec<EdgeRecord>> {
    let file = File::open(path)?;
    parse_edges(BufReader::new(file))
}

/// Parses the edge list line by line so `EdgeRecord::line` is the physical
/// line number, blank lines included.
pub fn parse_edges<R: BufRead>(reader: R) -> Result<Vec<EdgeRecord>> {
    let mut edges = Vec::new();
    let mut row = csv::StringRecord::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue; // still counted by enumerate
        }
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false) // edge files carry no column titles
            .trim(csv::Trim::All)
            .from_reader(line.as_bytes());
        csv_reader.read_record(&mut row)?;
        let mut edge: EdgeRecord = row.deserialize(None)?;
        edge.line = index as u64 + 1;
        edges.push(edge);
    }
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    #[test]
    fn test_parse_vertices() {
        let data = "which there\ntheir\n\n  about   would \n";
        let words = parse_vertices(data.as_bytes()).unwrap();
        assert_eq!(words, vec!["which", "there", "their", "about", "would"]);
    }

    #[test]
    fn test_parse_edges() {
        let data = "graph,grape\n\ngrape , gripe\nprice,pride\n";
        let edges = parse_edges(data.as_bytes()).unwrap();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0], EdgeRecord { line: 1, ..EdgeRecord::new("graph", "grape") });
        assert_eq!((edges[1].first.as_str(), edges[1].second.as_str()), ("grape", "gripe"));
        assert_eq!(edges[1].line, 3);
        assert_eq!(edges[2].line, 4);
    }

    #[test]
    fn test_parse_edges_counts_skipped_lines() {
        let data = "\n\n alpha,beta\r\n   \ngamma,delta\n";
        let edges = parse_edges(data.as_bytes()).unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!((edges[0].line, edges[0].second.as_str()), (3, "beta"));
        assert_eq!((edges[1].line, edges[1].first.as_str()), (5, "gamma"));
    }

    #[test]
    fn test_parse_edges_missing_field() {
        let err = parse_edges("lonely\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Csv(_)));
    }

    #[test]
    fn test_read_files() {
        let mut vertices = tempfile::NamedTempFile::new().unwrap();
        writeln!(vertices, "a b c").unwrap();
        let mut edges = tempfile::NamedTempFile::new().unwrap();
        writeln!(edges, "a,b").unwrap();

        assert_eq!(read_vertices(vertices.path()).unwrap(), vec!["a", "b", "c"]);
        assert_eq!(read_edges(edges.path()).unwrap()[0].second, "b");
    }

    #[test]
    fn test_missing_file() {
        let err = read_vertices("/nonexistent/words_vertices.txt").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
