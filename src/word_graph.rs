//! Undirected adjacency-matrix graph over dense vertex ids, and the
//! traversals the network answers queries with.
//!
//! Every traversal examines neighbors in ascending id order and keeps its
//! visited/predecessor state local to the call.

use crate::error::{Error, Result};
use crate::frontier::{IdQueue, IdStack};

/// Square symmetric boolean matrix of size `vertex_count × vertex_count`.
#[derive(Debug, Clone)]
pub struct WordGraph {
    vertex_count: usize,
    matrix: Vec<bool>, // row-major
}

/// One suspended call of the bounded walk.
struct WalkFrame {
    node: usize,
    remaining: usize,
    next_candidate: usize,
}

impl WordGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            matrix: vec![false; vertex_count * vertex_count],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn check(&self, id: usize) -> Result<()> {
        if id < self.vertex_count {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                id,
                vertex_count: self.vertex_count,
            })
        }
    }

    fn cell(&self, row: usize, column: usize) -> usize {
        row * self.vertex_count + column
    }

    /// Adds the undirected edge `a - b`.
    pub fn insert(&mut self, a: usize, b: usize) -> Result<()> {
        self.check(a)?;
        self.check(b)?;
        let (ab, ba) = (self.cell(a, b), self.cell(b, a));
        self.matrix[ab] = true;
        self.matrix[ba] = true; // both halves, the relation stays symmetric
        Ok(())
    }

    /// Removes the undirected edge `a - b`.
    pub fn remove(&mut self, a: usize, b: usize) -> Result<()> {
        self.check(a)?;
        self.check(b)?;
        let (ab, ba) = (self.cell(a, b), self.cell(b, a));
        self.matrix[ab] = false;
        self.matrix[ba] = false;
        Ok(())
    }

    /// False for out-of-range ids.
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        a < self.vertex_count && b < self.vertex_count && self.matrix[self.cell(a, b)]
    }

    /// Neighbors of `id` in ascending id order. Empty for out-of-range ids.
    pub fn neighbors(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        let row: &[bool] = if id < self.vertex_count {
            &self.matrix[id * self.vertex_count..(id + 1) * self.vertex_count]
        } else {
            &[]
        };
        row.iter()
            .enumerate()
            .filter_map(|(column, &edge)| edge.then_some(column))
    }

    pub fn degree(&self, id: usize) -> usize {
        self.neighbors(id).count()
    }

    /// Number of undirected edges; a self-loop counts once.
    pub fn edge_count(&self) -> usize {
        (0..self.vertex_count)
            .map(|row| self.neighbors(row).filter(|&column| column >= row).count()) // upper triangle only
            .sum()
    }

    /// Every id at most `max_distance` edges from `start`, in depth-first
    /// first-visit order.
    ///
    /// The walk descends in ascending id order. A vertex already visited is
    /// entered again when a later branch reaches it with more budget left, so
    /// a deep branch claiming a vertex first never hides what lies behind it
    /// from a shorter branch. Each id is still reported once.
    pub fn within_distance(&self, start: usize, max_distance: usize) -> Result<Vec<usize>> {
        self.check(start)?;
        let mut best: Vec<Option<usize>> = vec![None; self.vertex_count]; // largest budget seen per vertex
        let mut order = vec![start];
        best[start] = Some(max_distance);
        let mut frames = vec![WalkFrame {
            node: start,
            remaining: max_distance,
            next_candidate: 0,
        }];

        while let Some(frame) = frames.last_mut() {
            if frame.remaining == 0 {
                frames.pop(); // budget spent, no children
                continue;
            }
            let child_budget = frame.remaining - 1;
            let found = (frame.next_candidate..self.vertex_count).find(|&column| {
                self.matrix[self.cell(frame.node, column)]
                    && best[column].map_or(true, |seen| seen < child_budget)
            });
            let Some(child) = found else {
                frames.pop();
                continue;
            };
            frame.next_candidate = child + 1;

            if best[child].is_none() {
                order.push(child); // first visit
            }
            best[child] = Some(child_budget);
            frames.push(WalkFrame {
                node: child,
                remaining: child_budget,
                next_candidate: 0,
            });
        }
        Ok(order)
    }

    /// Connected components, ordered by lowest member id; members in DFS order.
    pub fn connected_components(&self) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.vertex_count];
        let mut components = Vec::new();
        for id in 0..self.vertex_count {
            if !visited[id] {
                components.push(self.depth_first(id, &mut visited)); // id is the lowest member
            }
        }
        components
    }

    /// Minimum-edge path from `origin` to `destination`, both included.
    ///
    /// `Ok(None)` when the destination is never reached from the origin. The
    /// origin is marked visited before the search starts, so a path from a
    /// vertex to itself is never found.
    pub fn shortest_path(&self, origin: usize, destination: usize) -> Result<Option<Vec<usize>>> {
        self.check(origin)?;
        self.check(destination)?;

        let mut visited = vec![false; self.vertex_count];
        let mut previous: Vec<Option<usize>> = vec![None; self.vertex_count];
        let mut queue = IdQueue::new();
        queue.enqueue(origin);
        visited[origin] = true;

        while let Some(current) = queue.dequeue() {
            for next in self.neighbors(current) {
                if visited[next] {
                    continue;
                }
                visited[next] = true;
                previous[next] = Some(current);
                if next == destination {
                    return Ok(Some(Self::reconstruct(&previous, destination))); // first hit is shortest
                }
                queue.enqueue(next);
            }
        }
        Ok(None)
    }

    fn reconstruct(previous: &[Option<usize>], destination: usize) -> Vec<usize> {
        let mut path = IdStack::new();
        let mut current = destination;
        path.push(current);
        while let Some(prev) = previous[current] {
            path.push(prev);
            current = prev;
        }
        path.collect() // pops origin first
    }

    /// Recursive DFS expressed with an explicit `(node, next candidate)` stack.
    ///
    /// The visited check happens when the parent reaches a child, after the
    /// earlier siblings' subtrees have been walked.
    fn depth_first(&self, start: usize, visited: &mut [bool]) -> Vec<usize> {
        let mut order = vec![start];
        visited[start] = true;
        let mut frames = vec![(start, 0)];

        while let Some((node, next_candidate)) = frames.last_mut() {
            let found = (*next_candidate..self.vertex_count)
                .find(|&column| self.matrix[self.cell(*node, column)] && !visited[column]);
            let Some(child) = found else {
                frames.pop(); // subtree done
                continue;
            };
            *next_candidate = child + 1;
            visited[child] = true;
            order.push(child);
            frames.push((child, 0));
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(vertex_count: usize, edges: &[(usize, usize)]) -> WordGraph {
        let mut graph = WordGraph::new(vertex_count);
        for &(a, b) in edges {
            graph.insert(a, b).unwrap();
        }
        graph
    }

    fn assert_symmetric(graph: &WordGraph) {
        for a in 0..graph.vertex_count() {
            for b in 0..graph.vertex_count() {
                assert_eq!(graph.has_edge(a, b), graph.has_edge(b, a));
            }
        }
    }

    /// Edge counts from `start` by plain BFS; `None` for unreachable ids.
    fn bfs_distances(graph: &WordGraph, start: usize) -> Vec<Option<usize>> {
        let mut distances = vec![None; graph.vertex_count()];
        distances[start] = Some(0);
        let mut queue = IdQueue::new();
        queue.enqueue(start);
        while let Some(current) = queue.dequeue() {
            let depth = distances[current].unwrap();
            for next in graph.neighbors(current) {
                if distances[next].is_none() {
                    distances[next] = Some(depth + 1);
                    queue.enqueue(next);
                }
            }
        }
        distances
    }

    // two routes between 3 and 2 of different lengths, with 8 hanging off 2
    const CHORDED: [(usize, usize); 10] =
        [(0, 3), (0, 5), (3, 5), (5, 6), (6, 1), (1, 2), (3, 4), (4, 7), (7, 2), (2, 8)];

    #[test]
    fn test_insert_remove_symmetric() {
        let mut g = graph(4, &[(0, 1), (1, 2)]);
        assert_symmetric(&g);
        assert!(g.has_edge(1, 0));
        g.remove(1, 0).unwrap();
        assert_symmetric(&g);
        assert!(!g.has_edge(0, 1));
        assert!(g.has_edge(2, 1));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut g = WordGraph::new(2);
        let err = g.insert(0, 2).unwrap_err();
        assert!(matches!(err, Error::VertexOutOfRange { id: 2, vertex_count: 2 }));
        assert_eq!(g.edge_count(), 0);
        assert!(!g.has_edge(0, 5));
        assert_eq!(g.neighbors(9).count(), 0);
    }

    #[test]
    fn test_neighbors_ascending() {
        let g = graph(5, &[(2, 4), (2, 0), (2, 3)]);
        assert_eq!(g.neighbors(2).collect::<Vec<_>>(), vec![0, 3, 4]);
        assert_eq!(g.degree(2), 3);
        assert_eq!(g.degree(1), 0);
    }

    #[test]
    fn test_within_distance_zero_is_start() {
        let g = graph(3, &[(0, 1), (1, 2)]);
        assert_eq!(g.within_distance(1, 0).unwrap(), vec![1]);
    }

    #[test]
    fn test_within_distance_chain() {
        let g = graph(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]);
        assert_eq!(g.within_distance(0, 1).unwrap(), vec![0, 1]);
        assert_eq!(g.within_distance(0, 3).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(g.within_distance(2, 1).unwrap(), vec![2, 1, 3]);
    }

    #[test]
    fn test_within_distance_reenters_with_more_budget() {
        // 0-1-2 reaches 2 with nothing left; the direct 0-2 edge then
        // re-enters 2 with one more step, which reaches 3.
        let g = graph(4, &[(0, 1), (1, 2), (0, 2), (2, 3)]);
        assert_eq!(g.within_distance(0, 2).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(g.within_distance(0, 1).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_within_distance_is_the_distance_ball() {
        let g = graph(9, &CHORDED);
        for start in 0..9 {
            let distances = bfs_distances(&g, start);
            for max_distance in 0..7 {
                let reached = g.within_distance(start, max_distance).unwrap();
                assert_eq!(reached[0], start);

                let mut sorted = reached.clone();
                sorted.sort_unstable();
                sorted.dedup();
                assert_eq!(sorted.len(), reached.len(), "duplicate ids from {start}");

                let expected: Vec<usize> = (0..9)
                    .filter(|&id| distances[id].is_some_and(|d| d <= max_distance))
                    .collect();
                assert_eq!(sorted, expected, "start {start} distance {max_distance}");
            }
        }
    }

    #[test]
    fn test_within_distance_monotonic() {
        let g = graph(9, &CHORDED);
        for start in 0..9 {
            let mut previous: Vec<usize> = Vec::new();
            for max_distance in 0..7 {
                let reached = g.within_distance(start, max_distance).unwrap();
                assert!(previous.iter().all(|id| reached.contains(id)), "start {start} distance {max_distance}");
                previous = reached;
            }
        }
        // the case a single shared visited set gets wrong
        assert!(g.within_distance(3, 5).unwrap().contains(&8));
    }

    #[test]
    fn test_connected_components() {
        let g = graph(6, &[(0, 4), (4, 2), (1, 3)]);
        assert_eq!(g.connected_components(), vec![vec![0, 4, 2], vec![1, 3], vec![5]]);
    }

    #[test]
    fn test_components_partition() {
        let g = graph(8, &[(0, 1), (2, 3), (3, 4), (6, 7), (7, 0)]);
        let components = g.connected_components();
        let mut seen = vec![0; 8];
        for component in &components {
            for &id in component {
                seen[id] += 1;
            }
            for &a in component {
                for &b in component.iter().filter(|&&b| b != a) {
                    assert!(g.shortest_path(a, b).unwrap().is_some());
                }
            }
        }
        assert!(seen.iter().all(|&count| count == 1));
        assert_eq!(g.shortest_path(0, 2).unwrap(), None);
    }

    #[test]
    fn test_shortest_path_minimal() {
        // long way 0-1-2-3-4, short way 0-5-4
        let g = graph(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (0, 5), (5, 4)]);
        assert_eq!(g.shortest_path(0, 4).unwrap(), Some(vec![0, 5, 4]));
        assert_eq!(g.shortest_path(4, 0).unwrap(), Some(vec![4, 5, 0]));
        assert_eq!(g.shortest_path(1, 3).unwrap(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_shortest_path_prefers_lower_ids_on_ties() {
        let g = graph(4, &[(0, 2), (0, 1), (1, 3), (2, 3)]);
        assert_eq!(g.shortest_path(0, 3).unwrap(), Some(vec![0, 1, 3]));
    }

    #[test]
    fn test_shortest_path_unreachable_and_self() {
        let g = graph(3, &[(0, 1)]);
        assert_eq!(g.shortest_path(0, 2).unwrap(), None);
        assert_eq!(g.shortest_path(2, 2).unwrap(), None);
        assert_eq!(g.shortest_path(1, 1).unwrap(), None); // connected, still no path to itself
        assert!(g.shortest_path(0, 3).is_err());
    }
}
