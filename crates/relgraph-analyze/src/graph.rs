//! Relationship graph backed by petgraph.
//!
//! Node order is insertion order (petgraph node indices are dense and never
//! reused here since nodes are never removed), which makes the graph an
//! ordered mapping node → neighbors.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Dfs, EdgeRef, VisitMap};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::types::{CentralityScore, GraphStats, GroupedRelationships, Relationship};

/// Directed multigraph of subjects pointing at objects.
///
/// Edges carry the relation label. Parallel edges and self-loops are kept.
#[derive(Debug, Clone, Default)]
pub struct RelationshipGraph {
    graph: DiGraph<String, String>,
    node_index: HashMap<String, NodeIndex>,
}

impl RelationshipGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `subject -[relation]-> object`, creating either node if absent.
    pub fn add_relationship(&mut self, subject: &str, relation: &str, object: &str) {
        let from = self.ensure_node(subject);
        let to = self.ensure_node(object);
        self.graph.add_edge(from, to, relation.to_string());
    }

    /// Insert a node with no edges if it is not already present.
    pub fn ensure_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(id.to_string());
        self.node_index.insert(id.to_string(), idx);
        idx
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Sum of all neighbor-list lengths.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Node identifiers in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.graph.node_indices().map(|idx| self.graph[idx].as_str())
    }

    /// Outgoing neighbors of `id` in the order the edges were added.
    pub fn neighbors(&self, id: &str) -> Option<Vec<&str>> {
        self.node_index.get(id).map(|&idx| self.ordered_neighbors(idx))
    }

    /// Out-degree of `id`, counting parallel edges and self-loops.
    pub fn degree(&self, id: &str) -> Option<usize> {
        self.node_index.get(id).map(|&idx| self.graph.edges(idx).count())
    }

    /// (node, neighbors) pairs in insertion order.
    pub fn adjacency(&self) -> impl Iterator<Item = (&str, Vec<&str>)> {
        self.graph
            .node_indices()
            .map(|idx| (self.graph[idx].as_str(), self.ordered_neighbors(idx)))
    }

    fn ordered_neighbors(&self, idx: NodeIndex) -> Vec<&str> {
        // petgraph walks a node's outgoing edge list newest-first.
        let mut neighbors: Vec<&str> = self
            .graph
            .edges(idx)
            .map(|e| self.graph[e.target()].as_str())
            .collect();
        neighbors.reverse();
        neighbors
    }

    /// Count components discovered by outgoing-edge traversal.
    ///
    /// Keys are scanned in insertion order; each one not yet visited seeds a
    /// new component and a depth-first walk along outgoing edges marks
    /// everything it can reach. This is not weak connectivity: a node that
    /// only has edges *into* an already-visited region still starts its own
    /// component.
    pub fn count_connected_components(&self) -> usize {
        let mut dfs = Dfs::empty(&self.graph);
        let mut components = 0;

        for idx in self.graph.node_indices() {
            if dfs.discovered.is_visited(&idx) {
                continue;
            }
            dfs.move_to(idx);
            while dfs.next(&self.graph).is_some() {}
            components += 1;
        }

        components
    }

    /// Up to `k` nodes ranked by `out_degree / (node_count - 1)`.
    ///
    /// Ties keep insertion order. A single-node graph scores 0.0.
    pub fn top_central_nodes(&self, k: usize) -> Vec<CentralityScore> {
        let denominator = self.node_count().saturating_sub(1);

        let mut scores: Vec<CentralityScore> = self
            .graph
            .node_indices()
            .map(|idx| CentralityScore {
                node: self.graph[idx].clone(),
                score: normalized_degree(self.graph.edges(idx).count(), denominator),
            })
            .collect();

        // Vec::sort_by is stable.
        scores.sort_by(|a, b| b.score.total_cmp(&a.score));
        scores.truncate(k);
        scores
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            connected_components: self.count_connected_components(),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn normalized_degree(degree: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    degree as f64 / denominator as f64
}

impl Serialize for RelationshipGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.node_count()))?;
        for (node, neighbors) in self.adjacency() {
            map.serialize_entry(node, &neighbors)?;
        }
        map.end()
    }
}

/// Build the adjacency graph and the grouped view from a triple list.
///
/// Every subject and object becomes a graph node; only subjects appear in the
/// grouped view. Never fails; empty identifiers are ordinary nodes.
pub fn build_graph(relationships: &[Relationship]) -> (RelationshipGraph, GroupedRelationships) {
    let mut graph = RelationshipGraph::new();
    let mut grouped = GroupedRelationships::new();

    for rel in relationships {
        graph.add_relationship(&rel.subject, &rel.relation, &rel.object);
        grouped.push(&rel.subject, &rel.relation, &rel.object);
    }

    (graph, grouped)
}

/// See [`RelationshipGraph::count_connected_components`].
pub fn count_connected_components(graph: &RelationshipGraph) -> usize {
    graph.count_connected_components()
}

/// See [`RelationshipGraph::top_central_nodes`].
pub fn top_central_nodes(graph: &RelationshipGraph, k: usize) -> Vec<CentralityScore> {
    graph.top_central_nodes(k)
}
