//! One-shot analysis bundle for callers that want structured output.

use serde::Serialize;
use tracing::debug;

use crate::graph::{build_graph, RelationshipGraph};
use crate::report::{render_report_with, ReportOptions};
use crate::types::{
    CentralityScore, DescriptionIndex, GraphStats, GroupedRelationships, Relationship,
};

/// Everything derived from one relationship list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphAnalysis {
    pub graph: RelationshipGraph,
    pub grouped_relationships: GroupedRelationships,
    #[serde(flatten)]
    pub stats: GraphStats,
    pub central_nodes: Vec<CentralityScore>,
}

impl GraphAnalysis {
    /// Render this analysis as report lines.
    pub fn report(&self, descriptions: &DescriptionIndex, options: ReportOptions) -> Vec<String> {
        render_report_with(&self.grouped_relationships, &self.graph, descriptions, options)
    }
}

/// Build the graph and compute its statistics and top `k` central nodes.
pub fn analyze(relationships: &[Relationship], k: usize) -> GraphAnalysis {
    let (graph, grouped_relationships) = build_graph(relationships);
    let stats = graph.stats();
    let central_nodes = graph.top_central_nodes(k);

    debug!(
        "Analyzed {} relationships: nodes={}, edges={}, components={}",
        relationships.len(),
        stats.node_count,
        stats.edge_count,
        stats.connected_components
    );

    GraphAnalysis {
        graph,
        grouped_relationships,
        stats,
        central_nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_bundle() {
        let analysis = analyze(
            &[
                Relationship::new("A", "rel", "B"),
                Relationship::new("A", "rel", "C"),
            ],
            2,
        );
        assert_eq!(analysis.stats.node_count, 3);
        assert_eq!(analysis.stats.edge_count, 2);
        assert_eq!(analysis.stats.connected_components, 1);
        assert_eq!(analysis.central_nodes.len(), 2);
        assert_eq!(analysis.central_nodes[0].node, "A");
        assert_eq!(analysis.grouped_relationships.objects("A", "rel").unwrap(), ["B", "C"]);
    }

    #[test]
    fn test_analysis_json_shape() {
        let analysis = analyze(&[Relationship::new("A", "rel", "B")], 5);
        let value = serde_json::to_value(&analysis).unwrap();
        assert_eq!(value["nodes"], 2);
        assert_eq!(value["edges"], 1);
        assert_eq!(value["connectedComponents"], 1);
        assert!(value["centralNodes"].is_array());
        assert_eq!(value["centralNodes"][0]["node"], "A");
        assert_eq!(value["graph"]["A"][0], "B");
        assert_eq!(value["groupedRelationships"]["A"]["rel"][0], "B");
    }

    #[test]
    fn test_report_uses_options() {
        let analysis = analyze(&[Relationship::new("A", "rel", "B")], 5);
        let lines = analysis.report(
            &DescriptionIndex::new(),
            ReportOptions {
                include_descriptions: true,
                central_nodes: 1,
            },
        );
        assert_eq!(lines.last().unwrap(), "  A: 1.0000");
    }
}
