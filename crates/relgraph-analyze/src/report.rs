//! Plain-text relationship report.

use crate::graph::RelationshipGraph;
use crate::types::{DescriptionIndex, GroupedRelationships};

/// Number of nodes listed under "Most Central Nodes" by default.
pub const DEFAULT_CENTRAL_NODES: usize = 5;

/// Rendering switches for [`render_report_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Emit a description line after any subject or object that has one.
    pub include_descriptions: bool,
    /// How many nodes the central-nodes block lists.
    pub central_nodes: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            include_descriptions: true,
            central_nodes: DEFAULT_CENTRAL_NODES,
        }
    }
}

/// Render the grouped relationships, graph statistics and the five most
/// central nodes as report lines.
pub fn render_report(
    grouped: &GroupedRelationships,
    graph: &RelationshipGraph,
    descriptions: &DescriptionIndex,
    include_descriptions: bool,
) -> Vec<String> {
    render_report_with(
        grouped,
        graph,
        descriptions,
        ReportOptions {
            include_descriptions,
            ..ReportOptions::default()
        },
    )
}

/// Like [`render_report`], with the central-node count configurable.
///
/// Section headers start with a newline so joining the lines with `\n` leaves
/// a blank line before each section.
pub fn render_report_with(
    grouped: &GroupedRelationships,
    graph: &RelationshipGraph,
    descriptions: &DescriptionIndex,
    options: ReportOptions,
) -> Vec<String> {
    let describe = |node: &str| {
        if options.include_descriptions {
            descriptions.get(node)
        } else {
            None
        }
    };

    let mut output = Vec::new();

    for group in grouped.iter() {
        output.push(format!("\n== {} ==", group.subject));
        if let Some(desc) = describe(&group.subject) {
            output.push(format!("\tDescription: {}", desc));
        }
        for rel in &group.relations {
            output.push(format!("  {}:", rel.relation));
            for obj in &rel.objects {
                output.push(format!("    - {}", obj));
                if let Some(desc) = describe(obj) {
                    output.push(format!("      Description: {}", desc));
                }
            }
        }
    }

    let stats = graph.stats();
    output.push("\n== Graph Statistics ==".to_string());
    output.push(format!("Number of nodes: {}", stats.node_count));
    output.push(format!("Number of edges: {}", stats.edge_count));
    output.push(format!(
        "Number of connected components: {}",
        stats.connected_components
    ));

    output.push("\n== Most Central Nodes ==".to_string());
    output.extend(
        graph
            .top_central_nodes(options.central_nodes)
            .iter()
            .map(|c| format!("  {}: {:.4}", c.node, c.score)),
    );

    output
}
