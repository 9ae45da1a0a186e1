//! RelGraph Analyze — knowledge-graph relationship analysis.
//!
//! Turns a list of (subject, relation, object) triples into:
//! - a grouped view (subject → relation → objects),
//! - an ordered adjacency graph (subject → objects),
//! - a connected-component count over outgoing edges,
//! - the most central nodes by normalized out-degree,
//! - a plain-text report combining all of the above.
//!
//! Every structure is derived fresh from its input; nothing is cached.

pub mod analysis;
pub mod graph;
pub mod report;
pub mod types;

pub use analysis::{analyze, GraphAnalysis};
pub use graph::{build_graph, count_connected_components, top_central_nodes, RelationshipGraph};
pub use report::{render_report, render_report_with, ReportOptions};
pub use types::*;
