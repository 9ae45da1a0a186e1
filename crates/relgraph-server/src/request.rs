//! Analysis request shape shared by the HTTP API and the `report` command.

use relgraph_analyze::{analyze, DescriptionIndex, GraphAnalysis, Relationship, ReportOptions};
use relgraph_core::{Error, RelGraphConfig, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Body of `POST /api/graph/*`, and the JSON file read by `relgraph report`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub relationships: Vec<Relationship>,
    #[serde(default)]
    pub descriptions: DescriptionIndex,
    pub include_descriptions: Option<bool>,
    pub top_k: Option<usize>,
}

/// Structured analysis plus the rendered report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub analysis: GraphAnalysis,
    pub report: Vec<String>,
    pub generated_at: String,
}

impl AnalyzeRequest {
    /// Reject requests larger than the configured relationship cap.
    pub fn validate(&self, config: &RelGraphConfig) -> Result<()> {
        if self.relationships.len() > config.max_relationships {
            warn!(
                "Rejected request with {} relationships (max {})",
                self.relationships.len(),
                config.max_relationships
            );
            return Err(Error::InvalidInput(format!(
                "too many relationships: {} (max {})",
                self.relationships.len(),
                config.max_relationships
            )));
        }
        Ok(())
    }

    /// Request overrides layered over configured defaults.
    pub fn report_options(&self, config: &RelGraphConfig) -> ReportOptions {
        ReportOptions {
            include_descriptions: self
                .include_descriptions
                .unwrap_or(config.include_descriptions),
            central_nodes: self.top_k.unwrap_or(config.central_nodes),
        }
    }

    /// Validate, analyze and render.
    pub fn run(&self, config: &RelGraphConfig) -> Result<AnalyzeResponse> {
        self.validate(config)?;
        let options = self.report_options(config);
        let analysis = analyze(&self.relationships, options.central_nodes);
        let report = analysis.report(&self.descriptions, options);

        Ok(AnalyzeResponse {
            analysis,
            report,
            generated_at: chrono::Utc::now().to_rfc3339(),
        })
    }
}
