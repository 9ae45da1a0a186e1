//! `relgraph report` — render a report from a JSON file without the server.

use std::path::Path;

use relgraph_core::{RelGraphConfig, Result};
use tracing::info;

use crate::request::AnalyzeRequest;

/// Read an analysis request from a JSON file.
///
/// The file has the same shape as the `POST /api/graph/report` body; a bare
/// array of triples is accepted as well.
pub fn load_request(path: &Path) -> Result<AnalyzeRequest> {
    let data = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&data)?;

    let request = if value.is_array() {
        AnalyzeRequest {
            relationships: serde_json::from_value(value)?,
            ..AnalyzeRequest::default()
        }
    } else {
        serde_json::from_value(value)?
    };

    info!(
        "Loaded {} relationships from {}",
        request.relationships.len(),
        path.display()
    );
    Ok(request)
}

/// Load `path` and render its report lines.
pub fn run_report(
    path: &Path,
    no_descriptions: bool,
    config: &RelGraphConfig,
) -> Result<Vec<String>> {
    let mut request = load_request(path)?;
    if no_descriptions {
        request.include_descriptions = Some(false);
    }
    Ok(request.run(config)?.report)
}

pub fn print_report(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relgraph_core::Error;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_report_from_request_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "graph.json",
            r#"{"relationships": [["A","rel","B"]], "descriptions": {"A": "root"}}"#,
        );
        let lines = run_report(&path, false, &RelGraphConfig::default()).unwrap();
        assert_eq!(lines[0], "\n== A ==");
        assert_eq!(lines[1], "\tDescription: root");
    }

    #[test]
    fn test_report_from_bare_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "triples.json", r#"[["A","rel","B"],["B","rel","C"]]"#);
        let lines = run_report(&path, false, &RelGraphConfig::default()).unwrap();
        assert!(lines.contains(&"Number of nodes: 3".to_string()));
        assert!(lines.contains(&"Number of edges: 2".to_string()));
    }

    #[test]
    fn test_no_descriptions_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "graph.json",
            r#"{"relationships": [["A","rel","B"]], "descriptions": {"A": "root"}}"#,
        );
        let lines = run_report(&path, true, &RelGraphConfig::default()).unwrap();
        assert!(lines.iter().all(|l| !l.contains("Description")));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_request(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_invalid_json_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "bad.json", "{not json");
        assert!(matches!(load_request(&path), Err(Error::Json(_))));
    }
}
