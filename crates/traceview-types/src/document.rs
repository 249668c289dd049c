use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::metrics::TraceMetrics;
use crate::step::TraceStep;

/// A complete trace as stored on disk or produced by a trace service.
///
/// Two source shapes are accepted: a bare JSON array of steps, or an object
/// carrying a `steps` list and optional precomputed `metrics`. An object
/// without a `steps` key normalizes to an empty step list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TraceDocument {
    pub steps: Vec<TraceStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<TraceMetrics>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DocumentRepr {
    Object {
        #[serde(default)]
        steps: Vec<TraceStep>,
        #[serde(default)]
        metrics: Option<TraceMetrics>,
    },
    List(Vec<TraceStep>),
}

impl<'de> Deserialize<'de> for TraceDocument {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let repr = DocumentRepr::deserialize(deserializer)?;
        Ok(match repr {
            DocumentRepr::Object { steps, metrics } => TraceDocument { steps, metrics },
            DocumentRepr::List(steps) => TraceDocument {
                steps,
                metrics: None,
            },
        })
    }
}

impl TraceDocument {
    pub fn new(steps: Vec<TraceStep>) -> Self {
        Self {
            steps,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: TraceMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Decode a document from JSON text.
    pub fn from_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decode a document from a reader (e.g. stdin).
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut buffer = String::new();
        reader.read_to_string(&mut buffer)?;
        Self::from_str(&buffer)
    }

    /// Load a document from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_step_array() {
        let doc = TraceDocument::from_str(r#"[{"name": "a"}, {"name": "b"}]"#).unwrap();
        assert_eq!(doc.steps.len(), 2);
        assert!(doc.metrics.is_none());
    }

    #[test]
    fn accepts_object_with_steps_and_metrics() {
        let doc = TraceDocument::from_str(
            r#"{"steps": [{"name": "a"}], "metrics": {"totalRuntime": 1.0, "stepCount": 1}}"#,
        )
        .unwrap();
        assert_eq!(doc.steps.len(), 1);
        assert_eq!(doc.metrics.unwrap().step_count, Some(1));
    }

    #[test]
    fn object_without_steps_normalizes_to_empty_list() {
        let doc = TraceDocument::from_str(r#"{"metrics": {"stepCount": 0}}"#).unwrap();
        assert!(doc.steps.is_empty());
        assert!(doc.metrics.is_some());
    }

    #[test]
    fn rejects_non_trace_json() {
        assert!(TraceDocument::from_str("42").is_err());
        assert!(TraceDocument::from_str("not json").is_err());
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        std::fs::write(&path, r#"[{"name": "only"}]"#).unwrap();

        let doc = TraceDocument::load(&path).unwrap();
        assert_eq!(doc.steps[0].name.as_deref(), Some("only"));
    }
}
