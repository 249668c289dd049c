use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One discrete unit of a recorded execution trace (a tool call, generation
/// phase, evaluation pass, etc.) with optional timing and payloads.
///
/// Every field is optional. Steps arrive from external producers and are
/// never validated beyond presence: a missing field is rendered with a
/// default label or omitted from the output entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceStep {
    /// Producer-assigned identity. Falls back to the render index when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StepId>,

    /// Step category (e.g. "generation", "preprocessing", "tool").
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub step_type: Option<String>,

    /// Human-readable step name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Wall-clock runtime in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<f64>,

    /// When the step started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,

    /// Arbitrary JSON payload fed into the step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<serde_json::Value>,

    /// Arbitrary JSON payload produced by the step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<serde_json::Value>,
}

/// Step identity as supplied by the producer.
///
/// Producers send either a string (run ids, uuids) or a bare number; both
/// are accepted and rendered through `Display`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepId {
    Number(i64),
    Text(String),
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepId::Number(n) => write!(f, "{}", n),
            StepId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for StepId {
    fn from(s: &str) -> Self {
        StepId::Text(s.to_string())
    }
}

impl From<i64> for StepId {
    fn from(n: i64) -> Self {
        StepId::Number(n)
    }
}

/// Step timestamp: epoch milliseconds or a parsable datetime string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(i64),
    Text(String),
}

impl Timestamp {
    /// Resolve to a concrete instant.
    ///
    /// Text timestamps accept RFC 3339 and the bare
    /// `%Y-%m-%dT%H:%M:%S` / `%Y-%m-%d %H:%M:%S` forms (read as UTC).
    /// Returns `None` when the value does not resolve; callers omit the
    /// clock indicator rather than treating this as an error.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Millis(ms) => Utc.timestamp_millis_opt(*ms).single(),
            Timestamp::Text(text) => parse_text_timestamp(text),
        }
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Timestamp::Millis(ms)
    }
}

fn parse_text_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    None
}
