//! Pure view models: all defaulting, formatting, and presence decisions
//! happen here, before any markup is constructed.

use traceview_types::{SUCCESS_STATUS, Timestamp, TraceMetrics, TraceStep};

use crate::formatters::{json, text, time};

/// Rendering knobs threaded through the visualizer.
#[derive(Debug, Clone, Default)]
pub struct DisplayOptions {
    /// Cap input/output payload text at this many chars. Off by default;
    /// the compatible behavior is an unbounded structural dump.
    pub truncate_payload: Option<usize>,
}

/// Everything the step card view needs, fully formatted.
#[derive(Debug, Clone)]
pub struct StepViewModel {
    /// Type-derived category token for the card's class.
    pub category: String,
    /// `id` when present, else the zero-based render index.
    pub identity: String,
    pub display_name: String,
    /// Formatted duration; empty when the runtime is absent (or zero,
    /// which producers treat as "not measured").
    pub duration: String,
    pub type_label: String,
    /// Local time-of-day, present only when the timestamp resolves.
    pub clock: Option<String>,
    pub input: Option<String>,
    pub output: Option<String>,
}

impl StepViewModel {
    pub fn build(step: &TraceStep, index: usize, options: &DisplayOptions) -> Self {
        let category = step
            .step_type
            .clone()
            .unwrap_or_else(|| "unknown".to_string());

        let identity = step
            .id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_else(|| index.to_string());

        let display_name = step
            .name
            .clone()
            .unwrap_or_else(|| "Unknown Step".to_string());

        let duration = match step.runtime {
            Some(runtime) if truthy(runtime) => time::format_seconds(runtime),
            _ => String::new(),
        };

        let clock = step
            .timestamp
            .as_ref()
            .and_then(Timestamp::to_datetime)
            .map(time::format_time);

        Self {
            type_label: category.clone(),
            category,
            identity,
            display_name,
            duration,
            clock,
            input: step.input.as_ref().map(|v| payload_text(v, options)),
            output: step.output.as_ref().map(|v| payload_text(v, options)),
        }
    }

    pub fn has_details(&self) -> bool {
        self.input.is_some() || self.output.is_some()
    }
}

fn payload_text(value: &serde_json::Value, options: &DisplayOptions) -> String {
    let pretty = json::pretty(value);
    match options.truncate_payload {
        Some(max) => text::truncate(&pretty, max),
        None => pretty,
    }
}

/// Visual treatment of a metrics item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Positive,
    Negative,
}

/// One present item of the metrics banner.
#[derive(Debug, Clone)]
pub struct MetricItem {
    pub label: &'static str,
    pub value: String,
    pub tone: Tone,
}

/// The metrics banner content: present items in fixed order.
///
/// Fields that are absent, zero, or empty are suppressed, matching the
/// presence semantics the step records use.
#[derive(Debug, Clone)]
pub struct MetricsViewModel {
    pub items: Vec<MetricItem>,
}

impl MetricsViewModel {
    pub fn build(metrics: &TraceMetrics) -> Self {
        let mut items = Vec::new();

        if let Some(total) = metrics.total_runtime {
            if truthy(total) {
                items.push(MetricItem {
                    label: "Total Runtime",
                    value: time::format_seconds(total),
                    tone: Tone::Neutral,
                });
            }
        }

        if let Some(count) = metrics.step_count {
            if count != 0 {
                items.push(MetricItem {
                    label: "Steps",
                    value: count.to_string(),
                    tone: Tone::Neutral,
                });
            }
        }

        if let Some(status) = &metrics.status {
            if !status.is_empty() {
                let tone = if status == SUCCESS_STATUS {
                    Tone::Positive
                } else {
                    Tone::Negative
                };
                items.push(MetricItem {
                    label: "Status",
                    value: status.clone(),
                    tone,
                });
            }
        }

        Self { items }
    }
}

// Producer presence semantics: zero means "not measured", and NaN is
// treated the same way.
fn truthy(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}
