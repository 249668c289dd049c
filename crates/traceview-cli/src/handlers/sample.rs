use anyhow::Result;
use chrono::{DateTime, Duration};
use serde_json::json;
use std::path::Path;
use uuid::Uuid;

use traceview_types::{StepId, Timestamp, TraceDocument, TraceMetrics, TraceStep};

use super::write_output;

// The canonical pipeline stages a chat trace runs through.
const STAGES: [(&str, &str); 4] = [
    ("preprocess_input", "preprocessing"),
    ("generate_response", "generation"),
    ("postprocess_response", "postprocessing"),
    ("evaluate_response", "evaluation"),
];

pub fn handle(steps: usize, output: Option<&Path>) -> Result<()> {
    let document = sample_document(steps);
    let mut text = serde_json::to_string_pretty(&document)?;
    text.push('\n');
    write_output(&text, output)
}

/// Build a synthetic trace document with `count` steps cycling through the
/// pipeline stages.
fn sample_document(count: usize) -> TraceDocument {
    // 2024-05-14T09:30:00Z
    let base = DateTime::UNIX_EPOCH + Duration::milliseconds(1_715_679_000_000);

    let steps: Vec<TraceStep> = (0..count)
        .map(|index| {
            let (name, step_type) = STAGES[index % STAGES.len()];
            let runtime = 0.25 + 0.4 * (index % STAGES.len()) as f64;
            TraceStep {
                id: Some(StepId::Text(Uuid::new_v4().to_string())),
                step_type: Some(step_type.to_string()),
                name: Some(name.to_string()),
                runtime: Some(runtime),
                timestamp: Some(Timestamp::Millis(
                    (base + Duration::milliseconds(index as i64 * 200)).timestamp_millis(),
                )),
                input: Some(stage_input(step_type, index)),
                output: Some(stage_output(step_type)),
            }
        })
        .collect();

    let metrics = TraceMetrics::from_steps(&steps, Some("success"));
    TraceDocument::new(steps).with_metrics(metrics)
}

fn stage_input(step_type: &str, index: usize) -> serde_json::Value {
    match step_type {
        "preprocessing" => json!({"text": "What's the weather like in New York today?"}),
        "generation" => json!({"prompt": "cleaned input", "temperature": 0.7}),
        "postprocessing" => json!({"raw_response": "model output"}),
        _ => json!({"step": index, "data": "processed_data"}),
    }
}

fn stage_output(step_type: &str) -> serde_json::Value {
    match step_type {
        "preprocessing" => json!({"tokens": ["what", "weather", "new", "york"]}),
        "generation" => {
            json!({"text": "I'm sorry, I don't have access to real-time weather information."})
        }
        "postprocessing" => json!({"formatted": true}),
        _ => json!({"score": 0.92}),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_round_trips_through_the_parser() {
        let document = sample_document(4);
        let text = serde_json::to_string(&document).unwrap();

        let parsed = TraceDocument::from_str(&text).unwrap();
        assert_eq!(parsed.steps.len(), 4);
        assert_eq!(parsed.metrics.unwrap().step_count, Some(4));
    }

    #[test]
    fn sample_steps_cycle_through_the_stages() {
        let document = sample_document(6);
        let types: Vec<&str> = document
            .steps
            .iter()
            .map(|s| s.step_type.as_deref().unwrap())
            .collect();
        assert_eq!(
            types,
            vec![
                "preprocessing",
                "generation",
                "postprocessing",
                "evaluation",
                "preprocessing",
                "generation"
            ]
        );
    }

    #[test]
    fn sample_metrics_sum_the_step_runtimes() {
        let document = sample_document(2);
        let metrics = document.metrics.unwrap();
        assert!(metrics.is_success());
        assert_eq!(metrics.total_runtime, Some(0.25 + 0.65));
    }
}
