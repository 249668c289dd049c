use serde::{Deserialize, Serialize};

use crate::step::TraceStep;

/// Status value that gets the positive visual treatment. Any other
/// non-empty status is presented as a failure.
pub const SUCCESS_STATUS: &str = "success";

/// Aggregate summary statistics for a whole trace.
///
/// Fields keep their producer wire names (`totalRuntime`, `stepCount`); the
/// snake_case spellings are accepted as aliases on input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceMetrics {
    /// Total trace runtime in seconds.
    #[serde(default, alias = "total_runtime", skip_serializing_if = "Option::is_none")]
    pub total_runtime: Option<f64>,

    /// Number of steps in the trace.
    #[serde(default, alias = "step_count", skip_serializing_if = "Option::is_none")]
    pub step_count: Option<u64>,

    /// Trace outcome ("success" or a failure label).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl TraceMetrics {
    /// Compute aggregate metrics from a step sequence.
    ///
    /// Total runtime is the sum of the runtimes that are present; it stays
    /// absent when no step carries one. The status is not derivable from
    /// the steps and is passed through from the caller.
    pub fn from_steps(steps: &[TraceStep], status: Option<&str>) -> Self {
        let mut total = 0.0;
        let mut measured = 0usize;
        for step in steps {
            if let Some(runtime) = step.runtime {
                total += runtime;
                measured += 1;
            }
        }

        Self {
            total_runtime: (measured > 0).then_some(total),
            step_count: Some(steps.len() as u64),
            status: status.map(str::to_string),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(SUCCESS_STATUS)
    }
}

/// One bucket of the runtime histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuntimeBucket {
    pub label: &'static str,
    pub count: usize,
}

/// Histogram of step runtimes over fixed buckets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuntimeDistribution {
    pub buckets: Vec<RuntimeBucket>,
    /// Steps with no recorded runtime.
    pub unmeasured: usize,
}

/// Bucket step runtimes into the fixed `0-1s .. 10s+` histogram.
///
/// Buckets are half-open (`1-2s` counts runtimes in `[1, 2)`); the last
/// bucket is unbounded above. Steps without a runtime are reported
/// separately instead of being binned.
pub fn runtime_distribution(steps: &[TraceStep]) -> RuntimeDistribution {
    const EDGES: [(&str, f64); 5] = [
        ("0-1s", 1.0),
        ("1-2s", 2.0),
        ("2-3s", 3.0),
        ("3-5s", 5.0),
        ("5-10s", 10.0),
    ];

    let mut counts = [0usize; 6];
    let mut unmeasured = 0usize;

    for step in steps {
        let Some(runtime) = step.runtime else {
            unmeasured += 1;
            continue;
        };
        let slot = EDGES
            .iter()
            .position(|(_, upper)| runtime < *upper)
            .unwrap_or(EDGES.len());
        counts[slot] += 1;
    }

    let mut buckets: Vec<RuntimeBucket> = EDGES
        .iter()
        .enumerate()
        .map(|(i, (label, _))| RuntimeBucket {
            label,
            count: counts[i],
        })
        .collect();
    buckets.push(RuntimeBucket {
        label: "10s+",
        count: counts[EDGES.len()],
    });

    RuntimeDistribution {
        buckets,
        unmeasured,
    }
}
