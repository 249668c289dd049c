use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::path::Path;

use traceview_types::{TraceMetrics, runtime_distribution};

use super::load_document;

pub fn handle(file: &Path) -> Result<()> {
    let document = load_document(file)?;

    let metrics = document
        .metrics
        .clone()
        .unwrap_or_else(|| TraceMetrics::from_steps(&document.steps, None));
    let distribution = runtime_distribution(&document.steps);

    let color = std::io::stdout().is_terminal();

    println!("Trace statistics");
    if let Some(total) = metrics.total_runtime {
        println!("  Total runtime: {:.2}s", total);
    }
    if let Some(count) = metrics.step_count {
        println!("  Steps: {}", count);
    }
    if let Some(status) = &metrics.status {
        let display = if !color {
            status.clone()
        } else if metrics.is_success() {
            status.green().to_string()
        } else {
            status.red().to_string()
        };
        println!("  Status: {}", display);
    }

    println!();
    println!("Runtime distribution");
    for bucket in &distribution.buckets {
        println!("  {:<6} {:>4}  {}", bucket.label, bucket.count, bar(bucket.count));
    }
    if distribution.unmeasured > 0 {
        println!("  {} steps without a recorded runtime", distribution.unmeasured);
    }

    Ok(())
}

fn bar(count: usize) -> String {
    "#".repeat(count.min(40))
}
