use anyhow::Result;
use std::path::PathBuf;

use traceview_render::{DisplayOptions, Page, TraceVisualizer};
use traceview_types::TraceMetrics;

use super::{load_document, write_output};

pub struct RenderRequest {
    pub file: PathBuf,
    pub metrics: bool,
    pub truncate: Option<usize>,
    pub page: bool,
    pub region: String,
    pub output: Option<PathBuf>,
}

pub fn handle(request: RenderRequest) -> Result<()> {
    let document = load_document(&request.file)?;

    let mut page = Page::new();
    let region = page.add_region(request.region.as_str());

    let mut visualizer = TraceVisualizer::new(region).with_options(DisplayOptions {
        truncate_payload: request.truncate,
    });
    visualizer.render_document(&document);

    if request.metrics && document.metrics.is_none() {
        let computed = TraceMetrics::from_steps(&document.steps, None);
        visualizer.render_metrics(Some(&computed));
    }

    let fragment = page.html();
    let html = if request.page {
        standalone_page("Trace timeline", &fragment)
    } else {
        fragment
    };

    write_output(&html, request.output.as_deref())
}

/// Wrap a rendered fragment in a self-contained page with inline styling
/// for the timeline class vocabulary.
fn standalone_page(title: &str, body: &str) -> String {
    PAGE_TEMPLATE
        .replace("{{title}}", title)
        .replace("{{body}}", body)
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{title}}</title>
    <style>
        * { box-sizing: border-box; margin: 0; padding: 0; }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #f5f6f8;
            color: #212529;
            padding: 24px;
            max-width: 860px;
            margin: 0 auto;
        }

        .alert { padding: 12px 16px; border-radius: 6px; margin-bottom: 12px; }
        .alert-warning { background: #fff3cd; border: 1px solid #ffe69c; }
        .alert-info { background: #cff4fc; border: 1px solid #9eeaf9; }

        .trace-timeline { display: flex; flex-direction: column; gap: 12px; }
        .trace-step {
            background: #fff;
            border: 1px solid #dee2e6;
            border-left: 4px solid #6c757d;
            border-radius: 6px;
            padding: 12px 16px;
        }

        .d-flex { display: flex; }
        .justify-content-between { justify-content: space-between; }
        .align-items-center { align-items: center; }

        .badge {
            font-size: 12px;
            padding: 3px 8px;
            border-radius: 10px;
            color: #fff;
        }
        .bg-secondary { background: #6c757d; }

        .text-muted { color: #6c757d; }
        .text-primary { color: #0d6efd; }
        .text-success { color: #198754; }
        .text-danger { color: #dc3545; }
        .small { font-size: 13px; }
        .mb-1 { margin-bottom: 4px; }
        .mb-2 { margin-bottom: 8px; }
        .mt-2 { margin-top: 8px; }
        .ms-2 { margin-left: 8px; }
        .p-2 { padding: 8px; }
        .border { border: 1px solid #dee2e6; }
        .rounded { border-radius: 6px; }
        .bg-light { background: #f8f9fa; }
        .cursor-pointer { cursor: pointer; }

        pre { overflow-x: auto; white-space: pre-wrap; word-break: break-word; }
    </style>
</head>
<body>
{{body}}
</body>
</html>
"#;
