//! The timeline visualizer: a presentation object bound to one render
//! target.

use traceview_types::{TraceDocument, TraceMetrics, TraceStep};

use crate::error::Result;
use crate::markup::Node;
use crate::target::{Page, RenderTarget, SharedRegion};
use crate::view;
use crate::view_model::{DisplayOptions, MetricsViewModel, StepViewModel};

/// Renders step sequences as a vertical timeline of expandable cards and
/// trace metrics as a one-line summary banner, into the target it was
/// constructed with.
///
/// All operations are synchronous and side-effect only the bound target.
/// Repeated timeline renders are destructive full replacements; metrics
/// banners accumulate at the top instead.
#[derive(Debug)]
pub struct TraceVisualizer<T: RenderTarget> {
    target: T,
    options: DisplayOptions,
}

impl TraceVisualizer<SharedRegion> {
    /// Bind to a named region of a page.
    ///
    /// Fails with [`Error::RegionNotFound`](crate::Error::RegionNotFound)
    /// when the identifier does not resolve; there is no degraded
    /// half-constructed state.
    pub fn bind(page: &Page, region_id: &str) -> Result<Self> {
        Ok(Self::new(page.region(region_id)?))
    }
}

impl<T: RenderTarget> TraceVisualizer<T> {
    pub fn new(target: T) -> Self {
        Self {
            target,
            options: DisplayOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DisplayOptions) -> Self {
        self.options = options;
        self
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Replace the target content with a timeline of step cards, one per
    /// input record, in input order.
    ///
    /// An empty sequence replaces the content with a single warning notice
    /// instead. Missing fields on individual steps are defaulted per field;
    /// a malformed step never aborts the render.
    pub fn render_timeline(&mut self, steps: &[TraceStep]) {
        if steps.is_empty() {
            self.target
                .replace(vec![Node::Element(view::warning_notice())]);
            return;
        }

        let models: Vec<StepViewModel> = steps
            .iter()
            .enumerate()
            .map(|(index, step)| StepViewModel::build(step, index, &self.options))
            .collect();

        self.target
            .replace(vec![Node::Element(view::timeline(&models))]);
    }

    /// Prepend a metrics summary banner to the target content.
    ///
    /// `None` is a no-op. The banner is inserted even when every field was
    /// suppressed (an empty notice box); repeated calls stack banners at
    /// the top in reverse call order.
    pub fn render_metrics(&mut self, metrics: Option<&TraceMetrics>) {
        let Some(metrics) = metrics else {
            return;
        };

        let model = MetricsViewModel::build(metrics);
        self.target
            .prepend(Node::Element(view::metrics_banner(&model)));
    }

    /// Render a full document: the step timeline, then the metrics banner
    /// above it when the document carries one.
    pub fn render_document(&mut self, document: &TraceDocument) {
        self.render_timeline(&document.steps);
        self.render_metrics(document.metrics.as_ref());
    }
}
