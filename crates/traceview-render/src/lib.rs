pub mod error;
pub mod formatters;
pub mod markup;
pub mod target;
pub mod view;
pub mod view_model;
pub mod visualizer;

pub use error::{Error, Result};
pub use markup::{Element, Node};
pub use target::{Page, Region, RenderTarget, SharedRegion};
pub use view_model::{DisplayOptions, MetricItem, MetricsViewModel, StepViewModel, Tone};
pub use visualizer::TraceVisualizer;
