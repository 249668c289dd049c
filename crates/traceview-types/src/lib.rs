pub mod document;
pub mod error;
pub mod metrics;
pub mod step;

pub use document::TraceDocument;
pub use error::{Error, Result};
pub use metrics::{
    RuntimeBucket, RuntimeDistribution, SUCCESS_STATUS, TraceMetrics, runtime_distribution,
};
pub use step::{StepId, Timestamp, TraceStep};
