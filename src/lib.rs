//! dual-axis-chart: geometry and tooltip state for a dual-axis line chart.
//!
//! Two series (counts and monetary amounts) share one index axis but map onto
//! independent zero-based value scales. The crate turns a small ordered
//! dataset into plain pixel geometry and tracks pointer-driven tooltip state;
//! painting is left to a `render::Renderer` backend.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, DualAxisChart};
pub use error::{ChartError, ChartResult};
