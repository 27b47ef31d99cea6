pub mod axis_scale;
pub mod index_scale;
pub mod line_series;
pub mod primitives;
pub mod types;

pub use axis_scale::{AxisScale, AxisScaleOptions};
pub use index_scale::IndexScale;
pub use line_series::{
    LineSegment, SeriesKind, SeriesPath, project_series_path, svg_path_data,
};
pub use types::{CanvasSize, DataPoint, PixelPoint, PlotMargins, PlotRegion};
