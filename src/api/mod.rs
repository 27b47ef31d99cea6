mod axis_label_format;
mod chart_config;
mod chart_engine;
mod geometry_builder;
mod render_frame_builder;
mod tooltip_content;

pub use axis_label_format::{AmountFormat, format_amount, format_count_tick, format_count_value};
pub use chart_config::{ChartConfig, ChartStyle, SeriesStyle};
pub use chart_engine::DualAxisChart;
pub use geometry_builder::{AxisTick, ChartGeometry, GeometryBuilder};
pub use hit_test::hit_test;
pub use render_frame_builder::build_render_frame;
pub use tooltip_content::tooltip_payload;
