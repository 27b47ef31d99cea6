use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("invalid plot region: left={left}, right={right}, top={top}, bottom={bottom}")]
    InvalidPlotRegion {
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
    },

    #[error("invalid tick count: {tick_count} (at least 2 ticks are required)")]
    InvalidTickCount { tick_count: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render failed: {0}")]
    Render(String),
}

impl From<std::fmt::Error> for ChartError {
    fn from(err: std::fmt::Error) -> Self {
        Self::Render(err.to_string())
    }
}
