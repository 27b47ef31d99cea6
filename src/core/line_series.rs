use std::fmt::Write;

use crate::core::{AxisScale, DataPoint, PixelPoint, PlotRegion};
use serde::{Deserialize, Serialize};

/// Which of the two value series (and therefore which axis) a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesKind {
    /// Counts, mapped on the left axis.
    Primary,
    /// Monetary amounts, mapped on the right axis.
    Secondary,
}

impl SeriesKind {
    pub const ALL: [Self; 2] = [Self::Primary, Self::Secondary];

    #[must_use]
    pub fn value_of(self, point: &DataPoint) -> f64 {
        match self {
            Self::Primary => point.primary_value,
            Self::Secondary => point.secondary_value,
        }
    }
}

/// Straight segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineSegment {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Polyline of one series, vertices in dataset order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPath {
    pub series: SeriesKind,
    pub vertices: Vec<PixelPoint>,
}

impl SeriesPath {
    /// SVG path data connecting the vertices with straight segments.
    #[must_use]
    pub fn svg_path_data(&self) -> String {
        svg_path_data(&self.vertices)
    }

    /// Adjacent vertex pairs as segments.
    #[must_use]
    pub fn segments(&self) -> Vec<LineSegment> {
        self.vertices
            .windows(2)
            .map(|pair| LineSegment::new(pair[0].x, pair[0].y, pair[1].x, pair[1].y))
            .collect()
    }
}

/// SVG path data `M x0 y0 L x1 y1 ...` for a polyline; empty input yields an
/// empty string.
#[must_use]
pub fn svg_path_data(vertices: &[PixelPoint]) -> String {
    let mut data = String::new();
    for (index, vertex) in vertices.iter().enumerate() {
        if index > 0 {
            data.push(' ');
        }
        let command = if index == 0 { 'M' } else { 'L' };
        // Writing into a String cannot fail.
        let _ = write!(data, "{command} {} {}", vertex.x, vertex.y);
    }
    data
}

/// Projects one series of `points` into pixel vertices.
pub fn project_series_path(
    points: &[DataPoint],
    series: SeriesKind,
    x_position: impl Fn(usize) -> f64,
    scale: AxisScale,
    region: PlotRegion,
) -> SeriesPath {
    let vertices = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            PixelPoint::new(
                x_position(index),
                scale.value_to_pixel(series.value_of(point), region),
            )
        })
        .collect();

    SeriesPath { series, vertices }
}
