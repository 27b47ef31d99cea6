use serde::{Deserialize, Serialize};

use crate::core::{
    AxisScale, DataPoint, LineSegment, PixelPoint, PlotRegion, SeriesKind, SeriesPath,
    project_series_path,
};
use crate::interaction::PointRef;

use super::axis_label_format::{AmountFormat, format_count_tick};

/// One labelled tick along an axis.
///
/// `position` is the pixel coordinate along the axis direction: y for the two
/// value axes, x for the index axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub position: f64,
    pub value: f64,
    pub label: String,
}

/// Static geometry of one chart, in intrinsic canvas pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub region: PlotRegion,
    /// One per primary tick, spanning the plot width.
    pub horizontal_gridlines: Vec<LineSegment>,
    /// One per dataset index, spanning the plot height.
    pub vertical_gridlines: Vec<LineSegment>,
    pub primary_ticks: Vec<AxisTick>,
    pub secondary_ticks: Vec<AxisTick>,
    pub x_ticks: Vec<AxisTick>,
    pub primary_path: SeriesPath,
    pub secondary_path: SeriesPath,
}

impl ChartGeometry {
    #[must_use]
    pub fn path(&self, series: SeriesKind) -> &SeriesPath {
        match series {
            SeriesKind::Primary => &self.primary_path,
            SeriesKind::Secondary => &self.secondary_path,
        }
    }

    #[must_use]
    pub fn point(&self, point: PointRef) -> Option<PixelPoint> {
        self.path(point.series).vertices.get(point.index).copied()
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.primary_path.vertices.len()
    }

    /// All series points in paint order: per index, primary then secondary.
    pub fn points(&self) -> impl Iterator<Item = (PointRef, PixelPoint)> + '_ {
        (0..self.point_count()).flat_map(move |index| {
            SeriesKind::ALL.into_iter().filter_map(move |series| {
                let point = PointRef::new(index, series);
                self.point(point).map(|pixel| (point, pixel))
            })
        })
    }
}

/// Turns a dataset plus its two axis scales into `ChartGeometry`.
///
/// The output is a pure function of the inputs; the builder holds only the
/// plot region and label format.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryBuilder {
    region: PlotRegion,
    amount_format: AmountFormat,
}

impl GeometryBuilder {
    #[must_use]
    pub fn new(region: PlotRegion, amount_format: AmountFormat) -> Self {
        Self {
            region,
            amount_format,
        }
    }

    #[must_use]
    pub fn region(&self) -> PlotRegion {
        self.region
    }

    #[must_use]
    pub fn build(
        &self,
        dataset: &[DataPoint],
        x_position: impl Fn(usize) -> f64,
        primary_scale: AxisScale,
        secondary_scale: AxisScale,
    ) -> ChartGeometry {
        let region = self.region;

        let primary_ticks: Vec<AxisTick> = primary_scale
            .tick_values()
            .into_iter()
            .map(|value| AxisTick {
                position: primary_scale.value_to_pixel(value, region),
                value,
                label: format_count_tick(value),
            })
            .collect();

        // Labels format the rounded tick value.
        let secondary_ticks = secondary_scale
            .tick_values()
            .into_iter()
            .map(|value| AxisTick {
                position: secondary_scale.value_to_pixel(value, region),
                value,
                label: self.amount_format.format(value.round()),
            })
            .collect();

        let x_ticks: Vec<AxisTick> = dataset
            .iter()
            .enumerate()
            .map(|(index, point)| AxisTick {
                position: x_position(index),
                value: index as f64,
                label: point.label.clone(),
            })
            .collect();

        let horizontal_gridlines = primary_ticks
            .iter()
            .map(|tick| {
                LineSegment::new(region.left(), tick.position, region.right(), tick.position)
            })
            .collect();

        let vertical_gridlines = x_ticks
            .iter()
            .map(|tick| {
                LineSegment::new(tick.position, region.top(), tick.position, region.bottom())
            })
            .collect();

        let primary_path = project_series_path(
            dataset,
            SeriesKind::Primary,
            &x_position,
            primary_scale,
            region,
        );
        let secondary_path = project_series_path(
            dataset,
            SeriesKind::Secondary,
            &x_position,
            secondary_scale,
            region,
        );

        ChartGeometry {
            region,
            horizontal_gridlines,
            vertical_gridlines,
            primary_ticks,
            secondary_ticks,
            x_ticks,
            primary_path,
            secondary_path,
        }
    }
}
