use serde::{Deserialize, Serialize};

use crate::core::{AxisScaleOptions, CanvasSize, PlotMargins, PlotRegion, SeriesKind};
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipOffset;
use crate::render::Color;

use super::AmountFormat;

/// Display identity of one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub name: String,
    pub color: Color,
    /// Unit appended to raw values in tooltips, e.g. `txns`.
    #[serde(default)]
    pub value_unit: Option<String>,
}

impl SeriesStyle {
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
            value_unit: None,
        }
    }

    #[must_use]
    pub fn with_value_unit(mut self, unit: impl Into<String>) -> Self {
        self.value_unit = Some(unit.into());
        self
    }
}

/// Static presentation: titles and palette of the non-series chrome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub title: String,
    pub x_axis_title: String,
    pub primary_axis_title: String,
    pub secondary_axis_title: String,
    pub background_color: Color,
    pub grid_color: Color,
    pub axis_color: Color,
    pub title_color: Color,
    pub label_color: Color,
    pub legend_background_color: Color,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: "Transactions vs Amount".to_owned(),
            x_axis_title: "Time (Days)".to_owned(),
            primary_axis_title: "# Transactions".to_owned(),
            secondary_axis_title: "Amount (₹)".to_owned(),
            background_color: Color::from_rgb8(0x0b, 0x10, 0x20),
            grid_color: Color::from_rgb8(0x94, 0xa3, 0xb8).with_alpha(0.25),
            axis_color: Color::from_rgb8(0xe2, 0xe8, 0xf0),
            title_color: Color::from_rgb8(0xe2, 0xe8, 0xf0),
            label_color: Color::from_rgb8(0xcb, 0xd5, 0xe1),
            legend_background_color: Color::from_rgb8(0x11, 0x18, 0x27).with_alpha(0.9),
        }
    }
}

/// Public chart bootstrap configuration.
///
/// Serializable so host applications can persist/load chart setup without
/// inventing their own format. Each option feeds exactly one computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub canvas: CanvasSize,
    #[serde(default)]
    pub margins: PlotMargins,
    #[serde(default = "default_primary_axis")]
    pub primary_axis: AxisScaleOptions,
    #[serde(default = "default_secondary_axis")]
    pub secondary_axis: AxisScaleOptions,
    #[serde(default = "default_primary_series")]
    pub primary_series: SeriesStyle,
    #[serde(default = "default_secondary_series")]
    pub secondary_series: SeriesStyle,
    #[serde(default)]
    pub amount_format: AmountFormat,
    /// Marker radius; also the pointer hit radius.
    #[serde(default = "default_point_radius")]
    pub point_radius: f64,
    #[serde(default)]
    pub tooltip_offset: TooltipOffset,
    /// Distance between the container's bounding box and the drawn canvas
    /// (padding plus border), in container pixels.
    #[serde(default)]
    pub content_inset: f64,
    #[serde(default)]
    pub style: ChartStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            margins: PlotMargins::default(),
            primary_axis: default_primary_axis(),
            secondary_axis: default_secondary_axis(),
            primary_series: default_primary_series(),
            secondary_series: default_secondary_series(),
            amount_format: AmountFormat::default(),
            point_radius: default_point_radius(),
            tooltip_offset: TooltipOffset::default(),
            content_inset: 0.0,
            style: ChartStyle::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: PlotMargins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_primary_axis(mut self, options: AxisScaleOptions) -> Self {
        self.primary_axis = options;
        self
    }

    #[must_use]
    pub fn with_secondary_axis(mut self, options: AxisScaleOptions) -> Self {
        self.secondary_axis = options;
        self
    }

    #[must_use]
    pub fn with_series_style(mut self, series: SeriesKind, style: SeriesStyle) -> Self {
        match series {
            SeriesKind::Primary => self.primary_series = style,
            SeriesKind::Secondary => self.secondary_series = style,
        }
        self
    }

    #[must_use]
    pub fn with_amount_format(mut self, format: AmountFormat) -> Self {
        self.amount_format = format;
        self
    }

    #[must_use]
    pub fn with_point_radius(mut self, radius: f64) -> Self {
        self.point_radius = radius;
        self
    }

    #[must_use]
    pub fn with_tooltip_offset(mut self, offset: TooltipOffset) -> Self {
        self.tooltip_offset = offset;
        self
    }

    #[must_use]
    pub fn with_content_inset(mut self, inset: f64) -> Self {
        self.content_inset = inset;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn series_style(&self, series: SeriesKind) -> &SeriesStyle {
        match series {
            SeriesKind::Primary => &self.primary_series,
            SeriesKind::Secondary => &self.secondary_series,
        }
    }

    /// Plot rectangle implied by canvas size and margins.
    pub fn plot_region(&self) -> ChartResult<PlotRegion> {
        self.margins.plot_region(self.canvas)
    }

    /// Rejects every configuration that cannot produce a valid chart.
    pub fn validate(&self) -> ChartResult<()> {
        self.plot_region()?;
        self.primary_axis.validate()?;
        self.secondary_axis.validate()?;

        if !self.point_radius.is_finite() || self.point_radius <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "point radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.tooltip_offset.dx.is_finite() || !self.tooltip_offset.dy.is_finite() {
            return Err(ChartError::InvalidConfig(
                "tooltip offset must be finite".to_owned(),
            ));
        }
        if !self.content_inset.is_finite() || self.content_inset < 0.0 {
            return Err(ChartError::InvalidConfig(
                "content inset must be finite and >= 0".to_owned(),
            ));
        }

        for series in SeriesKind::ALL {
            self.series_style(series).color.validate()?;
        }
        let style = &self.style;
        for color in [
            style.background_color,
            style.grid_color,
            style.axis_color,
            style.title_color,
            style.label_color,
            style.legend_background_color,
        ] {
            color.validate()?;
        }

        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON. Missing fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_primary_axis() -> AxisScaleOptions {
    AxisScaleOptions::new(6, 10.0)
}

fn default_secondary_axis() -> AxisScaleOptions {
    AxisScaleOptions::new(6, 10_000.0).with_padding_fraction(0.1)
}

fn default_primary_series() -> SeriesStyle {
    SeriesStyle::new("Transactions", Color::from_rgb8(0x22, 0xc5, 0x5e)).with_value_unit("txns")
}

fn default_secondary_series() -> SeriesStyle {
    SeriesStyle::new("Amount", Color::from_rgb8(0x60, 0xa5, 0xfa))
}

fn default_point_radius() -> f64 {
    6.0
}
