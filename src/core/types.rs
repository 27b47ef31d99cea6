use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{date_to_day_label, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

/// Logical (intrinsic) canvas size, i.e. the SVG `viewBox` extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(900.0, 520.0)
    }
}

/// Insets from each canvas edge reserved for labels, legend and title.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotMargins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self {
            left: 90.0,
            right: 90.0,
            top: 70.0,
            bottom: 70.0,
        }
    }
}

impl PlotMargins {
    /// Resolves the plot rectangle left inside `canvas` by these margins.
    pub fn plot_region(self, canvas: CanvasSize) -> ChartResult<PlotRegion> {
        let canvas = canvas.validate()?;
        for (edge, value) in [
            ("left", self.left),
            ("right", self.right),
            ("top", self.top),
            ("bottom", self.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "plot margin `{edge}` must be finite and >= 0"
                )));
            }
        }

        PlotRegion::new(
            self.left,
            canvas.width - self.right,
            self.top,
            canvas.height - self.bottom,
        )
    }
}

/// Pixel rectangle in intrinsic canvas units where series geometry is drawn.
///
/// Construction enforces `right > left` and `bottom > top`; every other type
/// can therefore map through a region without re-validating it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPlotRegion", into = "RawPlotRegion")]
pub struct PlotRegion {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawPlotRegion {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl TryFrom<RawPlotRegion> for PlotRegion {
    type Error = ChartError;

    fn try_from(raw: RawPlotRegion) -> ChartResult<Self> {
        Self::new(raw.left, raw.right, raw.top, raw.bottom)
    }
}

impl From<PlotRegion> for RawPlotRegion {
    fn from(region: PlotRegion) -> Self {
        Self {
            left: region.left,
            right: region.right,
            top: region.top,
            bottom: region.bottom,
        }
    }
}

impl PlotRegion {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> ChartResult<Self> {
        let finite = left.is_finite() && right.is_finite() && top.is_finite() && bottom.is_finite();
        if !finite || right <= left || bottom <= top {
            return Err(ChartError::InvalidPlotRegion {
                left,
                right,
                top,
                bottom,
            });
        }

        Ok(Self {
            left,
            right,
            top,
            bottom,
        })
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.right
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.top
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.bottom
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        (self.left + self.right) / 2.0
    }

    #[must_use]
    pub fn contains(self, point: PixelPoint) -> bool {
        (self.left..=self.right).contains(&point.x) && (self.top..=self.bottom).contains(&point.y)
    }
}

/// Point in intrinsic canvas pixels (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_sq(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// One discrete time step carrying a count and a monetary amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub primary_value: f64,
    pub secondary_value: f64,
}

impl DataPoint {
    pub fn new(
        label: impl Into<String>,
        primary_value: f64,
        secondary_value: f64,
    ) -> ChartResult<Self> {
        let point = Self {
            label: label.into(),
            primary_value,
            secondary_value,
        };
        point.validate()?;
        Ok(point)
    }

    /// Builds a point from an integral count and an exact decimal amount.
    pub fn from_decimal(
        label: impl Into<String>,
        count: u64,
        amount: Decimal,
    ) -> ChartResult<Self> {
        Self::new(label, count as f64, decimal_to_f64(amount, "amount")?)
    }

    /// Builds a point labelled with a short calendar day such as `Mar 04`.
    pub fn for_date(
        date: NaiveDate,
        primary_value: f64,
        secondary_value: f64,
    ) -> ChartResult<Self> {
        Self::new(date_to_day_label(date), primary_value, secondary_value)
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (field, value) in [
            ("primary_value", self.primary_value),
            ("secondary_value", self.secondary_value),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "`{field}` of point `{}` must be finite and >= 0",
                    self.label
                )));
            }
        }
        Ok(())
    }
}
