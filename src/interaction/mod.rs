//! Pointer tracking and tooltip state.
//!
//! Two coordinate spaces meet here:
//!
//! - *container space*: CSS pixels relative to the top-left corner of the
//!   chart container's on-screen bounding box. Tooltip positions live here.
//! - *intrinsic space*: the canvas `viewBox` grid that all chart geometry is
//!   computed in.
//!
//! They differ whenever the container is scaled. `ViewBoxMapping` is the only
//! conversion between them.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{CanvasSize, PixelPoint, SeriesKind};

/// Pointer position as reported by the host event (viewport client pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClientPoint {
    pub x: f64,
    pub y: f64,
}

impl ClientPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pointer position relative to the chart container's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerPoint {
    pub x: f64,
    pub y: f64,
}

impl ContainerPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// On-screen bounding box of the chart container at event time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn to_container(self, client: ClientPoint) -> ContainerPoint {
        ContainerPoint::new(client.x - self.left, client.y - self.top)
    }
}

/// Conversion between container space and intrinsic canvas space.
///
/// Follows `preserveAspectRatio="xMidYMid meet"`: the canvas is scaled
/// uniformly to fit inside the container's content box (container minus
/// `content_inset` on every side) and centered on the slack axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBoxMapping {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl ViewBoxMapping {
    /// Returns `None` when the content box is empty or not finite.
    #[must_use]
    pub fn new(canvas: CanvasSize, container: ContainerRect, content_inset: f64) -> Option<Self> {
        let content_width = container.width - 2.0 * content_inset;
        let content_height = container.height - 2.0 * content_inset;
        if !canvas.is_valid()
            || !content_width.is_finite()
            || !content_height.is_finite()
            || content_width <= 0.0
            || content_height <= 0.0
        {
            return None;
        }

        let scale = (content_width / canvas.width).min(content_height / canvas.height);
        Some(Self {
            scale,
            offset_x: content_inset + (content_width - canvas.width * scale) / 2.0,
            offset_y: content_inset + (content_height - canvas.height * scale) / 2.0,
        })
    }

    /// Container pixels per intrinsic pixel.
    #[must_use]
    pub fn scale(self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn container_to_intrinsic(self, point: ContainerPoint) -> PixelPoint {
        PixelPoint::new(
            (point.x - self.offset_x) / self.scale,
            (point.y - self.offset_y) / self.scale,
        )
    }

    #[must_use]
    pub fn intrinsic_to_container(self, point: PixelPoint) -> ContainerPoint {
        ContainerPoint::new(
            point.x * self.scale + self.offset_x,
            point.y * self.scale + self.offset_y,
        )
    }
}

/// Identifies one series point of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointRef {
    pub index: usize,
    pub series: SeriesKind,
}

impl PointRef {
    #[must_use]
    pub const fn new(index: usize, series: SeriesKind) -> Self {
        Self { index, series }
    }
}

/// Display content copied into the tooltip when it is shown.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TooltipPayload {
    pub point: Option<PointRef>,
    pub title: String,
    pub value: String,
    pub color: String,
}

impl TooltipPayload {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            point: None,
            title: title.into(),
            value: value.into(),
            color: color.into(),
        }
    }

    #[must_use]
    pub fn for_point(mut self, point: PointRef) -> Self {
        self.point = Some(point);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TooltipPhase {
    Hidden,
    Visible,
}

/// Public tooltip state exposed to host applications.
///
/// `x`/`y` are container-space pixels. Payload fields may hold stale content
/// while hidden; they are only meaningful when `visible` is set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub point: Option<PointRef>,
    pub title: String,
    pub value: String,
    pub color: String,
}

impl TooltipState {
    #[must_use]
    pub fn phase(&self) -> TooltipPhase {
        if self.visible {
            TooltipPhase::Visible
        } else {
            TooltipPhase::Hidden
        }
    }
}

/// Pointer-driven tooltip state machine.
///
/// Transitions are total: no combination of calls fails or panics, and the
/// controller relies on the host delivering events in temporal order.
#[derive(Debug, Clone, Default)]
pub struct TooltipController {
    state: TooltipState,
}

impl TooltipController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    #[must_use]
    pub fn hovered_point(&self) -> Option<PointRef> {
        if self.state.visible {
            self.state.point
        } else {
            None
        }
    }

    /// Shows the tooltip, replacing both payload and position.
    pub fn on_enter(&mut self, pointer: ContainerPoint, payload: TooltipPayload) {
        trace!(x = pointer.x, y = pointer.y, title = %payload.title, "tooltip enter");
        self.state = TooltipState {
            visible: true,
            x: pointer.x,
            y: pointer.y,
            point: payload.point,
            title: payload.title,
            value: payload.value,
            color: payload.color,
        };
    }

    /// Tracks the pointer while visible. Returns `false` (and does nothing)
    /// when the tooltip is hidden.
    pub fn on_move(&mut self, pointer: ContainerPoint) -> bool {
        if !self.state.visible {
            return false;
        }
        self.state.x = pointer.x;
        self.state.y = pointer.y;
        true
    }

    pub fn on_leave(&mut self) {
        if self.state.visible {
            trace!("tooltip leave");
        }
        self.state.visible = false;
    }
}

/// Offset of the overlay anchor from the pointer, in container pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipOffset {
    pub dx: f64,
    pub dy: f64,
}

impl Default for TooltipOffset {
    fn default() -> Self {
        Self { dx: 12.0, dy: -12.0 }
    }
}

/// Where and what the host should paint as the tooltip overlay.
///
/// `left`/`bottom` is the overlay's bottom-left corner: the box grows upward
/// from the anchor so it never covers the hovered marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipOverlay {
    pub left: f64,
    pub bottom: f64,
    pub title: String,
    pub value: String,
    pub color: String,
}

impl TooltipOverlay {
    /// Resolves the overlay for a visible tooltip; `None` while hidden.
    #[must_use]
    pub fn from_state(state: &TooltipState, offset: TooltipOffset) -> Option<Self> {
        if !state.visible {
            return None;
        }
        Some(Self {
            left: state.x + offset.dx,
            bottom: state.y + offset.dy,
            title: state.title.clone(),
            value: state.value.clone(),
            color: state.color.clone(),
        })
    }
}
