use tracing::{debug, trace, warn};

use crate::core::{AxisScale, DataPoint, IndexScale, PlotRegion, SeriesKind};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{
    ClientPoint, ContainerRect, PointRef, TooltipController, TooltipOverlay, TooltipState,
    ViewBoxMapping,
};
use crate::render::{RenderFrame, Renderer};

use super::{
    ChartConfig, ChartGeometry, GeometryBuilder, build_render_frame, hit_test, tooltip_payload,
};

/// Main orchestration facade consumed by host applications.
///
/// `DualAxisChart` owns the dataset, both axis scales, the derived geometry
/// snapshot and the tooltip controller. Installing a dataset rebuilds scales
/// and geometry; pointer events only ever touch the tooltip.
pub struct DualAxisChart<R: Renderer> {
    renderer: R,
    config: ChartConfig,
    builder: GeometryBuilder,
    points: Vec<DataPoint>,
    primary_scale: AxisScale,
    secondary_scale: AxisScale,
    index_scale: IndexScale,
    geometry: ChartGeometry,
    tooltip: TooltipController,
}

impl<R: Renderer> DualAxisChart<R> {
    /// Validates `config` and creates an empty chart.
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let region = config.plot_region()?;
        let builder = GeometryBuilder::new(region, config.amount_format.clone());

        let primary_scale = AxisScale::from_values(&[], config.primary_axis)?;
        let secondary_scale = AxisScale::from_values(&[], config.secondary_axis)?;
        let index_scale = IndexScale::new(region, 0);
        let geometry = builder.build(
            &[],
            |index| index_scale.x_position(index),
            primary_scale,
            secondary_scale,
        );

        Ok(Self {
            renderer,
            config,
            builder,
            points: Vec::new(),
            primary_scale,
            secondary_scale,
            index_scale,
            geometry,
            tooltip: TooltipController::new(),
        })
    }

    /// Replaces the dataset and rebuilds scales and geometry.
    ///
    /// A visible tooltip keeps its copied payload. On error the previous
    /// dataset stays installed.
    pub fn set_data(&mut self, points: Vec<DataPoint>) -> ChartResult<()> {
        for point in &points {
            if let Err(err) = point.validate() {
                warn!(label = %point.label, error = %err, "rejecting dataset");
                return Err(err);
            }
        }

        let primary_values: Vec<f64> = points.iter().map(|point| point.primary_value).collect();
        let secondary_values: Vec<f64> =
            points.iter().map(|point| point.secondary_value).collect();
        let primary_scale = AxisScale::from_values(&primary_values, self.config.primary_axis)?;
        let secondary_scale =
            AxisScale::from_values(&secondary_values, self.config.secondary_axis)?;
        let index_scale = IndexScale::new(self.builder.region(), points.len());

        self.geometry = self.builder.build(
            &points,
            |index| index_scale.x_position(index),
            primary_scale,
            secondary_scale,
        );
        self.primary_scale = primary_scale;
        self.secondary_scale = secondary_scale;
        self.index_scale = index_scale;
        self.points = points;

        debug!(
            count = self.points.len(),
            primary_domain_max = primary_scale.domain_max(),
            secondary_domain_max = secondary_scale.domain_max(),
            "set chart data"
        );
        Ok(())
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn plot_region(&self) -> PlotRegion {
        self.builder.region()
    }

    #[must_use]
    pub fn primary_scale(&self) -> AxisScale {
        self.primary_scale
    }

    #[must_use]
    pub fn secondary_scale(&self) -> AxisScale {
        self.secondary_scale
    }

    #[must_use]
    pub fn scale(&self, series: SeriesKind) -> AxisScale {
        match series {
            SeriesKind::Primary => self.primary_scale,
            SeriesKind::Secondary => self.secondary_scale,
        }
    }

    #[must_use]
    pub fn index_scale(&self) -> IndexScale {
        self.index_scale
    }

    #[must_use]
    pub fn x_position(&self, index: usize) -> f64 {
        self.index_scale.x_position(index)
    }

    #[must_use]
    pub fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    /// Serializes the current geometry snapshot to pretty JSON.
    pub fn geometry_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.geometry)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize geometry: {e}")))
    }

    #[must_use]
    pub fn tooltip_state(&self) -> &TooltipState {
        self.tooltip.state()
    }

    /// Overlay placement in container pixels; `None` while hidden.
    #[must_use]
    pub fn tooltip_overlay(&self) -> Option<TooltipOverlay> {
        TooltipOverlay::from_state(self.tooltip.state(), self.config.tooltip_offset)
    }

    /// Shows the tooltip for `point` at the pointer position.
    ///
    /// For hosts that attach enter handlers to individual markers. Returns
    /// `false` when `point` does not exist in the current dataset.
    pub fn pointer_enter_point(
        &mut self,
        point: PointRef,
        client: ClientPoint,
        container: ContainerRect,
    ) -> bool {
        let Some(data) = self.points.get(point.index) else {
            trace!(index = point.index, "pointer enter on unknown point");
            return false;
        };
        let payload = tooltip_payload(&self.config, data, point);
        self.tooltip.on_enter(container.to_container(client), payload);
        true
    }

    /// Moves a visible tooltip with the pointer without re-resolving the
    /// hovered point. No-op while hidden.
    pub fn pointer_track(&mut self, client: ClientPoint, container: ContainerRect) -> bool {
        self.tooltip.on_move(container.to_container(client))
    }

    /// Handles pointer movement over the chart container.
    ///
    /// The pointer is hit-tested against the point markers in intrinsic
    /// space; the tooltip itself is positioned in container space. Entering a
    /// different marker replaces the payload, staying on the same marker only
    /// moves it, and leaving all markers hides it.
    pub fn pointer_move(&mut self, client: ClientPoint, container: ContainerRect) {
        let pointer = container.to_container(client);
        let Some(mapping) =
            ViewBoxMapping::new(self.config.canvas, container, self.config.content_inset)
        else {
            warn!(
                width = container.width,
                height = container.height,
                "pointer event on degenerate container, hiding tooltip"
            );
            self.tooltip.on_leave();
            return;
        };

        let intrinsic = mapping.container_to_intrinsic(pointer);
        let hit = hit_test(&self.geometry, intrinsic, self.config.point_radius);
        trace!(x = intrinsic.x, y = intrinsic.y, ?hit, "pointer hit test");

        match hit {
            Some(point) if self.tooltip.hovered_point() == Some(point) => {
                self.tooltip.on_move(pointer);
            }
            Some(point) => match self.points.get(point.index) {
                Some(data) => {
                    let payload = tooltip_payload(&self.config, data, point);
                    self.tooltip.on_enter(pointer, payload);
                }
                None => self.tooltip.on_leave(),
            },
            None => self.tooltip.on_leave(),
        }
    }

    /// Marks the pointer as outside the chart.
    pub fn pointer_leave(&mut self) {
        self.tooltip.on_leave();
    }

    #[must_use]
    pub fn render_frame(&self) -> RenderFrame {
        build_render_frame(&self.config, &self.geometry)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.render_frame();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
