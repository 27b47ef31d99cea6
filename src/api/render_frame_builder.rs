use crate::core::{CanvasSize, SeriesKind};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PolylinePrimitive, RectPrimitive, RenderFrame,
    TextHAlign, TextPrimitive,
};

use super::{ChartConfig, ChartGeometry};

const GRID_STROKE_WIDTH: f64 = 1.0;
const AXIS_STROKE_WIDTH: f64 = 2.0;
const SERIES_STROKE_WIDTH: f64 = 3.0;
const TICK_LENGTH_PX: f64 = 10.0;
const TICK_LABEL_GAP_PX: f64 = 20.0;
const X_LABEL_OFFSET_PX: f64 = 25.0;
// Nudges value labels so their visual center sits on the tick.
const LABEL_BASELINE_SHIFT_PX: f64 = 4.0;
const TICK_FONT_PX: f64 = 12.0;
const AXIS_TITLE_FONT_PX: f64 = 14.0;
const LEGEND_FONT_PX: f64 = 13.0;
const TITLE_FONT_PX: f64 = 18.0;
const TITLE_BASELINE_Y: f64 = 40.0;
const AXIS_TITLE_EDGE_INSET_PX: f64 = 30.0;
const X_AXIS_TITLE_BOTTOM_INSET_PX: f64 = 20.0;
const BACKGROUND_CORNER_RADIUS: f64 = 16.0;

const LEGEND_WIDTH: f64 = 260.0;
const LEGEND_HEIGHT: f64 = 38.0;
const LEGEND_TOP: f64 = 18.0;
const LEGEND_RIGHT_INSET: f64 = 80.0;
const LEGEND_ENTRY_SPACING: f64 = 135.0;
const LEGEND_CORNER_RADIUS: f64 = 10.0;
const LEGEND_SWATCH_INSET_PX: f64 = 25.0;
const LEGEND_LABEL_INSET_PX: f64 = 40.0;

/// Maps chart geometry and static style onto backend-agnostic primitives.
///
/// Paint order follows the list order of `RenderFrame`: background and
/// legend rects, then grid and axis lines, then labels, then series
/// polylines and markers, so series geometry is painted over all chrome.
#[must_use]
pub fn build_render_frame(config: &ChartConfig, geometry: &ChartGeometry) -> RenderFrame {
    let canvas = config.canvas;
    let style = &config.style;
    let region = geometry.region;
    let mut frame = RenderFrame::new(canvas);

    frame.rects.push(
        RectPrimitive::new(0.0, 0.0, canvas.width, canvas.height, style.background_color)
            .with_corner_radius(BACKGROUND_CORNER_RADIUS),
    );

    for segment in geometry
        .horizontal_gridlines
        .iter()
        .chain(&geometry.vertical_gridlines)
    {
        frame.lines.push(LinePrimitive::new(
            segment.x1,
            segment.y1,
            segment.x2,
            segment.y2,
            GRID_STROKE_WIDTH,
            style.grid_color,
        ));
    }

    let axis = |x1, y1, x2, y2| {
        LinePrimitive::new(x1, y1, x2, y2, AXIS_STROKE_WIDTH, style.axis_color)
    };
    frame.lines.push(axis(region.left(), region.bottom(), region.right(), region.bottom()));
    frame.lines.push(axis(region.left(), region.top(), region.left(), region.bottom()));
    frame.lines.push(axis(region.right(), region.top(), region.right(), region.bottom()));

    for tick in &geometry.primary_ticks {
        frame.lines.push(axis(
            region.left(),
            tick.position,
            region.left() - TICK_LENGTH_PX,
            tick.position,
        ));
        push_label(
            &mut frame,
            &tick.label,
            region.left() - TICK_LABEL_GAP_PX,
            tick.position + LABEL_BASELINE_SHIFT_PX,
            TICK_FONT_PX,
            style.label_color,
            TextHAlign::Right,
        );
    }

    for tick in &geometry.secondary_ticks {
        frame.lines.push(axis(
            region.right(),
            tick.position,
            region.right() + TICK_LENGTH_PX,
            tick.position,
        ));
        push_label(
            &mut frame,
            &tick.label,
            region.right() + TICK_LABEL_GAP_PX,
            tick.position + LABEL_BASELINE_SHIFT_PX,
            TICK_FONT_PX,
            style.label_color,
            TextHAlign::Left,
        );
    }

    for tick in &geometry.x_ticks {
        frame.lines.push(axis(
            tick.position,
            region.bottom(),
            tick.position,
            region.bottom() + TICK_LENGTH_PX,
        ));
        push_label(
            &mut frame,
            &tick.label,
            tick.position,
            region.bottom() + X_LABEL_OFFSET_PX,
            TICK_FONT_PX,
            style.label_color,
            TextHAlign::Center,
        );
    }

    append_titles(&mut frame, config, canvas, region.left(), region.center_x());
    append_legend(&mut frame, config, canvas);

    for series in SeriesKind::ALL {
        let color = config.series_style(series).color;
        frame.polylines.push(PolylinePrimitive::new(
            geometry.path(series).vertices.clone(),
            SERIES_STROKE_WIDTH,
            color,
        ));
    }

    for (point, pixel) in geometry.points() {
        frame.circles.push(CirclePrimitive::new(
            pixel.x,
            pixel.y,
            config.point_radius,
            config.series_style(point.series).color,
        ));
    }

    frame
}

fn append_titles(
    frame: &mut RenderFrame,
    config: &ChartConfig,
    canvas: CanvasSize,
    plot_left: f64,
    plot_center_x: f64,
) {
    let style = &config.style;
    let mid_y = canvas.height / 2.0;

    if !style.title.is_empty() {
        frame.texts.push(
            TextPrimitive::new(
                style.title.clone(),
                plot_left,
                TITLE_BASELINE_Y,
                TITLE_FONT_PX,
                style.title_color,
                TextHAlign::Left,
            )
            .bold(),
        );
    }

    for (title, x, rotation) in [
        (&style.primary_axis_title, AXIS_TITLE_EDGE_INSET_PX, -90.0),
        (
            &style.secondary_axis_title,
            canvas.width - AXIS_TITLE_EDGE_INSET_PX,
            90.0,
        ),
    ] {
        if title.is_empty() {
            continue;
        }
        frame.texts.push(
            TextPrimitive::new(
                title.clone(),
                x,
                mid_y,
                AXIS_TITLE_FONT_PX,
                style.label_color,
                TextHAlign::Center,
            )
            .rotated(rotation),
        );
    }

    push_label(
        frame,
        &style.x_axis_title,
        plot_center_x,
        canvas.height - X_AXIS_TITLE_BOTTOM_INSET_PX,
        AXIS_TITLE_FONT_PX,
        style.label_color,
        TextHAlign::Center,
    );
}

fn append_legend(frame: &mut RenderFrame, config: &ChartConfig, canvas: CanvasSize) {
    let left = canvas.width - LEGEND_RIGHT_INSET - LEGEND_WIDTH;
    let center_y = LEGEND_TOP + LEGEND_HEIGHT / 2.0;

    frame.rects.push(
        RectPrimitive::new(
            left,
            LEGEND_TOP,
            LEGEND_WIDTH,
            LEGEND_HEIGHT,
            config.style.legend_background_color,
        )
        .with_corner_radius(LEGEND_CORNER_RADIUS),
    );

    for (slot, series) in SeriesKind::ALL.into_iter().enumerate() {
        let series_style = config.series_style(series);
        let entry_left = left + slot as f64 * LEGEND_ENTRY_SPACING;
        frame.circles.push(CirclePrimitive::new(
            entry_left + LEGEND_SWATCH_INSET_PX,
            center_y,
            config.point_radius,
            series_style.color,
        ));
        push_label(
            frame,
            &series_style.name,
            entry_left + LEGEND_LABEL_INSET_PX,
            center_y + LABEL_BASELINE_SHIFT_PX,
            LEGEND_FONT_PX,
            config.style.title_color,
            TextHAlign::Left,
        );
    }
}

// Empty strings are skipped: backends reject empty text primitives.
fn push_label(
    frame: &mut RenderFrame,
    text: &str,
    x: f64,
    y: f64,
    font_size_px: f64,
    color: Color,
    h_align: TextHAlign,
) {
    if text.is_empty() {
        return;
    }
    frame
        .texts
        .push(TextPrimitive::new(text, x, y, font_size_px, color, h_align));
}
