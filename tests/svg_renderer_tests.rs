use dual_axis_chart::api::{ChartConfig, ChartStyle, DualAxisChart};
use dual_axis_chart::core::{CanvasSize, DataPoint, PixelPoint};
use dual_axis_chart::render::{
    Color, PolylinePrimitive, RenderFrame, Renderer, SvgRenderStats, SvgRenderer, TextHAlign,
    TextPrimitive,
};
use dual_axis_chart::ChartError;

fn weekly_dataset() -> Vec<DataPoint> {
    [
        ("D1", 10.0, 20_000.0),
        ("D2", 20.0, 30_000.0),
        ("D3", 30.0, 40_000.0),
        ("D4", 50.0, 70_000.0),
        ("D5", 40.0, 60_000.0),
        ("D6", 60.0, 80_000.0),
        ("D7", 100.0, 90_000.0),
    ]
    .into_iter()
    .map(|(label, txns, amount)| DataPoint::new(label, txns, amount).expect("valid point"))
    .collect()
}

fn rendered_weekly_document() -> (String, SvgRenderStats) {
    let mut chart =
        DualAxisChart::new(SvgRenderer::default(), ChartConfig::default()).expect("chart init");
    chart.set_data(weekly_dataset()).expect("set data");
    chart.render().expect("render");
    let renderer = chart.into_renderer();
    (renderer.last_document().to_owned(), renderer.last_stats())
}

#[test]
fn document_scales_with_fixed_view_box() {
    let (svg, _) = rendered_weekly_document();
    assert!(svg.starts_with("<svg "));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains(r#"viewBox="0 0 900 520""#));
    assert!(svg.contains(r#"preserveAspectRatio="xMidYMid meet""#));
    assert!(svg.contains(r#"width="100%""#));
}

#[test]
fn series_paths_follow_projected_vertices() {
    let (svg, stats) = rendered_weekly_document();
    let primary = "M 90 412 L 210 374 L 330 336 L 450 260 L 570 298 L 690 222 L 810 70";
    let secondary = "M 90 374 L 210 336 L 330 298 L 450 184 L 570 222 L 690 146 L 810 108";
    assert!(svg.contains(&format!(r#"d="{primary}""#)));
    assert!(svg.contains(&format!(r#"d="{secondary}""#)));
    assert!(svg.contains(r#"stroke-linecap="round""#));
    assert_eq!(stats.polylines_drawn, 2);
    assert_eq!(stats.circles_drawn, 16);
    assert_eq!(stats.rects_drawn, 2);
}

#[test]
fn labels_titles_and_chrome_are_emitted() {
    let (svg, stats) = rendered_weekly_document();
    assert!(svg.contains(">₹100k</text>"));
    assert!(svg.contains(">₹0</text>"));
    assert!(svg.contains(">D7</text>"));
    assert!(svg.contains(">Transactions</text>"));
    assert!(svg.contains(r#"font-weight="700""#));
    assert!(svg.contains(r#"transform="rotate(-90 30 260)""#));
    assert!(svg.contains(r#"transform="rotate(90 870 260)""#));
    assert!(svg.contains(r##"stroke="#94a3b8" stroke-opacity="0.25""##));
    assert!(svg.contains(r##"<circle cx="90" cy="412" r="6" fill="#22c55e"/>"##));
    assert_eq!(stats.lines_drawn, 35);
    assert_eq!(stats.texts_drawn, 25);
}

#[test]
fn text_content_is_escaped() {
    let style = ChartStyle {
        title: "Sales <Q1> & \"Q2\"".to_owned(),
        ..ChartStyle::default()
    };
    let mut chart = DualAxisChart::new(
        SvgRenderer::new("Mono"),
        ChartConfig::default().with_style(style),
    )
    .expect("chart init");
    chart.render().expect("render");

    let svg = chart.renderer().last_document();
    assert!(svg.contains(">Sales &lt;Q1&gt; &amp; &quot;Q2&quot;</text>"));
    assert!(svg.contains(r#"font-family="Mono""#));
}

#[test]
fn invalid_frames_are_rejected_and_keep_previous_document() {
    let mut renderer = SvgRenderer::default();
    let valid = RenderFrame::new(CanvasSize::new(100.0, 50.0)).with_text(TextPrimitive::new(
        "ok",
        10.0,
        10.0,
        12.0,
        Color::rgb(1.0, 1.0, 1.0),
        TextHAlign::Left,
    ));
    renderer.render(&valid).expect("render valid frame");
    let previous = renderer.last_document().to_owned();
    assert!(previous.contains(r#"viewBox="0 0 100 50""#));

    let mut invalid = RenderFrame::new(CanvasSize::new(100.0, 50.0));
    invalid.polylines.push(PolylinePrimitive::new(
        vec![PixelPoint::new(0.0, f64::NAN)],
        2.0,
        Color::rgb(1.0, 0.0, 0.0),
    ));
    assert!(matches!(renderer.render(&invalid), Err(ChartError::InvalidData(_))));
    assert_eq!(renderer.last_document(), previous);
    assert_eq!(renderer.backend_name(), "svg");
}

#[test]
fn series_paint_over_labels() {
    let (svg, _) = rendered_weekly_document();
    let last_text = svg.rfind("</text>").expect("text element");
    let first_path = svg.find("<path ").expect("path element");
    let first_marker = svg.find(r#"<circle cx="90""#).expect("marker element");
    assert!(last_text < first_path);
    assert!(first_path < first_marker);
}

#[test]
fn empty_frame_renders_bare_document() {
    let frame = RenderFrame::new(CanvasSize::new(10.0, 20.0));
    assert!(frame.is_empty());
    assert!(!frame.clone().with_text(TextPrimitive::new(
        "x",
        1.0,
        1.0,
        12.0,
        Color::rgb(0.0, 0.0, 0.0),
        TextHAlign::Center,
    ))
    .is_empty());

    let mut renderer = SvgRenderer::default();
    renderer.render(&frame).expect("render");
    let document = renderer.last_document();
    assert!(document.ends_with(r#"preserveAspectRatio="xMidYMid meet"></svg>"#));
    assert!(document.contains(r#"viewBox="0 0 10 20""#));
    assert_eq!(renderer.last_stats().texts_drawn, 0);
}
