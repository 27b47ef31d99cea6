use std::fmt::Write;

use crate::core::svg_path_data;
use crate::error::ChartResult;
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub polylines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Serializes frames into standalone SVG documents.
///
/// The document's `viewBox` equals the frame canvas and the root element
/// stretches to its container width, so hosts embed the output directly and
/// let the browser scale it.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    font_family: String,
    last_document: String,
    last_stats: SvgRenderStats,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new("Inter, Arial, sans-serif")
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new(font_family: impl Into<String>) -> Self {
        Self {
            font_family: font_family.into(),
            last_document: String::new(),
            last_stats: SvgRenderStats::default(),
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    /// Document produced by the most recent successful `render` call.
    #[must_use]
    pub fn last_document(&self) -> &str {
        &self.last_document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    fn write_document(&self, frame: &RenderFrame) -> ChartResult<(String, SvgRenderStats)> {
        let mut out = String::new();
        let mut stats = SvgRenderStats::default();
        let canvas = frame.canvas;

        write!(
            out,
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" "#,
                r#"viewBox="0 0 {} {}" preserveAspectRatio="xMidYMid meet">"#
            ),
            canvas.width, canvas.height
        )?;

        for rect in &frame.rects {
            write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" {}/>"#,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                rect.corner_radius,
                paint_attrs("fill", rect.fill)
            )?;
            stats.rects_drawn += 1;
        }

        for line in &frame.lines {
            write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{}" {}/>"#,
                line.x1,
                line.y1,
                line.x2,
                line.y2,
                line.stroke_width,
                paint_attrs("stroke", line.color)
            )?;
            stats.lines_drawn += 1;
        }

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            write!(
                out,
                r#"<text x="{}" y="{}" font-size="{}" font-family="{}" text-anchor="{anchor}" {}"#,
                text.x,
                text.y,
                text.font_size_px,
                escape_xml(&self.font_family),
                paint_attrs("fill", text.color)
            )?;
            if text.bold {
                out.push_str(r#" font-weight="700""#);
            }
            if text.rotation_deg != 0.0 {
                write!(
                    out,
                    r#" transform="rotate({} {} {})""#,
                    text.rotation_deg, text.x, text.y
                )?;
            }
            write!(out, ">{}</text>", escape_xml(&text.text))?;
            stats.texts_drawn += 1;
        }

        for polyline in &frame.polylines {
            write!(
                out,
                concat!(
                    r#"<path d="{}" fill="none" stroke-width="{}" "#,
                    r#"stroke-linecap="round" stroke-linejoin="round" {}/>"#
                ),
                svg_path_data(&polyline.points),
                polyline.stroke_width,
                paint_attrs("stroke", polyline.color)
            )?;
            stats.polylines_drawn += 1;
        }

        for circle in &frame.circles {
            write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" {}/>"#,
                circle.cx,
                circle.cy,
                circle.radius,
                paint_attrs("fill", circle.fill)
            )?;
            stats.circles_drawn += 1;
        }

        out.push_str("</svg>");
        Ok((out, stats))
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let (document, stats) = self.write_document(frame)?;
        self.last_document = document;
        self.last_stats = stats;
        Ok(())
    }
}

fn paint_attrs(attr: &str, color: Color) -> String {
    if color.alpha >= 1.0 {
        format!(r#"{attr}="{}""#, color.to_css_hex())
    } else {
        format!(
            r#"{attr}="{}" {attr}-opacity="{}""#,
            color.to_css_hex(),
            color.alpha
        )
    }
}

fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
