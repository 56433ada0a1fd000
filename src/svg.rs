//! SVG visualization of an alignment layout and its zoom progression.
//!
//! Generates a vertical sequence of annotated panels: the overview with its
//! fingerprint region, the static layout inside the viewport, then one
//! viewport panel per zoom state showing where the overview and camera
//! preview land on screen.
//!
//! # Example
//!
//! ```
//! use zenalign::{AlignEngine, OverviewContext, Rect, Size, ViewportBounds};
//! use zenalign::svg::render_alignment_svg;
//!
//! let context = OverviewContext::new(
//!     Size::new(1000.0, 800.0),
//!     Rect::new(400.0, 300.0, 100.0, 100.0),
//! );
//! let mut engine = AlignEngine::default();
//! let layout = engine
//!     .locate_fingerprint(&context, ViewportBounds::new(300.0, 300.0))
//!     .unwrap();
//!
//! let states: Vec<_> = [0.0, 0.5, 1.0]
//!     .iter()
//!     .filter_map(|&v| engine.change_zoom(v))
//!     .collect();
//!
//! let svg = render_alignment_svg(&context, &layout, &states);
//! assert!(svg.starts_with("<svg"));
//! ```

use core::fmt::Write;

use crate::geometry::{Rect, Size};
use crate::layout::{OverviewContext, StaticLayout};
use crate::zoom::ZoomState;

/// Maximum pixel width for any panel in the SVG output.
const MAX_PANEL_W: f64 = 300.0;
/// Maximum pixel height for any panel in the SVG output.
const MAX_PANEL_H: f64 = 200.0;
/// Vertical gap between panels.
const PANEL_GAP: f64 = 50.0;
/// Horizontal margin.
const MARGIN_X: f64 = 50.0;
/// Top margin for first panel.
const MARGIN_TOP: f64 = 30.0;
/// Height of label text area above each panel.
const LABEL_H: f64 = 22.0;

/// Panel chrome plus one class per shape kind. Colors follow the on-device
/// debug tint: fingerprint red, camera preview green.
const STYLE: &str = r##"<style>
  text { font: 12px "DejaVu Sans Mono", monospace; text-anchor: middle; fill: #333; }
  .title { font-weight: bold; }
  .note { font-size: 11px; fill: #777; }
  .panel { fill: #f2f2f2; stroke: #aaa; }
  .overview { fill: #8fb8de; }
  .fingerprint { fill: #e53935; fill-opacity: 0.45; stroke: #b71c1c; }
  .camera { fill: #43a047; fill-opacity: 0.5; stroke: #1b5e20; }
</style>
"##;

/// A single panel in the visualization.
struct Step {
    label: String,
    /// The panel's bounding box (overview image or viewport).
    outer: Size,
    /// Rects drawn inside the panel, in `outer` coordinates. Clipped to the panel.
    shapes: Vec<Shape>,
    annotation: String,
}

struct Shape {
    rect: Rect,
    class: &'static str,
}

/// Render a complete SVG document for `layout` and a sequence of zoom states.
pub fn render_alignment_svg(
    context: &OverviewContext,
    layout: &StaticLayout,
    states: &[ZoomState],
) -> String {
    let steps = build_steps(context, layout, states);
    render_steps(&steps)
}

fn build_steps(context: &OverviewContext, layout: &StaticLayout, states: &[ZoomState]) -> Vec<Step> {
    let mut steps = Vec::with_capacity(states.len() + 2);
    let fp = context.fingerprint_rect;

    steps.push(Step {
        label: format!("Overview  {}", dims(context.overview_size)),
        outer: context.overview_size,
        shapes: vec![Shape {
            rect: fp,
            class: "fingerprint",
        }],
        annotation: format!(
            "fingerprint {} at ({}, {})",
            dims(fp.size),
            num(fp.x()),
            num(fp.y())
        ),
    });

    let viewport = layout.viewport.size();
    steps.push(Step {
        label: format!("Viewport  {}", dims(viewport)),
        outer: viewport,
        shapes: vec![
            Shape {
                rect: layout.overview_image_frame,
                class: "overview",
            },
            Shape {
                rect: layout.camera_preview_frame,
                class: "camera",
            },
        ],
        annotation: format!(
            "scale {:.4}, zoom {}..{}",
            layout.scale_factor,
            num(layout.min_zoom_scale),
            num(layout.max_zoom_scale)
        ),
    });

    for state in states {
        let t = state.transform();
        steps.push(Step {
            label: format!(
                "Zoom {:.2}  ×{}",
                state.zoom_value,
                num(state.zoom_scale)
            ),
            outer: viewport,
            shapes: vec![
                Shape {
                    rect: t.apply_rect(&layout.overview_image_frame),
                    class: "overview",
                },
                Shape {
                    rect: t.apply_rect(&layout.camera_preview_frame),
                    class: "camera",
                },
            ],
            annotation: format!(
                "offset ({}, {}), alpha {:.2}",
                num(state.content_offset.x),
                num(state.content_offset.y),
                state.camera_preview_alpha
            ),
        });
    }

    steps
}

/// Scale a Size to fit within MAX_PANEL_W × MAX_PANEL_H, preserving aspect ratio.
fn scale_to_fit(size: Size) -> (f64, f64, f64) {
    if size.is_empty() {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_PANEL_W / size.width).min(MAX_PANEL_H / size.height);
    (size.width * scale, size.height * scale, scale)
}

fn render_steps(steps: &[Step]) -> String {
    if steps.is_empty() {
        return String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"/>"#);
    }

    let n = steps.len() as f64;
    let total_h = 2.0 * MARGIN_TOP + n * (LABEL_H + MAX_PANEL_H) + (n - 1.0) * PANEL_GAP;
    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;
    let center_x = total_w / 2.0;

    // Writing into a String cannot fail.
    let mut svg = String::with_capacity(4096);
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {total_w} {total_h}">"#,
        total_w as u32, total_h as u32
    );
    svg.push_str(STYLE);

    let mut y = MARGIN_TOP;
    for (i, step) in steps.iter().enumerate() {
        let _ = writeln!(
            svg,
            r#"<text x="{center_x}" y="{:.1}" class="title">{}</text>"#,
            y + 14.0,
            escape_xml(&step.label)
        );
        y += LABEL_H;

        let (sw, sh, scale) = scale_to_fit(step.outer);
        let px = center_x - sw / 2.0;
        let frame = format!(r#"x="{px:.1}" y="{y:.1}" width="{sw:.1}" height="{sh:.1}""#);

        // Zoomed content overflows the viewport; clip it to the panel.
        let _ = writeln!(svg, r#"<clipPath id="panel{i}"><rect {frame}/></clipPath>"#);
        let _ = writeln!(svg, r#"<rect {frame} class="panel"/>"#);
        let _ = writeln!(svg, r#"<g clip-path="url(#panel{i})">"#);
        for shape in &step.shapes {
            let r = shape.rect.scale(scale);
            let _ = writeln!(
                svg,
                r#"  <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="{}"/>"#,
                px + r.x(),
                y + r.y(),
                r.width(),
                r.height(),
                shape.class
            );
        }
        svg.push_str("</g>\n");

        if !step.annotation.is_empty() {
            let _ = writeln!(
                svg,
                r#"<text x="{center_x}" y="{:.1}" class="note">{}</text>"#,
                y + sh + 14.0,
                escape_xml(&step.annotation)
            );
        }

        y += MAX_PANEL_H + PANEL_GAP;
    }

    svg.push_str("</svg>\n");
    svg
}

/// `1000×800`, with one decimal only when the value isn't whole.
fn dims(size: Size) -> String {
    format!("{}×{}", num(size.width), num(size.height))
}

fn num(v: f64) -> String {
    let r = (v * 10.0).round() / 10.0;
    if r.fract() == 0.0 {
        format!("{r:.0}")
    } else {
        format!("{r:.1}")
    }
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
