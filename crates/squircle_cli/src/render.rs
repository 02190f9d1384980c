//! Text output: SVG documents and inspection reports

use std::fmt::Write as _;

use squircle_core::{CornerParams, Outline, SquircleGeometry};

use crate::config::RenderConfig;

/// A standalone SVG document filling `outline`, padded on every side
pub fn svg_document(outline: &Outline, render: &RenderConfig) -> String {
    let bounds = outline.bounds();
    let padding = render.padding.max(0.0);
    let width = bounds.width() + 2.0 * padding;
    let height = bounds.height() + 2.0 * padding;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
        width,
        height,
        bounds.x() - padding,
        bounds.y() - padding,
        width,
        height
    );
    let _ = writeln!(
        svg,
        r#"  <path d="{}" fill="{}"/>"#,
        outline.to_path().to_svg_path_data(),
        render.fill
    );
    svg.push_str("</svg>\n");
    svg
}

/// Human-readable dump of everything the path builder consumed
pub fn inspect_report(geometry: &SquircleGeometry) -> String {
    let r = geometry.radii.get();
    let spaces = geometry.spaces;
    let merged = geometry.merged;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "size       {} x {}",
        geometry.size.width, geometry.size.height
    );
    let _ = writeln!(out, "smoothing  {}", geometry.smoothing.value());
    let _ = writeln!(
        out,
        "radii      tl {:.3}  tr {:.3}  br {:.3}  bl {:.3}",
        r.top_left, r.top_right, r.bottom_right, r.bottom_left
    );
    let _ = writeln!(
        out,
        "space      top {:.3}  right {:.3}  bottom {:.3}  left {:.3}",
        spaces.top, spaces.right, spaces.bottom, spaces.left
    );
    let _ = writeln!(
        out,
        "merged     top {}  right {}  bottom {}  left {}",
        merged.top, merged.right, merged.bottom, merged.left
    );

    let corners = &geometry.corners;
    for (name, corner) in [
        ("top-left", &corners.top_left),
        ("top-right", &corners.top_right),
        ("bottom-right", &corners.bottom_right),
        ("bottom-left", &corners.bottom_left),
    ] {
        write_corner(&mut out, name, corner);
    }
    out
}

fn write_corner(out: &mut String, name: &str, corner: &CornerParams) {
    let _ = writeln!(out, "\n[{}]", name);
    let _ = writeln!(
        out,
        "  radius {:.3}  arc sweep {:.3}°",
        corner.radius,
        corner.sweep_angle()
    );
    let _ = writeln!(
        out,
        "  arc movement {:.3}  c {:.3}  d {:.3}",
        corner.arc_movement, corner.length_c, corner.length_d
    );
    let _ = writeln!(
        out,
        "  vertical   transition {:.3}  a {:.3}  b {:.3}",
        corner.vertical_transition, corner.vertical_a, corner.vertical_b
    );
    let _ = writeln!(
        out,
        "  horizontal transition {:.3}  a {:.3}  b {:.3}",
        corner.horizontal_transition, corner.horizontal_a, corner.horizontal_b
    );
}
