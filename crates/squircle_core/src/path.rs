//! Vector path representation
//!
//! A [`Path`] is an ordered list of [`PathCommand`]s. Arcs use the
//! bounding-box + angle convention so renderers can rasterize them without
//! reconstructing circle centers.

use std::fmt::Write as _;

use crate::geometry::{CornerRadius, Point, Rect};

// ─────────────────────────────────────────────────────────────────────────────
// Path Types
// ─────────────────────────────────────────────────────────────────────────────

/// Path command for building vector paths
#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Move to a point
    MoveTo(Point),
    /// Line to a point
    LineTo(Point),
    /// Cubic Bézier curve
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Elliptical arc inscribed in `bounds`
    ///
    /// Angles are in degrees, 0° points along +X and positive angles turn
    /// towards +Y (clockwise on a y-down screen). If the arc does not start
    /// at the current point, a straight line joins them first.
    ArcTo {
        bounds: Rect,
        start_angle: f64,
        sweep_angle: f64,
    },
    /// Close the current subpath
    Close,
}

/// A vector path
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Move to a point
    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    /// Line to a point
    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    /// Cubic Bézier curve
    pub fn cubic_to(mut self, cx1: f64, cy1: f64, cx2: f64, cy2: f64, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::CubicTo {
            control1: Point::new(cx1, cy1),
            control2: Point::new(cx2, cy2),
            end: Point::new(x, y),
        });
        self
    }

    /// Arc along the ellipse inscribed in `bounds`
    pub fn arc_to(mut self, bounds: Rect, start_angle: f64, sweep_angle: f64) -> Self {
        self.commands.push(PathCommand::ArcTo {
            bounds,
            start_angle,
            sweep_angle,
        });
        self
    }

    /// Close the path
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Create a rectangle path
    pub fn rect(rect: Rect) -> Self {
        Self::new()
            .move_to(rect.x(), rect.y())
            .line_to(rect.right(), rect.y())
            .line_to(rect.right(), rect.bottom())
            .line_to(rect.x(), rect.bottom())
            .close()
    }

    /// Create a rounded rectangle path with circular corners
    ///
    /// Radii are used as given; callers are expected to have normalized them
    /// so that no edge is over-subscribed.
    pub fn rounded_rect(rect: Rect, corner_radius: impl Into<CornerRadius>) -> Self {
        let r = corner_radius.into();
        let (x, y) = (rect.x(), rect.y());
        let (right, bottom) = (rect.right(), rect.bottom());
        let (tl, tr, br, bl) = (r.top_left, r.top_right, r.bottom_right, r.bottom_left);

        let mut path = Self::new().move_to(x + tl, y);

        // Top edge
        path = path.line_to(right - tr, y);
        if tr > 0.0 {
            path = path.arc_to(Rect::new(right - 2.0 * tr, y, 2.0 * tr, 2.0 * tr), -90.0, 90.0);
        }

        // Right edge
        path = path.line_to(right, bottom - br);
        if br > 0.0 {
            path = path.arc_to(
                Rect::new(right - 2.0 * br, bottom - 2.0 * br, 2.0 * br, 2.0 * br),
                0.0,
                90.0,
            );
        }

        // Bottom edge
        path = path.line_to(x + bl, bottom);
        if bl > 0.0 {
            path = path.arc_to(Rect::new(x, bottom - 2.0 * bl, 2.0 * bl, 2.0 * bl), 90.0, 90.0);
        }

        // Left edge
        path = path.line_to(x, y + tl);
        if tl > 0.0 {
            path = path.arc_to(Rect::new(x, y, 2.0 * tl, 2.0 * tl), -180.0, 90.0);
        }

        path.close()
    }

    /// Get the path commands
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Check if the last command closes the path
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// The point of the first `MoveTo`, if any
    pub fn start_point(&self) -> Option<Point> {
        self.commands.iter().find_map(|cmd| match cmd {
            PathCommand::MoveTo(p) => Some(*p),
            _ => None,
        })
    }

    /// Pen position after each command, in command order.
    ///
    /// `Close` returns the pen to the start of its subpath.
    pub fn pen_positions(&self) -> Vec<Point> {
        let mut positions = Vec::with_capacity(self.commands.len());
        let mut current = Point::ZERO;
        let mut subpath_start = Point::ZERO;

        for cmd in &self.commands {
            current = match cmd {
                PathCommand::MoveTo(p) => {
                    subpath_start = *p;
                    *p
                }
                PathCommand::LineTo(p) => *p,
                PathCommand::CubicTo { end, .. } => *end,
                PathCommand::ArcTo {
                    bounds,
                    start_angle,
                    sweep_angle,
                } => point_on_arc(*bounds, start_angle + sweep_angle),
                PathCommand::Close => subpath_start,
            };
            positions.push(current);
        }
        positions
    }

    /// The pen position after the last command
    pub fn current_point(&self) -> Option<Point> {
        self.pen_positions().last().copied()
    }

    /// Calculate the bounding rectangle of this path
    ///
    /// Arcs contribute their true extent, cubics their control hull.
    pub fn bounds(&self) -> Rect {
        if self.commands.is_empty() {
            return Rect::ZERO;
        }

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        let mut include = |p: Point| {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        };

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => include(*p),
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    include(*control1);
                    include(*control2);
                    include(*end);
                }
                PathCommand::ArcTo {
                    bounds,
                    start_angle,
                    sweep_angle,
                } => {
                    let end_angle = start_angle + sweep_angle;
                    include(point_on_arc(*bounds, *start_angle));
                    include(point_on_arc(*bounds, end_angle));

                    // Axis extremes crossed by the sweep
                    let (lo, hi) = if *sweep_angle >= 0.0 {
                        (*start_angle, end_angle)
                    } else {
                        (end_angle, *start_angle)
                    };
                    let mut quadrant = (lo / 90.0).ceil() * 90.0;
                    while quadrant <= hi {
                        include(point_on_arc(*bounds, quadrant));
                        quadrant += 90.0;
                    }
                }
                PathCommand::Close => {}
            }
        }

        if min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite() {
            Rect::from_ltrb(min_x, min_y, max_x, max_y)
        } else {
            Rect::ZERO
        }
    }

    /// Serialize to SVG path data (`M`, `L`, `C`, `A`, `Z`)
    pub fn to_svg_path_data(&self) -> String {
        let mut out = String::new();
        let mut current = Point::ZERO;
        let mut subpath_start = Point::ZERO;

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) => {
                    let _ = write!(out, "M{} {} ", num(p.x), num(p.y));
                    subpath_start = *p;
                    current = *p;
                }
                PathCommand::LineTo(p) => {
                    let _ = write!(out, "L{} {} ", num(p.x), num(p.y));
                    current = *p;
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    let _ = write!(
                        out,
                        "C{} {} {} {} {} {} ",
                        num(control1.x),
                        num(control1.y),
                        num(control2.x),
                        num(control2.y),
                        num(end.x),
                        num(end.y)
                    );
                    current = *end;
                }
                PathCommand::ArcTo {
                    bounds,
                    start_angle,
                    sweep_angle,
                } => {
                    let start = point_on_arc(*bounds, *start_angle);
                    if start.distance(current) > SVG_EPSILON {
                        let _ = write!(out, "L{} {} ", num(start.x), num(start.y));
                    }
                    current = write_svg_arc(&mut out, *bounds, *start_angle, *sweep_angle, start);
                }
                PathCommand::Close => {
                    out.push('Z');
                    out.push(' ');
                    current = subpath_start;
                }
            }
        }

        out.truncate(out.trim_end().len());
        out
    }
}

const SVG_EPSILON: f64 = 1e-9;

/// Point on the ellipse inscribed in `bounds` at `angle_degrees`
pub(crate) fn point_on_arc(bounds: Rect, angle_degrees: f64) -> Point {
    let center = bounds.center();
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    Point::new(
        center.x + bounds.width() / 2.0 * cos,
        center.y + bounds.height() / 2.0 * sin,
    )
}

/// Emit an SVG endpoint arc, splitting sweeps beyond 180° so the
/// large-arc flag stays unambiguous. Returns the end point.
fn write_svg_arc(
    out: &mut String,
    bounds: Rect,
    start_angle: f64,
    sweep_angle: f64,
    start: Point,
) -> Point {
    let rx = bounds.width() / 2.0;
    let ry = bounds.height() / 2.0;
    let end = point_on_arc(bounds, start_angle + sweep_angle);

    if rx <= 0.0 || ry <= 0.0 || sweep_angle == 0.0 {
        if end.distance(start) > SVG_EPSILON {
            let _ = write!(out, "L{} {} ", num(end.x), num(end.y));
        }
        return end;
    }

    if sweep_angle.abs() > 180.0 {
        let half = sweep_angle / 2.0;
        let mid = write_svg_arc(out, bounds, start_angle, half, start);
        return write_svg_arc(out, bounds, start_angle + half, half, mid);
    }

    let sweep_flag = u8::from(sweep_angle > 0.0);
    let _ = write!(
        out,
        "A{} {} 0 0 {} {} {} ",
        num(rx),
        num(ry),
        sweep_flag,
        num(end.x),
        num(end.y)
    );
    end
}

/// Compact decimal formatting: four fractional digits, trailing zeros dropped
fn num(value: f64) -> String {
    let mut s = format!("{value:.4}");
    if s.contains('.') {
        s.truncate(s.trim_end_matches('0').trim_end_matches('.').len());
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}
