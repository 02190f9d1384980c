//! Squircle path construction
//!
//! [`PathBuilder`] keeps the pen position so cubic legs can be written
//! relative to wherever the previous segment ended. [`build_path`] walks the
//! four corners clockwise from the top edge.

use crate::corner::{CornerParams, CornerSet};
use crate::edge::EdgeMergeFlags;
use crate::geometry::{Point, Rect, Size};
use crate::path::{point_on_arc, Path};

/// Builder for constructing paths with a tracked cursor
pub struct PathBuilder {
    path: Path,
    start: Point,
    current: Point,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            path: Path::new(),
            start: Point::ZERO,
            current: Point::ZERO,
        }
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.path = self.path.move_to(x, y);
        self.start = Point::new(x, y);
        self.current = self.start;
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.path = self.path.line_to(x, y);
        self.current = Point::new(x, y);
        self
    }

    /// Cubic Bézier with all three points relative to the current position
    pub fn relative_cubic_to(
        mut self,
        dx1: f64,
        dy1: f64,
        dx2: f64,
        dy2: f64,
        dx: f64,
        dy: f64,
    ) -> Self {
        let Point { x, y } = self.current;
        self.path = self
            .path
            .cubic_to(x + dx1, y + dy1, x + dx2, y + dy2, x + dx, y + dy);
        self.current = Point::new(x + dx, y + dy);
        self
    }

    pub fn arc_to(mut self, bounds: Rect, start_angle: f64, sweep_angle: f64) -> Self {
        self.path = self.path.arc_to(bounds, start_angle, sweep_angle);
        self.current = point_on_arc(bounds, start_angle + sweep_angle);
        self
    }

    pub fn close(mut self) -> Self {
        self.path = self.path.close();
        self.current = self.start;
        self
    }

    pub fn build(self) -> Path {
        self.path
    }

    /// Get the current cursor position
    pub fn current_position(&self) -> Point {
        self.current
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Emit the closed squircle outline for `size` from already computed (and
/// adjusted) corners.
///
/// A merged edge gets no straight segment and no cubic legs; the arcs on
/// either side widen to meet each other instead.
pub fn build_path(size: Size, corners: &CornerSet, merged: EdgeMergeFlags) -> Path {
    let Size { width, height } = size;
    let CornerSet {
        top_left: tl,
        top_right: tr,
        bottom_right: br,
        bottom_left: bl,
    } = corners;

    let mut b = PathBuilder::new().move_to(width - tr.horizontal_transition, 0.0);

    b = b.top_right_corner(width, tr, merged.top, merged.right);
    if !merged.right {
        b = b.line_to(width, height - br.vertical_transition);
    }
    b = b.bottom_right_corner(width, height, br, merged.right, merged.bottom);
    if !merged.bottom {
        b = b.line_to(bl.horizontal_transition, height);
    }
    b = b.bottom_left_corner(height, bl, merged.bottom, merged.left);
    if !merged.left {
        b = b.line_to(0.0, tl.vertical_transition);
    }
    b = b.top_left_corner(tl, merged.left, merged.top);

    // The top edge's straight run is the closing segment
    b.close().build()
}

/// Start angle and sweep of a corner's arc after widening for merged edges
fn arc_span(
    base_start: f64,
    c: &CornerParams,
    incoming_merged: bool,
    outgoing_merged: bool,
) -> (f64, f64) {
    let mut start = base_start;
    let mut sweep = c.sweep_angle();
    if incoming_merged {
        start -= c.merge_widening();
        sweep += c.merge_widening();
    }
    if outgoing_merged {
        sweep += c.merge_widening();
    }
    (start, sweep)
}

impl PathBuilder {
    fn top_right_corner(
        mut self,
        width: f64,
        c: &CornerParams,
        top_merged: bool,
        right_merged: bool,
    ) -> Self {
        let h = c.half_arc_angle;
        let (start, sweep) = arc_span(-45.0 - h, c, top_merged, right_merged);
        let leg = c.horizontal_leg();

        if !top_merged {
            self = self.relative_cubic_to(
                c.horizontal_a,
                0.0,
                leg,
                0.0,
                leg + c.length_c,
                c.length_d,
            );
        }
        self = self.arc_to(
            Rect::from_ltrb(width - c.radius * 2.0, 0.0, width, c.radius * 2.0),
            start,
            sweep,
        );
        if !right_merged {
            let leg = c.vertical_leg();
            self = self.relative_cubic_to(
                c.length_d,
                c.length_c,
                c.length_d,
                c.length_c + c.vertical_b,
                c.length_d,
                c.length_c + leg,
            );
        }
        self
    }

    fn bottom_right_corner(
        mut self,
        width: f64,
        height: f64,
        c: &CornerParams,
        right_merged: bool,
        bottom_merged: bool,
    ) -> Self {
        let h = c.half_arc_angle;
        let (start, sweep) = arc_span(45.0 - h, c, right_merged, bottom_merged);
        let leg = c.vertical_leg();

        if !right_merged {
            self = self.relative_cubic_to(
                0.0,
                c.vertical_a,
                0.0,
                leg,
                -c.length_d,
                leg + c.length_c,
            );
        }
        self = self.arc_to(
            Rect::from_ltrb(width - c.radius * 2.0, height - c.radius * 2.0, width, height),
            start,
            sweep,
        );
        if !bottom_merged {
            let leg = c.horizontal_leg();
            self = self.relative_cubic_to(
                -c.length_c,
                c.length_d,
                -c.length_c - c.horizontal_b,
                c.length_d,
                -c.length_c - leg,
                c.length_d,
            );
        }
        self
    }

    fn bottom_left_corner(
        mut self,
        height: f64,
        c: &CornerParams,
        bottom_merged: bool,
        left_merged: bool,
    ) -> Self {
        let h = c.half_arc_angle;
        let (start, sweep) = arc_span(135.0 - h, c, bottom_merged, left_merged);
        let leg = c.horizontal_leg();

        if !bottom_merged {
            self = self.relative_cubic_to(
                -c.horizontal_a,
                0.0,
                -leg,
                0.0,
                -leg - c.length_c,
                -c.length_d,
            );
        }
        self = self.arc_to(
            Rect::from_ltrb(0.0, height - c.radius * 2.0, c.radius * 2.0, height),
            start,
            sweep,
        );
        if !left_merged {
            let leg = c.vertical_leg();
            self = self.relative_cubic_to(
                -c.length_d,
                -c.length_c,
                -c.length_d,
                -c.length_c - c.vertical_b,
                -c.length_d,
                -c.length_c - leg,
            );
        }
        self
    }

    fn top_left_corner(mut self, c: &CornerParams, left_merged: bool, top_merged: bool) -> Self {
        let h = c.half_arc_angle;
        let (start, sweep) = arc_span(-135.0 - h, c, left_merged, top_merged);
        let leg = c.vertical_leg();

        if !left_merged {
            self = self.relative_cubic_to(
                0.0,
                -c.vertical_a,
                0.0,
                -leg,
                c.length_d,
                -leg - c.length_c,
            );
        }
        self = self.arc_to(
            Rect::from_ltrb(0.0, 0.0, c.radius * 2.0, c.radius * 2.0),
            start,
            sweep,
        );
        if !top_merged {
            let leg = c.horizontal_leg();
            self = self.relative_cubic_to(
                c.length_c,
                -c.length_d,
                c.length_c + c.horizontal_b,
                -c.length_d,
                c.length_c + leg,
                -c.length_d,
            );
        }
        self
    }
}
