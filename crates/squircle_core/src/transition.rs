//! Transition adjustment between neighbouring corners
//!
//! When the transitions of two corners sharing an edge cover the whole edge,
//! the outer control segment (A) of each cubic leg gives length to the inner
//! one (B). The amount falls off with the cube of the remaining space, so the
//! curves stay tangent-continuous as the straight run shrinks to zero.

use tracing::trace;

use crate::corner::{CornerParams, CornerSet};
use crate::edge::EdgeSpaces;
use crate::geometry::Size;

/// Divisor applied to B when computing the shift; tuned so fully merged
/// edges come out close to a semicircle.
pub const SEMICIRCLE_BIAS: f64 = 1.9;

/// Which cubic leg of a corner an edge touches
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Top or bottom edge
    Horizontal,
    /// Left or right edge
    Vertical,
}

/// Redistribute control-segment length for the two corners on one edge.
///
/// `edge_space` is the straight space left on the edge after both radii.
/// Corners whose transitions cannot extend beyond their radius are returned
/// unchanged.
pub fn adjust_edge(
    a: CornerParams,
    b: CornerParams,
    axis: Axis,
    edge_space: f64,
) -> (CornerParams, CornerParams) {
    let full = a.max_transition + b.max_transition - a.radius - b.radius;
    if full <= 0.0 {
        return (a, b);
    }
    let delta = edge_space / full;
    (shift_leg(a, axis, delta), shift_leg(b, axis, delta))
}

fn shift_leg(mut corner: CornerParams, axis: Axis, delta: f64) -> CornerParams {
    let falloff = (1.0 - delta).powi(3);
    match axis {
        Axis::Horizontal => {
            let shift = (corner.horizontal_a - corner.horizontal_b / SEMICIRCLE_BIAS) * falloff;
            corner.horizontal_a -= shift;
            corner.horizontal_b += shift;
        }
        Axis::Vertical => {
            let shift = (corner.vertical_a - corner.vertical_b / SEMICIRCLE_BIAS) * falloff;
            corner.vertical_a -= shift;
            corner.vertical_b += shift;
        }
    }
    corner
}

/// Apply [`adjust_edge`] to every edge whose two transitions meet or overlap,
/// in the order top, right, bottom, left. Each edge is adjusted at most once.
pub fn adjust_transitions(corners: CornerSet, size: Size, spaces: EdgeSpaces) -> CornerSet {
    let CornerSet {
        top_left: mut tl,
        top_right: mut tr,
        bottom_right: mut br,
        bottom_left: mut bl,
    } = corners;

    if tl.horizontal_transition + tr.horizontal_transition >= size.width {
        trace!(space = spaces.top, "adjusting top edge transitions");
        (tl, tr) = adjust_edge(tl, tr, Axis::Horizontal, spaces.top);
    }
    if tr.vertical_transition + br.vertical_transition >= size.height {
        trace!(space = spaces.right, "adjusting right edge transitions");
        (tr, br) = adjust_edge(tr, br, Axis::Vertical, spaces.right);
    }
    if br.horizontal_transition + bl.horizontal_transition >= size.width {
        trace!(space = spaces.bottom, "adjusting bottom edge transitions");
        (br, bl) = adjust_edge(br, bl, Axis::Horizontal, spaces.bottom);
    }
    if bl.vertical_transition + tl.vertical_transition >= size.height {
        trace!(space = spaces.left, "adjusting left edge transitions");
        (bl, tl) = adjust_edge(bl, tl, Axis::Vertical, spaces.left);
    }

    CornerSet {
        top_left: tl,
        top_right: tr,
        bottom_right: br,
        bottom_left: bl,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CornerRadius;
    use crate::normalize::normalize_radii;
    use crate::smoothing::CornerSmoothing;

    const EPS: f64 = 1e-9;

    fn corner(radius: f64, space: f64) -> CornerParams {
        CornerParams::compute(radius, CornerSmoothing::PRETTY, space, space)
    }

    #[test]
    fn test_adjustment_preserves_leg_length() {
        let a = corner(40.0, 5.0);
        let b = corner(40.0, 5.0);
        let (a2, b2) = adjust_edge(a, b, Axis::Horizontal, 10.0);

        assert!((a2.horizontal_leg() - a.horizontal_leg()).abs() < EPS);
        assert!((b2.horizontal_leg() - b.horizontal_leg()).abs() < EPS);
        assert!(a2.horizontal_a < a.horizontal_a);
        assert!(a2.horizontal_b > a.horizontal_b);
        // The other axis is untouched
        assert_eq!(a2.vertical_a, a.vertical_a);
        assert_eq!(a2.vertical_b, a.vertical_b);
    }

    #[test]
    fn test_no_space_applies_full_shift() {
        let a = corner(50.0, 0.0);
        let (a2, _) = adjust_edge(a, a, Axis::Vertical, 0.0);
        // delta = 0 → A' = B / 1.9
        assert!((a2.vertical_a - a.vertical_b / SEMICIRCLE_BIAS).abs() < EPS);
    }

    #[test]
    fn test_ample_space_falls_off() {
        let a = corner(10.0, 100.0);
        let full = 2.0 * (a.max_transition - a.radius);
        let (a2, _) = adjust_edge(a, a, Axis::Horizontal, full);
        // delta = 1 → no shift at all
        assert_eq!(a2, a);
    }

    #[test]
    fn test_unsmoothed_corners_are_untouched() {
        let a = CornerParams::compute(20.0, CornerSmoothing::NONE, 0.0, 0.0);
        let (a2, b2) = adjust_edge(a, a, Axis::Horizontal, 0.0);
        assert_eq!(a2, a);
        assert_eq!(b2, a);
    }

    #[test]
    fn test_adjust_transitions_only_touches_crowded_edges() {
        // Wide box: the vertical edges are fully consumed, the horizontal ones are not.
        let size = Size::new(400.0, 100.0);
        let radii = normalize_radii(CornerRadius::uniform(50.0), size);
        let spaces = EdgeSpaces::new(size, radii);
        let c = CornerParams::compute(
            50.0,
            CornerSmoothing::PRETTY,
            spaces.left / 2.0,
            spaces.top / 2.0,
        );
        let adjusted = adjust_transitions(CornerSet::uniform(c), size, spaces);

        for corner in [
            adjusted.top_left,
            adjusted.top_right,
            adjusted.bottom_right,
            adjusted.bottom_left,
        ] {
            assert_eq!(corner.horizontal_a, c.horizontal_a);
            assert!(corner.vertical_a < c.vertical_a);
        }
    }
}
