//! Per-corner curve geometry
//!
//! Each corner is a circular arc of sweep `2h` (with `h = 45° × (1 − s)`)
//! bracketed by two cubic transition curves, one along each adjacent edge.
//! A transition leaves the straight edge, runs `A + B` along it, then bends by
//! `(C, D)` into the arc with a matching tangent.
//!
//! ```text
//!   edge ──A──●──B──●  C
//!                     ╲ D
//!                      arc
//! ```

use std::f64::consts::SQRT_2;

use crate::smoothing::CornerSmoothing;

/// Curve lengths and angles for one corner
///
/// "Vertical" values belong to the transition running along the corner's
/// left or right edge, "horizontal" ones to the transition along its top or
/// bottom edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerParams {
    pub radius: f64,
    /// Half of the unwidened arc sweep, in degrees
    pub half_arc_angle: f64,
    /// Chord-projected length the arc covers along each edge
    pub arc_movement: f64,
    /// Offset along the edge from the end of the straight cubic leg to the arc
    pub length_c: f64,
    /// Offset away from the edge from the end of the straight cubic leg to the arc
    pub length_d: f64,
    pub vertical_transition: f64,
    pub horizontal_transition: f64,
    /// Outer control segment along the vertical edge
    pub vertical_a: f64,
    /// Inner control segment along the vertical edge
    pub vertical_b: f64,
    pub horizontal_a: f64,
    pub horizontal_b: f64,
    /// Natural transition length before any edge limits it: `(1 + s) × r`
    pub max_transition: f64,
}

impl CornerParams {
    /// Derive a corner's curve from its radius and the half-space available
    /// on each adjacent edge.
    ///
    /// `vertical_space` and `horizontal_space` are half of the straight run
    /// left on the adjacent vertical and horizontal edge after both of that
    /// edge's radii are subtracted. A negative space suppresses that side's
    /// cubic leg.
    pub fn compute(
        radius: f64,
        smoothing: CornerSmoothing,
        vertical_space: f64,
        horizontal_space: f64,
    ) -> Self {
        let s = smoothing.value();
        let half_arc_angle = smoothing.half_arc_angle();

        let max_transition = (1.0 + s) * radius;
        let vertical_transition = max_transition.min(radius + vertical_space);
        let horizontal_transition = max_transition.min(radius + horizontal_space);

        let arc_movement = half_arc_angle.to_radians().sin() * radius * SQRT_2;

        let half_com_angle = (45.0 - half_arc_angle) / 2.0;
        let distance34 = radius * half_com_angle.to_radians().tan();
        let (sin, cos) = (45.0 * s).to_radians().sin_cos();
        let length_d = distance34 * sin;
        let length_c = distance34 * cos;

        let base = arc_movement + length_c + length_d;
        let (vertical_a, vertical_b) = split_leg(vertical_transition, base, vertical_space < 0.0);
        let (horizontal_a, horizontal_b) =
            split_leg(horizontal_transition, base, horizontal_space < 0.0);

        Self {
            radius,
            half_arc_angle,
            arc_movement,
            length_c,
            length_d,
            vertical_transition,
            horizontal_transition,
            vertical_a,
            vertical_b,
            horizontal_a,
            horizontal_b,
            max_transition,
        }
    }

    /// Arc sweep in degrees when neither adjacent edge is merged
    pub fn sweep_angle(&self) -> f64 {
        self.half_arc_angle * 2.0
    }

    /// Angle an arc widens by when one adjacent edge is merged
    pub fn merge_widening(&self) -> f64 {
        45.0 - self.half_arc_angle
    }

    /// Length of the straight part of the vertical cubic leg
    pub fn vertical_leg(&self) -> f64 {
        self.vertical_a + self.vertical_b
    }

    /// Length of the straight part of the horizontal cubic leg
    pub fn horizontal_leg(&self) -> f64 {
        self.horizontal_a + self.horizontal_b
    }
}

/// Split a cubic leg into its outer (A) and inner (B) control segments, 2:1
fn split_leg(transition: f64, base: f64, no_space: bool) -> (f64, f64) {
    if no_space {
        return (0.0, 0.0);
    }
    let b = (transition - base) / 3.0;
    (2.0 * b, b)
}

/// The four corners of one outline, clockwise from top-left
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerSet {
    pub top_left: CornerParams,
    pub top_right: CornerParams,
    pub bottom_right: CornerParams,
    pub bottom_left: CornerParams,
}

impl CornerSet {
    pub fn uniform(corner: CornerParams) -> Self {
        Self {
            top_left: corner,
            top_right: corner,
            bottom_right: corner,
            bottom_left: corner,
        }
    }
}
