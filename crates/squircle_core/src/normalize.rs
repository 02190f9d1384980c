//! Corner radius normalization
//!
//! Two radii sharing an edge may not sum to more than that edge. Oversized
//! pairs are scaled down proportionally, shorter axis first, so shrinking one
//! axis cannot leave the other over-subscribed.

use tracing::trace;

use crate::geometry::{CornerRadius, Size};

/// Corner radii that fit their box: on every edge the two touching radii sum
/// to at most the edge length.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NormalizedRadii(CornerRadius);

impl NormalizedRadii {
    pub fn get(&self) -> CornerRadius {
        self.0
    }
}

impl From<NormalizedRadii> for CornerRadius {
    fn from(radii: NormalizedRadii) -> Self {
        radii.0
    }
}

/// Scale down radius pairs that over-subscribe an edge of `size`.
///
/// Radii are expected to be finite and non-negative. A pair summing to zero is never
/// rescaled.
pub fn normalize_radii(radii: CornerRadius, size: Size) -> NormalizedRadii {
    let width = size.width;
    let height = size.height;

    if radii.top_left + radii.bottom_left <= height
        && radii.top_right + radii.bottom_right <= height
        && radii.top_left + radii.top_right <= width
        && radii.bottom_left + radii.bottom_right <= width
    {
        return NormalizedRadii(radii);
    }

    let mut r = radii;
    if width > height {
        fit_vertical_edges(&mut r, height);
        fit_horizontal_edges(&mut r, width);
    } else {
        fit_horizontal_edges(&mut r, width);
        fit_vertical_edges(&mut r, height);
    }

    trace!(?radii, normalized = ?r, width, height, "rescaled corner radii");
    NormalizedRadii(r)
}

/// Left (top-left + bottom-left) and right (top-right + bottom-right) edges
fn fit_vertical_edges(r: &mut CornerRadius, height: f64) {
    fit_pair(&mut r.top_left, &mut r.bottom_left, height);
    fit_pair(&mut r.top_right, &mut r.bottom_right, height);
}

/// Top (top-left + top-right) and bottom (bottom-left + bottom-right) edges
fn fit_horizontal_edges(r: &mut CornerRadius, width: f64) {
    fit_pair(&mut r.top_left, &mut r.top_right, width);
    fit_pair(&mut r.bottom_left, &mut r.bottom_right, width);
}

fn fit_pair(a: &mut f64, b: &mut f64, edge: f64) {
    let (mut pa, mut pb) = (*a, *b);
    // Halving is exact and keeps the sum of two huge radii finite
    if !(pa + pb).is_finite() {
        pa /= 2.0;
        pb /= 2.0;
    }
    let diameter = pa + pb;
    if diameter > edge && diameter > 0.0 {
        *a = pa / diameter * edge;
        *b = pb / diameter * edge;
    }
}
