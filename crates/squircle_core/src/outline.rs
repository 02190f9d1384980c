//! Squircle shape and outline generation
//!
//! The pipeline runs in a fixed order: cache lookup, fast paths, radius
//! normalization, per-corner geometry, per-edge transition adjustment and
//! finally path construction.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::builder::build_path;
use crate::cache::{CacheKey, OutlineCache};
use crate::corner::{CornerParams, CornerSet};
use crate::edge::{EdgeMergeFlags, EdgeSpaces};
use crate::error::Result;
use crate::geometry::{CornerRadius, Rect, Size};
use crate::normalize::{normalize_radii, NormalizedRadii};
use crate::path::Path;
use crate::smoothing::CornerSmoothing;
use crate::transition::adjust_transitions;

/// A rounded rectangle with circular corners (Rect + CornerRadius)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RoundedRect {
    pub rect: Rect,
    pub corner_radius: CornerRadius,
}

impl RoundedRect {
    pub fn new(rect: Rect, corner_radius: CornerRadius) -> Self {
        Self {
            rect,
            corner_radius,
        }
    }
}

/// The shape a renderer should fill or clip against
///
/// The first two variants let a renderer use a cheaper primitive when no
/// custom curve is needed.
#[derive(Clone, Debug, PartialEq)]
pub enum Outline {
    Rectangle(Rect),
    Rounded(RoundedRect),
    /// Shared so cached outlines can be handed out without copying
    Generic(Arc<Path>),
}

impl Outline {
    /// Express any outline as a path
    pub fn to_path(&self) -> Path {
        match self {
            Outline::Rectangle(rect) => Path::rect(*rect),
            Outline::Rounded(rounded) => Path::rounded_rect(rounded.rect, rounded.corner_radius),
            Outline::Generic(path) => path.as_ref().clone(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Outline::Rectangle(rect) => *rect,
            Outline::Rounded(rounded) => rounded.rect,
            Outline::Generic(path) => path.bounds(),
        }
    }

    /// The shared path of a generic outline
    pub fn as_generic(&self) -> Option<&Arc<Path>> {
        match self {
            Outline::Generic(path) => Some(path),
            _ => None,
        }
    }
}

/// A rectangle whose corners are rounded with smoothed transitions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Squircle {
    pub radii: CornerRadius,
    pub smoothing: CornerSmoothing,
}

impl Squircle {
    /// Radius 8 with the default smoothing
    pub const DEFAULT: Squircle = Squircle {
        radii: CornerRadius::uniform(8.0),
        smoothing: CornerSmoothing::DEFAULT,
    };

    // Smoothing presets with square corners, to be given radii by the caller
    pub const MAX: Squircle = Squircle::preset(CornerSmoothing::MAX);
    pub const PRETTY: Squircle = Squircle::preset(CornerSmoothing::PRETTY);
    pub const IOS: Squircle = Squircle::preset(CornerSmoothing::IOS);

    const fn preset(smoothing: CornerSmoothing) -> Self {
        Self {
            radii: CornerRadius::ZERO,
            smoothing,
        }
    }

    /// Same radius on every corner
    pub fn new(radius: f64, smoothing: CornerSmoothing) -> Self {
        Self::with_radii(CornerRadius::uniform(radius), smoothing)
    }

    pub fn with_radii(radii: CornerRadius, smoothing: CornerSmoothing) -> Self {
        Self { radii, smoothing }
    }

    /// Validate a raw smoothing value and build the shape
    pub fn try_new(radii: impl Into<CornerRadius>, smoothing: f64) -> Result<Self> {
        Ok(Self::with_radii(radii.into(), CornerSmoothing::new(smoothing)?))
    }

    /// Outline for a box of `size`, memoized in the process-wide cache
    pub fn outline(&self, size: Size) -> Outline {
        self.outline_with(size, OutlineCache::shared())
    }

    /// Outline for a box of `size`, memoized in `cache`
    pub fn outline_with(&self, size: Size, cache: &OutlineCache) -> Outline {
        let key = CacheKey::new(size, self.radii, self.smoothing);
        cache.get_or_build(key, || self.outline_uncached(size))
    }

    /// Outline for a box of `size`, always recomputed
    pub fn outline_uncached(&self, size: Size) -> Outline {
        build_outline(size, self.radii, self.smoothing)
    }
}

impl Default for Squircle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Run the full pipeline for one request without caching.
///
/// Negative or non-finite radii count as zero. A degenerate box or all-zero radii
/// give [`Outline::Rectangle`]; zero smoothing gives [`Outline::Rounded`].
pub fn build_outline(size: Size, radii: CornerRadius, smoothing: CornerSmoothing) -> Outline {
    let radii = radii.non_negative();

    if radii.is_zero() || size.is_degenerate() {
        trace!(?size, "rectangle fast path");
        return Outline::Rectangle(Rect::new(0.0, 0.0, size.width.max(0.0), size.height.max(0.0)));
    }

    let normalized = normalize_radii(radii, size);

    if smoothing.is_none() {
        trace!(?size, "rounded rectangle fast path");
        return Outline::Rounded(RoundedRect::new(size.to_rect(), normalized.get()));
    }

    let geometry = SquircleGeometry::compute(size, normalized, smoothing);
    debug!(
        width = size.width,
        height = size.height,
        smoothing = smoothing.value(),
        merged_edges = geometry.merged.count(),
        "built squircle outline"
    );
    Outline::Generic(Arc::new(geometry.to_path()))
}

/// Everything the builder consumes for one outline, exposed for inspection
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SquircleGeometry {
    pub size: Size,
    pub smoothing: CornerSmoothing,
    pub radii: NormalizedRadii,
    pub spaces: EdgeSpaces,
    pub merged: EdgeMergeFlags,
    /// Corner parameters after transition adjustment
    pub corners: CornerSet,
}

impl SquircleGeometry {
    pub fn compute(size: Size, radii: NormalizedRadii, smoothing: CornerSmoothing) -> Self {
        let spaces = EdgeSpaces::new(size, radii);
        let initial = corner_set(radii.get(), smoothing, spaces);
        let corners = adjust_transitions(initial, size, spaces);

        Self {
            size,
            smoothing,
            radii,
            spaces,
            merged: spaces.merge_flags(),
            corners,
        }
    }

    pub fn to_path(&self) -> Path {
        build_path(self.size, &self.corners, self.merged)
    }
}

/// Geometry for arbitrary raw inputs, skipping the fast paths.
///
/// Radii are sanitized and normalized exactly as in [`build_outline`].
pub fn inspect(size: Size, radii: CornerRadius, smoothing: CornerSmoothing) -> SquircleGeometry {
    let normalized = normalize_radii(radii.non_negative(), size);
    SquircleGeometry::compute(size, normalized, smoothing)
}

fn corner_set(r: CornerRadius, smoothing: CornerSmoothing, spaces: EdgeSpaces) -> CornerSet {
    let half = |space: f64| space / 2.0;

    // Equal radii leave every edge with the same half-space per axis
    if r.is_uniform() {
        return CornerSet::uniform(CornerParams::compute(
            r.top_left,
            smoothing,
            half(spaces.left),
            half(spaces.top),
        ));
    }

    CornerSet {
        top_left: CornerParams::compute(r.top_left, smoothing, half(spaces.left), half(spaces.top)),
        top_right: CornerParams::compute(
            r.top_right,
            smoothing,
            half(spaces.right),
            half(spaces.top),
        ),
        bottom_right: CornerParams::compute(
            r.bottom_right,
            smoothing,
            half(spaces.right),
            half(spaces.bottom),
        ),
        bottom_left: CornerParams::compute(
            r.bottom_left,
            smoothing,
            half(spaces.left),
            half(spaces.bottom),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::path::{point_on_arc, PathCommand};

    const EPS: f64 = 1e-6;

    fn smoothing(v: f64) -> CornerSmoothing {
        CornerSmoothing::new(v).unwrap()
    }

    fn generic(outline: &Outline) -> &Path {
        match outline {
            Outline::Generic(path) => path,
            other => panic!("expected generic outline, got {other:?}"),
        }
    }

    fn arcs(path: &Path) -> Vec<(Rect, f64, f64)> {
        path.commands()
            .iter()
            .filter_map(|c| match c {
                PathCommand::ArcTo {
                    bounds,
                    start_angle,
                    sweep_angle,
                } => Some((*bounds, *start_angle, *sweep_angle)),
                _ => None,
            })
            .collect()
    }

    fn count(path: &Path, pred: impl Fn(&PathCommand) -> bool) -> usize {
        path.commands().iter().filter(|c| pred(c)).count()
    }

    /// Polyline through the outline with every curve sampled
    fn flatten(path: &Path) -> Vec<Point> {
        const STEPS: usize = 16;
        let positions = path.pen_positions();
        let mut points = Vec::new();

        for (i, cmd) in path.commands().iter().enumerate() {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => points.push(*p),
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    let p0 = positions[i - 1];
                    for step in 1..=STEPS {
                        let t = step as f64 / STEPS as f64;
                        let u = 1.0 - t;
                        let (b0, b1) = (u * u * u, 3.0 * u * u * t);
                        let (b2, b3) = (3.0 * u * t * t, t * t * t);
                        points.push(Point::new(
                            b0 * p0.x + b1 * control1.x + b2 * control2.x + b3 * end.x,
                            b0 * p0.y + b1 * control1.y + b2 * control2.y + b3 * end.y,
                        ));
                    }
                }
                PathCommand::ArcTo {
                    bounds,
                    start_angle,
                    sweep_angle,
                } => {
                    for step in 0..=STEPS {
                        let angle = start_angle + sweep_angle * step as f64 / STEPS as f64;
                        points.push(point_on_arc(*bounds, angle));
                    }
                }
                PathCommand::Close => points.push(positions[i]),
            }
        }
        points
    }

    /// Pairs of non-adjacent polyline segments that properly cross
    fn self_crossings(path: &Path) -> usize {
        let points = flatten(path);
        let segments: Vec<(Point, Point)> = points.windows(2).map(|w| (w[0], w[1])).collect();

        let orient = |p: Point, q: Point, r: Point| {
            (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x)
        };
        // Touching or collinear segments are not crossings
        let opposite = |a: f64, b: f64| (a > 1e-9 && b < -1e-9) || (a < -1e-9 && b > 1e-9);

        let n = segments.len();
        let mut crossings = 0;
        for i in 0..n {
            for j in i + 2..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                let (a0, a1) = segments[i];
                let (b0, b1) = segments[j];
                if opposite(orient(a0, a1, b0), orient(a0, a1, b1))
                    && opposite(orient(b0, b1, a0), orient(b0, b1, a1))
                {
                    crossings += 1;
                }
            }
        }
        crossings
    }

    #[test]
    fn test_crossing_check_detects_bow_tie() {
        let bow_tie = Path::new()
            .move_to(0.0, 0.0)
            .line_to(10.0, 10.0)
            .line_to(10.0, 0.0)
            .line_to(0.0, 10.0)
            .close();
        assert_eq!(self_crossings(&bow_tie), 1);
        assert_eq!(self_crossings(&Path::rect(Rect::new(0.0, 0.0, 10.0, 10.0))), 0);
    }

    #[test]
    fn test_outline_never_crosses_itself() {
        let sizes = [
            Size::new(150.0, 150.0),
            Size::new(300.0, 40.0),
            Size::new(40.0, 300.0),
            Size::new(100.0, 100.0),
            Size::new(1.0, 1.0),
        ];
        let radii = [
            CornerRadius::uniform(32.0),
            CornerRadius::uniform(60.0),
            CornerRadius::new(0.0, 50.0, 5.0, 120.0),
            CornerRadius::new(80.0, 10.0, 80.0, 10.0),
            CornerRadius::new(80.0, 1.0, 80.0, 1.0),
            CornerRadius::new(10.0, 0.0, 0.0, 0.0),
        ];

        for size in sizes {
            for r in radii {
                for s in [0.1, 0.5, 0.8, 1.0] {
                    let outline = build_outline(size, r, smoothing(s));
                    assert_eq!(
                        self_crossings(generic(&outline)),
                        0,
                        "{size:?} {r:?} {s}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_concrete_scenario() {
        let size = Size::new(150.0, 150.0);
        let outline = build_outline(size, CornerRadius::uniform(32.0), smoothing(0.8));
        let path = generic(&outline);

        let arcs = arcs(path);
        assert_eq!(arcs.len(), 4);
        for (_, _, sweep) in &arcs {
            assert!((sweep - 18.0).abs() < EPS, "sweep {sweep}");
        }

        let b = path.bounds();
        assert!(b.x().abs() < EPS && b.y().abs() < EPS);
        assert!((b.width() - 150.0).abs() < EPS);
        assert!((b.height() - 150.0).abs() < EPS);
    }

    #[test]
    fn test_path_structure_for_many_inputs() {
        let sizes = [
            Size::new(150.0, 150.0),
            Size::new(300.0, 40.0),
            Size::new(40.0, 300.0),
            Size::new(100.0, 100.0),
            Size::new(1.0, 1.0),
        ];
        let radii = [
            CornerRadius::uniform(32.0),
            CornerRadius::uniform(60.0),
            CornerRadius::new(0.0, 50.0, 5.0, 120.0),
            CornerRadius::new(80.0, 1.0, 80.0, 1.0),
            CornerRadius::new(10.0, 0.0, 0.0, 0.0),
        ];
        let smoothings = [0.1, 0.5, 0.8, 1.0];

        for size in sizes {
            for r in radii {
                for s in smoothings {
                    let outline = build_outline(size, r, smoothing(s));
                    let path = generic(&outline);

                    assert!(path.is_closed());
                    assert_eq!(path.current_point(), path.start_point());
                    assert_eq!(count(path, |c| matches!(c, PathCommand::ArcTo { .. })), 4);
                    assert!(count(path, |c| matches!(c, PathCommand::LineTo(_))) <= 3);
                    assert!(count(path, |c| matches!(c, PathCommand::CubicTo { .. })) <= 8);

                    // Nothing leaves the box
                    let b = path.bounds();
                    assert!(b.x() >= -EPS && b.y() >= -EPS, "{size:?} {r:?} {s}");
                    assert!(b.right() <= size.width + EPS, "{size:?} {r:?} {s}");
                    assert!(b.bottom() <= size.height + EPS, "{size:?} {r:?} {s}");

                    // The last segment lands back on the top edge
                    let positions = path.pen_positions();
                    let before_close = positions[positions.len() - 2];
                    assert!(before_close.y.abs() < EPS);
                }
            }
        }
    }

    #[test]
    fn test_merge_correctness() {
        let size = Size::new(100.0, 100.0);
        let geometry = inspect(size, CornerRadius::uniform(60.0), smoothing(0.8));
        let r = geometry.radii.get();

        assert_eq!(r.top_left + r.top_right, 100.0);
        assert_eq!(r.top_right + r.bottom_right, 100.0);
        assert_eq!(r.bottom_left + r.bottom_right, 100.0);
        assert_eq!(r.top_left + r.bottom_left, 100.0);
        assert_eq!(geometry.merged, EdgeMergeFlags::ALL);

        let path = geometry.to_path();
        for (_, _, sweep) in arcs(&path) {
            assert!((sweep - 90.0).abs() < EPS);
        }
    }

    #[test]
    fn test_degenerate_boxes_are_rectangles() {
        let r = CornerRadius::uniform(10.0);
        assert_eq!(
            build_outline(Size::new(0.0, 50.0), r, smoothing(0.8)),
            Outline::Rectangle(Rect::new(0.0, 0.0, 0.0, 50.0))
        );
        assert_eq!(
            build_outline(Size::new(50.0, 0.0), r, smoothing(0.8)),
            Outline::Rectangle(Rect::new(0.0, 0.0, 50.0, 0.0))
        );

        let rect = build_outline(Size::new(40.0, 20.0), CornerRadius::ZERO, smoothing(1.0));
        assert_eq!(rect, Outline::Rectangle(Rect::new(0.0, 0.0, 40.0, 20.0)));
        let path = rect.to_path();
        assert_eq!(path.commands().len(), 5);
        assert_eq!(count(&path, |c| matches!(c, PathCommand::LineTo(_))), 3);
    }

    #[test]
    fn test_negative_radii_count_as_zero() {
        let outline = build_outline(
            Size::new(40.0, 20.0),
            CornerRadius::uniform(-5.0),
            smoothing(0.5),
        );
        assert!(matches!(outline, Outline::Rectangle(_)));
    }

    #[test]
    fn test_no_smoothing_is_rounded_rect() {
        let size = Size::new(100.0, 100.0);
        let outline = build_outline(size, CornerRadius::uniform(70.0), CornerSmoothing::NONE);
        assert_eq!(
            outline,
            Outline::Rounded(RoundedRect::new(size.to_rect(), CornerRadius::uniform(50.0)))
        );
        let path = outline.to_path();
        assert_eq!(count(&path, |c| matches!(c, PathCommand::CubicTo { .. })), 0);
        assert_eq!(count(&path, |c| matches!(c, PathCommand::ArcTo { .. })), 4);
    }

    #[test]
    fn test_no_smoothing_fast_path_matches_general_path() {
        let size = Size::new(120.0, 90.0);
        let radii = CornerRadius::new(10.0, 25.0, 40.0, 5.0);

        let fast = build_outline(size, radii, CornerSmoothing::NONE).to_path();
        let general = inspect(size, radii, CornerSmoothing::NONE).to_path();

        let fast_arcs = arcs(&fast);
        let general_arcs = arcs(&general);
        assert_eq!(fast_arcs.len(), general_arcs.len());
        for ((fb, fs, fw), (gb, gs, gw)) in fast_arcs.iter().zip(&general_arcs) {
            assert_eq!(fb, gb);
            assert!((fs - gs).abs() < EPS);
            assert!((fw - gw).abs() < EPS);
        }

        // Cubic legs in the general path collapse to nothing
        let positions = general.pen_positions();
        for (i, cmd) in general.commands().iter().enumerate() {
            if let PathCommand::CubicTo { end, .. } = cmd {
                assert!(end.distance(positions[i - 1]) < EPS);
            }
        }
        let fb = fast.bounds();
        let gb = general.bounds();
        assert!((fb.width() - gb.width()).abs() < EPS);
        assert!((fb.height() - gb.height()).abs() < EPS);
    }

    #[test]
    fn test_uniform_shortcut_matches_per_corner_computation() {
        let size = Size::new(200.0, 80.0);
        let smoothing = smoothing(0.6);
        let normalized = normalize_radii(CornerRadius::uniform(30.0), size);
        let spaces = EdgeSpaces::new(size, normalized);

        let shortcut = corner_set(normalized.get(), smoothing, spaces);
        let per_corner = CornerSet {
            top_left: CornerParams::compute(30.0, smoothing, spaces.left / 2.0, spaces.top / 2.0),
            top_right: CornerParams::compute(30.0, smoothing, spaces.right / 2.0, spaces.top / 2.0),
            bottom_right: CornerParams::compute(
                30.0,
                smoothing,
                spaces.right / 2.0,
                spaces.bottom / 2.0,
            ),
            bottom_left: CornerParams::compute(
                30.0,
                smoothing,
                spaces.left / 2.0,
                spaces.bottom / 2.0,
            ),
        };
        assert_eq!(shortcut, per_corner);
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let size = Size::new(160.0, 90.0);
        let radii = CornerRadius::new(12.0, 40.0, 8.0, 60.0);
        let a = build_outline(size, radii, smoothing(0.7));
        let b = build_outline(size, radii, smoothing(0.7));
        assert_eq!(a, b);
        // Uncached builds are distinct allocations
        assert!(!Arc::ptr_eq(
            a.as_generic().unwrap(),
            b.as_generic().unwrap()
        ));
    }

    #[test]
    fn test_cached_outline_is_shared() {
        let cache = OutlineCache::default();
        let shape = Squircle::new(24.0, CornerSmoothing::IOS);
        let size = Size::new(100.0, 60.0);

        let first = shape.outline_with(size, &cache);
        let second = shape.outline_with(size, &cache);
        assert!(Arc::ptr_eq(
            first.as_generic().unwrap(),
            second.as_generic().unwrap()
        ));
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_fast_paths_are_cached_too() {
        let cache = OutlineCache::default();
        let shape = Squircle::new(0.0, CornerSmoothing::PRETTY);
        shape.outline_with(Size::new(10.0, 10.0), &cache);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_shared_cache() {
        let shape = Squircle::try_new(CornerRadius::new(3.0, 5.0, 7.0, 9.0), 0.35).unwrap();
        let size = Size::new(73.0, 41.0);
        let first = shape.outline(size);
        let second = shape.outline(size);
        assert!(Arc::ptr_eq(
            first.as_generic().unwrap(),
            second.as_generic().unwrap()
        ));
        assert!(Squircle::try_new(1.0, 1.5).is_err());
    }

    #[test]
    fn test_smoothing_presets() {
        assert_eq!(Squircle::MAX.smoothing, CornerSmoothing::MAX);
        assert_eq!(Squircle::PRETTY.smoothing, CornerSmoothing::PRETTY);
        assert_eq!(Squircle::IOS.smoothing, CornerSmoothing::IOS);
        assert_eq!(Squircle::IOS.radii, CornerRadius::ZERO);

        // Square corners until radii are given
        let size = Size::new(30.0, 20.0);
        assert!(matches!(Squircle::MAX.outline_uncached(size), Outline::Rectangle(_)));

        let shape = Squircle {
            radii: CornerRadius::uniform(6.0),
            ..Squircle::IOS
        };
        assert!(shape.outline_uncached(size).as_generic().is_some());
    }

    #[test]
    fn test_default_shape() {
        let shape = Squircle::default();
        assert_eq!(shape.radii, CornerRadius::uniform(8.0));
        assert_eq!(shape.smoothing, CornerSmoothing::PRETTY);

        let outline = shape.outline_uncached(Size::new(64.0, 64.0));
        let start = outline.to_path().start_point().unwrap();
        assert!(start.distance(Point::new(64.0 - 1.8 * 8.0, 0.0)) < EPS);
    }
}
