//! Per-edge bookkeeping: straight space left on each edge and merge flags

use crate::geometry::Size;
use crate::normalize::NormalizedRadii;

/// Straight run left on each edge after subtracting both of its corner radii
///
/// After normalization these are never meaningfully negative; a value at or
/// below zero means the two corners meet on that edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeSpaces {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl EdgeSpaces {
    pub fn new(size: Size, radii: NormalizedRadii) -> Self {
        let r = radii.get();
        Self {
            top: size.width - r.top_left - r.top_right,
            right: size.height - r.top_right - r.bottom_right,
            bottom: size.width - r.bottom_left - r.bottom_right,
            left: size.height - r.top_left - r.bottom_left,
        }
    }

    pub fn merge_flags(&self) -> EdgeMergeFlags {
        EdgeMergeFlags {
            top: self.top <= 0.0,
            right: self.right <= 0.0,
            bottom: self.bottom <= 0.0,
            left: self.left <= 0.0,
        }
    }
}

/// Edges whose two corner curves abut with no straight segment between them
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeMergeFlags {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl EdgeMergeFlags {
    pub const NONE: EdgeMergeFlags = EdgeMergeFlags {
        top: false,
        right: false,
        bottom: false,
        left: false,
    };

    pub const ALL: EdgeMergeFlags = EdgeMergeFlags {
        top: true,
        right: true,
        bottom: true,
        left: true,
    };

    pub fn count(&self) -> usize {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .filter(|merged| **merged)
            .count()
    }
}
