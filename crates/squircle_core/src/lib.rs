//! Squircle Outline Generator
//!
//! Builds closed vector outlines for rectangles whose corners are rounded
//! with smoothed, curvature-continuous transitions (superellipse-like
//! "squircle" corners):
//!
//! - **Radius Normalization**: Over-large radii are scaled to fit the box
//! - **Corner Geometry**: Arc and cubic-leg parameters per corner
//! - **Transition Adjustment**: Crowded edges redistribute control lengths
//! - **Path Construction**: Arcs and cubics joined into one closed path
//! - **Outline Cache**: Bounded LRU memoization of finished outlines
//!
//! # Example
//!
//! ```rust
//! use squircle_core::{CornerSmoothing, Outline, Size, Squircle};
//!
//! let shape = Squircle::new(32.0, CornerSmoothing::PRETTY);
//! let outline = shape.outline(Size::new(150.0, 150.0));
//!
//! if let Outline::Generic(path) = &outline {
//!     assert!(path.is_closed());
//!     println!("{}", path.to_svg_path_data());
//! }
//! ```

pub mod builder;
pub mod cache;
pub mod corner;
pub mod edge;
pub mod error;
pub mod geometry;
pub mod normalize;
pub mod outline;
pub mod path;
pub mod smoothing;
pub mod transition;

pub use builder::{build_path, PathBuilder};
pub use cache::{CacheKey, CacheStats, OutlineCache, DEFAULT_CAPACITY};
pub use corner::{CornerParams, CornerSet};
pub use edge::{EdgeMergeFlags, EdgeSpaces};
pub use error::{Result, SquircleError};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use normalize::{normalize_radii, NormalizedRadii};
pub use outline::{build_outline, inspect, Outline, RoundedRect, Squircle, SquircleGeometry};
pub use path::{Path, PathCommand};
pub use smoothing::CornerSmoothing;
pub use transition::{adjust_edge, adjust_transitions, Axis, SEMICIRCLE_BIAS};
