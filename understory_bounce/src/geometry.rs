// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface geometry samples and per-axis scroll bounds.
//!
//! The surface itself is owned by the caller. Each sample hands the detector a
//! [`SurfaceGeometry`] snapshot; [`AxisBounds`] turns one axis of that snapshot
//! into the offset range that counts as "in bounds".
//!
//! ```
//! use kurbo::{Insets, Point, Size};
//! use understory_bounce::{Axis, AxisBounds, Direction, Directions, SurfaceGeometry};
//!
//! let geometry = SurfaceGeometry {
//!     content_offset: Point::new(700.0, 0.0),
//!     content_size: Size::new(1000.0, 400.0),
//!     viewport_size: Size::new(320.0, 400.0),
//!     content_inset: Insets::ZERO,
//!     is_settling: true,
//! };
//!
//! let bounds = AxisBounds::of(&geometry, Axis::Horizontal);
//! assert_eq!(bounds.max, 680.0);
//! assert_eq!(
//!     bounds.exceeded(Axis::Horizontal, 700.0, Directions::HORIZONTAL),
//!     Some(Direction::Right)
//! );
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `ceil` / `floor`
use kurbo::{Insets, Point, Size};

use crate::direction::{Axis, Direction, Directions};

/// A snapshot of a scrollable surface, taken when its offset changes.
///
/// Insets use [`kurbo::Insets`] naming: `x0` is left, `y0` is top, `x1` is
/// right and `y1` is bottom.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SurfaceGeometry {
    /// Current scroll position.
    pub content_offset: Point,
    /// Size of the scrollable content.
    pub content_size: Size,
    /// Size of the visible viewport.
    pub viewport_size: Size,
    /// Extra scrollable space around the content.
    pub content_inset: Insets,
    /// `true` while the surface is decelerating under momentum.
    pub is_settling: bool,
}

impl SurfaceGeometry {
    /// Returns the current offset along `axis`.
    #[must_use]
    #[inline]
    pub fn offset(&self, axis: Axis) -> f64 {
        axis.coordinate(self.content_offset)
    }

    /// Returns the bounds of `axis`; see [`AxisBounds::of`].
    #[must_use]
    #[inline]
    pub fn bounds(&self, axis: Axis) -> AxisBounds {
        AxisBounds::of(self, axis)
    }

    /// Returns the watched direction `axis` is scrolled past right now, if any.
    #[must_use]
    pub fn exceeded(&self, axis: Axis, watched: Directions) -> Option<Direction> {
        self.bounds(axis).exceeded(axis, self.offset(axis), watched)
    }

    /// Returns `(content, viewport, leading inset, trailing inset)` along `axis`.
    fn extents(&self, axis: Axis) -> (f64, f64, f64, f64) {
        let inset = self.content_inset;
        match axis {
            Axis::Horizontal => (
                self.content_size.width,
                self.viewport_size.width,
                inset.x0,
                inset.x1,
            ),
            Axis::Vertical => (
                self.content_size.height,
                self.viewport_size.height,
                inset.y0,
                inset.y1,
            ),
        }
    }
}

/// The in-bounds offset range of one axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisBounds {
    /// Smallest in-bounds offset: the negated, rounded-up leading inset.
    pub min: f64,
    /// Largest in-bounds offset.
    ///
    /// Equal to `min` when the content fits inside the viewport, so any
    /// positive excursion past `min` already counts as exceeding the maximum.
    pub max: f64,
}

impl AxisBounds {
    /// Computes the bounds of `axis` for `geometry`.
    ///
    /// - `min = -ceil(leading_inset)`
    /// - `max = min` when `content <= viewport`, otherwise
    ///   `floor(content - viewport + trailing_inset)`.
    #[must_use]
    pub fn of(geometry: &SurfaceGeometry, axis: Axis) -> Self {
        let (content, viewport, leading, trailing) = geometry.extents(axis);
        let min = -leading.ceil();
        let max = if content <= viewport {
            min
        } else {
            (content - viewport + trailing).floor()
        };
        Self { min, max }
    }

    /// Classifies `offset` against these bounds.
    ///
    /// Only directions present in `watched` are reported. The leading
    /// direction wins if both bounds are somehow exceeded at once.
    #[must_use]
    pub fn exceeded(&self, axis: Axis, offset: f64, watched: Directions) -> Option<Direction> {
        let leading = axis.leading();
        let trailing = axis.trailing();
        if offset < self.min && watched.watches(leading) {
            Some(leading)
        } else if offset > self.max && watched.watches(trailing) {
            Some(trailing)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(content: Size, viewport: Size, inset: Insets) -> SurfaceGeometry {
        SurfaceGeometry {
            content_size: content,
            viewport_size: viewport,
            content_inset: inset,
            is_settling: true,
            ..SurfaceGeometry::default()
        }
    }

    #[test]
    fn fitting_content_collapses_max_onto_min() {
        let g = geometry(
            Size::new(320.0, 100.0),
            Size::new(320.0, 480.0),
            Insets::ZERO,
        );
        for axis in Axis::ALL {
            let b = g.bounds(axis);
            assert_eq!(b.min, b.max);
            assert_eq!(b.min, 0.0);
        }
    }

    #[test]
    fn overflowing_content_uses_trailing_inset() {
        // Left 0, top 10, right 20, bottom 30.
        let g = geometry(
            Size::new(1000.0, 2000.0),
            Size::new(320.0, 480.0),
            Insets::new(0.0, 10.0, 20.0, 30.0),
        );
        assert_eq!(
            g.bounds(Axis::Horizontal),
            AxisBounds {
                min: 0.0,
                max: 700.0
            }
        );
        assert_eq!(
            g.bounds(Axis::Vertical),
            AxisBounds {
                min: -10.0,
                max: 1550.0
            }
        );
    }

    #[test]
    fn fractional_insets_round_outward() {
        let g = geometry(
            Size::new(1000.5, 100.0),
            Size::new(320.0, 100.0),
            Insets::new(2.25, 0.0, 0.0, 0.0),
        );
        let b = g.bounds(Axis::Horizontal);
        assert_eq!(b.min, -3.0);
        assert_eq!(b.max, 680.0);
    }

    #[test]
    fn exceeded_respects_watch_list() {
        let b = AxisBounds {
            min: 0.0,
            max: 100.0,
        };
        assert_eq!(
            b.exceeded(Axis::Vertical, -1.0, Directions::VERTICAL),
            Some(Direction::Top)
        );
        assert_eq!(
            b.exceeded(Axis::Vertical, 101.0, Directions::VERTICAL),
            Some(Direction::Bottom)
        );
        assert_eq!(b.exceeded(Axis::Vertical, -1.0, Directions::BOTTOM), None);
        assert_eq!(b.exceeded(Axis::Vertical, 101.0, Directions::TOP), None);
        assert_eq!(b.exceeded(Axis::Vertical, 50.0, Directions::ALL), None);
    }

    #[test]
    fn bounds_are_inclusive() {
        let b = AxisBounds {
            min: 0.0,
            max: 100.0,
        };
        assert_eq!(b.exceeded(Axis::Horizontal, 0.0, Directions::ALL), None);
        assert_eq!(b.exceeded(Axis::Horizontal, 100.0, Directions::ALL), None);
    }

    #[test]
    fn leading_wins_when_both_are_exceeded() {
        // Inverted bounds can only come from malformed geometry; the result is
        // still well defined.
        let b = AxisBounds {
            min: 10.0,
            max: -10.0,
        };
        assert_eq!(
            b.exceeded(Axis::Horizontal, 0.0, Directions::HORIZONTAL),
            Some(Direction::Left)
        );
    }
}
