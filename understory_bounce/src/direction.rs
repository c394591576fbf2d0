// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll axes, overscroll directions, and direction sets.

use kurbo::Point;

/// A scroll axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The X axis; bounded by [`Direction::Left`] and [`Direction::Right`].
    Horizontal,
    /// The Y axis; bounded by [`Direction::Top`] and [`Direction::Bottom`].
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Returns the direction of the axis' minimum bound (`Left` or `Top`).
    #[must_use]
    #[inline]
    pub const fn leading(self) -> Direction {
        match self {
            Self::Horizontal => Direction::Left,
            Self::Vertical => Direction::Top,
        }
    }

    /// Returns the direction of the axis' maximum bound (`Right` or `Bottom`).
    #[must_use]
    #[inline]
    pub const fn trailing(self) -> Direction {
        match self {
            Self::Horizontal => Direction::Right,
            Self::Vertical => Direction::Bottom,
        }
    }

    /// Returns the set containing both directions of this axis.
    #[must_use]
    #[inline]
    pub const fn directions(self) -> Directions {
        match self {
            Self::Horizontal => Directions::HORIZONTAL,
            Self::Vertical => Directions::VERTICAL,
        }
    }

    /// Returns the component of `point` that lies along this axis.
    #[must_use]
    #[inline]
    pub fn coordinate(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }
}

/// An edge of the scrollable content that a surface can scroll past.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Scrolled above the top of the content.
    Top,
    /// Scrolled past the left edge of the content.
    Left,
    /// Scrolled below the bottom of the content.
    Bottom,
    /// Scrolled past the right edge of the content.
    Right,
}

impl Direction {
    /// All directions in declaration order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Left, Self::Bottom, Self::Right];

    /// Returns the axis this direction bounds.
    #[must_use]
    #[inline]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// Returns `true` for the minimum-bound directions, `Top` and `Left`.
    #[must_use]
    #[inline]
    pub const fn is_leading(self) -> bool {
        matches!(self, Self::Top | Self::Left)
    }

    /// Returns the direction at the other end of the same axis.
    #[must_use]
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Left => Self::Right,
            Self::Bottom => Self::Top,
            Self::Right => Self::Left,
        }
    }
}

bitflags::bitflags! {
    /// A set of [`Direction`]s, used as a surface's watch list.
    ///
    /// ```
    /// use understory_bounce::{Direction, Directions};
    ///
    /// let watched: Directions = [Direction::Top, Direction::Bottom].into_iter().collect();
    /// assert_eq!(watched, Directions::VERTICAL);
    /// assert!(watched.watches(Direction::Top));
    /// assert!(!watched.watches(Direction::Left));
    /// ```
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Directions: u8 {
        /// [`Direction::Top`].
        const TOP    = 0b0000_0001;
        /// [`Direction::Left`].
        const LEFT   = 0b0000_0010;
        /// [`Direction::Bottom`].
        const BOTTOM = 0b0000_0100;
        /// [`Direction::Right`].
        const RIGHT  = 0b0000_1000;
        /// Both horizontal directions.
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        /// Both vertical directions.
        const VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
        /// Every direction.
        const ALL = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

impl Default for Directions {
    fn default() -> Self {
        Self::empty()
    }
}

impl Directions {
    /// Returns `true` if `direction` is in the set.
    #[must_use]
    #[inline]
    pub fn watches(self, direction: Direction) -> bool {
        self.contains(direction.into())
    }

    /// Returns `true` if either direction of `axis` is in the set.
    #[must_use]
    #[inline]
    pub fn watches_axis(self, axis: Axis) -> bool {
        self.intersects(axis.directions())
    }

    /// Iterates the contained directions in [`Direction::ALL`] order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |direction| self.watches(*direction))
    }
}

impl From<Direction> for Directions {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Top => Self::TOP,
            Direction::Left => Self::LEFT,
            Direction::Bottom => Self::BOTTOM,
            Direction::Right => Self::RIGHT,
        }
    }
}

impl FromIterator<Direction> for Directions {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

impl Extend<Direction> for Directions {
    fn extend<I: IntoIterator<Item = Direction>>(&mut self, iter: I) {
        for direction in iter {
            self.insert(direction.into());
        }
    }
}
