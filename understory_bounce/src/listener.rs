// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounce notifications.
//!
//! A [`BounceDetector`](crate::BounceDetector) owns exactly one
//! [`BounceListener`] and calls it synchronously from
//! [`on_offset_changed`](crate::BounceDetector::on_offset_changed). Both
//! notifications default to no-ops, so a listener only implements what it
//! cares about.
//!
//! Ready-made listeners:
//! - `()` discards everything.
//! - `Vec<BounceEvent<K>>` records events in delivery order.
//! - [`from_fn`] adapts a closure taking a [`BounceEvent`].
//! - `&mut L` and `Box<L>` forward to `L`.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::direction::Direction;

/// Receives bounce notifications for surfaces keyed by `K`.
pub trait BounceListener<K> {
    /// `surface` started scrolling past its `direction` bound.
    fn did_begin_bouncing(&mut self, surface: K, direction: Direction) {
        let _ = (surface, direction);
    }

    /// `surface` reversed toward its content while still past `direction`.
    ///
    /// Fires at most once per bounce episode, and only after
    /// [`did_begin_bouncing`](Self::did_begin_bouncing) for the same axis.
    fn did_reverse_bouncing(&mut self, surface: K, direction: Direction) {
        let _ = (surface, direction);
    }
}

/// A bounce notification as a value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BounceEvent<K> {
    /// See [`BounceListener::did_begin_bouncing`].
    Began {
        /// Surface that started bouncing.
        surface: K,
        /// Bound being exceeded.
        direction: Direction,
    },
    /// See [`BounceListener::did_reverse_bouncing`].
    Reversed {
        /// Surface that pulled back.
        surface: K,
        /// Bound still being exceeded.
        direction: Direction,
    },
}

impl<K: Copy> BounceEvent<K> {
    /// Returns the surface this event is about.
    #[must_use]
    pub fn surface(&self) -> K {
        match *self {
            Self::Began { surface, .. } | Self::Reversed { surface, .. } => surface,
        }
    }

    /// Returns the direction this event is about.
    #[must_use]
    pub fn direction(&self) -> Direction {
        match *self {
            Self::Began { direction, .. } | Self::Reversed { direction, .. } => direction,
        }
    }
}

impl<K> BounceListener<K> for () {}

impl<K> BounceListener<K> for Vec<BounceEvent<K>> {
    fn did_begin_bouncing(&mut self, surface: K, direction: Direction) {
        self.push(BounceEvent::Began { surface, direction });
    }

    fn did_reverse_bouncing(&mut self, surface: K, direction: Direction) {
        self.push(BounceEvent::Reversed { surface, direction });
    }
}

impl<K, L: BounceListener<K> + ?Sized> BounceListener<K> for &mut L {
    fn did_begin_bouncing(&mut self, surface: K, direction: Direction) {
        (**self).did_begin_bouncing(surface, direction);
    }

    fn did_reverse_bouncing(&mut self, surface: K, direction: Direction) {
        (**self).did_reverse_bouncing(surface, direction);
    }
}

impl<K, L: BounceListener<K> + ?Sized> BounceListener<K> for Box<L> {
    fn did_begin_bouncing(&mut self, surface: K, direction: Direction) {
        (**self).did_begin_bouncing(surface, direction);
    }

    fn did_reverse_bouncing(&mut self, surface: K, direction: Direction) {
        (**self).did_reverse_bouncing(surface, direction);
    }
}

/// Listener that forwards every notification to a closure.
///
/// Created by [`from_fn`].
pub struct FnListener<F>(F);

impl<F> fmt::Debug for FnListener<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnListener").finish_non_exhaustive()
    }
}

impl<K, F> BounceListener<K> for FnListener<F>
where
    F: FnMut(BounceEvent<K>),
{
    fn did_begin_bouncing(&mut self, surface: K, direction: Direction) {
        (self.0)(BounceEvent::Began { surface, direction });
    }

    fn did_reverse_bouncing(&mut self, surface: K, direction: Direction) {
        (self.0)(BounceEvent::Reversed { surface, direction });
    }
}

/// Wraps a closure as a [`BounceListener`].
///
/// ```
/// use understory_bounce::{BounceEvent, BounceListener, Direction, from_fn};
///
/// let mut count = 0;
/// let mut listener = from_fn(|_: BounceEvent<u32>| count += 1);
/// listener.did_begin_bouncing(7, Direction::Top);
/// listener.did_reverse_bouncing(7, Direction::Top);
/// drop(listener);
/// assert_eq!(count, 2);
/// ```
pub fn from_fn<K, F>(f: F) -> FnListener<F>
where
    F: FnMut(BounceEvent<K>),
{
    FnListener(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[derive(Default)]
    struct BeginsOnly(u32);

    impl BounceListener<u32> for BeginsOnly {
        fn did_begin_bouncing(&mut self, _surface: u32, _direction: Direction) {
            self.0 += 1;
        }
    }

    #[test]
    fn default_methods_are_no_ops() {
        let mut l = BeginsOnly::default();
        l.did_reverse_bouncing(1, Direction::Left);
        assert_eq!(l.0, 0);
        l.did_begin_bouncing(1, Direction::Left);
        assert_eq!(l.0, 1);

        BounceListener::<u32>::did_begin_bouncing(&mut (), 1, Direction::Top);
    }

    #[test]
    fn vec_records_in_order() {
        let mut events: Vec<BounceEvent<u32>> = Vec::new();
        events.did_begin_bouncing(3_u32, Direction::Bottom);
        events.did_reverse_bouncing(3_u32, Direction::Bottom);
        assert_eq!(
            events,
            vec![
                BounceEvent::Began {
                    surface: 3,
                    direction: Direction::Bottom
                },
                BounceEvent::Reversed {
                    surface: 3,
                    direction: Direction::Bottom
                },
            ]
        );
        assert_eq!(events[1].surface(), 3);
        assert_eq!(events[1].direction(), Direction::Bottom);
    }

    fn notify<L: BounceListener<u32>>(mut listener: L) {
        listener.did_begin_bouncing(1, Direction::Right);
    }

    #[test]
    fn forwarding_through_references_and_boxes() {
        let mut events: Vec<BounceEvent<u32>> = Vec::new();
        notify(&mut events);
        notify(Box::new(&mut events));
        let boxed: Box<dyn BounceListener<u32> + '_> = Box::new(&mut events);
        notify(boxed);
        assert_eq!(events.len(), 3);
    }
}
