// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-sample bounce classification.
//!
//! ## Usage
//!
//! 1) Create a [`BounceDetector`] with the listener that should receive
//!    notifications.
//! 2) Register each scrollable surface with [`BounceDetector::start_observing`].
//! 3) Whenever a registered surface's offset changes, call
//!    [`BounceDetector::on_offset_changed`] with the previous offset and the new
//!    geometry.
//! 4) Call [`BounceDetector::stop_observing`] before the surface goes away.
//!
//! ## Episodes
//!
//! Each watched axis runs a small state machine. While the surface is
//! settling, the first sample past a watched bound begins an episode and
//! reports [`did_begin_bouncing`](crate::BounceListener::did_begin_bouncing).
//! A later sample that moves back toward the content while still past the
//! bound reports [`did_reverse_bouncing`](crate::BounceListener::did_reverse_bouncing),
//! once. Only a sample that is not settling ends the episode; in-bounds
//! samples during the same settle leave it open.

use core::fmt::Debug;
use core::hash::Hash;

use kurbo::Point;

use crate::direction::{Axis, Directions};
use crate::geometry::SurfaceGeometry;
use crate::listener::BounceListener;
use crate::registry::{BounceRegistry, BouncingDirections, WatchedAxisState};

/// Detects overscroll on registered surfaces and notifies a single listener.
///
/// ```rust
/// use kurbo::{Insets, Point, Size};
/// use understory_bounce::{BounceDetector, BounceEvent, Direction, Directions, SurfaceGeometry};
///
/// let mut detector = BounceDetector::new(Vec::<BounceEvent<u32>>::new());
/// detector.start_observing(1, Directions::HORIZONTAL);
///
/// let mut geometry = SurfaceGeometry {
///     content_offset: Point::new(690.0, 0.0),
///     content_size: Size::new(1000.0, 480.0),
///     viewport_size: Size::new(320.0, 480.0),
///     content_inset: Insets::ZERO,
///     is_settling: true,
/// };
/// detector.on_offset_changed(1, Point::new(670.0, 0.0), &geometry);
///
/// geometry.content_offset.x = 685.0;
/// detector.on_offset_changed(1, Point::new(690.0, 0.0), &geometry);
///
/// assert_eq!(
///     detector.listener().as_slice(),
///     &[
///         BounceEvent::Began { surface: 1, direction: Direction::Right },
///         BounceEvent::Reversed { surface: 1, direction: Direction::Right },
///     ]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct BounceDetector<K, L = ()> {
    registry: BounceRegistry<K>,
    listener: L,
}

impl<K, L: Default> Default for BounceDetector<K, L> {
    fn default() -> Self {
        Self {
            registry: BounceRegistry::default(),
            listener: L::default(),
        }
    }
}

impl<K, L> BounceDetector<K, L>
where
    K: Copy + Eq + Hash + Debug,
    L: BounceListener<K>,
{
    /// Creates a detector with no observed surfaces.
    #[must_use]
    pub fn new(listener: L) -> Self {
        Self {
            registry: BounceRegistry::new(),
            listener,
        }
    }

    /// Processes one offset change of `surface`.
    ///
    /// `previous_offset` is the offset before this change; `geometry` is the
    /// surface as it is now. Samples for unobserved surfaces are ignored.
    pub fn on_offset_changed(
        &mut self,
        surface: K,
        previous_offset: Point,
        geometry: &SurfaceGeometry,
    ) {
        let Some(state) = self.registry.get_mut(surface) else {
            log::trace!("ignoring sample for unobserved surface {surface:?}");
            return;
        };
        state.set_last_geometry(*geometry);

        if !geometry.is_settling {
            if state.reset() {
                log::trace!("surface {surface:?} stopped settling; bounce state reset");
            }
            return;
        }

        let watched = state.watched();
        for axis in Axis::ALL {
            if watched.watches_axis(axis) {
                classify_axis(
                    surface,
                    axis,
                    watched,
                    state.axis_mut(axis),
                    previous_offset,
                    geometry,
                    &mut self.listener,
                );
            }
        }
    }

    /// See [`BounceRegistry::start_observing`].
    pub fn start_observing(&mut self, surface: K, directions: impl Into<Directions>) {
        self.registry.start_observing(surface, directions);
    }

    /// See [`BounceRegistry::stop_observing`].
    pub fn stop_observing(&mut self, surface: K) {
        self.registry.stop_observing(surface);
    }

    /// See [`BounceRegistry::clear_all`].
    pub fn clear_all(&mut self) {
        self.registry.clear_all();
    }

    /// See [`BounceRegistry::current_bouncing_directions`].
    #[must_use]
    pub fn current_bouncing_directions(&self, surface: K) -> BouncingDirections {
        self.registry.current_bouncing_directions(surface)
    }

    /// Returns the registry of observed surfaces.
    #[must_use]
    pub fn registry(&self) -> &BounceRegistry<K> {
        &self.registry
    }

    /// Returns the listener.
    #[must_use]
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Returns the listener, mutably.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Consumes the detector and returns its listener.
    #[must_use]
    pub fn into_listener(self) -> L {
        self.listener
    }
}

/// Runs one axis of a settling sample through the episode state machine.
fn classify_axis<K, L>(
    surface: K,
    axis: Axis,
    watched: Directions,
    state: &mut WatchedAxisState,
    previous_offset: Point,
    geometry: &SurfaceGeometry,
    listener: &mut L,
) where
    K: Copy + Debug,
    L: BounceListener<K>,
{
    let current = geometry.offset(axis);
    let Some(direction) = geometry.bounds(axis).exceeded(axis, current, watched) else {
        return;
    };

    let Some(began) = state.direction() else {
        state.begin(direction);
        log::debug!("surface {surface:?} began bouncing {direction:?} at {current}");
        listener.did_begin_bouncing(surface, direction);
        return;
    };
    if state.is_reversed() {
        return;
    }

    // "Back toward the content" is judged against the bound the episode
    // began past, and the reversal reports that same direction.
    let previous = axis.coordinate(previous_offset);
    let pulled_back = if began.is_leading() {
        current > previous
    } else {
        current < previous
    };
    if pulled_back {
        state.mark_reversed();
        log::debug!("surface {surface:?} reversed while bouncing {began:?} at {current}");
        listener.did_reverse_bouncing(surface, began);
    }
}
