// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The set of observed surfaces and their bounce state.
//!
//! [`BounceRegistry`] is keyed by a caller-supplied surface handle `K`. The
//! registry never holds the surface itself; callers must
//! [`stop_observing`](BounceRegistry::stop_observing) a surface before its
//! handle is retired, otherwise the entry lingers until
//! [`clear_all`](BounceRegistry::clear_all).

use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::direction::{Axis, Direction, Directions};
use crate::geometry::SurfaceGeometry;

/// Directions a surface is bouncing in, horizontal before vertical.
pub type BouncingDirections = SmallVec<[Direction; 2]>;

/// Bounce state of one axis of one surface.
///
/// A reversal can only be recorded while bouncing, so `is_reversed()`
/// implies `is_bouncing()`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WatchedAxisState {
    began: Option<Direction>,
    reversed: bool,
}

impl WatchedAxisState {
    /// Returns `true` once a bounce has begun in the current episode.
    #[must_use]
    #[inline]
    pub fn is_bouncing(self) -> bool {
        self.began.is_some()
    }

    /// Returns `true` once a reversal has been reported in the current episode.
    #[must_use]
    #[inline]
    pub fn is_reversed(self) -> bool {
        self.reversed
    }

    /// Returns the bound the current episode began past, if any.
    #[must_use]
    #[inline]
    pub fn direction(self) -> Option<Direction> {
        self.began
    }

    pub(crate) fn begin(&mut self, direction: Direction) {
        self.began = Some(direction);
    }

    pub(crate) fn mark_reversed(&mut self) {
        debug_assert!(self.began.is_some(), "reversal recorded outside a bounce");
        self.reversed = true;
    }

    /// Ends the episode; returns whether one was active.
    pub(crate) fn reset(&mut self) -> bool {
        let was_bouncing = self.is_bouncing();
        *self = Self::default();
        was_bouncing
    }
}

/// Everything the registry tracks for one surface.
#[derive(Clone, Debug)]
pub struct SurfaceState {
    watched: Directions,
    horizontal: WatchedAxisState,
    vertical: WatchedAxisState,
    last_geometry: Option<SurfaceGeometry>,
}

impl SurfaceState {
    fn new(watched: Directions) -> Self {
        Self {
            watched,
            horizontal: WatchedAxisState::default(),
            vertical: WatchedAxisState::default(),
            last_geometry: None,
        }
    }

    /// Directions this surface was registered with.
    #[must_use]
    #[inline]
    pub fn watched(&self) -> Directions {
        self.watched
    }

    /// State of `axis`.
    #[must_use]
    #[inline]
    pub fn axis(&self, axis: Axis) -> WatchedAxisState {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    /// Geometry from the most recent sample, if any has been delivered.
    #[must_use]
    #[inline]
    pub fn last_geometry(&self) -> Option<&SurfaceGeometry> {
        self.last_geometry.as_ref()
    }

    pub(crate) fn axis_mut(&mut self, axis: Axis) -> &mut WatchedAxisState {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }

    pub(crate) fn set_last_geometry(&mut self, geometry: SurfaceGeometry) {
        self.last_geometry = Some(geometry);
    }

    /// Resets both axes; returns whether either was bouncing.
    pub(crate) fn reset(&mut self) -> bool {
        let horizontal = self.horizontal.reset();
        let vertical = self.vertical.reset();
        horizontal || vertical
    }
}

/// Observed surfaces, keyed by handle.
///
/// # Example
///
/// ```rust
/// use understory_bounce::{BounceRegistry, Direction, Directions};
///
/// let mut registry = BounceRegistry::<u32>::new();
/// registry.start_observing(1, Directions::VERTICAL);
/// registry.start_observing(2, Direction::Left);
/// assert_eq!(registry.len(), 2);
///
/// registry.stop_observing(1);
/// registry.stop_observing(1);
/// assert!(!registry.is_observing(1));
/// assert_eq!(registry.watched_directions(2), Some(Directions::LEFT));
/// ```
#[derive(Clone, Debug)]
pub struct BounceRegistry<K> {
    surfaces: HashMap<K, SurfaceState>,
}

impl<K> Default for BounceRegistry<K> {
    fn default() -> Self {
        Self {
            surfaces: HashMap::new(),
        }
    }
}

impl<K> BounceRegistry<K>
where
    K: Copy + Eq + Hash + Debug,
{
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts observing `surface` for bounces in `directions`.
    ///
    /// Re-registering a surface replaces its watch list and starts it from a
    /// non-bouncing state. An empty `directions` set is the same as
    /// [`stop_observing`](Self::stop_observing).
    pub fn start_observing(&mut self, surface: K, directions: impl Into<Directions>) {
        let directions = directions.into();
        if directions.is_empty() {
            log::warn!("surface {surface:?} registered with no directions; not observing it");
            self.surfaces.remove(&surface);
            return;
        }
        self.surfaces.insert(surface, SurfaceState::new(directions));
    }

    /// Stops observing `surface`. Does nothing if it is not observed.
    pub fn stop_observing(&mut self, surface: K) {
        self.surfaces.remove(&surface);
    }

    /// Stops observing every surface.
    pub fn clear_all(&mut self) {
        self.surfaces.clear();
    }

    /// Returns the watched directions `surface` is scrolled past right now.
    ///
    /// An axis contributes only while it is in a bounce episode, and then
    /// only if the most recent sample is actually beyond one of its bounds.
    /// The horizontal direction precedes the vertical one. Untracked surfaces
    /// yield an empty result.
    #[must_use]
    pub fn current_bouncing_directions(&self, surface: K) -> BouncingDirections {
        let mut out = BouncingDirections::new();
        let Some(state) = self.surfaces.get(&surface) else {
            return out;
        };
        let Some(geometry) = state.last_geometry() else {
            return out;
        };
        for axis in Axis::ALL {
            if !state.axis(axis).is_bouncing() {
                continue;
            }
            if let Some(direction) = geometry.exceeded(axis, state.watched) {
                out.push(direction);
            }
        }
        out
    }

    /// Returns `true` if `surface` is observed.
    #[must_use]
    pub fn is_observing(&self, surface: K) -> bool {
        self.surfaces.contains_key(&surface)
    }

    /// Returns the directions `surface` was registered with.
    #[must_use]
    pub fn watched_directions(&self, surface: K) -> Option<Directions> {
        self.surfaces.get(&surface).map(SurfaceState::watched)
    }

    /// Returns the state of one axis of `surface`.
    #[must_use]
    pub fn axis_state(&self, surface: K, axis: Axis) -> Option<WatchedAxisState> {
        self.surfaces.get(&surface).map(|s| s.axis(axis))
    }

    /// Returns everything tracked for `surface`.
    #[must_use]
    pub fn get(&self, surface: K) -> Option<&SurfaceState> {
        self.surfaces.get(&surface)
    }

    /// Returns the number of observed surfaces.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Returns `true` if no surface is observed.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Iterates the observed surfaces in unspecified order.
    pub fn surfaces(&self) -> impl Iterator<Item = K> + '_ {
        self.surfaces.keys().copied()
    }

    pub(crate) fn get_mut(&mut self, surface: K) -> Option<&mut SurfaceState> {
        self.surfaces.get_mut(&surface)
    }
}
