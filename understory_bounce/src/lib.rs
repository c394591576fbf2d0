// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_bounce --heading-base-level=0

//! Understory Bounce: headless overscroll detection for scrollable surfaces.
//!
//! Given a stream of content-offset samples from any number of independently
//! scrolling surfaces, this crate decides when a surface has scrolled past a
//! content bound while settling under momentum (it is "bouncing"), and when the
//! motion reverses back toward the content while still past that bound (the
//! rubber-band "pull-back").
//!
//! It does **not** render, animate, or simulate the bounce. Callers are
//! expected to:
//! - Own their scroll surfaces and give each one a stable handle `K`
//!   (an integer, a generational node id, ...).
//! - Detect offset changes and the settling/decelerating hint themselves.
//! - Feed every change of a registered surface into
//!   [`BounceDetector::on_offset_changed`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Insets, Point, Size};
//! use understory_bounce::{BounceDetector, BounceEvent, Direction, Directions, SurfaceGeometry};
//!
//! let mut detector = BounceDetector::new(Vec::<BounceEvent<u32>>::new());
//! detector.start_observing(7, Directions::VERTICAL);
//!
//! // A 480px-tall viewport over 2000px of content, flung past the top.
//! let geometry = SurfaceGeometry {
//!     content_offset: Point::new(0.0, -12.0),
//!     content_size: Size::new(320.0, 2000.0),
//!     viewport_size: Size::new(320.0, 480.0),
//!     content_inset: Insets::ZERO,
//!     is_settling: true,
//! };
//! detector.on_offset_changed(7, Point::new(0.0, 4.0), &geometry);
//!
//! assert_eq!(
//!     detector.listener().as_slice(),
//!     &[BounceEvent::Began { surface: 7, direction: Direction::Top }]
//! );
//! assert_eq!(detector.current_bouncing_directions(7).as_slice(), &[Direction::Top]);
//! ```
//!
//! ## Concepts
//!
//! - [`SurfaceGeometry`]: offset, content and viewport sizes, insets, and the
//!   settling hint for one sample. [`AxisBounds`] derives the in-bounds range
//!   of one axis from it.
//! - [`BounceRegistry`]: the observed surfaces, each with a watch list
//!   ([`Directions`]) and one [`WatchedAxisState`] per axis.
//! - [`BounceDetector`]: owns a registry plus a single [`BounceListener`] and
//!   runs the per-axis state machine for every sample.
//!
//! A bounce *episode* on an axis starts at the first settling sample past a
//! watched bound and only ends when a sample arrives that is not settling.
//! Within an episode, at most one begin and one reversal are reported.
//!
//! ## Threading
//!
//! Everything runs synchronously on the caller's thread; listeners are invoked
//! from inside [`BounceDetector::on_offset_changed`]. There is no internal
//! locking. If samples arrive from several threads, put the detector behind a
//! single mutex.
//!
//! ## Logging
//!
//! Decisions are reported through the [`log`](https://docs.rs/log) facade:
//! begins and reversals at `debug`, resets and ignored samples at `trace`.
//!
//! ## Features
//!
//! - `std` (default): use the standard library's float rounding via Kurbo.
//! - `libm`: use `libm` for float rounding in `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod detector;
mod direction;
mod geometry;
mod listener;
mod registry;

pub use detector::BounceDetector;
pub use direction::{Axis, Direction, Directions};
pub use geometry::{AxisBounds, SurfaceGeometry};
pub use listener::{BounceEvent, BounceListener, FnListener, from_fn};
pub use registry::{BounceRegistry, BouncingDirections, SurfaceState, WatchedAxisState};
