// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Understory demos.

use kurbo::{Insets, Point, Size};
use understory_bounce::SurfaceGeometry;

/// Installs `env_logger`, defaulting to `debug` when `RUST_LOG` is unset.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
}

/// Scripted vertical fling over a `viewport`-tall view of `content` height.
///
/// Each entry is `(previous_offset, geometry)`. The final sample stops
/// settling, which ends any bounce episode.
pub fn vertical_fling(content: f64, viewport: f64, ys: &[f64]) -> Vec<(Point, SurfaceGeometry)> {
    let mut previous = Point::ZERO;
    let last = ys.len().saturating_sub(1);
    ys.iter()
        .enumerate()
        .map(|(i, &y)| {
            let geometry = SurfaceGeometry {
                content_offset: Point::new(0.0, y),
                content_size: Size::new(320.0, content),
                viewport_size: Size::new(320.0, viewport),
                content_inset: Insets::ZERO,
                is_settling: i != last,
            };
            let sample = (previous, geometry);
            previous = geometry.content_offset;
            sample
        })
        .collect()
}
