// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounce detection basics.
//!
//! Fling two surfaces past their bounds and print the notifications.
//!
//! Run:
//! - `cargo run -p understory_demos --example bounce_basics`
//! - `RUST_LOG=trace cargo run -p understory_demos --example bounce_basics`

use understory_bounce::{BounceDetector, BounceEvent, Direction, Directions, from_fn};
use understory_demos::{init_logging, vertical_fling};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Surface {
    Feed,
    Sidebar,
}

fn main() {
    init_logging();

    let mut detector = BounceDetector::new(from_fn(|event: BounceEvent<Surface>| match event {
        BounceEvent::Began { surface, direction } => {
            println!("{surface:?}: began bouncing {direction:?}");
        }
        BounceEvent::Reversed { surface, direction } => {
            println!("{surface:?}: pulling back from {direction:?}");
        }
    }));

    detector.start_observing(Surface::Feed, Directions::VERTICAL);
    // The sidebar only cares about overscrolling at the top (pull to refresh).
    detector.start_observing(Surface::Sidebar, Direction::Top);

    // Feed: 2000px of content in a 480px viewport; max offset is 1520.
    let offsets = [1480.0, 1510.0, 1535.0, 1545.0, 1530.0, 1520.0];
    for (previous, geometry) in vertical_fling(2000.0, 480.0, &offsets) {
        detector.on_offset_changed(Surface::Feed, previous, &geometry);
        println!(
            "  feed at {:>6.1}: bouncing {:?}",
            geometry.content_offset.y,
            detector.current_bouncing_directions(Surface::Feed).as_slice()
        );
    }

    // Sidebar: fits entirely, so overscrolling the bottom is ignored.
    let offsets = [20.0, 40.0, -15.0, -30.0, -10.0, 0.0];
    for (previous, geometry) in vertical_fling(300.0, 480.0, &offsets) {
        detector.on_offset_changed(Surface::Sidebar, previous, &geometry);
    }

    detector.stop_observing(Surface::Feed);
    detector.stop_observing(Surface::Sidebar);
}
