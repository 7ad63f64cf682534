// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel autoscroll.
//!
//! Run an autoscrolling carousel for a few seconds of synthetic time, hold a
//! drag across one interval to pause it, then disable it.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example carousel_autoscroll`

use std::time::Duration;

use kurbo::Point;
use understory_carousel::{AutoscrollConfig, Binding, Carousel, CarouselConfig};
use understory_demos::describe;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .format_timestamp_millis()
        .init();

    let enabled = Binding::new(true);
    let item = Binding::new(Some("Red"));
    let mut carousel = Carousel::with_item(
        vec!["Red", "Green", "Blue"],
        item.clone(),
        CarouselConfig::default(),
        |item: &&str| format!("<{item}>"),
    )
    .autoscroll(AutoscrollConfig::new(enabled.clone()).with_interval_secs(1.5));
    carousel.set_container_width(400.0);
    carousel.mount(Duration::ZERO);

    // Without a frame loop the host can sleep until the next deadline.
    let mut now = Duration::ZERO;
    while now < Duration::from_secs(4) {
        let Some(deadline) = carousel.next_deadline() else {
            break;
        };
        now = deadline;
        carousel.tick(now);
        println!("{} item={:?}", describe(&carousel, now), item.get());
    }

    // Hold a drag across the next interval: that tick is skipped.
    carousel.drag_began(Point::new(200.0, 0.0), now);
    carousel.tick(now + Duration::from_secs(2));
    println!("{}", describe(&carousel, now + Duration::from_secs(2)));
    carousel.drag_ended(Point::new(210.0, 0.0), now + Duration::from_secs(2));

    // Host turns autoscroll off through the shared binding.
    enabled.set(false);
    carousel.tick(now + Duration::from_secs(3));
    println!(
        "autoscroll: {:?}, pending timers: {}",
        carousel.autoscroll_state(),
        carousel.pending_timers()
    );

    carousel.unmount();
}
