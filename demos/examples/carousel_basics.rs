// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel basics.
//!
//! Drive a headless carousel through a drag commit, a cancelled drag, and a
//! programmatic jump, printing the strip a renderer would draw.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example carousel_basics`

use std::time::Duration;

use kurbo::Point;
use understory_carousel::{Binding, Carousel, CarouselConfig};
use understory_demos::{describe, frames};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let index = Binding::new(2_usize);
    let mut carousel = Carousel::with_index(
        vec!["Apple", "Banana", "Cherry", "Date"],
        index.clone(),
        CarouselConfig::default().with_spacing(10.0),
        |item: &&str| item.to_uppercase(),
    );
    carousel.on_interaction(|active| println!("interacting: {active}"));
    carousel.set_container_width(320.0);
    carousel.report_slot_height(180.0);
    carousel.mount(Duration::ZERO);
    println!("{}", describe(&carousel, Duration::ZERO));

    // Swipe left across half the container.
    let start = Duration::from_millis(100);
    carousel.drag_began(Point::new(260.0, 90.0), start);
    for (step, now) in frames(start, Duration::from_millis(200)).enumerate() {
        let x = 260.0 - 25.0 * step as f64;
        carousel.drag_moved(Point::new(x, 90.0));
        println!("{}", describe(&carousel, now));
    }
    carousel.drag_ended(Point::new(100.0, 90.0), Duration::from_millis(200));
    for now in frames(Duration::from_millis(200), Duration::from_millis(560)) {
        carousel.tick(now);
        println!("{}", describe(&carousel, now));
    }

    // A short drag springs back without changing the selection.
    carousel.drag_began(Point::new(160.0, 90.0), Duration::from_millis(600));
    carousel.drag_moved(Point::new(120.0, 90.0));
    carousel.drag_ended(Point::new(120.0, 90.0), Duration::from_millis(650));
    carousel.tick(Duration::from_millis(1_000));
    println!("{}", describe(&carousel, Duration::from_millis(1_000)));

    // The host writes the binding directly; the carousel animates one step.
    index.set(1);
    for now in frames(Duration::from_millis(1_100), Duration::from_millis(1_450)) {
        carousel.tick(now);
    }
    println!("{}", describe(&carousel, Duration::from_millis(1_450)));
    println!("selected: {:?}", carousel.selected_item());
}
