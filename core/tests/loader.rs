// Copyright (c) 2025-2026 The Taplock Developers

//! Timed-hold sub-machine and timed presentation helper tests

use taplock_core::event::Event;
use taplock_core::ui::{helpers as ui_helpers, Loader};

mod helpers;
use helpers::*;

#[test]
fn stop_reports_whether_the_hold_was_sustained() {
    let mut loader = Loader::new(1000);

    loader.start(100);
    assert!(loader.is_active());
    assert!(!loader.stop(600));

    loader.start(1000);
    assert!(loader.stop(2000));
    assert!(!loader.is_active());
}

#[test]
fn stop_without_start_is_never_sustained() {
    let mut loader = Loader::new(0);

    // Even a zero target needs an active hold
    assert!(!loader.stop(5000));
}

#[test]
fn progress_clamps_to_target_and_zeroes_when_inactive() {
    let mut loader = Loader::new(1000);

    assert_eq!(loader.progress(400), 0);

    loader.start(0);
    assert_eq!(loader.progress(400), 400);
    assert_eq!(loader.progress(2500), 1000);

    loader.stop(2500);
    assert_eq!(loader.progress(2600), 0);
}

#[test]
fn elapsed_survives_tick_counter_wraparound() {
    let mut loader = Loader::new(1000);

    loader.start(u32::MAX - 200);
    assert_eq!(loader.progress(300), 501);
    assert!(loader.stop(800));
}

#[test]
fn render_paces_with_the_driver_clock() {
    let mut drv = TestDriver::new(40);
    let mut loader = Loader::new(1000);

    loader.start(0);
    drv.now = 500;
    loader.render(&mut drv);

    // One content-region clear per frame
    assert_eq!(drv.display.bars, 1);
}

#[test]
fn wait_consumes_events_until_elapsed() {
    let mut drv =
        TestDriver::new(41).with_script(&[(30, Event::Ticker), (30, Event::Ticker)]);

    ui_helpers::wait_ms(&mut drv, 50);

    assert_eq!(drv.remaining(), 0);
    assert_eq!(drv.now, 60);
}

#[test]
fn alert_restores_the_backlight() {
    let mut drv = TestDriver::new(42).with_script(&[
        (30, Event::Ticker),
        (50, Event::Ticker),
        (50, Event::Ticker),
    ]);
    drv.display.backlight_level = 42;

    ui_helpers::alert(&mut drv, 1);

    assert_eq!(drv.display.backlight_level, 42);
    assert_eq!(drv.remaining(), 0);
}
