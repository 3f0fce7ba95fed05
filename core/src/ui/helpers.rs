// Copyright (c) 2025-2026 The Taplock Developers

//! Blocking presentation helpers built on the event-loop suspension points.

use crate::display::{Color, Display, Font, Icon, SCREEN};
use crate::platform::Driver;

use super::theme;

/// Draw the standard title bar
pub fn header<D: Display>(
    display: &mut D,
    title: &str,
    icon: Option<Icon>,
    fg: Color,
    bg: Color,
) {
    display.bar(0, 0, SCREEN, 32, bg);
    if let Some(i) = icon {
        display.icon(8, 4, i, fg, bg);
    }
    display.text(34, 24, title, Font::Bold, fg, bg);
}

/// Consume events until `ms` milliseconds have elapsed.
///
/// Touch events arriving during the wait are discarded; this is a timer
/// suspension racing the input source, not an input consumer.
pub fn wait_ms<D: Driver>(drv: &mut D, ms: u32) {
    let start = drv.ticks_ms();
    while drv.ticks_ms().wrapping_sub(start) < ms {
        let _ = drv.wait_event();
    }
}

/// Flash the backlight to draw the user's attention.
///
/// Restores the previous backlight level afterwards.
pub fn alert<D: Driver>(drv: &mut D, count: usize) {
    const SHORT_MS: u32 = 20;
    const LONG_MS: u32 = 80;

    let initial = drv.display().backlight();

    for i in 0..count * 2 {
        match i % 2 == 0 {
            true => {
                drv.display().set_backlight(theme::BACKLIGHT_MAX);
                wait_ms(drv, SHORT_MS);
            }
            false => {
                drv.display().set_backlight(theme::BACKLIGHT_NORMAL);
                wait_ms(drv, LONG_MS);
            }
        }
    }

    drv.display().set_backlight(initial);
}

/// Slide the backlight towards `target`, one level per `step_ms`
pub fn backlight_slide<D: Driver>(drv: &mut D, target: u8, step_ms: u32) {
    let mut current = drv.display().backlight();

    while current != target {
        current = match current > target {
            true => current - 1,
            false => current + 1,
        };
        drv.display().set_backlight(current);
        wait_ms(drv, step_ms);
    }
}
