// Copyright (c) 2025-2026 The Taplock Developers

//! Widget layer: explicit state machines polled by a cooperative event loop.
//!
//! A [`Widget`] is iterated as a restartable, stateful, finite sequence:
//! render, suspend until an event arrives, feed the event to [`Widget::update`],
//! terminate when it returns [`UiResult::Exit`]. Exactly one live widget tree
//! receives events at a time, and render / update handlers never block.

use crate::event::Event;
use crate::platform::Driver;

mod button;
pub use button::*;

mod confirm;
pub use confirm::*;

mod loader;
pub use loader::*;

pub mod pin;
pub use pin::{PinDialog, PinMatrix};

mod text;
pub use text::*;

pub mod helpers;

pub mod theme;

/// Result type for widget updates
///
/// Indicates whether a redraw is required or if the widget has terminated,
/// returning a value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum UiResult<R = ()> {
    /// No change
    None,
    /// Widget state changed, redraw required
    Update,
    /// Terminal result, iteration ends
    Exit(R),
}

impl<R> UiResult<R> {
    /// Map on UiResult exit value
    pub fn map_exit<O>(self, mut f: impl FnMut(R) -> O) -> UiResult<O> {
        match self {
            UiResult::None => UiResult::None,
            UiResult::Update => UiResult::Update,
            UiResult::Exit(v) => UiResult::Exit(f(v)),
        }
    }

    /// Check if a UiResult is the `Exit` variant
    pub fn is_exit(&self) -> bool {
        matches!(self, UiResult::Exit(..))
    }
}

/// Base unit participating in the event loop
pub trait Widget {
    /// Terminal result type
    type Output;

    /// Draw the widget in its current state.
    ///
    /// Takes `&mut self` so widgets may regenerate per-render state; the PIN
    /// keypad re-draws its scramble permutation here.
    fn render<D: Driver>(&mut self, drv: &mut D);

    /// Handle an event, updating widget state or exiting with a result
    fn update(&mut self, evt: &Event, now_ms: u32) -> UiResult<Self::Output>;
}

/// Iterate a widget to completion.
///
/// Renders the widget, then suspends in [`Driver::wait_event`] and feeds
/// events to [`Widget::update`] until it exits. This loop owns the widget
/// exclusively for its duration, so no competing input consumer exists.
pub fn run_widget<D: Driver, W: Widget>(drv: &mut D, widget: &mut W) -> W::Output {
    widget.render(drv);

    loop {
        let evt = drv.wait_event();
        let now = drv.ticks_ms();

        #[cfg(feature = "log")]
        log::trace!("event: {:?} at {}ms", evt, now);

        match widget.update(&evt, now) {
            UiResult::None => (),
            UiResult::Update => widget.render(drv),
            UiResult::Exit(v) => return v,
        }
    }
}
