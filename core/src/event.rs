// Copyright (c) 2025-2026 The Taplock Developers

//! Input events delivered to the widget event loop.
//!
//! Positions are already in the device's fixed logical coordinate space;
//! orientation / rotation correction is the responsibility of the input
//! collaborator and happens before delivery.

/// Position in logical screen coordinates
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

/// Discrete touch event phases
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TouchEvent {
    /// Finger down
    Start(Point),
    /// Finger moved while down
    Move(Point),
    /// Finger lifted
    End(Point),
}

impl TouchEvent {
    /// Position of the event regardless of phase
    pub fn pos(&self) -> Point {
        match self {
            TouchEvent::Start(p) | TouchEvent::Move(p) | TouchEvent::End(p) => *p,
        }
    }
}

/// Events yielded by [`Driver::wait_event`][crate::platform::Driver::wait_event]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Touch input
    Touch(TouchEvent),

    /// Frame pacing tick (~60 Hz), drives timed animation such as the
    /// hold-to-confirm progress loader
    Ticker,

    /// Out-of-band decision injection for debug-link builds, raced against
    /// the active dialog's own iteration. Never present in production builds.
    #[cfg(feature = "debug-link")]
    Debug(DebugCommand),
}

/// Debug-link decision injection commands
#[cfg(feature = "debug-link")]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DebugCommand {
    Confirm,
    Cancel,
}
