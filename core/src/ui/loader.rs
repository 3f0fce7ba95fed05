// Copyright (c) 2025-2026 The Taplock Developers

use crate::display::{Color, Display as _, Icon, SCREEN};
use crate::platform::Driver;

use super::theme;

/// Style record for the loader arc
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LoaderStyle {
    pub bg: Color,
    pub fg: Color,
    pub icon: Option<Icon>,
    pub icon_fg: Option<Color>,
}

/// Style while the hold is still in progress
pub const LOADER_NORMAL: LoaderStyle = LoaderStyle {
    bg: theme::SCREEN_BG,
    fg: theme::HOLD_BTN,
    icon: None,
    icon_fg: None,
};

/// Style once the hold threshold has been crossed
pub const LOADER_ACTIVE: LoaderStyle = LoaderStyle {
    bg: theme::SCREEN_BG,
    fg: theme::CONFIRM_BTN,
    icon: Some(Icon::Send),
    icon_fg: Some(theme::FONT),
};

/// Timed-hold sub-machine.
///
/// Tracks elapsed active time against `target_ms` and drives the animated
/// progress arc. Inactive loaders never report a duration; after [`stop`]
/// the loader must be restarted before reuse.
///
/// [`stop`]: Loader::stop
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Loader {
    target_ms: u32,
    start_ticks_ms: Option<u32>,
    normal: LoaderStyle,
    active: LoaderStyle,
}

impl Loader {
    pub const fn new(target_ms: u32) -> Self {
        Self {
            target_ms,
            start_ticks_ms: None,
            normal: LOADER_NORMAL,
            active: LOADER_ACTIVE,
        }
    }

    pub const fn with_styles(mut self, normal: LoaderStyle, active: LoaderStyle) -> Self {
        self.normal = normal;
        self.active = active;
        self
    }

    pub fn target_ms(&self) -> u32 {
        self.target_ms
    }

    pub fn is_active(&self) -> bool {
        self.start_ticks_ms.is_some()
    }

    /// Begin tracking a hold at the current monotonic time
    pub fn start(&mut self, now_ms: u32) {
        self.start_ticks_ms = Some(now_ms);
    }

    /// End the hold, returning whether it was sustained for `target_ms`.
    ///
    /// Clears the active state; returns false if the loader was not started.
    pub fn stop(&mut self, now_ms: u32) -> bool {
        match self.start_ticks_ms.take() {
            Some(start) => now_ms.wrapping_sub(start) >= self.target_ms,
            None => false,
        }
    }

    /// Elapsed hold time clamped to `target_ms`, zero while inactive
    pub fn progress(&self, now_ms: u32) -> u32 {
        match self.start_ticks_ms {
            Some(start) => now_ms.wrapping_sub(start).min(self.target_ms),
            None => 0,
        }
    }

    /// Draw the progress arc.
    ///
    /// The active style appears exactly when progress reaches `target_ms`;
    /// that transition is the observable hold-threshold signal.
    pub fn render<D: Driver>(&self, drv: &mut D) {
        let progress = self.progress(drv.ticks_ms());

        let style = match progress == self.target_ms {
            true => &self.active,
            false => &self.normal,
        };

        let mils = match self.target_ms {
            0 => 1000,
            t => progress.saturating_mul(1000) / t,
        };

        let display = drv.display();
        display.bar(0, 32, SCREEN, SCREEN - 80, style.bg);
        display.loader(mils, -8, style.fg, style.bg, style.icon, style.icon_fg);
    }
}
