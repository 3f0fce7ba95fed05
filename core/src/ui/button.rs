// Copyright (c) 2025-2026 The Taplock Developers

use crate::display::{Area, Color, Display, Font, Icon};
use crate::event::TouchEvent;

use super::{theme, UiResult};

/// Renderable button content
///
/// A tagged variant rather than mutable draw state, so content swaps (the
/// PIN dialog's cancel icon becoming a clear icon) are an explicit variant
/// change followed by a redraw.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ButtonContent {
    Text(&'static str),
    Icon(Icon),
}

/// Style record for one button state
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ButtonStyle {
    pub fg: Color,
    pub bg: Color,
    pub font: Font,
}

impl ButtonStyle {
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            font: Font::Bold,
        }
    }
}

/// Touch action region with pressed-state tracking.
///
/// A press begins with a touch start inside the area; moving out releases
/// it; a touch end inside while pressed is a click (`Exit(())`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Button {
    area: Area,
    content: ButtonContent,
    normal: ButtonStyle,
    active: ButtonStyle,
    pressed: bool,
    enabled: bool,
}

impl Button {
    pub const fn new(area: Area, content: ButtonContent, normal: ButtonStyle) -> Self {
        Self {
            area,
            content,
            normal,
            active: ButtonStyle::new(normal.bg, normal.fg),
            pressed: false,
            enabled: true,
        }
    }

    /// Confirm-styled button
    pub const fn confirm(area: Area, content: ButtonContent) -> Self {
        Self::new(area, content, ButtonStyle::new(theme::FONT, theme::CONFIRM_BTN))
    }

    /// Cancel-styled button
    pub const fn cancel(area: Area, content: ButtonContent) -> Self {
        Self::new(area, content, ButtonStyle::new(theme::FONT, theme::CANCEL_BTN))
    }

    /// Hold-to-confirm styled button
    pub const fn hold(area: Area, content: ButtonContent) -> Self {
        Self::new(area, content, ButtonStyle::new(theme::FONT, theme::HOLD_BTN))
    }

    pub fn area(&self) -> Area {
        self.area
    }

    pub fn content(&self) -> ButtonContent {
        self.content
    }

    /// Swap rendered content; caller triggers the redraw
    pub fn set_content(&mut self, content: ButtonContent) {
        self.content = content;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the action; disabled buttons render greyed and
    /// ignore touches
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.pressed = false;
        }
    }

    /// Handle a touch event, exiting with `()` on a completed click
    pub fn update(&mut self, evt: &TouchEvent) -> UiResult<()> {
        if !self.enabled {
            return UiResult::None;
        }

        match evt {
            TouchEvent::Start(p) if self.area.contains(*p) => {
                self.pressed = true;
                UiResult::Update
            }
            TouchEvent::Move(p) if self.pressed && !self.area.contains(*p) => {
                self.pressed = false;
                UiResult::Update
            }
            TouchEvent::End(p) => {
                let was = self.pressed;
                self.pressed = false;
                match was && self.area.contains(*p) {
                    true => UiResult::Exit(()),
                    false if was => UiResult::Update,
                    false => UiResult::None,
                }
            }
            _ => UiResult::None,
        }
    }

    pub fn render<D: Display>(&self, display: &mut D) {
        let disabled = ButtonStyle {
            fg: theme::FONT_DISABLED,
            ..self.normal
        };

        let style = match (self.enabled, self.pressed) {
            (false, _) => &disabled,
            (true, true) => &self.active,
            (true, false) => &self.normal,
        };

        let Area { x, y, w, h } = self.area;
        display.bar(x, y, w, h, style.bg);

        match self.content {
            ButtonContent::Text(t) => {
                display.text_center(x + w / 2, y + h / 2 + 8, t, style.font, style.fg, style.bg)
            }
            ButtonContent::Icon(i) => {
                display.icon(x + w / 2 - 16, y + h / 2 - 16, i, style.fg, style.bg)
            }
        }
    }
}
