// Copyright (c) 2025-2026 The Taplock Developers

use crate::display::{Area, Icon};
use crate::event::Event;
use crate::platform::Driver;

use super::{Button, ButtonContent, Loader, UiResult, Widget};

/// Bottom action strip layout for the stock dialogs
pub const CANCEL_BTN_AREA: Area = Area::new(0, 192, 118, 46);
pub const CONFIRM_BTN_AREA: Area = Area::new(122, 192, 118, 46);
pub const HOLD_BTN_AREA: Area = Area::new(0, 192, 240, 46);

/// Default sustained-press duration for hold-to-confirm
pub const DEFAULT_HOLD_MS: u32 = 1000;

/// Terminal outcome of a confirm / hold dialog
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DialogResult {
    Confirmed,
    Cancelled,
}

/// Yes/no decision dialog over a content widget.
///
/// Touches missing both action regions are forwarded to the content, whose
/// own terminal result (if any) terminates the dialog.
pub struct ConfirmDialog<W> {
    content: W,
    confirm: Button,
    cancel: Option<Button>,
}

impl<W> ConfirmDialog<W> {
    pub fn new(content: W) -> Self {
        Self {
            content,
            confirm: Button::confirm(CONFIRM_BTN_AREA, ButtonContent::Icon(Icon::Confirm)),
            cancel: Some(Button::cancel(CANCEL_BTN_AREA, ButtonContent::Icon(Icon::Cancel))),
        }
    }

    /// Drop the cancel region, leaving confirm as the only action
    pub fn without_cancel(mut self) -> Self {
        self.cancel = None;
        self
    }

    pub fn content(&self) -> &W {
        &self.content
    }
}

impl<W: Widget<Output = DialogResult>> Widget for ConfirmDialog<W> {
    type Output = DialogResult;

    fn render<D: Driver>(&mut self, drv: &mut D) {
        self.content.render(drv);

        let display = drv.display();
        self.confirm.render(display);
        if let Some(c) = &self.cancel {
            c.render(display);
        }
    }

    fn update(&mut self, evt: &Event, now_ms: u32) -> UiResult<DialogResult> {
        let touch = match evt {
            Event::Touch(t) => t,
            #[cfg(feature = "debug-link")]
            Event::Debug(cmd) => return UiResult::Exit(cmd.into()),
            _ => return self.content.update(evt, now_ms),
        };

        match self.confirm.update(touch) {
            UiResult::Exit(()) => return UiResult::Exit(DialogResult::Confirmed),
            UiResult::Update => return UiResult::Update,
            _ => (),
        }

        if let Some(cancel) = &mut self.cancel {
            match cancel.update(touch) {
                UiResult::Exit(()) => return UiResult::Exit(DialogResult::Cancelled),
                UiResult::Update => return UiResult::Update,
                _ => (),
            }
        }

        self.content.update(evt, now_ms)
    }
}

/// Hold-to-confirm dialog.
///
/// Confirmation requires a sustained press of the hold region for the
/// loader's target duration; releasing early resets the loader and the
/// dialog keeps iterating.
pub struct HoldToConfirmDialog<W> {
    content: W,
    hold: Button,
    cancel: Option<Button>,
    loader: Loader,
}

impl<W> HoldToConfirmDialog<W> {
    pub fn new(content: W, label: &'static str) -> Self {
        Self::with_hold_ms(content, label, DEFAULT_HOLD_MS)
    }

    pub fn with_hold_ms(content: W, label: &'static str, target_ms: u32) -> Self {
        Self {
            content,
            hold: Button::hold(HOLD_BTN_AREA, ButtonContent::Text(label)),
            cancel: None,
            loader: Loader::new(target_ms),
        }
    }

    /// Add a cancel region alongside a narrowed hold button
    pub fn with_cancel(mut self) -> Self {
        self.cancel = Some(Button::cancel(
            CANCEL_BTN_AREA,
            ButtonContent::Icon(Icon::Cancel),
        ));
        let content = self.hold.content();
        self.hold = Button::hold(CONFIRM_BTN_AREA, content);
        self
    }

    pub fn loader(&self) -> &Loader {
        &self.loader
    }
}

impl<W: Widget<Output = DialogResult>> Widget for HoldToConfirmDialog<W> {
    type Output = DialogResult;

    fn render<D: Driver>(&mut self, drv: &mut D) {
        // While the hold is running the loader owns the content region
        if self.loader.is_active() {
            self.loader.render(drv);
            self.hold.render(drv.display());
            return;
        }

        self.content.render(drv);

        let display = drv.display();
        self.hold.render(display);
        if let Some(c) = &self.cancel {
            c.render(display);
        }
    }

    fn update(&mut self, evt: &Event, now_ms: u32) -> UiResult<DialogResult> {
        let touch = match evt {
            Event::Touch(t) => t,
            // Animate progress at the frame rate while held
            Event::Ticker if self.loader.is_active() => return UiResult::Update,
            #[cfg(feature = "debug-link")]
            Event::Debug(cmd) => return UiResult::Exit(cmd.into()),
            _ => return self.content.update(evt, now_ms),
        };

        let was_pressed = self.hold.is_pressed();
        match self.hold.update(touch) {
            // Press released inside the region: confirmed iff held long enough
            UiResult::Exit(()) => match self.loader.stop(now_ms) {
                true => return UiResult::Exit(DialogResult::Confirmed),
                false => return UiResult::Update,
            },
            UiResult::Update => {
                match self.hold.is_pressed() {
                    // Press started: begin tracking the hold
                    true if !was_pressed => self.loader.start(now_ms),
                    // Press left the region or ended outside: reset
                    false if was_pressed => {
                        let _ = self.loader.stop(now_ms);
                    }
                    _ => (),
                }
                return UiResult::Update;
            }
            _ => (),
        }

        if let Some(cancel) = &mut self.cancel {
            match cancel.update(touch) {
                UiResult::Exit(()) => return UiResult::Exit(DialogResult::Cancelled),
                UiResult::Update => return UiResult::Update,
                _ => (),
            }
        }

        self.content.update(evt, now_ms)
    }
}

#[cfg(feature = "debug-link")]
impl From<&crate::event::DebugCommand> for DialogResult {
    fn from(cmd: &crate::event::DebugCommand) -> Self {
        match cmd {
            crate::event::DebugCommand::Confirm => DialogResult::Confirmed,
            crate::event::DebugCommand::Cancel => DialogResult::Cancelled,
        }
    }
}
