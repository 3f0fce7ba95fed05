// Copyright (c) 2025-2026 The Taplock Developers

use crate::display::{Display as _, Font, Icon, SCREEN};
use crate::event::Event;
use crate::platform::Driver;

use super::{helpers, theme, DialogResult, UiResult, Widget};

const LINE_HEIGHT: i16 = 26;
const BODY_TOP: i16 = 64;

/// Static text content for confirmation dialogs: a header bar plus up to a
/// handful of body lines. Never terminates on its own.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Text {
    header: &'static str,
    icon: Option<Icon>,
    body: &'static [&'static str],
}

impl Text {
    pub const fn new(header: &'static str, body: &'static [&'static str]) -> Self {
        Self {
            header,
            icon: None,
            body,
        }
    }

    pub const fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }
}

impl Widget for Text {
    type Output = DialogResult;

    fn render<D: Driver>(&mut self, drv: &mut D) {
        let display = drv.display();

        helpers::header(display, self.header, self.icon, theme::FONT, theme::SCREEN_BG);

        for (i, line) in self.body.iter().enumerate() {
            display.text_center(
                SCREEN / 2,
                BODY_TOP + LINE_HEIGHT * i as i16,
                line,
                Font::Normal,
                theme::FONT,
                theme::SCREEN_BG,
            );
        }
    }

    fn update(&mut self, _evt: &Event, _now_ms: u32) -> UiResult<DialogResult> {
        UiResult::None
    }
}
