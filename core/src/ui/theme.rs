// Copyright (c) 2025-2026 The Taplock Developers

//! Color palette and element assignments for the stock widget set.

use crate::display::Color;

pub const DARK_BLUE: Color = Color::rgb(0x01, 0x2E, 0x53);
pub const BLUE: Color = Color::rgb(0x02, 0x3D, 0x6E);
pub const LIGHT_BLUE: Color = Color::rgb(0x45, 0x62, 0x7B);
pub const GREEN: Color = Color::rgb(0x4C, 0xC1, 0x48);
pub const RED: Color = Color::rgb(0xFF, 0x00, 0x00);
pub const WHITE: Color = Color::rgb(0xFA, 0xFA, 0xFA);
pub const ORANGE: Color = Color::rgb(0xFF, 0xAA, 0x22);
pub const GREY: Color = Color::rgb(0x9C, 0x9C, 0x9C);
pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

// Element assignments

pub const SCREEN_BG: Color = BLUE;

pub const CONFIRM_BTN: Color = GREEN;
pub const CANCEL_BTN: Color = RED;
pub const KEY_BTN: Color = DARK_BLUE;
pub const KEY_BTN_ACTIVE: Color = LIGHT_BLUE;
pub const HOLD_BTN: Color = ORANGE;
pub const CLEAR_BTN: Color = ORANGE;

pub const FONT: Color = WHITE;
pub const FONT_DISABLED: Color = GREY;

// Backlight levels

pub const BACKLIGHT_NORMAL: u8 = 60;
pub const BACKLIGHT_DIM: u8 = 5;
pub const BACKLIGHT_NONE: u8 = 2;
pub const BACKLIGHT_MAX: u8 = 255;
