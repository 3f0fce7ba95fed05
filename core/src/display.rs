// Copyright (c) 2025-2026 The Taplock Developers

//! Rendering primitives consumed by the widget layer.
//!
//! The [`Display`] trait is implemented by the platform display driver;
//! pixel-level drawing, resource loading and backlight control are external
//! to this crate.

use strum::Display as StrumDisplay;

use crate::event::Point;

/// Logical screen width / height in pixels
pub const SCREEN: i16 = 240;

/// RGB565 color
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color(pub u16);

impl Color {
    /// Pack 8-bit RGB components into RGB565
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self((((r & 0xF8) as u16) << 8) | (((g & 0xFC) as u16) << 3) | ((b & 0xF8) as u16 >> 3))
    }

    /// Linear blend towards `other`, `t` in `0..=255`
    pub const fn blend(self, other: Self, t: u8) -> Self {
        const fn mix(a: u16, b: u16, t: u16) -> u16 {
            (a * (255 - t) + b * t) / 255
        }

        let t = t as u16;
        let r = mix((self.0 >> 11) & 0x1F, (other.0 >> 11) & 0x1F, t);
        let g = mix((self.0 >> 5) & 0x3F, (other.0 >> 5) & 0x3F, t);
        let b = mix(self.0 & 0x1F, other.0 & 0x1F, t);

        Self((r << 11) | (g << 5) | b)
    }
}

/// Font selection for text primitives
#[derive(Copy, Clone, Debug, PartialEq, Eq, StrumDisplay)]
pub enum Font {
    Mono,
    Normal,
    Bold,
}

/// Icon resources drawn by the display collaborator
///
/// A closed enumeration, resource loading lives outside this crate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, StrumDisplay)]
pub enum Icon {
    Confirm,
    Cancel,
    Clear,
    Lock,
    Send,
    Reset,
    Wipe,
    Recovery,
}

/// Rectangular screen region
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Area {
    pub x: i16,
    pub y: i16,
    pub w: i16,
    pub h: i16,
}

impl Area {
    pub const fn new(x: i16, y: i16, w: i16, h: i16) -> Self {
        Self { x, y, w, h }
    }

    /// Hit test in logical coordinates.
    ///
    /// Half-open on the right/bottom edges so adjacent regions never claim
    /// the same touch point.
    pub fn contains(&self, p: Point) -> bool {
        self.x <= p.x && p.x < self.x + self.w && self.y <= p.y && p.y < self.y + self.h
    }

    pub const fn center(&self) -> Point {
        Point::new(self.x + self.w / 2, self.y + self.h / 2)
    }
}

/// Display driver primitives
///
/// Implementations must not block; the widget layer only draws between
/// suspension points of the event loop.
pub trait Display {
    /// Draw a filled rectangle
    fn bar(&mut self, x: i16, y: i16, w: i16, h: i16, color: Color);

    /// Draw left-aligned text with baseline at (x, y)
    fn text(&mut self, x: i16, y: i16, text: &str, font: Font, fg: Color, bg: Color);

    /// Draw horizontally centered text with baseline at (x, y)
    fn text_center(&mut self, x: i16, y: i16, text: &str, font: Font, fg: Color, bg: Color);

    /// Draw an icon with its top-left corner at (x, y)
    fn icon(&mut self, x: i16, y: i16, icon: Icon, fg: Color, bg: Color);

    /// Draw the progress loader arc
    ///
    /// `progress` is in `0..=1000` mil, `y_offset` shifts the arc center
    /// vertically from the screen center.
    fn loader(
        &mut self,
        progress: u32,
        y_offset: i16,
        fg: Color,
        bg: Color,
        icon: Option<Icon>,
        icon_fg: Option<Color>,
    );

    /// Current backlight level
    fn backlight(&self) -> u8;

    /// Set backlight level
    fn set_backlight(&mut self, level: u8);

    /// Clear the full screen to the theme background
    fn clear(&mut self) {
        self.bar(0, 0, SCREEN, SCREEN, crate::ui::theme::SCREEN_BG);
    }
}
