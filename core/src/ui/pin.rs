// Copyright (c) 2025-2026 The Taplock Developers

//! Scrambled PIN keypad.
//!
//! The position-to-digit permutation is drawn fresh on every render, so an
//! observer correlating frames of finger position cannot reconstruct the
//! digit sequence from position alone. Each typed position captures the
//! permutation of the render it landed on; decoding always resolves against
//! that captured map, never a newer one, even if renders are coalesced.

use heapless::{String, Vec};
use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use crate::display::{Area, Display as _, Font, Icon, SCREEN};
use crate::event::{Event, Point, TouchEvent};
use crate::platform::Driver;

use super::{theme, Button, ButtonContent, DialogResult, UiResult, Widget};

/// Maximum number of PIN digits
pub const MAX_PIN_LEN: usize = 9;

/// Keypad positions: 3x3 grid plus the optional zero key
pub const MATRIX_KEYS: usize = 10;

/// Decoded PIN string
pub type Pin = String<MAX_PIN_LEN>;

/// Bottom action strip layout, the zero key sits between the two
pub const PIN_CANCEL_AREA: Area = Area::new(0, 192, 80, 46);
pub const PIN_CONFIRM_AREA: Area = Area::new(160, 192, 80, 46);

const LABEL_Y: i16 = 26;
const GRID_TOP: i16 = 36;
const CELL_W: i16 = 80;
const CELL_H: i16 = 50;
const ROW_PITCH: i16 = 52;

/// Screen area of keypad position `pos` (`0..=8` grid, `9` the zero key)
pub const fn cell_area(pos: u8) -> Area {
    match pos {
        9 => Area::new(80, 192, 80, 46),
        _ => Area::new(
            (pos as i16 % 3) * CELL_W,
            GRID_TOP + (pos as i16 / 3) * ROW_PITCH,
            CELL_W,
            CELL_H,
        ),
    }
}

/// Position-to-digit permutation for one render.
///
/// Always rebuilt from the identity assignment and reshuffled in full;
/// prior scramble state never feeds the next draw.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ScrambleMap {
    digits: [u8; MATRIX_KEYS],
    len: u8,
}

impl ScrambleMap {
    const BASE: [u8; MATRIX_KEYS] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0];

    /// Unscrambled assignment over the first `len` keys
    pub fn identity(len: usize) -> Self {
        Self {
            digits: Self::BASE,
            len: len.min(MATRIX_KEYS) as u8,
        }
    }

    /// Draw a fresh permutation over the first `len` keys
    pub fn generate<R: CryptoRngCore>(rng: &mut R, len: usize) -> Self {
        let mut map = Self::identity(len);

        // Fisher-Yates over the key set
        for i in (1..map.len as usize).rev() {
            let j = (rng.next_u32() as usize) % (i + 1);
            map.digits.swap(i, j);
        }

        map
    }

    /// Build from a host-supplied assignment
    pub fn from_digits(digits: &[u8]) -> Option<Self> {
        if digits.is_empty() || digits.len() > MATRIX_KEYS || digits.iter().any(|d| *d > 9) {
            return None;
        }

        let mut map = Self {
            digits: [0u8; MATRIX_KEYS],
            len: digits.len() as u8,
        };
        map.digits[..digits.len()].copy_from_slice(digits);

        Some(map)
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Digit shown at keypad position `pos` under this map
    pub fn digit(&self, pos: usize) -> Option<u8> {
        match pos < self.len as usize {
            true => Some(self.digits[pos]),
            false => None,
        }
    }
}

impl Zeroize for ScrambleMap {
    fn zeroize(&mut self) {
        self.digits.zeroize();
        self.len.zeroize();
    }
}

/// One typed keypad position plus the scramble of the render it hit
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
struct PinEntry {
    pos: u8,
    map: ScrambleMap,
}

impl Zeroize for PinEntry {
    fn zeroize(&mut self) {
        self.pos.zeroize();
        self.map.zeroize();
    }
}

/// Scrambled numeric keypad widget.
///
/// In placeholder mode (host-relayed entry) only the label and blank keys
/// are drawn and touches are ignored.
pub struct PinMatrix {
    label: &'static str,
    with_zero: bool,
    show_digits: bool,
    scramble: ScrambleMap,
    entries: Vec<PinEntry, MAX_PIN_LEN>,
}

impl PinMatrix {
    pub fn new(label: &'static str, with_zero: bool) -> Self {
        let keys = if with_zero { MATRIX_KEYS } else { MATRIX_KEYS - 1 };
        Self {
            label,
            with_zero,
            show_digits: true,
            scramble: ScrambleMap::identity(keys),
            entries: Vec::new(),
        }
    }

    /// Label-only matrix for host-relayed entry, no digits on-device
    pub fn placeholder(label: &'static str) -> Self {
        let mut m = Self::new(label, false);
        m.show_digits = false;
        m
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    /// Position-to-digit assignment of the current render
    pub fn scramble(&self) -> &ScrambleMap {
        &self.scramble
    }

    /// Discard all typed positions
    pub fn clear(&mut self) {
        for e in self.entries.iter_mut() {
            e.zeroize();
        }
        self.entries.clear();
    }

    /// Decode the typed sequence, each position against the map captured at
    /// its own render. This is the only point the digit string exists.
    pub fn pin(&self) -> Pin {
        let mut out = Pin::new();
        for e in self.entries.iter() {
            if let Some(d) = e.map.digit(e.pos as usize) {
                let _ = out.push((b'0' + d) as char);
            }
        }
        out
    }

    fn keys(&self) -> usize {
        self.scramble.len()
    }

    fn hit(&self, p: Point) -> Option<u8> {
        (0..self.keys() as u8).find(|pos| cell_area(*pos).contains(p))
    }
}

impl Widget for PinMatrix {
    type Output = DialogResult;

    fn render<D: Driver>(&mut self, drv: &mut D) {
        // Fresh permutation per render; entries keep the map they captured
        if self.show_digits {
            self.scramble = ScrambleMap::generate(drv.rng(), self.keys());
        }

        let scramble = self.scramble;
        let show = self.show_digits;
        let typed = self.entries.len();
        let keys = self.keys() as u8;
        let label = self.label;

        let display = drv.display();

        display.bar(0, 0, SCREEN, 192, theme::SCREEN_BG);
        display.text_center(
            SCREEN / 2,
            LABEL_Y,
            label,
            Font::Bold,
            theme::FONT,
            theme::SCREEN_BG,
        );

        // Typed-digit bullets under the label
        for i in 0..typed {
            display.bar(SCREEN / 2 - 40 + 9 * i as i16, 30, 6, 6, theme::GREY);
        }

        for pos in 0..keys {
            let Area { x, y, w, h } = cell_area(pos);
            display.bar(x, y, w, h, theme::KEY_BTN);

            if !show {
                continue;
            }

            if let Some(d) = scramble.digit(pos as usize) {
                const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
                display.text_center(
                    x + w / 2,
                    y + h / 2 + 8,
                    DIGITS[d as usize],
                    Font::Bold,
                    theme::FONT,
                    theme::KEY_BTN,
                );
            }
        }
    }

    fn update(&mut self, evt: &Event, _now_ms: u32) -> UiResult<DialogResult> {
        if !self.show_digits {
            return UiResult::None;
        }

        let pos = match evt {
            Event::Touch(TouchEvent::End(p)) => match self.hit(*p) {
                Some(pos) => pos,
                None => return UiResult::None,
            },
            _ => return UiResult::None,
        };

        if self.is_full() {
            return UiResult::None;
        }

        // Capture the on-screen map together with the position
        let _ = self.entries.push(PinEntry {
            pos,
            map: self.scramble,
        });

        UiResult::Update
    }
}

impl Drop for PinMatrix {
    fn drop(&mut self) {
        self.clear();
        self.scramble.zeroize();
    }
}

/// PIN entry dialog: scrambled keypad plus confirm / cancel actions.
///
/// The cancel region becomes a clear action once at least one digit is
/// typed, so full cancellation always requires an explicit second gesture;
/// clearing keeps the session iterating. Confirm is disabled while the
/// buffer is empty.
pub struct PinDialog {
    matrix: PinMatrix,
    confirm: Button,
    cancel: Button,
}

impl PinDialog {
    pub fn new(label: &'static str, with_zero: bool) -> Self {
        let mut confirm = Button::confirm(PIN_CONFIRM_AREA, ButtonContent::Icon(Icon::Confirm));
        confirm.set_enabled(false);

        Self {
            matrix: PinMatrix::new(label, with_zero),
            confirm,
            cancel: Button::cancel(PIN_CANCEL_AREA, ButtonContent::Icon(Icon::Cancel)),
        }
    }

    pub fn matrix(&self) -> &PinMatrix {
        &self.matrix
    }

    /// Decode the typed sequence
    pub fn pin(&self) -> Pin {
        self.matrix.pin()
    }

    /// Track the buffer state: cancel shows the clear icon and confirm is
    /// enabled once at least one digit is typed
    fn sync_actions(&mut self) {
        let content = match self.matrix.is_empty() {
            true => ButtonContent::Icon(Icon::Cancel),
            false => ButtonContent::Icon(Icon::Clear),
        };
        self.cancel.set_content(content);
        self.confirm.set_enabled(!self.matrix.is_empty());
    }
}

impl Widget for PinDialog {
    type Output = DialogResult;

    fn render<D: Driver>(&mut self, drv: &mut D) {
        self.matrix.render(drv);

        let display = drv.display();
        self.confirm.render(display);
        self.cancel.render(display);
    }

    fn update(&mut self, evt: &Event, now_ms: u32) -> UiResult<DialogResult> {
        let touch = match evt {
            Event::Touch(t) => t,
            #[cfg(feature = "debug-link")]
            Event::Debug(cmd) => return UiResult::Exit(cmd.into()),
            _ => return UiResult::None,
        };

        // Confirm is disabled while the buffer is empty, so a click here
        // always carries at least one digit
        match self.confirm.update(touch) {
            UiResult::Exit(()) => return UiResult::Exit(DialogResult::Confirmed),
            UiResult::Update => return UiResult::Update,
            _ => (),
        }

        match self.cancel.update(touch) {
            UiResult::Exit(()) => match self.matrix.is_empty() {
                // Empty buffer: terminal cancellation
                true => return UiResult::Exit(DialogResult::Cancelled),
                // Digits present: clear and keep the session open
                false => {
                    self.matrix.clear();
                    self.sync_actions();
                    return UiResult::Update;
                }
            },
            UiResult::Update => return UiResult::Update,
            _ => (),
        }

        match self.matrix.update(evt, now_ms) {
            UiResult::Update => {
                self.sync_actions();
                UiResult::Update
            }
            r => r,
        }
    }
}
