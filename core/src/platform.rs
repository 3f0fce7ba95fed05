// Copyright (c) 2025-2026 The Taplock Developers

use rand_core::CryptoRngCore;

use crate::display::Display;
use crate::event::Event;

/// Platform support for the widget event loop
///
/// Bundles the display driver, a cryptographic RNG (used for the PIN keypad
/// scramble), a monotonic millisecond clock and the input event source.
///
/// [`wait_event`][Driver::wait_event] is the single suspension point of the
/// cooperative scheduler: the caller is suspended until a touch event or the
/// next frame tick arrives, and other scheduled work (display refresh,
/// hardware polling) may only interleave there.
pub trait Driver {
    type Display: Display;
    type Rng: CryptoRngCore;

    /// Platform display driver
    fn display(&mut self) -> &mut Self::Display;

    /// Cryptographic RNG for keypad scrambling
    fn rng(&mut self) -> &mut Self::Rng;

    /// Monotonic milliseconds, wraps on overflow
    fn ticks_ms(&self) -> u32;

    /// Suspend until the next input event or frame tick
    fn wait_event(&mut self) -> Event;
}

impl<T: Driver> Driver for &mut T {
    type Display = T::Display;
    type Rng = T::Rng;

    fn display(&mut self) -> &mut Self::Display {
        T::display(self)
    }

    fn rng(&mut self) -> &mut Self::Rng {
        T::rng(self)
    }

    fn ticks_ms(&self) -> u32 {
        T::ticks_ms(self)
    }

    fn wait_event(&mut self) -> Event {
        T::wait_event(self)
    }
}
