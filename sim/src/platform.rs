// Copyright (c) 2025-2026 The Taplock Developers

//! Desktop stand-ins for the device collaborators: a logging display, a
//! scripted touch driver, an auto-acknowledging host channel and an
//! in-memory secure storage with escalating backoff.

use std::collections::VecDeque;
use std::convert::Infallible;

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use taplock_core::channel::Channel;
use taplock_core::display::{Color, Display, Font, Icon};
use taplock_core::event::Event;
use taplock_core::flow::Storage;
use taplock_core::platform::Driver;
use taplock_core::proto::{PinMatrixAck, Request, Response, ResponseKind};
use taplock_core::ui::pin::ScrambleMap;

/// Frame pacing interval for synthesized ticker events
const TICK_MS: u32 = 16;

/// Hard cap on synthesized frames so a stuck scenario terminates
const MAX_TICKS: u32 = 100_000;

/// Display that traces draw primitives to the log
#[derive(Default)]
pub struct SimDisplay {
    backlight_level: u8,
}

impl Display for SimDisplay {
    fn bar(&mut self, x: i16, y: i16, w: i16, h: i16, color: Color) {
        trace!("bar ({}, {}) {}x{} #{:04x}", x, y, w, h, color.0);
    }

    fn text(&mut self, x: i16, y: i16, text: &str, _font: Font, _fg: Color, _bg: Color) {
        debug!("text ({}, {}): {:?}", x, y, text);
    }

    fn text_center(&mut self, x: i16, y: i16, text: &str, _font: Font, _fg: Color, _bg: Color) {
        debug!("text ({}, {}) centered: {:?}", x, y, text);
    }

    fn icon(&mut self, x: i16, y: i16, icon: Icon, _fg: Color, _bg: Color) {
        debug!("icon ({}, {}): {}", x, y, icon);
    }

    fn loader(
        &mut self,
        progress: u32,
        _y_offset: i16,
        _fg: Color,
        _bg: Color,
        _icon: Option<Icon>,
        _icon_fg: Option<Color>,
    ) {
        debug!("loader {}/1000", progress);
    }

    fn backlight(&self) -> u8 {
        self.backlight_level
    }

    fn set_backlight(&mut self, level: u8) {
        trace!("backlight {}", level);
        self.backlight_level = level;
    }
}

/// Driver replaying a scripted touch sequence.
///
/// Scripted events are delivered at their scheduled times; between and after
/// them the driver synthesizes ticker frames at [`TICK_MS`] so timed holds
/// and backoff countdowns make progress.
pub struct SimDriver {
    now: u32,
    ticks: u32,
    script: VecDeque<(u32, Event)>,
    rng: StdRng,
    display: SimDisplay,
}

impl SimDriver {
    pub fn new(seed: u64) -> Self {
        Self {
            now: 0,
            ticks: 0,
            script: VecDeque::new(),
            rng: StdRng::seed_from_u64(seed),
            display: SimDisplay::default(),
        }
    }

    /// Schedule `evt` for delivery at absolute time `at_ms`
    pub fn schedule(&mut self, at_ms: u32, evt: Event) {
        self.script.push_back((at_ms, evt));
    }
}

impl Driver for SimDriver {
    type Display = SimDisplay;
    type Rng = StdRng;

    fn display(&mut self) -> &mut SimDisplay {
        &mut self.display
    }

    fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    fn ticks_ms(&self) -> u32 {
        self.now
    }

    fn wait_event(&mut self) -> Event {
        self.ticks += 1;
        if self.ticks > MAX_TICKS {
            panic!("scenario did not terminate within {} frames", MAX_TICKS);
        }

        let due = match self.script.front() {
            Some((at_ms, _)) => *at_ms <= self.now + TICK_MS,
            None => false,
        };

        if due {
            if let Some((at_ms, evt)) = self.script.pop_front() {
                self.now = self.now.max(at_ms);

                trace!("event: {:?} at {}ms", evt, self.now);

                return evt;
            }
        }

        self.now += TICK_MS;
        Event::Ticker
    }
}

/// Host channel that acknowledges every handshake.
///
/// Host-relayed PIN entries are served from a queue of digit strings,
/// translated to keypad positions under the identity map; an exhausted
/// queue answers with Cancel.
pub struct SimChannel {
    pin_queue: VecDeque<String>,
}

impl SimChannel {
    pub fn new() -> Self {
        Self {
            pin_queue: VecDeque::new(),
        }
    }

    /// Queue a digit string for the next host-relayed PIN entry
    pub fn push_pin(&mut self, pin: &str) {
        self.pin_queue.push_back(pin.to_string());
    }
}

impl Channel for SimChannel {
    type Error = Infallible;

    fn call(&mut self, req: Request, _expected: &[ResponseKind]) -> Result<Response, Infallible> {
        info!("host request: {:?}", req);

        let resp = match req {
            Request::Button(_) => Response::ButtonAck(Default::default()),
            Request::PinMatrix(_) => match self.pin_queue.pop_front() {
                Some(pin) => Response::PinMatrixAck(host_pin_ack(&pin)),
                None => Response::Cancel(Default::default()),
            },
        };

        info!("host response: {:?}", resp);

        Ok(resp)
    }
}

/// Encode `pin` as keypad positions under the identity map.
///
/// Digit zero has no position on the host matrix, so simulated host PINs
/// are restricted to 1..=9; offending digits are skipped.
fn host_pin_ack(pin: &str) -> PinMatrixAck {
    let mut positions = heapless::Vec::new();
    for c in pin.chars() {
        match c.to_digit(10) {
            Some(d) if (1..=9).contains(&d) => {
                let _ = positions.push(d as u8);
            }
            _ => debug!("dropping digit {:?} from host pin", c),
        }
    }

    PinMatrixAck {
        pin: positions,
        digits: ScrambleMap::identity(9),
    }
}

/// In-memory secure storage with doubling lockout backoff
pub struct SimStorage {
    pin: String,
    locked: bool,
    failures: u32,
    base_backoff_ms: u32,
}

impl SimStorage {
    pub fn new(pin: &str, base_backoff_ms: u32) -> Self {
        Self {
            pin: pin.to_string(),
            locked: true,
            failures: 0,
            base_backoff_ms,
        }
    }
}

impl Storage for SimStorage {
    fn is_locked(&self) -> bool {
        self.locked
    }

    fn unlock<F: FnMut(u32)>(&mut self, pin: &str, mut on_failure: F) -> bool {
        if pin == self.pin {
            info!("storage unlocked after {} failures", self.failures);

            self.locked = false;
            self.failures = 0;
            return true;
        }

        self.failures += 1;
        let sleep_ms = self.base_backoff_ms << (self.failures - 1).min(16);

        info!("unlock failure {}, backoff {}ms", self.failures, sleep_ms);

        on_failure(sleep_ms);
        false
    }
}
