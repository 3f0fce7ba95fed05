#![allow(unused)]

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use taplock_core::channel::Channel;
use taplock_core::display::{Area, Color, Display, Font, Icon};
use taplock_core::event::{Event, Point, TouchEvent};
use taplock_core::flow::Storage;
use taplock_core::platform::Driver;
use taplock_core::proto::{PinMatrixAck, Request, Response, ResponseKind};
use taplock_core::ui::pin::ScrambleMap;

pub fn init_logger() {
    let _ = simplelog::SimpleLogger::init(log::LevelFilter::Debug, Default::default());
}

/// Display implementation recording draw operations
#[derive(Default)]
pub struct TestDisplay {
    pub backlight_level: u8,
    pub bars: usize,
    pub texts: Vec<String>,
}

impl Display for TestDisplay {
    fn bar(&mut self, _x: i16, _y: i16, _w: i16, _h: i16, _color: Color) {
        self.bars += 1;
    }

    fn text(&mut self, _x: i16, _y: i16, text: &str, _font: Font, _fg: Color, _bg: Color) {
        self.texts.push(text.to_string());
    }

    fn text_center(&mut self, _x: i16, _y: i16, text: &str, _font: Font, _fg: Color, _bg: Color) {
        self.texts.push(text.to_string());
    }

    fn icon(&mut self, _x: i16, _y: i16, _icon: Icon, _fg: Color, _bg: Color) {}

    fn loader(
        &mut self,
        _progress: u32,
        _y_offset: i16,
        _fg: Color,
        _bg: Color,
        _icon: Option<Icon>,
        _icon_fg: Option<Color>,
    ) {
    }

    fn backlight(&self) -> u8 {
        self.backlight_level
    }

    fn set_backlight(&mut self, level: u8) {
        self.backlight_level = level;
    }
}

/// Driver implementation for test use, replaying a scripted event sequence
/// against a controllable clock
pub struct TestDriver {
    pub now: u32,
    pub script: VecDeque<(u32, Event)>,
    pub rng: StdRng,
    pub display: TestDisplay,
    gate: Rc<Cell<bool>>,
    require_gate: bool,
}

impl TestDriver {
    pub fn new(seed: u64) -> Self {
        Self {
            now: 0,
            script: VecDeque::new(),
            rng: StdRng::seed_from_u64(seed),
            display: TestDisplay::default(),
            gate: Rc::new(Cell::new(false)),
            require_gate: false,
        }
    }

    /// Append `(advance_ms, event)` steps to the script
    pub fn with_script(mut self, steps: &[(u32, Event)]) -> Self {
        self.script.extend(steps.iter().cloned());
        self
    }

    /// Fail the test if input is awaited before `gate` is set
    /// (set by [TestChannel] once the handshake completes)
    pub fn gated(mut self, gate: Rc<Cell<bool>>) -> Self {
        self.gate = gate;
        self.require_gate = true;
        self
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Driver for TestDriver {
    type Display = TestDisplay;
    type Rng = StdRng;

    fn display(&mut self) -> &mut TestDisplay {
        &mut self.display
    }

    fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    fn ticks_ms(&self) -> u32 {
        self.now
    }

    fn wait_event(&mut self) -> Event {
        if self.require_gate {
            assert!(
                self.gate.get(),
                "decision input awaited before host acknowledgment"
            );
        }

        let (advance, evt) = self.script.pop_front().expect("event script exhausted");
        self.now = self.now.wrapping_add(advance);

        trace!("step: {:?} at {}ms", evt, self.now);

        evt
    }
}

/// Channel implementation replaying scripted responses
pub struct TestChannel {
    pub responses: VecDeque<Response>,
    pub requests: Vec<Request>,
    pub gate: Rc<Cell<bool>>,
    pub fail: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ChannelClosed;

impl TestChannel {
    pub fn new(responses: &[Response]) -> Self {
        Self {
            responses: responses.iter().cloned().collect(),
            requests: Vec::new(),
            gate: Rc::new(Cell::new(false)),
            fail: false,
        }
    }

    /// Channel that errors on every call
    pub fn failing() -> Self {
        let mut c = Self::new(&[]);
        c.fail = true;
        c
    }
}

impl Channel for TestChannel {
    type Error = ChannelClosed;

    fn call(
        &mut self,
        req: Request,
        expected: &[ResponseKind],
    ) -> Result<Response, ChannelClosed> {
        debug!("request: {:?} (expecting {:?})", req, expected);

        self.requests.push(req);

        if self.fail {
            return Err(ChannelClosed);
        }

        let resp = self.responses.pop_front().expect("unscripted channel call");
        assert!(
            expected.contains(&resp.kind()),
            "scripted response {:?} not expected by caller",
            resp.kind()
        );

        // Open the input gate once the handshake has completed
        self.gate.set(true);

        Ok(resp)
    }
}

/// Storage implementation with scripted unlock outcomes
pub struct TestStorage {
    pub locked: bool,
    pub results: VecDeque<bool>,
    pub sleeps: VecDeque<u32>,
    pub attempts: Vec<String>,
}

impl TestStorage {
    pub fn new(locked: bool, results: &[bool], sleeps: &[u32]) -> Self {
        Self {
            locked,
            results: results.iter().cloned().collect(),
            sleeps: sleeps.iter().cloned().collect(),
            attempts: Vec::new(),
        }
    }
}

impl Storage for TestStorage {
    fn is_locked(&self) -> bool {
        self.locked
    }

    fn unlock<F: FnMut(u32)>(&mut self, pin: &str, mut on_failure: F) -> bool {
        self.attempts.push(pin.to_string());

        match self.results.pop_front().expect("unscripted unlock attempt") {
            true => {
                self.locked = false;
                true
            }
            false => {
                let sleep_ms = self.sleeps.pop_front().unwrap_or(0);
                on_failure(sleep_ms);
                false
            }
        }
    }
}

// Script building helpers

pub fn touch_start(p: Point) -> Event {
    Event::Touch(TouchEvent::Start(p))
}

pub fn touch_move(p: Point) -> Event {
    Event::Touch(TouchEvent::Move(p))
}

pub fn touch_end(p: Point) -> Event {
    Event::Touch(TouchEvent::End(p))
}

/// A point outside every action region
pub fn point_outside() -> Point {
    Point::new(2, 2)
}

/// A complete press / release on `area`
pub fn tap(area: Area) -> [(u32, Event); 2] {
    [
        (10, touch_start(area.center())),
        (60, touch_end(area.center())),
    ]
}

// Response constructors

pub fn button_ack() -> Response {
    Response::ButtonAck(Default::default())
}

pub fn cancel() -> Response {
    Response::Cancel(Default::default())
}

pub fn pin_ack(positions: &[u8], digits: ScrambleMap) -> Response {
    Response::PinMatrixAck(PinMatrixAck {
        pin: heapless::Vec::from_slice(positions).unwrap(),
        digits,
    })
}
