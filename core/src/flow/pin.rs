// Copyright (c) 2025-2026 The Taplock Developers

use strum::Display;

use emstr::EncodeStr;

use crate::channel::Channel;
use crate::display::{Display as _, Font, SCREEN};
use crate::error::Error;
use crate::platform::Driver;
use crate::proto::{
    PinMatrixRequest, PinMatrixRequestType, Request, Response, ResponseKind,
};
use crate::ui::pin::{Pin, PinDialog, PinMatrix, ScrambleMap};
use crate::ui::{run_widget, theme, DialogResult, Widget};

use super::button_request;
use crate::proto::ButtonRequestType;

/// Where PIN digits are elicited
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
pub enum PinEntryMode {
    /// Scrambled keypad on the device touchscreen
    Device,
    /// Relayed through the host via PinMatrixRequest / PinMatrixAck
    Host,
}

/// Secure storage collaborator contract.
///
/// `unlock` invokes `on_failure` synchronously with the backoff duration
/// before returning false; attempt counting and lockout escalation live
/// behind this trait.
pub trait Storage {
    fn is_locked(&self) -> bool;

    fn unlock<F: FnMut(u32)>(&mut self, pin: &str, on_failure: F) -> bool;
}

fn pin_label(kind: PinMatrixRequestType) -> &'static str {
    match kind {
        PinMatrixRequestType::Current => "Enter PIN",
        PinMatrixRequestType::NewFirst => "Enter new PIN",
        PinMatrixRequestType::NewSecond => "Enter PIN again",
    }
}

/// Elicit a PIN from the user.
///
/// Device mode runs the scrambled keypad dialog after a ProtectCall
/// handshake; host mode shows a label-only placeholder and waits for the
/// host's PinMatrixAck or Cancel.
pub fn request_pin<D: Driver, C: Channel>(
    drv: &mut D,
    channel: &mut C,
    kind: PinMatrixRequestType,
    mode: PinEntryMode,
) -> Result<Pin, Error<C::Error>> {
    #[cfg(feature = "log")]
    log::debug!("pin request: {} ({})", kind, mode);

    match mode {
        PinEntryMode::Device => request_pin_on_device(drv, channel, kind),
        PinEntryMode::Host => request_pin_on_host(drv, channel, kind),
    }
}

fn request_pin_on_device<D: Driver, C: Channel>(
    drv: &mut D,
    channel: &mut C,
    kind: PinMatrixRequestType,
) -> Result<Pin, Error<C::Error>> {
    drv.display().clear();

    let mut dialog = PinDialog::new(pin_label(kind), true);
    dialog.render(drv);

    button_request(channel, ButtonRequestType::ProtectCall)?;

    match run_widget(drv, &mut dialog) {
        DialogResult::Confirmed => Ok(dialog.pin()),
        DialogResult::Cancelled => Err(Error::PinCancelled),
    }
}

fn request_pin_on_host<D: Driver, C: Channel>(
    drv: &mut D,
    channel: &mut C,
    kind: PinMatrixRequestType,
) -> Result<Pin, Error<C::Error>> {
    drv.display().clear();

    let mut matrix = PinMatrix::placeholder(pin_label(kind));
    matrix.render(drv);

    let resp = channel
        .call(
            Request::PinMatrix(PinMatrixRequest { kind }),
            &[ResponseKind::PinMatrixAck, ResponseKind::Cancel],
        )
        .map_err(Error::Transport)?;

    match resp {
        Response::PinMatrixAck(ack) => decode_host_pin(&ack.pin, &ack.digits),
        Response::Cancel(_) => Err(Error::PinCancelled),
        _ => Err(Error::UnexpectedResponse),
    }
}

/// Resolve host-relayed positions (`1..=9`) against the host-supplied map
fn decode_host_pin<E: core::fmt::Debug>(
    positions: &[u8],
    digits: &ScrambleMap,
) -> Result<Pin, Error<E>> {
    if positions.is_empty() {
        return Err(Error::PinCancelled);
    }

    let mut pin = Pin::new();
    for p in positions {
        let d = p
            .checked_sub(1)
            .and_then(|i| digits.digit(i as usize))
            .ok_or(Error::UnexpectedResponse)?;

        pin.push((b'0' + d) as char)
            .map_err(|_| Error::UnexpectedResponse)?;
    }

    Ok(pin)
}

/// Prompt for a new PIN twice; the two entries must agree.
///
/// A mismatch rejects the change with [`Error::ActionCancelled`].
pub fn request_pin_twice<D: Driver, C: Channel>(
    drv: &mut D,
    channel: &mut C,
    mode: PinEntryMode,
) -> Result<Pin, Error<C::Error>> {
    let first = request_pin(drv, channel, PinMatrixRequestType::NewFirst, mode)?;
    let again = request_pin(drv, channel, PinMatrixRequestType::NewSecond, mode)?;

    if first != again {
        #[cfg(feature = "log")]
        log::debug!("pin change rejected: entries differ");

        return Err(Error::ActionCancelled);
    }

    Ok(first)
}

/// Prompt and attempt unlock until the storage collaborator reports
/// success.
///
/// No attempt cap is imposed here; the storage collaborator's escalating
/// backoff (rendered as a blocking countdown on each failure) is the sole
/// throttle.
pub fn protect_by_pin_repeatedly<D: Driver, C: Channel, S: Storage>(
    drv: &mut D,
    channel: &mut C,
    storage: &mut S,
    mode: PinEntryMode,
    at_least_once: bool,
) -> Result<(), Error<C::Error>> {
    let mut locked = storage.is_locked() || at_least_once;

    while locked {
        let pin = request_pin(drv, channel, PinMatrixRequestType::Current, mode)?;
        locked = !storage.unlock(&pin, |sleep_ms| render_backoff(drv, sleep_ms));
    }

    Ok(())
}

/// Single unlock attempt; failure is terminal with [`Error::PinInvalid`].
///
/// Returns without prompting when storage is already unlocked and
/// `at_least_once` is not set.
pub fn protect_by_pin_or_fail<D: Driver, C: Channel, S: Storage>(
    drv: &mut D,
    channel: &mut C,
    storage: &mut S,
    mode: PinEntryMode,
    at_least_once: bool,
) -> Result<(), Error<C::Error>> {
    if !storage.is_locked() && !at_least_once {
        return Ok(());
    }

    let pin = request_pin(drv, channel, PinMatrixRequestType::Current, mode)?;

    match storage.unlock(&pin, |sleep_ms| render_backoff(drv, sleep_ms)) {
        true => Ok(()),
        false => Err(Error::PinInvalid),
    }
}

/// Blocking lockout notice: draws the remaining backoff and consumes
/// events until it elapses.
pub fn render_backoff<D: Driver>(drv: &mut D, sleep_ms: u32) {
    #[cfg(feature = "log")]
    log::debug!("unlock failed, backing off {}ms", sleep_ms);

    let start = drv.ticks_ms();
    let mut shown = u32::MAX;

    loop {
        let elapsed = drv.ticks_ms().wrapping_sub(start);
        if elapsed >= sleep_ms {
            break;
        }

        // Round the countdown up so it never shows zero while waiting
        let remaining_s = (sleep_ms - elapsed + 999) / 1000;
        if remaining_s != shown {
            shown = remaining_s;

            let mut buff = [0u8; 32];
            let msg = fmt_backoff(remaining_s, &mut buff);

            let display = drv.display();
            display.bar(0, 0, SCREEN, SCREEN, theme::BLACK);
            display.text_center(
                SCREEN / 2,
                SCREEN / 2,
                msg,
                Font::Bold,
                theme::RED,
                theme::BLACK,
            );
        }

        let _ = drv.wait_event();
    }

    drv.display().clear();
}

fn fmt_backoff(secs: u32, buff: &mut [u8]) -> &str {
    let n = match emstr::write!(&mut buff[..], "Sleeping for ", secs, " s") {
        Ok(v) => v,
        Err(_) => return "ENCODE_ERR",
    };

    match core::str::from_utf8(&buff[..n]) {
        Ok(v) => v,
        Err(_) => "INVALID_UTF8",
    }
}
