// Copyright (c) 2025-2026 The Taplock Developers

use crate::channel::Channel;
use crate::display::Display as _;
use crate::error::Error;
use crate::platform::Driver;
use crate::proto::{ButtonRequest, ButtonRequestType, Request, Response, ResponseKind};
use crate::ui::{
    run_widget, ConfirmDialog, DialogResult, HoldToConfirmDialog, Widget,
};

/// Issue a [`ButtonRequest`] and suspend until the host acknowledges.
///
/// This is the blocking prerequisite of every confirmation or PIN prompt:
/// the host must register that a decision is pending before the device
/// commits to waiting on the user.
pub fn button_request<C: Channel>(
    channel: &mut C,
    code: ButtonRequestType,
) -> Result<(), Error<C::Error>> {
    #[cfg(feature = "log")]
    log::debug!("button request: {}", code);

    let resp = channel
        .call(
            Request::Button(ButtonRequest { code }),
            &[ResponseKind::ButtonAck],
        )
        .map_err(Error::Transport)?;

    match resp {
        Response::ButtonAck(_) => Ok(()),
        _ => Err(Error::UnexpectedResponse),
    }
}

/// Ask the user to confirm or reject `content`.
///
/// Returns true iff the dialog terminates confirmed. The dialog is rendered
/// before the handshake, but the decision wait only starts once the host
/// has acknowledged.
pub fn confirm<D, C, W>(
    drv: &mut D,
    channel: &mut C,
    content: W,
    code: Option<ButtonRequestType>,
) -> Result<bool, Error<C::Error>>
where
    D: Driver,
    C: Channel,
    W: Widget<Output = DialogResult>,
{
    drv.display().clear();

    let mut dialog = ConfirmDialog::new(content);
    dialog.render(drv);

    button_request(channel, code.unwrap_or(ButtonRequestType::Other))?;

    let result = run_widget(drv, &mut dialog);

    #[cfg(feature = "log")]
    log::debug!("confirm result: {:?}", result);

    Ok(result == DialogResult::Confirmed)
}

/// Like [`confirm`], but requiring a sustained press of `hold_ms` before
/// the confirmed outcome is reachable; releasing early resets the hold.
pub fn hold_to_confirm<D, C, W>(
    drv: &mut D,
    channel: &mut C,
    content: W,
    label: &'static str,
    hold_ms: u32,
    code: Option<ButtonRequestType>,
) -> Result<bool, Error<C::Error>>
where
    D: Driver,
    C: Channel,
    W: Widget<Output = DialogResult>,
{
    drv.display().clear();

    let mut dialog = HoldToConfirmDialog::with_hold_ms(content, label, hold_ms);
    dialog.render(drv);

    button_request(channel, code.unwrap_or(ButtonRequestType::Other))?;

    let result = run_widget(drv, &mut dialog);

    #[cfg(feature = "log")]
    log::debug!("hold-to-confirm result: {:?}", result);

    Ok(result == DialogResult::Confirmed)
}

/// Single enforcement point for privileged operations: fails with
/// [`Error::ActionCancelled`] unless the user explicitly confirms.
pub fn require_confirm<D, C, W>(
    drv: &mut D,
    channel: &mut C,
    content: W,
    code: Option<ButtonRequestType>,
) -> Result<(), Error<C::Error>>
where
    D: Driver,
    C: Channel,
    W: Widget<Output = DialogResult>,
{
    match confirm(drv, channel, content, code)? {
        true => Ok(()),
        false => Err(Error::ActionCancelled),
    }
}
