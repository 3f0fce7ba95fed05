// Copyright (c) 2025-2026 The Taplock Developers

//! Request / acknowledgment message shapes exchanged with the host.
//!
//! Only the fields are modeled here; encoding, framing and session
//! management belong to the transport layer.

use heapless::Vec;
use num_enum::TryFromPrimitive;
use strum::{Display, EnumIter, EnumString};

use crate::ui::pin::{ScrambleMap, MAX_PIN_LEN};

/// Reason codes carried by a [`ButtonRequest`]
#[derive(Copy, Clone, PartialEq, Eq, Debug, EnumString, Display, EnumIter, TryFromPrimitive)]
#[repr(u8)]
pub enum ButtonRequestType {
    Other = 0x01,
    FeeOverThreshold = 0x02,
    ConfirmOutput = 0x03,
    ResetDevice = 0x04,
    ConfirmWord = 0x05,
    WipeDevice = 0x06,
    ProtectCall = 0x07,
    SignTx = 0x08,
    Address = 0x0a,
    PublicKey = 0x0b,
}

/// Which logical PIN prompt a [`PinMatrixRequest`] solicits
#[derive(Copy, Clone, PartialEq, Eq, Debug, EnumString, Display, EnumIter, TryFromPrimitive)]
#[repr(u8)]
pub enum PinMatrixRequestType {
    Current = 0x01,
    NewFirst = 0x02,
    NewSecond = 0x03,
}

/// Failure codes reported to the host when a flow terminates with an error
#[derive(Copy, Clone, PartialEq, Eq, Debug, EnumString, Display, EnumIter, TryFromPrimitive)]
#[repr(u8)]
pub enum FailureType {
    UnexpectedMessage = 0x01,
    ActionCancelled = 0x04,
    PinExpected = 0x05,
    PinCancelled = 0x06,
    PinInvalid = 0x07,
}

/// Request for host acknowledgment that a decision is being solicited
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ButtonRequest {
    pub code: ButtonRequestType,
}

/// Host acknowledgment of a [`ButtonRequest`]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct ButtonAck;

/// Request for host-relayed PIN entry
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PinMatrixRequest {
    pub kind: PinMatrixRequestType,
}

/// Host-relayed PIN entry result
///
/// `pin` carries keypad positions (`1..=9`, already scrambled on the host
/// side), `digits` the position-to-digit map the host used. The decoded PIN
/// is only materialized by the flow at the moment it is needed.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PinMatrixAck {
    pub pin: Vec<u8, MAX_PIN_LEN>,
    pub digits: ScrambleMap,
}

/// Host-side abort of a pending prompt
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Cancel;

/// Messages sent to the host
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Request {
    Button(ButtonRequest),
    PinMatrix(PinMatrixRequest),
}

/// Messages received from the host
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Response {
    ButtonAck(ButtonAck),
    PinMatrixAck(PinMatrixAck),
    Cancel(Cancel),
}

/// Response discriminants, used to declare which acknowledgments a
/// [`Channel::call`][crate::channel::Channel::call] will accept
#[derive(Copy, Clone, PartialEq, Eq, Debug, Display, EnumIter)]
pub enum ResponseKind {
    ButtonAck,
    PinMatrixAck,
    Cancel,
}

impl Response {
    pub fn kind(&self) -> ResponseKind {
        match self {
            Response::ButtonAck(_) => ResponseKind::ButtonAck,
            Response::PinMatrixAck(_) => ResponseKind::PinMatrixAck,
            Response::Cancel(_) => ResponseKind::Cancel,
        }
    }
}
