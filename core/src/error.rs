// Copyright (c) 2025-2026 The Taplock Developers

use core::fmt::Debug;

use crate::proto::FailureType;

/// Authorization flow errors
///
/// Generic over the transport error of the [`Channel`][crate::channel::Channel]
/// in use; channel failures are never masked as user-facing failures.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "thiserror", derive(thiserror::Error))]
pub enum Error<E: Debug> {
    /// Channel / transport failure, handshake never acknowledged
    #[cfg_attr(feature = "thiserror", error("transport error: {0:?}"))]
    Transport(E),

    /// User explicitly declined, or PIN-change confirmation mismatch
    #[cfg_attr(feature = "thiserror", error("action cancelled by user"))]
    ActionCancelled,

    /// User aborted PIN entry with no digits, or host sent Cancel
    #[cfg_attr(feature = "thiserror", error("PIN entry cancelled"))]
    PinCancelled,

    /// Single-attempt unlock failed
    #[cfg_attr(feature = "thiserror", error("PIN invalid"))]
    PinInvalid,

    /// Response message did not match the expected acknowledgment
    #[cfg_attr(feature = "thiserror", error("unexpected response message"))]
    UnexpectedResponse,
}

impl<E: Debug> Error<E> {
    /// Map to the wire-level [`FailureType`] reported to the host.
    ///
    /// Transport errors have no wire representation, the channel layer
    /// owns those.
    pub fn failure_type(&self) -> Option<FailureType> {
        match self {
            Error::Transport(_) => None,
            Error::ActionCancelled => Some(FailureType::ActionCancelled),
            Error::PinCancelled => Some(FailureType::PinCancelled),
            Error::PinInvalid => Some(FailureType::PinInvalid),
            Error::UnexpectedResponse => Some(FailureType::UnexpectedMessage),
        }
    }
}
