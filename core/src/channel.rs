// Copyright (c) 2025-2026 The Taplock Developers

use core::fmt::Debug;

use crate::proto::{Request, Response, ResponseKind};

/// Host channel contract, implemented by the transport layer.
///
/// `call` sends a request and suspends the caller until a message matching
/// one of `expected` arrives, or the channel errors. No retry is attempted
/// at this layer; reconnection is owned by the channel / session layer and
/// failures propagate to the flow caller as
/// [`Error::Transport`][crate::Error::Transport].
pub trait Channel {
    type Error: Debug;

    fn call(&mut self, req: Request, expected: &[ResponseKind])
        -> Result<Response, Self::Error>;
}

impl<T: Channel> Channel for &mut T {
    type Error = T::Error;

    fn call(
        &mut self,
        req: Request,
        expected: &[ResponseKind],
    ) -> Result<Response, Self::Error> {
        T::call(self, req, expected)
    }
}
