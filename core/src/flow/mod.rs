// Copyright (c) 2025-2026 The Taplock Developers

//! Authorization flows: the operations application code calls into.
//!
//! Every flow issues its request/acknowledge handshake on the host channel
//! strictly before the widget loop starts accepting the user's decision,
//! and maps the terminal widget state to a result or a typed failure.

mod confirm;
pub use confirm::*;

mod pin;
pub use pin::*;
