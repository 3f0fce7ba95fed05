// Copyright (c) 2025-2026 The Taplock Developers

//! Taplock authorization core
//!
//! This crate decides, via a touchscreen UI, whether a pending privileged
//! operation (signing, PIN change, wipe) is approved by the physical user,
//! and elicits the device PIN through an on-screen scrambled keypad.
//!
//! The engine is built from explicit state machines driven by a cooperative,
//! single-threaded event loop: a [`Widget`][ui::Widget] is rendered, the loop
//! suspends in [`Driver::wait_event`][platform::Driver::wait_event] until an
//! input event arrives, and the event is fed to the widget until it produces
//! a terminal result. There is no preemption; ordering is entirely determined
//! by suspension points.
//!
//! ## Operations
//!
//! High-level authorization flows live in [`flow`]:
//!
//! - [`confirm`][flow::confirm] / [`hold_to_confirm`][flow::hold_to_confirm] /
//!   [`require_confirm`][flow::require_confirm] drive a yes/no decision,
//!   preceded by a [`ButtonRequest`][proto::ButtonRequest] handshake with the
//!   host so that both sides agree a decision is being solicited.
//! - [`request_pin`][flow::request_pin] elicits the PIN either on-device
//!   (scrambled keypad, fresh permutation per render) or relayed through the
//!   host ([`PinMatrixRequest`][proto::PinMatrixRequest]).
//! - [`protect_by_pin_repeatedly`][flow::protect_by_pin_repeatedly] and
//!   [`protect_by_pin_or_fail`][flow::protect_by_pin_or_fail] gate privileged
//!   operations on the storage collaborator's unlock routine.
//!
//! Platform integration is provided through the [`Driver`][platform::Driver],
//! [`Display`][display::Display], [`Channel`][channel::Channel] and
//! [`Storage`][flow::Storage] seams; wire message framing, secure storage and
//! display primitives are external collaborators.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod channel;

pub mod display;

pub mod error;

pub mod event;

pub mod flow;

pub mod platform;

pub mod proto;

pub mod ui;

pub use error::Error;
