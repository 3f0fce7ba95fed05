// Copyright (c) 2025-2026 The Taplock Developers

//! Unlock protection tests: single-attempt and retry-until-success
//! policies plus the rendered lockout backoff

use taplock_core::event::Event;
use taplock_core::flow::{protect_by_pin_or_fail, protect_by_pin_repeatedly, PinEntryMode, Storage};
use taplock_core::ui::pin::ScrambleMap;
use taplock_core::Error;

mod helpers;
use helpers::*;

#[test]
fn unlocked_storage_skips_the_prompt() -> anyhow::Result<()> {
    init_logger();

    let mut channel = TestChannel::new(&[]);
    let mut drv = TestDriver::new(30);
    let mut storage = TestStorage::new(false, &[], &[]);

    protect_by_pin_or_fail(
        &mut drv,
        &mut channel,
        &mut storage,
        PinEntryMode::Host,
        false,
    )?;

    assert!(channel.requests.is_empty());
    assert!(storage.attempts.is_empty());

    Ok(())
}

#[test]
fn single_attempt_failure_is_terminal() {
    init_logger();

    let mut channel = TestChannel::new(&[pin_ack(&[1, 2, 3, 4], ScrambleMap::identity(9))]);
    // Two ticker frames walk the clock past the 100ms backoff
    let mut drv =
        TestDriver::new(31).with_script(&[(50, Event::Ticker), (60, Event::Ticker)]);
    let mut storage = TestStorage::new(true, &[false], &[100]);

    let r = protect_by_pin_or_fail(
        &mut drv,
        &mut channel,
        &mut storage,
        PinEntryMode::Host,
        false,
    );

    assert_eq!(r, Err(Error::PinInvalid));
    assert_eq!(storage.attempts, vec!["1234".to_string()]);

    // The backoff notice was rendered before failing
    assert!(drv
        .display
        .texts
        .iter()
        .any(|t| t == "Sleeping for 1 s"));
    assert_eq!(drv.remaining(), 0);
}

#[test]
fn repeated_attempts_until_unlock() -> anyhow::Result<()> {
    init_logger();

    let mut channel = TestChannel::new(&[
        pin_ack(&[1, 1, 1, 1], ScrambleMap::identity(9)),
        pin_ack(&[2, 2, 2, 2], ScrambleMap::identity(9)),
    ]);
    let mut drv =
        TestDriver::new(32).with_script(&[(1100, Event::Ticker), (1000, Event::Ticker)]);
    let mut storage = TestStorage::new(true, &[false, true], &[2000]);

    protect_by_pin_repeatedly(
        &mut drv,
        &mut channel,
        &mut storage,
        PinEntryMode::Host,
        false,
    )?;

    assert_eq!(
        storage.attempts,
        vec!["1111".to_string(), "2222".to_string()]
    );
    assert!(!storage.is_locked());

    // The countdown stepped from 2s to 1s while waiting out the backoff
    assert!(drv.display.texts.iter().any(|t| t == "Sleeping for 2 s"));
    assert!(drv.display.texts.iter().any(|t| t == "Sleeping for 1 s"));

    Ok(())
}

#[test]
fn at_least_once_prompts_even_when_unlocked() -> anyhow::Result<()> {
    init_logger();

    let mut channel = TestChannel::new(&[pin_ack(&[1, 2, 3, 4], ScrambleMap::identity(9))]);
    let mut drv = TestDriver::new(33);
    let mut storage = TestStorage::new(false, &[true], &[]);

    protect_by_pin_repeatedly(
        &mut drv,
        &mut channel,
        &mut storage,
        PinEntryMode::Host,
        true,
    )?;

    assert_eq!(storage.attempts, vec!["1234".to_string()]);

    Ok(())
}
