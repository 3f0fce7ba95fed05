// Copyright (c) 2025-2026 The Taplock Developers

//! Scrambled PIN entry tests: per-render permutations, capture-at-touch
//! decoding, the clear/cancel gesture split and both entry modes

use taplock_core::flow::{request_pin, request_pin_twice, PinEntryMode};
use taplock_core::proto::{
    ButtonRequest, ButtonRequestType, PinMatrixRequest, PinMatrixRequestType, Request,
};
use taplock_core::ui::pin::{
    cell_area, PinDialog, PinMatrix, ScrambleMap, PIN_CANCEL_AREA, PIN_CONFIRM_AREA,
};
use taplock_core::event::Point;
use taplock_core::ui::{DialogResult, UiResult, Widget};
use taplock_core::Error;

mod helpers;
use helpers::*;

#[test]
fn scramble_is_a_permutation_and_regenerates_per_render() {
    init_logger();

    let mut drv = TestDriver::new(10);
    let mut matrix = PinMatrix::new("Enter PIN", true);

    let mut maps = Vec::new();
    for _ in 0..4 {
        matrix.render(&mut drv);
        maps.push(*matrix.scramble());
    }

    for map in &maps {
        let mut digits: Vec<u8> = (0..map.len()).map(|p| map.digit(p).unwrap()).collect();
        digits.sort();
        assert_eq!(digits, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    for pair in maps.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

#[test]
fn entries_decode_against_the_render_they_landed_on() {
    init_logger();

    let mut drv = TestDriver::new(11);
    let mut matrix = PinMatrix::new("Enter PIN", true);

    matrix.render(&mut drv);
    let first_map = *matrix.scramble();
    assert_eq!(
        matrix.update(&touch_end(cell_area(4).center()), 0),
        UiResult::Update
    );

    // The redraw reshuffles, but the first entry keeps its own map
    matrix.render(&mut drv);
    let second_map = *matrix.scramble();
    assert_eq!(
        matrix.update(&touch_end(cell_area(7).center()), 0),
        UiResult::Update
    );

    let expected = format!(
        "{}{}",
        first_map.digit(4).unwrap(),
        second_map.digit(7).unwrap()
    );
    assert_eq!(matrix.pin().as_str(), expected);
}

#[test]
fn matrix_ignores_input_once_full() {
    init_logger();

    let mut drv = TestDriver::new(12);
    let mut matrix = PinMatrix::new("Enter PIN", true);
    matrix.render(&mut drv);

    for _ in 0..9 {
        assert_eq!(
            matrix.update(&touch_end(cell_area(0).center()), 0),
            UiResult::Update
        );
    }

    assert!(matrix.is_full());
    assert_eq!(
        matrix.update(&touch_end(cell_area(0).center()), 0),
        UiResult::None
    );
    assert_eq!(matrix.len(), 9);
}

#[test]
fn placeholder_matrix_ignores_touches() {
    init_logger();

    let mut matrix = PinMatrix::placeholder("Enter PIN");

    assert_eq!(
        matrix.update(&touch_end(cell_area(4).center()), 0),
        UiResult::None
    );
    assert!(matrix.is_empty());
}

#[test]
fn dialog_confirm_with_empty_buffer_is_ignored() {
    init_logger();

    let mut drv = TestDriver::new(13);
    let mut dialog = PinDialog::new("Enter PIN", true);
    dialog.render(&mut drv);

    // Confirm is disabled until a digit is typed
    let p = PIN_CONFIRM_AREA.center();
    assert_eq!(dialog.update(&touch_start(p), 0), UiResult::None);
    assert_eq!(dialog.update(&touch_end(p), 50), UiResult::None);

    // A digit makes confirm decisive
    dialog.update(&touch_end(cell_area(2).center()), 100);
    assert_eq!(dialog.update(&touch_start(p), 150), UiResult::Update);
    assert_eq!(
        dialog.update(&touch_end(p), 200),
        UiResult::Exit(DialogResult::Confirmed)
    );
    assert_eq!(dialog.pin().len(), 1);
}

#[test]
fn bottom_row_boundary_touch_hits_the_zero_key() {
    init_logger();

    let mut drv = TestDriver::new(23);
    let mut dialog = PinDialog::new("Enter PIN", true);
    dialog.render(&mut drv);

    // x=80 on the bottom strip is the zero key's left edge, not cancel's
    assert_eq!(
        dialog.update(&touch_end(Point::new(80, 215)), 0),
        UiResult::Update
    );
    assert_eq!(dialog.matrix().len(), 1);

    // x=160 belongs to confirm, not the zero key
    let r = dialog.update(&touch_start(Point::new(160, 215)), 50);
    assert_eq!(r, UiResult::Update);
    assert_eq!(
        dialog.update(&touch_end(Point::new(160, 215)), 100),
        UiResult::Exit(DialogResult::Confirmed)
    );
}

#[test]
fn dialog_cancel_clears_first_then_cancels() {
    init_logger();

    let mut drv = TestDriver::new(14);
    let mut dialog = PinDialog::new("Enter PIN", true);
    dialog.render(&mut drv);

    dialog.update(&touch_end(cell_area(5).center()), 0);
    dialog.update(&touch_end(cell_area(6).center()), 50);
    assert_eq!(dialog.matrix().len(), 2);

    // First cancel gesture only clears the buffer
    let p = PIN_CANCEL_AREA.center();
    dialog.update(&touch_start(p), 100);
    assert_eq!(dialog.update(&touch_end(p), 150), UiResult::Update);
    assert!(dialog.matrix().is_empty());

    // Second cancel gesture, on the empty buffer, is terminal
    dialog.update(&touch_start(p), 200);
    assert_eq!(
        dialog.update(&touch_end(p), 250),
        UiResult::Exit(DialogResult::Cancelled)
    );
}

#[test]
fn device_pin_entry_single_handshake() -> anyhow::Result<()> {
    init_logger();

    let mut channel = TestChannel::new(&[button_ack()]);
    let mut drv = TestDriver::new(15)
        .gated(channel.gate.clone())
        .with_script(&tap(cell_area(0)))
        .with_script(&tap(cell_area(4)))
        .with_script(&tap(PIN_CONFIRM_AREA));

    let pin = request_pin(
        &mut drv,
        &mut channel,
        PinMatrixRequestType::Current,
        PinEntryMode::Device,
    )?;

    assert_eq!(pin.len(), 2);
    assert!(pin.chars().all(|c| c.is_ascii_digit()));

    // One ProtectCall handshake covers the whole entry session
    assert_eq!(
        channel.requests,
        vec![Request::Button(ButtonRequest {
            code: ButtonRequestType::ProtectCall
        })],
    );

    Ok(())
}

#[test]
fn device_cancel_on_empty_buffer_fails_entry() {
    init_logger();

    let mut channel = TestChannel::new(&[button_ack()]);
    let mut drv = TestDriver::new(16).with_script(&tap(PIN_CANCEL_AREA));

    let r = request_pin(
        &mut drv,
        &mut channel,
        PinMatrixRequestType::Current,
        PinEntryMode::Device,
    );

    assert_eq!(r, Err(Error::PinCancelled));
}

#[test]
fn host_pin_entry_decodes_positions() -> anyhow::Result<()> {
    init_logger();

    let mut channel = TestChannel::new(&[pin_ack(&[1, 2, 3, 4], ScrambleMap::identity(9))]);
    let mut drv = TestDriver::new(17);

    let pin = request_pin(
        &mut drv,
        &mut channel,
        PinMatrixRequestType::Current,
        PinEntryMode::Host,
    )?;

    assert_eq!(pin.as_str(), "1234");
    assert_eq!(
        channel.requests,
        vec![Request::PinMatrix(PinMatrixRequest {
            kind: PinMatrixRequestType::Current
        })],
    );

    Ok(())
}

#[test]
fn host_pin_decodes_against_the_host_map() -> anyhow::Result<()> {
    init_logger();

    let map = ScrambleMap::from_digits(&[9, 8, 7, 6, 5, 4, 3, 2, 1])
        .ok_or_else(|| anyhow::anyhow!("invalid map"))?;
    let mut channel = TestChannel::new(&[pin_ack(&[1, 2, 3, 4], map)]);
    let mut drv = TestDriver::new(22);

    let pin = request_pin(
        &mut drv,
        &mut channel,
        PinMatrixRequestType::Current,
        PinEntryMode::Host,
    )?;

    assert_eq!(pin.as_str(), "9876");

    Ok(())
}

#[test]
fn host_cancel_fails_entry() {
    init_logger();

    let mut channel = TestChannel::new(&[cancel()]);
    let mut drv = TestDriver::new(18);

    let r = request_pin(
        &mut drv,
        &mut channel,
        PinMatrixRequestType::Current,
        PinEntryMode::Host,
    );

    assert_eq!(r, Err(Error::PinCancelled));
}

#[test]
fn host_empty_ack_cancels_entry() {
    init_logger();

    let mut channel = TestChannel::new(&[pin_ack(&[], ScrambleMap::identity(9))]);
    let mut drv = TestDriver::new(24);

    let r = request_pin(
        &mut drv,
        &mut channel,
        PinMatrixRequestType::Current,
        PinEntryMode::Host,
    );

    assert_eq!(r, Err(Error::PinCancelled));
}

#[test]
fn host_positions_out_of_range_are_rejected() {
    init_logger();

    for bad in [&[0u8][..], &[10u8][..]] {
        let mut channel = TestChannel::new(&[pin_ack(bad, ScrambleMap::identity(9))]);
        let mut drv = TestDriver::new(19);

        let r = request_pin(
            &mut drv,
            &mut channel,
            PinMatrixRequestType::Current,
            PinEntryMode::Host,
        );

        assert_eq!(r, Err(Error::UnexpectedResponse));
    }
}

#[test]
fn pin_change_requires_matching_entries() -> anyhow::Result<()> {
    init_logger();

    let mut channel = TestChannel::new(&[
        pin_ack(&[1, 2, 3, 4], ScrambleMap::identity(9)),
        pin_ack(&[1, 2, 3, 4], ScrambleMap::identity(9)),
    ]);
    let mut drv = TestDriver::new(20);

    let pin = request_pin_twice(&mut drv, &mut channel, PinEntryMode::Host)?;

    assert_eq!(pin.as_str(), "1234");
    assert_eq!(
        channel.requests,
        vec![
            Request::PinMatrix(PinMatrixRequest {
                kind: PinMatrixRequestType::NewFirst
            }),
            Request::PinMatrix(PinMatrixRequest {
                kind: PinMatrixRequestType::NewSecond
            }),
        ],
    );

    Ok(())
}

#[test]
fn pin_change_mismatch_is_rejected() {
    init_logger();

    let mut channel = TestChannel::new(&[
        pin_ack(&[1, 2, 3, 4], ScrambleMap::identity(9)),
        pin_ack(&[5, 6, 7, 8], ScrambleMap::identity(9)),
    ]);
    let mut drv = TestDriver::new(21);

    let r = request_pin_twice(&mut drv, &mut channel, PinEntryMode::Host);

    assert_eq!(r, Err(Error::ActionCancelled));
}
