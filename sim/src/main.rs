// Copyright (c) 2025-2026 The Taplock Developers

use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use strum::Display;

use taplock_core::display::Icon;
use taplock_core::event::{Event, Point, TouchEvent};
use taplock_core::flow::{
    hold_to_confirm, protect_by_pin_repeatedly, request_pin, request_pin_twice, require_confirm,
    PinEntryMode,
};
use taplock_core::proto::{ButtonRequestType, PinMatrixRequestType};
use taplock_core::ui::pin::{cell_area, PIN_CONFIRM_AREA};
use taplock_core::ui::{helpers, theme, Text, CANCEL_BTN_AREA, CONFIRM_BTN_AREA, HOLD_BTN_AREA};

mod platform;
use platform::*;

/// Taplock flow simulator
///
/// Runs a single authorization flow against scripted touch input and an
/// auto-acknowledging host, tracing widget activity to the log.
#[derive(Clone, Debug, PartialEq, Parser)]
pub struct Args {
    #[clap(subcommand)]
    scenario: Scenario,

    /// RNG seed for keypad scrambling
    #[clap(long, default_value = "0")]
    seed: u64,

    /// Log level
    #[clap(long, default_value = "debug")]
    log_level: LevelFilter,
}

#[derive(Clone, Debug, PartialEq, Subcommand, Display)]
pub enum Scenario {
    /// Confirm dialog, scripted to accept (or reject with --cancel)
    Confirm {
        #[clap(long)]
        cancel: bool,
    },

    /// Hold-to-confirm with one aborted and one sustained press
    Hold {
        #[clap(long, default_value = "1000")]
        hold_ms: u32,
    },

    /// On-device PIN entry with `taps` scripted keypad presses
    Pin {
        #[clap(long, default_value = "4")]
        taps: u8,
    },

    /// Host-relayed PIN change, entered twice
    PinChange {
        #[clap(long, default_value = "1234")]
        pin: String,
    },

    /// Unlock with `failures` wrong host entries before the right one
    Unlock {
        #[clap(long, default_value = "1234")]
        pin: String,

        #[clap(long, default_value = "2")]
        failures: u32,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let _ = simplelog::SimpleLogger::init(args.log_level, Default::default());

    info!("running scenario: {}", args.scenario);

    let mut drv = SimDriver::new(args.seed);
    let mut channel = SimChannel::new();

    // Wake the screen the way the firmware does on boot
    helpers::backlight_slide(&mut drv, theme::BACKLIGHT_NORMAL, 1);

    match args.scenario {
        Scenario::Confirm { cancel } => run_confirm(&mut drv, &mut channel, cancel)?,
        Scenario::Hold { hold_ms } => run_hold(&mut drv, &mut channel, hold_ms)?,
        Scenario::Pin { taps } => run_pin(&mut drv, &mut channel, taps)?,
        Scenario::PinChange { pin } => run_pin_change(&mut drv, &mut channel, &pin)?,
        Scenario::Unlock { pin, failures } => {
            run_unlock(&mut drv, &mut channel, &pin, failures)?
        }
    }

    Ok(())
}

fn tap(drv: &mut SimDriver, at_ms: u32, p: Point) {
    drv.schedule(at_ms, Event::Touch(TouchEvent::Start(p)));
    drv.schedule(at_ms + 80, Event::Touch(TouchEvent::End(p)));
}

fn run_confirm(drv: &mut SimDriver, channel: &mut SimChannel, cancel: bool) -> anyhow::Result<()> {
    let content = Text::new("Wipe device", &["Do you really want to", "wipe the device?"])
        .with_icon(Icon::Wipe);

    match cancel {
        true => tap(drv, 200, CANCEL_BTN_AREA.center()),
        false => tap(drv, 200, CONFIRM_BTN_AREA.center()),
    };

    let r = require_confirm(drv, channel, content, Some(ButtonRequestType::WipeDevice));

    info!("confirm outcome: {:?}", r);

    Ok(())
}

fn run_hold(drv: &mut SimDriver, channel: &mut SimChannel, hold_ms: u32) -> anyhow::Result<()> {
    let content = Text::new("Reset device", &["Do you really want to", "reset the device?"])
        .with_icon(Icon::Reset);
    let p = HOLD_BTN_AREA.center();

    // One press released at half the threshold, then one sustained
    drv.schedule(200, Event::Touch(TouchEvent::Start(p)));
    drv.schedule(200 + hold_ms / 2, Event::Touch(TouchEvent::End(p)));
    drv.schedule(1000 + hold_ms, Event::Touch(TouchEvent::Start(p)));
    drv.schedule(1200 + 2 * hold_ms, Event::Touch(TouchEvent::End(p)));

    let confirmed = hold_to_confirm(
        drv,
        channel,
        content,
        "Hold to confirm",
        hold_ms,
        Some(ButtonRequestType::ResetDevice),
    )?;

    info!("hold outcome: confirmed={}", confirmed);

    Ok(())
}

fn run_pin(drv: &mut SimDriver, channel: &mut SimChannel, taps: u8) -> anyhow::Result<()> {
    let mut at = 200;
    for i in 0..taps.min(9) {
        tap(drv, at, cell_area(i % 9).center());
        at += 200;
    }
    tap(drv, at, PIN_CONFIRM_AREA.center());

    let r = request_pin(
        drv,
        channel,
        PinMatrixRequestType::Current,
        PinEntryMode::Device,
    );

    // The decoded digits depend on the scramble each tap landed on
    info!("pin outcome: {:?}", r);

    Ok(())
}

fn run_pin_change(drv: &mut SimDriver, channel: &mut SimChannel, pin: &str) -> anyhow::Result<()> {
    channel.push_pin(pin);
    channel.push_pin(pin);

    let r = request_pin_twice(drv, channel, PinEntryMode::Host);

    info!("pin change outcome: {:?}", r);

    Ok(())
}

fn run_unlock(
    drv: &mut SimDriver,
    channel: &mut SimChannel,
    pin: &str,
    failures: u32,
) -> anyhow::Result<()> {
    for i in 0..failures {
        // Wrong entries cycle through single digits
        let wrong = ["9", "8", "7", "6", "5"][i as usize % 5];
        channel.push_pin(wrong);
    }
    channel.push_pin(pin);

    let mut storage = SimStorage::new(pin, 1000);

    let r = protect_by_pin_repeatedly(drv, channel, &mut storage, PinEntryMode::Host, false);

    info!("unlock outcome: {:?}", r);

    if let Err(e) = &r {
        info!("failure code: {:?}", e.failure_type());
        helpers::alert(drv, 3);
    }

    Ok(())
}
