//! Skirmish - LED Game Firmware
//!
//! Main firmware binary for RP2040-based game boards. Brings up the LEDs
//! and buttons, then hands them to the round-robin scheduler forever.

#![no_std]
#![no_main]

#[cfg(feature = "defmt")]
use defmt::info;
#[cfg(feature = "defmt")]
use {defmt_rtt as _, panic_probe as _};

use cortex_m_rt::entry;
use skirmish_core::scheduler::{RoundReport, Scheduler};

mod board;

#[cfg(not(feature = "defmt"))]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    cortex_m::asm::udf()
}

/// Main entry point
#[entry]
fn main() -> ! {
    #[cfg(feature = "defmt")]
    info!("Skirmish firmware starting...");

    let p = embassy_rp::init(Default::default());
    let (lines, ports) = board::split(p);

    let calibration = board::CALIBRATION;
    #[cfg(feature = "defmt")]
    info!("Calibration: {}", calibration);

    let mut scheduler = Scheduler::new(lines, ports, calibration);

    #[cfg(feature = "defmt")]
    info!("Entering game loop");

    scheduler.run_with(log_round)
}

/// Log game state changes
#[cfg(feature = "defmt")]
fn log_round(report: &RoundReport) {
    if let Some(transition) = report.transition {
        info!(
            "round {}: {} -> {}",
            report.round, transition.from, transition.to
        );
    }
}

#[cfg(not(feature = "defmt"))]
fn log_round(_report: &RoundReport) {}
