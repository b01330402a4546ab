// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2025 The Heron SoC contributors

//! Boot sequencing.
//!
//! One pass per reset: bump the persisted restart counter, decide whether the card
//! handshake runs, stage the boot image if it does, and report which of the two hand-off
//! targets the core continues at. The counter is the only failure signal that exists; a
//! handshake whose card silently did nothing still counts as a completed attempt.
//!
//! Counter policy is reset-on-overflow: increment, roll over to zero past
//! [`NUM_RETRIES`], and run the handshake only while the stored value is below the
//! threshold. The register survives soft resets; at power-on it starts from the SoC
//! controller's hardware reset value.

use crate::bsp::device_driver::{SocCtrl, SpiSd};
use crate::println;
use crate::regbus::interface::RegisterBus;

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// Boot attempts before the card handshake is skipped for a cycle.
pub const NUM_RETRIES: u32 = 3;

/// Where the core goes after this pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handoff {
    /// An image was staged from the card; continue in the SD-mapped window.
    SdWindow(u32),
    /// Handshake skipped after too many attempts; continue in plain SRAM.
    Sram(u32),
}

impl Handoff {
    /// The jump target address.
    pub fn target(&self) -> u32 {
        match *self {
            Handoff::SdWindow(addr) => addr,
            Handoff::Sram(addr) => addr,
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Run one boot pass.
///
/// The two targets are never both attempted in one pass: a completed handshake always
/// hands off to the SD-mapped window, a skipped one always to plain SRAM.
pub fn run<B: RegisterBus>(
    soc_ctrl: &SocCtrl<B>,
    card: &SpiSd<B>,
    block_count: usize,
    baud_divider: u32,
) -> Handoff {
    let mut attempt = soc_ctrl.restart_counter().wrapping_add(1);
    if attempt > NUM_RETRIES {
        attempt = 0;
    }
    soc_ctrl.set_restart_counter(attempt);

    if attempt < NUM_RETRIES {
        println!("Try {}", attempt);

        card.init(baud_divider);
        card.load_blocks(block_count);
        println!("Blocks loaded");

        Handoff::SdWindow(soc_ctrl.boot_addr_after_sd())
    } else {
        println!("Giving up on the card: too many retries");

        Handoff::Sram(soc_ctrl.boot_addr_after())
    }
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------
