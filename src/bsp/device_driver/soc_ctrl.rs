// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2025 The Heron SoC contributors

//! SoC controller driver.
//!
//! The controller owns the core's boot plumbing: boot addresses, fetch enable, the return
//! status register and the bootrom restart counter. All of it except the restart counter
//! and the return status is written by the outside world before this program runs and is
//! read-only from here.

use crate::regbus::interface::RegisterBus;

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// Register offsets, mirroring the generated `soc_ctrl` description.
#[rustfmt::skip]
pub mod offsets {
    /// Core boot address.
    pub const BOOTADDR:         usize = 0x00;
    /// Core fetch enable.
    pub const FETCHEN:          usize = 0x04;
    /// Core return status (return value, end of computation).
    pub const CORESTATUS:       usize = 0x08;
    /// Core boot mode.
    pub const BOOTMODE:         usize = 0x0c;
    /// SRAM address-delay value.
    pub const SRAM_DLY:         usize = 0x10;
    /// Bootrom restarts counter.
    pub const RESTART_COUNTER:  usize = 0x14;
    /// Core boot address after the bootrom.
    pub const BOOTADDR_AFTER:   usize = 0x18;
    /// Core boot address after the bootrom if an SD card is attached.
    pub const BOOTADDR_AFTER_SD: usize = 0x1c;
}

/// Driver for the SoC controller register file.
pub struct SocCtrl<'a, B: RegisterBus> {
    bus: &'a B,
    base: usize,
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

impl<'a, B: RegisterBus> SocCtrl<'a, B> {
    /// Create an instance.
    pub const fn new(bus: &'a B, base: usize) -> Self {
        Self { bus, base }
    }

    /// Read the bootrom restart counter.
    ///
    /// The register survives soft resets. At power-on it holds the controller's hardware
    /// reset value (zero), not anything this program wrote.
    pub fn restart_counter(&self) -> u32 {
        self.bus.read32(self.base, offsets::RESTART_COUNTER)
    }

    /// Store a new restart counter value.
    pub fn set_restart_counter(&self, value: u32) {
        self.bus.write32(self.base, offsets::RESTART_COUNTER, value)
    }

    /// Boot address the core continues at when no SD image was staged.
    pub fn boot_addr_after(&self) -> u32 {
        self.bus.read32(self.base, offsets::BOOTADDR_AFTER)
    }

    /// Boot address the core continues at when an SD image was staged.
    pub fn boot_addr_after_sd(&self) -> u32 {
        self.bus.read32(self.base, offsets::BOOTADDR_AFTER_SD)
    }

    /// Publish a return status (end of computation) code.
    pub fn set_core_status(&self, code: u32) {
        self.bus.write32(self.base, offsets::CORESTATUS, code)
    }
}
