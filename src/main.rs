// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2025 The Heron SoC contributors

//! The `bootrom` binary.
//!
//! First code after reset on the Heron SoC: bring up the console, run one boot pass and
//! hand the core to the staged program. If that program ever cooperatively returns, the
//! return code is published and the core parks for good.

#![cfg_attr(target_arch = "riscv32", no_main)]
#![cfg_attr(target_arch = "riscv32", no_std)]

#[cfg(target_arch = "riscv32")]
use libbootrom::{bsp, console, cpu, println, regbus, sequencer};

/// Early init code.
///
/// # Safety
///
/// - Only a single core must be active and running this function.
#[cfg(target_arch = "riscv32")]
#[no_mangle]
unsafe fn bootrom_init() -> ! {
    if let Err(x) = bsp::console::init() {
        panic!("Error initializing console: {}", x);
    }

    bootrom_main()
}

/// The main function running after early init.
#[cfg(target_arch = "riscv32")]
fn bootrom_main() -> ! {
    println!("Booting on: {}", bsp::board_name());

    let bus = unsafe { regbus::Mmio::new() };
    let soc_ctrl = bsp::device_driver::SocCtrl::new(&bus, bsp::memory::map::SOC_CTRL_BASE);
    let card = bsp::device_driver::SpiSd::new(&bus, bsp::memory::card_map());

    let handoff = sequencer::run(
        &soc_ctrl,
        &card,
        bsp::memory::BOOT_IMAGE_BLOCKS,
        bsp::memory::BOOT_BAUD_DIVIDER,
    );
    console::console().flush();

    let code = cpu::transfer_control(handoff.target());

    // Only reached if the staged program cooperatively returned.
    soc_ctrl.set_core_status(code);
    println!("Returned with code {:#x}", code);
    console::console().flush();

    cpu::wait_forever()
}

// The bootrom only targets the SoC; host builds get an empty entry point.
#[cfg(not(target_arch = "riscv32"))]
fn main() {}
