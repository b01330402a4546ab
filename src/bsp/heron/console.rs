// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2025 The Heron SoC contributors

//! BSP console facilities.

use super::memory;
use crate::{bsp::device_driver, console};

//--------------------------------------------------------------------------------------------------
// Global instances
//--------------------------------------------------------------------------------------------------

static UART: device_driver::HeronUart =
    unsafe { device_driver::HeronUart::new(memory::map::UART_BASE) };

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Initialize the UART and register it as the system console.
pub fn init() -> Result<(), &'static str> {
    UART.init(memory::UART_CLOCK_HZ, memory::UART_BAUDRATE)?;
    console::register_console(&UART);

    Ok(())
}
