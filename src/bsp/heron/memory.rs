// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2025 The Heron SoC contributors

//! BSP Memory Management.

use crate::bsp::device_driver::CardMap;

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// The board's physical memory map.
#[rustfmt::skip]
pub mod map {
    /// SoC controller register file.
    pub const SOC_CTRL_BASE:      usize = 0x2000_0000;

    /// Diagnostics UART.
    pub const UART_BASE:          usize = 0x2000_4000;

    /// SD controller block-swap mode register.
    pub const SD_BLOCK_SWAP:      usize = 0x2001_0000;

    /// SD controller command pseudo-registers, at the top of the card aperture.
    pub const SD_CMD0:            usize = 0x5FFF_FFFC;
    pub const SD_CMD8:            usize = 0x5FFF_FFF8;
    pub const SD_CMD59:           usize = 0x5FFF_FFF4;
    pub const SD_CMD58:           usize = 0x5FFF_FFF0;
    pub const SD_ACMD41:          usize = 0x5FFF_FFEC;
    pub const SD_BEGINNING:       usize = 0x5FFF_FFE8;
    pub const SD_CHANGE_BAUDRATE: usize = 0x5FFF_FFE0;

    /// Block window that card contents appear behind.
    pub const SD_WINDOW:          usize = 0x6000_0000;
}

/// Number of 512-byte blocks staged from the card at boot.
pub const BOOT_IMAGE_BLOCKS: usize = 4;

/// SPI clock divider selected for the block transfer.
pub const BOOT_BAUD_DIVIDER: u32 = 0x18;

/// UART input clock.
pub const UART_CLOCK_HZ: u32 = 6_250_000;

/// Console baud rate.
pub const UART_BAUDRATE: u32 = 57_600;

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// The SD controller pseudo-register locations, in driver form.
pub const fn card_map() -> CardMap {
    CardMap {
        beginning: map::SD_BEGINNING,
        cmd0: map::SD_CMD0,
        cmd8: map::SD_CMD8,
        cmd59: map::SD_CMD59,
        cmd58: map::SD_CMD58,
        acmd41: map::SD_ACMD41,
        baudrate: map::SD_CHANGE_BAUDRATE,
        block_swap: map::SD_BLOCK_SWAP,
        window: map::SD_WINDOW,
    }
}
