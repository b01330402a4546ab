// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2025 The Heron SoC contributors

//! Device driver.

#[cfg(feature = "bsp_heron")]
mod common;
#[cfg(feature = "bsp_heron")]
mod heron_uart;
mod soc_ctrl;
mod spi_sd;

#[cfg(feature = "bsp_heron")]
pub use heron_uart::*;
pub use soc_ctrl::*;
pub use spi_sd::*;
