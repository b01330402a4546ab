// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2025 The Heron SoC contributors

//! Conditional reexporting of Board Support Packages.

pub mod device_driver;

#[cfg(feature = "bsp_heron")]
mod heron;

#[cfg(feature = "bsp_heron")]
pub use heron::*;
