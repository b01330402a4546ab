// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2025 The Heron SoC contributors

//! Processor code.

#[cfg(target_arch = "riscv32")]
#[path = "_arch/riscv32/cpu.rs"]
mod arch_cpu;

mod boot;

//--------------------------------------------------------------------------------------------------
// Architectural Public Reexports
//--------------------------------------------------------------------------------------------------
#[cfg(target_arch = "riscv32")]
pub use arch_cpu::{transfer_control, wait_forever};
