// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2025 The Heron SoC contributors

//! Boot code.

#[cfg(target_arch = "riscv32")]
#[path = "../_arch/riscv32/cpu/boot.rs"]
mod arch_boot;
