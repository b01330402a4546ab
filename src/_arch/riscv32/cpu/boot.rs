// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2025 The Heron SoC contributors

//! Architectural boot code.
//!
//! # Orientation
//!
//! Since arch modules are imported into generic modules using the path attribute, the path of this
//! file is:
//!
//! crate::cpu::boot::arch_boot

use core::arch::global_asm;

// Assembly counterpart to this file.
global_asm!(include_str!("boot.s"));

extern "Rust" {
    fn bootrom_init() -> !;
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// The Rust entry of the `bootrom` binary.
///
/// The function is called from the assembly `_start` function.
#[no_mangle]
pub unsafe extern "C" fn _start_rust() -> ! {
    bootrom_init()
}
