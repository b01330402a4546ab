// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2025 The Heron SoC contributors

//! Architectural processor code.
//!
//! # Orientation
//!
//! Since arch modules are imported into generic modules using the path attribute, the path of this
//! file is:
//!
//! crate::cpu::arch_cpu

use core::arch::asm;

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Hand control to the program at `target`.
///
/// This is a bare jump through the target address, not an ABI function call: no frame is
/// set up and nothing is expected back. `ra` is pointed at the following instruction as a
/// courtesy, so a target that runs forever simply never comes back and this function
/// diverges with it. If the target does return through `ra`, the value it left in `a0` is
/// captured and handed to the caller as the return code.
pub fn transfer_control(target: u32) -> u32 {
    let code: u32;

    // The target owes us nothing register-wise, so assume the full C ABI clobber set.
    unsafe {
        asm!(
            "jalr ra, 0({target})",
            target = in(reg) target,
            out("ra") _,
            out("a0") code,
            clobber_abi("C"),
        );
    }

    code
}

/// Pause execution on the core.
pub fn wait_forever() -> ! {
    loop {
        unsafe { riscv::asm::wfi() }
    }
}
