// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2025 The Heron SoC contributors

//! The `bootrom` library.
//!
//! Everything the boot binary is made of, in library form, so that the boot policy and
//! the card protocol can be exercised by host-run unit tests.

#![cfg_attr(not(test), no_std)]

#[cfg(target_arch = "riscv32")]
mod panic_wait;
mod synchronization;

pub mod bsp;
pub mod console;
pub mod cpu;
pub mod print;
pub mod regbus;
pub mod sequencer;
