// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2025 The Heron SoC contributors

//! Register bus access.
//!
//! The SoC peripherals, the SD boot controller in particular, interpret the *sequence* of
//! reads and writes on this bus as a command protocol. Every access must therefore happen
//! exactly once and in program order. The hardware implementation uses volatile
//! operations so the compiler can neither elide a read whose value is discarded nor
//! reorder two accesses relative to each other.

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// Register bus interfaces.
pub mod interface {

    /// Ordered 32-bit register access.
    ///
    /// There is no buffering, caching or retrying at this layer; one call is one hardware
    /// transaction.
    pub trait RegisterBus {
        /// Read the 32-bit register at `base + offset`.
        ///
        /// Reads at some addresses are side-effecting commands. Callers discard the
        /// returned value freely; implementations must still perform the access.
        fn read32(&self, base: usize, offset: usize) -> u32;

        /// Write `value` to the 32-bit register at `base + offset`.
        fn write32(&self, base: usize, offset: usize, value: u32);
    }
}

/// The memory-mapped hardware bus.
pub struct Mmio;

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

impl Mmio {
    /// Create an instance.
    ///
    /// # Safety
    ///
    /// - The user must ensure that only peripheral addresses valid for the running system
    ///   are passed to the access methods.
    pub const unsafe fn new() -> Self {
        Self
    }
}

impl interface::RegisterBus for Mmio {
    fn read32(&self, base: usize, offset: usize) -> u32 {
        unsafe { core::ptr::read_volatile((base + offset) as *const u32) }
    }

    fn write32(&self, base: usize, offset: usize, value: u32) {
        unsafe { core::ptr::write_volatile((base + offset) as *mut u32, value) }
    }
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

/// Bus doubles shared by the unit tests.
#[cfg(test)]
pub mod testing {
    use super::interface::RegisterBus;
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    /// One observed bus transaction.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Access {
        Read { addr: usize },
        Write { addr: usize, value: u32 },
    }

    /// A bus double that records all traffic and backs reads with a plain address map.
    #[derive(Default)]
    pub struct RecordingBus {
        pub log: RefCell<Vec<Access>>,
        pub mem: RefCell<BTreeMap<usize, u32>>,
    }

    impl RecordingBus {
        pub fn new() -> Self {
            Self::default()
        }

        /// Seed a register value without it showing up in the traffic log.
        pub fn preset(&self, addr: usize, value: u32) {
            self.mem.borrow_mut().insert(addr, value);
        }
    }

    impl RegisterBus for RecordingBus {
        fn read32(&self, base: usize, offset: usize) -> u32 {
            let addr = base + offset;
            self.log.borrow_mut().push(Access::Read { addr });

            self.mem.borrow().get(&addr).copied().unwrap_or(0)
        }

        fn write32(&self, base: usize, offset: usize, value: u32) {
            let addr = base + offset;
            self.log.borrow_mut().push(Access::Write { addr, value });
            self.mem.borrow_mut().insert(addr, value);
        }
    }
}
