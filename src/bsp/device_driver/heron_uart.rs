// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2025 The Heron SoC contributors

//! Heron UART driver.
//!
//! A 16550-compatible transmitter used for diagnostics only. Reception is not wired up;
//! the bootrom never takes input.

use crate::{
    bsp::device_driver::common::MMIODerefWrapper,
    console,
    synchronization::{interface::Mutex, NullLock},
};
use core::fmt;
use tock_registers::{
    interfaces::{Readable, Writeable},
    register_bitfields, register_structs,
    registers::{ReadOnly, ReadWrite},
};

//--------------------------------------------------------------------------------------------------
// Private Definitions
//--------------------------------------------------------------------------------------------------

register_bitfields! {
    u32,

    /// FIFO Control Register.
    FCR [
        FIFO_ENABLE OFFSET(0) NUMBITS(1) [],
        RX_FIFO_RESET OFFSET(1) NUMBITS(1) [],
        TX_FIFO_RESET OFFSET(2) NUMBITS(1) []
    ],

    /// Line Control Register.
    LCR [
        WORD_LENGTH OFFSET(0) NUMBITS(2) [
            Eight = 0b11
        ],
        DLAB OFFSET(7) NUMBITS(1) []
    ],

    /// Line Status Register.
    LSR [
        THR_EMPTY OFFSET(5) NUMBITS(1) [],
        TX_IDLE OFFSET(6) NUMBITS(1) []
    ]
}

register_structs! {
    #[allow(non_snake_case)]
    pub RegisterBlock {
        (0x00 => DATA: ReadWrite<u32>),
        (0x04 => IER: ReadWrite<u32>),
        (0x08 => FCR: ReadWrite<u32, FCR::Register>),
        (0x0c => LCR: ReadWrite<u32, LCR::Register>),
        (0x10 => MCR: ReadWrite<u32>),
        (0x14 => LSR: ReadOnly<u32, LSR::Register>),
        (0x18 => @END),
    }
}

/// Abstraction for the associated MMIO registers.
type Registers = MMIODerefWrapper<RegisterBlock>;

struct HeronUartInner {
    registers: Registers,
}

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// Representation of the UART.
pub struct HeronUart {
    inner: NullLock<HeronUartInner>,
}

//--------------------------------------------------------------------------------------------------
// Private Code
//--------------------------------------------------------------------------------------------------

impl HeronUartInner {
    /// Create an instance.
    ///
    /// # Safety
    ///
    /// - The user must ensure to provide a correct MMIO start address.
    const unsafe fn new(mmio_start_addr: usize) -> Self {
        Self {
            registers: Registers::new(mmio_start_addr),
        }
    }

    /// Set up an 8N1 transmitter at `baudrate`.
    fn init(&mut self, clock_hz: u32, baudrate: u32) {
        let divisor = clock_hz / (16 * baudrate);

        // The divisor latch shares its address with DATA/IER while DLAB is set.
        self.registers.LCR.write(LCR::DLAB::SET);
        self.registers.DATA.set(divisor & 0xFF);
        self.registers.IER.set((divisor >> 8) & 0xFF);
        self.registers.LCR.write(LCR::WORD_LENGTH::Eight);

        self.registers.IER.set(0);
        self.registers
            .FCR
            .write(FCR::FIFO_ENABLE::SET + FCR::RX_FIFO_RESET::SET + FCR::TX_FIFO_RESET::SET);
    }

    /// Send a character.
    fn write_char(&mut self, c: char) {
        // Spin while the holding register is occupied.
        while self.registers.LSR.matches_all(LSR::THR_EMPTY::CLEAR) {}

        self.registers.DATA.set(c as u32);
    }

    /// Block execution until the transmitter shift register is drained.
    fn flush(&self) {
        while self.registers.LSR.matches_all(LSR::TX_IDLE::CLEAR) {}
    }
}

/// Implementing `core::fmt::Write` enables usage of the `format_args!` macros, which in turn are
/// used to implement the `bootrom`'s `print!` and `println!` macros. By implementing `write_str()`,
/// we get `write_fmt()` automatically.
impl fmt::Write for HeronUartInner {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            self.write_char(c);
        }

        Ok(())
    }
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

impl HeronUart {
    /// Create an instance.
    ///
    /// # Safety
    ///
    /// - The user must ensure to provide a correct MMIO start address.
    pub const unsafe fn new(mmio_start_addr: usize) -> Self {
        Self {
            inner: NullLock::new(HeronUartInner::new(mmio_start_addr)),
        }
    }

    /// Set up the transmitter.
    pub fn init(&self, clock_hz: u32, baudrate: u32) -> Result<(), &'static str> {
        self.inner.lock(|inner| inner.init(clock_hz, baudrate));

        Ok(())
    }
}

//------------------------------------------------------------------------------
// OS Interface Code
//------------------------------------------------------------------------------

/// Passing through the lock guarantees serialized access even though the bootrom is
/// single-threaded anyway.
impl console::interface::Write for HeronUart {
    fn write_char(&self, c: char) {
        self.inner.lock(|inner| inner.write_char(c));
    }

    fn write_fmt(&self, args: fmt::Arguments) -> fmt::Result {
        self.inner.lock(|inner| fmt::Write::write_fmt(inner, args))
    }

    fn flush(&self) {
        self.inner.lock(|inner| inner.flush());
    }
}

impl console::interface::All for HeronUart {}
