// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2025 The Heron SoC contributors

//! SPI SD boot controller driver.
//!
//! The controller does not expose a FIFO-and-status programming model. It interprets
//! plain bus traffic as commands instead: a read at one of a handful of magic offsets
//! near the top of the card aperture makes the controller clock the corresponding SD
//! command out on the SPI wires, and the read data is whatever the card answered. The
//! boot flow never branches on those answers; the reads exist for their side effect
//! alone, which is why they are modeled as named operations returning nothing.
//!
//! Block transfer works through the block-swap window. In `Load` mode, reads stepped 512
//! bytes apart pull consecutive card blocks into the SRAM behind the window; in `Normal`
//! mode the same window is an ordinary memory range. Failure of any individual step is
//! not detectable here; there is no status bit and no CRC check. The only failure signal
//! the system has is the restart counter policy one layer up.

use crate::regbus::interface::RegisterBus;

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// Size of one card block in bytes.
pub const BLOCK_SIZE: usize = 512;

/// Block-swap modes understood by the controller.
///
/// Writing the currently active mode again is idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum DeviceMode {
    /// Block remapping disabled.
    Off = 0,
    /// The window is an ordinary read/write memory range.
    Normal = 1,
    /// Card blocks are exposed for sequential loading.
    Load = 3,
}

/// Locations of the controller's pseudo-registers, provided by the BSP.
#[derive(Debug, Clone, Copy)]
pub struct CardMap {
    /// Side-effecting "start of session" probe.
    pub beginning: usize,
    /// CMD0, software reset.
    pub cmd0: usize,
    /// CMD8, voltage/interface check.
    pub cmd8: usize,
    /// CMD59, CRC mode selection.
    pub cmd59: usize,
    /// CMD58, operating conditions.
    pub cmd58: usize,
    /// ACMD41, initialization poll.
    pub acmd41: usize,
    /// Write-only SPI clock divider.
    pub baudrate: usize,
    /// Block-swap mode register.
    pub block_swap: usize,
    /// Base of the block window.
    pub window: usize,
}

/// Driver for the SD boot controller.
pub struct SpiSd<'a, B: RegisterBus> {
    bus: &'a B,
    map: CardMap,
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

impl<'a, B: RegisterBus> SpiSd<'a, B> {
    /// Create an instance.
    pub const fn new(bus: &'a B, map: CardMap) -> Self {
        Self { bus, map }
    }

    /// Issue the beginning-of-session probe.
    fn probe(&self) {
        let _ = self.bus.read32(self.map.beginning, 0);
    }

    /// Issue CMD0, resetting the card into idle state.
    fn issue_reset(&self) {
        let _ = self.bus.read32(self.map.cmd0, 0);
    }

    /// Issue CMD8, the voltage/interface check.
    fn issue_interface_check(&self) {
        let _ = self.bus.read32(self.map.cmd8, 0);
    }

    /// Issue CMD59, selecting the CRC mode.
    fn issue_crc_mode(&self) {
        let _ = self.bus.read32(self.map.cmd59, 0);
    }

    /// Issue CMD58, querying the operating conditions.
    fn issue_op_cond(&self) {
        let _ = self.bus.read32(self.map.cmd58, 0);
    }

    /// Issue ACMD41 once.
    ///
    /// The controller completes command processing within the read transaction itself, so
    /// there is no "busy" state left to poll on afterwards.
    fn issue_init_poll(&self) {
        let _ = self.bus.read32(self.map.acmd41, 0);
    }

    /// Select the SPI clock divider.
    pub fn set_baudrate(&self, divider: u32) {
        self.bus.write32(self.map.baudrate, 0, divider);
    }

    /// Select the block-swap mode.
    pub fn set_mode(&self, mode: DeviceMode) {
        self.bus.write32(self.map.block_swap, 0, mode as u32);
    }

    /// Run the fixed card bring-up handshake.
    ///
    /// Step order is part of the protocol and must not change.
    pub fn init(&self, baud_divider: u32) {
        self.probe();
        self.issue_reset();
        self.issue_interface_check();
        self.issue_crc_mode();
        self.issue_op_cond();
        self.issue_init_poll();
        self.set_baudrate(baud_divider);
    }

    /// Pull `count` consecutive card blocks into the SRAM behind the window.
    ///
    /// Reads are issued at strictly ascending 512-byte offsets; the controller tracks the
    /// block index internally and expects exactly this pattern. The window is left in
    /// `Normal` mode.
    pub fn load_blocks(&self, count: usize) {
        self.set_mode(DeviceMode::Load);

        for i in 0..count {
            let _ = self.bus.read32(self.map.window, i * BLOCK_SIZE);
        }

        self.set_mode(DeviceMode::Normal);
    }
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regbus::testing::{Access, RecordingBus};
    use std::cell::RefCell;

    /// A bus double with a block-device model behind the window.
    ///
    /// In `Load` mode a read at a block boundary copies the corresponding card block into
    /// a shadow SRAM; in `Normal` mode window accesses hit that SRAM directly. The SRAM
    /// is larger than the card image, as on the real part.
    struct BlockDeviceBus {
        map: CardMap,
        mode: RefCell<DeviceMode>,
        card: Vec<u32>,
        sram: RefCell<Vec<u32>>,
    }

    impl BlockDeviceBus {
        const SRAM_WORDS: usize = 16 * BLOCK_SIZE / 4;

        fn new(map: CardMap, card: Vec<u32>) -> Self {
            assert!(card.len() <= Self::SRAM_WORDS);

            Self {
                map,
                mode: RefCell::new(DeviceMode::Off),
                card,
                sram: RefCell::new(vec![0; Self::SRAM_WORDS]),
            }
        }
    }

    impl RegisterBus for BlockDeviceBus {
        fn read32(&self, base: usize, offset: usize) -> u32 {
            let addr = base + offset;
            if addr < self.map.window {
                // Command pseudo-registers; the answer is discarded by all callers.
                return 0;
            }

            match *self.mode.borrow() {
                DeviceMode::Load => {
                    let start = (addr - self.map.window) / 4;
                    let end = start + BLOCK_SIZE / 4;
                    self.sram.borrow_mut()[start..end].copy_from_slice(&self.card[start..end]);

                    0
                }
                DeviceMode::Normal => self.sram.borrow()[(addr - self.map.window) / 4],
                DeviceMode::Off => 0,
            }
        }

        fn write32(&self, base: usize, offset: usize, value: u32) {
            let addr = base + offset;
            if addr == self.map.block_swap {
                *self.mode.borrow_mut() = match value {
                    0 => DeviceMode::Off,
                    1 => DeviceMode::Normal,
                    3 => DeviceMode::Load,
                    _ => panic!("invalid block-swap mode {}", value),
                };
            } else if addr >= self.map.window && *self.mode.borrow() == DeviceMode::Normal {
                self.sram.borrow_mut()[(addr - self.map.window) / 4] = value;
            }
        }
    }

    fn test_map() -> CardMap {
        CardMap {
            beginning: 0x5FFF_FFE8,
            cmd0: 0x5FFF_FFFC,
            cmd8: 0x5FFF_FFF8,
            cmd59: 0x5FFF_FFF4,
            cmd58: 0x5FFF_FFF0,
            acmd41: 0x5FFF_FFEC,
            baudrate: 0x5FFF_FFE0,
            block_swap: 0x2001_0000,
            window: 0x6000_0000,
        }
    }

    /// The bring-up handshake issues its command reads in protocol order, then selects the
    /// clock divider.
    #[test]
    fn handshake_is_ordered() {
        let map = test_map();
        let bus = RecordingBus::new();
        let card = SpiSd::new(&bus, map);

        card.init(0x18);

        let expected = [
            Access::Read { addr: map.beginning },
            Access::Read { addr: map.cmd0 },
            Access::Read { addr: map.cmd8 },
            Access::Read { addr: map.cmd59 },
            Access::Read { addr: map.cmd58 },
            Access::Read { addr: map.acmd41 },
            Access::Write {
                addr: map.baudrate,
                value: 0x18,
            },
        ];
        assert_eq!(*bus.log.borrow(), expected);
    }

    /// `load_blocks(N)` issues exactly N window reads at ascending 512-byte offsets,
    /// bracketed by one `Load` write and one `Normal` write, in that order.
    #[test]
    fn block_load_traffic_shape() {
        let map = test_map();

        for &count in &[1usize, 4, 12] {
            let bus = RecordingBus::new();
            let card = SpiSd::new(&bus, map);

            card.load_blocks(count);

            let log = bus.log.borrow();
            assert_eq!(log.len(), count + 2);
            assert_eq!(
                log[0],
                Access::Write {
                    addr: map.block_swap,
                    value: DeviceMode::Load as u32
                }
            );
            assert_eq!(
                log[log.len() - 1],
                Access::Write {
                    addr: map.block_swap,
                    value: DeviceMode::Normal as u32
                }
            );

            for (i, access) in log[1..=count].iter().enumerate() {
                assert_eq!(
                    *access,
                    Access::Read {
                        addr: map.window + i * BLOCK_SIZE
                    }
                );
            }
        }
    }

    /// Re-selecting the active mode leaves no observable register state change behind.
    #[test]
    fn mode_selection_is_idempotent() {
        let bus = RecordingBus::new();
        let card = SpiSd::new(&bus, test_map());

        card.set_mode(DeviceMode::Load);
        let after_first = bus.mem.borrow().clone();
        card.set_mode(DeviceMode::Load);

        assert_eq!(*bus.mem.borrow(), after_first);
        assert_eq!(bus.log.borrow().len(), 2);
    }

    /// `Load`-mode reads stage card blocks behind the window; afterwards the `Normal`
    /// window reads back the card contents word for word.
    #[test]
    fn loaded_blocks_appear_behind_the_window() {
        let map = test_map();
        let image: Vec<u32> = (0..4 * BLOCK_SIZE / 4)
            .map(|w| w as u32 ^ 0xA5A5_0000)
            .collect();
        let bus = BlockDeviceBus::new(map, image.clone());
        let card = SpiSd::new(&bus, map);

        card.init(0x18);
        card.load_blocks(4);

        for (w, &expected) in image.iter().enumerate() {
            assert_eq!(bus.read32(map.window, 4 * w), expected);
        }
    }

    /// Data written through the normal window after a block load reads back unchanged,
    /// and a fresh block load restores the card contents over the edits.
    #[test]
    fn normal_window_round_trip() {
        let map = test_map();
        let bus = BlockDeviceBus::new(map, vec![0; 4 * BLOCK_SIZE / 4]);
        let card = SpiSd::new(&bus, map);

        card.load_blocks(4);

        for i in 0..128u32 {
            bus.write32(map.window + 0x800, (4 * i) as usize, i * 5 + 7);
        }

        let mut count_mistakes = 0;
        for i in 0..128u32 {
            if bus.read32(map.window + 0x800, (4 * i) as usize) != i * 5 + 7 {
                count_mistakes += 1;
            }
        }
        assert_eq!(count_mistakes, 0);

        // The edits only shadowed the staged SRAM. Reloading within the card image wipes
        // nothing outside it, and an edit inside the image is overwritten.
        bus.write32(map.window, 0, 0xDEAD_BEEF);
        card.load_blocks(4);
        assert_eq!(bus.read32(map.window, 0), 0);
        assert_eq!(bus.read32(map.window + 0x800, 0), 7);
    }
}
