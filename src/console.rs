// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2025 The Heron SoC contributors

//! System console.

mod null_console;

use crate::synchronization::{interface::Mutex, NullLock};

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// Console interfaces.
pub mod interface {
    use core::fmt;

    /// Console write functions.
    pub trait Write {
        /// Write a single character.
        fn write_char(&self, c: char);

        /// Write a Rust format string.
        fn write_fmt(&self, args: fmt::Arguments) -> fmt::Result;

        /// Block until the last character has physically left the transmitter.
        fn flush(&self);
    }

    /// Trait alias for a full-fledged console.
    pub trait All: Write {}
}

//--------------------------------------------------------------------------------------------------
// Private Definitions
//--------------------------------------------------------------------------------------------------

static CUR_CONSOLE: NullLock<&'static (dyn interface::All + Sync)> =
    NullLock::new(&null_console::NULL_CONSOLE);

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Register a new console.
pub fn register_console(new_console: &'static (dyn interface::All + Sync)) {
    CUR_CONSOLE.lock(|con| *con = new_console);
}

/// Return a reference to the currently registered console.
///
/// This is the global console used by all printing macros.
pub fn console() -> &'static (dyn interface::All + Sync) {
    CUR_CONSOLE.lock(|con| *con)
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

/// Console doubles shared by the unit tests.
#[cfg(test)]
pub mod testing {
    use super::interface;
    use core::fmt;
    use std::sync::{Mutex, MutexGuard};

    /// A console that stores everything printed for later inspection.
    pub struct CaptureConsole {
        buf: Mutex<String>,
    }

    impl CaptureConsole {
        /// Drain and return everything captured so far.
        pub fn take(&self) -> String {
            core::mem::take(&mut *self.buf.lock().unwrap())
        }
    }

    impl interface::Write for CaptureConsole {
        fn write_char(&self, c: char) {
            self.buf.lock().unwrap().push(c);
        }

        fn write_fmt(&self, args: fmt::Arguments) -> fmt::Result {
            fmt::Write::write_fmt(&mut *self.buf.lock().unwrap(), args)
        }

        fn flush(&self) {}
    }

    impl interface::All for CaptureConsole {}

    static CAPTURE_CONSOLE: CaptureConsole = CaptureConsole {
        buf: Mutex::new(String::new()),
    };

    static SERIAL: Mutex<()> = Mutex::new(());

    /// Register the shared capture console and return it together with a guard that
    /// serializes the caller against the other output-producing tests.
    ///
    /// The buffer is drained on acquisition, so the caller only ever sees its own output.
    pub fn capture() -> (&'static CaptureConsole, MutexGuard<'static, ()>) {
        let guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
        super::register_console(&CAPTURE_CONSOLE);
        CAPTURE_CONSOLE.take();

        (&CAPTURE_CONSOLE, guard)
    }
}
