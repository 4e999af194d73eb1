use core::fmt;

use embedded_hal::serial::{Read, Write};

/// Byte-stream console over a serial port.
///
/// Writes block until the port accepts each byte; reads poll and return
/// `None` when nothing is pending (receive errors are swallowed the same
/// way, the command path has no use for them).
pub struct SerialConsole<S> {
    serial: S,
}

impl<S> SerialConsole<S>
where
    S: Read<u8> + Write<u8>,
{
    pub fn new(serial: S) -> Self {
        Self { serial }
    }

    pub fn read_byte(&mut self) -> Option<u8> {
        self.serial.read().ok()
    }

    pub fn write_byte(&mut self, byte: u8) {
        nb::block!(self.serial.write(byte)).ok();
    }

    pub fn write_line(&mut self, s: &str) {
        use fmt::Write as _;
        self.write_str(s).ok();
        self.write_str("\r\n").ok();
    }

    // Debug helper - print hex value
    pub fn write_hex(&mut self, val: u8) {
        const HEX_CHARS: [u8; 16] = *b"0123456789ABCDEF";
        self.write_byte(HEX_CHARS[(val >> 4) as usize]);
        self.write_byte(HEX_CHARS[(val & 0xF) as usize]);
    }

    // Print formatted debug info
    pub fn debug(&mut self, msg: &str, val: u8) {
        use fmt::Write as _;
        self.write_str("[DBG] ").ok();
        self.write_str(msg).ok();
        self.write_str(": 0x").ok();
        self.write_hex(val);
        self.write_str("\r\n").ok();
    }

    pub fn free(self) -> S {
        self.serial
    }
}

impl<S> fmt::Write for SerialConsole<S>
where
    S: Read<u8> + Write<u8>,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
        Ok(())
    }
}
