//! ADXL362 3-axis accelerometer driver
//!
//! Speaks the part's register protocol over a [`BusTransport`]. Every
//! operation is a single bus transaction; the protocol has no ack to retry
//! against, so transport failures surface unchanged.

use embedded_hal::blocking::delay::DelayMs;

use crate::bus::BusTransport;

// ADXL362 registers
pub const REG_DEVID: u8 = 0x00;
pub const REG_STATUS: u8 = 0x0B;
pub const REG_FIFO_ENTRIES_L: u8 = 0x0C;
pub const REG_FIFO_ENTRIES_H: u8 = 0x0D;
pub const REG_SOFT_RESET: u8 = 0x1F;
pub const REG_FIFO_CONTROL: u8 = 0x28;
pub const REG_FIFO_SAMPLES: u8 = 0x29;
pub const REG_INTMAP1: u8 = 0x2A;
pub const REG_INTMAP2: u8 = 0x2B;
pub const REG_FILTER_CTL: u8 = 0x2C;
pub const REG_POWER_CTL: u8 = 0x2D;

// Start of the 8-bit axis data window (XDATA, YDATA, ZDATA)
pub const REG_XDATA: u8 = 0x08;

// Command opcodes, first byte of every transaction
pub const CMD_WRITE_REG: u8 = 0x0A;
pub const CMD_READ_REG: u8 = 0x0B;
pub const CMD_READ_FIFO: u8 = 0x0D;

// Register values used by `configure`
const SOFT_RESET_KEY: u8 = 0x52; // 'R'
const FIFO_STREAM_AH: u8 = 0x0A; // stream mode, AH bit
const FILTER_2G_ODR25: u8 = 0x11; // +/-2g range, 25Hz output data rate
const INT1_WATERMARK: u8 = 0x04;
const POWER_ULN_MEASURE: u8 = 0x22; // ultralow noise, measurement mode

// Power-up settling around the soft reset, mandated by the part
const RESET_SETTLE_MS: u32 = 200;

/// One raw axis reading, signed 8-bit counts per axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RawSample {
    pub x: i8,
    pub y: i8,
    pub z: i8,
}

/// ADXL362 driver over a configured bus transport.
pub struct Adxl362<B> {
    bus: B,
}

impl<B: BusTransport> Adxl362<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Soft-resets the part. The two 200 ms waits bracket the reset write;
    /// both are protocol-mandated settling time, not tunables.
    pub fn reset(&mut self, delay: &mut impl DelayMs<u32>) -> Result<(), B::Error> {
        delay.delay_ms(RESET_SETTLE_MS);
        self.write_register(REG_SOFT_RESET, SOFT_RESET_KEY)?;
        delay.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }

    /// Programs the capture mode. Write order matters: power/measurement
    /// mode goes last so the earlier FIFO, filter and interrupt bits are in
    /// effect when measurement starts.
    pub fn configure(&mut self) -> Result<(), B::Error> {
        self.write_register(REG_FIFO_CONTROL, FIFO_STREAM_AH)?;
        self.write_register(REG_FILTER_CTL, FILTER_2G_ODR25)?;
        self.write_register(REG_INTMAP1, INT1_WATERMARK)?;
        self.write_register(REG_POWER_CTL, POWER_ULN_MEASURE)?;
        Ok(())
    }

    /// Reads one register.
    pub fn read_register(&mut self, addr: u8) -> Result<u8, B::Error> {
        let mut words = [CMD_READ_REG, addr, 0x00];
        self.bus.transact(&mut words)?;
        Ok(words[2])
    }

    /// Writes one register.
    pub fn write_register(&mut self, addr: u8, value: u8) -> Result<(), B::Error> {
        let mut words = [CMD_WRITE_REG, addr, value];
        self.bus.transact(&mut words)
    }

    /// Fetches one x/y/z sample as a single burst transaction starting at
    /// XDATA. No partial-read recovery.
    pub fn read_axes(&mut self) -> Result<RawSample, B::Error> {
        let mut words = [CMD_READ_REG, REG_XDATA, 0x00, 0x00, 0x00];
        self.bus.transact(&mut words)?;
        Ok(RawSample {
            x: words[2] as i8,
            y: words[3] as i8,
            z: words[4] as i8,
        })
    }

    /// Reads the DEVID register (0xAD on genuine parts).
    pub fn device_id(&mut self) -> Result<u8, B::Error> {
        self.read_register(REG_DEVID)
    }

    /// Reads the STATUS register.
    pub fn status(&mut self) -> Result<u8, B::Error> {
        self.read_register(REG_STATUS)
    }

    /// Number of valid samples currently in the FIFO (10 significant bits).
    pub fn fifo_entries(&mut self) -> Result<u16, B::Error> {
        let low = self.read_register(REG_FIFO_ENTRIES_L)?;
        let high = self.read_register(REG_FIFO_ENTRIES_H)?;
        Ok(u16::from_le_bytes([low, high & 0x03]))
    }

    /// Sets the FIFO watermark depth in samples.
    pub fn set_fifo_samples(&mut self, samples: u8) -> Result<(), B::Error> {
        self.write_register(REG_FIFO_SAMPLES, samples)
    }

    /// Releases the bus.
    pub fn free(self) -> B {
        self.bus
    }
}
