//! Shared test doubles for the integration suites.
#![allow(dead_code)]

use core::convert::Infallible;

use adxl362_tilt_logger::bus::BusTransport;
use adxl362_tilt_logger::drivers::adxl362::{CMD_READ_REG, CMD_WRITE_REG, REG_XDATA};
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;

/// Bus double backed by a RAM register file: writes land in `regs`, reads
/// (including bursts) echo them back.
pub struct EchoBus {
    pub regs: [u8; 256],
}

impl EchoBus {
    pub fn new() -> Self {
        Self { regs: [0; 256] }
    }
}

impl BusTransport for EchoBus {
    type Error = BusFault;

    fn transact(&mut self, words: &mut [u8]) -> Result<(), BusFault> {
        match words[0] {
            CMD_WRITE_REG => {
                self.regs[words[1] as usize] = words[2];
                Ok(())
            }
            CMD_READ_REG => {
                let start = words[1] as usize;
                for (i, word) in words[2..].iter_mut().enumerate() {
                    *word = self.regs[start + i];
                }
                Ok(())
            }
            _ => Err(BusFault),
        }
    }
}

/// Bus double that records every outgoing transaction verbatim and replies
/// with zeros.
pub struct RecordingBus {
    pub transactions: Vec<Vec<u8>>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
        }
    }
}

impl BusTransport for RecordingBus {
    type Error = BusFault;

    fn transact(&mut self, words: &mut [u8]) -> Result<(), BusFault> {
        self.transactions.push(words.to_vec());
        for word in words.iter_mut() {
            *word = 0;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

/// Bus double that accepts any register write and answers axis burst reads
/// from a script. A read past the end of the script fails the transaction,
/// which stands in for a device that stops responding.
pub struct ScriptedBus {
    axes: Vec<(i8, i8, i8)>,
    cursor: usize,
    pub writes: Vec<(u8, u8)>,
}

impl ScriptedBus {
    pub fn new(axes: &[(i8, i8, i8)]) -> Self {
        Self {
            axes: axes.to_vec(),
            cursor: 0,
            writes: Vec::new(),
        }
    }
}

impl BusTransport for ScriptedBus {
    type Error = BusFault;

    fn transact(&mut self, words: &mut [u8]) -> Result<(), BusFault> {
        match words[0] {
            CMD_WRITE_REG => {
                self.writes.push((words[1], words[2]));
                Ok(())
            }
            CMD_READ_REG if words[1] == REG_XDATA && words.len() == 5 => {
                let (x, y, z) = *self.axes.get(self.cursor).ok_or(BusFault)?;
                self.cursor += 1;
                words[2] = x as u8;
                words[3] = y as u8;
                words[4] = z as u8;
                Ok(())
            }
            CMD_READ_REG => Ok(()),
            _ => Err(BusFault),
        }
    }
}

/// Infallible output pin that records every level it is driven to.
pub struct TestPin {
    pub states: Vec<bool>,
}

impl TestPin {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }
}

impl OutputPin for TestPin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.states.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.states.push(true);
        Ok(())
    }
}

/// Delay double that records every requested pause.
pub struct RecordingDelay {
    pub delays_ms: Vec<u32>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self {
            delays_ms: Vec::new(),
        }
    }
}

impl DelayMs<u32> for RecordingDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}
