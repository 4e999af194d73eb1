//! Firmware core for an ADXL362-based tilt logger.
//!
//! Samples the accelerometer over chip-select-gated SPI at a configurable
//! period, converts raw axis counts to pitch/roll angles, stores them in a
//! bounds-checked time series and dumps the capture over a serial shell on
//! request. All hardware access goes through `embedded-hal` traits so the
//! core runs behind any board HAL.
#![no_std]

pub mod acquisition;
pub mod application;
pub mod bus;
pub mod config;
pub mod drivers;
pub mod series;
pub mod shell;
pub mod tilt;

pub use acquisition::{Acquisition, CaptureError, CaptureState};
pub use bus::spi::{BusConfig, SpiBus, SpiMode};
pub use bus::{BusTransport, TransportError};
pub use config::{ConfigError, SampleConfig};
pub use drivers::{Adxl362, RawSample, SerialConsole, StatusLeds};
pub use series::{CapacityError, DefaultTimeSeries, TimeSeries};
pub use tilt::TiltSample;
