//! Configuration constants and runtime capture settings.

use core::fmt;

/// Serial baud rate for the command shell
pub const SERIAL_BAUD: u32 = 115_200;

/// Maximum number of samples a capture may hold
pub const MAX_SAMPLES: usize = 3500;

/// Settling time after the device has been configured, in milliseconds
pub const STARTUP_SETTLE_MS: u32 = 100;

/// Default sample period in milliseconds
pub const DEFAULT_PERIOD_MS: u32 = 500;

/// Default capture duration in hours (10 seconds)
pub const DEFAULT_DURATION_HOURS: f32 = 0.00277778;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    MissingSamplePeriod,
    MissingDuration,
    /// Period is unparsable or zero.
    InvalidSamplePeriod,
    /// Duration is unparsable, negative or not finite.
    InvalidDuration,
}

/// Capture settings: sample period and total capture duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleConfig {
    period_ms: u32,
    duration_hours: f32,
}

impl SampleConfig {
    pub fn new(period_ms: u32, duration_hours: f32) -> Result<Self, ConfigError> {
        if period_ms == 0 {
            return Err(ConfigError::InvalidSamplePeriod);
        }
        if !duration_hours.is_finite() || duration_hours < 0.0 {
            return Err(ConfigError::InvalidDuration);
        }
        Ok(Self {
            period_ms,
            duration_hours,
        })
    }

    /// Parses the key-value setup resource.
    ///
    /// Expected shape (see [`render_default`](Self::render_default)):
    /// a `sample= <ms>` line and a `duration= <hours>` line. Lines without
    /// `=` and unknown keys are skipped, so the banner and the reference
    /// table in the stock file are ignored.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut period_ms = None;
        let mut duration_hours = None;

        for line in text.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            match key.trim() {
                "sample" => {
                    let ms = value
                        .trim()
                        .parse::<u32>()
                        .map_err(|_| ConfigError::InvalidSamplePeriod)?;
                    period_ms = Some(ms);
                }
                "duration" => {
                    let hours = value
                        .trim()
                        .parse::<f32>()
                        .map_err(|_| ConfigError::InvalidDuration)?;
                    duration_hours = Some(hours);
                }
                _ => {}
            }
        }

        let period_ms = period_ms.ok_or(ConfigError::MissingSamplePeriod)?;
        let duration_hours = duration_hours.ok_or(ConfigError::MissingDuration)?;
        Self::new(period_ms, duration_hours)
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn period_seconds(&self) -> f32 {
        self.period_ms as f32 / 1000.0
    }

    pub fn duration_hours(&self) -> f32 {
        self.duration_hours
    }

    pub fn duration_seconds(&self) -> f32 {
        self.duration_hours * 3600.0
    }

    /// Number of samples one capture produces: one at t = 0, then one per
    /// full period that fits in the duration.
    pub fn sample_count(&self) -> usize {
        (self.duration_seconds() / self.period_seconds()) as usize + 1
    }

    /// Writes the stock setup resource, defaults plus the human-readable
    /// reference table, for the storage collaborator to persist on first
    /// boot.
    pub fn render_default(w: &mut impl fmt::Write) -> fmt::Result {
        write!(w, "<configuration>\r\n")?;
        write!(w, "sample= {}\r\n", DEFAULT_PERIOD_MS)?;
        write!(w, "duration= {}\r\n\r\n", DEFAULT_DURATION_HOURS)?;
        write!(
            w,
            "****************************** REFERENCE ******************************\r\n\r\n"
        )?;
        write!(w, "sample period recorded in milliseconds (x10^-3 seconds)\r\n")?;
        write!(w, "duration of capture recorded in hours\r\n\r\n")?;
        write!(w, "  duration  | time (in hours)\r\n")?;
        write!(w, "-----------------------------\r\n")?;
        write!(w, "  10 seconds|  0.00277778\r\n")?;
        write!(w, "   1 minute |  0.01666667\r\n")?;
        write!(w, "  30 minutes|  0.50000000\r\n")?;
        write!(w, "   1 hour   |  1.00000000\r\n")?;
        write!(w, "   1 week   |  168.000000\r\n")?;
        write!(w, "   4 weeks  |  672.000000\r\n")?;
        write!(w, "   1 year   |  8760.00000")?;
        Ok(())
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            period_ms: DEFAULT_PERIOD_MS,
            duration_hours: DEFAULT_DURATION_HOURS,
        }
    }
}
