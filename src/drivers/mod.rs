pub mod adxl362;
pub mod serial_console;
pub mod status_led;

pub use adxl362::{Adxl362, RawSample};
pub use serial_console::SerialConsole;
pub use status_led::StatusLeds;
