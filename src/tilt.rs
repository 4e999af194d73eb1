//! Tilt angles from raw accelerometer counts.

use core::f32::consts::PI;
use libm::{atan2f, sqrtf};

const RAD_TO_DEG: f32 = 180.0 / PI;

/// Pitch and roll in degrees, derived from the gravity vector's projection
/// onto the sensor axes.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TiltSample {
    pub pitch: f32,
    pub roll: f32,
}

/// Converts one raw axis triple to pitch/roll.
///
/// Pure and deterministic. Pitch lies in [-180, 180], roll in [-90, 90].
/// A free-falling sensor (y = 0, z = 0) yields pitch = 0 by the two-argument
/// arctangent convention `atan2(0, 0) = 0`; that is a defined result, not an
/// error.
pub fn from_axes(x: i8, y: i8, z: i8) -> TiltSample {
    let x = x as f32;
    let y = y as f32;
    let z = z as f32;
    TiltSample {
        pitch: -atan2f(-y, z) * RAD_TO_DEG,
        roll: atan2f(x, sqrtf(y * y + z * z)) * RAD_TO_DEG,
    }
}
