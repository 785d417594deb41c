//! Point Target Description
//!
//! A target is an idealized point scatterer: a 2-D position, a signed
//! radial velocity, and a reflectivity that scales the echo amplitude.
//! Targets are plain values owned by the caller that builds the scene;
//! the synthesizer only borrows them for the duration of one simulation
//! call.

use serde::{Deserialize, Serialize};

/// An idealized point scatterer.
///
/// Positions and velocities are not validated: a non-finite value
/// propagates NaNs through the synthesized cube, which is the caller's
/// contract to avoid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Position `(x, y)` in meters.
    pub position: [f64; 2],
    /// Radial velocity in m/s; positive means approaching the radar.
    pub radial_velocity: f64,
    /// Reflectivity in dB, converted to linear amplitude as
    /// `10^(dB/20)` (voltage-domain dB).
    pub reflectivity_db: f64,
}

impl Target {
    /// Create a point target.
    pub fn new(position: [f64; 2], radial_velocity: f64, reflectivity_db: f64) -> Self {
        Self {
            position,
            radial_velocity,
            reflectivity_db,
        }
    }

    /// Linear echo amplitude, `10^(reflectivity_db / 20)`.
    ///
    /// The exponent is ÷20, not ÷10: reflectivity scales the signal
    /// amplitude, so its dB figure lives in the voltage domain.
    pub fn amplitude(&self) -> f64 {
        10.0_f64.powf(self.reflectivity_db / 20.0)
    }

    /// Doppler frequency `fd = 2·v / λ` in Hz for the given carrier
    /// wavelength.
    pub fn doppler_freq(&self, wavelength: f64) -> f64 {
        2.0 * self.radial_velocity / wavelength
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amplitude_uses_voltage_db() {
        assert!((Target::new([0.0, 0.0], 0.0, 0.0).amplitude() - 1.0).abs() < 1e-12);
        assert!((Target::new([0.0, 0.0], 0.0, -20.0).amplitude() - 0.1).abs() < 1e-12);
        assert!(
            (Target::new([0.0, 0.0], 0.0, -10.0).amplitude() - 10.0_f64.powf(-0.5)).abs() < 1e-12
        );
    }

    #[test]
    fn test_doppler_sign_follows_velocity() {
        let wavelength = 0.0039; // ~77 GHz
        let approaching = Target::new([30.0, 0.0], 10.0, 0.0);
        let receding = Target::new([30.0, 0.0], -10.0, 0.0);

        assert!((approaching.doppler_freq(wavelength) - 2.0 * 10.0 / wavelength).abs() < 1e-9);
        assert!(approaching.doppler_freq(wavelength) > 0.0);
        assert!(receding.doppler_freq(wavelength) < 0.0);
    }
}
