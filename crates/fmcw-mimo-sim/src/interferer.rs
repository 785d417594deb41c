//! Interfering Radar Model
//!
//! Models an uncoordinated second FMCW radar as seen at the victim
//! receiver input. The interferer runs its own chirp with its own carrier
//! offset and start time; its propagation geometry is collapsed into a
//! single aggregate arrival, applied identically to every TX/RX channel
//! pair (no spatial diversity).
//!
//! ```text
//! victim chirp     ____/      ____/
//!                 /          /
//! interferer          ___/       ___/     ← offset carrier, late start
//!                    /          /
//!                 |--| timing_offset
//! ```
//!
//! Within the victim's observation window, the interference is zero until
//! the interferer starts transmitting (`t < timing_offset`) and a
//! constant-amplitude chirp afterwards.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use fmcw_mimo_core::types::{IQBuffer, IQSample, RadarError, RadarResult};

/// An independent, uncoordinated FMCW emitter.
///
/// Fields are private: the chirp slope is always derived from bandwidth
/// and duration, and transmit power is validated non-negative at
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterferingRadar {
    carrier_freq_hz: f64,
    bandwidth_hz: f64,
    chirp_duration_s: f64,
    tx_power: f64,
    freq_offset_hz: f64,
    timing_offset_s: f64,
}

impl InterferingRadar {
    /// Create an interfering radar.
    ///
    /// * `tx_power` — power scale; the waveform amplitude is `sqrt(tx_power)`
    /// * `freq_offset_hz` — carrier offset Δf relative to the nominal `f0`
    /// * `timing_offset_s` — chirp start delay Δt in the victim time frame
    ///
    /// # Errors
    ///
    /// * [`RadarError::InvalidChirpDuration`] if `chirp_duration_s` is not
    ///   positive and finite
    /// * [`RadarError::InvalidTxPower`] if `tx_power` is negative or
    ///   non-finite
    pub fn new(
        carrier_freq_hz: f64,
        bandwidth_hz: f64,
        chirp_duration_s: f64,
        tx_power: f64,
        freq_offset_hz: f64,
        timing_offset_s: f64,
    ) -> RadarResult<Self> {
        if !(chirp_duration_s.is_finite() && chirp_duration_s > 0.0) {
            return Err(RadarError::InvalidChirpDuration(chirp_duration_s));
        }
        if !(tx_power.is_finite() && tx_power >= 0.0) {
            return Err(RadarError::InvalidTxPower(tx_power));
        }
        Ok(Self {
            carrier_freq_hz,
            bandwidth_hz,
            chirp_duration_s,
            tx_power,
            freq_offset_hz,
            timing_offset_s,
        })
    }

    /// Interferer carrier frequency in Hz (before the carrier offset).
    pub fn carrier_freq_hz(&self) -> f64 {
        self.carrier_freq_hz
    }

    /// Interferer sweep bandwidth in Hz.
    pub fn bandwidth_hz(&self) -> f64 {
        self.bandwidth_hz
    }

    /// Interferer chirp duration in seconds.
    pub fn chirp_duration_s(&self) -> f64 {
        self.chirp_duration_s
    }

    /// Transmit power scale (amplitude is its square root).
    pub fn tx_power(&self) -> f64 {
        self.tx_power
    }

    /// Carrier offset Δf in Hz.
    pub fn freq_offset_hz(&self) -> f64 {
        self.freq_offset_hz
    }

    /// Chirp start delay Δt in seconds.
    pub fn timing_offset_s(&self) -> f64 {
        self.timing_offset_s
    }

    /// Interferer chirp slope `k = B / Tc` in Hz/s, always recomputed.
    pub fn chirp_slope(&self) -> f64 {
        self.bandwidth_hz / self.chirp_duration_s
    }

    /// Generate the interference waveform over the victim's time axis.
    ///
    /// With `t2 = t − timing_offset`:
    ///
    /// * `t2 < 0`: exactly zero — the interferer has not started yet
    /// * `t2 ≥ 0`: `sqrt(tx_power)·exp(j·2π·((f0+Δf)·t2 + 0.5·k·t2²))`
    pub fn generate_interference(&self, t: &[f64]) -> IQBuffer {
        let k = self.chirp_slope();
        let f_start = self.carrier_freq_hz + self.freq_offset_hz;
        let amplitude = self.tx_power.sqrt();

        t.iter()
            .map(|&t| {
                let t2 = t - self.timing_offset_s;
                if t2 < 0.0 {
                    IQSample::new(0.0, 0.0)
                } else {
                    let phase = 2.0 * PI * (f_start * t2 + 0.5 * k * t2 * t2);
                    IQSample::new(amplitude * phase.cos(), amplitude * phase.sin())
                }
            })
            .collect()
    }
}
