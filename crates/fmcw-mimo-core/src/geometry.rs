//! Radar Array Geometry and Chirp Generation
//!
//! This module holds the victim radar description: transmit/receive array
//! element positions and the linear FMCW chirp parameters, together with
//! the derived quantities the rest of the pipeline needs (chirp slope,
//! sample count, range resolution, maximum unambiguous range).
//!
//! ## The FMCW chirp
//!
//! The transmitter sweeps frequency linearly over one chirp:
//!
//! ```text
//! Frequency
//!     ^
//! f0+B|        ___/
//!     |     __/
//!     |  __/
//!   f0|_/
//!     +----------> Time
//!     0          Tc
//! ```
//!
//! The phase is the integral of the instantaneous frequency, so the
//! transmitted waveform is:
//!
//! ```text
//! s(t) = exp(j·2π·(f0·t + 0.5·k·t²)),   k = B / Tc
//! ```
//!
//! ## Derived quantities stay derived
//!
//! The chirp slope `k` is a computed accessor, never a stored field: there
//! is no way to set a slope that disagrees with `B / Tc`. Likewise the
//! element counts `M` and `N` are the lengths of the element-position
//! arrays, validated non-empty at construction — no separately stored
//! count can drift out of sync.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::types::{IQBuffer, IQSample, RadarError, RadarResult, SPEED_OF_LIGHT};

/// Transmit side of the victim radar: chirp parameters and TX array layout.
///
/// Element positions are 2-D `(x, y)` coordinates in meters. Fields are
/// private so the construction-time invariants (non-empty array, positive
/// chirp duration) cannot be broken afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransmitterConfig {
    carrier_freq_hz: f64,
    bandwidth_hz: f64,
    chirp_duration_s: f64,
    elements: Box<[[f64; 2]]>,
}

impl TransmitterConfig {
    /// Create a transmitter configuration.
    ///
    /// # Errors
    ///
    /// * [`RadarError::NoTxElements`] if `elements` is empty
    /// * [`RadarError::InvalidChirpDuration`] if `chirp_duration_s` is not
    ///   positive and finite
    pub fn new(
        carrier_freq_hz: f64,
        bandwidth_hz: f64,
        chirp_duration_s: f64,
        elements: Vec<[f64; 2]>,
    ) -> RadarResult<Self> {
        if elements.is_empty() {
            return Err(RadarError::NoTxElements);
        }
        if !(chirp_duration_s.is_finite() && chirp_duration_s > 0.0) {
            return Err(RadarError::InvalidChirpDuration(chirp_duration_s));
        }
        Ok(Self {
            carrier_freq_hz,
            bandwidth_hz,
            chirp_duration_s,
            elements: elements.into_boxed_slice(),
        })
    }

    /// Carrier (chirp start) frequency `f0` in Hz.
    pub fn carrier_freq_hz(&self) -> f64 {
        self.carrier_freq_hz
    }

    /// Sweep bandwidth `B` in Hz.
    pub fn bandwidth_hz(&self) -> f64 {
        self.bandwidth_hz
    }

    /// Chirp duration `Tc` in seconds.
    pub fn chirp_duration_s(&self) -> f64 {
        self.chirp_duration_s
    }

    /// TX element positions, `(x, y)` in meters.
    pub fn elements(&self) -> &[[f64; 2]] {
        &self.elements
    }

    /// Number of transmit elements `M` (always at least 1).
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Chirp slope `k = B / Tc` in Hz/s.
    ///
    /// Always recomputed from bandwidth and duration; there is no stored
    /// slope to fall out of sync.
    pub fn chirp_slope(&self) -> f64 {
        self.bandwidth_hz / self.chirp_duration_s
    }

    /// Carrier wavelength `λ = c / f0` in meters.
    pub fn wavelength(&self) -> f64 {
        SPEED_OF_LIGHT / self.carrier_freq_hz
    }

    /// Range bin resolution `ΔR = c / (2·B)` in meters.
    pub fn range_resolution(&self) -> f64 {
        SPEED_OF_LIGHT / (2.0 * self.bandwidth_hz)
    }

    /// Generate the one-way chirp replica over the given time axis.
    ///
    /// Per sample: `exp(j·2π·(f0·t + 0.5·k·t²))`. The waveform is identical
    /// for every TX element; array geometry affects propagation delay, not
    /// waveform shape.
    pub fn generate_chirp(&self, t: &[f64]) -> IQBuffer {
        let k = self.chirp_slope();
        let f0 = self.carrier_freq_hz;
        t.iter()
            .map(|&t| {
                let phase = 2.0 * PI * (f0 * t + 0.5 * k * t * t);
                IQSample::new(phase.cos(), phase.sin())
            })
            .collect()
    }
}

/// Receive side of the victim radar: baseband sample rate and RX array layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiverConfig {
    sample_rate_hz: f64,
    elements: Box<[[f64; 2]]>,
}

impl ReceiverConfig {
    /// Create a receiver configuration.
    ///
    /// # Errors
    ///
    /// * [`RadarError::NoRxElements`] if `elements` is empty
    /// * [`RadarError::InvalidSampleRate`] if `sample_rate_hz` is not
    ///   positive and finite
    pub fn new(sample_rate_hz: f64, elements: Vec<[f64; 2]>) -> RadarResult<Self> {
        if elements.is_empty() {
            return Err(RadarError::NoRxElements);
        }
        if !(sample_rate_hz.is_finite() && sample_rate_hz > 0.0) {
            return Err(RadarError::InvalidSampleRate(sample_rate_hz));
        }
        Ok(Self {
            sample_rate_hz,
            elements: elements.into_boxed_slice(),
        })
    }

    /// Baseband sample rate `fs` in Hz.
    pub fn sample_rate_hz(&self) -> f64 {
        self.sample_rate_hz
    }

    /// RX element positions, `(x, y)` in meters.
    pub fn elements(&self) -> &[[f64; 2]] {
        &self.elements
    }

    /// Number of receive elements `N` (always at least 1).
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }
}

/// One victim radar: a transmitter paired with a receiver.
///
/// Construction rejects parameter combinations that would produce an empty
/// observation window (`floor(fs·Tc) < 1`), so every built geometry yields
/// a usable time axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarGeometry {
    tx: TransmitterConfig,
    rx: ReceiverConfig,
}

impl RadarGeometry {
    /// Pair a transmitter with a receiver.
    ///
    /// # Errors
    ///
    /// [`RadarError::EmptyTimeAxis`] if `floor(fs·Tc)` is zero.
    pub fn new(tx: TransmitterConfig, rx: ReceiverConfig) -> RadarResult<Self> {
        let ns = (rx.sample_rate_hz() * tx.chirp_duration_s()).floor();
        if ns < 1.0 {
            return Err(RadarError::EmptyTimeAxis {
                sample_rate_hz: rx.sample_rate_hz(),
                chirp_duration_s: tx.chirp_duration_s(),
            });
        }
        Ok(Self { tx, rx })
    }

    /// 77 GHz automotive MIMO preset: 1 GHz sweep over 1 ms, 2 MS/s
    /// baseband, 2×2 half-wavelength arrays.
    pub fn automotive_77ghz() -> Self {
        let f0 = 77.0e9;
        let half_lambda = 0.5 * SPEED_OF_LIGHT / f0;
        let tx = TransmitterConfig::new(
            f0,
            1.0e9,
            1.0e-3,
            vec![[0.0, 0.0], [0.0, half_lambda]],
        )
        .expect("preset transmitter parameters are valid");
        let rx = ReceiverConfig::new(2.0e6, vec![[0.0, half_lambda], [0.0, 0.0]])
            .expect("preset receiver parameters are valid");
        Self::new(tx, rx).expect("preset geometry yields a non-empty time axis")
    }

    /// Transmitter configuration.
    pub fn tx(&self) -> &TransmitterConfig {
        &self.tx
    }

    /// Receiver configuration.
    pub fn rx(&self) -> &ReceiverConfig {
        &self.rx
    }

    /// Number of fast-time samples per chirp, `Ns = floor(fs·Tc)`.
    ///
    /// At least 1 by construction.
    pub fn num_samples(&self) -> usize {
        (self.rx.sample_rate_hz() * self.tx.chirp_duration_s()).floor() as usize
    }

    /// Fast-time axis `t[i] = i / fs`, `i = 0..Ns`.
    pub fn time_axis(&self) -> Vec<f64> {
        let fs = self.rx.sample_rate_hz();
        (0..self.num_samples()).map(|i| i as f64 / fs).collect()
    }

    /// Maximum unambiguous range `Rmax = c·(fs/2) / (2·k)` in meters.
    ///
    /// The beat frequency observable at the Nyquist limit of the baseband
    /// sample rate, mapped through the beat-to-range scale.
    pub fn max_unambiguous_range(&self) -> f64 {
        let k = self.tx.chirp_slope();
        SPEED_OF_LIGHT * (self.rx.sample_rate_hz() / 2.0) / (2.0 * k)
    }
}
