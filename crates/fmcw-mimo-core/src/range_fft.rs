//! Range Spectrum Estimation
//!
//! Converts one dechirped channel's time series into a magnitude (dB)
//! spectrum on a physical range axis.
//!
//! ## Why an FFT gives range
//!
//! After dechirping (mixing the received signal with the conjugate of the
//! transmitted chirp), each point target becomes a constant-frequency tone
//! whose beat frequency is proportional to its propagation delay:
//!
//! ```text
//! Received chirp × conj(Reference chirp) = Tone at beat frequency
//!
//!     │ Received     │ Reference      │ Result:
//! f   │      /       │      /         │  Single tone
//!     │    /         │    /           │     |
//!     │  /      ×    │  /    (conj) = │     |
//!     │/             │/               │     |
//!     └──────────    └──────────      └─────┴───── f
//!                                          ^
//!                                      f_beat ∝ delay
//! ```
//!
//! The FFT bin axis is mapped to meters via `range = c·f_beat / (2·k)`
//! where `k` is the chirp slope.
//!
//! ## Sign convention and the two-sided axis
//!
//! With `rx · conj(tx)` dechirping, a target at two-way delay `τ` beats at
//! `−k·τ` (plus its Doppler shift), so target peaks land on the *negative*
//! half of the axis; the physical range is the absolute value of the peak
//! position. The estimator therefore returns the full two-sided axis by
//! default — both negative and positive ranges — and leaves any trimming
//! to the caller (or to the opt-in [`nonnegative_only`] flag).
//!
//! [`nonnegative_only`]: RangeSpectrumEstimator::nonnegative_only

use std::fmt;
use std::sync::Arc;

use rustfft::{Fft, FftPlanner};

use crate::types::{Complex, IQSample, RadarResult, RadarError, SPEED_OF_LIGHT};

/// Small offset added to FFT magnitudes before taking the logarithm, so an
/// exactly-zero bin maps to a large negative dB value instead of -inf.
const LOG_EPSILON: f64 = 1e-12;

/// A range profile: physical range axis and matching magnitude spectrum.
///
/// `ranges[i]` and `magnitude_db[i]` correspond index-for-index, ordered by
/// ascending (shifted) frequency bin.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSpectrum {
    /// Range axis in meters (two-sided unless trimmed).
    pub ranges: Vec<f64>,
    /// Magnitude spectrum in dB, `20·log10(|S| + ε)`.
    pub magnitude_db: Vec<f64>,
}

impl RangeSpectrum {
    /// The `(range, magnitude_db)` pair of the strongest bin, or `None`
    /// for an empty spectrum.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.magnitude_db
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).expect("magnitudes are finite"))
            .map(|(i, &mag)| (self.ranges[i], mag))
    }
}

/// Range-FFT processor for dechirped FMCW channels.
///
/// Plans one FFT of the configured size up front and reuses it (with a
/// scratch buffer) across calls; identical inputs always produce identical
/// outputs.
pub struct RangeSpectrumEstimator {
    size: usize,
    fft: Arc<dyn Fft<f64>>,
    scratch: Vec<Complex>,
    nonnegative_only: bool,
}

impl fmt::Debug for RangeSpectrumEstimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSpectrumEstimator")
            .field("size", &self.size)
            .field("nonnegative_only", &self.nonnegative_only)
            .finish()
    }
}

impl RangeSpectrumEstimator {
    /// Create an estimator for signals of exactly `size` samples.
    ///
    /// Any size is accepted, including non-powers-of-two; no zero padding
    /// is applied, so bin `i` of the output always corresponds to input
    /// sample frequency `i·fs/size`.
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size);
        let scratch = vec![Complex::new(0.0, 0.0); fft.get_inplace_scratch_len()];
        Self {
            size,
            fft,
            scratch,
            nonnegative_only: false,
        }
    }

    /// Trim the output to non-negative ranges only.
    ///
    /// Off by default: the untrimmed two-sided axis is the reference
    /// behavior, and target peaks live on the negative half (see the
    /// module docs).
    pub fn nonnegative_only(mut self, enabled: bool) -> Self {
        self.nonnegative_only = enabled;
        self
    }

    /// Planned FFT size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Compute the range spectrum of one dechirped channel.
    ///
    /// * `signal` — dechirped time series, exactly [`size`](Self::size) samples
    /// * `sample_rate_hz` — baseband sample rate `fs`
    /// * `chirp_slope` — victim chirp slope `k = B/Tc` in Hz/s
    ///
    /// The spectrum is frequency-shifted so zero frequency sits at the
    /// center, converted to dB, and the shifted bin axis is mapped to
    /// meters via `range = c·f_beat / (2·k)`.
    ///
    /// # Errors
    ///
    /// [`RadarError::FftSizeMismatch`] if `signal.len()` differs from the
    /// planned size.
    pub fn estimate(
        &mut self,
        signal: &[IQSample],
        sample_rate_hz: f64,
        chirp_slope: f64,
    ) -> RadarResult<RangeSpectrum> {
        if signal.len() != self.size {
            return Err(RadarError::FftSizeMismatch {
                expected: self.size,
                actual: signal.len(),
            });
        }

        let mut buffer = signal.to_vec();
        self.fft.process_with_scratch(&mut buffer, &mut self.scratch);
        let shifted = fft_shift(&buffer);

        let n = self.size;
        let bin_spacing = sample_rate_hz / n as f64;
        let half = (n / 2) as f64;

        let mut ranges = Vec::with_capacity(n);
        let mut magnitude_db = Vec::with_capacity(n);
        for (i, s) in shifted.iter().enumerate() {
            let beat_freq = (i as f64 - half) * bin_spacing;
            let range = SPEED_OF_LIGHT * beat_freq / (2.0 * chirp_slope);
            if self.nonnegative_only && range < 0.0 {
                continue;
            }
            ranges.push(range);
            magnitude_db.push(20.0 * (s.norm() + LOG_EPSILON).log10());
        }

        Ok(RangeSpectrum {
            ranges,
            magnitude_db,
        })
    }
}

/// Move zero frequency to the center of the spectrum.
///
/// Matches the usual DFT-shift convention for both even and odd lengths:
/// the second half (starting at bin `ceil(n/2)`) is rotated to the front,
/// so output index `i` carries frequency `(i - floor(n/2))·fs/n`.
fn fft_shift<T: Copy>(spectrum: &[T]) -> Vec<T> {
    let n = spectrum.len();
    let split = n - n / 2;
    let mut shifted = Vec::with_capacity(n);
    shifted.extend_from_slice(&spectrum[split..]);
    shifted.extend_from_slice(&spectrum[..split]);
    shifted
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    /// Unit-magnitude complex tone at `freq` Hz.
    fn tone(n: usize, sample_rate: f64, freq: f64) -> Vec<Complex> {
        (0..n)
            .map(|i| {
                let t = i as f64 / sample_rate;
                let phase = 2.0 * PI * freq * t;
                Complex::new(phase.cos(), phase.sin())
            })
            .collect()
    }

    #[test]
    fn test_tone_maps_to_expected_range() {
        let n = 256;
        let fs = 256.0;
        let k = 1.0e6; // Hz/s
        let freq = 10.0;

        let signal = tone(n, fs, freq);
        let mut estimator = RangeSpectrumEstimator::new(n);
        let spectrum = estimator.estimate(&signal, fs, k).unwrap();

        assert_eq!(spectrum.ranges.len(), n);
        assert_eq!(spectrum.magnitude_db.len(), n);

        let (peak_range, peak_db) = spectrum.peak().unwrap();
        let expected = SPEED_OF_LIGHT * freq / (2.0 * k);
        assert!(
            (peak_range - expected).abs() < 1e-9,
            "peak at {peak_range} m, expected {expected} m"
        );

        // Unit tone on an exact bin: |S| = n at the peak
        assert!((peak_db - 20.0 * (n as f64).log10()).abs() < 1e-6);
    }

    #[test]
    fn test_negative_frequency_maps_to_negative_range() {
        let n = 128;
        let fs = 128.0;
        let k = 1.0e6;

        let signal = tone(n, fs, -8.0);
        let mut estimator = RangeSpectrumEstimator::new(n);
        let spectrum = estimator.estimate(&signal, fs, k).unwrap();

        let (peak_range, _) = spectrum.peak().unwrap();
        let expected = SPEED_OF_LIGHT * -8.0 / (2.0 * k);
        assert!((peak_range - expected).abs() < 1e-9);
    }

    #[test]
    fn test_axis_is_two_sided_and_bounded_by_nyquist() {
        let n = 64;
        let fs = 1000.0;
        let k = 2.0e9;

        let signal = vec![Complex::new(0.0, 0.0); n];
        let mut estimator = RangeSpectrumEstimator::new(n);
        let spectrum = estimator.estimate(&signal, fs, k).unwrap();

        // Even length: first bin sits exactly at -fs/2, i.e. -Rmax
        let rmax = SPEED_OF_LIGHT * (fs / 2.0) / (2.0 * k);
        assert!((spectrum.ranges[0] + rmax).abs() < 1e-12);

        let max_abs = spectrum
            .ranges
            .iter()
            .fold(0.0_f64, |acc, r| acc.max(r.abs()));
        assert!((max_abs - rmax).abs() < 1e-12);

        // Axis ascends monotonically
        for pair in spectrum.ranges.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_odd_length_shift() {
        let n = 5;
        let fs = 5.0;
        let k = 1.0e6;

        // Tone exactly on bin +1
        let signal = tone(n, fs, 1.0);
        let mut estimator = RangeSpectrumEstimator::new(n);
        let spectrum = estimator.estimate(&signal, fs, k).unwrap();

        // Shifted axis for n=5: bins -2,-1,0,+1,+2; zero at index 2
        assert!(spectrum.ranges[2].abs() < 1e-12);
        let (peak_range, _) = spectrum.peak().unwrap();
        assert!((peak_range - SPEED_OF_LIGHT * 1.0 / (2.0 * k)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_signal_hits_log_floor() {
        let n = 16;
        let signal = vec![Complex::new(0.0, 0.0); n];
        let mut estimator = RangeSpectrumEstimator::new(n);
        let spectrum = estimator.estimate(&signal, 16.0, 1.0e6).unwrap();

        // 20·log10(ε) = -240 dB floor
        for &db in &spectrum.magnitude_db {
            assert!((db - (-240.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let n = 100;
        let signal = tone(n, 100.0, 7.0);
        let mut estimator = RangeSpectrumEstimator::new(n);

        let a = estimator.estimate(&signal, 100.0, 1.0e6).unwrap();
        let b = estimator.estimate(&signal, 100.0, 1.0e6).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_size_mismatch_rejected() {
        let mut estimator = RangeSpectrumEstimator::new(64);
        let short = vec![Complex::new(0.0, 0.0); 32];
        assert_eq!(
            estimator.estimate(&short, 1.0e6, 1.0e12).unwrap_err(),
            RadarError::FftSizeMismatch {
                expected: 64,
                actual: 32
            }
        );
    }

    #[test]
    fn test_nonnegative_only_trims_axis() {
        let n = 64;
        let fs = 64.0;
        let k = 1.0e6;

        let signal = tone(n, fs, 5.0);
        let mut estimator = RangeSpectrumEstimator::new(n).nonnegative_only(true);
        let spectrum = estimator.estimate(&signal, fs, k).unwrap();

        // Even length: DC bin plus the positive half
        assert_eq!(spectrum.ranges.len(), n / 2);
        assert_eq!(spectrum.magnitude_db.len(), n / 2);
        for &r in &spectrum.ranges {
            assert!(r >= 0.0);
        }

        let (peak_range, _) = spectrum.peak().unwrap();
        assert!((peak_range - SPEED_OF_LIGHT * 5.0 / (2.0 * k)).abs() < 1e-9);
    }
}
