//! # FMCW MIMO Core DSP Library
//!
//! Core signal processing primitives for simulating a MIMO FMCW
//! (Frequency-Modulated Continuous-Wave) radar:
//!
//! - **Radar geometry**: transmit/receive array layouts and chirp timing,
//!   with all derived quantities (chirp slope, range resolution, maximum
//!   unambiguous range) computed rather than stored
//! - **Chirp generation**: the linear frequency sweep
//!   `exp(j·2π·(f0·t + 0.5·k·t²))`
//! - **Range spectrum estimation**: dechirped time series → centered FFT →
//!   magnitude in dB on a physical range axis
//!
//! Scene-level simulation (point targets, interference, noise, the
//! dechirped receive cube) lives in the companion `fmcw-mimo-sim` crate;
//! this crate is pure, deterministic DSP with no randomness.
//!
//! ## Processing chain
//!
//! ```text
//! TX chirp ────────────────┐
//!                          ├─ Conjugate mix ── Beat signal ── Range FFT
//! RX echo (delayed copy) ──┘                                     │
//!                                              range axis + magnitude (dB)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use fmcw_mimo_core::{RadarGeometry, RangeSpectrumEstimator};
//!
//! let geometry = RadarGeometry::automotive_77ghz();
//! let t = geometry.time_axis();
//! let chirp = geometry.tx().generate_chirp(&t);
//!
//! // Dechirping the chirp against itself yields a DC tone: the peak of
//! // the range profile sits at 0 m.
//! let beat: Vec<_> = chirp.iter().map(|s| s * s.conj()).collect();
//!
//! let mut estimator = RangeSpectrumEstimator::new(geometry.num_samples());
//! let spectrum = estimator
//!     .estimate(&beat, geometry.rx().sample_rate_hz(), geometry.tx().chirp_slope())
//!     .unwrap();
//! let (peak_range, _) = spectrum.peak().unwrap();
//! assert!(peak_range.abs() < geometry.tx().range_resolution());
//! ```

pub mod geometry;
pub mod range_fft;
pub mod types;

pub use geometry::{RadarGeometry, ReceiverConfig, TransmitterConfig};
pub use range_fft::{RangeSpectrum, RangeSpectrumEstimator};
pub use types::{Complex, IQBuffer, IQSample, RadarError, RadarResult, SPEED_OF_LIGHT};
