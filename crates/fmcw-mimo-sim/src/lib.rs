//! # FMCW MIMO Scene Simulation
//!
//! Simulates the received signal of a MIMO FMCW radar observing point
//! targets under co-channel interference from a second, uncoordinated
//! FMCW radar plus thermal noise. The output is a dechirped `M × N × Ns`
//! receive cube ready for range-FFT processing with
//! [`fmcw_mimo_core::RangeSpectrumEstimator`].
//!
//! ## Signal flow
//!
//! ```text
//! RadarGeometry ─┐
//! Targets ───────┼─ SignalSynthesizer::simulate ─ DechirpedCube ─ Range FFT
//! Interferer ────┤        (delay + Doppler,            │
//! Noise σ + RNG ─┘     interference, noise,     per-channel slices /
//!                          dechirp)              coherent sum
//! ```
//!
//! ## Example
//!
//! ```rust
//! use fmcw_mimo_sim::{SignalSynthesizer, Target};
//! use fmcw_mimo_core::{RadarGeometry, RangeSpectrumEstimator};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let geometry = RadarGeometry::automotive_77ghz();
//! let targets = vec![
//!     Target::new([30.0, 0.0], 0.0, -10.0),
//!     Target::new([60.0, 0.0], 0.0, -20.0),
//! ];
//!
//! let synthesizer = SignalSynthesizer::new(geometry.clone(), 1.0e-3).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! let (_t, cube) = synthesizer.simulate(&targets, None, &mut rng);
//!
//! let mut estimator = RangeSpectrumEstimator::new(geometry.num_samples());
//! let spectrum = estimator
//!     .estimate(
//!         cube.channel(0, 0),
//!         geometry.rx().sample_rate_hz(),
//!         geometry.tx().chirp_slope(),
//!     )
//!     .unwrap();
//! let (peak_range, _db) = spectrum.peak().unwrap();
//! // rx·conj(tx) dechirping puts target beats on the negative half-axis
//! assert!((peak_range.abs() - 30.0).abs() < 2.0 * geometry.tx().range_resolution());
//! ```
//!
//! Everything is single-chirp: no slow-time/Doppler FFT, no tracking, no
//! clutter. With the `parallel` feature the per-channel cube fill runs on
//! rayon, bitwise identical to the sequential path.

pub mod cube;
pub mod interferer;
pub mod synthesizer;
pub mod target;

pub use cube::DechirpedCube;
pub use interferer::InterferingRadar;
pub use synthesizer::SignalSynthesizer;
pub use target::Target;
