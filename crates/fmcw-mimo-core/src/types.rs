//! Core types for FMCW radar signal processing
//!
//! This module defines the fundamental types used throughout the library,
//! particularly for representing complex baseband I/Q samples.
//!
//! ## I/Q representation
//!
//! All waveforms are complex baseband sequences:
//!
//! ```text
//!            Q (Imaginary)
//!            ^
//!            |     * (I=0.7, Q=0.7)
//!            |    /
//!            |   / magnitude = |s|
//!            |  /  phase = arg(s)
//!            | /
//!   ---------+---------> I (Real)
//!            |
//! ```
//!
//! A chirp, a delayed target echo, and an interfering sweep are all just
//! phase trajectories on the unit circle scaled by an amplitude; the range
//! information lives entirely in the phase history.

use num_complex::Complex64;

/// Type alias for complex numbers using f64 precision
pub type Complex = Complex64;

/// A single I/Q sample point
pub type IQSample = Complex64;

/// A buffer of I/Q samples
pub type IQBuffer = Vec<IQSample>;

/// Speed of light in vacuum (m/s)
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Result type for radar simulation operations
pub type RadarResult<T> = Result<T, RadarError>;

/// Errors that can occur while building or running a radar simulation
///
/// All variants are produced at construction/validation time; once a
/// synthesizer or estimator has been built, the per-sample loops are
/// infallible.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RadarError {
    #[error("transmitter must have at least one array element")]
    NoTxElements,

    #[error("receiver must have at least one array element")]
    NoRxElements,

    #[error("chirp duration must be positive and finite, got {0} s")]
    InvalidChirpDuration(f64),

    #[error("sample rate must be positive and finite, got {0} Hz")]
    InvalidSampleRate(f64),

    #[error("degenerate time axis: fs = {sample_rate_hz} Hz, Tc = {chirp_duration_s} s yields zero samples")]
    EmptyTimeAxis {
        sample_rate_hz: f64,
        chirp_duration_s: f64,
    },

    #[error("noise standard deviation must be non-negative and finite, got {0}")]
    InvalidNoiseStd(f64),

    #[error("interferer transmit power must be non-negative and finite, got {0}")]
    InvalidTxPower(f64),

    #[error("signal length {actual} does not match planned FFT size {expected}")]
    FftSizeMismatch { expected: usize, actual: usize },
}
