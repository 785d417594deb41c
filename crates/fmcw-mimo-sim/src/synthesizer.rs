//! Signal Synthesizer — Dechirped Receive Cube Generation
//!
//! The core of the simulator: for each point target and each (TX element,
//! RX element) pair, compose a delayed, Doppler-shifted replica of the
//! transmit chirp; accumulate across targets; add co-channel interference
//! and receiver noise; then dechirp against the shared reference chirp.
//!
//! ## Per-channel target return
//!
//! For a target at position `p` with radial velocity `v`:
//!
//! ```text
//! d_tx = |tx[m] − p|          one-way TX path (2-D Euclidean)
//! d_rx = |p − rx[n]|          one-way RX path
//! τ    = (d_tx + d_rx) / c    two-way propagation delay
//! fd   = 2·v / λ              Doppler shift, λ = c / f0
//!
//! echo(t) = 10^(refl_dB/20) · exp(j·2π·(f0·(t−τ) + 0.5·k·(t−τ)² + fd·t))
//! ```
//!
//! ## Doppler approximation
//!
//! The Doppler term modulates the *total elapsed time* `t`, not the
//! delayed time `t−τ`. At radar timescales `τ ≪ t` this is a standard
//! simplification, and it is part of this model's contract: callers
//! comparing against closed-form expressions must use `fd·t`.
//!
//! ## Determinism
//!
//! The synthesis is a pure function of its inputs except for the injected
//! noise, which is drawn from a caller-supplied [`Rng`]. Seeding that
//! generator makes the whole pipeline reproducible; a noise standard
//! deviation of exactly zero adds nothing at all, so noiseless scenes are
//! bitwise repeatable.

use std::f64::consts::PI;

use rand::Rng;
use rand_distr::{Distribution, Normal};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use fmcw_mimo_core::geometry::RadarGeometry;
use fmcw_mimo_core::types::{IQSample, RadarError, RadarResult, SPEED_OF_LIGHT};

use crate::cube::DechirpedCube;
use crate::interferer::InterferingRadar;
use crate::target::Target;

/// Synthesizes the dechirped receive cube for a radar scene.
///
/// Holds the victim geometry and the noise level; targets, interferer and
/// the random generator are passed per call, so one synthesizer can run
/// many independent scenes.
#[derive(Debug, Clone)]
pub struct SignalSynthesizer {
    radar: RadarGeometry,
    noise_std: f64,
}

impl SignalSynthesizer {
    /// Create a synthesizer.
    ///
    /// The geometry was already validated at its own construction (element
    /// arrays non-empty, `floor(fs·Tc) ≥ 1`), so the only check left is
    /// the noise level.
    ///
    /// # Errors
    ///
    /// [`RadarError::InvalidNoiseStd`] if `noise_std` is negative or
    /// non-finite. `noise_std` applies independently to the real and
    /// imaginary noise components.
    pub fn new(radar: RadarGeometry, noise_std: f64) -> RadarResult<Self> {
        if !(noise_std.is_finite() && noise_std >= 0.0) {
            return Err(RadarError::InvalidNoiseStd(noise_std));
        }
        Ok(Self { radar, noise_std })
    }

    /// The victim radar geometry.
    pub fn radar(&self) -> &RadarGeometry {
        &self.radar
    }

    /// Per-component noise standard deviation.
    pub fn noise_std(&self) -> f64 {
        self.noise_std
    }

    /// Simulate one chirp and return `(time_axis, dechirped_cube)`.
    ///
    /// * `targets` — borrowed scene description; an empty list is a valid
    ///   scene (the cube is then interference + noise only). Non-finite
    ///   target fields are not validated and propagate NaNs.
    /// * `interferer` — optional uncoordinated second radar; its waveform
    ///   is computed once and added identically to every channel.
    /// * `rng` — noise source; pass a seeded generator for reproducible
    ///   output.
    ///
    /// The cube is freshly allocated on every call and handed to the
    /// caller; the synthesizer keeps no state between calls.
    pub fn simulate(
        &self,
        targets: &[Target],
        interferer: Option<&InterferingRadar>,
        rng: &mut impl Rng,
    ) -> (Vec<f64>, DechirpedCube) {
        let t = self.radar.time_axis();
        let ns = t.len();
        let tx = self.radar.tx();
        let rx = self.radar.rx();
        let num_rx = rx.element_count();
        let f0 = tx.carrier_freq_hz();
        let chirp_slope = tx.chirp_slope();
        let wavelength = tx.wavelength();
        let tx_elements = tx.elements();
        let rx_elements = rx.elements();

        // One reference chirp shared by all TX paths: geometry affects
        // propagation delay, not waveform shape.
        let reference_chirp = tx.generate_chirp(&t);

        let mut cube = DechirpedCube::zeros(tx.element_count(), num_rx, ns);

        // Target returns, one contiguous channel at a time. Channel order
        // and per-channel target order are fixed, so the parallel fill is
        // bitwise identical to the sequential one.
        let fill = |(ch, channel): (usize, &mut [IQSample])| {
            let tx_pos = tx_elements[ch / num_rx];
            let rx_pos = rx_elements[ch % num_rx];
            add_target_returns(
                channel,
                &t,
                tx_pos,
                rx_pos,
                targets,
                f0,
                chirp_slope,
                wavelength,
            );
        };
        #[cfg(feature = "parallel")]
        cube.data_mut().par_chunks_mut(ns).enumerate().for_each(fill);
        #[cfg(not(feature = "parallel"))]
        cube.data_mut().chunks_mut(ns).enumerate().for_each(fill);

        // Interference: a single aggregate waveform broadcast to every
        // channel pair (no interferer spatial diversity).
        if let Some(interferer) = interferer {
            let waveform = interferer.generate_interference(&t);
            for channel in cube.data_mut().chunks_mut(ns) {
                for (s, &w) in channel.iter_mut().zip(&waveform) {
                    *s += w;
                }
            }
        }

        // Circularly-symmetric complex Gaussian noise: real and imaginary
        // parts i.i.d. Normal(0, σ). σ = 0 skips sampling entirely so a
        // noiseless cube stays exactly zero where nothing was added.
        if self.noise_std > 0.0 {
            let normal = Normal::new(0.0, self.noise_std).unwrap();
            for s in cube.data_mut().iter_mut() {
                *s += IQSample::new(normal.sample(rng), normal.sample(rng));
            }
        }

        // Dechirp: mix every channel with the conjugate of the reference.
        for channel in cube.data_mut().chunks_mut(ns) {
            for (s, r) in channel.iter_mut().zip(&reference_chirp) {
                *s *= r.conj();
            }
        }

        (t, cube)
    }
}

/// Accumulate all targets' delayed, Doppler-shifted chirp replicas into
/// one channel.
#[allow(clippy::too_many_arguments)]
fn add_target_returns(
    channel: &mut [IQSample],
    t: &[f64],
    tx_pos: [f64; 2],
    rx_pos: [f64; 2],
    targets: &[Target],
    f0: f64,
    chirp_slope: f64,
    wavelength: f64,
) {
    for target in targets {
        let d_tx = (tx_pos[0] - target.position[0]).hypot(tx_pos[1] - target.position[1]);
        let d_rx = (target.position[0] - rx_pos[0]).hypot(target.position[1] - rx_pos[1]);
        let tau = (d_tx + d_rx) / SPEED_OF_LIGHT;
        let doppler = target.doppler_freq(wavelength);
        let amplitude = target.amplitude();

        for (s, &ti) in channel.iter_mut().zip(t) {
            let delayed = ti - tau;
            // Doppler rides on total elapsed time, see module docs
            let phase = 2.0
                * PI
                * (f0 * delayed + 0.5 * chirp_slope * delayed * delayed + doppler * ti);
            *s += IQSample::new(amplitude * phase.cos(), amplitude * phase.sin());
        }
    }
}
