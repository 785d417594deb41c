//! Dechirped Receive Cube
//!
//! The result of one simulation call: an `M × N × Ns` array of complex
//! baseband samples, one fast-time series per (TX element, RX element)
//! pair. The cube is produced fresh by every call and owned by the caller;
//! nothing in the simulator retains it.
//!
//! Storage is a single flat buffer in channel-major order
//! (`[tx][rx][sample]`), so each channel is a contiguous slice — cheap to
//! hand to the range-FFT estimator and easy to fill in parallel.

use fmcw_mimo_core::types::{IQBuffer, IQSample};

/// A freshly synthesized `M × N × Ns` cube of dechirped baseband samples.
#[derive(Debug, Clone, PartialEq)]
pub struct DechirpedCube {
    num_tx: usize,
    num_rx: usize,
    num_samples: usize,
    data: Vec<IQSample>,
}

impl DechirpedCube {
    /// Allocate an all-zero cube.
    pub(crate) fn zeros(num_tx: usize, num_rx: usize, num_samples: usize) -> Self {
        Self {
            num_tx,
            num_rx,
            num_samples,
            data: vec![IQSample::new(0.0, 0.0); num_tx * num_rx * num_samples],
        }
    }

    /// Number of transmit elements `M`.
    pub fn num_tx(&self) -> usize {
        self.num_tx
    }

    /// Number of receive elements `N`.
    pub fn num_rx(&self) -> usize {
        self.num_rx
    }

    /// Number of fast-time samples `Ns` per channel.
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// The dechirped time series for one (TX, RX) channel pair.
    ///
    /// # Panics
    ///
    /// Panics if `tx` or `rx` is out of bounds.
    pub fn channel(&self, tx: usize, rx: usize) -> &[IQSample] {
        assert!(tx < self.num_tx, "tx index {tx} out of bounds");
        assert!(rx < self.num_rx, "rx index {rx} out of bounds");
        let start = (tx * self.num_rx + rx) * self.num_samples;
        &self.data[start..start + self.num_samples]
    }

    /// Flat sample storage, channel-major.
    pub(crate) fn data_mut(&mut self) -> &mut [IQSample] {
        &mut self.data
    }

    /// All samples of the cube in channel-major order.
    pub fn samples(&self) -> &[IQSample] {
        &self.data
    }

    /// Coherent virtual-array sum: per-sample complex sum over every
    /// (TX, RX) channel pair.
    ///
    /// Combining all `M·N` channels coherently raises the target peaks
    /// relative to uncorrelated noise, which is the usual first step
    /// before peak extraction on a MIMO cube.
    pub fn coherent_sum(&self) -> IQBuffer {
        let mut sum = vec![IQSample::new(0.0, 0.0); self.num_samples];
        for channel in self.data.chunks_exact(self.num_samples) {
            for (acc, &s) in sum.iter_mut().zip(channel) {
                *acc += s;
            }
        }
        sum
    }
}
