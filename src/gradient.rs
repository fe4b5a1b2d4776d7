//! Mapping of 16-bit grayscale samples to 8-bit RGB.
//!
//! Both gradients are pure per-sample functions: one sample in, one
//! `r, g, b` triple out, in the same order as the input.

use alloc::vec::Vec;
use core::num::NonZeroU16;

/// How samples are turned into color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Gradient {
    /// `r = g = b = floor(255 * sample / max_value)`.
    #[default]
    Grayscale,
    /// Blue at zero, green at the midpoint, red at `max_value`.
    Rainbow,
}

impl Gradient {
    /// Map one sample to an `[r, g, b]` triple.
    ///
    /// Samples above `max_value` are clamped to it.
    #[inline]
    pub fn map_sample(self, sample: u16, max_value: NonZeroU16) -> [u8; 3] {
        let max = max_value.get();
        let sample = sample.min(max);
        match self {
            Gradient::Grayscale => {
                let v = (255 * u32::from(sample) / u32::from(max)) as u8;
                [v, v, v]
            }
            Gradient::Rainbow => {
                let middle = f64::from(max) / 2.0;
                let ratio = f64::from(sample) / middle;
                let r = channel(255.0 * (ratio - 1.0));
                let b = channel(255.0 * (1.0 - ratio));
                [r, 255 - b - r, b]
            }
        }
    }
}

/// Truncate a non-negative channel value; negatives become zero.
#[inline]
fn channel(v: f64) -> u8 {
    // ratio is within [0, 2], so v never exceeds 255.
    v.clamp(0.0, 255.0) as u8
}

/// Map samples to an interleaved RGB buffer of length `3 * samples.len()`.
pub fn map_to_rgb(samples: &[u16], max_value: NonZeroU16, gradient: Gradient) -> Vec<u8> {
    let mut out = Vec::with_capacity(samples.len() * 3);
    for &sample in samples {
        out.extend_from_slice(&gradient.map_sample(sample, max_value));
    }
    out
}
