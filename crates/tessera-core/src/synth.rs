//! Additive synthesis of sine partials into a [`SampleBuffer`].
//!
//! Partial frequencies are drawn with a strong bias toward the low end of the
//! requested range and then snapped down onto a harmonic lattice (integer
//! multiples of a base frequency), which keeps the summed texture consonant.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use libm::{floor, pow};
use rand::Rng;

use crate::buffer::SampleBuffer;
use crate::oscillator::{DirectSine, SineMethod, SineOscillator};

/// Default base of the harmonic lattice (A1).
pub const DEFAULT_BASE_FREQ: f64 = 55.0;

/// Exponent applied to the uniform draw in [`biased_frequency`].
const LOW_BIAS_EXPONENT: f64 = 6.0;

/// One sine component of a synthesized segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Partial {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Linear gain applied to the partial.
    pub amplitude: f64,
}

impl Partial {
    /// Create a partial.
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }
}

/// Add every partial into `buffer` using the recursive oscillator.
///
/// Each partial starts at phase 0, so sample `i` receives
/// `amplitude · sin(2π · frequency · i / sample_rate)`. Existing buffer
/// contents are kept; partials accumulate.
///
/// # Panics
///
/// Panics if a partial's frequency is at or above Nyquist.
pub fn synthesize(buffer: &mut SampleBuffer, partials: &[Partial]) {
    synthesize_with(buffer, partials, SineMethod::Recursive);
}

/// [`synthesize`] with an explicit sine generation method.
pub fn synthesize_with(buffer: &mut SampleBuffer, partials: &[Partial], method: SineMethod) {
    let sample_rate = f64::from(buffer.sample_rate());
    for partial in partials {
        match method {
            SineMethod::Recursive => accumulate_partial(
                buffer,
                partial.amplitude,
                SineOscillator::new(0.0, partial.frequency, sample_rate),
            ),
            SineMethod::Direct => accumulate_partial(
                buffer,
                partial.amplitude,
                DirectSine::new(0.0, partial.frequency, sample_rate),
            ),
        }
    }
}

#[inline]
fn accumulate_partial(
    buffer: &mut SampleBuffer,
    amplitude: f64,
    source: impl Iterator<Item = f64>,
) {
    for (dst, s) in buffer.samples_mut().iter_mut().zip(source) {
        *dst += amplitude * s;
    }
}

/// Snap `freq` down to the nearest integer multiple of `base`.
///
/// Frequencies below `base` quantize to 0 Hz (a silent partial). A
/// non-positive `base` leaves `freq` unchanged.
///
/// ```rust
/// use tessera_core::quantize;
///
/// assert_eq!(quantize(55.0, 170.0), 165.0);
/// assert_eq!(quantize(55.0, 40.0), 0.0);
/// ```
#[inline]
pub fn quantize(base: f64, freq: f64) -> f64 {
    if base <= 0.0 {
        return freq;
    }
    floor(freq / base) * base
}

/// Draw a frequency in `[min, max)` biased toward `min`.
///
/// A uniform `u ∈ [0, 1)` is raised to the 6th power before being mapped onto
/// the range, so most draws land near the bottom.
pub fn biased_frequency<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    let u: f64 = rng.gen_range(0.0..1.0);
    min + pow(u, LOW_BIAS_EXPONENT) * (max - min)
}

/// Draw `count` lattice-quantized partials of amplitude `1 / count`.
pub fn draw_partials<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    min_freq: f64,
    max_freq: f64,
    base_freq: f64,
) -> Vec<Partial> {
    if count == 0 {
        return Vec::new();
    }
    let amplitude = 1.0 / count as f64;
    (0..count)
        .map(|_| {
            let f = quantize(base_freq, biased_frequency(rng, min_freq, max_freq));
            Partial::new(f, amplitude)
        })
        .collect()
}
