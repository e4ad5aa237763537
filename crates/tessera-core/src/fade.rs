//! Linear edge fades.
//!
//! The fade-in ramp multiplies sample `i` by `i / start_n`, so the first
//! sample is silenced and the last faded sample stops one step short of unity.
//! The fade-out mirrors it from the end: the final sample is scaled by 0 and
//! the ramp approaches 1 moving inward.
//!
//! The two edges are applied independently. When `start_n + end_n` exceeds the
//! buffer length the regions overlap and both gains apply to the shared
//! samples; no clamping is done.

use libm::floor;

use crate::buffer::SampleBuffer;

/// Number of samples covered by a fade of `fraction` of `len`.
///
/// `fraction` is clamped to `[0, 1]`; NaN counts as 0.
#[inline]
pub fn fade_len(len: usize, fraction: f64) -> usize {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    floor(len as f64 * fraction) as usize
}

/// Apply a linear fade-in over the first `start_fraction` of the buffer and a
/// linear fade-out over the last `end_fraction`, in place.
///
/// # Example
///
/// ```rust
/// use tessera_core::{SampleBuffer, apply_fade};
///
/// let mut buf = SampleBuffer::with_len(4, 1000).unwrap();
/// buf.samples_mut().fill(1.0);
/// apply_fade(&mut buf, 0.5, 0.0);
/// assert_eq!(buf.samples(), &[0.0, 0.5, 1.0, 1.0]);
/// ```
pub fn apply_fade(buffer: &mut SampleBuffer, start_fraction: f64, end_fraction: f64) {
    let len = buffer.len();
    let start_n = fade_len(len, start_fraction);
    let end_n = fade_len(len, end_fraction);
    let samples = buffer.samples_mut();

    if start_n > 0 {
        let n = start_n as f64;
        for (i, s) in samples[..start_n].iter_mut().enumerate() {
            *s *= i as f64 / n;
        }
    }

    if end_n > 0 {
        let n = end_n as f64;
        for i in 1..=end_n {
            samples[len - i] *= (i - 1) as f64 / n;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ones(len: usize) -> SampleBuffer {
        let mut buf = SampleBuffer::with_len(len, 1000).unwrap();
        buf.samples_mut().fill(1.0);
        buf
    }

    #[test]
    fn zero_fade_is_identity() {
        let mut buf = SampleBuffer::with_len(16, 1000).unwrap();
        for (i, s) in buf.samples_mut().iter_mut().enumerate() {
            *s = (i as f64 * 0.37).sin();
        }
        let before = buf.clone();
        apply_fade(&mut buf, 0.0, 0.0);
        assert_eq!(buf, before);
    }

    #[test]
    fn fade_in_ramp() {
        let mut buf = ones(10);
        apply_fade(&mut buf, 0.4, 0.0);
        assert_eq!(&buf.samples()[..5], &[0.0, 0.25, 0.5, 0.75, 1.0]);
        assert!(buf.samples()[4..].iter().all(|&s| s == 1.0));
    }

    #[test]
    fn fade_out_ramp() {
        let mut buf = ones(10);
        apply_fade(&mut buf, 0.0, 0.4);
        assert_eq!(&buf.samples()[5..], &[1.0, 0.75, 0.5, 0.25, 0.0]);
    }

    #[test]
    fn fractions_are_clamped() {
        let mut a = ones(8);
        let mut b = ones(8);
        apply_fade(&mut a, 2.0, -1.0);
        apply_fade(&mut b, 1.0, 0.0);
        assert_eq!(a, b);
    }

    #[test]
    fn nan_fraction_is_no_fade() {
        let mut buf = ones(8);
        apply_fade(&mut buf, f64::NAN, f64::NAN);
        assert!(buf.samples().iter().all(|&s| s == 1.0));
    }

    #[test]
    fn short_buffers() {
        let mut empty = SampleBuffer::with_len(0, 1000).unwrap();
        apply_fade(&mut empty, 1.0, 1.0);
        assert!(empty.is_empty());

        // floor(1 * 0.5) = 0, so nothing is faded
        let mut single = ones(1);
        apply_fade(&mut single, 0.5, 0.5);
        assert_eq!(single.samples(), &[1.0]);
    }

    #[test]
    fn overlapping_regions_compound() {
        // start_n = end_n = 4 on 6 samples: indices 2..4 receive both ramps.
        let mut buf = ones(6);
        apply_fade(&mut buf, 0.7, 0.7);
        let expected = [
            0.0,        // in 0/4
            0.25,       // in 1/4
            0.5 * 0.75, // in 2/4, out 3/4
            0.75 * 0.5, // in 3/4, out 2/4
            0.25,       // out 1/4
            0.0,        // out 0/4
        ];
        for (got, want) in buf.samples().iter().zip(expected) {
            assert!((got - want).abs() < 1e-15, "{got} vs {want}");
        }
    }

    #[test]
    fn fade_len_floors() {
        assert_eq!(fade_len(100, 0.5), 50);
        assert_eq!(fade_len(101, 0.5), 50);
        assert_eq!(fade_len(3, 0.99), 2);
    }
}
