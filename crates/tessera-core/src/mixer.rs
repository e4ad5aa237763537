//! Overlap-add mixing.
//!
//! Segments are laid out at half-length strides, so every segment's second
//! half shares its samples with the next segment's first half. With linear
//! fades covering those halves, the overlapping ramps cross-fade.

use crate::buffer::SampleBuffer;

/// Add `count` samples of `source`, starting at `source_start`, into `dest`
/// starting at `dest_start`.
///
/// # Panics
///
/// Panics if either range runs past the end of its buffer. Callers must
/// prove the bounds; nothing is read or written out of range.
///
/// # Example
///
/// ```rust
/// use tessera_core::{SampleBuffer, accumulate};
///
/// let mut src = SampleBuffer::with_len(4, 1000).unwrap();
/// src.samples_mut().fill(1.0);
/// let mut dst = SampleBuffer::with_len(6, 1000).unwrap();
///
/// accumulate(&src, 0, &mut dst, 2, 4);
/// assert_eq!(dst.samples(), &[0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
/// ```
pub fn accumulate(
    source: &SampleBuffer,
    source_start: usize,
    dest: &mut SampleBuffer,
    dest_start: usize,
    count: usize,
) {
    let source_end = source_start.checked_add(count);
    assert!(
        source_end.is_some_and(|end| end <= source.len()),
        "accumulate: source range {source_start}+{count} exceeds length {}",
        source.len()
    );
    let dest_end = dest_start.checked_add(count);
    assert!(
        dest_end.is_some_and(|end| end <= dest.len()),
        "accumulate: destination range {dest_start}+{count} exceeds length {}",
        dest.len()
    );

    let src = &source.samples()[source_start..source_start + count];
    let dst = &mut dest.samples_mut()[dest_start..dest_start + count];
    for (d, s) in dst.iter_mut().zip(src) {
        *d += *s;
    }
}

/// Start offset of segment `index` when segments overlap by half.
#[inline]
pub fn overlap_offset(segment_len: usize, index: usize) -> usize {
    (segment_len / 2) * index
}

/// Total length needed to hold `count` half-overlapping segments.
#[inline]
pub fn overlap_length(segment_len: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        overlap_offset(segment_len, count - 1) + segment_len
    }
}
