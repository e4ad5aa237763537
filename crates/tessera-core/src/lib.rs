//! Tessera Core - buffer composition engine
//!
//! This crate renders long mono textures by summing many sine partials into
//! short segments and cross-fading those segments together with overlap-add.
//! Everything happens in place on owned [`SampleBuffer`]s.
//!
//! # Building Blocks
//!
//! ## Buffers
//!
//! - [`SampleBuffer`] - Zeroed, fixed-length `f64` buffer tagged with a sample rate
//! - [`BufferError`] - Invalid durations or rates, failed allocations
//!
//! ## Sine Generation
//!
//! - [`SineOscillator`] - Recursive two-pole resonator, one multiply per sample
//! - [`DirectSine`] - Reference generator evaluating `sin` per sample
//! - [`SineMethod`] - Selects between the two
//!
//! ## Synthesis
//!
//! - [`synthesize`] / [`synthesize_with`] - Add [`Partial`]s into a buffer
//! - [`quantize`] - Snap a frequency onto a harmonic lattice
//! - [`biased_frequency`], [`draw_partials`] - Low-biased random partials
//!
//! ## Shaping & Mixing
//!
//! - [`apply_fade`] - Linear fade-in / fade-out
//! - [`accumulate`] - Bounds-checked additive copy between buffers
//! - [`overlap_offset`], [`overlap_length`] - Half-overlap segment layout
//!
//! ## Rendering
//!
//! - [`Composition`] - Parameters plus the full segment pipeline
//!
//! # no_std Support
//!
//! The crate builds without `std` (it still needs `alloc`). Disable the
//! default feature:
//!
//! ```toml
//! [dependencies]
//! tessera-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tessera_core::Composition;
//!
//! let composition = Composition {
//!     sample_rate: 8000,
//!     segment_millis: 100,
//!     segment_count: 3,
//!     ..Composition::default()
//! };
//!
//! let mut rng = StdRng::seed_from_u64(5);
//! let buffer = composition.render(&mut rng).unwrap();
//! assert_eq!(buffer.len(), 400 * 2 + 800);
//! ```
//!
//! # Feature Flags
//!
//! - `std` (default) - Standard library support
//! - `tracing` - Emit `tracing` debug events while rendering

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod buffer;
pub mod compose;
pub mod error;
pub mod fade;
pub mod mixer;
pub mod oscillator;
pub mod synth;

// Re-export main types at crate root
pub use buffer::SampleBuffer;
pub use compose::Composition;
pub use error::BufferError;
pub use fade::{apply_fade, fade_len};
pub use mixer::{accumulate, overlap_length, overlap_offset};
pub use oscillator::{DirectSine, SineMethod, SineOscillator};
pub use synth::{
    DEFAULT_BASE_FREQ, Partial, biased_frequency, draw_partials, quantize, synthesize,
    synthesize_with,
};
