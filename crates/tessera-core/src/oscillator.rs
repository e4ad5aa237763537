//! Sine generators.
//!
//! [`SineOscillator`] is a two-pole digital resonator: after seeding its
//! history with two sine evaluations it produces every further sample with one
//! multiply and one subtract, using
//!
//! ```text
//! y[n] = 2·cos(ω)·y[n-1] - y[n-2]
//! ```
//!
//! [`DirectSine`] evaluates `sin` per sample. Both yield `sin(phase + n·ω)`
//! for `n = 0, 1, 2, …` and differ only in rounding.

use core::f64::consts::TAU;
use libm::{cos, sin};

/// Sine generation strategy used by the synthesizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SineMethod {
    /// Recursive resonator, no trigonometry per sample.
    #[default]
    Recursive,
    /// One `sin` evaluation per sample.
    Direct,
}

/// Angular increment per sample for `frequency` at `sample_rate`.
///
/// # Panics
///
/// Panics if `sample_rate` is not positive, or if `|frequency|` is at or
/// above Nyquist (`sample_rate / 2`). Beyond that bound `|2·cos(ω)|` reaches 2
/// and the resonator is no longer marginally stable.
#[inline]
fn angular_step(frequency: f64, sample_rate: f64) -> f64 {
    assert!(sample_rate > 0.0, "sample rate must be positive, got {sample_rate}");
    assert!(
        frequency.abs() < sample_rate / 2.0,
        "frequency {frequency} Hz is not below Nyquist ({} Hz)",
        sample_rate / 2.0
    );
    frequency * TAU / sample_rate
}

/// Recursive sine oscillator (digital resonator).
///
/// # Example
///
/// ```rust
/// use tessera_core::SineOscillator;
///
/// let mut osc = SineOscillator::new(0.0, 250.0, 1000.0);
/// assert!(osc.peek().abs() < 1e-12); // sin(0)
/// osc.step();
/// assert!((osc.peek() - 1.0).abs() < 1e-12); // sin(π/2)
/// ```
#[derive(Debug, Clone)]
pub struct SineOscillator {
    /// `2·cos(ω)`
    coefficient: f64,
    /// y[0], the current value
    y0: f64,
    /// y[1], previous value
    y1: f64,
    /// y[2], value before y[1]
    y2: f64,
}

impl SineOscillator {
    /// Create an oscillator whose first value is `sin(phase)`.
    ///
    /// # Panics
    ///
    /// Panics if `sample_rate <= 0` or `|frequency| >= sample_rate / 2`.
    pub fn new(phase: f64, frequency: f64, sample_rate: f64) -> Self {
        let w = angular_step(frequency, sample_rate);
        let mut osc = Self {
            coefficient: 2.0 * cos(w),
            y0: 0.0,
            y1: sin(phase - w),
            y2: sin(phase - 2.0 * w),
        };
        osc.step();
        osc
    }

    /// Advance by one sample.
    #[inline]
    pub fn step(&mut self) {
        self.y0 = self.coefficient * self.y1 - self.y2;
        self.y2 = self.y1;
        self.y1 = self.y0;
    }

    /// Current value, without advancing.
    #[inline]
    pub fn peek(&self) -> f64 {
        self.y0
    }

    /// The recurrence coefficient `2·cos(ω)`.
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }
}

impl Iterator for SineOscillator {
    type Item = f64;

    /// Yields the current value, then steps. Never returns `None`.
    #[inline]
    fn next(&mut self) -> Option<f64> {
        let y = self.peek();
        self.step();
        Some(y)
    }
}

/// Sine generator evaluating `sin(phase + n·ω)` directly.
#[derive(Debug, Clone)]
pub struct DirectSine {
    phase: f64,
    w: f64,
    n: u64,
}

impl DirectSine {
    /// Create a generator whose first value is `sin(phase)`.
    ///
    /// # Panics
    ///
    /// Same preconditions as [`SineOscillator::new`].
    pub fn new(phase: f64, frequency: f64, sample_rate: f64) -> Self {
        Self {
            phase,
            w: angular_step(frequency, sample_rate),
            n: 0,
        }
    }

    /// Advance by one sample.
    #[inline]
    pub fn step(&mut self) {
        self.n += 1;
    }

    /// Current value, without advancing.
    #[inline]
    pub fn peek(&self) -> f64 {
        sin(self.phase + self.n as f64 * self.w)
    }
}

impl Iterator for DirectSine {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        let y = self.peek();
        self.step();
        Some(y)
    }
}
