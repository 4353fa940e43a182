//! Simulation results.

use std::f64::consts::PI;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Number of decimal digits kept in reported values.
pub const OUTPUT_DIGITS: i32 = 8;

/// Round `value` to `digits` decimal places, ties away from zero.
///
/// A negative zero produced by rounding is reported as `0.0`.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10_f64.powi(digits);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// A complex amplitude as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Amplitude {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}

impl Amplitude {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

/// Final state of a simulated program.
///
/// All arrays have length `2^qubit_count` and are indexed by basis state.
/// Every value is rounded to [`OUTPUT_DIGITS`] decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Number of qubits simulated.
    pub qubit_count: usize,
    /// Amplitude of each basis state.
    pub statevector: Vec<Amplitude>,
    /// Measurement probability of each basis state.
    pub probabilities: Vec<f64>,
    /// Phase of each amplitude, in (−π, π].
    pub phases: Vec<f64>,
}

impl SimulationResult {
    /// Derive rounded output arrays from full-precision amplitudes.
    pub fn from_amplitudes(qubit_count: usize, amplitudes: &[Complex64]) -> Self {
        let mut statevector = Vec::with_capacity(amplitudes.len());
        let mut probabilities = Vec::with_capacity(amplitudes.len());
        let mut phases = Vec::with_capacity(amplitudes.len());

        for amp in amplitudes {
            let reported = Amplitude::new(
                round_to(amp.re, OUTPUT_DIGITS),
                round_to(amp.im, OUTPUT_DIGITS),
            );
            // Amplitudes that round to zero carry no meaningful phase.
            let theta = if reported.re == 0.0 && reported.im == 0.0 {
                0.0
            } else {
                round_to(phase(*amp), OUTPUT_DIGITS)
            };
            statevector.push(reported);
            probabilities.push(round_to(amp.re * amp.re + amp.im * amp.im, OUTPUT_DIGITS));
            phases.push(theta);
        }

        Self {
            qubit_count,
            statevector,
            probabilities,
            phases,
        }
    }

    /// Sum of the reported probabilities.
    pub fn total_probability(&self) -> f64 {
        self.probabilities.iter().sum()
    }
}

/// Argument of `amp` in (−π, π]; zero for a zero amplitude.
fn phase(amp: Complex64) -> f64 {
    if amp.re == 0.0 && amp.im == 0.0 {
        return 0.0;
    }
    let theta = amp.im.atan2(amp.re);
    if theta <= -PI { theta + 2.0 * PI } else { theta }
}
