//! Statevector simulation engine.

use num_complex::Complex64;

use crate::gate::{GateOp, Matrix2};

/// A statevector representing a quantum state.
///
/// Crate-internal: gates reach it only through a validated
/// [`Program`](crate::Program), so indices are never checked here.
///
/// Basis index `i` encodes qubit `b` in bit `b` of `i` (qubit 0 is the least
/// significant bit).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// The full-precision amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Sum of squared magnitudes; 1 for a normalized state.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// Apply one operation to the statevector.
    ///
    /// The operation's qubit indices must already be validated against
    /// `num_qubits`; see [`crate::Program`].
    pub fn apply(&mut self, op: &GateOp) {
        match *op {
            GateOp::Fixed { gate, target } => self.apply_matrix(target, &gate.matrix()),
            GateOp::Rotation {
                axis,
                target,
                angle,
            } => self.apply_matrix(target, &axis.matrix(angle)),
            GateOp::Cx { control, target } => self.apply_controlled_x(1 << control, target),
            GateOp::Ccx {
                control1,
                control2,
                target,
            } => self.apply_controlled_x((1 << control1) | (1 << control2), target),
        }
    }

    /// Apply a 2×2 unitary to `qubit`.
    ///
    /// Each pair `(i, i | mask)` with bit `qubit` clear in `i` is visited once.
    fn apply_matrix(&mut self, qubit: usize, m: &Matrix2) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = m[0][0] * a + m[0][1] * b;
                self.amplitudes[j] = m[1][0] * a + m[1][1] * b;
            }
        }
    }

    /// Flip `target` on every basis state where all bits of `ctrl_mask` are set.
    fn apply_controlled_x(&mut self, ctrl_mask: usize, target: usize) {
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask == ctrl_mask) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }
}
