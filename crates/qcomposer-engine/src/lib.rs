//! Statevector engine for small quantum circuits.
//!
//! The engine takes a qubit count (1 to 4) and an ordered list of gates from
//! a fixed set (`h x y z s t rx ry rz cx ccx`) and returns the final state:
//! amplitudes, per-basis-state probabilities and phases.
//!
//! Basis index `i` encodes qubit `b` in bit `b` of `i`, so qubit 0 is the
//! least significant bit.
//!
//! # Example
//!
//! ```rust
//! use qcomposer_engine::{GateOp, simulate};
//!
//! // Bell pair
//! let result = simulate(2, &[GateOp::h(0), GateOp::cx(0, 1)]).unwrap();
//! assert_eq!(result.probabilities, vec![0.5, 0.0, 0.0, 0.5]);
//! assert_eq!(result.statevector[3].re, 0.70710678);
//! ```
//!
//! Requests arriving as loosely-typed records go through
//! [`Program::from_raw`], which applies the same validation:
//!
//! ```rust
//! use qcomposer_engine::{Program, RawGate, run};
//!
//! let raw = vec![RawGate::new("x", 0), RawGate::new("cx", 1).with_control(0)];
//! let program = Program::from_raw(2, &raw).unwrap();
//! assert_eq!(run(&program).probabilities[3], 1.0);
//!
//! let err = Program::from_raw(1, &[RawGate::new("rx", 0)]).unwrap_err();
//! assert_eq!(err.kind(), "invalid_angle");
//! ```

pub mod error;
pub mod gate;
pub mod program;
pub mod result;
mod statevector;

use tracing::{debug, instrument};

use crate::statevector::Statevector;

pub use error::{EngineError, EngineResult};
pub use gate::{FixedGate, GateName, GateOp, Matrix2, RotationAxis};
pub use program::{MAX_GATES_PER_WIRE, MAX_QUBITS, MIN_QUBITS, Program, RawGate};
pub use result::{Amplitude, SimulationResult};

/// Validate and simulate `ops` on a register of `qubit_count` qubits.
///
/// Either the whole program is valid and a result is returned, or the first
/// violation is reported and nothing is simulated.
pub fn simulate(qubit_count: usize, ops: &[GateOp]) -> EngineResult<SimulationResult> {
    let program = Program::new(qubit_count, ops.to_vec())?;
    Ok(run(&program))
}

/// Simulate a validated program from |0...0⟩.
#[instrument(skip(program), fields(qubits = program.qubit_count(), ops = program.len()))]
pub fn run(program: &Program) -> SimulationResult {
    let mut sv = Statevector::new(program.qubit_count());
    for op in program.ops() {
        sv.apply(op);
    }
    debug!("Final norm: {:.12}", sv.norm_sqr());
    SimulationResult::from_amplitudes(program.qubit_count(), sv.amplitudes())
}
