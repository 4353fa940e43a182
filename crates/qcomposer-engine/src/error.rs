//! Error types for the engine crate.

use thiserror::Error;

use crate::gate::GateName;

/// Errors produced while validating or interpreting a gate program.
///
/// Every variant describes a local validation failure. None of them are
/// transient, so callers should surface them instead of retrying.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// Qubit count outside the supported range.
    #[error("qubit_count must be between 1 and 4, got {0}")]
    InvalidQubitCount(i64),

    /// An operation references a qubit index outside `[0, qubit_count)`.
    #[error("{field}={index} out of range 0..{} (step {step})", .qubit_count.saturating_sub(1))]
    QubitOutOfRange {
        /// Position of the operation in the program.
        step: usize,
        /// Field holding the bad index.
        field: &'static str,
        /// The offending index.
        index: i64,
        /// Number of qubits in the circuit.
        qubit_count: usize,
    },

    /// A control field required by the gate was not provided.
    #[error("{gate} requires '{field}' (step {step})")]
    MissingQubit {
        /// Position of the operation in the program.
        step: usize,
        /// The gate missing a field.
        gate: GateName,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A multi-qubit gate names the same wire more than once.
    #[error("{gate} qubits must be pairwise distinct (step {step})")]
    DuplicateQubit {
        /// Position of the operation in the program.
        step: usize,
        /// The offending gate.
        gate: GateName,
    },

    /// A wire carries more operations than the grid allows.
    #[error("gate limit ({limit}) exceeded on qubit {qubit} (step {step})")]
    WireGateLimit {
        /// Position of the operation that crossed the limit.
        step: usize,
        /// The overloaded wire.
        qubit: usize,
        /// Maximum number of operations per wire.
        limit: usize,
    },

    /// Rotation gate without an angle.
    #[error("{gate} requires an 'angle' field (step {step})")]
    MissingAngle {
        /// Position of the operation in the program.
        step: usize,
        /// The rotation gate.
        gate: GateName,
    },

    /// Rotation angle is NaN or infinite.
    #[error("angle must be finite, got {angle} (step {step})")]
    NonFiniteAngle {
        /// Position of the operation in the program.
        step: usize,
        /// The rejected angle.
        angle: f64,
    },

    /// Gate name not in the recognized set.
    #[error("unsupported gate '{name}' (step {step})")]
    UnsupportedGate {
        /// Position of the operation in the program.
        step: usize,
        /// Lowercased gate name as received.
        name: String,
    },
}

impl EngineError {
    /// Coarse error category used by boundary layers.
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::InvalidQubitCount(_) => "invalid_qubit_count",
            EngineError::QubitOutOfRange { .. }
            | EngineError::MissingQubit { .. }
            | EngineError::DuplicateQubit { .. }
            | EngineError::WireGateLimit { .. } => "invalid_operation",
            EngineError::MissingAngle { .. } | EngineError::NonFiniteAngle { .. } => {
                "invalid_angle"
            }
            EngineError::UnsupportedGate { .. } => "unsupported_gate",
        }
    }

    /// Program step the error refers to, if any.
    pub fn step(&self) -> Option<usize> {
        match self {
            EngineError::InvalidQubitCount(_) => None,
            EngineError::QubitOutOfRange { step, .. }
            | EngineError::MissingQubit { step, .. }
            | EngineError::DuplicateQubit { step, .. }
            | EngineError::WireGateLimit { step, .. }
            | EngineError::MissingAngle { step, .. }
            | EngineError::NonFiniteAngle { step, .. }
            | EngineError::UnsupportedGate { step, .. } => Some(*step),
        }
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
