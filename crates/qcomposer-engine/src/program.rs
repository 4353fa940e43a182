//! Validated gate programs.
//!
//! A [`Program`] is the only input the statevector engine accepts. It can be
//! built from typed [`GateOp`]s or from loosely-typed [`RawGate`] records as
//! they arrive from a request body; both paths run the same checks.
//!
//! The amplitude buffer is not exported, so unvalidated gates cannot reach it:
//!
//! ```compile_fail
//! use qcomposer_engine::statevector::Statevector;
//! ```
//!
//! Out-of-range gates are rejected before any amplitude is touched:
//!
//! ```rust
//! use qcomposer_engine::{EngineError, GateOp, simulate};
//!
//! assert!(matches!(
//!     simulate(2, &[GateOp::x(7)]),
//!     Err(EngineError::QubitOutOfRange { index: 7, .. })
//! ));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::gate::{FixedGate, GateName, GateOp, RotationAxis};

/// Smallest supported register.
pub const MIN_QUBITS: usize = 1;
/// Largest supported register.
pub const MAX_QUBITS: usize = 4;
/// Maximum number of operations touching any single wire.
pub const MAX_GATES_PER_WIRE: usize = 10;

/// A gate record with optional fields, mirroring the request schema.
///
/// Indices are signed so that negative values are reported as out-of-range
/// rather than failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawGate {
    /// Gate name (case-insensitive).
    pub gate: String,
    /// Target wire.
    pub target: i64,
    /// Control wire (`cx` only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control: Option<i64>,
    /// First control wire (`ccx` only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control1: Option<i64>,
    /// Second control wire (`ccx` only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control2: Option<i64>,
    /// Rotation angle in radians (`rx`, `ry`, `rz` only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
}

impl RawGate {
    /// Create a record for `gate` acting on `target`.
    pub fn new(gate: impl Into<String>, target: i64) -> Self {
        Self {
            gate: gate.into(),
            target,
            ..Self::default()
        }
    }

    pub fn with_control(mut self, control: i64) -> Self {
        self.control = Some(control);
        self
    }

    pub fn with_controls(mut self, control1: i64, control2: i64) -> Self {
        self.control1 = Some(control1);
        self.control2 = Some(control2);
        self
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }

    /// Resolve the gate name.
    fn gate_name(&self, step: usize) -> EngineResult<GateName> {
        GateName::parse(&self.gate).ok_or_else(|| EngineError::UnsupportedGate {
            step,
            name: self.gate.to_lowercase(),
        })
    }

    /// Resolve the angle of a rotation gate.
    fn rotation_angle(&self, step: usize, gate: GateName) -> EngineResult<f64> {
        let angle = self
            .angle
            .ok_or(EngineError::MissingAngle { step, gate })?;
        check_angle(step, angle)?;
        Ok(angle)
    }

    /// Convert into a typed operation, checking indices against `qubit_count`.
    fn to_op(&self, step: usize, qubit_count: usize) -> EngineResult<GateOp> {
        let gate = self.gate_name(step)?;
        let index = |field, value: Option<i64>| -> EngineResult<usize> {
            let value = value.ok_or(EngineError::MissingQubit { step, gate, field })?;
            check_index(step, field, value, qubit_count)
        };

        let op = match gate {
            GateName::H => GateOp::fixed(FixedGate::H, index("target", Some(self.target))?),
            GateName::X => GateOp::fixed(FixedGate::X, index("target", Some(self.target))?),
            GateName::Y => GateOp::fixed(FixedGate::Y, index("target", Some(self.target))?),
            GateName::Z => GateOp::fixed(FixedGate::Z, index("target", Some(self.target))?),
            GateName::S => GateOp::fixed(FixedGate::S, index("target", Some(self.target))?),
            GateName::T => GateOp::fixed(FixedGate::T, index("target", Some(self.target))?),
            GateName::Rx | GateName::Ry | GateName::Rz => {
                let axis = match gate {
                    GateName::Rx => RotationAxis::X,
                    GateName::Ry => RotationAxis::Y,
                    _ => RotationAxis::Z,
                };
                let target = index("target", Some(self.target))?;
                GateOp::rotation(axis, target, self.rotation_angle(step, gate)?)
            }
            GateName::Cx => {
                // Presence is checked before any range so a missing control wins.
                if self.control.is_none() {
                    return Err(EngineError::MissingQubit {
                        step,
                        gate,
                        field: "control",
                    });
                }
                GateOp::cx(
                    index("control", self.control)?,
                    index("target", Some(self.target))?,
                )
            }
            GateName::Ccx => {
                for (field, value) in [("control1", self.control1), ("control2", self.control2)] {
                    if value.is_none() {
                        return Err(EngineError::MissingQubit { step, gate, field });
                    }
                }
                GateOp::ccx(
                    index("control1", self.control1)?,
                    index("control2", self.control2)?,
                    index("target", Some(self.target))?,
                )
            }
        };
        Ok(op)
    }
}

fn check_index(
    step: usize,
    field: &'static str,
    index: i64,
    qubit_count: usize,
) -> EngineResult<usize> {
    match usize::try_from(index) {
        Ok(q) if q < qubit_count => Ok(q),
        _ => Err(EngineError::QubitOutOfRange {
            step,
            field,
            index,
            qubit_count,
        }),
    }
}

fn check_angle(step: usize, angle: f64) -> EngineResult<()> {
    if angle.is_finite() {
        Ok(())
    } else {
        Err(EngineError::NonFiniteAngle { step, angle })
    }
}

fn check_qubit_count(qubit_count: i64) -> EngineResult<usize> {
    match usize::try_from(qubit_count) {
        Ok(n) if (MIN_QUBITS..=MAX_QUBITS).contains(&n) => Ok(n),
        _ => Err(EngineError::InvalidQubitCount(qubit_count)),
    }
}

/// Step-by-step structural checks shared by both construction paths.
struct Validator {
    qubit_count: usize,
    wire_counts: [usize; MAX_QUBITS],
}

impl Validator {
    fn new(qubit_count: usize) -> Self {
        Self {
            qubit_count,
            wire_counts: [0; MAX_QUBITS],
        }
    }

    fn check(&mut self, step: usize, op: &GateOp) -> EngineResult<()> {
        let wires = op.wires();
        for &(field, q) in &wires {
            check_index(
                step,
                field,
                i64::try_from(q).unwrap_or(i64::MAX),
                self.qubit_count,
            )?;
        }

        if let Some(angle) = op.angle() {
            check_angle(step, angle)?;
        }

        let distinct = wires
            .iter()
            .enumerate()
            .all(|(i, (_, a))| wires[i + 1..].iter().all(|(_, b)| a != b));
        if !distinct {
            return Err(EngineError::DuplicateQubit {
                step,
                gate: op.name(),
            });
        }

        for &(_, q) in &wires {
            self.wire_counts[q] += 1;
        }
        if let Some(qubit) = self
            .wire_counts
            .iter()
            .position(|&count| count > MAX_GATES_PER_WIRE)
        {
            return Err(EngineError::WireGateLimit {
                step,
                qubit,
                limit: MAX_GATES_PER_WIRE,
            });
        }

        Ok(())
    }
}

/// An ordered gate program that has passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    qubit_count: usize,
    ops: Vec<GateOp>,
}

impl Program {
    /// Validate typed operations for a register of `qubit_count` wires.
    pub fn new(qubit_count: usize, ops: Vec<GateOp>) -> EngineResult<Self> {
        let qubit_count = check_qubit_count(i64::try_from(qubit_count).unwrap_or(i64::MAX))?;
        let mut validator = Validator::new(qubit_count);
        for (step, op) in ops.iter().enumerate() {
            validator.check(step, op)?;
        }
        debug!("Validated program: {} qubits, {} ops", qubit_count, ops.len());
        Ok(Self { qubit_count, ops })
    }

    /// Validate raw request records.
    ///
    /// Gate names and angles of the whole program are checked first, then
    /// indices, distinctness and wire limits step by step. The first
    /// violation found is returned.
    pub fn from_raw(qubit_count: i64, raw: &[RawGate]) -> EngineResult<Self> {
        let qubit_count = check_qubit_count(qubit_count)?;

        for (step, gate) in raw.iter().enumerate() {
            let name = gate.gate_name(step)?;
            if name.is_rotation() {
                gate.rotation_angle(step, name)?;
            }
        }

        let mut validator = Validator::new(qubit_count);
        let mut ops = Vec::with_capacity(raw.len());
        for (step, gate) in raw.iter().enumerate() {
            let op = gate.to_op(step, qubit_count)?;
            validator.check(step, &op)?;
            ops.push(op);
        }
        debug!("Validated program: {} qubits, {} ops", qubit_count, ops.len());
        Ok(Self { qubit_count, ops })
    }

    /// Number of qubits in the register.
    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Operations in application order.
    pub fn ops(&self) -> &[GateOp] {
        &self.ops
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the program has no operations.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
