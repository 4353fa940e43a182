//! Gate set and gate operations.

use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};
use std::fmt;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// A 2×2 complex matrix in row-major order.
pub type Matrix2 = [[Complex64; 2]; 2];

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

/// The recognized gate names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateName {
    H,
    X,
    Y,
    Z,
    S,
    T,
    Rx,
    Ry,
    Rz,
    Cx,
    Ccx,
}

impl GateName {
    /// All recognized gates, in palette order.
    pub const ALL: [GateName; 11] = [
        GateName::H,
        GateName::X,
        GateName::Y,
        GateName::Z,
        GateName::S,
        GateName::T,
        GateName::Rx,
        GateName::Ry,
        GateName::Rz,
        GateName::Cx,
        GateName::Ccx,
    ];

    /// Look up a gate by name, ignoring ASCII case.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|gate| gate.as_str().eq_ignore_ascii_case(name))
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            GateName::H => "h",
            GateName::X => "x",
            GateName::Y => "y",
            GateName::Z => "z",
            GateName::S => "s",
            GateName::T => "t",
            GateName::Rx => "rx",
            GateName::Ry => "ry",
            GateName::Rz => "rz",
            GateName::Cx => "cx",
            GateName::Ccx => "ccx",
        }
    }

    /// Whether the gate takes an angle.
    pub fn is_rotation(self) -> bool {
        matches!(self, GateName::Rx | GateName::Ry | GateName::Rz)
    }
}

impl fmt::Display for GateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-qubit gates with a fixed matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedGate {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// S gate (sqrt(Z)).
    S,
    /// T gate (fourth root of Z).
    T,
}

impl FixedGate {
    /// The gate's unitary matrix.
    pub fn matrix(self) -> Matrix2 {
        match self {
            FixedGate::H => {
                let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
                [[h, h], [h, -h]]
            }
            FixedGate::X => [[ZERO, ONE], [ONE, ZERO]],
            FixedGate::Y => [[ZERO, -I], [I, ZERO]],
            FixedGate::Z => [[ONE, ZERO], [ZERO, -ONE]],
            FixedGate::S => [[ONE, ZERO], [ZERO, I]],
            FixedGate::T => [[ONE, ZERO], [ZERO, Complex64::from_polar(1.0, FRAC_PI_4)]],
        }
    }

    pub fn name(self) -> GateName {
        match self {
            FixedGate::H => GateName::H,
            FixedGate::X => GateName::X,
            FixedGate::Y => GateName::Y,
            FixedGate::Z => GateName::Z,
            FixedGate::S => GateName::S,
            FixedGate::T => GateName::T,
        }
    }
}

/// Axis of a single-qubit rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationAxis {
    X,
    Y,
    Z,
}

impl RotationAxis {
    /// Rotation matrix for angle `theta` (radians).
    pub fn matrix(self, theta: f64) -> Matrix2 {
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        match self {
            RotationAxis::X => {
                let c = Complex64::new(c, 0.0);
                let neg_i_s = Complex64::new(0.0, -s);
                [[c, neg_i_s], [neg_i_s, c]]
            }
            RotationAxis::Y => {
                let c = Complex64::new(c, 0.0);
                let s = Complex64::new(s, 0.0);
                [[c, -s], [s, c]]
            }
            RotationAxis::Z => [
                [Complex64::from_polar(1.0, -theta / 2.0), ZERO],
                [ZERO, Complex64::from_polar(1.0, theta / 2.0)],
            ],
        }
    }

    pub fn name(self) -> GateName {
        match self {
            RotationAxis::X => GateName::Rx,
            RotationAxis::Y => GateName::Ry,
            RotationAxis::Z => GateName::Rz,
        }
    }
}

/// One operation in a gate program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateOp {
    /// Fixed single-qubit gate.
    Fixed { gate: FixedGate, target: usize },
    /// Parametrized single-qubit rotation.
    Rotation {
        axis: RotationAxis,
        target: usize,
        angle: f64,
    },
    /// Controlled-X (CNOT).
    Cx { control: usize, target: usize },
    /// Toffoli (doubly-controlled X).
    Ccx {
        control1: usize,
        control2: usize,
        target: usize,
    },
}

impl GateOp {
    pub fn h(target: usize) -> Self {
        Self::fixed(FixedGate::H, target)
    }

    pub fn x(target: usize) -> Self {
        Self::fixed(FixedGate::X, target)
    }

    pub fn y(target: usize) -> Self {
        Self::fixed(FixedGate::Y, target)
    }

    pub fn z(target: usize) -> Self {
        Self::fixed(FixedGate::Z, target)
    }

    pub fn s(target: usize) -> Self {
        Self::fixed(FixedGate::S, target)
    }

    pub fn t(target: usize) -> Self {
        Self::fixed(FixedGate::T, target)
    }

    pub fn rx(target: usize, angle: f64) -> Self {
        Self::rotation(RotationAxis::X, target, angle)
    }

    pub fn ry(target: usize, angle: f64) -> Self {
        Self::rotation(RotationAxis::Y, target, angle)
    }

    pub fn rz(target: usize, angle: f64) -> Self {
        Self::rotation(RotationAxis::Z, target, angle)
    }

    pub fn cx(control: usize, target: usize) -> Self {
        GateOp::Cx { control, target }
    }

    pub fn ccx(control1: usize, control2: usize, target: usize) -> Self {
        GateOp::Ccx {
            control1,
            control2,
            target,
        }
    }

    /// Build a fixed single-qubit gate.
    pub fn fixed(gate: FixedGate, target: usize) -> Self {
        GateOp::Fixed { gate, target }
    }

    /// Build a rotation gate.
    pub fn rotation(axis: RotationAxis, target: usize, angle: f64) -> Self {
        GateOp::Rotation {
            axis,
            target,
            angle,
        }
    }

    /// Name of the gate.
    pub fn name(&self) -> GateName {
        match self {
            GateOp::Fixed { gate, .. } => gate.name(),
            GateOp::Rotation { axis, .. } => axis.name(),
            GateOp::Cx { .. } => GateName::Cx,
            GateOp::Ccx { .. } => GateName::Ccx,
        }
    }

    /// Every wire the operation touches, labelled by field, controls first.
    pub fn wires(&self) -> Vec<(&'static str, usize)> {
        match *self {
            GateOp::Fixed { target, .. } | GateOp::Rotation { target, .. } => {
                vec![("target", target)]
            }
            GateOp::Cx { control, target } => vec![("control", control), ("target", target)],
            GateOp::Ccx {
                control1,
                control2,
                target,
            } => vec![
                ("control1", control1),
                ("control2", control2),
                ("target", target),
            ],
        }
    }

    /// Every wire the operation touches, controls first.
    pub fn qubits(&self) -> Vec<usize> {
        self.wires().into_iter().map(|(_, q)| q).collect()
    }

    /// The rotation angle, if any.
    pub fn angle(&self) -> Option<f64> {
        match *self {
            GateOp::Rotation { angle, .. } => Some(angle),
            _ => None,
        }
    }
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        if let Some(angle) = self.angle() {
            write!(f, "({angle})")?;
        }
        let qubits: Vec<String> = self.qubits().iter().map(|q| format!("q[{q}]")).collect();
        write!(f, " {}", qubits.join(", "))
    }
}
