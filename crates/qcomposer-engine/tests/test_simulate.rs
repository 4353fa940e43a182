//! End-to-end tests for `simulate`.

use std::f64::consts::PI;

use qcomposer_engine::{
    Amplitude, EngineError, GateName, GateOp, MAX_GATES_PER_WIRE, Program, RawGate, run, simulate,
};

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < 1e-8, "index {i}: {a} != {e}");
    }
}

// ---------------------------------------------------------------------------
// Reference circuits
// ---------------------------------------------------------------------------

#[test]
fn empty_program_is_ground_state() {
    for n in 1..=4 {
        let result = simulate(n, &[]).unwrap();
        let size = 1 << n;
        assert_eq!(result.qubit_count, n);
        assert_eq!(result.statevector.len(), size);
        assert_eq!(result.probabilities[0], 1.0);
        assert!(result.probabilities[1..].iter().all(|&p| p == 0.0));
        assert!(result.phases.iter().all(|&p| p == 0.0));
    }
}

#[test]
fn single_hadamard() {
    let result = simulate(1, &[GateOp::h(0)]).unwrap();
    assert_eq!(
        result.statevector,
        vec![
            Amplitude::new(0.70710678, 0.0),
            Amplitude::new(0.70710678, 0.0)
        ]
    );
    assert_eq!(result.probabilities, vec![0.5, 0.5]);
    assert_eq!(result.phases, vec![0.0, 0.0]);
}

#[test]
fn bell_pair() {
    let result = simulate(2, &[GateOp::h(0), GateOp::cx(0, 1)]).unwrap();
    assert_eq!(result.probabilities, vec![0.5, 0.0, 0.0, 0.5]);
    assert_eq!(result.statevector[0], Amplitude::new(0.70710678, 0.0));
    assert_eq!(result.statevector[3], Amplitude::new(0.70710678, 0.0));
    assert_eq!(result.statevector[1], Amplitude::new(0.0, 0.0));
    assert_eq!(result.statevector[2], Amplitude::new(0.0, 0.0));
}

#[test]
fn x_flips_bit() {
    let result = simulate(1, &[GateOp::x(0)]).unwrap();
    assert_eq!(result.probabilities, vec![0.0, 1.0]);
}

#[test]
fn rz_changes_phase_only() {
    let result = simulate(1, &[GateOp::rz(0, PI)]).unwrap();
    assert_eq!(result.probabilities, vec![1.0, 0.0]);
    assert_eq!(result.statevector[0], Amplitude::new(0.0, -1.0));
    assert_close(&result.phases, &[-PI / 2.0, 0.0]);
}

#[test]
fn toffoli_sets_target() {
    let result = simulate(3, &[GateOp::x(0), GateOp::x(1), GateOp::ccx(0, 1, 2)]).unwrap();
    let mut expected = vec![0.0; 8];
    expected[7] = 1.0;
    assert_eq!(result.probabilities, expected);
}

#[test]
fn ghz_on_four_qubits() {
    let ops = [
        GateOp::h(0),
        GateOp::cx(0, 1),
        GateOp::cx(1, 2),
        GateOp::cx(2, 3),
    ];
    let result = simulate(4, &ops).unwrap();
    let mut expected = vec![0.0; 16];
    expected[0] = 0.5;
    expected[15] = 0.5;
    assert_eq!(result.probabilities, expected);
}

#[test]
fn gate_order_matters() {
    // H then Z gives |−⟩; Z then H gives |+⟩.
    let hz = simulate(1, &[GateOp::h(0), GateOp::z(0)]).unwrap();
    let zh = simulate(1, &[GateOp::z(0), GateOp::h(0)]).unwrap();
    assert_eq!(hz.statevector[1], Amplitude::new(-0.70710678, 0.0));
    assert_eq!(zh.statevector[1], Amplitude::new(0.70710678, 0.0));
    assert_close(&hz.phases, &[0.0, PI]);
}

#[test]
fn s_and_t_phases() {
    let result = simulate(2, &[GateOp::x(0), GateOp::s(0), GateOp::x(1), GateOp::t(1)]).unwrap();
    assert_eq!(result.probabilities[3], 1.0);
    assert_close(&result.phases, &[0.0, 0.0, 0.0, PI / 2.0 + PI / 4.0]);
}

#[test]
fn ry_half_turn_splits_evenly() {
    let result = simulate(1, &[GateOp::ry(0, PI / 2.0)]).unwrap();
    assert_eq!(result.probabilities, vec![0.5, 0.5]);
}

#[test]
fn rx_quarter_has_imaginary_component() {
    let result = simulate(1, &[GateOp::rx(0, PI / 2.0)]).unwrap();
    assert_eq!(result.statevector[1], Amplitude::new(0.0, -0.70710678));
    assert_close(&result.phases, &[0.0, -PI / 2.0]);
}

#[test]
fn zero_amplitude_has_zero_phase() {
    // T⁴ = Z and HZH = X, so index 0 holds only rounding noise.
    let ops = [
        GateOp::h(0),
        GateOp::t(0),
        GateOp::t(0),
        GateOp::t(0),
        GateOp::t(0),
        GateOp::h(0),
    ];
    let result = simulate(1, &ops).unwrap();
    assert_eq!(result.statevector[0], Amplitude::new(0.0, 0.0));
    assert_eq!(result.probabilities, vec![0.0, 1.0]);
    assert_eq!(result.phases[0], 0.0);
}

#[test]
fn repeated_runs_are_identical() {
    let ops = [
        GateOp::h(0),
        GateOp::rx(1, 0.37),
        GateOp::cx(0, 2),
        GateOp::t(2),
        GateOp::ccx(0, 1, 3),
        GateOp::ry(3, -2.1),
    ];
    let a = simulate(4, &ops).unwrap();
    let b = simulate(4, &ops).unwrap();
    assert_eq!(a, b);
}

#[test]
fn run_matches_simulate() {
    let raw = vec![RawGate::new("h", 0), RawGate::new("CX", 1).with_control(0)];
    let program = Program::from_raw(2, &raw).unwrap();
    assert_eq!(
        run(&program),
        simulate(2, &[GateOp::h(0), GateOp::cx(0, 1)]).unwrap()
    );
}

// ---------------------------------------------------------------------------
// Rejection
// ---------------------------------------------------------------------------

#[test]
fn rejects_five_qubits() {
    assert_eq!(
        simulate(5, &[]).unwrap_err(),
        EngineError::InvalidQubitCount(5)
    );
}

#[test]
fn rejects_cx_on_same_wire() {
    assert_eq!(
        simulate(2, &[GateOp::cx(0, 0)]).unwrap_err(),
        EngineError::DuplicateQubit {
            step: 0,
            gate: GateName::Cx
        }
    );
}

#[test]
fn rejects_rx_without_angle() {
    let err = Program::from_raw(1, &[RawGate::new("rx", 0)]).unwrap_err();
    assert_eq!(err.kind(), "invalid_angle");
    assert_eq!(err.to_string(), "rx requires an 'angle' field (step 0)");
}

#[test]
fn rejects_unknown_gate() {
    let err = Program::from_raw(1, &[RawGate::new("u3", 0)]).unwrap_err();
    assert_eq!(err.kind(), "unsupported_gate");
}

#[test]
fn rejects_whole_program_on_late_error() {
    let ops = [GateOp::h(0), GateOp::cx(0, 1), GateOp::x(3)];
    assert!(matches!(
        simulate(2, &ops),
        Err(EngineError::QubitOutOfRange {
            step: 2,
            field: "target",
            ..
        })
    ));
}

/// Layers of H and Ry on every wire followed by CX(0,1) and CCX(1,2,3).
/// Wire 1 takes four slots per layer.
fn layered_program(layers: usize) -> Vec<GateOp> {
    let mut ops = Vec::new();
    for layer in 0..layers {
        for q in 0..4 {
            ops.push(GateOp::h(q));
            ops.push(GateOp::ry(q, 0.1 * (layer + 1) as f64));
        }
        ops.push(GateOp::cx(0, 1));
        ops.push(GateOp::ccx(1, 2, 3));
    }
    ops
}

#[test]
fn layered_program_within_wire_limit() {
    let ops = layered_program(2);
    assert!(Program::new(4, ops.clone()).is_ok());
    let result = simulate(4, &ops).unwrap();
    assert!((result.total_probability() - 1.0).abs() < 1e-6);
}

#[test]
fn layered_program_over_wire_limit() {
    assert_eq!(
        simulate(4, &layered_program(3)).unwrap_err(),
        EngineError::WireGateLimit {
            step: 28,
            qubit: 1,
            limit: MAX_GATES_PER_WIRE
        }
    );
}

#[test]
fn rejects_eleventh_gate_on_a_wire() {
    let ops = vec![GateOp::x(1); MAX_GATES_PER_WIRE + 1];
    assert!(matches!(
        simulate(2, &ops),
        Err(EngineError::WireGateLimit { qubit: 1, .. })
    ));
}
