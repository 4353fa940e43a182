//! Simulation endpoint.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use qcomposer_engine::{Program, SimulationResult};
use tracing::{debug, instrument, warn};

use crate::dto::SimulateRequest;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/simulate - Validate a gate program and return its final state.
#[instrument(skip_all)]
pub async fn simulate(
    State(_state): State<Arc<AppState>>,
    payload: Result<Json<SimulateRequest>, JsonRejection>,
) -> Result<Json<SimulationResult>, ApiError> {
    let Json(req) = payload?;
    debug!(
        "Simulate request: {} qubits, {} ops",
        req.qubit_count,
        req.program.len()
    );

    let program = Program::from_raw(req.qubit_count, &req.program).inspect_err(|e| {
        warn!(kind = e.kind(), "Rejected program: {e}");
    })?;

    Ok(Json(qcomposer_engine::run(&program)))
}
