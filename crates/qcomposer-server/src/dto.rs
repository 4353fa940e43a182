//! Data Transfer Objects for API requests and responses.

use serde::{Deserialize, Serialize};

use qcomposer_engine::RawGate;

// ============================================================================
// Simulation DTOs
// ============================================================================

/// Request to simulate a gate program.
///
/// The response body is a serialized [`qcomposer_engine::SimulationResult`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateRequest {
    /// Number of qubits (1 to 4).
    pub qubit_count: i64,
    /// Gates in application order.
    pub program: Vec<RawGate>,
}

// ============================================================================
// Health DTOs
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status (always "ok" if responding).
    pub status: String,
    /// Server version.
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
