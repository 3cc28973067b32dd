//! Wire DTOs for the scoring-service HTTP API.
//!
//! DESIGN
//! ======
//! These types mirror the service's JSON bodies field for field. The widget
//! treats them as opaque pass-throughs: nothing here is recomputed or edited
//! client-side, so serde round-trips stay lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/assess`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    /// Free text to score. May be empty; the service decides what that means.
    pub text: String,
}

/// Reply of `POST /api/assess`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Categorical severity tag, e.g. `"Minimal"`, `"Low"`, `"High"`.
    pub label: String,
    /// Numeric score computed by the service.
    pub score: f64,
    /// Matched keywords in service order. Absent on the wire means none.
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// One element of the `GET /api/history` reply, most recent first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The text that was assessed.
    pub text: String,
    /// Severity tag assigned at assessment time.
    pub label: String,
    /// Score assigned at assessment time.
    pub score: f64,
    /// Matched keywords in service order. Absent on the wire means none.
    #[serde(default)]
    pub keywords: Vec<String>,
}
