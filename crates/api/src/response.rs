//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Write responses add
//! a `"warnings"` array when secondary effects (cache invalidation, event
//! publish, fanout) partially failed; the primary result is still reported
//! as a success.

use playhub_core::warning::Warning;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Write response envelope: the primary result plus any degraded-success
/// warnings. `warnings` is omitted from the JSON when empty.
#[derive(Debug, Serialize)]
pub struct WriteResponse<T: Serialize> {
    pub data: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<Warning>,
}
