use serde_json::Value as JsonValue;

use crate::error::PlannerError;
use crate::models::plan::ProjectPlan;

/// Parses model output into a plan. Syntax and shape failures are reported
/// separately; dependency ids and timings are taken on trust.
pub fn decode_plan(payload: &str) -> Result<ProjectPlan, PlannerError> {
    let value: JsonValue = serde_json::from_str(payload).map_err(PlannerError::Decode)?;
    serde_json::from_value(value).map_err(PlannerError::Structure)
}
