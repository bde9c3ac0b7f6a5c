//! Translation lookup in raw pipeline responses

use serde_json::Value;

/// Read `pipelineResponse[0].output[0].target` from a pipeline response.
///
/// Returns `None` when any level is missing, has the wrong type, or is an
/// empty list. A present `target` is returned whatever its JSON type.
pub fn extract_translation(result: &Value) -> Option<&Value> {
    result
        .as_object()?
        .get("pipelineResponse")?
        .as_array()?
        .first()?
        .as_object()?
        .get("output")?
        .as_array()?
        .first()?
        .as_object()?
        .get("target")
}
