use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub struct GenerateListingRequest {
    /// Forwarded as-is. `None` only when the key is missing; an explicit `null` stays `Some(Value::Null)`.
    #[serde(default, deserialize_with = "present")]
    pub prompt: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize)]
pub struct GenerateListingResponse {
    pub listing: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
