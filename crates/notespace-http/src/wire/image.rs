use serde::Deserialize;

/// Payload of the image upload endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageWire {
    pub url: String,
}
