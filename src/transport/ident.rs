use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
/// Identifier field that some gateway deployments return as a JSON string
/// and others as a bare number.
pub enum JsonId {
    String(String),
    Number(serde_json::Number),
}

impl JsonId {
    pub fn into_string(self) -> String {
        match self {
            Self::String(value) => value,
            Self::Number(value) => value.to_string(),
        }
    }
}
