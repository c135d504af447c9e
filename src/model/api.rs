use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Body returned for every failed request.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ErrorDto {
    pub message: String,
}

/// Body carrying only a human readable confirmation.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Scalar accepted where the API stores free-form text.
#[derive(Deserialize)]
#[serde(untagged)]
enum Text {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

/// Deserializes an optional text field, accepting numbers and booleans as their textual
/// form so that `"population": 200000` is stored as `"200000"`.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<Text>::deserialize(deserializer)?;

    Ok(text.map(|text| match text {
        Text::String(value) => value,
        Text::Integer(value) => value.to_string(),
        Text::Float(value) => value.to_string(),
        Text::Bool(value) => value.to_string(),
    }))
}
