use crate::server::error::AppError;

/// Parses the `user_id` query parameter.
///
/// # Arguments
/// - `value` - Raw query value, `None` when the parameter is absent
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed user id
/// - `Err(AppError::BadRequest)` - Parameter missing, empty, or not an integer
/// - `Err(AppError::NotFound)` - An integer outside the ID range, which no user can have
pub fn parse_user_id(value: Option<&str>) -> Result<i32, AppError> {
    let value = match value {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AppError::BadRequest("Missing user_id".to_string())),
    };

    let user_id = value
        .parse::<i64>()
        .map_err(|_| AppError::BadRequest("user_id must be a number".to_string()))?;

    i32::try_from(user_id).map_err(|_| AppError::NotFound("User not found".to_string()))
}

/// Unwraps a required request field, treating an empty string as missing.
///
/// # Arguments
/// - `value` - The optional field from the request body
/// - `message` - Error message returned when the field is missing
///
/// # Returns
/// - `Ok(String)` - The non-empty field value
/// - `Err(AppError::BadRequest)` - Field absent, null, or empty
pub fn require_field(value: Option<String>, message: &str) -> Result<String, AppError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::BadRequest(message.to_string())),
    }
}
