use crate::error::AppError;

/// Parses a record ID from a path segment.
///
/// # Arguments
/// - `value` - The raw path segment to attempt to parse into an `i32`
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed the segment as an ID
/// - `Err(AppError::BadRequest)` - The segment is not a decimal integer; the
///   parse error message becomes the response body
pub fn parse_id(value: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .map_err(|err| AppError::BadRequest(err.to_string()))
}
