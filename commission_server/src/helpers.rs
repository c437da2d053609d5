use serde_json::Value;

/// Parses a webhook body. Anything other than a JSON object is refused; a missing field inside the object is fine.
pub fn parse_webhook_body(body: &[u8]) -> Result<Value, String> {
    let value = serde_json::from_slice::<Value>(body).map_err(|e| e.to_string())?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(format!("expected a JSON object, got {}", json_type(&value)))
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
