use serde_json::Value as JsonValue;

use crate::decode::{Number, Value};

/// Parse JSON text into a generic value tree.
///
/// Parser failures are returned as-is; they are not decode failures.
pub fn parse_str(input: &str) -> serde_json::Result<Value> {
	let json: JsonValue = serde_json::from_str(input)?;
	Ok(Value::from(json))
}

/// Parse a JSON byte buffer into a generic value tree.
pub fn parse_slice(input: &[u8]) -> serde_json::Result<Value> {
	let json: JsonValue = serde_json::from_slice(input)?;
	Ok(Value::from(json))
}

impl From<JsonValue> for Value {
	fn from(json: JsonValue) -> Self {
		match json {
			JsonValue::Null => Self::Null,
			JsonValue::Bool(v) => Self::Bool(v),
			JsonValue::Number(n) => Self::Number(number_from_json(&n)),
			JsonValue::String(v) => Self::String(v.into_boxed_str()),
			JsonValue::Array(items) => Self::Array(items.into_iter().map(Value::from).collect()),
			JsonValue::Object(fields) => Self::Object(fields.into_iter().map(|(key, value)| (key, Value::from(value))).collect()),
		}
	}
}

fn number_from_json(n: &serde_json::Number) -> Number {
	if let Some(v) = n.as_i64() {
		return Number::Int(v);
	}
	if let Some(v) = n.as_u64() {
		return Number::UInt(v);
	}
	Number::Float(n.as_f64().unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests;
