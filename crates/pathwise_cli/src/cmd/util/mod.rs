use std::path::Path;

use pathwise::decode::{DecodeError, Number, Reason, Value, parse_slice};
use tracing_subscriber::EnvFilter;

use crate::cmd::{CliError, Result};

/// Output truncation limits for the human-readable value printer.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of fields printed for a single object.
	pub max_fields_per_object: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for arrays.
	pub max_array_items: usize,
	/// Maximum recursive print depth for nested containers.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_fields_per_object: 80,
			max_string_len: 200,
			max_array_items: 16,
			max_print_depth: 6,
		}
	}
}

/// Install the stderr log subscriber, honoring `RUST_LOG` (default `warn`).
pub fn init_tracing() {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.try_init();
}

/// Read and parse a JSON document into a generic value tree.
pub fn read_document(path: &Path) -> Result<Value> {
	let bytes = std::fs::read(path).map_err(|source| CliError::Io {
		path: path.to_owned(),
		source,
	})?;
	tracing::debug!(path = %path.display(), bytes = bytes.len(), "read document");

	let value = parse_slice(&bytes).map_err(|source| CliError::Json {
		path: path.to_owned(),
		source,
	})?;
	tracing::debug!(root = value.kind(), "parsed document");
	Ok(value)
}

/// Print one JSON payload to stdout.
pub fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => tracing::error!(%err, "failed to serialize json output"),
	}
}

/// Print the JSON failure report for `err` to stdout.
///
/// Decode failures carry their reason and path; the rest carry a kind label.
pub fn emit_failure_json(err: &CliError) {
	match err {
		CliError::Decode(decode) => emit_json(&DecodeFailureJson::from_error(decode)),
		other => emit_json(&CliFailureJson::from_error(other)),
	}
}

/// Machine-readable report for failures outside decoding.
#[derive(Debug, serde::Serialize)]
pub struct CliFailureJson {
	/// Always `false`.
	pub ok: bool,
	/// Failure kind label (`io`, `json`, `path`).
	pub error: &'static str,
	/// Rendered diagnostic.
	pub message: String,
}

impl CliFailureJson {
	/// Build a report from a command error.
	pub fn from_error(err: &CliError) -> Self {
		Self {
			ok: false,
			error: err.kind(),
			message: err.to_string(),
		}
	}
}

/// Machine-readable decode failure report.
#[derive(Debug, serde::Serialize)]
pub struct DecodeFailureJson {
	/// Always `false`.
	pub ok: bool,
	/// Reason kind label.
	pub reason: &'static str,
	/// Expected type name for `UnexpectedType`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub expected: Option<&'static str>,
	/// Element count for `OutOfRange`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub count: Option<usize>,
	/// Failure path, outermost first.
	pub path: Vec<String>,
	/// Rendered diagnostic.
	pub message: String,
}

impl DecodeFailureJson {
	/// Build a report from a decode error.
	pub fn from_error(err: &DecodeError) -> Self {
		let (reason, expected, count) = match err.reason() {
			Reason::BadContainer => ("BadContainer", None, None),
			Reason::KeyMissing => ("KeyMissing", None, None),
			Reason::OutOfRange(count) => ("OutOfRange", None, Some(*count)),
			Reason::UnexpectedType(name) => ("UnexpectedType", Some(*name), None),
		};
		Self {
			ok: false,
			reason,
			expected,
			count,
			path: err.path_strings(),
			message: err.describe(),
		}
	}
}

/// Convert a generic value back into a `serde_json` tree for output.
pub fn value_to_json(value: &Value) -> serde_json::Value {
	use serde_json::{Map, Value as JsonValue};

	match value {
		Value::Null => JsonValue::Null,
		Value::Bool(v) => serde_json::json!(v),
		Value::Number(Number::Int(v)) => serde_json::json!(v),
		Value::Number(Number::UInt(v)) => serde_json::json!(v),
		Value::Number(Number::Float(v)) => serde_json::json!(v),
		Value::String(v) => serde_json::json!(&**v),
		Value::Array(items) => JsonValue::Array(items.iter().map(value_to_json).collect()),
		Value::Object(fields) => {
			let out: Map<String, JsonValue> = fields.iter().map(|(key, item)| (key.clone(), value_to_json(item))).collect();
			JsonValue::Object(out)
		}
	}
}

/// Render a value as indented text lines.
pub fn render_value(value: &Value, options: PrintOptions) -> Vec<String> {
	let mut lines = Vec::new();
	render_into(&mut lines, value, 0, 0, options);
	lines
}

/// Print a value to stdout.
pub fn print_value(value: &Value, options: PrintOptions) {
	for line in render_value(value, options) {
		println!("{line}");
	}
}

fn render_into(lines: &mut Vec<String>, value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Array(items) => {
			if depth >= options.max_print_depth {
				lines.push(format!("{pad}[... {} items]", items.len()));
				return;
			}
			lines.push(format!("{pad}["));
			for item in items.iter().take(options.max_array_items) {
				render_into(lines, item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_array_items {
				lines.push(format!("{pad}  ... {} more", items.len() - options.max_array_items));
			}
			lines.push(format!("{pad}]"));
		}
		Value::Object(fields) => {
			if depth >= options.max_print_depth {
				lines.push(format!("{pad}{{ ... {} fields }}", fields.len()));
				return;
			}
			lines.push(format!("{pad}{{"));
			for (key, item) in fields.iter().take(options.max_fields_per_object) {
				if matches!(item, Value::Array(_) | Value::Object(_)) {
					lines.push(format!("{pad}  {key} ="));
					render_into(lines, item, indent + 4, depth + 1, options);
				} else {
					lines.push(format!("{pad}  {key} = {}", render_scalar(item, options)));
				}
			}
			if fields.len() > options.max_fields_per_object {
				lines.push(format!("{pad}  ... {} more", fields.len() - options.max_fields_per_object));
			}
			lines.push(format!("{pad}}}"));
		}
		scalar => lines.push(format!("{pad}{}", render_scalar(scalar, options))),
	}
}

fn render_scalar(value: &Value, options: PrintOptions) -> String {
	match value {
		Value::Null => "null".to_owned(),
		Value::Bool(v) => v.to_string(),
		Value::Number(Number::Int(v)) => v.to_string(),
		Value::Number(Number::UInt(v)) => v.to_string(),
		Value::Number(Number::Float(v)) => v.to_string(),
		Value::String(v) => format!("\"{}\"", truncate(v, options.max_string_len)),
		Value::Array(items) => format!("[{} items]", items.len()),
		Value::Object(fields) => format!("{{{} fields}}", fields.len()),
	}
}

/// Truncate `text` to `max` Unicode scalar values, marking the cut.
pub fn truncate(text: &str, max: usize) -> String {
	if text.chars().count() <= max {
		return text.to_owned();
	}
	let mut out: String = text.chars().take(max).collect();
	out.push_str("...");
	out
}

#[cfg(test)]
mod tests;
