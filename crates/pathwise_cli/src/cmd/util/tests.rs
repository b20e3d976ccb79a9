use std::path::PathBuf;

use pathwise::decode::{DecodeError, FieldPath, Reason, Value, parse_str};

use crate::cmd::CliError;
use crate::cmd::util::{CliFailureJson, DecodeFailureJson, PrintOptions, render_value, truncate, value_to_json};

#[test]
fn value_to_json_round_trips_parsed_documents() {
	let text = r#"{"a": [1, -2, 1.5, 18446744073709551615], "b": {"c": null, "d": "e"}, "f": true}"#;
	let value = parse_str(text).expect("json parses");
	let expected: serde_json::Value = serde_json::from_str(text).expect("json parses");
	assert_eq!(value_to_json(&value), expected);
}

#[test]
fn failure_report_carries_reason_payloads() {
	let err = DecodeError::new(Reason::UnexpectedType("Int")).with_prepended(1_usize).with_prepended("ints");
	let report = serde_json::to_value(DecodeFailureJson::from_error(&err)).expect("report serializes");
	assert_eq!(report["ok"], false);
	assert_eq!(report["reason"], "UnexpectedType");
	assert_eq!(report["expected"], "Int");
	assert!(report.get("count").is_none(), "count only applies to OutOfRange");
	assert_eq!(report["path"], serde_json::json!(["ints", "1"]));
	assert_eq!(report["message"], "unexpected type (expected Int) at ints.1");

	let err = DecodeError::new(Reason::OutOfRange(4));
	let report = serde_json::to_value(DecodeFailureJson::from_error(&err)).expect("report serializes");
	assert_eq!(report["reason"], "OutOfRange");
	assert_eq!(report["count"], 4);
	assert_eq!(report["path"], serde_json::json!([]));
}

#[test]
fn render_value_truncates_arrays_and_depth() {
	let value = parse_str(r#"{"items": [1, 2, 3, 4], "deep": {"x": {"y": 1}}}"#).expect("json parses");
	let options = PrintOptions {
		max_array_items: 2,
		max_print_depth: 2,
		..PrintOptions::default()
	};
	let lines = render_value(&value, options);
	assert_eq!(
		lines,
		vec![
			"{",
			"  deep =",
			"    {",
			"      x =",
			"        { ... 1 fields }",
			"    }",
			"  items =",
			"    [",
			"      1",
			"      2",
			"      ... 2 more",
			"    ]",
			"}",
		]
	);
}

#[test]
fn render_scalar_root_is_single_line() {
	assert_eq!(render_value(&Value::from("hi"), PrintOptions::default()), vec!["\"hi\""]);
}

#[test]
fn truncate_counts_scalar_values() {
	assert_eq!(truncate("héllo", 10), "héllo");
	assert_eq!(truncate("héllo", 2), "hé...");
}

#[test]
fn non_decode_failures_report_kind_and_message() {
	let err = CliError::from(FieldPath::parse("a[").expect_err("unterminated selector"));
	let report = serde_json::to_value(CliFailureJson::from_error(&err)).expect("report serializes");
	assert_eq!(report["ok"], false);
	assert_eq!(report["error"], "path");
	assert_eq!(report["message"], "invalid field path: a[");

	let err = CliError::Io {
		path: PathBuf::from("missing.json"),
		source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
	};
	assert_eq!(err.kind(), "io");
	assert_eq!(err.to_string(), "read missing.json: not found");
}
