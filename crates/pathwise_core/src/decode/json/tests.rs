use std::collections::BTreeMap;

use crate::decode::{Number, Value, parse_slice, parse_str};

#[test]
fn maps_every_json_variant() {
	let value = parse_str(r#"{"n": null, "b": true, "i": -3, "u": 18446744073709551615, "f": 1.5, "s": "x", "a": [1]}"#).expect("json parses");

	let mut expected = BTreeMap::new();
	expected.insert("n".to_owned(), Value::Null);
	expected.insert("b".to_owned(), Value::Bool(true));
	expected.insert("i".to_owned(), Value::Number(Number::Int(-3)));
	expected.insert("u".to_owned(), Value::Number(Number::UInt(u64::MAX)));
	expected.insert("f".to_owned(), Value::Number(Number::Float(1.5)));
	expected.insert("s".to_owned(), Value::String("x".into()));
	expected.insert("a".to_owned(), Value::Array(vec![Value::Number(Number::Int(1))]));
	assert_eq!(value, Value::Object(expected));
}

#[test]
fn integral_literal_with_fraction_stays_float() {
	let value = parse_str("1.0").expect("json parses");
	assert_eq!(value, Value::Number(Number::Float(1.0)));
}

#[test]
fn slice_and_str_agree() {
	let text = r#"[{"k": [true, false]}]"#;
	assert_eq!(parse_slice(text.as_bytes()).expect("slice parses"), parse_str(text).expect("str parses"));
}

#[test]
fn parse_errors_pass_through() {
	let err = parse_str("{\"a\": ").expect_err("truncated json should fail");
	assert!(err.is_eof(), "expected eof classification, got {err}");
}
