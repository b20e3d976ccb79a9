#![allow(missing_docs)]

use std::process::{Command, Output};

use pathwise_testkit::fixture_path;
use serde_json::Value;

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_pathwise")).args(args).output().expect("command executes")
}

fn run_json(args: &[&str]) -> (bool, Value) {
	let output = run(args);
	let json = serde_json::from_slice(&output.stdout).expect("stdout should be valid json");
	(output.status.success(), json)
}

fn fixture(name: &str) -> String {
	fixture_path(name).display().to_string()
}

#[test]
fn decode_root_json_lists_leaves_in_order() {
	let (ok, json) = run_json(&["decode", &fixture("root.json"), "--json"]);
	assert!(ok, "decode should succeed");
	assert_eq!(json["ok"], true);
	assert_eq!(json["target"], "RootObject");
	assert_eq!(json["value"]["leaves"][0]["bunch_of_ints"], serde_json::json!([1, 2, 3]));
	assert_eq!(json["value"]["leaves"][0]["optional_string"], "superString");
	assert_eq!(json["value"]["leaves"][1]["optional_string"], Value::Null);
	assert_eq!(json["value"]["leaves"][1]["some_double"], 2.5);
}

#[test]
fn decode_failure_json_reports_full_path() {
	let (ok, json) = run_json(&["decode", &fixture("root_bad_int.json"), "--json"]);
	assert!(!ok, "decode should fail");
	assert_eq!(json["ok"], false);
	assert_eq!(json["reason"], "UnexpectedType");
	assert_eq!(json["expected"], "Int");
	assert_eq!(json["path"], serde_json::json!(["childs", "0", "ints", "1"]));
}

#[test]
fn decode_failure_text_goes_to_stderr() {
	let output = run(&["decode", &fixture("root_missing_double.json")]);
	assert!(!output.status.success());
	assert!(output.stdout.is_empty(), "nothing printed on failure");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("key missing at childs.1.double"), "unexpected stderr: {stderr}");
}

#[test]
fn decode_as_leaf_prints_summary() {
	let output = run(&["decode", &fixture("leaf.json"), "--as", "leaf"]);
	assert!(output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("decoded: LeafObject"));
	assert!(stdout.contains("ints=[1, 2, 3] string=\"superString\" double=1.25"));
}

#[test]
fn parse_errors_are_not_decode_errors() {
	let output = run(&["decode", &fixture("truncated.json")]);
	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("error: parse "), "unexpected stderr: {stderr}");
	assert!(!stderr.contains("decode:"), "parse failure must not be reported as decode: {stderr}");
}

#[test]
fn select_json_returns_subtree() {
	let (ok, json) = run_json(&["select", &fixture("root.json"), "--path", "childs[0].ints", "--json"]);
	assert!(ok, "select should succeed");
	assert_eq!(json["path"], "childs[0].ints");
	assert_eq!(json["kind"], "Array");
	assert_eq!(json["value"], serde_json::json!([1, 2, 3]));
}

#[test]
fn select_out_of_range_reports_count() {
	let (ok, json) = run_json(&["select", &fixture("root.json"), "--path", "childs[9]", "--json"]);
	assert!(!ok);
	assert_eq!(json["reason"], "OutOfRange");
	assert_eq!(json["count"], 2);
	assert_eq!(json["path"], serde_json::json!(["childs"]));
}

#[test]
fn select_rejects_malformed_path() {
	let output = run(&["select", &fixture("root.json"), "--path", "childs[x]"]);
	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("invalid field path: childs[x]"), "unexpected stderr: {stderr}");
}

#[test]
fn json_mode_reports_parse_failures_on_stdout() {
	let (ok, json) = run_json(&["decode", &fixture("truncated.json"), "--json"]);
	assert!(!ok);
	assert_eq!(json["ok"], false);
	assert_eq!(json["error"], "json");
	assert!(json["message"].as_str().is_some_and(|message| message.starts_with("parse ")));
}

#[test]
fn json_mode_reports_missing_files_on_stdout() {
	let (ok, json) = run_json(&["select", &fixture("does_not_exist.json"), "--path", "childs", "--json"]);
	assert!(!ok);
	assert_eq!(json["ok"], false);
	assert_eq!(json["error"], "io");
}

#[test]
fn json_mode_reports_malformed_paths_on_stdout() {
	let (ok, json) = run_json(&["select", &fixture("root.json"), "--path", "childs[x]", "--json"]);
	assert!(!ok);
	assert_eq!(json["error"], "path");
	assert_eq!(json["message"], "invalid field path: childs[x]");
}
