use std::path::PathBuf;

use pathwise::decode::{Decodable, Value};
use pathwise::model::{LeafObject, RootObject};

use crate::cmd::Result;
use crate::cmd::util::{emit_failure_json, emit_json, read_document, truncate};

/// Record type a document is decoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Target {
	/// `{"childs": [leaf, ..]}`
	Root,
	/// `{"ints": [..], "string"?: .., "double": ..}`
	Leaf,
}

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long = "as", value_enum, default_value_t = Target::Root)]
	pub target: Target,
	#[arg(long)]
	pub json: bool,
}

/// Decode a document as the requested record and print it.
///
/// With `--json`, every failure also prints a JSON report on stdout.
pub fn run(args: Args) -> Result<()> {
	let json = args.json;
	let result = execute(args);
	if json {
		if let Err(err) = &result {
			emit_failure_json(err);
		}
	}
	result
}

fn execute(args: Args) -> Result<()> {
	let Args { file, target, json } = args;
	let value = read_document(&file)?;

	let decoded = match decode_target(&value, target) {
		Ok(decoded) => decoded,
		Err(err) => {
			tracing::debug!(?target, %err, "decode failed");
			return Err(err.into());
		}
	};
	tracing::debug!(?target, "decode succeeded");

	if json {
		emit_json(&DecodeSuccessJson {
			ok: true,
			target: decoded.label(),
			value: decoded.to_json(),
		});
		return Ok(());
	}

	println!("path: {}", file.display());
	println!("decoded: {}", decoded.label());
	for line in decoded.summary_lines() {
		println!("{line}");
	}
	Ok(())
}

/// Successfully decoded record of either target type.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
	/// Root record.
	Root(RootObject),
	/// Standalone leaf record.
	Leaf(LeafObject),
}

/// Decode `value` as `target`.
pub fn decode_target(value: &Value, target: Target) -> pathwise::decode::Result<Decoded> {
	match target {
		Target::Root => RootObject::decode(value).map(Decoded::Root),
		Target::Leaf => LeafObject::decode(value).map(Decoded::Leaf),
	}
}

impl Decoded {
	fn label(&self) -> &'static str {
		match self {
			Self::Root(_) => "RootObject",
			Self::Leaf(_) => "LeafObject",
		}
	}

	fn to_json(&self) -> serde_json::Value {
		match self {
			Self::Root(root) => serde_json::json!({
				"leaves": root.leaves.iter().map(leaf_json).collect::<Vec<_>>(),
			}),
			Self::Leaf(leaf) => leaf_json(leaf),
		}
	}

	fn summary_lines(&self) -> Vec<String> {
		match self {
			Self::Root(root) => {
				let mut lines = vec![format!("leaves: {}", root.leaves.len())];
				lines.extend(root.leaves.iter().enumerate().map(|(index, leaf)| format!("  [{index}] {}", leaf_line(leaf))));
				lines
			}
			Self::Leaf(leaf) => vec![leaf_line(leaf)],
		}
	}
}

fn leaf_json(leaf: &LeafObject) -> serde_json::Value {
	serde_json::json!({
		"bunch_of_ints": leaf.bunch_of_ints.value,
		"optional_string": leaf.optional_string,
		"some_double": leaf.some_double,
	})
}

fn leaf_line(leaf: &LeafObject) -> String {
	let string = match &leaf.optional_string {
		Some(text) => format!("\"{}\"", truncate(text, 60)),
		None => "<none>".to_owned(),
	};
	format!("ints={:?} string={string} double={}", leaf.bunch_of_ints.value, leaf.some_double)
}

#[derive(serde::Serialize)]
struct DecodeSuccessJson {
	ok: bool,
	target: &'static str,
	value: serde_json::Value,
}
