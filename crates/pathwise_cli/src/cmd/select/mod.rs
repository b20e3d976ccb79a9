use std::path::PathBuf;

use pathwise::decode::{FieldPath, Value, select};

use crate::cmd::Result;
use crate::cmd::util::{PrintOptions, emit_failure_json, emit_json, print_value, read_document, value_to_json};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long = "path")]
	pub path_expr: String,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long = "max-array")]
	pub max_array: Option<usize>,
}

/// Print the subtree reached by a path expression.
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
	let Args {
		file,
		path_expr,
		json,
		max_depth,
		max_array,
	} = args;

	let path = FieldPath::parse(&path_expr)?;
	let root = read_document(&file)?;

	let selected = match select::<Value>(&root, &path) {
		Ok(value) => value,
		Err(err) => {
			tracing::debug!(path = %path, %err, "select failed");
			return Err(err.into());
		}
	};

	if json {
		emit_json(&SelectJson {
			ok: true,
			path: path.to_string(),
			kind: selected.kind(),
			value: value_to_json(&selected),
		});
		return Ok(());
	}

	let mut options = PrintOptions::default();
	if let Some(max_depth) = max_depth {
		options.max_print_depth = max_depth;
	}
	if let Some(max_array) = max_array {
		options.max_array_items = max_array;
	}

	println!("path: {}", file.display());
	println!("select: {path}");
	println!("kind: {}", selected.kind());
	print_value(&selected, options);
	Ok(())
}

#[derive(serde::Serialize)]
struct SelectJson {
	ok: bool,
	path: String,
	kind: &'static str,
	value: serde_json::Value,
}
