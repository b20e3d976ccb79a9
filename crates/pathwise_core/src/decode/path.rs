use std::fmt;

use thiserror::Error;

/// One location step inside a value tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
	/// Named object field.
	Field(String),
	/// Zero-based array element.
	Index(usize),
}

impl fmt::Display for PathStep {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Field(name) => f.write_str(name),
			Self::Index(index) => write!(f, "{index}"),
		}
	}
}

impl From<&str> for PathStep {
	fn from(name: &str) -> Self {
		Self::Field(name.to_owned())
	}
}

impl From<String> for PathStep {
	fn from(name: String) -> Self {
		Self::Field(name)
	}
}

impl From<usize> for PathStep {
	fn from(index: usize) -> Self {
		Self::Index(index)
	}
}

/// Path expression syntax error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathParseError {
	/// Expression is empty or malformed.
	#[error("invalid field path: {path}")]
	InvalidFieldPath {
		/// Original user-provided expression.
		path: String,
	},
}

/// Parsed path expression such as `childs[0].ints[1]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldPath {
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
}

impl FieldPath {
	/// Parse dotted field syntax with optional `[index]` and `["key"]` selectors.
	///
	/// Bare field names are limited to ASCII alphanumerics, `_` and `-`; any
	/// other key is written quoted (`["a.b"]`, with `\"` and `\\` escapes).
	/// A leading selector (`[2].name`) addresses a top-level array.
	pub fn parse(input: &str) -> Result<Self, PathParseError> {
		let invalid = || PathParseError::InvalidFieldPath { path: input.to_owned() };
		if input.is_empty() {
			return Err(invalid());
		}

		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut steps = Vec::new();

		while idx < bytes.len() {
			let start = idx;
			while idx < bytes.len() && is_field_byte(bytes[idx]) {
				idx += 1;
			}

			if idx > start {
				steps.push(PathStep::Field(input[start..idx].to_owned()));
			} else if !(start == 0 && bytes[idx] == b'[') {
				return Err(invalid());
			}

			while idx < bytes.len() && bytes[idx] == b'[' {
				idx += 1;
				if bytes.get(idx) == Some(&b'"') {
					let (key, end) = parse_quoted_key(bytes, idx + 1).ok_or_else(invalid)?;
					steps.push(PathStep::Field(key));
					idx = end;
				} else {
					let n_start = idx;
					while idx < bytes.len() && bytes[idx].is_ascii_digit() {
						idx += 1;
					}
					if idx == n_start {
						return Err(invalid());
					}
					let number = input[n_start..idx].parse::<usize>().map_err(|_| invalid())?;
					steps.push(PathStep::Index(number));
				}

				if idx >= bytes.len() || bytes[idx] != b']' {
					return Err(invalid());
				}
				idx += 1;
			}

			if idx < bytes.len() {
				if bytes[idx] != b'.' {
					return Err(invalid());
				}
				idx += 1;
				if idx >= bytes.len() {
					return Err(invalid());
				}
			}
		}

		Ok(Self { steps })
	}
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, step) in self.steps.iter().enumerate() {
			match step {
				PathStep::Field(name) if !is_bare_key(name) => {
					f.write_str("[\"")?;
					for ch in name.chars() {
						if matches!(ch, '"' | '\\') {
							f.write_str("\\")?;
						}
						write!(f, "{ch}")?;
					}
					f.write_str("\"]")?;
				}
				PathStep::Field(name) if i == 0 => f.write_str(name)?,
				PathStep::Field(name) => write!(f, ".{name}")?,
				PathStep::Index(index) => write!(f, "[{index}]")?,
			}
		}
		Ok(())
	}
}

fn is_field_byte(byte: u8) -> bool {
	byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-'
}

fn is_bare_key(name: &str) -> bool {
	!name.is_empty() && name.bytes().all(is_field_byte)
}

/// Read a quoted key starting after its opening quote; returns the key and
/// the offset just past the closing quote.
fn parse_quoted_key(bytes: &[u8], mut idx: usize) -> Option<(String, usize)> {
	let mut key = Vec::new();
	loop {
		match *bytes.get(idx)? {
			b'"' => return String::from_utf8(key).ok().map(|key| (key, idx + 1)),
			b'\\' => {
				let escaped = *bytes.get(idx + 1)?;
				if !matches!(escaped, b'"' | b'\\') {
					return None;
				}
				key.push(escaped);
				idx += 2;
			}
			byte => {
				key.push(byte);
				idx += 1;
			}
		}
	}
}
