use std::path::PathBuf;

use pathwise::decode::{DecodeError, PathParseError};
use thiserror::Error;

/// Command-local result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Failures surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Input document could not be read.
	#[error("read {}: {source}", .path.display())]
	Io {
		/// Input path.
		path: PathBuf,
		/// Underlying IO failure.
		source: std::io::Error,
	},
	/// Input document is not valid JSON.
	#[error("parse {}: {source}", .path.display())]
	Json {
		/// Input path.
		path: PathBuf,
		/// Parser failure, passed through unchanged.
		source: serde_json::Error,
	},
	/// Document shape did not match the requested type.
	#[error("decode: {0}")]
	Decode(#[from] DecodeError),
	/// Path expression syntax error.
	#[error(transparent)]
	Path(#[from] PathParseError),
}

impl CliError {
	/// Stable lowercase label for the failure kind.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Io { .. } => "io",
			Self::Json { .. } => "json",
			Self::Decode(_) => "decode",
			Self::Path(_) => "path",
		}
	}
}
