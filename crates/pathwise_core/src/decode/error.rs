use std::collections::VecDeque;

use thiserror::Error;

use crate::decode::PathStep;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Separator used by [`DecodeError::describe`].
pub const DEFAULT_SEPARATOR: &str = ".";

/// Why a decode failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Reason {
	/// Expected an object or array container, got something else.
	#[error("bad container")]
	BadContainer,
	/// Required field absent from an object.
	#[error("key missing")]
	KeyMissing,
	/// Array index outside `[0, count)`.
	#[error("index out of range (count={0})")]
	OutOfRange(usize),
	/// Scalar present but of the wrong primitive kind.
	#[error("unexpected type (expected {0})")]
	UnexpectedType(&'static str),
}

/// Decode failure: a [`Reason`] plus the traversal path to the failure site.
///
/// The path is ordered outermost-first. A freshly raised error has an empty
/// path; each enclosing frame prepends exactly one step while propagating.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render(.reason, .path, DEFAULT_SEPARATOR))]
pub struct DecodeError {
	reason: Reason,
	path: VecDeque<PathStep>,
}

impl DecodeError {
	/// Raise `reason` at the current frame, with an empty path.
	pub fn new(reason: Reason) -> Self {
		Self { reason, path: VecDeque::new() }
	}

	/// Return this error with `step` placed in front of the existing path.
	pub fn with_prepended(mut self, step: impl Into<PathStep>) -> Self {
		self.path.push_front(step.into());
		self
	}

	/// Failure kind.
	pub fn reason(&self) -> &Reason {
		&self.reason
	}

	/// Path steps, outermost first.
	pub fn path(&self) -> impl ExactSizeIterator<Item = &PathStep> + '_ {
		self.path.iter()
	}

	/// Path steps rendered as strings, outermost first.
	pub fn path_strings(&self) -> Vec<String> {
		self.path.iter().map(PathStep::to_string).collect()
	}

	/// Render reason and dotted path for diagnostics.
	pub fn describe(&self) -> String {
		self.describe_with(DEFAULT_SEPARATOR)
	}

	/// Render reason and path joined by `separator`.
	pub fn describe_with(&self, separator: &str) -> String {
		render(&self.reason, &self.path, separator)
	}
}

impl From<Reason> for DecodeError {
	fn from(reason: Reason) -> Self {
		Self::new(reason)
	}
}

fn render(reason: &Reason, path: &VecDeque<PathStep>, separator: &str) -> String {
	if path.is_empty() {
		return reason.to_string();
	}
	let joined = path.iter().map(PathStep::to_string).collect::<Vec<_>>().join(separator);
	format!("{reason} at {joined}")
}
