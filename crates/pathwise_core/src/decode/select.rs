use crate::decode::{Decodable, FieldPath, ObjectDecoder, PathStep, Result, SequenceDecoder, Value};

/// Walk `path` from `root` and decode the value it reaches as `T`.
///
/// Failures report the steps walked so far, ending at the failing step.
pub fn select<T: Decodable>(root: &Value, path: &FieldPath) -> Result<T> {
	select_steps(root, &path.steps)
}

fn select_steps<T: Decodable>(current: &Value, steps: &[PathStep]) -> Result<T> {
	let Some((step, rest)) = steps.split_first() else {
		return T::decode(current);
	};

	match step {
		PathStep::Field(key) => {
			let object = ObjectDecoder::new(current)?;
			let next = object.value(key)?;
			select_steps(next, rest).map_err(|err| err.with_prepended(key.as_str()))
		}
		PathStep::Index(index) => {
			let items = SequenceDecoder::new(current)?;
			let next = items.value(*index)?;
			select_steps(next, rest).map_err(|err| err.with_prepended(*index))
		}
	}
}
