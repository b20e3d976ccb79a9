use crate::decode::{Decodable, DecodeError, Reason, Result, Value};

/// Indexed accessor over an array value.
///
/// Elements are visited in ascending order; the first failure aborts and
/// carries its index as the leading path step.
#[derive(Debug, Clone, Copy)]
pub struct SequenceDecoder<'a> {
	items: &'a [Value],
}

impl<'a> SequenceDecoder<'a> {
	/// Wrap `value`, failing with [`Reason::BadContainer`] unless it is an array.
	pub fn new(value: &'a Value) -> Result<Self> {
		let items = value.as_array().ok_or_else(|| DecodeError::new(Reason::BadContainer))?;
		Ok(Self { items })
	}

	/// Number of elements.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether the array has no elements.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Raw element at `index`, failing with [`Reason::OutOfRange`] past the end.
	pub fn value(&self, index: usize) -> Result<&'a Value> {
		self.items
			.get(index)
			.ok_or_else(|| DecodeError::new(Reason::OutOfRange(self.items.len())))
	}

	/// Decode every element as `T`, or fail on the first bad one.
	pub fn decode_all<T: Decodable>(&self) -> Result<Vec<T>> {
		let mut out = Vec::with_capacity(self.items.len());
		for (index, item) in self.items.iter().enumerate() {
			let decoded = T::decode(item).map_err(|err| err.with_prepended(index))?;
			out.push(decoded);
		}
		Ok(out)
	}

	/// Decode the single element at `index` as `T`.
	pub fn decode_at<T: Decodable>(&self, index: usize) -> Result<T> {
		let item = self.value(index)?;
		T::decode(item).map_err(|err| err.with_prepended(index))
	}
}
