use std::collections::BTreeMap;

use crate::decode::{Decodable, DecodeError, Reason, Result, SequenceDecoder, Value};

/// Keyed accessor over an object value.
///
/// Every lookup that fails prepends its key to the error path exactly once.
#[derive(Debug, Clone, Copy)]
pub struct ObjectDecoder<'a> {
	fields: &'a BTreeMap<String, Value>,
}

impl<'a> ObjectDecoder<'a> {
	/// Wrap `value`, failing with [`Reason::BadContainer`] unless it is an object.
	pub fn new(value: &'a Value) -> Result<Self> {
		let fields = value.as_object().ok_or_else(|| DecodeError::new(Reason::BadContainer))?;
		Ok(Self { fields })
	}

	/// Number of keys in the object.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Whether the object has no keys.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Whether `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.fields.contains_key(key)
	}

	/// Keys in sorted order.
	pub fn keys(&self) -> impl Iterator<Item = &'a str> + 'a {
		self.fields.keys().map(String::as_str)
	}

	/// Raw value at `key`, failing with [`Reason::KeyMissing`] when absent.
	pub fn value(&self, key: &str) -> Result<&'a Value> {
		self.fields
			.get(key)
			.ok_or_else(|| DecodeError::new(Reason::KeyMissing).with_prepended(key))
	}

	/// Decode the required field `key` as `T`.
	pub fn decode<T: Decodable>(&self, key: &str) -> Result<T> {
		let value = self.value(key)?;
		T::decode(value).map_err(|err| err.with_prepended(key))
	}

	/// Decode the field `key` as `T`, treating absence as `None`.
	pub fn decode_optional<T: Decodable>(&self, key: &str) -> Result<Option<T>> {
		let Some(value) = self.fields.get(key) else {
			return Ok(None);
		};
		T::decode(value).map(Some).map_err(|err| err.with_prepended(key))
	}

	/// Decode the required array-valued field `key` element by element.
	pub fn decode_array<T: Decodable>(&self, key: &str) -> Result<Vec<T>> {
		let value = self.value(key)?;
		SequenceDecoder::new(value)
			.and_then(|items| items.decode_all())
			.map_err(|err| err.with_prepended(key))
	}
}
