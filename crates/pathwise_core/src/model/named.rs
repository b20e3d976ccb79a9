use std::fmt;
use std::marker::PhantomData;

use crate::decode::{Decodable, Result, Value};

/// Value of type `V` distinguished at the type level by `Tag`.
///
/// Decoding delegates entirely to `V`; the tag adds no runtime data.
pub struct NamedValue<V, Tag> {
	/// Wrapped payload.
	pub value: V,
	tag: PhantomData<fn() -> Tag>,
}

impl<V, Tag> NamedValue<V, Tag> {
	/// Wrap `value`.
	pub fn new(value: V) -> Self {
		Self { value, tag: PhantomData }
	}

	/// Unwrap the payload.
	pub fn into_inner(self) -> V {
		self.value
	}
}

impl<V: Decodable, Tag> Decodable for NamedValue<V, Tag> {
	fn decode(value: &Value) -> Result<Self> {
		V::decode(value).map(Self::new)
	}
}

impl<V: fmt::Debug, Tag> fmt::Debug for NamedValue<V, Tag> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("NamedValue").field(&self.value).finish()
	}
}

impl<V: Clone, Tag> Clone for NamedValue<V, Tag> {
	fn clone(&self) -> Self {
		Self::new(self.value.clone())
	}
}

impl<V: PartialEq, Tag> PartialEq for NamedValue<V, Tag> {
	fn eq(&self, other: &Self) -> bool {
		self.value == other.value
	}
}

impl<V, Tag> std::ops::Deref for NamedValue<V, Tag> {
	type Target = V;

	fn deref(&self) -> &V {
		&self.value
	}
}
