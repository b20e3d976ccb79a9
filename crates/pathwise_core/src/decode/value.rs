use std::collections::BTreeMap;

/// Untyped tree produced by the JSON parser boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Explicit null marker.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Numeric scalar.
	Number(Number),
	/// UTF-8 string scalar.
	String(Box<str>),
	/// Ordered sequence of values.
	Array(Vec<Value>),
	/// Mapping from unique string keys to values.
	Object(BTreeMap<String, Value>),
}

/// Numeric payload preserving whether the source literal was integral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
	/// Integral value that fits `i64`.
	Int(i64),
	/// Integral value above `i64::MAX`.
	UInt(u64),
	/// Non-integral or out-of-range value.
	Float(f64),
}

impl Number {
	/// Widen to `f64`, losing precision for very large integers.
	pub fn as_f64(self) -> f64 {
		match self {
			Self::Int(v) => v as f64,
			Self::UInt(v) => v as f64,
			Self::Float(v) => v,
		}
	}

	/// Integral payload as `i128`, or `None` for floats.
	pub fn as_i128(self) -> Option<i128> {
		match self {
			Self::Int(v) => Some(i128::from(v)),
			Self::UInt(v) => Some(i128::from(v)),
			Self::Float(_) => None,
		}
	}
}

impl Value {
	/// Stable label for the variant, used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "Null",
			Self::Bool(_) => "Bool",
			Self::Number(_) => "Number",
			Self::String(_) => "String",
			Self::Array(_) => "Array",
			Self::Object(_) => "Object",
		}
	}

	/// Borrow the mapping payload if this is an object.
	pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
		match self {
			Self::Object(fields) => Some(fields),
			_ => None,
		}
	}

	/// Borrow the element payload if this is an array.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(items) => Some(items),
			_ => None,
		}
	}

	/// Whether this is the null marker.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Number(Number::Int(value))
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Number(Number::Float(value))
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.into())
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Self::Array(items)
	}
}

impl From<BTreeMap<String, Value>> for Value {
	fn from(fields: BTreeMap<String, Value>) -> Self {
		Self::Object(fields)
	}
}
