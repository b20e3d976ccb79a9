use crate::decode::{DecodeError, Reason, Result, SequenceDecoder, Value};

/// A type that can be built from a generic [`Value`].
///
/// Scalar impls check the value's variant directly and fail with
/// [`Reason::UnexpectedType`] and an empty path. Composite impls delegate to
/// their field types through [`crate::decode::ObjectDecoder`] and
/// [`SequenceDecoder`], which attach location on the way out.
pub trait Decodable: Sized {
	/// Attempt to decode `value` as `Self`.
	fn decode(value: &Value) -> Result<Self>;
}

/// Decode a whole document root as `T`.
pub fn decode_value<T: Decodable>(value: &Value) -> Result<T> {
	T::decode(value)
}

fn unexpected(name: &'static str) -> DecodeError {
	DecodeError::new(Reason::UnexpectedType(name))
}

impl Decodable for bool {
	fn decode(value: &Value) -> Result<Self> {
		match value {
			Value::Bool(v) => Ok(*v),
			_ => Err(unexpected("Bool")),
		}
	}
}

impl Decodable for String {
	fn decode(value: &Value) -> Result<Self> {
		match value {
			Value::String(v) => Ok(v.to_string()),
			_ => Err(unexpected("String")),
		}
	}
}

impl Decodable for f64 {
	fn decode(value: &Value) -> Result<Self> {
		match value {
			Value::Number(n) => Ok(n.as_f64()),
			_ => Err(unexpected("Double")),
		}
	}
}

impl Decodable for f32 {
	fn decode(value: &Value) -> Result<Self> {
		match value {
			Value::Number(n) => {
				let wide = n.as_f64();
				let narrow = wide as f32;
				if wide.is_finite() && !narrow.is_finite() {
					return Err(unexpected("Float"));
				}
				Ok(narrow)
			}
			_ => Err(unexpected("Float")),
		}
	}
}

macro_rules! impl_decodable_int {
	($($ty:ty => $name:literal),* $(,)?) => {
		$(
			impl Decodable for $ty {
				fn decode(value: &Value) -> Result<Self> {
					let Value::Number(n) = value else {
						return Err(unexpected($name));
					};
					n.as_i128().and_then(|v| <$ty>::try_from(v).ok()).ok_or_else(|| unexpected($name))
				}
			}
		)*
	};
}

impl_decodable_int! {
	i8 => "Int8",
	i16 => "Int16",
	i32 => "Int32",
	i64 => "Int",
	u8 => "UInt8",
	u16 => "UInt16",
	u32 => "UInt32",
	u64 => "UInt64",
}

impl Decodable for Value {
	fn decode(value: &Value) -> Result<Self> {
		Ok(value.clone())
	}
}

impl<T: Decodable> Decodable for Vec<T> {
	fn decode(value: &Value) -> Result<Self> {
		SequenceDecoder::new(value)?.decode_all()
	}
}

impl<T: Decodable> Decodable for Box<T> {
	fn decode(value: &Value) -> Result<Self> {
		T::decode(value).map(Box::new)
	}
}
