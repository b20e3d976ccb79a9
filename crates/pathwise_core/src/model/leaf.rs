use crate::decode::{Decodable, ObjectDecoder, Result, Value};
use crate::model::NamedValue;

/// Type-level tag for [`BunchOfInts`].
#[derive(Debug, Clone, Copy)]
pub enum IntsTag {}

/// Integer list carried under the `ints` key.
pub type BunchOfInts = NamedValue<Vec<i64>, IntsTag>;

/// Leaf record: `{"ints": [..], "string"?: "..", "double": ..}`.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafObject {
	/// Integers from `ints`.
	pub bunch_of_ints: BunchOfInts,
	/// Value of `string`, if the key is present.
	pub optional_string: Option<String>,
	/// Value of `double`.
	pub some_double: f64,
}

impl Decodable for LeafObject {
	fn decode(value: &Value) -> Result<Self> {
		let object = ObjectDecoder::new(value)?;
		Ok(Self {
			bunch_of_ints: object.decode("ints")?,
			optional_string: object.decode_optional("string")?,
			some_double: object.decode("double")?,
		})
	}
}
