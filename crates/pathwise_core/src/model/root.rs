use crate::decode::{Decodable, ObjectDecoder, Result, Value};
use crate::model::LeafObject;

/// Root record: `{"childs": [leaf, ..]}`.
#[derive(Debug, Clone, PartialEq)]
pub struct RootObject {
	/// Leaves from `childs`, in document order.
	pub leaves: Vec<LeafObject>,
}

impl Decodable for RootObject {
	fn decode(value: &Value) -> Result<Self> {
		let object = ObjectDecoder::new(value)?;
		Ok(Self {
			leaves: object.decode_array("childs")?,
		})
	}
}
