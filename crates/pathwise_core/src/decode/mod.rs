mod decodable;
mod error;
mod json;
mod object;
mod path;
mod select;
mod sequence;
mod value;

/// Decoding capability trait and document entry point.
pub use decodable::{Decodable, decode_value};
/// Error, reason, and result aliases.
pub use error::{DEFAULT_SEPARATOR, DecodeError, Reason, Result};
/// JSON parser boundary.
pub use json::{parse_slice, parse_str};
/// Keyed container decoder.
pub use object::ObjectDecoder;
/// Path steps and path expression parser.
pub use path::{FieldPath, PathParseError, PathStep};
/// Path-expression selection.
pub use select::select;
/// Indexed container decoder.
pub use sequence::SequenceDecoder;
/// Generic value tree types.
pub use value::{Number, Value};
