mod leaf;
mod named;
mod root;

/// Leaf record with a tagged integer list, optional string, and double.
pub use leaf::{BunchOfInts, IntsTag, LeafObject};
/// Tagged wrapper over any decodable value.
pub use named::NamedValue;
/// Root record holding leaves in document order.
pub use root::RootObject;
