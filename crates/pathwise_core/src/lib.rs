//! Path-annotated decoding of JSON-shaped value trees into typed records.

/// Generic value tree, container decoders, and the path-bearing error model.
pub mod decode;
/// Example records assembled from decoded fields.
pub mod model;
