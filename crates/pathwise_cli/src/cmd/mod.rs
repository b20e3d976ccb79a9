/// Typed document decode command.
pub mod decode;
/// Command error type.
pub mod error;
/// Path-expression selection command.
pub mod select;
/// Shared document loading and output helpers.
pub mod util;

pub use error::{CliError, Result};
