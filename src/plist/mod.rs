mod decode;
mod error;
mod json;
mod node;
mod path;
mod value;
mod xml;

/// Property list decoding entry points and options.
pub use decode::{DecodeOptions, decode_document, decode_node, from_str};
/// Error and result aliases.
pub use error::{ErrorKind, PlistError, Result};
/// JSON rendering of decoded values.
pub use json::to_json;
/// Attribute-free XML node tree consumed by the decoder.
pub use node::{Document, Element, Node, Tag};
/// Key path parser types.
pub use path::{KeyPath, PathStep};
/// Decoded runtime value types.
pub use value::{Dictionary, Integer, Value};
