use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, PlistError>;

/// Coarse failure classes used by callers that only care about the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// Tree shape violates the property list layout.
	Structural,
	/// An element tag is not a known property list type.
	UnsupportedType,
	/// Leaf text could not be parsed as the type its tag demands.
	Format,
	/// Source text is not well-formed XML.
	Xml,
	/// Filesystem or stream IO failure.
	Io,
	/// Key path expression is invalid.
	Path,
}

/// Errors produced while building, decoding, and querying property lists.
#[derive(Debug, Error)]
pub enum PlistError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Malformed XML input.
	#[error("xml error at byte {position}: {message}")]
	Xml {
		/// Reader byte offset where the failure was reported.
		position: u64,
		/// Parser diagnostic.
		message: String,
	},
	/// Document root element is not `plist`.
	#[error("document root is <{found}>, expected <plist>")]
	MissingPlistRoot {
		/// Tag name of the actual root element.
		found: String,
	},
	/// `plist` root element holds no value element.
	#[error("plist root has no value element")]
	EmptyPlist,
	/// A dictionary child in key position was not a `key` element.
	#[error("non-key element found in dictionary: <{found}> at child {position}")]
	NonKeyInDictionary {
		/// Tag name of the offending child.
		found: String,
		/// Zero-based child position inside the dictionary.
		position: usize,
	},
	/// A dictionary `key` element had no value sibling.
	#[error("dictionary property value missing for key {key:?}")]
	MissingDictionaryValue {
		/// Key whose value is missing.
		key: String,
	},
	/// A `key` element held something other than text.
	#[error("dictionary key must be text, found <{found}>")]
	NonTextKey {
		/// Tag name of the element found inside the key.
		found: String,
	},
	/// A scalar wrapper held more than one child node.
	#[error("<{tag}> expects a single child, found {count}")]
	UnexpectedChildren {
		/// Wrapper tag name.
		tag: &'static str,
		/// Number of children present.
		count: usize,
	},
	/// Decoder recursion depth exceeded configured limit.
	#[error("decode depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Element tag is not a property list type.
	#[error("unsupported element type: {tag}")]
	UnsupportedType {
		/// Offending tag name.
		tag: String,
	},
	/// Scalar tag wrapped a container instead of text.
	#[error("<{tag}> expects text content, found {found}")]
	ExpectedText {
		/// Scalar tag being decoded.
		tag: &'static str,
		/// Kind of value found instead.
		found: &'static str,
	},
	/// `integer` text fits none of the supported widths.
	#[error("invalid integer: {text:?}")]
	InvalidInteger {
		/// Raw element text.
		text: String,
	},
	/// `real` text is not a floating point number.
	#[error("invalid real: {text:?}")]
	InvalidReal {
		/// Raw element text.
		text: String,
	},
	/// `date` text is not an ISO-8601 instant.
	#[error("invalid date: {text:?}")]
	InvalidDate {
		/// Raw element text.
		text: String,
	},
	/// `data` text is not valid base64.
	#[error("invalid base64 data: {reason}")]
	InvalidData {
		/// Decoder diagnostic.
		reason: String,
	},
	/// Key path syntax is invalid.
	#[error("invalid key path: {path}")]
	InvalidKeyPath {
		/// Original user-provided path string.
		path: String,
	},
	/// Key path did not resolve against the decoded value.
	#[error("key path not found: {path}")]
	KeyPathNotFound {
		/// Original user-provided path string.
		path: String,
	},
}

impl PlistError {
	/// Return the coarse category of this error.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Io(_) => ErrorKind::Io,
			Self::Xml { .. } => ErrorKind::Xml,
			Self::MissingPlistRoot { .. }
			| Self::EmptyPlist
			| Self::NonKeyInDictionary { .. }
			| Self::MissingDictionaryValue { .. }
			| Self::NonTextKey { .. }
			| Self::UnexpectedChildren { .. }
			| Self::DepthExceeded { .. } => ErrorKind::Structural,
			Self::UnsupportedType { .. } => ErrorKind::UnsupportedType,
			Self::ExpectedText { .. } | Self::InvalidInteger { .. } | Self::InvalidReal { .. } | Self::InvalidDate { .. } | Self::InvalidData { .. } => {
				ErrorKind::Format
			}
			Self::InvalidKeyPath { .. } | Self::KeyPathNotFound { .. } => ErrorKind::Path,
		}
	}
}
