use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// Ordered key/value mapping decoded from `<dict>`.
pub type Dictionary = IndexMap<String, Value>;

/// Decoded property list value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// `<dict>` entries in document order.
	Dictionary(Dictionary),
	/// `<array>` items.
	Array(Vec<Value>),
	/// `<string>` text, or the text of a bare text node.
	String(String),
	/// `<true/>` or `<false/>`.
	Boolean(bool),
	/// `<integer>` in its narrowest width.
	Integer(Integer),
	/// `<real>`.
	Real(f64),
	/// `<date>` normalised to UTC.
	Date(DateTime<Utc>),
	/// Decoded `<data>` payload.
	Data(Vec<u8>),
}

/// Integer payload tagged with the narrowest width that held it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Integer {
	/// Fits in `i32`.
	I32(i32),
	/// Needs `i64`.
	I64(i64),
	/// Only fits in `u64`.
	U64(u64),
}

impl Integer {
	/// Return the value as `i64` when representable.
	pub fn as_i64(self) -> Option<i64> {
		match self {
			Self::I32(v) => Some(i64::from(v)),
			Self::I64(v) => Some(v),
			Self::U64(v) => i64::try_from(v).ok(),
		}
	}

	/// Return the value as `u64` when representable.
	pub fn as_u64(self) -> Option<u64> {
		match self {
			Self::I32(v) => u64::try_from(v).ok(),
			Self::I64(v) => u64::try_from(v).ok(),
			Self::U64(v) => Some(v),
		}
	}

	/// Storage width chosen during decoding.
	pub fn width_bits(self) -> u32 {
		match self {
			Self::I32(_) => 32,
			Self::I64(_) | Self::U64(_) => 64,
		}
	}
}

impl std::fmt::Display for Integer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::I32(v) => write!(f, "{v}"),
			Self::I64(v) => write!(f, "{v}"),
			Self::U64(v) => write!(f, "{v}"),
		}
	}
}

impl Value {
	/// Short name of the variant, used in diagnostics and summaries.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Dictionary(_) => "dict",
			Self::Array(_) => "array",
			Self::String(_) => "string",
			Self::Boolean(_) => "boolean",
			Self::Integer(_) => "integer",
			Self::Real(_) => "real",
			Self::Date(_) => "date",
			Self::Data(_) => "data",
		}
	}

	/// String payload.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(v) => Some(v),
			_ => None,
		}
	}

	/// Boolean payload.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Boolean(v) => Some(*v),
			_ => None,
		}
	}

	/// Integer payload with its width.
	pub fn as_integer(&self) -> Option<Integer> {
		match self {
			Self::Integer(v) => Some(*v),
			_ => None,
		}
	}

	/// Integer payload as `i64`, if it fits.
	pub fn as_i64(&self) -> Option<i64> {
		self.as_integer().and_then(Integer::as_i64)
	}

	/// Integer payload as `u64`, if it fits.
	pub fn as_u64(&self) -> Option<u64> {
		self.as_integer().and_then(Integer::as_u64)
	}

	/// Real payload. Integers are not widened.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Real(v) => Some(*v),
			_ => None,
		}
	}

	/// Date payload.
	pub fn as_date(&self) -> Option<DateTime<Utc>> {
		match self {
			Self::Date(v) => Some(*v),
			_ => None,
		}
	}

	/// Data payload.
	pub fn as_data(&self) -> Option<&[u8]> {
		match self {
			Self::Data(v) => Some(v),
			_ => None,
		}
	}

	/// Array items.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(v) => Some(v),
			_ => None,
		}
	}

	/// Dictionary entries.
	pub fn as_dictionary(&self) -> Option<&Dictionary> {
		match self {
			Self::Dictionary(v) => Some(v),
			_ => None,
		}
	}

	/// Look up a dictionary entry by key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.as_dictionary()?.get(key)
	}

	/// Look up an array element by position.
	pub fn index(&self, idx: usize) -> Option<&Value> {
		self.as_array()?.get(idx)
	}
}

impl From<Integer> for Value {
	fn from(value: Integer) -> Self {
		Self::Integer(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Boolean(value)
	}
}
