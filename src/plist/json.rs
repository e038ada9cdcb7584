use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::SecondsFormat;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::plist::{Integer, Value};

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Dictionary(dict) => {
				let mut map = serializer.serialize_map(Some(dict.len()))?;
				for (key, value) in dict {
					map.serialize_entry(key, value)?;
				}
				map.end()
			}
			Self::Array(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Self::String(v) => serializer.serialize_str(v),
			Self::Boolean(v) => serializer.serialize_bool(*v),
			Self::Integer(v) => v.serialize(serializer),
			// JSON has no encoding for non-finite numbers.
			Self::Real(v) if v.is_nan() => serializer.serialize_str("NaN"),
			Self::Real(v) if v.is_infinite() => serializer.serialize_str(if *v > 0.0 { "inf" } else { "-inf" }),
			Self::Real(v) => serializer.serialize_f64(*v),
			Self::Date(v) => serializer.serialize_str(&v.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
			Self::Data(v) => serializer.serialize_str(&STANDARD.encode(v)),
		}
	}
}

impl Serialize for Integer {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::I32(v) => serializer.serialize_i32(*v),
			Self::I64(v) => serializer.serialize_i64(*v),
			Self::U64(v) => serializer.serialize_u64(*v),
		}
	}
}

/// Render a decoded value as a JSON tree; dictionary order is preserved.
pub fn to_json(value: &Value) -> serde_json::Value {
	serde_json::to_value(value).unwrap_or(serde_json::Value::Null)
}
