use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, NaiveDateTime, Utc};
use log::debug;

use crate::plist::node::{Document, Element, Node, Tag};
use crate::plist::value::{Dictionary, Integer, Value};
use crate::plist::{PlistError, Result};

const NAIVE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Runtime limits for property list decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum nesting of non-empty elements below the `plist` root.
	pub max_depth: u32,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self { max_depth: 512 }
	}
}

/// Parse XML text and decode the value held by its `plist` root.
pub fn from_str(text: &str) -> Result<Value> {
	let document = Document::parse_str(text)?;
	decode_document(&document, &DecodeOptions::default())
}

/// Decode the first child of the document's `plist` root element.
///
/// The wrapper itself never becomes a value; a root with another name or
/// without children is a structural error.
pub fn decode_document(document: &Document, opt: &DecodeOptions) -> Result<Value> {
	let root = &document.root;
	if root.tag != Tag::Plist {
		return Err(PlistError::MissingPlistRoot {
			found: root.tag.as_str().to_owned(),
		});
	}

	let first = root
		.children
		.iter()
		.find(|child| !matches!(child, Node::Text(text) if text.trim().is_empty()))
		.ok_or(PlistError::EmptyPlist)?;
	let value = decode_node(first, opt)?;
	debug!("decoded plist root value of kind {}", value.kind());
	Ok(value)
}

/// Decode one node and everything below it.
pub fn decode_node(node: &Node, opt: &DecodeOptions) -> Result<Value> {
	decode_impl(node, opt, 0)
}

fn decode_impl(node: &Node, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	let element = match node {
		Node::Text(_) => return Ok(Value::String(node.text().to_owned())),
		Node::Element(element) => element,
	};

	if !node.has_children() {
		return decode_leaf(element);
	}

	let depth = depth + 1;
	if depth > opt.max_depth {
		return Err(PlistError::DepthExceeded { max_depth: opt.max_depth });
	}

	match &element.tag {
		Tag::Dict => decode_dict(element, opt, depth).map(Value::Dictionary),
		Tag::Array => element
			.children
			.iter()
			.map(|child| decode_impl(child, opt, depth))
			.collect::<Result<Vec<_>>>()
			.map(Value::Array),
		Tag::String => decode_impl(single_child(element, "string")?, opt, depth),
		Tag::Integer => parse_integer(&scalar_text(element, "integer", opt, depth)?).map(Value::Integer),
		Tag::Real => parse_real(&scalar_text(element, "real", opt, depth)?).map(Value::Real),
		Tag::Date => parse_date(&scalar_text(element, "date", opt, depth)?).map(Value::Date),
		Tag::Data => parse_data(&scalar_text(element, "data", opt, depth)?).map(Value::Data),
		// The tag alone carries the value; stray content is ignored.
		Tag::True => Ok(Value::Boolean(true)),
		Tag::False => Ok(Value::Boolean(false)),
		Tag::Key | Tag::Plist | Tag::Other(_) => Err(PlistError::UnsupportedType {
			tag: element.tag.as_str().to_owned(),
		}),
	}
}

fn decode_leaf(element: &Element) -> Result<Value> {
	match &element.tag {
		Tag::True => Ok(Value::Boolean(true)),
		Tag::False => Ok(Value::Boolean(false)),
		Tag::Dict => Ok(Value::Dictionary(Dictionary::new())),
		Tag::Array => Ok(Value::Array(Vec::new())),
		Tag::String => Ok(Value::String(String::new())),
		Tag::Integer => parse_integer("").map(Value::Integer),
		Tag::Real => parse_real("").map(Value::Real),
		Tag::Date => parse_date("").map(Value::Date),
		Tag::Data => parse_data("").map(Value::Data),
		// Keys are only meaningful inside a dictionary, see `decode_key`.
		Tag::Key | Tag::Plist | Tag::Other(_) => Err(PlistError::UnsupportedType {
			tag: element.tag.as_str().to_owned(),
		}),
	}
}

fn decode_dict(element: &Element, opt: &DecodeOptions, depth: u32) -> Result<Dictionary> {
	let children = &element.children;
	let mut out = Dictionary::with_capacity(children.len() / 2);

	let mut idx = 0_usize;
	while idx < children.len() {
		let key = match &children[idx] {
			Node::Element(item) if item.tag == Tag::Key => decode_key(item)?,
			other => {
				return Err(PlistError::NonKeyInDictionary {
					found: other.name().to_owned(),
					position: idx,
				});
			}
		};

		let value_node = children.get(idx + 1).ok_or_else(|| PlistError::MissingDictionaryValue { key: key.clone() })?;
		let value = decode_impl(value_node, opt, depth)?;

		if out.contains_key(&key) {
			debug!("duplicate dictionary key {key:?}, keeping last value");
		}
		out.insert(key, value);
		idx += 2;
	}

	Ok(out)
}

fn decode_key(element: &Element) -> Result<String> {
	match element.children.as_slice() {
		[] => Ok(String::new()),
		[Node::Text(text)] => Ok(text.to_string()),
		[Node::Element(inner)] => Err(PlistError::NonTextKey {
			found: inner.tag.as_str().to_owned(),
		}),
		children => Err(PlistError::UnexpectedChildren {
			tag: "key",
			count: children.len(),
		}),
	}
}

fn single_child<'a>(element: &'a Element, tag: &'static str) -> Result<&'a Node> {
	match element.children.as_slice() {
		[child] => Ok(child),
		children => Err(PlistError::UnexpectedChildren { tag, count: children.len() }),
	}
}

fn scalar_text(element: &Element, tag: &'static str, opt: &DecodeOptions, depth: u32) -> Result<String> {
	match decode_impl(single_child(element, tag)?, opt, depth)? {
		Value::String(text) => Ok(text),
		other => Err(PlistError::ExpectedText { tag, found: other.kind() }),
	}
}

/// Pick the narrowest of `i32`, `i64`, `u64` that parses the text.
fn parse_integer(raw: &str) -> Result<Integer> {
	let text = raw.trim();
	text.parse::<i32>()
		.map(Integer::I32)
		.or_else(|_| text.parse::<i64>().map(Integer::I64))
		.or_else(|_| text.parse::<u64>().map(Integer::U64))
		.map_err(|_| PlistError::InvalidInteger { text: raw.to_owned() })
}

fn parse_real(raw: &str) -> Result<f64> {
	raw.trim().parse::<f64>().map_err(|_| PlistError::InvalidReal { text: raw.to_owned() })
}

/// RFC 3339 first; a zone-less timestamp is read as UTC.
fn parse_date(raw: &str) -> Result<DateTime<Utc>> {
	let text = raw.trim();
	DateTime::parse_from_rfc3339(text)
		.map(|date| date.with_timezone(&Utc))
		.or_else(|_| NaiveDateTime::parse_from_str(text, NAIVE_DATE_FORMAT).map(|naive| naive.and_utc()))
		.map_err(|_| PlistError::InvalidDate { text: raw.to_owned() })
}

fn parse_data(raw: &str) -> Result<Vec<u8>> {
	let compact: String = raw.chars().filter(|ch| !ch.is_ascii_whitespace()).collect();
	STANDARD
		.decode(compact.as_bytes())
		.map_err(|err| PlistError::InvalidData { reason: err.to_string() })
}

#[cfg(test)]
mod tests;
