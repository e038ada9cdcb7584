use std::path::Path;

use log::{debug, trace};
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::Event;

use crate::plist::node::{Document, Element, Node, Tag};
use crate::plist::{PlistError, Result};

const BOM: char = '\u{feff}';

impl Document {
	/// Read and parse an XML document from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let bytes = std::fs::read(path)?;
		debug!("read {} bytes from {}", bytes.len(), path.display());
		Self::parse_bytes(&bytes)
	}

	/// Parse a UTF-8 encoded XML document.
	pub fn parse_bytes(bytes: &[u8]) -> Result<Self> {
		let text = std::str::from_utf8(bytes).map_err(|err| PlistError::Xml {
			position: err.valid_up_to() as u64,
			message: format!("invalid utf-8: {err}"),
		})?;
		Self::parse_str(text)
	}

	/// Parse XML text into an attribute-free node tree.
	pub fn parse_str(text: &str) -> Result<Self> {
		let text = text.strip_prefix(BOM).unwrap_or(text);
		let mut reader = Reader::from_str(text);
		let mut builder = TreeBuilder::default();

		loop {
			let event = reader.read_event().map_err(|err| xml_error(&reader, err))?;
			match event {
				Event::Start(start) => {
					let qname = start.name();
					let name = utf8(&reader, qname.as_ref())?;
					builder.open(Tag::from_name(name)).map_err(|message| xml_error(&reader, message))?;
				}
				Event::Empty(start) => {
					let qname = start.name();
					let name = utf8(&reader, qname.as_ref())?;
					builder.open(Tag::from_name(name)).map_err(|message| xml_error(&reader, message))?;
					builder.close().map_err(|message| xml_error(&reader, message))?;
				}
				Event::End(_) => builder.close().map_err(|message| xml_error(&reader, message))?,
				Event::Text(content) => {
					let content = utf8(&reader, &content)?;
					builder.push_text(content).map_err(|message| xml_error(&reader, message))?;
				}
				Event::CData(content) => {
					let content = utf8(&reader, &content)?;
					builder.push_text(content).map_err(|message| xml_error(&reader, message))?;
				}
				Event::GeneralRef(reference) => {
					let name = utf8(&reader, &reference)?;
					let resolved = resolve_reference(name).map_err(|message| xml_error(&reader, message))?;
					builder.push_text(&resolved).map_err(|message| xml_error(&reader, message))?;
				}
				Event::Decl(_) | Event::PI(_) | Event::DocType(_) | Event::Comment(_) => {
					trace!("skipping non-element event at byte {}", reader.buffer_position());
				}
				Event::Eof => break,
			}
		}

		let root = builder.finish().map_err(|message| xml_error(&reader, message))?;
		debug!("parsed xml document with root <{}>", root.tag.as_str());
		Ok(Self { root })
	}
}

#[derive(Default)]
struct TreeBuilder {
	stack: Vec<Frame>,
	root: Option<Element>,
}

struct Frame {
	tag: Tag,
	children: Vec<Node>,
	text: String,
}

impl Frame {
	fn flush_text(&mut self, keep_whitespace: bool) {
		if self.text.is_empty() {
			return;
		}
		let text = std::mem::take(&mut self.text);
		if keep_whitespace || !text.trim().is_empty() {
			self.children.push(Node::Text(text.into_boxed_str()));
		}
	}
}

impl TreeBuilder {
	fn open(&mut self, tag: Tag) -> std::result::Result<(), String> {
		match self.stack.last_mut() {
			Some(parent) => parent.flush_text(false),
			None if self.root.is_some() => return Err(format!("second root element <{}>", tag.as_str())),
			None => {}
		}
		self.stack.push(Frame {
			tag,
			children: Vec::new(),
			text: String::new(),
		});
		Ok(())
	}

	fn close(&mut self) -> std::result::Result<(), String> {
		let mut frame = self.stack.pop().ok_or_else(|| "closing tag without open element".to_owned())?;
		let keep_whitespace = frame.children.is_empty() && frame.tag.holds_text();
		frame.flush_text(keep_whitespace);

		let element = Element {
			tag: frame.tag,
			children: frame.children,
		};
		match self.stack.last_mut() {
			Some(parent) => parent.children.push(Node::Element(element)),
			None => self.root = Some(element),
		}
		Ok(())
	}

	fn push_text(&mut self, content: &str) -> std::result::Result<(), String> {
		match self.stack.last_mut() {
			Some(frame) => {
				frame.text.push_str(content);
				Ok(())
			}
			None if content.trim().is_empty() => Ok(()),
			None => Err("text outside of root element".to_owned()),
		}
	}

	fn finish(self) -> std::result::Result<Element, String> {
		if let Some(open) = self.stack.last() {
			return Err(format!("unclosed element <{}>", open.tag.as_str()));
		}
		self.root.ok_or_else(|| "document has no root element".to_owned())
	}
}

fn resolve_reference(name: &str) -> std::result::Result<String, String> {
	if let Some(code) = name.strip_prefix('#') {
		let parsed = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
			Some(hex) => u32::from_str_radix(hex, 16),
			None => code.parse::<u32>(),
		};
		return parsed
			.ok()
			.and_then(char::from_u32)
			.map(String::from)
			.ok_or_else(|| format!("invalid character reference &{name};"));
	}

	resolve_predefined_entity(name)
		.map(str::to_owned)
		.ok_or_else(|| format!("unknown entity &{name};"))
}

fn utf8<'a>(reader: &Reader<&[u8]>, bytes: &'a [u8]) -> Result<&'a str> {
	std::str::from_utf8(bytes).map_err(|err| xml_error(reader, format!("invalid utf-8: {err}")))
}

fn xml_error(reader: &Reader<&[u8]>, message: impl std::fmt::Display) -> PlistError {
	PlistError::Xml {
		position: reader.buffer_position() as u64,
		message: message.to_string(),
	}
}
