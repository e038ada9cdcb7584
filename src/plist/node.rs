/// Element names understood by the decoder, resolved once while the tree is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
	/// `<plist>` document wrapper.
	Plist,
	/// `<dict>` ordered key/value container.
	Dict,
	/// `<key>` dictionary key.
	Key,
	/// `<array>` ordered sequence.
	Array,
	/// `<string>` text scalar.
	String,
	/// `<integer>` decimal integer scalar.
	Integer,
	/// `<real>` floating point scalar.
	Real,
	/// `<date>` ISO-8601 instant.
	Date,
	/// `<data>` base64 payload.
	Data,
	/// `<true/>` boolean.
	True,
	/// `<false/>` boolean.
	False,
	/// Any element name outside the property list vocabulary.
	Other(Box<str>),
}

impl Tag {
	/// Resolve an element name.
	pub fn from_name(name: &str) -> Self {
		match name {
			"plist" => Self::Plist,
			"dict" => Self::Dict,
			"key" => Self::Key,
			"array" => Self::Array,
			"string" => Self::String,
			"integer" => Self::Integer,
			"real" => Self::Real,
			"date" => Self::Date,
			"data" => Self::Data,
			"true" => Self::True,
			"false" => Self::False,
			other => Self::Other(other.into()),
		}
	}

	/// Return the element name as written in the document.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Plist => "plist",
			Self::Dict => "dict",
			Self::Key => "key",
			Self::Array => "array",
			Self::String => "string",
			Self::Integer => "integer",
			Self::Real => "real",
			Self::Date => "date",
			Self::Data => "data",
			Self::True => "true",
			Self::False => "false",
			Self::Other(name) => name,
		}
	}

	/// Whether whitespace-only content of this element is character data
	/// rather than formatting.
	pub fn holds_text(&self) -> bool {
		!matches!(self, Self::Plist | Self::Dict | Self::Array | Self::True | Self::False)
	}
}

/// One node of the attribute-free XML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	/// Element with a resolved tag and ordered children.
	Element(Element),
	/// Run of character data.
	Text(Box<str>),
}

/// Element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	/// Resolved element name.
	pub tag: Tag,
	/// Child nodes in document order.
	pub children: Vec<Node>,
}

/// Parsed XML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
	/// Top-level element.
	pub root: Element,
}

impl Node {
	/// Name used in diagnostics; text nodes report `#text`.
	pub fn name(&self) -> &str {
		match self {
			Self::Element(element) => element.tag.as_str(),
			Self::Text(_) => "#text",
		}
	}

	/// Return whether the node has child nodes.
	pub fn has_children(&self) -> bool {
		match self {
			Self::Element(element) => !element.children.is_empty(),
			Self::Text(_) => false,
		}
	}

	/// Return leaf text content.
	pub fn text(&self) -> &str {
		match self {
			Self::Element(element) => element.text(),
			Self::Text(text) => text,
		}
	}

	/// Shorthand for an element node.
	pub fn element(tag: Tag, children: Vec<Node>) -> Self {
		Self::Element(Element { tag, children })
	}

	/// Shorthand for a text node.
	pub fn text_node(text: impl Into<Box<str>>) -> Self {
		Self::Text(text.into())
	}
}

impl Element {
	/// Text of the first child when it is a text node, otherwise empty.
	pub fn text(&self) -> &str {
		match self.children.first() {
			Some(Node::Text(text)) => text,
			_ => "",
		}
	}
}
