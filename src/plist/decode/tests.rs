use chrono::{TimeZone, Utc};

use crate::plist::{DecodeOptions, Dictionary, Document, ErrorKind, Integer, Node, PlistError, Tag, Value, decode_document, decode_node, from_str};

fn decode_body(body: &str) -> crate::plist::Result<Value> {
	from_str(&format!("<plist version=\"1.0\">{body}</plist>"))
}

fn text(tag: Tag, content: &str) -> Node {
	Node::element(tag, vec![Node::text_node(content)])
}

#[test]
fn dictionary_preserves_source_order() {
	let value = decode_body("<dict><key>zeta</key><integer>1</integer><key>alpha</key><string>two</string><key>mid</key><true/></dict>")
		.expect("dict decodes");
	let dict = value.as_dictionary().expect("dictionary value");

	assert_eq!(dict.len(), 3);
	let keys: Vec<&str> = dict.keys().map(String::as_str).collect();
	assert_eq!(keys, ["zeta", "alpha", "mid"]);
	assert_eq!(dict["zeta"], Value::Integer(Integer::I32(1)));
	assert_eq!(dict["alpha"], Value::from("two"));
	assert_eq!(dict["mid"], Value::Boolean(true));
}

#[test]
fn duplicate_key_keeps_first_position_and_last_value() {
	let value = decode_body("<dict><key>a</key><string>1</string><key>b</key><string>2</string><key>a</key><string>3</string></dict>")
		.expect("dict decodes");
	let dict = value.as_dictionary().expect("dictionary value");

	assert_eq!(dict.len(), 2);
	assert_eq!(dict.get_index(0), Some((&"a".to_owned(), &Value::from("3"))));
	assert_eq!(dict.get_index(1), Some((&"b".to_owned(), &Value::from("2"))));
}

#[test]
fn array_length_and_order_follow_children() {
	let empty = decode_body("<array/>").expect("empty array decodes");
	assert_eq!(empty, Value::Array(Vec::new()));

	let empty_pair = decode_body("<array></array>").expect("open/close empty array decodes");
	assert_eq!(empty_pair, Value::Array(Vec::new()));

	let single = decode_body("<array><string>only</string></array>").expect("single array decodes");
	assert_eq!(single, Value::Array(vec![Value::from("only")]));

	let mixed = decode_body("<array><integer>1</integer><false/><array/><dict/><real>1.5</real></array>").expect("mixed array decodes");
	let items = mixed.as_array().expect("array value");
	assert_eq!(items.len(), 5);
	assert_eq!(items[0], Value::Integer(Integer::I32(1)));
	assert_eq!(items[1], Value::Boolean(false));
	assert_eq!(items[2], Value::Array(Vec::new()));
	assert!(items[3].as_dictionary().is_some_and(|dict| dict.is_empty()));
	assert_eq!(items[4], Value::Real(1.5));
}

#[test]
fn integer_width_inference_picks_narrowest() {
	let cases = [
		("2147483647", Integer::I32(i32::MAX)),
		("-2147483648", Integer::I32(i32::MIN)),
		("2147483648", Integer::I64(2_147_483_648)),
		("-9223372036854775808", Integer::I64(i64::MIN)),
		("9223372036854775808", Integer::U64(9_223_372_036_854_775_808)),
		("18446744073709551615", Integer::U64(u64::MAX)),
		(" 42\n", Integer::I32(42)),
	];
	for (input, expected) in cases {
		let value = decode_node(&text(Tag::Integer, input), &DecodeOptions::default()).expect("integer decodes");
		assert_eq!(value, Value::Integer(expected), "input {input:?}");
	}
}

#[test]
fn integer_outside_every_width_is_format_error() {
	for input in ["not-a-number", "18446744073709551616", "1.5", ""] {
		let err = decode_node(&text(Tag::Integer, input), &DecodeOptions::default()).expect_err("integer should fail");
		assert!(matches!(err, PlistError::InvalidInteger { .. }), "input {input:?}");
		assert_eq!(err.kind(), ErrorKind::Format);
	}
}

#[test]
fn empty_integer_element_is_format_error() {
	let err = decode_body("<integer/>").expect_err("empty integer should fail");
	assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn booleans_ignore_content() {
	assert_eq!(decode_body("<true/>").expect("true decodes"), Value::Boolean(true));
	assert_eq!(decode_body("<false/>").expect("false decodes"), Value::Boolean(false));
	assert_eq!(decode_body("<true>no</true>").expect("true with text decodes"), Value::Boolean(true));
	assert_eq!(decode_body("<false>yes</false>").expect("false with text decodes"), Value::Boolean(false));
}

#[test]
fn data_is_base64_decoded() {
	assert_eq!(decode_body("<data>aGVsbG8=</data>").expect("data decodes"), Value::Data(b"hello".to_vec()));

	let wrapped = decode_body("<data>\n\taGVs\n\tbG8=\n</data>").expect("wrapped data decodes");
	assert_eq!(wrapped.as_data(), Some(b"hello".as_slice()));

	assert_eq!(decode_body("<data/>").expect("empty data decodes"), Value::Data(Vec::new()));
}

#[test]
fn invalid_base64_is_format_error() {
	let err = decode_body("<data>!!not base64!!</data>").expect_err("bad base64 should fail");
	assert!(matches!(err, PlistError::InvalidData { .. }));
	assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn real_parses_and_rejects() {
	assert_eq!(decode_body("<real>-0.25</real>").expect("real decodes"), Value::Real(-0.25));
	assert_eq!(decode_body("<real>3</real>").expect("integral real decodes"), Value::Real(3.0));

	let err = decode_body("<real>pi</real>").expect_err("bad real should fail");
	assert!(matches!(err, PlistError::InvalidReal { .. }));
}

#[test]
fn date_accepts_rfc3339_and_zoneless() {
	let expected = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).single().expect("valid date");

	assert_eq!(decode_body("<date>2024-05-01T12:30:00Z</date>").expect("utc date decodes"), Value::Date(expected));
	assert_eq!(
		decode_body("<date>2024-05-01T14:30:00+02:00</date>").expect("offset date decodes"),
		Value::Date(expected)
	);
	assert_eq!(decode_body("<date>2024-05-01T12:30:00</date>").expect("zoneless date decodes"), Value::Date(expected));

	let err = decode_body("<date>yesterday</date>").expect_err("bad date should fail");
	assert!(matches!(err, PlistError::InvalidDate { .. }));
}

#[test]
fn string_wrapper_passes_text_through() {
	assert_eq!(decode_body("<string>hello world</string>").expect("string decodes"), Value::from("hello world"));
	assert_eq!(decode_body("<string/>").expect("empty string decodes"), Value::from(""));
	assert_eq!(decode_body("<string>12</string>").expect("numeric string decodes"), Value::from("12"));
}

#[test]
fn dict_first_child_must_be_key() {
	let err = decode_body("<dict><string>orphan</string><string>value</string></dict>").expect_err("non-key should fail");
	assert!(matches!(err, PlistError::NonKeyInDictionary { ref found, position: 0 } if found == "string"));
	assert_eq!(err.kind(), ErrorKind::Structural);
}

#[test]
fn dict_key_without_value_is_structural_error() {
	let err = decode_body("<dict><key>a</key><true/><key>dangling</key></dict>").expect_err("missing value should fail");
	assert!(matches!(err, PlistError::MissingDictionaryValue { ref key } if key == "dangling"));
	assert_eq!(err.kind(), ErrorKind::Structural);
}

#[test]
fn dict_keys_are_always_strings() {
	let value = decode_body("<dict><key>1</key><true/><key>true</key><false/><key/><string>blank</string></dict>").expect("dict decodes");
	assert_eq!(value.get("1"), Some(&Value::Boolean(true)));
	assert_eq!(value.get("true"), Some(&Value::Boolean(false)));
	assert_eq!(value.get(""), Some(&Value::from("blank")));
}

#[test]
fn container_shaped_key_is_structural_error() {
	let err = decode_body("<dict><key><dict/></key><true/></dict>").expect_err("container key should fail");
	assert!(matches!(err, PlistError::NonTextKey { .. }));
	assert_eq!(err.kind(), ErrorKind::Structural);
}

#[test]
fn unknown_tag_is_unsupported() {
	let err = decode_body("<foo>bar</foo>").expect_err("unknown tag should fail");
	assert!(matches!(err, PlistError::UnsupportedType { ref tag } if tag == "foo"));
	assert_eq!(err.kind(), ErrorKind::UnsupportedType);

	let nested = decode_body("<array><string>ok</string><foo>bar</foo></array>").expect_err("nested unknown tag should fail");
	assert_eq!(nested.kind(), ErrorKind::UnsupportedType);
}

#[test]
fn scalar_tag_around_container_is_format_error() {
	let err = decode_body("<integer><array><string>1</string></array></integer>").expect_err("container in integer should fail");
	assert!(matches!(err, PlistError::ExpectedText { tag: "integer", found: "array" }));
}

#[test]
fn root_must_be_plist() {
	let doc = Document::parse_str("<dict/>").expect("document parses");
	let err = decode_document(&doc, &DecodeOptions::default()).expect_err("non-plist root should fail");
	assert!(matches!(err, PlistError::MissingPlistRoot { ref found } if found == "dict"));

	let empty = from_str("<plist version=\"1.0\">\n</plist>").expect_err("empty plist should fail");
	assert!(matches!(empty, PlistError::EmptyPlist));
}

#[test]
fn depth_limit_is_enforced() {
	let opt = DecodeOptions { max_depth: 2 };
	let shallow = Document::parse_str("<plist><array><array/></array></plist>").expect("document parses");
	decode_document(&shallow, &opt).expect("within limit");

	let deep = Document::parse_str("<plist><array><array><array><true/></array></array></array></plist>").expect("document parses");
	let err = decode_document(&deep, &opt).expect_err("depth limit should fail");
	assert!(matches!(err, PlistError::DepthExceeded { max_depth: 2 }));
}

#[test]
fn decoding_twice_is_structurally_equal() {
	let doc = Document::parse_str(
		"<plist><array><dict><key>n</key><integer>18446744073709551615</integer><key>d</key><data>AAEC</data></dict></array></plist>",
	)
	.expect("document parses");
	let first = decode_document(&doc, &DecodeOptions::default()).expect("first decode");
	let second = decode_document(&doc, &DecodeOptions::default()).expect("second decode");
	assert_eq!(first, second);
}

#[test]
fn hand_built_tree_decodes() {
	let node = Node::element(
		Tag::Dict,
		vec![
			text(Tag::Key, "name"),
			text(Tag::String, "widget"),
			text(Tag::Key, "tags"),
			Node::element(Tag::Array, vec![text(Tag::String, "a"), Node::element(Tag::True, Vec::new())]),
		],
	);
	let value = decode_node(&node, &DecodeOptions::default()).expect("tree decodes");

	assert_eq!(value.get("name").and_then(Value::as_str), Some("widget"));
	assert_eq!(value.get("tags").and_then(|tags| tags.index(1)), Some(&Value::Boolean(true)));
}

#[test]
fn multi_line_empty_containers_are_empty() {
	assert_eq!(decode_body("<array>\n</array>").expect("array decodes"), Value::Array(Vec::new()));
	assert_eq!(decode_body("<dict>\n\t</dict>").expect("dict decodes"), Value::Dictionary(Dictionary::new()));

	let value = decode_body("<dict>\n\t<key>Servers</key>\n\t<array>\n\t</array>\n</dict>").expect("dict decodes");
	assert_eq!(value.get("Servers"), Some(&Value::Array(Vec::new())));
}

#[test]
fn whitespace_only_string_is_kept() {
	assert_eq!(decode_body("<string>  </string>").expect("string decodes"), Value::from("  "));
}

#[test]
fn key_outside_dictionary_is_unsupported() {
	for body in ["<key/>", "<key>x</key>", "<array><key>x</key></array>"] {
		let err = decode_body(body).expect_err("stray key should fail");
		assert_eq!(err.kind(), ErrorKind::UnsupportedType, "body: {body}");
		assert_eq!(err.to_string(), "unsupported element type: key");
	}
}
