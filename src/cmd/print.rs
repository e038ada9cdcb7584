use std::fmt::Write;

use chrono::SecondsFormat;
use plistdoc::plist::{Integer, Value};

/// Output truncation and formatting limits for decoded values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of entries printed for a single dictionary.
	pub max_dict_entries: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for arrays.
	pub max_array_items: usize,
	/// Maximum number of bytes shown as hex for data values.
	pub max_data_bytes: usize,
	/// Maximum recursive print depth for nested containers.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_dict_entries: 80,
			max_string_len: 200,
			max_array_items: 16,
			max_data_bytes: 16,
			max_print_depth: 6,
		}
	}
}

/// Print one decoded value tree to stdout.
pub fn print_value(value: &Value, indent: usize, options: PrintOptions) {
	let mut out = String::new();
	render_value(&mut out, value, indent, 0, options);
	print!("{out}");
}

/// Render one decoded value tree as indented text.
pub fn render_value(out: &mut String, value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Array(items) => {
			if depth >= options.max_print_depth {
				let _ = writeln!(out, "{pad}[... {} items]", items.len());
				return;
			}
			let _ = writeln!(out, "{pad}[");
			for item in items.iter().take(options.max_array_items) {
				render_value(out, item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_array_items {
				let _ = writeln!(out, "{pad}  ... {} more", items.len() - options.max_array_items);
			}
			let _ = writeln!(out, "{pad}]");
		}
		Value::Dictionary(dict) => {
			if depth >= options.max_print_depth {
				let _ = writeln!(out, "{pad}{{ ... {} entries }}", dict.len());
				return;
			}
			let _ = writeln!(out, "{pad}{{");
			for (key, item) in dict.iter().take(options.max_dict_entries) {
				let _ = write!(out, "{pad}  {} = ", truncate(key, options.max_string_len));
				if matches!(item, Value::Dictionary(_) | Value::Array(_)) {
					let _ = writeln!(out);
					render_value(out, item, indent + 4, depth + 1, options);
				} else {
					render_value(out, item, 0, depth + 1, options);
				}
			}
			if dict.len() > options.max_dict_entries {
				let _ = writeln!(out, "{pad}  ... {} more entries", dict.len() - options.max_dict_entries);
			}
			let _ = writeln!(out, "{pad}}}");
		}
		scalar => {
			let _ = writeln!(out, "{pad}{}", render_scalar(scalar, options));
		}
	}
}

/// Render a non-container value on one line.
pub fn render_scalar(value: &Value, options: PrintOptions) -> String {
	match value {
		Value::String(v) => format!("\"{}\"", truncate(v, options.max_string_len)),
		Value::Boolean(v) => v.to_string(),
		Value::Integer(v) => format!("{v} ({})", integer_label(*v)),
		Value::Real(v) => format!("{v:?}"),
		Value::Date(v) => v.to_rfc3339_opts(SecondsFormat::AutoSi, true),
		Value::Data(v) => render_data(v, options.max_data_bytes),
		Value::Array(items) => format!("array[{}]", items.len()),
		Value::Dictionary(dict) => format!("dict[{}]", dict.len()),
	}
}

fn integer_label(value: Integer) -> &'static str {
	match value {
		Integer::I32(_) => "i32",
		Integer::I64(_) => "i64",
		Integer::U64(_) => "u64",
	}
}

fn render_data(bytes: &[u8], max_bytes: usize) -> String {
	let mut hex = String::with_capacity(bytes.len().min(max_bytes) * 2);
	for byte in bytes.iter().take(max_bytes) {
		let _ = write!(hex, "{byte:02x}");
	}
	if bytes.len() > max_bytes {
		hex.push_str("...");
	}
	format!("data[{}] {hex}", bytes.len())
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
