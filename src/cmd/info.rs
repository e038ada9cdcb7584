use std::collections::BTreeMap;
use std::path::PathBuf;

use plistdoc::plist::{DecodeOptions, Document, Result, Value, decode_document};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
}

/// Aggregate shape statistics for a decoded value tree.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
	/// Number of values in the tree, root included.
	pub value_count: usize,
	/// Deepest container nesting; a scalar root has depth 0.
	pub max_depth: usize,
	/// Value counts keyed by kind name.
	pub kinds: BTreeMap<&'static str, usize>,
	/// Total payload bytes held by `data` values.
	pub data_bytes: usize,
}

impl Summary {
	/// Walk `value` and collect statistics.
	pub fn collect(value: &Value) -> Self {
		let mut summary = Self::default();
		summary.visit(value, 0);
		summary
	}

	fn visit(&mut self, value: &Value, depth: usize) {
		self.value_count += 1;
		*self.kinds.entry(value.kind()).or_default() += 1;

		match value {
			Value::Dictionary(dict) => {
				self.max_depth = self.max_depth.max(depth + 1);
				for item in dict.values() {
					self.visit(item, depth + 1);
				}
			}
			Value::Array(items) => {
				self.max_depth = self.max_depth.max(depth + 1);
				for item in items {
					self.visit(item, depth + 1);
				}
			}
			Value::Data(bytes) => self.data_bytes += bytes.len(),
			_ => {}
		}
	}
}

/// Print root kind and value statistics for a property list file.
pub fn run(args: Args) -> Result<()> {
	let Args { path } = args;

	let document = Document::open(&path)?;
	let value = decode_document(&document, &DecodeOptions::default())?;
	let summary = Summary::collect(&value);

	println!("path: {}", path.display());
	println!("root_kind: {}", value.kind());
	println!("root_entries: {}", root_entries(&value));
	println!("value_count: {}", summary.value_count);
	println!("max_depth: {}", summary.max_depth);
	println!("data_bytes: {}", summary.data_bytes);
	println!("kinds:");
	for (kind, count) in &summary.kinds {
		println!("  {kind}: {count}");
	}

	Ok(())
}

fn root_entries(value: &Value) -> usize {
	match value {
		Value::Dictionary(dict) => dict.len(),
		Value::Array(items) => items.len(),
		_ => 1,
	}
}
