use std::path::PathBuf;

use plistdoc::plist::{DecodeOptions, Document, KeyPath, decode_document, to_json};
use serde_json::json;

use crate::cmd::print::{PrintOptions, print_value};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Dotted key path, e.g. `Assets[0].URL`.
	pub key_path: String,
	#[arg(long)]
	pub json: bool,
	/// Print string values without quotes.
	#[arg(long)]
	pub raw: bool,
}

/// Print the value selected by a key path.
pub fn run(args: Args) -> plistdoc::plist::Result<()> {
	let Args { path, key_path, json, raw } = args;

	let key_path = KeyPath::parse(&key_path)?;
	let document = Document::open(&path)?;
	let root = decode_document(&document, &DecodeOptions::default())?;
	let value = key_path.resolve(&root)?;

	if json {
		let out = json!({
			"path": path.display().to_string(),
			"key_path": key_path.source,
			"kind": value.kind(),
			"value": to_json(value),
		});
		println!("{out:#}");
		return Ok(());
	}

	if raw && let Some(text) = value.as_str() {
		println!("{text}");
		return Ok(());
	}

	print_value(value, 0, PrintOptions::default());
	Ok(())
}
