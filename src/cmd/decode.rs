use std::path::PathBuf;

use plistdoc::plist::{DecodeOptions, Document, decode_document, to_json};
use serde_json::json;

use crate::cmd::print::{PrintOptions, print_value};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long = "max-array")]
	pub max_array: Option<usize>,
	#[arg(long = "print-depth")]
	pub print_depth: Option<u32>,
}

/// Decode a property list file and print its value tree.
pub fn run(args: Args) -> plistdoc::plist::Result<()> {
	let Args {
		path,
		json,
		max_depth,
		max_array,
		print_depth,
	} = args;

	let mut decode = DecodeOptions::default();
	if let Some(max_depth) = max_depth {
		decode.max_depth = max_depth;
	}

	let document = Document::open(&path)?;
	let value = decode_document(&document, &decode)?;

	if json {
		let out = json!({
			"path": path.display().to_string(),
			"root_kind": value.kind(),
			"value": to_json(&value),
		});
		println!("{out:#}");
		return Ok(());
	}

	let mut print = PrintOptions::default();
	if let Some(max_array) = max_array {
		print.max_array_items = max_array;
	}
	if let Some(print_depth) = print_depth {
		print.max_print_depth = print_depth;
	}

	println!("path: {}", path.display());
	println!("root_kind: {}", value.kind());
	println!("value:");
	print_value(&value, 2, print);

	Ok(())
}
