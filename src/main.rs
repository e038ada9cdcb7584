#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "plistdoc", about = "Apple XML property list inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Summarise the decoded value tree.
	Info(cmd::info::Args),
	/// Decode and print the whole document.
	Decode(cmd::decode::Args),
	/// Print one nested value selected by key path.
	Get(cmd::get::Args),
}

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> plistdoc::plist::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Get(args) => cmd::get::run(args),
	}
}
