use std::{
	io::{stdin, Read},
	path::PathBuf,
	process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use log::info;
use migo::output::format_program;
use migo::{simplify_program, SimplifySettingsBuilder, DEFAULT_ENTRY};

fn main() -> ExitCode {
	env_logger::init();

	let cli = Cli::parse();
	let res = run(cli);
	if let Err(e) = res {
		eprintln!("{e:#?}");
		return ExitCode::FAILURE;
	}

	ExitCode::SUCCESS
}

fn run(cli: Cli) -> anyhow::Result<()> {
	let contents = if cli.stdin {
		let mut stdin = stdin();
		let mut text = String::new();
		stdin
			.read_to_string(&mut text)
			.context("Failed to read from stdin")?;
		text
	} else {
		let file = cli.file.context("No file specified")?;
		let path = PathBuf::from(file);
		std::fs::read_to_string(&path)
			.with_context(|| format!("Failed to read input file {path:?}"))?
	};

	// Parse the input
	let mut parse = migo::parse::Parser::new();
	parse.parse(&contents).context("Failed to parse input")?;
	let mut program = parse.finish();
	let before = program.len();

	let settings = SimplifySettingsBuilder::new()
		.entry(&cli.entry)
		.validate(!cli.no_validate)
		.keep_silent_entry(!cli.remove_silent_entry)
		.debug(cli.debug)
		.build();

	// Run the passes
	simplify_program(&mut program, &settings).context("Failed to simplify program")?;
	info!(
		"Kept {} of {before} functions with entry {}",
		program.len(),
		settings.entry
	);

	let output = format_program(&program, cli.json)?;
	if let Some(out) = cli.out {
		std::fs::write(&out, output).with_context(|| format!("Failed to write output to {out}"))?;
	} else {
		print!("{output}");
	}

	Ok(())
}

#[derive(Parser)]
#[command(name = "migo-simplify", about = "Simplify MiGo behavioural types")]
pub struct Cli {
	/// Whether to take input from stdin
	#[arg(short, long)]
	stdin: bool,
	/// The output file. Prints to stdout if not given
	#[arg(short, long)]
	out: Option<String>,
	/// Name of the entry function
	#[arg(short, long, default_value = DEFAULT_ENTRY)]
	entry: String,
	/// Write the program as JSON instead of MiGo text
	#[arg(long)]
	json: bool,
	/// Skip checking the simplified program
	#[arg(long)]
	no_validate: bool,
	/// Allow the entry function to be removed when it is silent
	#[arg(long)]
	remove_silent_entry: bool,
	/// Log the simplified program
	#[arg(short, long)]
	debug: bool,
	/// The file to read from
	file: Option<String>,
}
