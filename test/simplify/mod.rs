mod common;

use anyhow::Context;
use common::get_control_comment;
use include_dir::{include_dir, Dir};
use migo::output::format_program;
use migo::parse::Parser;
use migo::simplify_program;

static TESTS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/test/simplify/tests");

fn main() {
	let mut test_names = Vec::new();
	for file in TESTS.files() {
		let path = file.path();
		let file_name = path
			.file_name()
			.expect("Failed to get filename of file")
			.to_string_lossy();
		let file_stem = path
			.file_stem()
			.expect("Failed to get file stem of file")
			.to_string_lossy();
		if file_name.ends_with(".migo") {
			test_names.push(file_stem);
		}
	}
	test_names.sort();
	for test in test_names {
		println!("     - Running simplify test '{test}'");
		run_test(&test).unwrap_or_else(|e| panic!("Test {test} failed: {e:?}"));
	}
}

fn run_test(test_name: &str) -> anyhow::Result<()> {
	let input_contents = TESTS
		.get_file(format!("{test_name}.migo"))
		.expect("Input file does not exist")
		.contents_utf8()
		.context("Input file is not UTF-8")?;
	let output_contents = TESTS
		.get_file(format!("{test_name}.out"))
		.expect("Output file does not exist")
		.contents_utf8()
		.context("Output file is not UTF-8")?;

	// Parse the input
	let mut parse = Parser::new();
	parse
		.parse(input_contents)
		.context("Failed to parse test input")?;
	let mut program = parse.finish();

	// Run the passes
	let settings = get_control_comment(input_contents).context("Failed to get control comment")?;
	simplify_program(&mut program, &settings).context("Failed to simplify input")?;
	let actual = format_program(&program, false)?;

	assert_eq!(
		output_contents.lines().count(),
		actual.lines().count(),
		"Outputs are of different lengths"
	);
	for (i, (l, r)) in output_contents.lines().zip(actual.lines()).enumerate() {
		assert_eq!(l, r, "Line mismatch at {i}");
	}

	// Simplifying again must not change anything
	let mut again = program.clone();
	simplify_program(&mut again, &settings).context("Failed to simplify output")?;
	assert_eq!(program, again, "Simplification is not idempotent");

	Ok(())
}
