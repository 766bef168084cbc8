mod common;

use std::{fs::File, io::Write, path::PathBuf};

use common::get_control_comment;
use migo::output::format_program;
use migo::parse::Parser;
use migo::simplify_program;

fn main() {
	let test_dir = PathBuf::from("./test/simplify/tests");
	let test_name = std::env::args().nth(1).expect("Test name argument missing");
	let input = std::fs::read_to_string(test_dir.join(format!("{test_name}.migo")))
		.expect("Failed to open test file");

	// Parse the input
	let mut parse = Parser::new();
	parse.parse(&input).expect("Failed to parse test input");
	let mut program = parse.finish();

	// Run the passes
	let settings = get_control_comment(&input).expect("Failed to get control comment");
	simplify_program(&mut program, &settings).expect("Failed to simplify input");

	let mut out_file = File::create(test_dir.join(format!("{test_name}.out")))
		.expect("Failed to create output file");
	let output = format_program(&program, false).expect("Failed to output generated test");
	write!(&mut out_file, "{output}").expect("Failed to write");
}
