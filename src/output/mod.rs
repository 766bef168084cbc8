pub mod text;

use anyhow::Context;

use crate::program::Program;

/// Format a simplified program for writing out
pub fn format_program(program: &Program, json: bool) -> anyhow::Result<String> {
	if json {
		serde_json::to_string_pretty(program).context("Failed to serialize program to JSON")
	} else {
		let mut out = program.to_string();
		if !out.is_empty() {
			out.push('\n');
		}
		Ok(out)
	}
}
