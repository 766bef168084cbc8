pub mod lex;
mod parse;

use anyhow::Context;

use crate::program::Program;

use self::lex::{lex, reduce_tokens};
use self::parse::parse_definitions;

/// Parser for MiGo text. Definitions from multiple calls to `parse`
/// accumulate into the same program
pub struct Parser {
	program: Program,
}

impl Parser {
	pub fn new() -> Self {
		Self {
			program: Program::new(),
		}
	}

	pub fn parse(&mut self, text: &str) -> anyhow::Result<()> {
		let lexed = lex(text).context("Failed to lex text")?;
		let toks: Vec<_> = reduce_tokens(lexed.iter()).collect();
		parse_definitions(&mut self.program, &toks)
	}

	pub fn finish(self) -> Program {
		self.program
	}
}

impl Default for Parser {
	fn default() -> Self {
		Self::new()
	}
}

/// Parse a whole program from text
pub fn parse_program(text: &str) -> anyhow::Result<Program> {
	let mut parser = Parser::new();
	parser.parse(text)?;
	Ok(parser.finish())
}
