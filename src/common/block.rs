use serde::Serialize;

use super::function::CallInterface;
use super::stmt::Statement;

/// An ordered sequence of statements. Every block is owned by exactly one
/// function body, branch or select case
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Block {
	pub contents: Vec<Statement>,
}

impl Block {
	pub fn new() -> Self {
		Self {
			contents: Vec::new(),
		}
	}

	pub fn with_contents(contents: Vec<Statement>) -> Self {
		Self { contents }
	}

	/// The canonical empty block, containing just a tau
	pub fn tau() -> Self {
		Self::with_contents(vec![Statement::Tau])
	}

	/// Whether this block is exactly `[tau]`
	pub fn is_tau(&self) -> bool {
		matches!(self.contents.as_slice(), [Statement::Tau])
	}

	pub fn stmt_count(&self) -> usize {
		self.contents.len()
	}

	/// Visit every call and spawn in this block, including the ones
	/// nested inside branches and select cases
	pub fn for_each_call<'this>(&'this self, f: &mut impl FnMut(&'this CallInterface)) {
		for stmt in &self.contents {
			if let Some(call) = stmt.get_call() {
				f(call);
			}
			for body in stmt.get_bodies() {
				body.for_each_call(f);
			}
		}
	}

	/// Visit this block and every block nested inside of it
	pub fn for_each_block<'this>(&'this self, f: &mut impl FnMut(&'this Block)) {
		f(self);
		for stmt in &self.contents {
			for body in stmt.get_bodies() {
				body.for_each_block(f);
			}
		}
	}
}

impl From<Vec<Statement>> for Block {
	fn from(value: Vec<Statement>) -> Self {
		Self::with_contents(value)
	}
}
