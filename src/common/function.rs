use serde::Serialize;

use super::block::Block;
use super::Identifier;

/// A function definition: a name, its formal parameters and the sequence
/// of concurrency actions it performs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
	pub name: Identifier,
	pub params: Vec<Parameter>,
	pub block: Block,
}

impl Function {
	pub fn new(name: Identifier) -> Self {
		Self::with_params(name, Vec::new())
	}

	pub fn with_params(name: Identifier, params: Vec<Parameter>) -> Self {
		Self::with_all(name, params, Block::new())
	}

	pub fn with_all(name: Identifier, params: Vec<Parameter>, block: Block) -> Self {
		Self {
			name,
			params,
			block,
		}
	}

	/// Whether the body is empty or is just a single tau
	pub fn is_empty(&self) -> bool {
		self.block.contents.is_empty() || self.block.is_tau()
	}
}

/// Binding of a resource visible as `caller` in the calling scope
/// to the name `callee` inside the called function
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Parameter {
	pub caller: Identifier,
	pub callee: Identifier,
}

impl Parameter {
	pub fn new(caller: Identifier, callee: Identifier) -> Self {
		Self { caller, callee }
	}

	/// A parameter that has the same name on both sides of the call
	pub fn plain(name: Identifier) -> Self {
		Self::new(name.clone(), name)
	}
}

/// The target and arguments of a call or spawn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallInterface {
	pub function: Identifier,
	pub params: Vec<Parameter>,
}

impl CallInterface {
	pub fn new(function: Identifier) -> Self {
		Self::with_params(function, Vec::new())
	}

	pub fn with_params(function: Identifier, params: Vec<Parameter>) -> Self {
		Self { function, params }
	}
}
