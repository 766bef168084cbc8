use serde::Serialize;

use super::block::Block;
use super::function::CallInterface;
use super::{ChanSize, Identifier};

/// A single concurrency action in a function body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Statement {
	/// Synchronous invocation of another function
	Call {
		call: CallInterface,
	},
	/// Invocation of another function as an independent concurrent activity
	Spawn {
		call: CallInterface,
	},
	NewChan {
		name: Identifier,
		chan: Identifier,
		size: ChanSize,
	},
	Send {
		chan: Identifier,
	},
	Recv {
		chan: Identifier,
	},
	Close {
		chan: Identifier,
	},
	/// No observable action
	Tau,
	If {
		then: Block,
		els: Block,
	},
	/// Choice between the body of a loop and its exit
	IfFor {
		then: Block,
		els: Block,
	},
	/// Non-deterministic choice between the cases
	Select {
		cases: Vec<Block>,
	},
	NewMutex {
		name: Identifier,
	},
	NewRWMutex {
		name: Identifier,
	},
	Lock {
		name: Identifier,
	},
	Unlock {
		name: Identifier,
	},
	RLock {
		name: Identifier,
	},
	RUnlock {
		name: Identifier,
	},
	NewMem {
		name: Identifier,
	},
	MemRead {
		name: Identifier,
	},
	MemWrite {
		name: Identifier,
	},
}

impl Statement {
	pub fn call(function: impl Into<Identifier>) -> Self {
		Self::Call {
			call: CallInterface::new(function.into()),
		}
	}

	pub fn spawn(function: impl Into<Identifier>) -> Self {
		Self::Spawn {
			call: CallInterface::new(function.into()),
		}
	}

	/// Get the call interface if this is a call or spawn
	pub fn get_call(&self) -> Option<&CallInterface> {
		match self {
			Self::Call { call } | Self::Spawn { call } => Some(call),
			_ => None,
		}
	}

	/// Get the blocks nested directly inside this statement
	pub fn get_bodies(&self) -> Vec<&Block> {
		match self {
			Self::If { then, els } | Self::IfFor { then, els } => vec![then, els],
			Self::Select { cases } => cases.iter().collect(),
			_ => Vec::new(),
		}
	}

	/// Whether this statement is an action that can be observed on its own,
	/// regardless of what any other function does
	pub fn is_observable(&self) -> bool {
		match self {
			Self::Tau
			| Self::Call { .. }
			| Self::Spawn { .. }
			| Self::If { .. }
			| Self::IfFor { .. }
			| Self::Select { .. } => false,
			Self::NewChan { .. }
			| Self::Send { .. }
			| Self::Recv { .. }
			| Self::Close { .. }
			| Self::NewMutex { .. }
			| Self::NewRWMutex { .. }
			| Self::Lock { .. }
			| Self::Unlock { .. }
			| Self::RLock { .. }
			| Self::RUnlock { .. }
			| Self::NewMem { .. }
			| Self::MemRead { .. }
			| Self::MemWrite { .. } => true,
		}
	}
}
