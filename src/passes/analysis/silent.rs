use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::common::block::Block;
use crate::common::stmt::Statement;
use crate::common::Identifier;
use crate::program::Program;

/// Find the largest set of functions whose behaviour is indistinguishable from tau.
///
/// Every function starts out as a candidate, and candidates are discarded
/// until none of them depend on anything but other candidates. Functions that
/// only call each other in a cycle stay silent.
pub fn silent_functions(program: &Program) -> FxHashSet<Identifier> {
	let funcs = program.functions();
	let indices = program.function_indices();
	let mut candidates = vec![true; funcs.len()];

	let mut rounds = 0;
	loop {
		rounds += 1;
		let mut run_again = false;
		for (i, func) in funcs.iter().enumerate() {
			if !candidates[i] {
				continue;
			}
			if !is_silent_block(&func.block, &indices, &candidates) {
				candidates[i] = false;
				run_again = true;
			}
		}
		if !run_again {
			break;
		}
	}

	let silent: FxHashSet<_> = funcs
		.iter()
		.zip(candidates)
		.filter(|(_, candidate)| *candidate)
		.map(|(func, _)| func.name.clone())
		.collect();
	debug!(
		"Found {} silent functions out of {} in {rounds} rounds",
		silent.len(),
		funcs.len()
	);

	silent
}

fn is_silent_block(block: &Block, indices: &FxHashMap<&str, usize>, candidates: &[bool]) -> bool {
	block
		.contents
		.iter()
		.all(|stmt| is_silent_stmt(stmt, indices, candidates))
}

fn is_silent_stmt(stmt: &Statement, indices: &FxHashMap<&str, usize>, candidates: &[bool]) -> bool {
	match stmt {
		// Calls to functions that are not defined get removed by cleanup anyway
		Statement::Call { call } | Statement::Spawn { call } => indices
			.get(call.function.as_ref())
			.map_or(true, |i| candidates[*i]),
		Statement::If { then, els } | Statement::IfFor { then, els } => {
			is_silent_block(then, indices, candidates) && is_silent_block(els, indices, candidates)
		}
		Statement::Select { cases } => cases
			.iter()
			.all(|case| is_silent_block(case, indices, candidates)),
		other => !other.is_observable(),
	}
}
