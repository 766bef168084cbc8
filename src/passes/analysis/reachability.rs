use rustc_hash::{FxHashMap, FxHashSet};

use crate::common::function::Function;
use crate::common::Identifier;
use crate::program::Program;

/// Find the functions that can be reached from the entry through calls and spawns.
/// The result is empty if the entry is not defined
pub fn reachable_functions(program: &Program, entry: &str) -> FxHashSet<Identifier> {
	let mut reached = FxHashSet::default();
	let Some(entry) = program.function(entry) else {
		return reached;
	};

	let by_name: FxHashMap<&str, &Function> = program
		.functions()
		.iter()
		.map(|func| (func.name.as_ref(), func))
		.collect();

	reached.insert(entry.name.clone());
	let mut worklist = vec![entry];
	while let Some(func) = worklist.pop() {
		func.block.for_each_call(&mut |call| {
			if reached.contains(&call.function) {
				return;
			}
			if let Some(&callee) = by_name.get(call.function.as_ref()) {
				reached.insert(callee.name.clone());
				worklist.push(callee);
			}
		});
	}

	reached
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::common::block::Block;
	use crate::common::stmt::Statement;

	fn program(funcs: Vec<(&str, Vec<Statement>)>) -> Program {
		let mut program = Program::new();
		for (name, contents) in funcs {
			let mut func = Function::new(name.into());
			func.block = Block::with_contents(contents);
			program.add_function(func).expect("Names are unique");
		}
		program
	}

	fn sorted(set: FxHashSet<Identifier>) -> Vec<String> {
		let mut out: Vec<_> = set.iter().map(|x| x.to_string()).collect();
		out.sort();
		out
	}

	#[test]
	fn test_nested_edges() {
		let program = program(vec![
			(
				"main",
				vec![Statement::Select {
					cases: vec![
						Block::with_contents(vec![Statement::spawn("a")]),
						Block::with_contents(vec![Statement::If {
							then: Block::tau(),
							els: Block::with_contents(vec![Statement::call("b")]),
						}]),
					],
				}],
			),
			("a", vec![Statement::call("a")]),
			("b", vec![Statement::call("missing")]),
			("c", vec![Statement::call("main")]),
		]);
		assert_eq!(sorted(reachable_functions(&program, "main")), vec!["a", "b", "main"]);
	}

	#[test]
	fn test_empty_entry_is_reached() {
		let program = program(vec![("main", vec![]), ("other", vec![])]);
		assert_eq!(sorted(reachable_functions(&program, "main")), vec!["main"]);
	}

	#[test]
	fn test_missing_entry() {
		let program = program(vec![("other", vec![])]);
		assert!(reachable_functions(&program, "main").is_empty());
	}

	#[test]
	fn test_mutual_recursion() {
		let program = program(vec![
			("main", vec![Statement::call("even")]),
			("even", vec![Statement::call("odd")]),
			("odd", vec![Statement::call("even")]),
		]);
		assert_eq!(
			sorted(reachable_functions(&program, "main")),
			vec!["even", "main", "odd"]
		);
	}
}
