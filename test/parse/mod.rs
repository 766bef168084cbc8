use std::panic::catch_unwind;

use anyhow::{bail, Context};
use migo::common::block::Block;
use migo::common::function::{CallInterface, Function, Parameter};
use migo::common::stmt::Statement;
use migo::parse::Parser;
use migo::program::Program;
use migo::{block, push_stmts};

struct Test {
	name: &'static str,
	input: &'static str,
	output: Program,
}

macro_rules! test {
	($name:literal, $output:block) => {
		Test {
			name: $name,
			input: include_str!(concat!("tests/", $name, ".migo")),
			output: $output,
		}
	};
	($name:literal, $input:literal, $output:block) => {
		Test {
			name: $name,
			input: $input,
			output: $output,
		}
	};
}

fn call_with(function: &str, args: &[&str]) -> CallInterface {
	CallInterface::with_params(
		function.into(),
		args.iter().map(|x| Parameter::plain((*x).into())).collect(),
	)
}

fn func(name: &str, params: &[&str], block: Block) -> Function {
	Function::with_all(
		name.into(),
		params.iter().map(|x| Parameter::plain((*x).into())).collect(),
		block,
	)
}

fn main() {
	let tests = [
		test!("channels", {
			let mut program = Program::new();
			let mut main = Block::new();
			push_stmts! {
				main,
				Statement::NewChan {
					name: "ch".into(),
					chan: "ch_0_0".into(),
					size: 3,
				};
				Statement::Spawn {
					call: call_with("\"main\".producer", &["ch"]),
				};
				Statement::Recv { chan: "ch".into() };
				Statement::Close { chan: "ch".into() };
			}
			program
				.add_function(func("\"main\".main", &[], main))
				.expect("Names are unique");
			program
				.add_function(func(
					"\"main\".producer",
					&["ch"],
					block! { Statement::Send { chan: "ch".into() } },
				))
				.expect("Names are unique");

			program
		}),
		test!("choice", {
			let mut program = Program::new();
			let select = Statement::Select {
				cases: vec![
					block! { Statement::Send { chan: "a".into() } },
					block! {
						Statement::Recv { chan: "b".into() };
						Statement::Call {
							call: call_with("\"main\".loop", &["a", "b"]),
						};
					},
					Block::tau(),
				],
			};
			let body = block! {
				Statement::IfFor {
					then: block! { select },
					els: Block::new(),
				}
			};
			program
				.add_function(func("\"main\".loop", &["a", "b"], body))
				.expect("Names are unique");

			program
		}),
		test!("sync", "def m(): letsync mu mutex; lock mu; unlock mu; letsync rw rwmutex; rlock rw; runlock rw; letmem v; read v; write v;", {
			let mut program = Program::new();
			let body = block! {
				Statement::NewMutex { name: "mu".into() };
				Statement::Lock { name: "mu".into() };
				Statement::Unlock { name: "mu".into() };
				Statement::NewRWMutex { name: "rw".into() };
				Statement::RLock { name: "rw".into() };
				Statement::RUnlock { name: "rw".into() };
				Statement::NewMem { name: "v".into() };
				Statement::MemRead { name: "v".into() };
				Statement::MemWrite { name: "v".into() };
			};
			program
				.add_function(func("m", &[], body))
				.expect("Names are unique");

			program
		}),
		test!("empty_defs", "def a(): def b(x): tau; -- done", {
			let mut program = Program::new();
			program
				.add_function(func("a", &[], Block::new()))
				.expect("Names are unique");
			program
				.add_function(func("b", &["x"], Block::tau()))
				.expect("Names are unique");

			program
		}),
	];

	for test in tests {
		let name = test.name;
		catch_unwind(|| {
			println!("     - Running parse test '{name}'");
			run_test(test).expect("Test failed");
		})
		.unwrap_or_else(|_| panic!("Test {name} failed"));
	}
}

fn run_test(test: Test) -> anyhow::Result<()> {
	let mut parse = Parser::new();
	parse.parse(test.input).context("Failed to parse")?;
	let actual = parse.finish();
	assert_eq!(
		test.output.len(),
		actual.len(),
		"Programs have different numbers of functions"
	);
	for func in test.output.functions() {
		let Some(actual_func) = actual.function(&func.name) else {
			bail!("Function {} in output does not exist in input", func.name)
		};
		assert_eq!(func.params, actual_func.params, "Parameters failed to match");
		let expected_block = &func.block;
		let actual_block = &actual_func.block;

		// Check the statements
		assert_eq!(
			expected_block.contents.len(),
			actual_block.contents.len(),
			"Blocks are not same size"
		);
		for (i, (l, r)) in expected_block
			.contents
			.iter()
			.zip(actual_block.contents.iter())
			.enumerate()
		{
			assert_eq!(l, r, "Statement {i} failed to match");
		}
	}

	Ok(())
}
