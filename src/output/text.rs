use std::fmt::Display;

use itertools::Itertools;

use crate::common::block::Block;
use crate::common::function::{CallInterface, Function};
use crate::common::stmt::Statement;
use crate::program::Program;

/// Indentation of the statements at the top of a function body
pub const BODY_INDENT: &str = "    ";

impl Display for Program {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let text = self.functions().iter().map(|x| x.to_string()).join("\n");
		write!(f, "{text}")
	}
}

impl Display for Function {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let params = self.params.iter().map(|x| &x.callee).join(", ");
		write!(f, "def {}({params}):", self.name)?;
		for stmt in &self.block.contents {
			write!(f, "\n{BODY_INDENT}{stmt}")?;
		}

		Ok(())
	}
}

/// Nested blocks are written on one line with their statements separated by spaces
impl Display for Block {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.contents.iter().join(" "))
	}
}

impl Display for CallInterface {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let args = self.params.iter().map(|x| &x.caller).join(", ");
		write!(f, "{}({args})", self.function)
	}
}

impl Display for Statement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Call { call } => write!(f, "call {call};"),
			Self::Spawn { call } => write!(f, "spawn {call};"),
			Self::NewChan { name, chan, size } => write!(f, "let {name} = newchan {chan}, {size};"),
			Self::Send { chan } => write!(f, "send {chan};"),
			Self::Recv { chan } => write!(f, "recv {chan};"),
			Self::Close { chan } => write!(f, "close {chan};"),
			Self::Tau => write!(f, "tau;"),
			Self::If { then, els } => write_branches(f, "if", then, els),
			Self::IfFor { then, els } => write_branches(f, "iffor", then, els),
			Self::Select { cases } => {
				write!(f, "select")?;
				for case in cases {
					write!(f, " case")?;
					write_nested(f, case)?;
				}
				write!(f, " endselect;")
			}
			Self::NewMutex { name } => write!(f, "letsync {name} mutex;"),
			Self::NewRWMutex { name } => write!(f, "letsync {name} rwmutex;"),
			Self::Lock { name } => write!(f, "lock {name};"),
			Self::Unlock { name } => write!(f, "unlock {name};"),
			Self::RLock { name } => write!(f, "rlock {name};"),
			Self::RUnlock { name } => write!(f, "runlock {name};"),
			Self::NewMem { name } => write!(f, "letmem {name};"),
			Self::MemRead { name } => write!(f, "read {name};"),
			Self::MemWrite { name } => write!(f, "write {name};"),
		}
	}
}

fn write_branches(
	f: &mut std::fmt::Formatter<'_>,
	keyword: &str,
	then: &Block,
	els: &Block,
) -> std::fmt::Result {
	write!(f, "{keyword}")?;
	write_nested(f, then)?;
	write!(f, " else")?;
	write_nested(f, els)?;
	write!(f, " endif;")
}

fn write_nested(f: &mut std::fmt::Formatter<'_>, block: &Block) -> std::fmt::Result {
	if block.contents.is_empty() {
		return Ok(());
	}
	write!(f, " {block}")
}

#[cfg(test)]
mod tests {
	use crate::common::block::Block;
	use crate::common::function::{CallInterface, Function, Parameter};
	use crate::common::stmt::Statement;
	use crate::parse::parse_program;
	use crate::program::Program;

	#[test]
	fn test_function_text() {
		let mut func = Function::with_params(
			"main.work".into(),
			vec![Parameter::plain("x".into()), Parameter::plain("y".into())],
		);
		func.block.contents = vec![
			Statement::NewChan {
				name: "c".into(),
				chan: "int".into(),
				size: 2,
			},
			Statement::Spawn {
				call: CallInterface::with_params(
					"main.work$1".into(),
					vec![Parameter::new("c".into(), "ch".into())],
				),
			},
			Statement::If {
				then: vec![Statement::Send { chan: "x".into() }].into(),
				els: Block::new(),
			},
		];
		assert_eq!(
			func.to_string(),
			"def main.work(x, y):\n    let c = newchan int, 2;\n    spawn main.work$1(c);\n    if send x; else endif;"
		);
	}

	#[test]
	fn test_nested_select() {
		let stmt = Statement::Select {
			cases: vec![
				vec![Statement::Recv { chan: "a".into() }, Statement::Tau].into(),
				vec![Statement::IfFor {
					then: vec![Statement::NewMutex { name: "m".into() }].into(),
					els: vec![Statement::Tau].into(),
				}]
				.into(),
			],
		};
		assert_eq!(
			stmt.to_string(),
			"select case recv a; tau; case iffor letsync m mutex; else tau; endif; endselect;"
		);
	}

	#[test]
	fn test_print_then_parse() {
		let text = "def \"main\".main():
    letmem v;
    write v;
    letsync l rwmutex;
    rlock l;
    runlock l;
    call \"main\".main$1(v, l);
def \"main\".main$1(v, l):
    select case read v; case lock l; unlock l; case tau; endselect;
    iffor close v; else tau; endif;";
		let program = parse_program(text).expect("Failed to parse");
		assert_eq!(program.to_string(), text);

		let reparsed = parse_program(&program.to_string()).expect("Failed to parse output");
		assert_eq!(program, reparsed);
	}

	#[test]
	fn test_empty_program() {
		assert_eq!(Program::new().to_string(), "");
	}
}
