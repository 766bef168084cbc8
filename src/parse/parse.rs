use std::iter::{Copied, Peekable};

use anyhow::{bail, Context};
use itertools::Itertools;

use crate::common::block::Block;
use crate::common::function::{CallInterface, Function, Parameter};
use crate::common::stmt::Statement;
use crate::common::Identifier;
use crate::program::Program;

use super::lex::{Side, TextPos, Token, TokenAndPos};

type Tokens<'t> = Peekable<Copied<std::slice::Iter<'t, &'t TokenAndPos>>>;

// If rustfmt formats this it will continue to indent the blocks forever
#[rustfmt::skip]
macro_rules! consume {
	($toks:ident, $err:block) => {{
		let tok = $toks.next();
		let Some(tok) = tok else {
			$err
		};
		tok
	}};
}

// If rustfmt formats this it will continue to indent the blocks forever
#[rustfmt::skip]
macro_rules! consume_expect {
	($toks:ident, $ty:ident, $err:block) => {{
		let tok = consume!($toks, $err);
		let Token::$ty = &tok.0 else {
			bail!("Expected {} but got {} {}", stringify!($ty), tok.0, tok.1);
		};
		tok
	}};
}

pub fn parse_definitions(program: &mut Program, toks: &[&TokenAndPos]) -> anyhow::Result<()> {
	let mut toks = toks.iter().copied().peekable();
	while toks.peek().is_some() {
		let (func, pos) = parse_function(&mut toks)?;
		let name = func.name.clone();
		program
			.add_function(func)
			.with_context(|| format!("Failed to add function {name} {pos}"))?;
	}

	Ok(())
}

fn parse_function(toks: &mut Tokens) -> anyhow::Result<(Function, TextPos)> {
	let (tok, pos) = consume!(toks, { bail!("Expected a function definition") });
	match tok {
		Token::Ident(kw) if kw == "def" => {}
		other => bail!("Expected 'def' but got {other} {pos}"),
	}

	let name = parse_name(toks).context("Failed to parse function name")?;
	let params = parse_name_list(toks)
		.with_context(|| format!("Failed to parse parameters of function {name}"))?
		.into_iter()
		.map(Parameter::plain)
		.collect();
	consume_expect!(toks, Colon, {
		bail!("Expected ':' after the parameters of function {name}")
	});
	let (block, _) = parse_block(toks, &[])
		.with_context(|| format!("Failed to parse body of function {name}"))?;

	Ok((Function::with_all(name, params, block), *pos))
}

/// Parse statements until one of the terminating keywords is consumed. With no
/// terminators, parses until the next definition or the end of input
fn parse_block(
	toks: &mut Tokens,
	terminators: &[&'static str],
) -> anyhow::Result<(Block, Option<&'static str>)> {
	let mut block = Block::new();
	loop {
		let Some((tok, pos)) = toks.peek().copied() else {
			if terminators.is_empty() {
				return Ok((block, None));
			}
			bail!(
				"Expected {} but reached the end of input",
				terminators.iter().map(|x| format!("'{x}'")).join(" or ")
			);
		};
		if let Token::Ident(kw) = tok {
			if let Some(end) = terminators.iter().find(|x| **x == kw.as_str()) {
				toks.next();
				return Ok((block, Some(*end)));
			}
			if terminators.is_empty() && kw == "def" {
				return Ok((block, None));
			}
		}

		let stmt = parse_stmt(toks).with_context(|| format!("Failed to parse statement {pos}"))?;
		block.contents.push(stmt);
	}
}

fn parse_stmt(toks: &mut Tokens) -> anyhow::Result<Statement> {
	let (tok, pos) = consume!(toks, {
		bail!("Expected a statement but reached the end of input")
	});
	let Token::Ident(kw) = tok else {
		bail!("Expected a statement but got {tok} {pos}");
	};

	let stmt = match kw.as_str() {
		"let" => parse_newchan(toks)?,
		"send" => Statement::Send {
			chan: parse_name(toks)?,
		},
		"recv" => Statement::Recv {
			chan: parse_name(toks)?,
		},
		"close" => Statement::Close {
			chan: parse_name(toks)?,
		},
		"tau" => Statement::Tau,
		"call" => Statement::Call {
			call: parse_call(toks)?,
		},
		"spawn" => Statement::Spawn {
			call: parse_call(toks)?,
		},
		"if" => {
			let (then, els) = parse_branches(toks)?;
			Statement::If { then, els }
		}
		"iffor" => {
			let (then, els) = parse_branches(toks)?;
			Statement::IfFor { then, els }
		}
		"select" => Statement::Select {
			cases: parse_cases(toks)?,
		},
		"letmem" => Statement::NewMem {
			name: parse_name(toks)?,
		},
		"read" => Statement::MemRead {
			name: parse_name(toks)?,
		},
		"write" => Statement::MemWrite {
			name: parse_name(toks)?,
		},
		"letsync" => parse_letsync(toks)?,
		"lock" => Statement::Lock {
			name: parse_name(toks)?,
		},
		"unlock" => Statement::Unlock {
			name: parse_name(toks)?,
		},
		"rlock" => Statement::RLock {
			name: parse_name(toks)?,
		},
		"runlock" => Statement::RUnlock {
			name: parse_name(toks)?,
		},
		other => bail!("Unknown statement '{other}' {pos}"),
	};
	consume_expect!(toks, Semicolon, {
		bail!("Expected ';' after statement '{kw}'")
	});

	Ok(stmt)
}

fn parse_name(toks: &mut Tokens) -> anyhow::Result<Identifier> {
	let (tok, pos) = consume!(toks, {
		bail!("Expected a name but reached the end of input")
	});
	match tok {
		Token::Ident(name) => Ok(name.as_str().into()),
		other => bail!("Expected a name but got {other} {pos}"),
	}
}

fn expect_keyword(toks: &mut Tokens, keyword: &str) -> anyhow::Result<()> {
	let (tok, pos) = consume!(toks, {
		bail!("Expected '{keyword}' but reached the end of input")
	});
	match tok {
		Token::Ident(kw) if kw == keyword => Ok(()),
		other => bail!("Expected '{keyword}' but got {other} {pos}"),
	}
}

/// Parse a parenthesized, comma separated list of names
fn parse_name_list(toks: &mut Tokens) -> anyhow::Result<Vec<Identifier>> {
	let (tok, pos) = consume!(toks, {
		bail!("Expected '(' but reached the end of input")
	});
	if tok != &Token::Paren(Side::Left) {
		bail!("Expected '(' but got {tok} {pos}");
	}

	let mut out = Vec::new();
	if let Some((Token::Paren(Side::Right), _)) = toks.peek() {
		toks.next();
		return Ok(out);
	}
	loop {
		out.push(parse_name(toks)?);
		let (tok, pos) = consume!(toks, { bail!("Unterminated list of names") });
		match tok {
			Token::Comma => continue,
			Token::Paren(Side::Right) => break,
			other => bail!("Expected ',' or ')' but got {other} {pos}"),
		}
	}

	Ok(out)
}

fn parse_call(toks: &mut Tokens) -> anyhow::Result<CallInterface> {
	let function = parse_name(toks).context("Failed to parse called function")?;
	let params = parse_name_list(toks)
		.with_context(|| format!("Failed to parse arguments to {function}"))?
		.into_iter()
		.map(Parameter::plain)
		.collect();

	Ok(CallInterface::with_params(function, params))
}

fn parse_newchan(toks: &mut Tokens) -> anyhow::Result<Statement> {
	let name = parse_name(toks)?;
	consume_expect!(toks, Equal, { bail!("Expected '=' after let {name}") });
	expect_keyword(toks, "newchan")?;
	let chan = parse_name(toks)?;
	consume_expect!(toks, Comma, {
		bail!("Expected ',' after channel {chan}")
	});
	let (tok, pos) = consume!(toks, {
		bail!("Expected the size of channel {chan}")
	});
	let Token::Num(size) = tok else {
		bail!("Expected a channel size but got {tok} {pos}");
	};

	Ok(Statement::NewChan {
		name,
		chan,
		size: *size,
	})
}

fn parse_letsync(toks: &mut Tokens) -> anyhow::Result<Statement> {
	let name = parse_name(toks)?;
	let (tok, pos) = consume!(toks, {
		bail!("Expected the kind of lock {name}")
	});
	match tok {
		Token::Ident(kind) if kind == "mutex" => Ok(Statement::NewMutex { name }),
		Token::Ident(kind) if kind == "rwmutex" => Ok(Statement::NewRWMutex { name }),
		other => bail!("Expected 'mutex' or 'rwmutex' but got {other} {pos}"),
	}
}

fn parse_branches(toks: &mut Tokens) -> anyhow::Result<(Block, Block)> {
	let (then, _) = parse_block(toks, &["else"])?;
	let (els, _) = parse_block(toks, &["endif"])?;

	Ok((then, els))
}

fn parse_cases(toks: &mut Tokens) -> anyhow::Result<Vec<Block>> {
	let (tok, pos) = consume!(toks, {
		bail!("Expected 'case' but reached the end of input")
	});
	match tok {
		Token::Ident(kw) if kw == "case" => {}
		Token::Ident(kw) if kw == "endselect" => bail!("Select has no cases {pos}"),
		other => bail!("Expected 'case' but got {other} {pos}"),
	}

	let mut cases = Vec::new();
	loop {
		let (case, end) = parse_block(toks, &["case", "endselect"])?;
		cases.push(case);
		if end == Some("endselect") {
			break;
		}
	}

	Ok(cases)
}
