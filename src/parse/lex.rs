use std::fmt::{Debug, Display};

use anyhow::Context;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
	Ident(String),
	Num(u64),
	Paren(Side),
	Comma,
	Colon,
	Semicolon,
	Equal,
	Comment(String),
}

impl Display for Token {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Ident(ident) => write!(f, "'{ident}'"),
			Self::Num(num) => write!(f, "{num}"),
			Self::Paren(Side::Left) => write!(f, "'('"),
			Self::Paren(Side::Right) => write!(f, "')'"),
			Self::Comma => write!(f, "','"),
			Self::Colon => write!(f, "':'"),
			Self::Semicolon => write!(f, "';'"),
			Self::Equal => write!(f, "'='"),
			Self::Comment(..) => write!(f, "comment"),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
	Left,
	Right,
}

/// Position of a token in the source text
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TextPos {
	pub line: usize,
	pub col: usize,
}

impl TextPos {
	fn new(line: usize, col: usize) -> Self {
		Self { line, col }
	}
}

impl Debug for TextPos {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}:{}", self.line, self.col)
	}
}

impl Display for TextPos {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}:{}", self.line, self.col)
	}
}

pub type TokenAndPos = (Token, TextPos);

pub type TokenList = Vec<TokenAndPos>;

/// Characters that always end a name
fn is_delimiter(c: char) -> bool {
	c.is_whitespace() || matches!(c, '(' | ')' | ',' | ':' | ';' | '=')
}

pub fn lex(text: &str) -> anyhow::Result<TokenList> {
	let mut out = Vec::new();
	let mut state = LexState::Root;

	let mut line = 1;
	let mut col = 0;
	let mut chars = text.chars().peekable();
	while let Some(c) = chars.next() {
		col += 1;
		let pos = TextPos::new(line, col);

		// Finish the current word or comment if this character ends it
		match &mut state {
			LexState::Root => {}
			LexState::Word(word, start) => {
				if is_delimiter(c) {
					out.push((finish_word(word, *start)?, *start));
					state = LexState::Root;
				} else {
					word.push(c);
				}
			}
			LexState::Comment(comment, start) => {
				if c == '\n' {
					out.push((Token::Comment(comment.trim().to_string()), *start));
					state = LexState::Root;
				} else {
					comment.push(c);
				}
			}
		}

		if let LexState::Root = state {
			match c {
				'(' => out.push((Token::Paren(Side::Left), pos)),
				')' => out.push((Token::Paren(Side::Right), pos)),
				',' => out.push((Token::Comma, pos)),
				':' => out.push((Token::Colon, pos)),
				';' => out.push((Token::Semicolon, pos)),
				'=' => out.push((Token::Equal, pos)),
				'-' if chars.peek() == Some(&'-') => {
					chars.next();
					col += 1;
					state = LexState::Comment(String::new(), pos);
				}
				c if c.is_whitespace() => {}
				c => state = LexState::Word(String::from(c), pos),
			}
		}

		if c == '\n' {
			line += 1;
			col = 0;
		}
	}

	match state {
		LexState::Root => {}
		LexState::Word(word, start) => out.push((finish_word(&word, start)?, start)),
		LexState::Comment(comment, start) => {
			out.push((Token::Comment(comment.trim().to_string()), start))
		}
	}

	Ok(out)
}

fn finish_word(word: &str, pos: TextPos) -> anyhow::Result<Token> {
	if word.chars().all(|x| x.is_ascii_digit()) {
		let num = word
			.parse()
			.with_context(|| format!("Number {word} is too large {pos}"))?;
		Ok(Token::Num(num))
	} else {
		Ok(Token::Ident(word.to_string()))
	}
}

/// Remove comments from a token list
pub fn reduce_tokens<'t>(
	toks: impl Iterator<Item = &'t TokenAndPos>,
) -> impl Iterator<Item = &'t TokenAndPos> {
	toks.filter(|(tok, _)| !matches!(tok, Token::Comment(..)))
}

enum LexState {
	Root,
	Word(String, TextPos),
	Comment(String, TextPos),
}
