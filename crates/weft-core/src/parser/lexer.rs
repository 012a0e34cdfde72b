use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::escape::unescape;
use crate::node_type::{is_type_name_char, is_type_name_start};

// ── Token ─────────────────────────────────────────────────────────────────

/// An attribute as written in a start tag. `None` means a bare attribute.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawAttr<'s> {
	pub name: &'s str,
	pub value: Option<Cow<'s, str>>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token<'s> {
	/// Text between tags, kept verbatim.
	Text(&'s str),
	/// `<name attr ...>` or `<name attr ... />`.
	Open {
		name: &'s str,
		attrs: Vec<RawAttr<'s>>,
		self_closing: bool,
		position: usize,
	},
	/// `</name>`.
	Close { name: &'s str, position: usize },
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub(crate) struct Lexer<'s> {
	src: &'s str,
	pos: usize,
}

impl<'s> Lexer<'s> {
	pub(crate) fn new(src: &'s str) -> Self {
		Self { src, pos: 0 }
	}

	pub(crate) fn tokenize(mut self) -> Result<Vec<Token<'s>>> {
		let mut tokens = Vec::new();
		while self.pos < self.src.len() {
			let Some(start) = self.find_tag_start() else {
				tokens.push(Token::Text(&self.src[self.pos..]));
				break;
			};
			if start > self.pos {
				tokens.push(Token::Text(&self.src[self.pos..start]));
			}
			self.pos = start;
			let token = if self.rest().starts_with("</") {
				self.lex_close()?
			} else {
				self.lex_open()?
			};
			tokens.push(token);
		}
		Ok(tokens)
	}

	fn rest(&self) -> &'s str {
		&self.src[self.pos..]
	}

	fn peek(&self) -> Option<char> {
		self.rest().chars().next()
	}

	fn advance(&mut self) -> Option<char> {
		let ch = self.peek()?;
		self.pos += ch.len_utf8();
		Some(ch)
	}

	fn skip_whitespace(&mut self) {
		while matches!(self.peek(), Some(c) if c.is_whitespace()) {
			self.advance();
		}
	}

	fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'s str {
		let start = self.pos;
		while matches!(self.peek(), Some(c) if pred(c)) {
			self.advance();
		}
		&self.src[start..self.pos]
	}

	fn err(&self, position: usize, message: impl Into<String>) -> Error {
		Error::Markup {
			position,
			message: message.into(),
		}
	}

	/// Finds the next `<` that starts a tag. A `<` followed by anything but a
	/// name start (or `/` and a name start) is plain text.
	fn find_tag_start(&self) -> Option<usize> {
		self.rest().match_indices('<').find_map(|(offset, _)| {
			let after = &self.rest()[offset + 1..];
			let after = after.strip_prefix('/').unwrap_or(after);
			after
				.chars()
				.next()
				.is_some_and(is_type_name_start)
				.then_some(self.pos + offset)
		})
	}

	fn lex_open(&mut self) -> Result<Token<'s>> {
		let position = self.pos;
		self.advance(); // consume `<`
		let name = self.take_while(is_type_name_char);
		let mut attrs = Vec::new();

		loop {
			self.skip_whitespace();
			if self.rest().starts_with("/>") {
				self.pos += 2;
				return Ok(Token::Open {
					name,
					attrs,
					self_closing: true,
					position,
				});
			}
			match self.peek() {
				None => return Err(self.err(position, format!("tag `<{}` is never closed", name))),
				Some('>') => {
					self.advance();
					return Ok(Token::Open {
						name,
						attrs,
						self_closing: false,
						position,
					});
				}
				Some(_) => attrs.push(self.lex_attr()?),
			}
		}
	}

	fn lex_attr(&mut self) -> Result<RawAttr<'s>> {
		let position = self.pos;
		let name = self.take_while(|c| !c.is_whitespace() && !matches!(c, '=' | '>' | '/' | '"' | '\''));
		if name.is_empty() {
			let found = self.peek().unwrap_or_default();
			return Err(self.err(position, format!("unexpected character {:?} in tag", found)));
		}

		self.skip_whitespace();
		if self.peek() != Some('=') {
			return Ok(RawAttr { name, value: None });
		}
		self.advance(); // consume `=`
		self.skip_whitespace();
		let value = self.lex_value(name)?;
		Ok(RawAttr {
			name,
			value: Some(value),
		})
	}

	fn lex_value(&mut self, name: &str) -> Result<Cow<'s, str>> {
		let position = self.pos;
		match self.peek() {
			Some(quote @ ('"' | '\'')) => {
				self.advance(); // consume opening quote
				let raw = self.take_while(|c| c != quote);
				if self.advance().is_none() {
					return Err(self.err(
						position,
						format!("value of attribute `{}` is never closed", name),
					));
				}
				Ok(unescape(raw))
			}
			_ => {
				let start = self.pos;
				while let Some(c) = self.peek() {
					if c.is_whitespace() || c == '>' || self.rest().starts_with("/>") {
						break;
					}
					self.advance();
				}
				if start == self.pos {
					return Err(self.err(
						position,
						format!("attribute `{}` is missing a value", name),
					));
				}
				Ok(unescape(&self.src[start..self.pos]))
			}
		}
	}

	fn lex_close(&mut self) -> Result<Token<'s>> {
		let position = self.pos;
		self.pos += 2; // consume `</`
		let name = self.take_while(is_type_name_char);
		self.skip_whitespace();
		if self.advance() != Some('>') {
			return Err(self.err(position, format!("closing tag `</{}` is never closed", name)));
		}
		Ok(Token::Close { name, position })
	}
}
