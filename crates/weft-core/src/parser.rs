//! Mini-parser for trusted markup.
//!
//! Trusted strings may embed tags named after registered node types. Parsing
//! turns them back into a child sequence:
//!
//! - text runs become [`Safe`] children and are kept verbatim
//! - `<Name attr="v">...</Name>` and `<Name />` become nodes of the type
//!   registered as `Name`
//! - attribute values are decoded and converted to the declared attribute
//!   type; bare attributes are `true`
//!
//! A `<` that does not start a tag name is treated as text.

mod lexer;

use crate::attrs::{AttrValue, Attrs};
use crate::child::{Child, Safe};
use crate::error::{Error, Result};
use crate::node::Node;
use crate::node_type::NodeType;
use crate::registry::Registry;

use lexer::{Lexer, RawAttr, Token};

struct Frame<'s> {
	name: &'s str,
	ty: &'static NodeType,
	attrs: Attrs,
	children: Vec<Child>,
	position: usize,
}

/// Parses trusted markup into children, resolving tag names in `registry`.
///
/// # Errors
///
/// - [`Error::UnknownTag`] for a tag name that is not registered
/// - [`Error::Markup`] for unterminated or mismatched tags
/// - [`Error::Shape`] if an embedded node violates its type's contract
pub fn parse(text: &str, registry: &Registry) -> Result<Vec<Child>> {
	let tokens = Lexer::new(text).tokenize()?;
	let mut root = Vec::new();
	let mut stack: Vec<Frame<'_>> = Vec::new();

	for token in tokens {
		match token {
			Token::Text(text) => push_child(&mut stack, &mut root, Child::Safe(Safe::from(text))),
			Token::Open {
				name,
				attrs,
				self_closing,
				position,
			} => {
				let ty = registry.lookup(name).ok_or_else(|| Error::UnknownTag {
					name: name.to_string(),
				})?;
				let attrs = coerce_attrs(ty, attrs);
				if self_closing {
					let node = Node::from_parts(ty, Vec::new(), attrs)?;
					push_child(&mut stack, &mut root, node.into());
				} else {
					stack.push(Frame {
						name,
						ty,
						attrs,
						children: Vec::new(),
						position,
					});
				}
			}
			Token::Close { name, position } => {
				let Some(frame) = stack.pop() else {
					return Err(Error::Markup {
						position,
						message: format!("unexpected closing tag `</{}>`", name),
					});
				};
				if frame.name != name {
					return Err(Error::Markup {
						position,
						message: format!("expected `</{}>`, found `</{}>`", frame.name, name),
					});
				}
				let node = Node::from_parts(frame.ty, frame.children, frame.attrs)?;
				push_child(&mut stack, &mut root, node.into());
			}
		}
	}

	if let Some(frame) = stack.pop() {
		return Err(Error::Markup {
			position: frame.position,
			message: format!("`<{}>` is never closed", frame.name),
		});
	}

	tracing::trace!(children = root.len(), "parsed trusted markup");
	Ok(root)
}

fn push_child(stack: &mut [Frame<'_>], root: &mut Vec<Child>, child: Child) {
	match stack.last_mut() {
		Some(frame) => frame.children.push(child),
		None => root.push(child),
	}
}

/// Converts textual attribute values to the declared types.
///
/// Values that do not convert are kept as strings, so validation reports the
/// mismatch against the declared type.
fn coerce_attrs(ty: &NodeType, raw: Vec<RawAttr<'_>>) -> Attrs {
	raw.into_iter()
		.map(|RawAttr { name, value }| {
			let value = match value {
				None => AttrValue::Bool(true),
				Some(text) => ty
					.attrs()
					.spec(name)
					.and_then(|spec| spec.ty.coerce(&text))
					.unwrap_or_else(|| AttrValue::Str(text.into_owned())),
			};
			(name, value)
		})
		.collect()
}
