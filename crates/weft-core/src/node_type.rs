//! Node type declarations.
//!
//! A [`NodeType`] is the `'static` description of an element or component:
//! its declared name, how it lowers to HTML, and its shape contract. Types are
//! declared as `static` items with the `const` builder methods below and made
//! visible to the mini-parser with [`register_type!`](crate::register_type).
//!
//! ```ignore
//! use weft_core::{AttrSchema, AttrSpec, AttrType, ChildSchema, NodeType, register_type};
//!
//! const LINK_ATTRS: &[AttrSpec] = &[AttrSpec::required("href", AttrType::Str)];
//!
//! pub static LINK: NodeType = NodeType::element("a")
//!     .with_attrs(AttrSchema::new(&[LINK_ATTRS]))
//!     .with_children(ChildSchema::Any)
//!     .always_pair();
//!
//! register_type!(LINK);
//! ```

use std::fmt;

use crate::attrs::AttrSchema;
use crate::error::{Error, Result};
use crate::node::{Node, NodeBuilder};
use crate::schema::ChildSchema;

/// Lowers a composite node one step toward concrete HTML.
pub type RenderFn = fn(&Node) -> Result<Node>;

/// How a node type maps to markup.
#[derive(Clone, Copy)]
pub enum NodeKind {
	/// Maps directly to an HTML tag.
	Concrete {
		/// The HTML tag name.
		tag: &'static str,
		/// Serialize as an open/close pair even without children.
		always_pair: bool,
	},
	/// Lowers through a render function.
	Composite {
		/// Produces the next node in the lowering chain.
		render: RenderFn,
	},
}

impl fmt::Debug for NodeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Concrete { tag, always_pair } => f
				.debug_struct("Concrete")
				.field("tag", tag)
				.field("always_pair", always_pair)
				.finish(),
			Self::Composite { .. } => f
				.debug_struct("Composite")
				.field("render", &"<fn>")
				.finish(),
		}
	}
}

/// Declaration of an element or component type.
#[derive(Debug)]
pub struct NodeType {
	name: &'static str,
	kind: NodeKind,
	attrs: AttrSchema,
	children: ChildSchema,
}

impl NodeType {
	/// Declares an HTML element whose type name is its tag name.
	///
	/// The new type accepts no attributes and any children until
	/// [`with_attrs`](Self::with_attrs) / [`with_children`](Self::with_children)
	/// say otherwise.
	pub const fn element(tag: &'static str) -> Self {
		Self::concrete(tag, tag)
	}

	/// Declares a concrete type with a type name distinct from its tag.
	pub const fn concrete(name: &'static str, tag: &'static str) -> Self {
		Self {
			name,
			kind: NodeKind::Concrete {
				tag,
				always_pair: false,
			},
			attrs: AttrSchema::EMPTY,
			children: ChildSchema::Any,
		}
	}

	/// Declares a component that lowers through `render`.
	pub const fn component(name: &'static str, render: RenderFn) -> Self {
		Self {
			name,
			kind: NodeKind::Composite { render },
			attrs: AttrSchema::EMPTY,
			children: ChildSchema::Any,
		}
	}

	/// Sets the attribute contract.
	pub const fn with_attrs(mut self, attrs: AttrSchema) -> Self {
		self.attrs = attrs;
		self
	}

	/// Sets the child contract.
	pub const fn with_children(mut self, children: ChildSchema) -> Self {
		self.children = children;
		self
	}

	/// Makes a concrete type serialize as `<tag></tag>` when empty.
	///
	/// Has no effect on components.
	pub const fn always_pair(mut self) -> Self {
		if let NodeKind::Concrete { tag, .. } = self.kind {
			self.kind = NodeKind::Concrete {
				tag,
				always_pair: true,
			};
		}
		self
	}

	/// The declared type name, used by the mini-parser and the pretty printer.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// How the type maps to markup.
	pub fn kind(&self) -> &NodeKind {
		&self.kind
	}

	/// The HTML tag for concrete types.
	pub fn tag_name(&self) -> Option<&'static str> {
		match self.kind {
			NodeKind::Concrete { tag, .. } => Some(tag),
			NodeKind::Composite { .. } => None,
		}
	}

	/// Whether the type maps directly to a tag.
	pub fn is_concrete(&self) -> bool {
		matches!(self.kind, NodeKind::Concrete { .. })
	}

	/// Whether the type always serializes as a tag pair.
	pub fn is_always_pair(&self) -> bool {
		matches!(
			self.kind,
			NodeKind::Concrete {
				always_pair: true,
				..
			}
		)
	}

	/// The attribute contract.
	pub fn attrs(&self) -> &AttrSchema {
		&self.attrs
	}

	/// The child contract.
	pub fn children(&self) -> &ChildSchema {
		&self.children
	}

	/// Starts building a node of this type.
	pub fn node(&'static self) -> NodeBuilder {
		NodeBuilder::new(self)
	}

	/// Checks that the declaration is usable.
	///
	/// Run by the registry before a type is registered, so a bad declaration
	/// is reported once at registration instead of on first use.
	pub fn check(&self) -> Result<()> {
		if !is_valid_type_name(self.name) {
			return Err(self.invalid(
				"type names must start with a letter or `_` and contain only letters, digits, `_`, `-`, `.` or `:`",
			));
		}
		if let NodeKind::Concrete { tag, .. } = self.kind
			&& !is_valid_tag(tag)
		{
			return Err(self.invalid(format!(
				"`{}` is not a valid tag name; tags are non-empty ASCII letters, digits or `-`",
				tag
			)));
		}
		if let ChildSchema::Slots(slots) = self.children
			&& slots.iter().any(|slot| slot.kinds.is_empty())
		{
			return Err(self.invalid("a child slot accepts no variants"));
		}
		Ok(())
	}

	fn invalid(&self, reason: impl Into<String>) -> Error {
		Error::InvalidDeclaration {
			name: self.name,
			reason: reason.into(),
		}
	}
}

pub(crate) fn is_type_name_start(c: char) -> bool {
	c.is_ascii_alphabetic() || c == '_'
}

pub(crate) fn is_type_name_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ':')
}

fn is_valid_type_name(name: &str) -> bool {
	let mut chars = name.chars();
	chars.next().is_some_and(is_type_name_start) && chars.all(is_type_name_char)
}

fn is_valid_tag(tag: &str) -> bool {
	!tag.is_empty()
		&& tag.starts_with(|c: char| c.is_ascii_alphabetic())
		&& tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::schema::Slot;
	use rstest::rstest;

	fn render_nothing(node: &Node) -> Result<Node> {
		Ok(node.clone())
	}

	static SPAN: NodeType = NodeType::element("span").always_pair();
	static CARD: NodeType = NodeType::component("Card", render_nothing).always_pair();
	static BAD_NAME: NodeType = NodeType::concrete("9lives", "div");
	static BAD_TAG: NodeType = NodeType::concrete("Spaced", "my tag");
	static EMPTY_SLOT: NodeType =
		NodeType::element("ul").with_children(ChildSchema::Slots(&[Slot::one(&[])]));

	#[rstest]
	fn test_element_declaration() {
		assert_eq!(SPAN.name(), "span");
		assert_eq!(SPAN.tag_name(), Some("span"));
		assert!(SPAN.is_concrete());
		assert!(SPAN.is_always_pair());
		assert!(SPAN.check().is_ok());
	}

	#[rstest]
	fn test_component_declaration() {
		assert_eq!(CARD.name(), "Card");
		assert_eq!(CARD.tag_name(), None);
		assert!(!CARD.is_concrete());
		assert!(!CARD.is_always_pair());
		assert!(CARD.check().is_ok());
	}

	#[rstest]
	#[case(&BAD_NAME)]
	#[case(&BAD_TAG)]
	#[case(&EMPTY_SLOT)]
	fn test_check_rejects_invalid_declarations(#[case] ty: &'static NodeType) {
		assert!(matches!(
			ty.check(),
			Err(Error::InvalidDeclaration { .. })
		));
	}

	#[rstest]
	#[case("Person", true)]
	#[case("_private", true)]
	#[case("ui.Card", true)]
	#[case("x-widget", true)]
	#[case("", false)]
	#[case("1st", false)]
	#[case("has space", false)]
	fn test_type_name_validity(#[case] name: &str, #[case] valid: bool) {
		assert_eq!(is_valid_type_name(name), valid);
	}
}
