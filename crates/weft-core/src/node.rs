//! The node tree.
//!
//! A [`Node`] is an instance of a [`NodeType`]: children plus attributes,
//! checked against the type's shape contract when the node is built. Nodes are
//! immutable once constructed, except for [`Node::with_attr_default`], which
//! validates the added attribute the same way.

use std::fmt;

use crate::attrs::{AttrValue, Attrs};
use crate::child::Child;
use crate::error::{Error, Result};
use crate::node_type::{NodeKind, NodeType};
use crate::options::RenderOptions;
use crate::parser;
use crate::registry::Registry;
use crate::resolve::{self, Resolved};
use crate::serialize;
use crate::validate::{validate_attr, validate_attrs, validate_children};

/// An element or component instance.
#[derive(Clone)]
pub struct Node {
	ty: &'static NodeType,
	children: Vec<Child>,
	attrs: Attrs,
}

impl Node {
	/// Creates a node, resolving embedded markup against the global registry.
	///
	/// When the sole child is a [`Safe`](crate::Safe) string it is parsed and
	/// replaced by the resulting children. Attributes and children are then
	/// checked against the contract of `ty`.
	///
	/// # Errors
	///
	/// [`Error::Shape`] if the contract is violated, [`Error::UnknownTag`] or
	/// [`Error::Markup`] if embedded markup cannot be parsed.
	pub fn new<I, C>(ty: &'static NodeType, children: I, attrs: Attrs) -> Result<Self>
	where
		I: IntoIterator<Item = C>,
		C: Into<Child>,
	{
		Self::new_in(ty, children, attrs, Registry::global())
	}

	/// Like [`Node::new`], resolving embedded markup against `registry`.
	pub fn new_in<I, C>(
		ty: &'static NodeType,
		children: I,
		attrs: Attrs,
		registry: &Registry,
	) -> Result<Self>
	where
		I: IntoIterator<Item = C>,
		C: Into<Child>,
	{
		let mut children: Vec<Child> = children.into_iter().map(Into::into).collect();
		validate_attrs(ty, &attrs)?;
		if let [Child::Safe(markup)] = children.as_slice() {
			children = parser::parse(markup.as_str(), registry)?;
		}
		validate_children(ty, &children)?;
		Ok(Self {
			ty,
			children,
			attrs,
		})
	}

	/// Builds a node from children that are already expanded.
	pub(crate) fn from_parts(
		ty: &'static NodeType,
		children: Vec<Child>,
		attrs: Attrs,
	) -> Result<Self> {
		validate_attrs(ty, &attrs)?;
		validate_children(ty, &children)?;
		Ok(Self {
			ty,
			children,
			attrs,
		})
	}

	/// The node's type declaration.
	pub fn node_type(&self) -> &'static NodeType {
		self.ty
	}

	/// The declared type name.
	pub fn type_name(&self) -> &'static str {
		self.ty.name()
	}

	/// The HTML tag, for concrete nodes.
	pub fn tag_name(&self) -> Option<&'static str> {
		self.ty.tag_name()
	}

	/// The children in order.
	pub fn children(&self) -> &[Child] {
		&self.children
	}

	/// The attributes.
	pub fn attrs(&self) -> &Attrs {
		&self.attrs
	}

	/// Number of children.
	pub fn len(&self) -> usize {
		self.children.len()
	}

	/// Whether the node has no children.
	pub fn is_empty(&self) -> bool {
		self.children.is_empty()
	}

	/// Iterates over the children.
	pub fn iter(&self) -> std::slice::Iter<'_, Child> {
		self.children.iter()
	}

	/// Whether the node has at least one attribute.
	pub fn has_attributes(&self) -> bool {
		!self.attrs.is_empty()
	}

	/// Whether the node has exactly one child and it is a primitive.
	pub fn is_simple(&self) -> bool {
		matches!(self.children.as_slice(), [child] if child.is_primitive())
	}

	/// Concatenated text of all primitive descendants, in document order.
	pub fn text(&self) -> String {
		self.children.iter().map(Child::text).collect()
	}

	/// The subset of this node's attributes that `target` declares.
	///
	/// Components use this to forward their attributes to the node they
	/// render.
	pub fn attrs_for(&self, target: &NodeType) -> Attrs {
		let schema = target.attrs();
		self.attrs
			.iter()
			.filter(|(key, _)| schema.declares(key))
			.map(|(key, value)| (key, value.clone()))
			.collect()
	}

	/// Sets `key` to `value` unless the attribute is already present.
	///
	/// # Errors
	///
	/// [`Error::Shape`] if the type does not accept the attribute.
	pub fn with_attr_default(
		mut self,
		key: impl Into<String>,
		value: impl Into<AttrValue>,
	) -> Result<Self> {
		let key = key.into();
		if !self.attrs.contains_key(&key) {
			let value = value.into();
			validate_attr(self.ty, &key, &value)?;
			self.attrs.insert(key, value);
		}
		Ok(self)
	}

	/// Lowers the node one step: concrete nodes return themselves, composites
	/// call their render function.
	pub fn render(&self) -> Result<Node> {
		match *self.ty.kind() {
			NodeKind::Concrete { .. } => Ok(self.clone()),
			NodeKind::Composite { render } => render(self),
		}
	}

	/// Lowers the node until it is concrete. See [`resolve::resolve`].
	pub fn resolve(&self) -> Result<Resolved<'_>> {
		resolve::resolve(self)
	}

	/// Serializes to compact HTML with default options.
	pub fn to_html(&self) -> Result<String> {
		self.to_html_with(&RenderOptions::default())
	}

	/// Serializes to compact HTML.
	pub fn to_html_with(&self, options: &RenderOptions) -> Result<String> {
		let mut out = String::new();
		serialize::write_html(self, options, &mut out)?;
		Ok(out)
	}

	/// Formats on one line using type names, escaping text children.
	pub fn to_compact_string(&self) -> String {
		let mut out = String::new();
		serialize::write_compact(self, &mut out);
		out
	}

	/// Formats a node whose children are all primitives on one line.
	///
	/// # Errors
	///
	/// [`Error::NotInlinable`] if any child is a node.
	pub fn format_inline(&self) -> Result<String> {
		if let Some(child) = self.children.iter().find(|child| !child.is_primitive()) {
			return Err(Error::NotInlinable {
				type_name: self.type_name(),
				child: child.describe(),
			});
		}
		Ok(self.to_compact_string())
	}
}

impl PartialEq for Node {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self.ty, other.ty)
			&& self.children == other.children
			&& self.attrs == other.attrs
	}
}

impl fmt::Debug for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Node")
			.field("type", &self.ty.name())
			.field("children", &self.children)
			.field("attrs", &self.attrs)
			.finish()
	}
}

/// Pretty form: two-space indentation, type names, simple nodes inlined.
impl fmt::Display for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut out = String::new();
		serialize::write_pretty(self, 0, &mut out);
		f.write_str(&out)
	}
}

impl<'a> IntoIterator for &'a Node {
	type Item = &'a Child;
	type IntoIter = std::slice::Iter<'a, Child>;

	fn into_iter(self) -> Self::IntoIter {
		self.children.iter()
	}
}

/// Incremental construction of a [`Node`].
///
/// ```ignore
/// let link = LINK.node().attr("href", "/").child("home").build()?;
/// ```
#[derive(Debug, Clone)]
pub struct NodeBuilder {
	ty: &'static NodeType,
	children: Vec<Child>,
	attrs: Attrs,
}

impl NodeBuilder {
	/// Starts a node of type `ty`.
	pub fn new(ty: &'static NodeType) -> Self {
		Self {
			ty,
			children: Vec::new(),
			attrs: Attrs::new(),
		}
	}

	/// Appends a child.
	pub fn child(mut self, child: impl Into<Child>) -> Self {
		self.children.push(child.into());
		self
	}

	/// Appends several children.
	pub fn children<I, C>(mut self, children: I) -> Self
	where
		I: IntoIterator<Item = C>,
		C: Into<Child>,
	{
		self.children.extend(children.into_iter().map(Into::into));
		self
	}

	/// Sets an attribute.
	pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.attrs.insert(key, value);
		self
	}

	/// Sets several attributes.
	pub fn attrs<I, K, V>(mut self, attrs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<AttrValue>,
	{
		self.attrs.extend(attrs);
		self
	}

	/// Builds the node. See [`Node::new`].
	pub fn build(self) -> Result<Node> {
		Node::new(self.ty, self.children, self.attrs)
	}

	/// Builds the node, resolving embedded markup against `registry`.
	pub fn build_in(self, registry: &Registry) -> Result<Node> {
		Node::new_in(self.ty, self.children, self.attrs, registry)
	}
}
