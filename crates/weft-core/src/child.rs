//! Child values: primitives, trusted strings and nested nodes.

use std::fmt;

use crate::node::Node;

/// A trusted string.
///
/// Trusted strings are emitted verbatim by the HTML serializer. A trusted
/// string passed as the sole child of a node is parsed as markup, so
/// registered element and component names inside it become real nodes.
///
/// ```ignore
/// let greeting = p().child(Safe::new(format!("Hello, how {}?", b().child("are you").build()?.format_inline()?)));
/// assert_eq!(greeting.build()?.to_html()?, "<p>Hello, how <b>are you</b>?</p>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Safe(String);

impl Safe {
	/// Marks a string as trusted. Wrapping a `Safe` again returns it unchanged.
	pub fn new(s: impl Into<Safe>) -> Self {
		s.into()
	}

	/// Returns the inner string.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Converts into the inner string.
	pub fn into_string(self) -> String {
		self.0
	}
}

impl From<String> for Safe {
	fn from(s: String) -> Self {
		Safe(s)
	}
}

impl From<&str> for Safe {
	fn from(s: &str) -> Self {
		Safe(s.to_string())
	}
}

impl AsRef<str> for Safe {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Safe {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// A single child of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
	/// Untrusted text, always escaped in HTML output.
	Text(String),
	/// Trusted text, emitted verbatim.
	Safe(Safe),
	/// A boolean primitive.
	Bool(bool),
	/// An integer primitive.
	Int(i64),
	/// A float primitive, rendered with `Display`, so `2.0` renders as `2`.
	Float(f64),
	/// A nested element or component.
	Node(Node),
}

impl Child {
	/// Returns whether this child is a primitive (anything but a node).
	pub fn is_primitive(&self) -> bool {
		!matches!(self, Child::Node(_))
	}

	/// Returns the nested node, if any.
	pub fn as_node(&self) -> Option<&Node> {
		match self {
			Child::Node(node) => Some(node),
			_ => None,
		}
	}

	/// Describes the child for error messages.
	pub fn describe(&self) -> String {
		match self {
			Child::Text(_) => "a string".to_string(),
			Child::Safe(_) => "a trusted string".to_string(),
			Child::Bool(_) => "a boolean".to_string(),
			Child::Int(_) => "an integer".to_string(),
			Child::Float(_) => "a float".to_string(),
			Child::Node(node) => format!("`{}`", node.type_name()),
		}
	}

	/// Returns the text of the child: primitives as written, nodes via [`Node::text`].
	pub fn text(&self) -> String {
		match self {
			Child::Node(node) => node.text(),
			primitive => primitive.to_string(),
		}
	}
}

/// Primitives display as their raw text; nodes display in the pretty form.
impl fmt::Display for Child {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Child::Text(s) => f.write_str(s),
			Child::Safe(s) => f.write_str(s.as_str()),
			Child::Bool(b) => write!(f, "{}", b),
			Child::Int(n) => write!(f, "{}", n),
			Child::Float(n) => write!(f, "{}", n),
			Child::Node(node) => write!(f, "{}", node),
		}
	}
}

impl From<&str> for Child {
	fn from(s: &str) -> Self {
		Child::Text(s.to_string())
	}
}

impl From<String> for Child {
	fn from(s: String) -> Self {
		Child::Text(s)
	}
}

impl From<&String> for Child {
	fn from(s: &String) -> Self {
		Child::Text(s.clone())
	}
}

impl From<Safe> for Child {
	fn from(s: Safe) -> Self {
		Child::Safe(s)
	}
}

impl From<bool> for Child {
	fn from(b: bool) -> Self {
		Child::Bool(b)
	}
}

impl From<i64> for Child {
	fn from(n: i64) -> Self {
		Child::Int(n)
	}
}

impl From<i32> for Child {
	fn from(n: i32) -> Self {
		Child::Int(i64::from(n))
	}
}

impl From<u32> for Child {
	fn from(n: u32) -> Self {
		Child::Int(i64::from(n))
	}
}

impl From<f64> for Child {
	fn from(n: f64) -> Self {
		Child::Float(n)
	}
}

impl From<Node> for Child {
	fn from(node: Node) -> Self {
		Child::Node(node)
	}
}
