//! Error types for weft-core

use thiserror::Error;

use crate::attrs::AttrType;

/// A node's attributes or children violate the shape contract of its type.
///
/// Raised synchronously while a node is being constructed. The node under
/// construction is discarded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
	/// The attribute key is not declared by the type's attribute schema.
	#[error("`{type_name}` does not accept the attribute `{key}`")]
	UnknownAttribute {
		/// Declared name of the node type.
		type_name: &'static str,
		/// The offending key.
		key: String,
	},

	/// A required attribute was not supplied.
	#[error("`{type_name}` requires the attribute `{key}`")]
	MissingAttribute {
		/// Declared name of the node type.
		type_name: &'static str,
		/// The missing key.
		key: &'static str,
	},

	/// The attribute value has the wrong runtime type.
	#[error("attribute `{key}` of `{type_name}` expects {expected}, got {found}")]
	AttributeType {
		/// Declared name of the node type.
		type_name: &'static str,
		/// The offending key.
		key: String,
		/// The declared value type.
		expected: AttrType,
		/// Variant name of the supplied value.
		found: &'static str,
	},

	/// The type declares that it takes no children.
	#[error("`{type_name}` takes no children, got {found}")]
	NoChildrenAllowed {
		/// Declared name of the node type.
		type_name: &'static str,
		/// Number of children supplied.
		found: usize,
	},

	/// The number of children is outside the declared arity.
	#[error("`{type_name}` expects {expected} children, got {found}")]
	ChildCount {
		/// Declared name of the node type.
		type_name: &'static str,
		/// Human readable arity, e.g. `2` or `1 or more`.
		expected: String,
		/// Number of children supplied.
		found: usize,
	},

	/// A child at the given position has a variant not allowed by its slot.
	#[error("child {position} of `{type_name}` must be {expected}, got {found}")]
	ChildKind {
		/// Declared name of the node type.
		type_name: &'static str,
		/// Zero-based position in the child sequence.
		position: usize,
		/// Human readable allowed variants.
		expected: String,
		/// Description of the supplied child.
		found: String,
	},
}

/// Error type for weft-core operations.
#[derive(Debug, Error)]
pub enum Error {
	/// Attribute or child contract violated.
	#[error(transparent)]
	Shape(#[from] ShapeError),

	/// Embedded markup used a tag name that is not in the registry.
	#[error("element or component `{name}` is not registered; register the type before parsing markup that uses it")]
	UnknownTag {
		/// The unresolved tag name.
		name: String,
	},

	/// Two distinct types were registered under the same name.
	#[error("a different element or component is already registered as `{name}`")]
	DuplicateTypeName {
		/// The contested name.
		name: String,
	},

	/// Lowering did not reach a concrete node within the configured depth.
	#[error("`{type_name}` did not lower to a concrete element within {depth} render steps")]
	RenderChain {
		/// Declared name of the node lowering started from.
		type_name: &'static str,
		/// The depth limit that was exceeded.
		depth: usize,
	},

	/// Embedded markup could not be parsed.
	#[error("malformed markup at byte {position}: {message}")]
	Markup {
		/// Byte offset into the parsed text.
		position: usize,
		/// What went wrong.
		message: String,
	},

	/// A node type declaration is unusable (bad name or tag).
	#[error("invalid declaration of `{name}`: {reason}")]
	InvalidDeclaration {
		/// Declared name of the node type.
		name: &'static str,
		/// Why the declaration was rejected.
		reason: String,
	},

	/// Inline formatting was requested for a node with non-primitive children.
	#[error("only nodes with primitive children can be formatted inline, `{type_name}` contains {child}")]
	NotInlinable {
		/// Declared name of the node type.
		type_name: &'static str,
		/// Description of the offending child.
		child: String,
	},

	/// Render settings could not be loaded.
	#[error("invalid render settings: {0}")]
	Config(#[from] toml::de::Error),
}

/// Result type for weft-core operations
pub type Result<T> = std::result::Result<T, Error>;
