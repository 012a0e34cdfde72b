//! Node Type Registry
//!
//! The mini-parser turns tag names found in trusted markup back into node
//! types by looking them up here.
//!
//! ## Architecture
//!
//! 1. Each node type declaration is submitted with [`register_type!`](crate::register_type),
//!    which expands to an `inventory::submit!` call
//! 2. On first use, [`Registry::global()`] collects all submissions
//! 3. Types can also be added at runtime with [`Registry::register`]
//!
//! ## Example
//!
//! ```ignore
//! use weft_core::{NodeType, Registry, register_type};
//!
//! pub static CARD: NodeType = NodeType::component("Card", render_card);
//! register_type!(CARD);
//!
//! assert!(Registry::global().contains("Card"));
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::node_type::NodeType;

/// Node type registration entry.
///
/// Used with `inventory::collect!` to gather all types submitted via
/// [`register_type!`](crate::register_type).
pub struct TypeRegistration {
	node_type: &'static NodeType,
}

impl TypeRegistration {
	/// Wraps a declaration for submission.
	pub const fn new(node_type: &'static NodeType) -> Self {
		Self { node_type }
	}

	/// The submitted declaration.
	pub fn node_type(&self) -> &'static NodeType {
		self.node_type
	}
}

// Collect all TypeRegistration submissions
inventory::collect!(TypeRegistration);

/// Submits node type declarations to the global registry.
///
/// ```ignore
/// pub static DIV: NodeType = NodeType::element("div").always_pair();
/// pub static SPAN: NodeType = NodeType::element("span").always_pair();
///
/// register_type!(DIV, SPAN);
/// ```
#[macro_export]
macro_rules! register_type {
	($($node_type:path),+ $(,)?) => {
		$(
			$crate::inventory::submit! {
				$crate::registry::TypeRegistration::new(&$node_type)
			}
		)+
	};
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Maps declared type names to node types.
///
/// Registration takes a write lock; lookups share a read lock.
#[derive(Debug, Default)]
pub struct Registry {
	types: RwLock<HashMap<&'static str, &'static NodeType>>,
}

impl Registry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// The process-wide registry, populated from [`register_type!`](crate::register_type)
	/// submissions on first access.
	///
	/// Submissions that fail registration are logged and skipped. When two
	/// declarations contest a name, which one is kept depends on submission
	/// iteration order and is unspecified; only the error log is guaranteed.
	pub fn global() -> &'static Registry {
		GLOBAL.get_or_init(Self::from_submitted)
	}

	/// Builds a fresh registry from all [`register_type!`](crate::register_type) submissions.
	pub fn from_submitted() -> Self {
		let registry = Self::new();
		for registration in inventory::iter::<TypeRegistration> {
			if let Err(err) = registry.register(registration.node_type()) {
				tracing::error!(
					type_name = registration.node_type().name(),
					error = %err,
					"skipping node type submission"
				);
			}
		}
		tracing::debug!(count = registry.len(), "collected node type submissions");
		registry
	}

	/// Registers a node type under its declared name.
	///
	/// Registering the same declaration twice is a no-op.
	///
	/// # Errors
	///
	/// [`Error::InvalidDeclaration`] if the declaration is unusable,
	/// [`Error::DuplicateTypeName`] if a different declaration already uses
	/// the name.
	pub fn register(&self, node_type: &'static NodeType) -> Result<()> {
		node_type.check()?;
		let mut types = self.types.write();
		match types.get(node_type.name()) {
			Some(existing) if std::ptr::eq(*existing, node_type) => Ok(()),
			Some(_) => Err(Error::DuplicateTypeName {
				name: node_type.name().to_string(),
			}),
			None => {
				types.insert(node_type.name(), node_type);
				tracing::debug!(type_name = node_type.name(), "registered node type");
				Ok(())
			}
		}
	}

	/// Looks up a type by declared name.
	pub fn lookup(&self, name: &str) -> Option<&'static NodeType> {
		self.types.read().get(name).copied()
	}

	/// Returns whether `name` is registered.
	pub fn contains(&self, name: &str) -> bool {
		self.types.read().contains_key(name)
	}

	/// Number of registered types.
	pub fn len(&self) -> usize {
		self.types.read().len()
	}

	/// Whether no types are registered.
	pub fn is_empty(&self) -> bool {
		self.types.read().is_empty()
	}

	/// Registered names, sorted.
	pub fn names(&self) -> Vec<&'static str> {
		let mut names: Vec<_> = self.types.read().keys().copied().collect();
		names.sort_unstable();
		names
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::node::Node;
	use rstest::rstest;
	use serial_test::serial;

	fn render_badge(node: &Node) -> Result<Node> {
		Ok(node.clone())
	}

	static BADGE: NodeType = NodeType::component("RegistryBadge", render_badge);
	static OTHER_BADGE: NodeType = NodeType::concrete("RegistryBadge", "span");
	static PANEL: NodeType = NodeType::concrete("RegistryPanel", "section").always_pair();
	static INVALID: NodeType = NodeType::concrete("bad name", "div");

	crate::register_type!(PANEL);

	#[rstest]
	fn test_register_and_lookup() {
		let registry = Registry::new();
		assert!(registry.is_empty());
		registry.register(&BADGE).unwrap();
		assert!(registry.contains("RegistryBadge"));
		assert!(std::ptr::eq(registry.lookup("RegistryBadge").unwrap(), &BADGE));
		assert_eq!(registry.lookup("Missing").map(NodeType::name), None);
		assert_eq!(registry.names(), vec!["RegistryBadge"]);
	}

	#[rstest]
	fn test_reregistering_same_declaration_is_noop() {
		let registry = Registry::new();
		registry.register(&BADGE).unwrap();
		registry.register(&BADGE).unwrap();
		assert_eq!(registry.len(), 1);
	}

	#[rstest]
	fn test_distinct_declaration_with_same_name_is_rejected() {
		let registry = Registry::new();
		registry.register(&BADGE).unwrap();
		assert!(matches!(
			registry.register(&OTHER_BADGE),
			Err(Error::DuplicateTypeName { name }) if name == "RegistryBadge"
		));
		assert!(std::ptr::eq(registry.lookup("RegistryBadge").unwrap(), &BADGE));
	}

	#[rstest]
	fn test_invalid_declaration_is_rejected() {
		let registry = Registry::new();
		assert!(matches!(
			registry.register(&INVALID),
			Err(Error::InvalidDeclaration { .. })
		));
		assert!(registry.is_empty());
	}

	#[rstest]
	#[serial(global_registry)]
	fn test_global_registry_collects_submissions() {
		let global = Registry::global();
		assert!(std::ptr::eq(global.lookup("RegistryPanel").unwrap(), &PANEL));
		assert!(global.register(&PANEL).is_ok());
	}

	#[rstest]
	#[serial(global_registry)]
	fn test_from_submitted_is_independent_of_global() {
		let fresh = Registry::from_submitted();
		assert!(fresh.contains("RegistryPanel"));
		fresh.register(&BADGE).unwrap();
		assert!(!Registry::global().contains("RegistryBadge"));
	}
}
