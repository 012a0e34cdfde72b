//! # Weft
//!
//! Typed HTML element and component trees, rendered on the server.
//!
//! Weft models a page as a tree of nodes. Each node is an instance of a
//! declared type: either an element that maps to an HTML tag, or a component
//! that renders to another node. Attributes and children are checked against
//! the type's declaration when a node is built, components are lowered to
//! elements on serialization, and text is escaped unless it is explicitly
//! trusted.
//!
//! ## Feature Flags
//!
//! - `html` (default) - the built-in element catalog (`div`, `p`, `a`, ...)
//!
//! ## Quick Example
//!
//! ```ignore
//! use weft::prelude::*;
//!
//! const GREETING_ATTRS: &[AttrSpec] = &[AttrSpec::required("name", AttrType::Str)];
//!
//! pub static GREETING: NodeType = NodeType::component("Greeting", render_greeting)
//!     .with_attrs(AttrSchema::new(&[GREETING_ATTRS]));
//!
//! fn render_greeting(node: &Node) -> Result<Node> {
//!     let name = node.attrs().get_str("name").unwrap_or_default();
//!     p().child(Safe::new(format!("Hello, {}!", b().child(name).build()?.format_inline()?)))
//!         .build()
//! }
//!
//! register_type!(GREETING);
//!
//! let page = div().child(GREETING.node().attr("name", "Ann").build()?).build()?;
//! assert_eq!(page.to_html()?, "<div><p>Hello, <b>Ann</b>!</p></div>");
//! ```

pub use weft_core::*;

#[cfg(feature = "html")]
pub use weft_html as html;

/// Common imports for declaring types and building trees.
pub mod prelude {
	pub use weft_core::{
		AttrSchema, AttrSpec, AttrType, AttrValue, Attrs, Child, ChildKind, ChildSchema, Error,
		Node, NodeBuilder, NodeType, Registry, RenderOptions, Result, Safe, ShapeError, Slot,
		register_type,
	};

	#[cfg(feature = "html")]
	pub use weft_html::elements::*;
}
