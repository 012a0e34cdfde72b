//! # weft-core
//!
//! Typed HTML element and component trees for server-side rendering.
//!
//! ## Overview
//!
//! - [`NodeType`]: `'static` declaration of an element (maps to a tag) or a
//!   component (renders to another node), with attribute and child contracts
//! - [`Node`]: a validated instance of a node type
//! - [`resolve()`]: lowers components until a concrete element is reached
//! - [`Node::to_html`]: compact HTML; `Display`: an indented debugging form
//! - [`parse()`]: turns trusted markup with embedded tags back into children,
//!   looking tag names up in a [`Registry`]
//!
//! ## Example
//!
//! ```ignore
//! use weft_core::{AttrSchema, AttrSpec, AttrType, Node, NodeType, Result, register_type};
//!
//! const GREETING_ATTRS: &[AttrSpec] = &[AttrSpec::required("name", AttrType::Str)];
//!
//! pub static GREETING: NodeType = NodeType::component("Greeting", render_greeting)
//!     .with_attrs(AttrSchema::new(&[GREETING_ATTRS]));
//!
//! fn render_greeting(node: &Node) -> Result<Node> {
//!     let name = node.attrs().get_str("name").unwrap_or_default();
//!     PARAGRAPH.node().child(format!("Hello, {}!", name)).build()
//! }
//!
//! register_type!(GREETING);
//!
//! let html = GREETING.node().attr("name", "Ann").build()?.to_html()?;
//! assert_eq!(html, "<p>Hello, Ann!</p>");
//! ```

pub mod attrs;
pub mod child;
pub mod error;
pub mod escape;
pub mod node;
pub mod node_type;
pub mod options;
pub mod parser;
pub mod registry;
pub mod resolve;
pub mod schema;
pub mod serialize;
pub mod validate;

// Used by `register_type!`
#[doc(hidden)]
pub use inventory;

pub use attrs::{AttrSchema, AttrSpec, AttrType, AttrValue, Attrs};
pub use child::{Child, Safe};
pub use error::{Error, Result, ShapeError};
pub use node::{Node, NodeBuilder};
pub use node_type::{NodeKind, NodeType, RenderFn};
pub use options::{DEFAULT_MAX_RENDER_DEPTH, RenderOptions};
pub use parser::parse;
pub use registry::{Registry, TypeRegistration};
pub use resolve::{Resolved, resolve, resolve_with};
pub use schema::{Arity, ChildKind, ChildSchema, Slot};
