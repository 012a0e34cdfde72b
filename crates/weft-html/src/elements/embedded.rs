//! Embedded content.

use weft_core::{ChildSchema, NodeType};

use crate::attrs;

elements! {
	/// `<img>`: requires `src`.
	img => IMG = NodeType::element("img")
		.with_attrs(attrs::IMG_SCHEMA)
		.with_children(ChildSchema::Empty);
}
