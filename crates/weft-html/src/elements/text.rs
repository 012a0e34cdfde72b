//! Text-level semantics.

use weft_core::{ChildSchema, NodeType};

use crate::attrs;

elements! {
	p => P = NodeType::element("p").with_attrs(attrs::GLOBAL_SCHEMA).always_pair();
	span => SPAN = NodeType::element("span").with_attrs(attrs::GLOBAL_SCHEMA).always_pair();
	a => A = NodeType::element("a").with_attrs(attrs::ANCHOR_SCHEMA).always_pair();
	b => B = NodeType::element("b").with_attrs(attrs::GLOBAL_SCHEMA).always_pair();
	i => I = NodeType::element("i").with_attrs(attrs::GLOBAL_SCHEMA).always_pair();
	em => EM = NodeType::element("em").with_attrs(attrs::GLOBAL_SCHEMA).always_pair();
	strong => STRONG = NodeType::element("strong").with_attrs(attrs::GLOBAL_SCHEMA).always_pair();
	small => SMALL = NodeType::element("small").with_attrs(attrs::GLOBAL_SCHEMA).always_pair();
	code => CODE = NodeType::element("code").with_attrs(attrs::GLOBAL_SCHEMA).always_pair();
	pre => PRE = NodeType::element("pre").with_attrs(attrs::GLOBAL_SCHEMA).always_pair();
	blockquote => BLOCKQUOTE = NodeType::element("blockquote")
		.with_attrs(attrs::BLOCKQUOTE_SCHEMA)
		.always_pair();
	br => BR = NodeType::element("br")
		.with_attrs(attrs::GLOBAL_SCHEMA)
		.with_children(ChildSchema::Empty);
	hr => HR = NodeType::element("hr")
		.with_attrs(attrs::GLOBAL_SCHEMA)
		.with_children(ChildSchema::Empty);
}
