//! Lists.

use weft_core::{ChildKind, ChildSchema, NodeType, Slot};

use crate::attrs;

const ITEMS: &[Slot] = &[Slot::many(&[ChildKind::Type("li")])];

elements! {
	/// `<ul>`: `<li>` children only.
	ul => UL = NodeType::element("ul")
		.with_attrs(attrs::GLOBAL_SCHEMA)
		.with_children(ChildSchema::Slots(ITEMS))
		.always_pair();
	/// `<ol>`: `<li>` children only.
	ol => OL = NodeType::element("ol")
		.with_attrs(attrs::ORDERED_LIST_SCHEMA)
		.with_children(ChildSchema::Slots(ITEMS))
		.always_pair();
	li => LI = NodeType::element("li").with_attrs(attrs::LIST_ITEM_SCHEMA).always_pair();
}
