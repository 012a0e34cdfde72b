//! Forms.

use weft_core::{ChildKind, ChildSchema, NodeType, Slot};

use crate::attrs;

const OPTIONAL_PRIMITIVE: &[Slot] = &[Slot::optional(&[ChildKind::Primitive])];
const OPTIONS: &[Slot] = &[Slot::many(&[ChildKind::Type("option")])];

elements! {
	form => FORM = NodeType::element("form").with_attrs(attrs::FORM_SCHEMA).always_pair();
	label => LABEL = NodeType::element("label").with_attrs(attrs::LABEL_SCHEMA).always_pair();
	input => INPUT = NodeType::element("input")
		.with_attrs(attrs::INPUT_SCHEMA)
		.with_children(ChildSchema::Empty);
	/// `<textarea>`: optional initial content.
	textarea => TEXTAREA = NodeType::element("textarea")
		.with_attrs(attrs::TEXTAREA_SCHEMA)
		.with_children(ChildSchema::Slots(OPTIONAL_PRIMITIVE))
		.always_pair();
	button => BUTTON = NodeType::element("button").with_attrs(attrs::BUTTON_SCHEMA).always_pair();
	/// `<select>`: `<option>` children only.
	select => SELECT = NodeType::element("select")
		.with_attrs(attrs::SELECT_SCHEMA)
		.with_children(ChildSchema::Slots(OPTIONS))
		.always_pair();
	option => OPTION = NodeType::element("option")
		.with_attrs(attrs::OPTION_SCHEMA)
		.with_children(ChildSchema::Slots(OPTIONAL_PRIMITIVE))
		.always_pair();
}
