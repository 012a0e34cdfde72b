//! Tabular data.

use weft_core::{ChildKind, ChildSchema, NodeType, Slot};

use crate::attrs;

const TABLE_PARTS: &[Slot] = &[
	Slot::optional(&[ChildKind::Type("caption")]),
	Slot::many(&[
		ChildKind::Type("thead"),
		ChildKind::Type("tbody"),
		ChildKind::Type("tfoot"),
		ChildKind::Type("tr"),
	]),
];
const ROWS: &[Slot] = &[Slot::many(&[ChildKind::Type("tr")])];
const CELLS: &[Slot] = &[Slot::many(&[ChildKind::Type("th"), ChildKind::Type("td")])];

elements! {
	/// `<table>`: an optional `<caption>`, then row groups or rows.
	table => TABLE = NodeType::element("table")
		.with_attrs(attrs::GLOBAL_SCHEMA)
		.with_children(ChildSchema::Slots(TABLE_PARTS))
		.always_pair();
	caption => CAPTION = NodeType::element("caption").with_attrs(attrs::GLOBAL_SCHEMA).always_pair();
	thead => THEAD = NodeType::element("thead")
		.with_attrs(attrs::GLOBAL_SCHEMA)
		.with_children(ChildSchema::Slots(ROWS))
		.always_pair();
	tbody => TBODY = NodeType::element("tbody")
		.with_attrs(attrs::GLOBAL_SCHEMA)
		.with_children(ChildSchema::Slots(ROWS))
		.always_pair();
	tfoot => TFOOT = NodeType::element("tfoot")
		.with_attrs(attrs::GLOBAL_SCHEMA)
		.with_children(ChildSchema::Slots(ROWS))
		.always_pair();
	/// `<tr>`: `<th>` and `<td>` cells.
	tr => TR = NodeType::element("tr")
		.with_attrs(attrs::GLOBAL_SCHEMA)
		.with_children(ChildSchema::Slots(CELLS))
		.always_pair();
	th => TH = NodeType::element("th").with_attrs(attrs::TABLE_HEADER_SCHEMA).always_pair();
	td => TD = NodeType::element("td").with_attrs(attrs::TABLE_CELL_SCHEMA).always_pair();
}
