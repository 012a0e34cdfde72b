//! Document structure and metadata.

use weft_core::{ChildKind, ChildSchema, NodeType, Slot};

use crate::attrs;

const DOCUMENT: &[Slot] = &[
	Slot::optional(&[ChildKind::Type("head")]),
	Slot::one(&[ChildKind::Type("body")]),
];
const METADATA: &[Slot] = &[Slot::many(&[
	ChildKind::Type("title"),
	ChildKind::Type("meta"),
	ChildKind::Type("link"),
	ChildKind::Type("style"),
	ChildKind::Type("script"),
])];
const ONE_TEXT: &[Slot] = &[Slot::one(&[ChildKind::Text])];
const TEXT_RUNS: &[Slot] = &[Slot::many(&[ChildKind::Text])];
const OPTIONAL_TEXT: &[Slot] = &[Slot::optional(&[ChildKind::Text])];

elements! {
	/// `<html>`: an optional `<head>` followed by a `<body>`.
	html => HTML = NodeType::element("html")
		.with_attrs(attrs::GLOBAL_SCHEMA)
		.with_children(ChildSchema::Slots(DOCUMENT))
		.always_pair();
	/// `<head>`: metadata elements only.
	head => HEAD = NodeType::element("head")
		.with_attrs(attrs::GLOBAL_SCHEMA)
		.with_children(ChildSchema::Slots(METADATA))
		.always_pair();
	/// `<title>`: exactly one string.
	title => TITLE = NodeType::element("title")
		.with_attrs(attrs::GLOBAL_SCHEMA)
		.with_children(ChildSchema::Slots(ONE_TEXT))
		.always_pair();
	body => BODY = NodeType::element("body")
		.with_attrs(attrs::GLOBAL_SCHEMA)
		.always_pair();
	meta => META = NodeType::element("meta")
		.with_attrs(attrs::META_SCHEMA)
		.with_children(ChildSchema::Empty);
	link => LINK = NodeType::element("link")
		.with_attrs(attrs::LINK_SCHEMA)
		.with_children(ChildSchema::Empty);
	/// `<style>`: stylesheet text. Pass [`Safe`](weft_core::Safe) strings to
	/// keep selectors such as `a > b` unescaped.
	style => STYLE = NodeType::element("style")
		.with_attrs(attrs::STYLE_SCHEMA)
		.with_children(ChildSchema::Slots(TEXT_RUNS))
		.always_pair();
	/// `<script>`: inline code or an external `src`.
	script => SCRIPT = NodeType::element("script")
		.with_attrs(attrs::SCRIPT_SCHEMA)
		.with_children(ChildSchema::Slots(OPTIONAL_TEXT))
		.always_pair();
}
