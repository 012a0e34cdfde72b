//! Sectioning and grouping content.

use weft_core::NodeType;

use crate::attrs;

elements! {
	div => DIV = NodeType::element("div").with_attrs(attrs::GLOBAL_SCHEMA).always_pair();
	section => SECTION = NodeType::element("section").with_attrs(attrs::GLOBAL_SCHEMA).always_pair();
	article => ARTICLE = NodeType::element("article").with_attrs(attrs::GLOBAL_SCHEMA).always_pair();
	aside => ASIDE = NodeType::element("aside").with_attrs(attrs::GLOBAL_SCHEMA).always_pair();
	header => HEADER = NodeType::element("header").with_attrs(attrs::GLOBAL_SCHEMA).always_pair();
	footer => FOOTER = NodeType::element("footer").with_attrs(attrs::GLOBAL_SCHEMA).always_pair();
	main => MAIN = NodeType::element("main").with_attrs(attrs::GLOBAL_SCHEMA).always_pair();
	nav => NAV = NodeType::element("nav").with_attrs(attrs::GLOBAL_SCHEMA).always_pair();
	h1 => H1 = NodeType::element("h1").with_attrs(attrs::GLOBAL_SCHEMA).always_pair();
	h2 => H2 = NodeType::element("h2").with_attrs(attrs::GLOBAL_SCHEMA).always_pair();
	h3 => H3 = NodeType::element("h3").with_attrs(attrs::GLOBAL_SCHEMA).always_pair();
	h4 => H4 = NodeType::element("h4").with_attrs(attrs::GLOBAL_SCHEMA).always_pair();
	h5 => H5 = NodeType::element("h5").with_attrs(attrs::GLOBAL_SCHEMA).always_pair();
	h6 => H6 = NodeType::element("h6").with_attrs(attrs::GLOBAL_SCHEMA).always_pair();
}
