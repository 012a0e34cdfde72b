//! Serializers.
//!
//! - [`write_html`]: compact HTML. Composites are resolved first, text is
//!   escaped, trusted strings are emitted verbatim. Render steps count
//!   against one budget along each path from the root.
//! - [`write_pretty`]: the debugging form behind `Display`. Uses type names,
//!   two-space indentation and raw child text.
//! - [`write_compact`]: the pretty form's vocabulary on a single line, with
//!   text escaped.

use crate::attrs::{AttrValue, Attrs};
use crate::child::Child;
use crate::error::Result;
use crate::escape::{escape_attr, escape_text};
use crate::node::Node;
use crate::options::RenderOptions;
use crate::resolve::resolve_within;

const INDENT: &str = "  ";

/// Appends ` key="value"` pairs. `true` booleans are bare keys, `false` is omitted.
fn write_attrs(attrs: &Attrs, output: &mut String) {
	for (key, value) in attrs.iter() {
		match value {
			AttrValue::Bool(false) => continue,
			AttrValue::Bool(true) => {
				output.push(' ');
				output.push_str(key);
			}
			value => {
				output.push(' ');
				output.push_str(key);
				output.push_str("=\"");
				output.push_str(&escape_attr(&value.to_string()));
				output.push('"');
			}
		}
	}
}

fn write_primitive(child: &Child, escape: bool, output: &mut String) {
	match child {
		Child::Text(text) if escape => output.push_str(&escape_text(text)),
		Child::Text(text) => output.push_str(text),
		Child::Safe(safe) => output.push_str(safe.as_str()),
		other => output.push_str(&other.to_string()),
	}
}

/// Appends the compact HTML form of `node`.
pub fn write_html(node: &Node, options: &RenderOptions, output: &mut String) -> Result<()> {
	write_html_within(node, options.max_render_depth, options, output)
}

fn write_html_within(
	node: &Node,
	budget: usize,
	options: &RenderOptions,
	output: &mut String,
) -> Result<()> {
	let resolved = resolve_within(node, budget, options)?;
	let budget = budget - resolved.steps();
	let tag = resolved.tag();
	let node = resolved.node();

	output.push('<');
	output.push_str(tag);
	write_attrs(node.attrs(), output);

	if node.is_empty() && !resolved.always_pair() {
		output.push_str(" />");
		return Ok(());
	}

	output.push('>');
	for child in node {
		match child {
			Child::Node(inner) => write_html_within(inner, budget, options, output)?,
			primitive => write_primitive(primitive, true, output),
		}
	}
	output.push_str("</");
	output.push_str(tag);
	output.push('>');
	Ok(())
}

/// Appends the pretty form of `node` at indentation `level`.
pub fn write_pretty(node: &Node, level: usize, output: &mut String) {
	let indent = INDENT.repeat(level);
	let name = node.type_name();

	output.push_str(&indent);
	output.push('<');
	output.push_str(name);
	write_attrs(node.attrs(), output);

	if node.is_empty() {
		output.push_str(" />");
		return;
	}

	output.push('>');
	if node.is_simple() && !node.has_attributes() {
		write_primitive(&node.children()[0], false, output);
	} else {
		for child in node {
			output.push('\n');
			match child {
				Child::Node(inner) => write_pretty(inner, level + 1, output),
				primitive => {
					output.push_str(&indent);
					output.push_str(INDENT);
					write_primitive(primitive, false, output);
				}
			}
		}
		output.push('\n');
		output.push_str(&indent);
	}
	output.push_str("</");
	output.push_str(name);
	output.push('>');
}

/// Appends the single-line type-name form of `node`.
pub fn write_compact(node: &Node, output: &mut String) {
	let name = node.type_name();
	output.push('<');
	output.push_str(name);
	write_attrs(node.attrs(), output);

	if node.is_empty() {
		output.push_str(" />");
		return;
	}

	output.push('>');
	for child in node {
		match child {
			Child::Node(inner) => write_compact(inner, output),
			primitive => write_primitive(primitive, true, output),
		}
	}
	output.push_str("</");
	output.push_str(name);
	output.push('>');
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Safe;
	use crate::attrs::{AttrSchema, AttrSpec, AttrType};
	use crate::node_type::NodeType;
	use crate::registry::Registry;
	use rstest::rstest;

	const COMMON: &[AttrSpec] = &[
		AttrSpec::optional("class", AttrType::Str),
		AttrSpec::optional("hidden", AttrType::Bool),
		AttrSpec::optional("style", AttrType::Any),
		AttrSpec::optional("title", AttrType::Str),
	];
	const ATTRS: AttrSchema = AttrSchema::new(&[COMMON]);

	static DIV: NodeType = NodeType::element("div").with_attrs(ATTRS).always_pair();
	static P: NodeType = NodeType::element("p").with_attrs(ATTRS).always_pair();
	static BR: NodeType = NodeType::element("br").with_attrs(ATTRS);
	static CARD: NodeType = NodeType::component("Card", render_card).with_attrs(ATTRS);
	static FRAME: NodeType = NodeType::component("Frame", render_frame);

	fn render_card(node: &Node) -> Result<Node> {
		Node::from_parts(&DIV, node.children().to_vec(), node.attrs_for(&DIV))
	}

	fn render_frame(node: &Node) -> Result<Node> {
		Node::from_parts(&DIV, vec![node.clone().into()], Attrs::new())
	}

	fn build(ty: &'static NodeType, children: Vec<Child>, attrs: &[(&str, AttrValue)]) -> Node {
		Node::new_in(ty, children, attrs.iter().cloned().collect(), &Registry::new()).unwrap()
	}

	#[rstest]
	fn test_html_escapes_text_and_attributes() {
		let node = build(
			&P,
			vec!["<script>".into()],
			&[("title", AttrValue::from("a \"quoted\" & <odd> value"))],
		);
		assert_eq!(
			node.to_html().unwrap(),
			"<p title=\"a &quot;quoted&quot; &amp; &lt;odd&gt; value\">&lt;script&gt;</p>"
		);
	}

	#[rstest]
	fn test_html_keeps_trusted_text() {
		let node = build(&P, vec!["a".into(), Safe::new("<i>b</i>").into()], &[]);
		assert_eq!(node.to_html().unwrap(), "<p>a<i>b</i></p>");
	}

	#[rstest]
	#[case(true, "<br hidden />")]
	#[case(false, "<br />")]
	fn test_boolean_attribute_shorthand(#[case] hidden: bool, #[case] expected: &str) {
		let node = build(&BR, vec![], &[("hidden", AttrValue::from(hidden))]);
		assert_eq!(node.to_html().unwrap(), expected);
	}

	#[rstest]
	#[case(&BR, "<br />")]
	#[case(&DIV, "<div></div>")]
	fn test_empty_element_form(#[case] ty: &'static NodeType, #[case] expected: &str) {
		assert_eq!(build(ty, vec![], &[]).to_html().unwrap(), expected);
	}

	#[rstest]
	fn test_map_attribute_uses_style_syntax() {
		let style = AttrValue::from([("color", "red"), ("margin", "0")]);
		let node = build(&DIV, vec![], &[("style", style)]);
		assert_eq!(
			node.to_html().unwrap(),
			"<div style=\"color:red;margin:0\"></div>"
		);
	}

	#[rstest]
	fn test_primitive_children() {
		let node = build(&P, vec![1.into(), 2.5.into(), true.into()], &[]);
		assert_eq!(node.to_html().unwrap(), "<p>12.5true</p>");
	}

	#[rstest]
	fn test_whole_float_drops_fraction() {
		let node = build(&P, vec![2.0.into()], &[("style", AttrValue::from(2.0))]);
		assert_eq!(node.to_html().unwrap(), "<p style=\"2\">2</p>");
	}

	#[rstest]
	fn test_html_resolves_nested_components() {
		let card = build(&CARD, vec!["x".into()], &[("class", AttrValue::from("card"))]);
		let outer = build(&DIV, vec![card.into()], &[]);
		assert_eq!(
			outer.to_html().unwrap(),
			"<div><div class=\"card\">x</div></div>"
		);
	}

	#[rstest]
	fn test_component_embedding_itself_is_a_render_chain_error() {
		let frame = build(&FRAME, vec![], &[]);
		assert!(matches!(
			frame.to_html(),
			Err(crate::Error::RenderChain { type_name: "Frame", depth: 64 })
		));
	}

	#[rstest]
	#[case(3, true)]
	#[case(2, false)]
	fn test_render_budget_is_shared_along_a_path(#[case] depth: usize, #[case] fits: bool) {
		// three nested cards, one render step each
		let inner = build(&CARD, vec!["x".into()], &[]);
		let middle = build(&CARD, vec![inner.into()], &[]);
		let outer = build(&CARD, vec![middle.into()], &[]);
		let options = RenderOptions::default().max_render_depth(depth);
		assert_eq!(outer.to_html_with(&options).is_ok(), fits);
	}

	#[rstest]
	fn test_pretty_simple_node_is_inlined() {
		let node = build(&P, vec!["Hi & bye".into()], &[]);
		assert_eq!(node.to_string(), "<p>Hi & bye</p>");
	}

	#[rstest]
	fn test_pretty_simple_node_with_attributes() {
		let node = build(&P, vec!["Hi".into()], &[("class", AttrValue::from("x"))]);
		assert_eq!(node.to_string(), "<p class=\"x\">\n  Hi\n</p>");
	}

	#[rstest]
	fn test_pretty_nested_layout() {
		let inner = build(&P, vec!["a".into()], &[]);
		let card = build(&CARD, vec![build(&BR, vec![], &[]).into()], &[]);
		let outer = build(&DIV, vec![inner.into(), "b".into(), card.into()], &[]);
		assert_eq!(
			outer.to_string(),
			"<div>\n  <p>a</p>\n  b\n  <Card>\n    <br />\n  </Card>\n</div>"
		);
	}

	#[rstest]
	fn test_compact_uses_type_names() {
		let card = build(&CARD, vec!["<x>".into()], &[("class", AttrValue::from("c"))]);
		let outer = build(&DIV, vec![card.into(), build(&BR, vec![], &[]).into()], &[]);
		assert_eq!(
			outer.to_compact_string(),
			"<div><Card class=\"c\">&lt;x&gt;</Card><br /></div>"
		);
	}
}
