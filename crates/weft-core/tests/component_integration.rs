//! Component lowering and trusted markup integration tests
//!
//! Success Criteria:
//! 1. Components lower to concrete elements when serialized
//! 2. Trusted markup is expanded through the global registry
//! 3. Shape violations surface as errors from construction
//!
//! Test Categories:
//! - Happy Path: 4 tests
//! - Error Path: 4 tests
//! - Property-based: 1 test

use proptest::prelude::*;
use rstest::*;
use serial_test::serial;
use weft_core::{
	AttrSchema, AttrSpec, AttrType, Attrs, Child, ChildKind, ChildSchema, Error, Node, NodeType,
	Registry, RenderOptions, Result, Safe, ShapeError, Slot, register_type,
};

// ============================================================================
// Test Types
// ============================================================================

const TEXT_ATTRS: &[AttrSpec] = &[
	AttrSpec::optional("class", AttrType::Str),
	AttrSpec::optional("disabled", AttrType::Bool),
];
const PERSON_ATTRS: &[AttrSpec] = &[AttrSpec::optional("class", AttrType::Str)];
const PERSON_CHILDREN: &[Slot] = &[
	Slot::one(&[ChildKind::Text]),
	Slot::one(&[ChildKind::Int, ChildKind::Float]),
];

static PARAGRAPH: NodeType = NodeType::element("p")
	.with_attrs(AttrSchema::new(&[TEXT_ATTRS]))
	.always_pair();
static BOLD: NodeType = NodeType::element("b")
	.with_attrs(AttrSchema::new(&[TEXT_ATTRS]))
	.always_pair();
static INPUT: NodeType = NodeType::element("input")
	.with_attrs(AttrSchema::new(&[TEXT_ATTRS]))
	.with_children(ChildSchema::Empty);
static PERSON: NodeType = NodeType::component("Person", render_person)
	.with_attrs(AttrSchema::new(&[PERSON_ATTRS]))
	.with_children(ChildSchema::Slots(PERSON_CHILDREN));
static LOOPING: NodeType = NodeType::component("Looping", render_looping);

register_type!(PARAGRAPH, BOLD, INPUT, PERSON);

fn render_person(node: &Node) -> Result<Node> {
	let [name, age] = node.children() else {
		unreachable!("Person has exactly two children");
	};
	PARAGRAPH
		.node()
		.attrs(node.attrs_for(&PARAGRAPH))
		.child(Safe::new(format!(
			"{} is {} years old",
			BOLD.node().child(name.clone()).build()?.format_inline()?,
			age
		)))
		.build()
}

fn render_looping(node: &Node) -> Result<Node> {
	Ok(node.clone())
}

// ============================================================================
// Happy Path
// ============================================================================

#[rstest]
#[serial(global_registry)]
fn test_composite_lowers_through_render() {
	let person = PERSON
		.node()
		.attr("class", "person")
		.children(["Ann".into(), Child::from(31)])
		.build()
		.unwrap();

	assert_eq!(
		person.to_html().unwrap(),
		"<p class=\"person\"><b>Ann</b> is 31 years old</p>"
	);
}

#[rstest]
#[serial(global_registry)]
fn test_trusted_markup_scenario() {
	let children = weft_core::parse("Hello, how <b>are you</b>?", Registry::global()).unwrap();
	assert_eq!(children.len(), 3);
	assert_eq!(children[0], Child::Safe(Safe::new("Hello, how ")));
	assert_eq!(children[1].as_node().unwrap().tag_name(), Some("b"));
	assert_eq!(children[1].as_node().unwrap().text(), "are you");
	assert_eq!(children[2], Child::Safe(Safe::new("?")));

	let paragraph = Node::new(&PARAGRAPH, children, Attrs::new()).unwrap();
	assert_eq!(
		paragraph.to_html().unwrap(),
		"<p>Hello, how <b>are you</b>?</p>"
	);
}

#[rstest]
#[case(false, "<input />")]
#[case(true, "<input disabled />")]
#[serial(global_registry)]
fn test_void_element_and_boolean_attribute(#[case] disabled: bool, #[case] expected: &str) {
	let input = INPUT.node().attr("disabled", disabled).build().unwrap();
	assert_eq!(input.to_html().unwrap(), expected);
}

#[rstest]
#[serial(global_registry)]
fn test_pretty_form_shows_component_names() {
	let person = PERSON.node().child("Bo").child(2.5).build().unwrap();
	assert_eq!(person.to_string(), "<Person>\n  Bo\n  2.5\n</Person>");
}

// ============================================================================
// Error Path
// ============================================================================

#[rstest]
#[serial(global_registry)]
fn test_wrong_arity_is_a_shape_error() {
	let result = PERSON.node().children(["a", "b", "c"]).build();
	assert!(matches!(
		result,
		Err(Error::Shape(ShapeError::ChildCount { found: 3, .. }))
	));
}

#[rstest]
#[serial(global_registry)]
fn test_undeclared_attribute_is_a_shape_error() {
	let result = PERSON
		.node()
		.attr("href", "/")
		.child("a")
		.child(1)
		.build();
	assert!(matches!(
		result,
		Err(Error::Shape(ShapeError::UnknownAttribute { .. }))
	));
}

#[rstest]
#[serial(global_registry)]
fn test_unknown_tag_in_trusted_markup() {
	let result = PARAGRAPH.node().child(Safe::new("<Bogus>x</Bogus>")).build();
	assert!(matches!(result, Err(Error::UnknownTag { name }) if name == "Bogus"));
}

#[rstest]
#[serial(global_registry)]
fn test_endless_render_chain_is_bounded() {
	let node = LOOPING.node().build().unwrap();
	let options = RenderOptions::new().max_render_depth(5);
	assert!(matches!(
		node.to_html_with(&options),
		Err(Error::RenderChain { depth: 5, .. })
	));
}

// ============================================================================
// Property-based
// ============================================================================

proptest! {
	#[test]
	fn text_survives_html_escaping(text in any::<String>()) {
		let paragraph = PARAGRAPH.node().child(text.as_str()).build_in(&Registry::new()).unwrap();
		let html = paragraph.to_html().unwrap();
		let body = html
			.strip_prefix("<p>")
			.and_then(|rest| rest.strip_suffix("</p>"))
			.unwrap();
		prop_assert_eq!(html_unescape(body), text);
	}
}

fn html_unescape(s: &str) -> String {
	weft_core::escape::unescape(s).into_owned()
}
