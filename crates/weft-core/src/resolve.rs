//! Render resolution: lowering composites to concrete nodes.

use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::node::Node;
use crate::node_type::NodeKind;
use crate::options::RenderOptions;

/// A node that is known to be concrete, with its tag.
#[derive(Debug, Clone)]
pub struct Resolved<'a> {
	node: Cow<'a, Node>,
	tag: &'static str,
	always_pair: bool,
	steps: usize,
}

impl<'a> Resolved<'a> {
	/// The concrete node.
	pub fn node(&self) -> &Node {
		&self.node
	}

	/// Its HTML tag.
	pub fn tag(&self) -> &'static str {
		self.tag
	}

	/// Whether it serializes as a tag pair even when empty.
	pub fn always_pair(&self) -> bool {
		self.always_pair
	}

	/// Number of render steps taken.
	pub fn steps(&self) -> usize {
		self.steps
	}

	/// Whether resolution had to render (the node was a composite).
	pub fn is_rendered(&self) -> bool {
		matches!(self.node, Cow::Owned(_))
	}

	/// Takes the concrete node.
	pub fn into_node(self) -> Node {
		self.node.into_owned()
	}
}

/// Lowers `node` until it is concrete, with default options.
///
/// A concrete node resolves to itself without copying, so resolving twice
/// yields the same node.
pub fn resolve(node: &Node) -> Result<Resolved<'_>> {
	resolve_with(node, &RenderOptions::default())
}

/// Lowers `node` until it is concrete.
///
/// # Errors
///
/// [`Error::RenderChain`] if the node is still composite after
/// `options.max_render_depth` render steps. Errors from render functions are
/// propagated unchanged.
pub fn resolve_with<'a>(node: &'a Node, options: &RenderOptions) -> Result<Resolved<'a>> {
	resolve_within(node, options.max_render_depth, options)
}

/// Lowers `node` in at most `budget` render steps.
///
/// Failures report `options.max_render_depth`, since `budget` is what remains
/// of it after the render steps of enclosing nodes.
pub(crate) fn resolve_within<'a>(
	node: &'a Node,
	budget: usize,
	options: &RenderOptions,
) -> Result<Resolved<'a>> {
	let mut current = Cow::Borrowed(node);
	let mut steps = 0;
	loop {
		match *current.node_type().kind() {
			NodeKind::Concrete { tag, always_pair } => {
				return Ok(Resolved {
					node: current,
					tag,
					always_pair,
					steps,
				});
			}
			NodeKind::Composite { render } => {
				if steps >= budget {
					tracing::warn!(
						type_name = node.type_name(),
						depth = options.max_render_depth,
						"render chain exceeded maximum depth"
					);
					return Err(Error::RenderChain {
						type_name: node.type_name(),
						depth: options.max_render_depth,
					});
				}
				let next = render(current.as_ref())?;
				tracing::trace!(
					from = current.type_name(),
					to = next.type_name(),
					step = steps + 1,
					"rendered composite"
				);
				current = Cow::Owned(next);
				steps += 1;
			}
		}
	}
}
