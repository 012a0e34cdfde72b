//! Render settings.

use serde::Deserialize;

use crate::error::Result;

/// Default limit on composite lowering steps.
pub const DEFAULT_MAX_RENDER_DEPTH: usize = 64;

/// Options for resolving and serializing node trees.
///
/// Settings can be built in code or loaded from TOML:
///
/// ```toml
/// max_render_depth = 16
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
	/// Maximum number of render steps a composite may take before it must be
	/// concrete. During serialization the steps of a node and all of its
	/// ancestors share this budget. Exceeding it fails with
	/// [`Error::RenderChain`](crate::Error::RenderChain).
	pub max_render_depth: usize,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			max_render_depth: DEFAULT_MAX_RENDER_DEPTH,
		}
	}
}

impl RenderOptions {
	/// Create new options with default values.
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the maximum number of render steps.
	pub fn max_render_depth(mut self, depth: usize) -> Self {
		self.max_render_depth = depth;
		self
	}

	/// Load options from a TOML document. Missing keys keep their defaults.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		Ok(toml::from_str(source)?)
	}
}
