//! # weft-html
//!
//! The built-in HTML element catalog for weft.
//!
//! Every element is a concrete [`NodeType`] registered in the global registry
//! under its tag name, so trusted markup such as `"<b>bold</b>"` resolves to
//! real nodes. Void elements (`br`, `img`, `input`, ...) take no children and
//! serialize self-closing; container elements always serialize as a tag pair.
//!
//! ## Example
//!
//! ```ignore
//! use weft_html::{a, li, ul};
//!
//! let nav = ul()
//!     .child(li().child(a().attr("href", "/").child("Home").build()?).build()?)
//!     .build()?;
//! assert_eq!(nav.to_html()?, "<ul><li><a href=\"/\">Home</a></li></ul>");
//! ```

pub mod attrs;
pub mod elements;

pub use elements::*;

use weft_core::{NodeType, Registry, Result};

/// Every element type in the catalog.
pub static ALL: &[&NodeType] = &[
	&HTML, &HEAD, &TITLE, &BODY, &META, &LINK, &STYLE, &SCRIPT, &DIV, &SECTION, &ARTICLE, &ASIDE,
	&HEADER, &FOOTER, &MAIN, &NAV, &H1, &H2, &H3, &H4, &H5, &H6, &P, &SPAN, &A, &B, &I, &EM,
	&STRONG, &SMALL, &CODE, &PRE, &BLOCKQUOTE, &BR, &HR, &IMG, &UL, &OL, &LI, &TABLE, &CAPTION,
	&THEAD, &TBODY, &TFOOT, &TR, &TH, &TD, &FORM, &LABEL, &INPUT, &TEXTAREA, &BUTTON, &SELECT,
	&OPTION,
];

/// Registers the whole catalog in a scoped registry.
///
/// The global registry already contains the catalog.
pub fn register_all(registry: &Registry) -> Result<()> {
	for &node_type in ALL {
		registry.register(node_type)?;
	}
	Ok(())
}
