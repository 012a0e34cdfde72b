//! Element declarations, grouped the way the HTML standard groups them.
//!
//! Each element has a `static` [`NodeType`](weft_core::NodeType) named after
//! its tag in upper case and a builder function named after the tag itself.
//! All of them are registered globally under their tag name.

/// Declares element statics and their builder functions, and registers them.
macro_rules! elements {
	($(
		$(#[$meta:meta])*
		$builder:ident => $name:ident = $decl:expr;
	)+) => {
		$(
			$(#[$meta])*
			pub static $name: weft_core::NodeType = $decl;

			#[doc = concat!("Starts a node of type [`", stringify!($name), "`].")]
			pub fn $builder() -> weft_core::NodeBuilder {
				$name.node()
			}
		)+

		weft_core::register_type!($($name),+);
	};
}

pub mod document;
pub mod embedded;
pub mod forms;
pub mod lists;
pub mod sections;
pub mod tables;
pub mod text;

pub use document::*;
pub use embedded::*;
pub use forms::*;
pub use lists::*;
pub use sections::*;
pub use tables::*;
pub use text::*;
