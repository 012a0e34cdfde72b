//! Child contracts: slot descriptors matched positionally against children.

use std::fmt;

use crate::child::Child;

/// A child variant a slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKind {
	/// A string, trusted or not.
	Text,
	/// A boolean.
	Bool,
	/// An integer.
	Int,
	/// A float.
	Float,
	/// Any primitive.
	Primitive,
	/// Any node.
	Element,
	/// A node of the type registered under this name.
	Type(&'static str),
	/// Anything.
	Any,
}

impl ChildKind {
	/// Returns whether `child` is of this kind.
	pub fn accepts(self, child: &Child) -> bool {
		match (self, child) {
			(Self::Any, _) => true,
			(Self::Text, Child::Text(_) | Child::Safe(_)) => true,
			(Self::Bool, Child::Bool(_)) => true,
			(Self::Int, Child::Int(_)) => true,
			(Self::Float, Child::Float(_)) => true,
			(Self::Primitive, child) => child.is_primitive(),
			(Self::Element, Child::Node(_)) => true,
			(Self::Type(name), Child::Node(node)) => node.type_name() == name,
			_ => false,
		}
	}
}

impl fmt::Display for ChildKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text => f.write_str("a string"),
			Self::Bool => f.write_str("a boolean"),
			Self::Int => f.write_str("an integer"),
			Self::Float => f.write_str("a float"),
			Self::Primitive => f.write_str("a primitive"),
			Self::Element => f.write_str("an element"),
			Self::Type(name) => write!(f, "`{}`", name),
			Self::Any => f.write_str("anything"),
		}
	}
}

/// How many children a slot consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
	/// Exactly one.
	One,
	/// Zero or one.
	Optional,
	/// Zero or more.
	ZeroOrMore,
	/// One or more.
	OneOrMore,
}

impl Arity {
	pub(crate) fn min(self) -> usize {
		match self {
			Self::One | Self::OneOrMore => 1,
			Self::Optional | Self::ZeroOrMore => 0,
		}
	}

	pub(crate) fn max(self) -> Option<usize> {
		match self {
			Self::One | Self::Optional => Some(1),
			Self::ZeroOrMore | Self::OneOrMore => None,
		}
	}
}

/// One positional slot of a child contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
	/// Variants accepted in this slot.
	pub kinds: &'static [ChildKind],
	/// How many children the slot consumes.
	pub arity: Arity,
}

impl Slot {
	/// Exactly one child of the given kinds.
	pub const fn one(kinds: &'static [ChildKind]) -> Self {
		Self {
			kinds,
			arity: Arity::One,
		}
	}

	/// At most one child of the given kinds.
	pub const fn optional(kinds: &'static [ChildKind]) -> Self {
		Self {
			kinds,
			arity: Arity::Optional,
		}
	}

	/// Any number of children of the given kinds.
	pub const fn many(kinds: &'static [ChildKind]) -> Self {
		Self {
			kinds,
			arity: Arity::ZeroOrMore,
		}
	}

	/// At least one child of the given kinds.
	pub const fn at_least_one(kinds: &'static [ChildKind]) -> Self {
		Self {
			kinds,
			arity: Arity::OneOrMore,
		}
	}

	/// Returns whether `child` fits this slot.
	pub fn accepts(&self, child: &Child) -> bool {
		self.kinds.iter().any(|kind| kind.accepts(child))
	}

	/// Describes the accepted variants, e.g. "a string or an integer".
	pub fn describe(&self) -> String {
		let names: Vec<String> = self.kinds.iter().map(ToString::to_string).collect();
		match names.len() {
			0 => "nothing".to_string(),
			1 => names[0].clone(),
			n => format!("{} or {}", names[..n - 1].join(", "), names[n - 1]),
		}
	}
}

/// The child contract of a node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildSchema {
	/// Any number of children of any kind.
	Any,
	/// No children at all.
	Empty,
	/// A positional sequence of slots.
	Slots(&'static [Slot]),
}

impl ChildSchema {
	/// Minimum and maximum number of children (`None` means unbounded).
	pub fn bounds(&self) -> (usize, Option<usize>) {
		match self {
			Self::Any => (0, None),
			Self::Empty => (0, Some(0)),
			Self::Slots(slots) => slots.iter().fold((0, Some(0)), |(min, max), slot| {
				(
					min + slot.arity.min(),
					max.zip(slot.arity.max()).map(|(a, b)| a + b),
				)
			}),
		}
	}
}

/// Formats child-count bounds for error messages.
pub(crate) fn describe_bounds(min: usize, max: Option<usize>) -> String {
	match max {
		Some(max) if max == min => min.to_string(),
		Some(max) => format!("{} to {}", min, max),
		None if min == 0 => "any number of".to_string(),
		None => format!("{} or more", min),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	const TEXT_THEN_NUMBER: &[Slot] = &[
		Slot::one(&[ChildKind::Text]),
		Slot::one(&[ChildKind::Int, ChildKind::Float]),
	];
	const TEXT_THEN_ELEMENTS: &[Slot] = &[
		Slot::one(&[ChildKind::Text]),
		Slot::many(&[ChildKind::Element]),
	];
	const OPTIONAL_THEN_SOME: &[Slot] = &[
		Slot::optional(&[ChildKind::Text]),
		Slot::at_least_one(&[ChildKind::Any]),
	];

	#[rstest]
	#[case(ChildSchema::Any, (0, None))]
	#[case(ChildSchema::Empty, (0, Some(0)))]
	#[case(ChildSchema::Slots(TEXT_THEN_NUMBER), (2, Some(2)))]
	#[case(ChildSchema::Slots(TEXT_THEN_ELEMENTS), (1, None))]
	#[case(ChildSchema::Slots(OPTIONAL_THEN_SOME), (1, None))]
	fn test_bounds(#[case] schema: ChildSchema, #[case] expected: (usize, Option<usize>)) {
		assert_eq!(schema.bounds(), expected);
	}

	#[rstest]
	fn test_slot_describe() {
		assert_eq!(TEXT_THEN_NUMBER[0].describe(), "a string");
		assert_eq!(TEXT_THEN_NUMBER[1].describe(), "an integer or a float");
		const MIXED: Slot = Slot::one(&[ChildKind::Text, ChildKind::Bool, ChildKind::Type("li")]);
		assert_eq!(
			MIXED.describe(),
			"a string, a boolean or `li`"
		);
	}

	#[rstest]
	fn test_kind_accepts() {
		assert!(ChildKind::Text.accepts(&Child::from("x")));
		assert!(ChildKind::Text.accepts(&Child::from(crate::Safe::new("x"))));
		assert!(!ChildKind::Text.accepts(&Child::from(1)));
		assert!(ChildKind::Primitive.accepts(&Child::from(1.5)));
		assert!(!ChildKind::Element.accepts(&Child::from("x")));
	}

	#[rstest]
	#[case(2, Some(2), "2")]
	#[case(0, Some(1), "0 to 1")]
	#[case(0, None, "any number of")]
	#[case(1, None, "1 or more")]
	fn test_describe_bounds(#[case] min: usize, #[case] max: Option<usize>, #[case] expected: &str) {
		assert_eq!(describe_bounds(min, max), expected);
	}
}
