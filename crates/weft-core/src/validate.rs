//! Shape validation of attributes and children against a node type.

use crate::attrs::{AttrValue, Attrs};
use crate::child::Child;
use crate::error::ShapeError;
use crate::node_type::NodeType;
use crate::schema::{ChildSchema, Slot, describe_bounds};

/// Checks `attrs` against the attribute contract of `ty`.
///
/// Keys are checked in order, then required keys. The first violation wins.
pub fn validate_attrs(ty: &NodeType, attrs: &Attrs) -> Result<(), ShapeError> {
	for (key, value) in attrs.iter() {
		validate_attr(ty, key, value)?;
	}
	for spec in ty.attrs().required() {
		if !attrs.contains_key(spec.name) {
			return Err(ShapeError::MissingAttribute {
				type_name: ty.name(),
				key: spec.name,
			});
		}
	}
	Ok(())
}

/// Checks a single attribute against the attribute contract of `ty`.
pub fn validate_attr(ty: &NodeType, key: &str, value: &AttrValue) -> Result<(), ShapeError> {
	let schema = ty.attrs();
	match schema.spec(key) {
		Some(spec) if !spec.ty.accepts(value) => Err(ShapeError::AttributeType {
			type_name: ty.name(),
			key: key.to_string(),
			expected: spec.ty,
			found: value.kind_name(),
		}),
		Some(_) => Ok(()),
		None if schema.is_open() => Ok(()),
		None => Err(ShapeError::UnknownAttribute {
			type_name: ty.name(),
			key: key.to_string(),
		}),
	}
}

/// Checks `children` against the child contract of `ty`.
pub fn validate_children(ty: &NodeType, children: &[Child]) -> Result<(), ShapeError> {
	match *ty.children() {
		ChildSchema::Any => Ok(()),
		ChildSchema::Empty if children.is_empty() => Ok(()),
		ChildSchema::Empty => Err(ShapeError::NoChildrenAllowed {
			type_name: ty.name(),
			found: children.len(),
		}),
		ChildSchema::Slots(slots) => {
			let (min, max) = ty.children().bounds();
			let found = children.len();
			if found < min || max.is_some_and(|max| found > max) {
				return Err(ShapeError::ChildCount {
					type_name: ty.name(),
					expected: describe_bounds(min, max),
					found,
				});
			}
			match_slots(slots, children).map_err(|(position, slot)| ShapeError::ChildKind {
				type_name: ty.name(),
				position,
				expected: slot.describe(),
				found: children
					.get(position)
					.map_or_else(|| "nothing".to_string(), Child::describe),
			})
		}
	}
}

/// Assigns children to slots in order, trying every split of repeating slots.
///
/// Walks the set of positions reachable after each slot. On failure returns
/// the furthest position any assignment reached and the first slot that could
/// not take the child there.
fn match_slots(slots: &'static [Slot], children: &[Child]) -> Result<(), (usize, &'static Slot)> {
	let total = children.len();
	let mut reachable = vec![false; total + 1];
	reachable[0] = true;
	let mut furthest: Option<(usize, &'static Slot)> = None;
	let mut stall = |pos: usize, slot: &'static Slot| {
		if furthest.is_none_or(|(best, _)| pos > best) {
			furthest = Some((pos, slot));
		}
	};

	for slot in slots {
		let mut next = vec![false; total + 1];
		for start in (0..=total).filter(|&pos| reachable[pos]) {
			let mut pos = start;
			loop {
				let taken = pos - start;
				if taken >= slot.arity.min() {
					next[pos] = true;
				}
				if pos == total || slot.arity.max().is_some_and(|max| taken >= max) {
					break;
				}
				if !slot.accepts(&children[pos]) {
					stall(pos, slot);
					break;
				}
				pos += 1;
			}
		}
		reachable = next;
	}

	if reachable[total] {
		return Ok(());
	}
	if let Some(last) = slots.last() {
		for pos in (0..total).filter(|&pos| reachable[pos]) {
			stall(pos, last);
		}
	}
	match furthest {
		Some(failure) => Err(failure),
		None => Ok(()),
	}
}
