//! Attribute values, attribute mappings and attribute schemas.

use std::collections::BTreeMap;
use std::fmt;

/// The value of a single attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
	/// A string value.
	Str(String),
	/// A boolean value; `true` serializes as a bare attribute, `false` is omitted.
	Bool(bool),
	/// An integer value.
	Int(i64),
	/// A floating point value, rendered with `Display`, so `2.0` renders as `2`.
	Float(f64),
	/// A structured value such as an inline style declaration map.
	Map(BTreeMap<String, AttrValue>),
}

impl AttrValue {
	/// Returns the variant name, used in error messages.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Self::Str(_) => "string",
			Self::Bool(_) => "boolean",
			Self::Int(_) => "integer",
			Self::Float(_) => "float",
			Self::Map(_) => "map",
		}
	}

	/// Returns the string slice if this is a string value.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the boolean if this is a boolean value.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(b) => Some(*b),
			_ => None,
		}
	}
}

/// Formats the value as it appears inside a quoted attribute, before escaping.
///
/// Maps render as `key:value` pairs separated by `;`, which is the inline
/// style syntax.
impl fmt::Display for AttrValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Str(s) => f.write_str(s),
			Self::Bool(b) => write!(f, "{}", b),
			Self::Int(n) => write!(f, "{}", n),
			Self::Float(n) => write!(f, "{}", n),
			Self::Map(map) => {
				for (i, (key, value)) in map.iter().enumerate() {
					if i > 0 {
						f.write_str(";")?;
					}
					write!(f, "{}:{}", key, value)?;
				}
				Ok(())
			}
		}
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		Self::Str(value.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

impl From<&String> for AttrValue {
	fn from(value: &String) -> Self {
		Self::Str(value.clone())
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for AttrValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<i32> for AttrValue {
	fn from(value: i32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<u32> for AttrValue {
	fn from(value: u32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<f64> for AttrValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<BTreeMap<String, AttrValue>> for AttrValue {
	fn from(value: BTreeMap<String, AttrValue>) -> Self {
		Self::Map(value)
	}
}

impl<K: Into<String>, V: Into<AttrValue>, const N: usize> From<[(K, V); N]> for AttrValue {
	fn from(pairs: [(K, V); N]) -> Self {
		Self::Map(
			pairs
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		)
	}
}

/// The attributes of a node.
///
/// Keys are unique; inserting an existing key replaces its value in place.
/// Iteration follows insertion order, which is also the serialization order.
/// Equality ignores order since the mapping itself is unordered.
#[derive(Debug, Clone, Default)]
pub struct Attrs(Vec<(String, AttrValue)>);

impl Attrs {
	/// Creates an empty attribute mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts an attribute, returning the previous value for the key.
	pub fn insert(
		&mut self,
		key: impl Into<String>,
		value: impl Into<AttrValue>,
	) -> Option<AttrValue> {
		let key = key.into();
		let value = value.into();
		match self.0.iter_mut().find(|(k, _)| *k == key) {
			Some((_, slot)) => Some(std::mem::replace(slot, value)),
			None => {
				self.0.push((key, value));
				None
			}
		}
	}

	/// Returns the value for `key`.
	pub fn get(&self, key: &str) -> Option<&AttrValue> {
		self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	/// Returns the value for `key` if it is a string.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.get(key).and_then(AttrValue::as_str)
	}

	/// Returns whether `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// Removes `key`, returning its value.
	pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
		let index = self.0.iter().position(|(k, _)| k == key)?;
		Some(self.0.remove(index).1)
	}

	/// Returns the number of attributes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns whether there are no attributes.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over `(key, value)` pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Iterates over the keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(|(k, _)| k.as_str())
	}
}

impl PartialEq for Attrs {
	fn eq(&self, other: &Self) -> bool {
		self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
	}
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attrs {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attrs = Attrs::new();
		for (k, v) in iter {
			attrs.insert(k, v);
		}
		attrs
	}
}

impl<K: Into<String>, V: Into<AttrValue>> Extend<(K, V)> for Attrs {
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		for (k, v) in iter {
			self.insert(k, v);
		}
	}
}

impl IntoIterator for Attrs {
	type Item = (String, AttrValue);
	type IntoIter = std::vec::IntoIter<(String, AttrValue)>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

/// The declared type of an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrType {
	/// A string.
	Str,
	/// A boolean.
	Bool,
	/// An integer.
	Int,
	/// A float; integers are accepted too.
	Float,
	/// An integer or a float.
	Number,
	/// A structured map value.
	Map,
	/// Any value.
	Any,
}

impl AttrType {
	/// Returns whether `value` satisfies this declared type.
	pub fn accepts(self, value: &AttrValue) -> bool {
		matches!(
			(self, value),
			(Self::Any, _)
				| (Self::Str, AttrValue::Str(_))
				| (Self::Bool, AttrValue::Bool(_))
				| (Self::Int, AttrValue::Int(_))
				| (Self::Float | Self::Number, AttrValue::Int(_) | AttrValue::Float(_))
				| (Self::Map, AttrValue::Map(_))
		)
	}

	/// Converts a textual value into this type.
	///
	/// Used by the mini-parser, whose attribute values are always text.
	/// Returns `None` when the text does not spell a value of this type;
	/// `Str` and `Any` keep the text as a string. `Map` reads the `key:value`
	/// pairs written by `Display`, with string values.
	pub fn coerce(self, text: &str) -> Option<AttrValue> {
		match self {
			Self::Str | Self::Any => Some(AttrValue::Str(text.to_string())),
			Self::Map => parse_map(text).map(AttrValue::Map),
			Self::Bool => match text {
				"true" | "" => Some(AttrValue::Bool(true)),
				"false" => Some(AttrValue::Bool(false)),
				_ => None,
			},
			Self::Int => text.parse().ok().map(AttrValue::Int),
			Self::Float => text.parse().ok().map(AttrValue::Float),
			Self::Number => text
				.parse()
				.ok()
				.map(AttrValue::Int)
				.or_else(|| text.parse().ok().map(AttrValue::Float)),
		}
	}
}

fn parse_map(text: &str) -> Option<BTreeMap<String, AttrValue>> {
	text.split(';')
		.map(str::trim)
		.filter(|entry| !entry.is_empty())
		.map(|entry| {
			let (key, value) = entry.split_once(':')?;
			let key = key.trim();
			if key.is_empty() {
				return None;
			}
			Some((key.to_string(), AttrValue::from(value.trim())))
		})
		.collect()
}

impl fmt::Display for AttrType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Str => "a string",
			Self::Bool => "a boolean",
			Self::Int => "an integer",
			Self::Float => "a float",
			Self::Number => "a number",
			Self::Map => "a map",
			Self::Any => "any value",
		})
	}
}

/// Declaration of one attribute (or a family of attributes sharing a prefix).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrSpec {
	/// Attribute name, or the prefix for prefix specs.
	pub name: &'static str,
	/// Declared value type.
	pub ty: AttrType,
	/// Whether the attribute must be present.
	pub required: bool,
	/// Whether `name` is a prefix (e.g. `data-`).
	pub prefix: bool,
}

impl AttrSpec {
	/// Declares an optional attribute.
	pub const fn optional(name: &'static str, ty: AttrType) -> Self {
		Self {
			name,
			ty,
			required: false,
			prefix: false,
		}
	}

	/// Declares a required attribute.
	pub const fn required(name: &'static str, ty: AttrType) -> Self {
		Self {
			name,
			ty,
			required: true,
			prefix: false,
		}
	}

	/// Declares every attribute starting with `prefix`.
	pub const fn prefixed(prefix: &'static str, ty: AttrType) -> Self {
		Self {
			name: prefix,
			ty,
			required: false,
			prefix: true,
		}
	}

	fn matches(&self, key: &str) -> bool {
		if self.prefix {
			key.len() > self.name.len() && key.starts_with(self.name)
		} else {
			key == self.name
		}
	}
}

/// The attribute contract of a node type.
///
/// A schema is a list of attribute groups, so element types can share a
/// common group (global attributes) and add their own.
#[derive(Debug, Clone, Copy)]
pub struct AttrSchema {
	groups: &'static [&'static [AttrSpec]],
	open: bool,
}

impl AttrSchema {
	/// A schema accepting no attributes.
	pub const EMPTY: AttrSchema = AttrSchema {
		groups: &[],
		open: false,
	};

	/// A schema made of the given attribute groups.
	pub const fn new(groups: &'static [&'static [AttrSpec]]) -> Self {
		Self {
			groups,
			open: false,
		}
	}

	/// A schema that accepts any key; declared keys are still type checked.
	pub const fn open(groups: &'static [&'static [AttrSpec]]) -> Self {
		Self { groups, open: true }
	}

	/// Returns whether undeclared keys are accepted.
	pub fn is_open(&self) -> bool {
		self.open
	}

	/// Finds the spec governing `key`. Exact names win over prefixes.
	pub fn spec(&self, key: &str) -> Option<&'static AttrSpec> {
		let groups = self.groups;
		let specs = || groups.iter().copied().flat_map(|group| group.iter());
		specs()
			.find(|spec| !spec.prefix && spec.name == key)
			.or_else(|| specs().find(|spec| spec.prefix && spec.matches(key)))
	}

	/// Returns whether `key` is accepted by this schema.
	pub fn declares(&self, key: &str) -> bool {
		self.open || self.spec(key).is_some()
	}

	/// Iterates over the required attribute specs.
	pub fn required(&self) -> impl Iterator<Item = &'static AttrSpec> {
		self.groups
			.iter()
			.copied()
			.flat_map(|group| group.iter())
			.filter(|spec| spec.required && !spec.prefix)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	const GROUP: &[AttrSpec] = &[
		AttrSpec::required("name", AttrType::Str),
		AttrSpec::optional("age", AttrType::Int),
		AttrSpec::optional("ratio", AttrType::Float),
		AttrSpec::prefixed("data-", AttrType::Any),
	];
	const SCHEMA: AttrSchema = AttrSchema::new(&[GROUP]);

	#[rstest]
	fn test_insert_replaces_existing_key() {
		let mut attrs = Attrs::new();
		assert_eq!(attrs.insert("id", "a"), None);
		assert_eq!(attrs.insert("class", "b"), None);
		assert_eq!(attrs.insert("id", "c"), Some(AttrValue::from("a")));
		assert_eq!(attrs.len(), 2);
		assert_eq!(attrs.keys().collect::<Vec<_>>(), vec!["id", "class"]);
		assert_eq!(attrs.get_str("id"), Some("c"));
	}

	#[rstest]
	fn test_equality_ignores_order() {
		let a: Attrs = [("x", 1), ("y", 2)].into_iter().collect();
		let b: Attrs = [("y", 2), ("x", 1)].into_iter().collect();
		assert_eq!(a, b);
	}

	#[rstest]
	fn test_remove() {
		let mut attrs: Attrs = [("x", true)].into_iter().collect();
		assert_eq!(attrs.remove("x"), Some(AttrValue::Bool(true)));
		assert!(attrs.is_empty());
		assert_eq!(attrs.remove("x"), None);
	}

	#[rstest]
	fn test_map_display_uses_style_syntax() {
		let value = AttrValue::from([("color", "red"), ("margin", "0")]);
		assert_eq!(value.to_string(), "color:red;margin:0");
	}

	#[rstest]
	#[case(AttrType::Str, AttrValue::from("x"), true)]
	#[case(AttrType::Str, AttrValue::from(1), false)]
	#[case(AttrType::Float, AttrValue::from(1), true)]
	#[case(AttrType::Int, AttrValue::from(1.5), false)]
	#[case(AttrType::Number, AttrValue::from(1.5), true)]
	#[case(AttrType::Bool, AttrValue::from("true"), false)]
	#[case(AttrType::Any, AttrValue::from(false), true)]
	fn test_attr_type_accepts(
		#[case] ty: AttrType,
		#[case] value: AttrValue,
		#[case] expected: bool,
	) {
		assert_eq!(ty.accepts(&value), expected);
	}

	#[rstest]
	#[case(AttrType::Int, "42", Some(AttrValue::Int(42)))]
	#[case(AttrType::Int, "4.2", None)]
	#[case(AttrType::Number, "4.5", Some(AttrValue::Float(4.5)))]
	#[case(AttrType::Bool, "false", Some(AttrValue::Bool(false)))]
	#[case(AttrType::Bool, "maybe", None)]
	#[case(AttrType::Str, "42", Some(AttrValue::from("42")))]
	#[case(
		AttrType::Map,
		"color:red; margin : 0 auto;",
		Some(AttrValue::from([("color", "red"), ("margin", "0 auto")]))
	)]
	#[case(AttrType::Map, "background:url(http://x/a.png)", Some(AttrValue::from([("background", "url(http://x/a.png)")])))]
	#[case(AttrType::Map, "", Some(AttrValue::Map(BTreeMap::new())))]
	#[case(AttrType::Map, "red", None)]
	#[case(AttrType::Map, ":red", None)]
	fn test_attr_type_coerce(
		#[case] ty: AttrType,
		#[case] text: &str,
		#[case] expected: Option<AttrValue>,
	) {
		assert_eq!(ty.coerce(text), expected);
	}

	#[rstest]
	fn test_schema_lookup() {
		assert_eq!(SCHEMA.spec("age").map(|s| s.ty), Some(AttrType::Int));
		assert!(SCHEMA.declares("data-id"));
		assert!(!SCHEMA.declares("data-"));
		assert!(!SCHEMA.declares("href"));
		assert_eq!(
			SCHEMA.required().map(|s| s.name).collect::<Vec<_>>(),
			vec!["name"]
		);
	}

	#[rstest]
	fn test_open_schema_declares_everything() {
		let schema = AttrSchema::open(&[GROUP]);
		assert!(schema.declares("anything"));
		assert!(!AttrSchema::EMPTY.declares("anything"));
	}
}
