//! Attribute groups shared by the element catalog.
//!
//! Every element accepts [`GLOBAL`]; element-specific groups are combined with
//! it into the schemas below.

use weft_core::{AttrSchema, AttrSpec, AttrType};

/// Global attributes, plus the `data-*`, `aria-*`, `hx-*` and `on*` families.
pub const GLOBAL: &[AttrSpec] = &[
	AttrSpec::optional("id", AttrType::Str),
	AttrSpec::optional("class", AttrType::Str),
	AttrSpec::optional("style", AttrType::Any),
	AttrSpec::optional("title", AttrType::Str),
	AttrSpec::optional("lang", AttrType::Str),
	AttrSpec::optional("dir", AttrType::Str),
	AttrSpec::optional("hidden", AttrType::Bool),
	AttrSpec::optional("tabindex", AttrType::Int),
	AttrSpec::optional("role", AttrType::Str),
	AttrSpec::optional("accesskey", AttrType::Str),
	AttrSpec::optional("contenteditable", AttrType::Str),
	AttrSpec::optional("draggable", AttrType::Bool),
	AttrSpec::optional("spellcheck", AttrType::Bool),
	AttrSpec::optional("translate", AttrType::Str),
	AttrSpec::prefixed("data-", AttrType::Any),
	AttrSpec::prefixed("aria-", AttrType::Any),
	AttrSpec::prefixed("hx-", AttrType::Any),
	AttrSpec::prefixed("on", AttrType::Str),
];

pub const ANCHOR: &[AttrSpec] = &[
	AttrSpec::optional("href", AttrType::Str),
	AttrSpec::optional("target", AttrType::Str),
	AttrSpec::optional("rel", AttrType::Str),
	AttrSpec::optional("download", AttrType::Any),
	AttrSpec::optional("hreflang", AttrType::Str),
	AttrSpec::optional("type", AttrType::Str),
	AttrSpec::optional("referrerpolicy", AttrType::Str),
];

pub const BLOCKQUOTE: &[AttrSpec] = &[AttrSpec::optional("cite", AttrType::Str)];

pub const IMG: &[AttrSpec] = &[
	AttrSpec::required("src", AttrType::Str),
	AttrSpec::optional("alt", AttrType::Str),
	AttrSpec::optional("width", AttrType::Number),
	AttrSpec::optional("height", AttrType::Number),
	AttrSpec::optional("loading", AttrType::Str),
	AttrSpec::optional("decoding", AttrType::Str),
	AttrSpec::optional("srcset", AttrType::Str),
	AttrSpec::optional("sizes", AttrType::Str),
];

pub const META: &[AttrSpec] = &[
	AttrSpec::optional("charset", AttrType::Str),
	AttrSpec::optional("name", AttrType::Str),
	AttrSpec::optional("content", AttrType::Str),
	AttrSpec::optional("http-equiv", AttrType::Str),
	AttrSpec::optional("property", AttrType::Str),
];

pub const LINK: &[AttrSpec] = &[
	AttrSpec::optional("rel", AttrType::Str),
	AttrSpec::optional("href", AttrType::Str),
	AttrSpec::optional("type", AttrType::Str),
	AttrSpec::optional("media", AttrType::Str),
	AttrSpec::optional("sizes", AttrType::Str),
	AttrSpec::optional("as", AttrType::Str),
	AttrSpec::optional("crossorigin", AttrType::Str),
	AttrSpec::optional("integrity", AttrType::Str),
];

pub const SCRIPT: &[AttrSpec] = &[
	AttrSpec::optional("src", AttrType::Str),
	AttrSpec::optional("type", AttrType::Str),
	AttrSpec::optional("async", AttrType::Bool),
	AttrSpec::optional("defer", AttrType::Bool),
	AttrSpec::optional("nomodule", AttrType::Bool),
	AttrSpec::optional("crossorigin", AttrType::Str),
	AttrSpec::optional("integrity", AttrType::Str),
	AttrSpec::optional("nonce", AttrType::Str),
];

pub const STYLE: &[AttrSpec] = &[
	AttrSpec::optional("media", AttrType::Str),
	AttrSpec::optional("nonce", AttrType::Str),
];

pub const ORDERED_LIST: &[AttrSpec] = &[
	AttrSpec::optional("start", AttrType::Int),
	AttrSpec::optional("reversed", AttrType::Bool),
	AttrSpec::optional("type", AttrType::Str),
];

pub const LIST_ITEM: &[AttrSpec] = &[AttrSpec::optional("value", AttrType::Int)];

pub const TABLE_CELL: &[AttrSpec] = &[
	AttrSpec::optional("colspan", AttrType::Int),
	AttrSpec::optional("rowspan", AttrType::Int),
	AttrSpec::optional("headers", AttrType::Str),
];

pub const TABLE_HEADER: &[AttrSpec] = &[
	AttrSpec::optional("scope", AttrType::Str),
	AttrSpec::optional("abbr", AttrType::Str),
];

pub const FORM: &[AttrSpec] = &[
	AttrSpec::optional("action", AttrType::Str),
	AttrSpec::optional("method", AttrType::Str),
	AttrSpec::optional("enctype", AttrType::Str),
	AttrSpec::optional("target", AttrType::Str),
	AttrSpec::optional("name", AttrType::Str),
	AttrSpec::optional("novalidate", AttrType::Bool),
	AttrSpec::optional("autocomplete", AttrType::Str),
];

pub const LABEL: &[AttrSpec] = &[
	AttrSpec::optional("for", AttrType::Str),
	AttrSpec::optional("form", AttrType::Str),
];

/// Attributes shared by form controls.
pub const CONTROL: &[AttrSpec] = &[
	AttrSpec::optional("name", AttrType::Str),
	AttrSpec::optional("form", AttrType::Str),
	AttrSpec::optional("disabled", AttrType::Bool),
	AttrSpec::optional("autofocus", AttrType::Bool),
	AttrSpec::optional("required", AttrType::Bool),
];

pub const INPUT: &[AttrSpec] = &[
	AttrSpec::optional("type", AttrType::Str),
	AttrSpec::optional("value", AttrType::Any),
	AttrSpec::optional("placeholder", AttrType::Str),
	AttrSpec::optional("readonly", AttrType::Bool),
	AttrSpec::optional("checked", AttrType::Bool),
	AttrSpec::optional("multiple", AttrType::Bool),
	AttrSpec::optional("min", AttrType::Any),
	AttrSpec::optional("max", AttrType::Any),
	AttrSpec::optional("step", AttrType::Any),
	AttrSpec::optional("minlength", AttrType::Int),
	AttrSpec::optional("maxlength", AttrType::Int),
	AttrSpec::optional("size", AttrType::Int),
	AttrSpec::optional("pattern", AttrType::Str),
	AttrSpec::optional("autocomplete", AttrType::Str),
	AttrSpec::optional("list", AttrType::Str),
	AttrSpec::optional("accept", AttrType::Str),
];

pub const TEXTAREA: &[AttrSpec] = &[
	AttrSpec::optional("placeholder", AttrType::Str),
	AttrSpec::optional("readonly", AttrType::Bool),
	AttrSpec::optional("rows", AttrType::Int),
	AttrSpec::optional("cols", AttrType::Int),
	AttrSpec::optional("minlength", AttrType::Int),
	AttrSpec::optional("maxlength", AttrType::Int),
	AttrSpec::optional("wrap", AttrType::Str),
];

pub const BUTTON: &[AttrSpec] = &[
	AttrSpec::optional("type", AttrType::Str),
	AttrSpec::optional("value", AttrType::Any),
];

pub const SELECT: &[AttrSpec] = &[
	AttrSpec::optional("multiple", AttrType::Bool),
	AttrSpec::optional("size", AttrType::Int),
];

pub const OPTION: &[AttrSpec] = &[
	AttrSpec::optional("value", AttrType::Any),
	AttrSpec::optional("selected", AttrType::Bool),
	AttrSpec::optional("disabled", AttrType::Bool),
	AttrSpec::optional("label", AttrType::Str),
];

pub const GLOBAL_SCHEMA: AttrSchema = AttrSchema::new(&[GLOBAL]);
pub const ANCHOR_SCHEMA: AttrSchema = AttrSchema::new(&[GLOBAL, ANCHOR]);
pub const BLOCKQUOTE_SCHEMA: AttrSchema = AttrSchema::new(&[GLOBAL, BLOCKQUOTE]);
pub const IMG_SCHEMA: AttrSchema = AttrSchema::new(&[GLOBAL, IMG]);
pub const META_SCHEMA: AttrSchema = AttrSchema::new(&[GLOBAL, META]);
pub const LINK_SCHEMA: AttrSchema = AttrSchema::new(&[GLOBAL, LINK]);
pub const SCRIPT_SCHEMA: AttrSchema = AttrSchema::new(&[GLOBAL, SCRIPT]);
pub const STYLE_SCHEMA: AttrSchema = AttrSchema::new(&[GLOBAL, STYLE]);
pub const ORDERED_LIST_SCHEMA: AttrSchema = AttrSchema::new(&[GLOBAL, ORDERED_LIST]);
pub const LIST_ITEM_SCHEMA: AttrSchema = AttrSchema::new(&[GLOBAL, LIST_ITEM]);
pub const TABLE_CELL_SCHEMA: AttrSchema = AttrSchema::new(&[GLOBAL, TABLE_CELL]);
pub const TABLE_HEADER_SCHEMA: AttrSchema = AttrSchema::new(&[GLOBAL, TABLE_CELL, TABLE_HEADER]);
pub const FORM_SCHEMA: AttrSchema = AttrSchema::new(&[GLOBAL, FORM]);
pub const LABEL_SCHEMA: AttrSchema = AttrSchema::new(&[GLOBAL, LABEL]);
pub const INPUT_SCHEMA: AttrSchema = AttrSchema::new(&[GLOBAL, CONTROL, INPUT]);
pub const TEXTAREA_SCHEMA: AttrSchema = AttrSchema::new(&[GLOBAL, CONTROL, TEXTAREA]);
pub const BUTTON_SCHEMA: AttrSchema = AttrSchema::new(&[GLOBAL, CONTROL, BUTTON]);
pub const SELECT_SCHEMA: AttrSchema = AttrSchema::new(&[GLOBAL, CONTROL, SELECT]);
pub const OPTION_SCHEMA: AttrSchema = AttrSchema::new(&[GLOBAL, OPTION]);
