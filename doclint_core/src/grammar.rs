//! Classification of raw heading text into the fixed documentation grammar.
//!
//! Class headings are read as `class: Name`. Member headings are tried in
//! this order, first match wins:
//!
//! | shape       | heading                 |
//! | ----------- | ----------------------- |
//! | constructor | `new Class(params)`     |
//! | method      | `Class.method(params)`  |
//! | property    | `Class.property`        |
//! | event       | `event: 'name'`         |
//!
//! Anything else is [`Heading::Unrecognized`].

use std::sync::LazyLock;

use regex::Captures;
use regex::Regex;

static RE_CLASS: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^class: (\w+)$").expect("class heading regex is valid"));

static RE_CONSTRUCTOR: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^new (\w+)\((.*)\)$").expect("constructor heading regex is valid")
});

static RE_METHOD: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(\w+)\.(\w+)\((.*)\)$").expect("method heading regex is valid")
});

static RE_PROPERTY: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^(\w+)\.(\w+)$").expect("property heading regex is valid"));

static RE_EVENT: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^event: '(\w*)'$").expect("event heading regex is valid"));

/// The shape a heading was recognized as. Captures borrow from the heading
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading<'a> {
	/// `class: Name`
	Class { name: &'a str },
	/// `new Class(params)`
	Constructor { class: &'a str, params: &'a str },
	/// `Class.name(params)`
	Method {
		class: &'a str,
		name: &'a str,
		params: &'a str,
	},
	/// `Class.name`
	Property { class: &'a str, name: &'a str },
	/// `event: 'name'`
	Event { name: &'a str },
	/// None of the shapes above.
	Unrecognized,
}

impl<'a> Heading<'a> {
	/// The class name captured by a class or member heading. Events carry
	/// none.
	pub fn class_name(&self) -> Option<&'a str> {
		match *self {
			Self::Class { name } => Some(name),
			Self::Constructor { class, .. }
			| Self::Method { class, .. }
			| Self::Property { class, .. } => Some(class),
			Self::Event { .. } | Self::Unrecognized => None,
		}
	}

	/// The declared parameter list of a constructor or method heading.
	pub fn params(&self) -> Option<&'a str> {
		match *self {
			Self::Constructor { params, .. } | Self::Method { params, .. } => Some(params),
			_ => None,
		}
	}
}

/// Classify a depth-3 heading. Only `class: Name` is recognized.
pub fn classify_class_heading(text: &str) -> Heading<'_> {
	match RE_CLASS.captures(text) {
		Some(captures) => {
			Heading::Class {
				name: capture(&captures, 1),
			}
		}
		None => Heading::Unrecognized,
	}
}

/// Classify a depth-4 heading against the member shapes in precedence
/// order.
pub fn classify_member_heading(text: &str) -> Heading<'_> {
	if let Some(captures) = RE_CONSTRUCTOR.captures(text) {
		return Heading::Constructor {
			class: capture(&captures, 1),
			params: capture(&captures, 2),
		};
	}

	if let Some(captures) = RE_METHOD.captures(text) {
		return Heading::Method {
			class: capture(&captures, 1),
			name: capture(&captures, 2),
			params: capture(&captures, 3),
		};
	}

	if let Some(captures) = RE_PROPERTY.captures(text) {
		return Heading::Property {
			class: capture(&captures, 1),
			name: capture(&captures, 2),
		};
	}

	if let Some(captures) = RE_EVENT.captures(text) {
		return Heading::Event {
			name: capture(&captures, 1),
		};
	}

	Heading::Unrecognized
}

fn capture<'h>(captures: &Captures<'h>, index: usize) -> &'h str {
	captures.get(index).map_or("", |m| m.as_str())
}
