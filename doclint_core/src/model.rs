use std::fmt;
use std::path::Path;
use std::path::PathBuf;

use derive_more::Deref;
use serde::Deserialize;
use serde::Serialize;

/// A single documented argument, taken verbatim from an inline-code bullet
/// beneath a member heading (e.g. `name` or `options.timeout`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
	pub name: String,
}

impl Argument {
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}
}

impl fmt::Display for Argument {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)
	}
}

/// The name every constructor member is recorded under.
pub const CONSTRUCTOR_NAME: &str = "constructor";

/// A documented class member.
///
/// Only constructors and methods carry arguments and a return flag.
/// Properties and events are identified by name alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[non_exhaustive]
pub enum Member {
	/// `new Foo(a, b)`
	#[serde(rename_all = "camelCase")]
	Constructor {
		name: String,
		args: Vec<Argument>,
		has_return: bool,
	},
	/// `Foo.bar(a, b)`
	#[serde(rename_all = "camelCase")]
	Method {
		name: String,
		args: Vec<Argument>,
		has_return: bool,
	},
	/// `Foo.baz`
	Property { name: String },
	/// `event: 'qux'`
	Event { name: String },
}

impl Member {
	pub fn constructor(args: Vec<Argument>, has_return: bool) -> Self {
		Self::Constructor {
			name: CONSTRUCTOR_NAME.to_string(),
			args,
			has_return,
		}
	}

	pub fn method(name: impl Into<String>, args: Vec<Argument>, has_return: bool) -> Self {
		Self::Method {
			name: name.into(),
			args,
			has_return,
		}
	}

	pub fn property(name: impl Into<String>) -> Self {
		Self::Property { name: name.into() }
	}

	pub fn event(name: impl Into<String>) -> Self {
		Self::Event { name: name.into() }
	}

	pub fn name(&self) -> &str {
		match self {
			Self::Constructor { name, .. }
			| Self::Method { name, .. }
			| Self::Property { name }
			| Self::Event { name } => name,
		}
	}

	/// Arguments in documentation order. Empty for properties and events.
	pub fn args(&self) -> &[Argument] {
		match self {
			Self::Constructor { args, .. } | Self::Method { args, .. } => args,
			Self::Property { .. } | Self::Event { .. } => &[],
		}
	}

	/// Whether a `returns:` bullet was documented for this member.
	pub fn has_return(&self) -> bool {
		match self {
			Self::Constructor { has_return, .. } | Self::Method { has_return, .. } => *has_return,
			Self::Property { .. } | Self::Event { .. } => false,
		}
	}

	pub fn kind(&self) -> MemberKind {
		match self {
			Self::Constructor { .. } => MemberKind::Constructor,
			Self::Method { .. } => MemberKind::Method,
			Self::Property { .. } => MemberKind::Property,
			Self::Event { .. } => MemberKind::Event,
		}
	}

	/// Render the member back into the heading form it was documented with,
	/// using `class_name` as the receiver.
	pub fn signature(&self, class_name: &str) -> String {
		let joined = || {
			self.args()
				.iter()
				.map(ToString::to_string)
				.collect::<Vec<_>>()
				.join(", ")
		};

		match self {
			Self::Constructor { .. } => format!("new {class_name}({})", joined()),
			Self::Method { name, .. } => format!("{class_name}.{name}({})", joined()),
			Self::Property { name } => format!("{class_name}.{name}"),
			Self::Event { name } => format!("event: '{name}'"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MemberKind {
	Constructor,
	Method,
	Property,
	Event,
}

impl fmt::Display for MemberKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Constructor => write!(f, "constructor"),
			Self::Method => write!(f, "method"),
			Self::Property => write!(f, "property"),
			Self::Event => write!(f, "event"),
		}
	}
}

/// A documented class and its members in heading order.
///
/// Members are never de-duplicated, and the same class name may appear more
/// than once in a [`Documentation`] when it is documented across several
/// files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
	pub name: String,
	pub members: Vec<Member>,
}

impl Class {
	pub fn new(name: impl Into<String>, members: Vec<Member>) -> Self {
		Self {
			name: name.into(),
			members,
		}
	}

	pub fn member(&self, name: &str) -> Option<&Member> {
		self.members.iter().find(|member| member.name() == name)
	}
}

impl fmt::Display for Class {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "class: {}", self.name)?;
		for member in &self.members {
			writeln!(f, "  {}", member.signature(&self.name))?;
		}

		Ok(())
	}
}

/// The merged outline of every scanned file. Classes appear in file
/// iteration order, then in document order within each file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, Serialize, Deserialize)]
pub struct Documentation {
	pub classes: Vec<Class>,
}

impl Documentation {
	pub fn new(classes: Vec<Class>) -> Self {
		Self { classes }
	}

	/// The first class with exactly this name.
	pub fn class(&self, name: &str) -> Option<&Class> {
		self.classes.iter().find(|class| class.name == name)
	}

	/// Append another outline after this one, preserving order.
	pub fn extend(&mut self, classes: impl IntoIterator<Item = Class>) {
		self.classes.extend(classes);
	}
}

impl fmt::Display for Documentation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (index, class) in self.classes.iter().enumerate() {
			if index > 0 {
				writeln!(f)?;
			}
			write!(f, "{class}")?;
		}

		Ok(())
	}
}

/// A content-level problem found while linting. Lint errors never abort a
/// run; they are collected in order and reported together.
///
/// The displayed form is exactly [`message`](LintError::message). The file is
/// attached by the corpus driver once the error is merged into a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintError {
	pub file: Option<PathBuf>,
	pub message: String,
}

impl LintError {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			file: None,
			message: message.into(),
		}
	}

	#[must_use]
	pub fn in_file(mut self, file: &Path) -> Self {
		self.file = Some(file.to_path_buf());
		self
	}
}

impl fmt::Display for LintError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.message)
	}
}
