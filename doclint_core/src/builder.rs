use std::mem;

use serde::Serialize;

use crate::Class;
use crate::Heading;
use crate::LintError;
use crate::Member;
use crate::RawClassBlock;
use crate::RawMemberBlock;
use crate::classify_class_heading;
use crate::classify_member_heading;
use crate::validate_member;

/// The classes and lint errors produced from a single markdown source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Outline {
	pub classes: Vec<Class>,
	pub errors: Vec<LintError>,
}

/// Accumulates validated members into the currently open class.
///
/// A class is only pushed to the output when the next class heading opens
/// or when [`finish`](DocumentationBuilder::finish) is called, so a class
/// with no members still produces an empty [`Class`].
#[derive(Debug, Default)]
pub struct DocumentationBuilder {
	current_class: Option<String>,
	current_members: Vec<Member>,
	classes: Vec<Class>,
	errors: Vec<LintError>,
}

impl DocumentationBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Flush the open class and start accumulating members for `name`.
	pub fn open_class(&mut self, name: impl Into<String>) {
		self.flush();
		let name = name.into();
		tracing::debug!(class = %name, "opened class");
		self.current_class = Some(name);
	}

	/// Classify and validate a member heading, appending the member to the
	/// open class when it is accepted. Unrecognized headings and members
	/// seen while no class is open are ignored.
	pub fn add_member(&mut self, raw: &RawMemberBlock) {
		let Some(class_name) = self.current_class.as_deref() else {
			tracing::trace!(heading = %raw.heading_text, "member outside of a class");
			return;
		};

		let heading = classify_member_heading(&raw.heading_text);
		if heading == Heading::Unrecognized {
			tracing::debug!(heading = %raw.heading_text, "skipping unrecognized member heading");
			return;
		}

		match validate_member(class_name, heading, raw, &mut self.errors) {
			Some(member) => {
				tracing::trace!(
					class = %class_name,
					member = %member.name(),
					kind = %member.kind(),
					"accepted member"
				);
				self.current_members.push(member);
			}
			None => {
				tracing::trace!(heading = %raw.heading_text, "rejected member");
			}
		}
	}

	/// Push the open class, if any, to the output and reset accumulation.
	pub fn flush(&mut self) {
		if let Some(name) = self.current_class.take() {
			let members = mem::take(&mut self.current_members);
			self.classes.push(Class::new(name, members));
		}
	}

	/// Name of the class currently accumulating members.
	pub fn current_class(&self) -> Option<&str> {
		self.current_class.as_deref()
	}

	/// Errors recorded so far.
	pub fn errors(&self) -> &[LintError] {
		&self.errors
	}

	pub fn finish(mut self) -> Outline {
		self.flush();

		Outline {
			classes: self.classes,
			errors: self.errors,
		}
	}
}

/// Build the outline for one file from its raw class blocks.
///
/// Blocks whose heading is not `class: Name` are skipped together with their
/// members.
pub fn build_outline(blocks: &[RawClassBlock]) -> Outline {
	let mut builder = DocumentationBuilder::new();

	for block in blocks {
		let Heading::Class { name } = classify_class_heading(&block.heading_text) else {
			tracing::debug!(heading = %block.heading_text, "skipping unrecognized class heading");
			continue;
		};

		builder.open_class(name);
		for member in &block.members {
			builder.add_member(member);
		}
	}

	builder.finish()
}
