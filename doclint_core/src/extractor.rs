use markdown::ParseOptions;
use markdown::mdast::List;
use markdown::mdast::ListItem;
use markdown::mdast::Node;
use markdown::to_mdast;
use serde::Deserialize;
use serde::Serialize;

use crate::DoclintError;
use crate::DoclintResult;

/// Heading depth that opens a class block (`### class: Foo`).
pub const CLASS_HEADING_DEPTH: u8 = 3;
/// Heading depth that opens a member block (`#### Foo.bar(a)`).
pub const MEMBER_HEADING_DEPTH: u8 = 4;
/// Lowercase prefix that marks a bullet as a return annotation candidate.
const RETURN_BULLET_MARKER: &str = "retur";

/// The unvalidated text of one class heading and the member blocks beneath
/// it, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawClassBlock {
	pub heading_text: String,
	pub members: Vec<RawMemberBlock>,
}

impl RawClassBlock {
	pub fn new(heading_text: impl Into<String>) -> Self {
		Self {
			heading_text: heading_text.into(),
			members: Vec::new(),
		}
	}

	#[must_use]
	pub fn with_member(mut self, member: RawMemberBlock) -> Self {
		self.members.push(member);
		self
	}
}

/// The unvalidated text of one member heading and the bullet list that
/// directly follows it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMemberBlock {
	pub heading_text: String,
	/// Inline-code bullets in document order.
	pub arg_tokens: Vec<String>,
	/// Leading text of the first plain bullet starting with `retur`
	/// (case-insensitive), if there was one.
	pub return_bullet_text: Option<String>,
}

impl RawMemberBlock {
	pub fn new(heading_text: impl Into<String>) -> Self {
		Self {
			heading_text: heading_text.into(),
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_args<I, S>(mut self, args: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.arg_tokens.extend(args.into_iter().map(Into::into));
		self
	}

	#[must_use]
	pub fn with_return(mut self, text: impl Into<String>) -> Self {
		self.return_bullet_text = Some(text.into());
		self
	}

	pub fn has_return_bullet(&self) -> bool {
		self.return_bullet_text.is_some()
	}
}

/// Turns markdown source into raw class blocks.
///
/// Implementations must preserve the document order of headings and list
/// items exactly.
pub trait HeadingExtractor {
	fn extract(&self, content: &str) -> DoclintResult<Vec<RawClassBlock>>;
}

/// Extracts class and member blocks from the markdown AST.
///
/// Depth-3 headings open classes, depth-4 headings open members, and only
/// the unordered list immediately following a member heading is read.
/// Member headings that appear before any class heading are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownExtractor;

impl HeadingExtractor for MarkdownExtractor {
	fn extract(&self, content: &str) -> DoclintResult<Vec<RawClassBlock>> {
		let root = parse_markdown(content)?;
		let mut classes = Vec::new();
		collect_blocks(&root, &mut classes);

		Ok(classes)
	}
}

/// Parse markdown into an mdast tree using GitHub-flavoured options.
pub fn parse_markdown(content: &str) -> DoclintResult<Node> {
	to_mdast(content, &ParseOptions::gfm()).map_err(|e| DoclintError::Markdown(e.to_string()))
}

fn collect_blocks(node: &Node, classes: &mut Vec<RawClassBlock>) {
	let Some(children) = node.children() else {
		return;
	};

	for (index, child) in children.iter().enumerate() {
		match child {
			Node::Heading(heading) if heading.depth == CLASS_HEADING_DEPTH => {
				classes.push(RawClassBlock::new(plain_text(&heading.children)));
			}
			Node::Heading(heading) if heading.depth == MEMBER_HEADING_DEPTH => {
				let Some(class) = classes.last_mut() else {
					continue;
				};

				let mut member = RawMemberBlock::new(plain_text(&heading.children));
				if let Some(Node::List(list)) = children.get(index + 1) {
					read_member_list(list, &mut member);
				}
				class.members.push(member);
			}
			_ => collect_blocks(child, classes),
		}
	}
}

fn read_member_list(list: &List, member: &mut RawMemberBlock) {
	if list.ordered {
		return;
	}

	for item in &list.children {
		let Node::ListItem(item) = item else {
			continue;
		};

		match first_inline(item) {
			Some(Node::InlineCode(code)) => member.arg_tokens.push(code.value.clone()),
			Some(Node::Text(text))
				if member.return_bullet_text.is_none()
					&& text.value.to_lowercase().starts_with(RETURN_BULLET_MARKER) =>
			{
				member.return_bullet_text = Some(text.value.clone());
			}
			_ => {}
		}
	}
}

/// The first phrasing node of a list item, looking through the wrapping
/// paragraph.
fn first_inline(item: &ListItem) -> Option<&Node> {
	match item.children.first()? {
		Node::Paragraph(paragraph) => paragraph.children.first(),
		other => Some(other),
	}
}

/// Concatenate the visible text of inline nodes, the way a rendered
/// heading's text content reads.
pub(crate) fn plain_text(nodes: &[Node]) -> String {
	let mut text = String::new();
	push_plain_text(nodes, &mut text);
	text
}

fn push_plain_text(nodes: &[Node], text: &mut String) {
	for node in nodes {
		match node {
			Node::Text(value) => text.push_str(&value.value),
			Node::InlineCode(code) => text.push_str(&code.value),
			Node::Html(_) => {}
			other => {
				if let Some(children) = other.children() {
					push_plain_text(children, text);
				}
			}
		}
	}
}
