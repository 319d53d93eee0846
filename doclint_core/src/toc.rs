//! Table of contents generation for markdown files.
//!
//! A TOC lives between two marker lines:
//!
//! ```markdown
//! <!-- toc -->
//!
//! - [Overview](#overview)
//!   - [class: Page](#class-page)
//!
//! <!-- tocstop -->
//! ```
//!
//! [`insert_toc`] rewrites everything between the markers from the headings
//! found in the rest of the document. Applying it to its own output changes
//! nothing.

use std::collections::HashMap;

use markdown::mdast::Node;

use crate::DoclintResult;
use crate::extractor::parse_markdown;
use crate::extractor::plain_text;

/// Marker line that opens the generated region.
pub const TOC_OPEN: &str = "<!-- toc -->";
/// Marker line that closes the generated region.
pub const TOC_CLOSE: &str = "<!-- tocstop -->";
/// Lint message recorded for a file whose TOC differs from the generated one.
pub const STALE_TOC_MESSAGE: &str = "Markdown TOC is outdated, run `doclint toc`";

pub const DEFAULT_MIN_DEPTH: u8 = 2;
pub const DEFAULT_MAX_DEPTH: u8 = 4;

/// Which heading depths are listed in the generated TOC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocOptions {
	pub min_depth: u8,
	pub max_depth: u8,
}

impl Default for TocOptions {
	fn default() -> Self {
		Self {
			min_depth: DEFAULT_MIN_DEPTH,
			max_depth: DEFAULT_MAX_DEPTH,
		}
	}
}

/// Byte range of the marker-delimited TOC region, excluding the newline
/// after the closing marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TocRegion {
	start: usize,
	end: usize,
}

/// Regenerate the TOC between the markers. Content without an opening
/// marker is returned unchanged.
pub fn insert_toc(content: &str, options: &TocOptions) -> DoclintResult<String> {
	let Some(region) = find_region(content) else {
		return Ok(content.to_string());
	};

	let root = parse_markdown(content)?;
	let mut headings = Vec::new();
	collect_headings(&root, region, options, &mut headings);

	let mut seen = HashMap::new();
	let lines: Vec<String> = headings
		.into_iter()
		.map(|(depth, text)| {
			let slug = unique_slug(&github_slug(&text), &mut seen);
			let indent = "  ".repeat(usize::from(depth - options.min_depth));
			format!("{indent}- [{text}](#{slug})")
		})
		.collect();

	let newline = line_ending(content);
	let mut output = String::with_capacity(content.len());
	output.push_str(&content[..region.start]);
	output.push_str(TOC_OPEN);
	output.push_str(newline);
	output.push_str(newline);
	if !lines.is_empty() {
		output.push_str(&lines.join(newline));
		output.push_str(newline);
		output.push_str(newline);
	}
	output.push_str(TOC_CLOSE);
	output.push_str(&content[region.end..]);

	Ok(output)
}

/// Whether the TOC in `content` matches what [`insert_toc`] would produce.
pub fn is_toc_fresh(content: &str, options: &TocOptions) -> DoclintResult<bool> {
	Ok(insert_toc(content, options)? == content)
}

/// The line ending the generated region is written with, taken from the
/// first line of the document.
fn line_ending(content: &str) -> &'static str {
	match content.find('\n') {
		Some(index) if content[..index].ends_with('\r') => "\r\n",
		_ => "\n",
	}
}

fn find_region(content: &str) -> Option<TocRegion> {
	let mut offset = 0;
	let mut start = None;

	for line in content.split_inclusive('\n') {
		let trimmed = line.trim();
		let line_end = offset + line.trim_end_matches(['\n', '\r']).len();

		match start {
			None if trimmed == TOC_OPEN => start = Some((offset, line_end)),
			Some((open, _)) if trimmed == TOC_CLOSE => {
				return Some(TocRegion {
					start: open,
					end: line_end,
				});
			}
			_ => {}
		}

		offset += line.len();
	}

	// An unterminated region only covers the opening marker.
	start.map(|(start, end)| TocRegion { start, end })
}

fn collect_headings(
	node: &Node,
	region: TocRegion,
	options: &TocOptions,
	headings: &mut Vec<(u8, String)>,
) {
	let Some(children) = node.children() else {
		return;
	};

	for child in children {
		if let Node::Heading(heading) = child {
			let inside_region = heading
				.position
				.as_ref()
				.is_some_and(|pos| pos.start.offset >= region.start && pos.start.offset < region.end);
			if !inside_region && (options.min_depth..=options.max_depth).contains(&heading.depth) {
				headings.push((heading.depth, plain_text(&heading.children)));
			}
			continue;
		}

		collect_headings(child, region, options, headings);
	}
}

/// GitHub heading anchor slug: lowercase, keep alphanumerics, `-`, `_` and
/// spaces, then turn spaces into hyphens.
pub fn github_slug(text: &str) -> String {
	text.to_lowercase()
		.chars()
		.filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
		.map(|c| if c == ' ' { '-' } else { c })
		.collect()
}

fn unique_slug(slug: &str, seen: &mut HashMap<String, usize>) -> String {
	let count = seen.entry(slug.to_string()).or_insert(0);
	let unique = if *count == 0 {
		slug.to_string()
	} else {
		format!("{slug}-{count}")
	};
	*count += 1;

	unique
}
