use std::path::Path;
use std::path::PathBuf;

use globset::Glob;
use globset::GlobSet;
use globset::GlobSetBuilder;
use serde::Serialize;

use crate::DoclintError;
use crate::DoclintResult;
use crate::Documentation;
use crate::HeadingExtractor;
use crate::LintError;
use crate::MarkdownExtractor;
use crate::Outline;
use crate::build_outline;
use crate::config::DoclintConfig;
use crate::toc::STALE_TOC_MESSAGE;
use crate::toc::TocOptions;
use crate::toc::insert_toc;

/// Suffix a file name must end with to be linted.
pub const MARKDOWN_SUFFIX: &str = ".md";

/// Options controlling a lint run.
///
/// Use [`LintOptions::default()`] for sensible defaults or
/// [`LintOptions::from_config`] to construct from a [`DoclintConfig`].
#[derive(Debug, Clone)]
pub struct LintOptions {
	/// Whether each file's TOC is compared against a regenerated one.
	pub check_toc: bool,
	/// Heading depths listed in generated TOCs.
	pub toc: TocOptions,
	/// File names matching this set are skipped.
	pub exclude_set: GlobSet,
}

impl Default for LintOptions {
	fn default() -> Self {
		Self {
			check_toc: true,
			toc: TocOptions::default(),
			exclude_set: GlobSet::empty(),
		}
	}
}

impl LintOptions {
	/// Construct [`LintOptions`] from a [`DoclintConfig`].
	pub fn from_config(config: Option<&DoclintConfig>) -> DoclintResult<Self> {
		let Some(config) = config else {
			return Ok(Self::default());
		};

		Ok(Self {
			check_toc: config.toc.check,
			toc: config.toc.options(),
			exclude_set: build_glob_set(&config.exclude.patterns)?,
		})
	}
}

fn build_glob_set(patterns: &[String]) -> DoclintResult<GlobSet> {
	let invalid = |pattern: &str, e: globset::Error| {
		DoclintError::InvalidGlob {
			pattern: pattern.to_string(),
			reason: e.to_string(),
		}
	};

	let mut builder = GlobSetBuilder::new();
	for pattern in patterns {
		builder.add(Glob::new(pattern).map_err(|e| invalid(pattern, e))?);
	}

	builder.build().map_err(|e| invalid(&patterns.join(", "), e))
}

/// A documentation directory with its configuration resolved and its
/// markdown files discovered, ready for linting or TOC regeneration.
#[derive(Debug, Clone)]
pub struct Corpus {
	pub root: PathBuf,
	/// Markdown files in iteration order.
	pub files: Vec<PathBuf>,
	pub options: LintOptions,
}

/// The merged result of linting every file in a corpus.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LintReport {
	pub documentation: Documentation,
	/// Lint errors in file iteration order, then in-file order.
	pub errors: Vec<LintError>,
	pub files: Vec<PathBuf>,
}

impl LintReport {
	/// Returns true when no lint errors were found.
	pub fn is_ok(&self) -> bool {
		self.errors.is_empty()
	}

	/// Append one file's outline, stamping its errors with the file path.
	pub fn merge(&mut self, file: &Path, outline: Outline) {
		self.documentation.extend(outline.classes);
		self.errors
			.extend(outline.errors.into_iter().map(|error| error.in_file(file)));
		self.files.push(file.to_path_buf());
	}
}

/// A file whose regenerated TOC differs from its current content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocUpdate {
	pub file: PathBuf,
	pub content: String,
}

/// Load config from `root` and discover its markdown files.
pub fn scan_corpus(root: &Path) -> DoclintResult<Corpus> {
	if !root.is_dir() {
		return Err(DoclintError::MissingDirectory(root.display().to_string()));
	}

	let config = DoclintConfig::load(root)?;
	let options = LintOptions::from_config(config.as_ref())?;
	scan_corpus_with_options(root, options)
}

/// Discover the markdown files of `root` using explicit options.
pub fn scan_corpus_with_options(root: &Path, options: LintOptions) -> DoclintResult<Corpus> {
	let files = discover_markdown_files(root, &options)?;

	Ok(Corpus {
		root: root.to_path_buf(),
		files,
		options,
	})
}

/// List the files directly inside `dir` whose names end in `.md`, sorted by
/// name. Subdirectories are not searched.
pub fn discover_markdown_files(dir: &Path, options: &LintOptions) -> DoclintResult<Vec<PathBuf>> {
	if !dir.is_dir() {
		return Err(DoclintError::MissingDirectory(dir.display().to_string()));
	}

	let mut files = Vec::new();
	for entry in std::fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();
		let name = entry.file_name();

		// Compared as bytes so names that are not valid UTF-8 are still linted.
		if !name.as_encoded_bytes().ends_with(MARKDOWN_SUFFIX.as_bytes()) || !path.is_file() {
			continue;
		}

		if options.exclude_set.is_match(Path::new(&name)) {
			tracing::debug!(file = %path.display(), "excluded by config");
			continue;
		}

		files.push(path);
	}

	files.sort();
	Ok(files)
}

/// Lint the markdown source of a single file.
///
/// The TOC check runs first, so a stale TOC error precedes the outline's own
/// errors.
pub fn lint_source(
	content: &str,
	extractor: &impl HeadingExtractor,
	options: &LintOptions,
) -> DoclintResult<Outline> {
	let mut errors = Vec::new();
	if options.check_toc && insert_toc(content, &options.toc)? != content {
		errors.push(LintError::new(STALE_TOC_MESSAGE));
	}

	let blocks = extractor.extract(content)?;
	let mut outline = build_outline(&blocks);
	errors.append(&mut outline.errors);
	outline.errors = errors;

	Ok(outline)
}

/// Lint every file of the corpus in order with the given extractor.
///
/// Files are processed one at a time and merged in iteration order. Content
/// problems are collected as lint errors; only I/O and markdown loading
/// failures abort the run.
pub fn lint_corpus_with(
	corpus: &Corpus,
	extractor: &impl HeadingExtractor,
) -> DoclintResult<LintReport> {
	let mut report = LintReport::default();

	for file in &corpus.files {
		tracing::debug!(file = %file.display(), "linting");
		let content = std::fs::read_to_string(file)?;
		let outline = lint_source(&content, extractor, &corpus.options)?;

		if outline.errors.iter().any(|e| e.message == STALE_TOC_MESSAGE) {
			tracing::warn!(file = %file.display(), "table of contents is stale");
		}

		report.merge(file, outline);
	}

	Ok(report)
}

/// Lint every file of the corpus using the markdown extractor.
pub fn lint_corpus(corpus: &Corpus) -> DoclintResult<LintReport> {
	lint_corpus_with(corpus, &MarkdownExtractor)
}

/// Scan and lint the directory at `root` in one step.
pub fn lint_directory(root: &Path) -> DoclintResult<LintReport> {
	let corpus = scan_corpus(root)?;
	lint_corpus(&corpus)
}

/// Regenerate the TOC of every corpus file, returning only files that
/// would change.
pub fn compute_toc_updates(corpus: &Corpus) -> DoclintResult<Vec<TocUpdate>> {
	let mut updates = Vec::new();

	for file in &corpus.files {
		let content = std::fs::read_to_string(file)?;
		let regenerated = insert_toc(&content, &corpus.options.toc)?;

		if regenerated != content {
			updates.push(TocUpdate {
				file: file.clone(),
				content: regenerated,
			});
		}
	}

	Ok(updates)
}

pub fn write_toc_updates(updates: &[TocUpdate]) -> DoclintResult<()> {
	for update in updates {
		std::fs::write(&update.file, &update.content)?;
	}

	Ok(())
}
