use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::DoclintError;
use crate::DoclintResult;
use crate::toc::DEFAULT_MAX_DEPTH;
use crate::toc::DEFAULT_MIN_DEPTH;
use crate::toc::TocOptions;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["doclint.toml", ".doclint.toml", ".config/doclint.toml"];

/// Configuration loaded from a `doclint.toml` file.
///
/// ```toml
/// [toc]
/// check = true
/// min_depth = 2
/// max_depth = 4
///
/// [exclude]
/// patterns = ["CHANGELOG.md", "draft-*.md"]
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct DoclintConfig {
	/// Table of contents generation and staleness checking.
	#[serde(default)]
	pub toc: TocConfig,
	/// Markdown files to leave out of the lint run.
	#[serde(default)]
	pub exclude: ExcludeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TocConfig {
	/// When false, files are never reported for a stale TOC.
	#[serde(default = "default_true")]
	pub check: bool,
	/// Shallowest heading depth listed in the TOC.
	#[serde(default = "default_min_depth")]
	pub min_depth: u8,
	/// Deepest heading depth listed in the TOC.
	#[serde(default = "default_max_depth")]
	pub max_depth: u8,
}

impl Default for TocConfig {
	fn default() -> Self {
		Self {
			check: true,
			min_depth: DEFAULT_MIN_DEPTH,
			max_depth: DEFAULT_MAX_DEPTH,
		}
	}
}

impl TocConfig {
	pub fn options(&self) -> TocOptions {
		TocOptions {
			min_depth: self.min_depth,
			max_depth: self.max_depth,
		}
	}
}

/// Glob patterns matched against markdown file names (not paths).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExcludeConfig {
	#[serde(default)]
	pub patterns: Vec<String>,
}

fn default_true() -> bool {
	true
}

fn default_min_depth() -> u8 {
	DEFAULT_MIN_DEPTH
}

fn default_max_depth() -> u8 {
	DEFAULT_MAX_DEPTH
}

impl DoclintConfig {
	/// Find the first existing config file in `root`.
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> DoclintResult<Option<DoclintConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: DoclintConfig =
			toml::from_str(&content).map_err(|e| DoclintError::ConfigParse(e.to_string()))?;

		Ok(Some(config))
	}
}
