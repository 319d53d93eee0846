use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum DoclintError {
	#[error(transparent)]
	#[diagnostic(code(doclint::io_error))]
	Io(#[from] std::io::Error),

	#[error("failure to load markdown: {0}")]
	#[diagnostic(code(doclint::markdown))]
	Markdown(String),

	#[error("documentation directory not found: `{0}`")]
	#[diagnostic(
		code(doclint::missing_directory),
		help("pass the directory containing your `*.md` files with `--path`")
	)]
	MissingDirectory(String),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(doclint::config_parse),
		help("check that doclint.toml is valid TOML with [toc] and/or [exclude] sections")
	)]
	ConfigParse(String),

	#[error("invalid exclude pattern `{pattern}`: {reason}")]
	#[diagnostic(
		code(doclint::invalid_glob),
		help("exclude patterns use glob syntax, e.g. `draft-*.md`")
	)]
	InvalidGlob { pattern: String, reason: String },
}

pub type DoclintResult<T> = Result<T, DoclintError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
