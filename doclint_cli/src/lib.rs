use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Check that markdown API docs agree with themselves.",
	long_about = "doclint reads the `*.md` files of a documentation directory, extracts the \
	              documented classes and members from their headings, and verifies that each \
	              heading's parameter list matches the argument bullets beneath it and that \
	              every return bullet starts with exactly `returns: `.\n\nQuick start:\n  \
	              doclint check    Lint every markdown file\n  doclint outline  Print the \
	              extracted API outline\n  doclint toc      Regenerate stale tables of contents"
)]
pub struct DoclintCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the documentation directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Lint every markdown file in the documentation directory.
	///
	/// Checks class and member headings against the documentation grammar,
	/// compares declared parameter lists with argument bullets, validates
	/// return bullets, and reports stale tables of contents. Exits with a
	/// non-zero status code if any lint error is found.
	Check {
		/// Output format for check results. Use `text` for human-readable
		/// output, `json` for programmatic consumption, or `github` for
		/// GitHub Actions annotations that appear inline on PRs.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Print the documentation outline extracted from the markdown files.
	///
	/// Lint errors are still reported on stderr but do not affect the exit
	/// status.
	Outline {
		/// Output format for the outline. Use `text` for the heading form or
		/// `json` for the full model.
		#[arg(long, value_enum, default_value_t = OutlineOutputFormat::Text)]
		format: OutlineOutputFormat,
	},
	/// Regenerate the table of contents between `<!-- toc -->` and
	/// `<!-- tocstop -->` markers.
	Toc {
		/// Preview the files that would change without writing them.
		#[arg(long, default_value_t = false)]
		dry_run: bool,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output with colors and formatting.
	Text,
	/// JSON output for programmatic consumption. Each error includes the
	/// file path and message.
	Json,
	/// GitHub Actions annotation format. Emits `::error` annotations that
	/// appear inline on pull request diffs.
	Github,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutlineOutputFormat {
	/// Human-readable text output.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}
