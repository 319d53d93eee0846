use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use doclint_cli::Commands;
use doclint_cli::DoclintCli;
use doclint_cli::OutlineOutputFormat;
use doclint_cli::OutputFormat;
use doclint_core::LintError;
use doclint_core::LintReport;
use doclint_core::compute_toc_updates;
use doclint_core::lint_corpus;
use doclint_core::scan_corpus;
use doclint_core::write_toc_updates;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "DOCLINT_LOG";

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = DoclintCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match args.command {
		Some(Commands::Check { format }) => run_check(&args, format),
		Some(Commands::Outline { format }) => run_outline(&args, format),
		Some(Commands::Toc { dry_run }) => run_toc(&args, dry_run),
		None => {
			eprintln!("No subcommand specified. Run `doclint --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<doclint_core::DoclintError>() {
			Ok(doclint_err) => {
				let report: miette::Report = (*doclint_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn init_tracing(verbose: bool, use_color: bool) {
	let default_directive = if verbose { "doclint_core=debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.without_time()
		.try_init();
}

fn resolve_root(args: &DoclintCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn lint(args: &DoclintCli) -> Result<LintReport, Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let corpus = scan_corpus(&root)?;
	let report = lint_corpus(&corpus)?;

	// stdout carries only the command output.
	if args.verbose {
		eprintln!(
			"Scanned {} file(s): {} class(es), {} member(s)",
			report.files.len(),
			report.documentation.len(),
			report
				.documentation
				.iter()
				.map(|class| class.members.len())
				.sum::<usize>()
		);
		for file in &report.files {
			eprintln!("  {}", make_relative(file, &root));
		}
	}

	Ok(report)
}

fn run_check(args: &DoclintCli, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
	let report = lint(args)?;
	let root = resolve_root(args);

	if report.is_ok() {
		match format {
			OutputFormat::Json => {
				println!("{{\"ok\":true,\"errors\":[]}}");
			}
			OutputFormat::Github => {
				println!("Documentation outline is consistent.");
			}
			OutputFormat::Text => {
				println!("Check passed: documentation outline is consistent.");
			}
		}
		return Ok(());
	}

	match format {
		OutputFormat::Json => {
			let errors: Vec<serde_json::Value> = report
				.errors
				.iter()
				.map(|error| {
					serde_json::json!({
						"file": error_location(error, &root),
						"message": error.message,
					})
				})
				.collect();
			let output = serde_json::json!({
				"ok": false,
				"errors": errors,
			});
			println!("{output}");
		}
		OutputFormat::Github => {
			for error in &report.errors {
				match &error.file {
					Some(file) => {
						println!(
							"::error file={}::{}",
							make_relative(file, &root),
							error.message
						);
					}
					None => println!("::error::{}", error.message),
				}
			}
			eprintln!("{}", check_summary(&report));
		}
		OutputFormat::Text => {
			eprintln!("Check failed.");
			eprintln!();
			for error in &report.errors {
				eprintln!(
					"  {} {}",
					colored!(format!("{}:", error_location(error, &root)), bold),
					error.message
				);
			}
			eprintln!();
			eprintln!("{}", colored!(check_summary(&report), red));
		}
	}

	process::exit(1);
}

fn check_summary(report: &LintReport) -> String {
	format!("{} lint error(s) found.", report.errors.len())
}

fn run_outline(
	args: &DoclintCli,
	format: OutlineOutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
	let report = lint(args)?;
	let root = resolve_root(args);

	for error in &report.errors {
		eprintln!(
			"{} {}: {}",
			colored!("warning:", yellow),
			error_location(error, &root),
			error.message
		);
	}

	match format {
		OutlineOutputFormat::Json => {
			println!("{}", serde_json::to_string_pretty(&report.documentation)?);
		}
		OutlineOutputFormat::Text => {
			if report.documentation.is_empty() {
				println!("No documented classes found.");
			} else {
				print!("{}", report.documentation);
			}
		}
	}

	Ok(())
}

fn run_toc(args: &DoclintCli, dry_run: bool) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let corpus = scan_corpus(&root)?;
	let updates = compute_toc_updates(&corpus)?;

	if updates.is_empty() {
		println!("All tables of contents are up to date.");
		return Ok(());
	}

	if dry_run {
		for update in &updates {
			println!("Would update {}", make_relative(&update.file, &root));
			if args.verbose {
				let current = std::fs::read_to_string(&update.file)?;
				print_diff(&current, &update.content);
			}
		}
		println!(
			"\n{} file(s) would be updated.",
			colored!(updates.len().to_string(), bold)
		);
		return Ok(());
	}

	write_toc_updates(&updates)?;
	for update in &updates {
		println!("Updated {}", make_relative(&update.file, &root));
	}
	println!(
		"{} Updated {} file(s).",
		colored!("✓", green),
		updates.len()
	);

	Ok(())
}

fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				print!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				print!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				print!("   {change}");
			}
		}
	}
}

/// Where an error should be reported: its file relative to root, or the
/// root itself for errors without a file.
fn error_location(error: &LintError, root: &Path) -> String {
	error
		.file
		.as_deref()
		.map_or_else(|| root.display().to_string(), |file| make_relative(file, root))
}

/// Make a path relative to root for display purposes.
fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}
