//! `doclint_core` extracts a structured API outline from markdown
//! documentation and checks that it is internally consistent. Member
//! headings, the argument bullets beneath them, and their return
//! annotations must agree; every disagreement is reported as a lint error
//! instead of aborting the run.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Markdown file
//!   → Extractor (mdast → class blocks with member headings and bullets)
//!   → Grammar (classifies `class:`, `new`, method, property and event headings)
//!   → Validator (class name, parameter list and `returns: ` checks)
//!   → Builder (accumulates members, flushes classes on the next class or EOF)
//!   → Corpus driver (TOC freshness check, merges files in order)
//! ```
//!
//! ## Documentation format
//!
//! ```markdown
//! ### class: Page
//!
//! #### page.goto(url[, options])
//! - `url`
//! - `options`
//! - returns: <Promise>
//!
//! #### page.url
//!
//! #### event: 'close'
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use doclint_core::lint_directory;
//! use std::path::Path;
//!
//! let report = lint_directory(Path::new("docs")).unwrap();
//! for error in &report.errors {
//!     eprintln!("{error}");
//! }
//! println!("{} class(es) documented", report.documentation.len());
//! ```

pub use builder::*;
pub use config::DoclintConfig;
pub use corpus::*;
pub use error::*;
pub use extractor::*;
pub use grammar::*;
pub use model::*;
pub use validator::*;

mod builder;
pub mod config;
mod corpus;
#[allow(unused_assignments)]
mod error;
mod extractor;
mod grammar;
mod model;
pub mod toc;
mod validator;
