mod common;

use doclint_core::AnyEmptyResult;
use doclint_core::Documentation;
use doclint_core::Member;
use predicates::prelude::PredicateBooleanExt;
use rstest::rstest;
use similar_asserts::assert_eq;

#[test]
fn outline_prints_heading_form() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_doc(tmp.path(), "api.md", common::VALID_DOC)?;

	let output = common::doclint_cmd()
		.arg("outline")
		.arg("--path")
		.arg(tmp.path())
		.output()?;

	assert!(output.status.success());
	assert_eq!(
		String::from_utf8(output.stdout)?,
		"class: Page\n  new Page(url)\n  Page.goto(url, options)\n  Page.url\n  event: 'close'\n"
	);

	Ok(())
}

#[test]
fn outline_json_round_trips_into_the_model() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_doc(tmp.path(), "api.md", common::VALID_DOC)?;

	let output = common::doclint_cmd()
		.arg("outline")
		.arg("--format")
		.arg("json")
		.arg("--path")
		.arg(tmp.path())
		.output()?;

	assert!(output.status.success());
	let documentation: Documentation = serde_json::from_slice(&output.stdout)?;
	let page = documentation.class("Page").ok_or("missing class")?;
	assert_eq!(page.members.len(), 4);
	assert!(matches!(page.member("goto"), Some(Member::Method { has_return: true, .. })));

	Ok(())
}

#[rstest]
#[case::method("#### Bar.baz()\n", "Failed to process header as method: Bar.baz()")]
#[case::property("#### Bar.baz\n", "Failed to process header as property: Bar.baz")]
fn outline_warns_but_succeeds(#[case] member: &str, #[case] expected: &str) -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_doc(tmp.path(), "api.md", &format!("### class: Foo\n\n{member}"))?;

	common::doclint_cmd()
		.arg("outline")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("class: Foo"))
		.stderr(predicates::str::contains("warning:").and(predicates::str::contains(expected)));

	Ok(())
}

#[test]
fn outline_reports_empty_corpus() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_doc(tmp.path(), "readme.md", "# Just a readme\n")?;

	common::doclint_cmd()
		.arg("outline")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("No documented classes found."));

	Ok(())
}
