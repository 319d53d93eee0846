use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn doclint_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("doclint"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("DOCLINT_LOG");
	cmd
}

pub fn write_doc(dir: &Path, name: &str, content: &str) -> std::io::Result<()> {
	std::fs::write(dir.join(name), content)
}

#[allow(dead_code)]
pub const VALID_DOC: &str = "# API\n\n### class: Page\n\n#### new Page(url)\n- `url`\n\n#### \
                             page.goto(url[, options])\n- `url`\n- `options`\n- returns: \
                             <Promise>\n\n#### page.url\n\n#### event: 'close'\n";
