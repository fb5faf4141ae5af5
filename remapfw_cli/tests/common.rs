use assert_cmd::Command;

pub fn remapfw_cmd() -> Command {
	let mut cmd = Command::cargo_bin("remapfw").expect("remapfw binary should build");
	cmd.env("NO_COLOR", "1");
	cmd
}
