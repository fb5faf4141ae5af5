mod common;

use remapfw_core::AnyEmptyResult;
use similar_asserts::assert_eq;

const TEMPLATE: &str = "#define LAYERS <remap name=\"layers\" type=\"number\" default=\"4\" />\n#define LED <remap name=\"led\" type=\"select\" default=\"off\" options=\"on,off\" />\n";

#[test]
fn render_uses_defaults() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("keyboard.c");
	std::fs::write(&file, TEMPLATE)?;

	let mut cmd = common::remapfw_cmd();
	let output = cmd
		.arg("render")
		.arg(&file)
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();

	assert_eq!(
		String::from_utf8(output)?,
		"#define LAYERS 4\n#define LED off\n"
	);

	Ok(())
}

#[test]
fn render_applies_overrides() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("keyboard.c");
	std::fs::write(&file, TEMPLATE)?;

	let mut cmd = common::remapfw_cmd();
	let output = cmd
		.arg("render")
		.arg(&file)
		.arg("--set")
		.arg("layers=8")
		.arg("--set")
		.arg("led=on")
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();

	assert_eq!(
		String::from_utf8(output)?,
		"#define LAYERS 8\n#define LED on\n"
	);

	Ok(())
}

#[test]
fn render_writes_to_output_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("keyboard.c");
	let resolved = tmp.path().join("resolved.c");
	std::fs::write(&file, TEMPLATE)?;

	let mut cmd = common::remapfw_cmd();
	let _ = cmd
		.arg("render")
		.arg(&file)
		.arg("--output")
		.arg(&resolved)
		.assert()
		.success();

	assert_eq!(
		std::fs::read_to_string(&resolved)?,
		"#define LAYERS 4\n#define LED off\n"
	);

	Ok(())
}

#[test]
fn render_rejects_value_outside_options() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("keyboard.c");
	std::fs::write(&file, TEMPLATE)?;

	let mut cmd = common::remapfw_cmd();
	let _ = cmd
		.arg("render")
		.arg(&file)
		.arg("--set")
		.arg("led=blinking")
		.assert()
		.failure()
		.stderr(predicates::str::contains("not one of the declared options"));

	Ok(())
}

#[test]
fn render_rejects_non_numeric_value() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("keyboard.c");
	std::fs::write(&file, TEMPLATE)?;

	let mut cmd = common::remapfw_cmd();
	let _ = cmd
		.arg("render")
		.arg(&file)
		.arg("--set")
		.arg("layers=many")
		.assert()
		.failure()
		.stderr(predicates::str::contains("is not a number"));

	Ok(())
}

#[test]
fn render_rejects_unknown_parameter_name() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("keyboard.c");
	std::fs::write(&file, TEMPLATE)?;

	let mut cmd = common::remapfw_cmd();
	let _ = cmd
		.arg("render")
		.arg(&file)
		.arg("--set")
		.arg("nope=1")
		.assert()
		.failure()
		.stderr(predicates::str::contains("no parameter named"));

	Ok(())
}

#[test]
fn render_rejects_malformed_set_argument() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("keyboard.c");
	std::fs::write(&file, TEMPLATE)?;

	let mut cmd = common::remapfw_cmd();
	let _ = cmd
		.arg("render")
		.arg(&file)
		.arg("--set")
		.arg("layers")
		.assert()
		.failure()
		.stderr(predicates::str::contains("expected NAME=VALUE"));

	Ok(())
}

#[test]
fn render_passes_rejected_tags_through() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("keyboard.c");
	std::fs::write(
		&file,
		"<remap name=\"foo\" type=\"unknown\" default=\"x\" />\n#define LAYERS <remap name=\"layers\" type=\"number\" default=\"4\" />\n",
	)?;

	let mut cmd = common::remapfw_cmd();
	let output = cmd
		.arg("render")
		.arg(&file)
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();

	assert_eq!(
		String::from_utf8(output)?,
		"<remap name=\"foo\" type=\"unknown\" default=\"x\" />\n#define LAYERS 4\n"
	);

	Ok(())
}
