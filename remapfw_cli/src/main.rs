use std::collections::HashMap;
use std::path::Path;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use remapfw_cli::Commands;
use remapfw_cli::OutputFormat;
use remapfw_cli::RemapFwCli;
use remapfw_core::ExtractDiagnostic;
use remapfw_core::FirmwareParameter;
use remapfw_core::RemapFwError;
use remapfw_core::apply_parameter_values;
use remapfw_core::extract_parameters_with_diagnostics;
use remapfw_core::validate_parameter_value;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

fn warning_label() -> String {
	if color_enabled() {
		format!("{}", "warning:".yellow())
	} else {
		"warning:".to_string()
	}
}

fn error_label() -> String {
	if color_enabled() {
		format!("{}", "error:".red())
	} else {
		"error:".to_string()
	}
}

fn main() {
	let args = RemapFwCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	if args.verbose {
		let filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
		tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_writer(std::io::stderr)
			.init();
	}

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

	let result = match &args.command {
		Commands::List { file, format } => run_list(file, *format),
		Commands::Render { file, set, output } => run_render(file, set, output.as_deref()),
		Commands::Check { file } => run_check(file),
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<RemapFwError>() {
			Ok(core_err) => {
				let report: miette::Report = (*core_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", error_label());
			}
		}
		process::exit(2);
	}
}

/// Report rejected candidate tags on stderr, with 1-indexed line and
/// column numbers computed from the diagnostic spans.
fn print_rejections(diagnostics: &[ExtractDiagnostic], source: &str) {
	for diagnostic in diagnostics {
		let (line, column) = line_and_column(source, diagnostic.span().start);
		eprintln!("{} {diagnostic} (line {line}, column {column})", warning_label());
	}
}

/// Convert a byte offset into 1-indexed line and column numbers.
fn line_and_column(source: &str, offset: usize) -> (usize, usize) {
	let before = &source[..offset.min(source.len())];
	let line = before.bytes().filter(|&b| b == b'\n').count() + 1;
	let column = before
		.rfind('\n')
		.map_or(offset + 1, |idx| offset - idx);
	(line, column)
}

fn run_list(file: &Path, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
	let source = std::fs::read_to_string(file)?;
	let (parameters, diagnostics) = extract_parameters_with_diagnostics(&source);
	print_rejections(&diagnostics, &source);

	match format {
		OutputFormat::Json => {
			println!("{}", serde_json::to_string_pretty(&parameters)?);
		}
		OutputFormat::Text => {
			if parameters.is_empty() {
				println!("No parameters declared in {}", file.display());
				return Ok(());
			}

			println!("Parameters in {}:", file.display());
			for parameter in &parameters {
				let mut entry = format!(
					"  {} ({}) default=\"{}\"",
					parameter.name, parameter.r#type, parameter.default
				);
				if !parameter.options.is_empty() {
					entry.push_str(&format!(" options=[{}]", parameter.options.join(",")));
				}
				if let Some(comment) = &parameter.comment {
					entry.push_str(&format!("  # {comment}"));
				}
				println!("{entry}");
			}
		}
	}

	Ok(())
}

fn run_render(
	file: &Path,
	set: &[String],
	output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
	let source = std::fs::read_to_string(file)?;
	let (parameters, diagnostics) = extract_parameters_with_diagnostics(&source);
	print_rejections(&diagnostics, &source);

	let values = parse_overrides(set, &parameters)?;
	let resolved = apply_parameter_values(&source, &parameters, &values)?;

	match output {
		Some(path) => {
			std::fs::write(path, resolved)?;
			println!("Wrote resolved source to {}", path.display());
		}
		None => print!("{resolved}"),
	}

	Ok(())
}

/// Parse `name=value` override pairs and validate each value against the
/// declared parameter type. Duplicate parameter names share one override,
/// so the value must satisfy every declaration carrying that name.
fn parse_overrides(
	set: &[String],
	parameters: &[FirmwareParameter],
) -> Result<HashMap<String, String>, Box<dyn std::error::Error>> {
	let mut values = HashMap::new();

	for entry in set {
		let Some((name, value)) = entry.split_once('=') else {
			return Err(format!("invalid --set `{entry}`: expected NAME=VALUE").into());
		};

		let declared: Vec<_> = parameters
			.iter()
			.filter(|parameter| parameter.name == name)
			.collect();
		if declared.is_empty() {
			return Err(Box::new(RemapFwError::UnknownParameter(name.to_string())));
		}
		for parameter in declared {
			validate_parameter_value(parameter, value)?;
		}

		values.insert(name.to_string(), value.to_string());
	}

	Ok(values)
}

fn run_check(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
	let source = std::fs::read_to_string(file)?;
	let (parameters, diagnostics) = extract_parameters_with_diagnostics(&source);
	print_rejections(&diagnostics, &source);

	if diagnostics.is_empty() {
		println!(
			"Check passed: {} parameter(s), no rejected declaration tags.",
			parameters.len()
		);
		Ok(())
	} else {
		println!(
			"{} declaration tag(s) would be rejected; {} parameter(s) extracted.",
			diagnostics.len(),
			parameters.len()
		);
		process::exit(1);
	}
}
