use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Customize buildable keyboard firmware through declared, typed parameters.",
	long_about = "remapfw resolves parameter declarations embedded in firmware source \
	              templates.\n\nFirmware authors declare customization points as `<remap ... />` \
	              tags; remapfw extracts them, lets you pick values, and produces a concrete, \
	              compilable source file.\n\nQuick start:\n  remapfw list keyboard.c      Show the \
	              declared parameters\n  remapfw render keyboard.c    Resolve the template with \
	              default values\n  remapfw check keyboard.c     Report declaration tags that \
	              would be rejected"
)]
pub struct RemapFwCli {
	#[command(subcommand)]
	pub command: Commands,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// List the parameters declared in a firmware template.
	///
	/// Scans the template for valid declaration tags and prints one entry
	/// per parameter: name, type, default, options, and any comment the
	/// author attached. Rejected candidate tags are reported on stderr.
	List {
		/// Path to the firmware source template.
		file: PathBuf,

		/// Output format. Use `text` for human-readable output or `json`
		/// for programmatic consumption.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Resolve a firmware template into concrete source text.
	///
	/// Replaces every declaration tag with its resolved value: the value
	/// given with `--set`, or the declared default. Values are validated
	/// against the parameter's type before anything is rendered; a `select`
	/// value must be one of the declared options and a `number` value must
	/// parse as a number.
	Render {
		/// Path to the firmware source template.
		file: PathBuf,

		/// Override a parameter value, e.g. `--set layers=8`. May be
		/// repeated. Names must match a declared parameter.
		#[arg(long = "set", value_name = "NAME=VALUE")]
		set: Vec<String>,

		/// Write the resolved source to this path instead of stdout.
		#[arg(long, short)]
		output: Option<PathBuf>,
	},
	/// Report declaration tags that would be rejected.
	///
	/// Runs extraction with diagnostics and prints every candidate tag that
	/// fails validation (malformed attributes, unknown type, select without
	/// options), with its location. Exits with a non-zero status when any
	/// tag is rejected, for CI use.
	Check {
		/// Path to the firmware source template.
		file: PathBuf,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output.
	Text,
	/// JSON output for programmatic consumption. Each parameter includes
	/// its name, type, options, default, optional comment, and span.
	Json,
}
