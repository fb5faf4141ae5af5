use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum RemapFwError {
	#[error(transparent)]
	#[diagnostic(code(remapfw::io_error))]
	Io(#[from] std::io::Error),

	#[error("parameter `{name}` span {start}..{end} does not match the source content")]
	#[diagnostic(
		code(remapfw::stale_span),
		help("re-extract parameters from the current source before substituting")
	)]
	StaleSpan {
		name: String,
		start: usize,
		end: usize,
	},

	#[error("parameter `{name}` span {start}..{end} is out of bounds for a source of {len} bytes")]
	#[diagnostic(
		code(remapfw::span_out_of_bounds),
		help("re-extract parameters from the current source before substituting")
	)]
	SpanOutOfBounds {
		name: String,
		start: usize,
		end: usize,
		len: usize,
	},

	#[error("parameter `{name}` at offset {start} is out of order or overlaps the previous span")]
	#[diagnostic(
		code(remapfw::unordered_spans),
		help("pass parameters in the order returned by extraction, without overlapping spans")
	)]
	UnorderedSpans { name: String, start: usize },

	#[error("`{value}` is not one of the declared options for parameter `{name}`")]
	#[diagnostic(code(remapfw::invalid_option))]
	InvalidOption {
		name: String,
		value: String,
		options: String,
	},

	#[error("`{value}` is not a number, but parameter `{name}` is number-typed")]
	#[diagnostic(code(remapfw::invalid_number))]
	InvalidNumber { name: String, value: String },

	#[error("no parameter named `{0}` was declared in the source")]
	#[diagnostic(
		code(remapfw::unknown_parameter),
		help("run `remapfw list` to see the parameters the template declares")
	)]
	UnknownParameter(String),
}

pub type RemapFwResult<T> = Result<T, RemapFwError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
