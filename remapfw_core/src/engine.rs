use std::collections::HashMap;

use crate::FirmwareParameter;
use crate::ParameterType;
use crate::RemapFwError;
use crate::RemapFwResult;

/// Rewrite firmware source text by replacing every parameter declaration
/// span with its default value.
///
/// Equivalent to [`apply_parameter_values`] with no overrides.
pub fn apply_parameter_defaults(
	source: &str,
	parameters: &[FirmwareParameter],
) -> RemapFwResult<String> {
	apply_parameter_values(source, parameters, &HashMap::new())
}

/// Rewrite firmware source text by replacing every parameter declaration
/// span with its resolved value: the override supplied for its name, or
/// its default when no override is present.
///
/// The parameters must come from extracting this exact source (or one
/// identical over the relevant spans) and must be in ascending span order,
/// as extraction returns them. Every region outside the declaration spans
/// is copied byte for byte; declarations that were rejected during
/// extraction have no descriptor here and therefore survive verbatim.
///
/// Spans that are out of order, overlapping, out of bounds, or that no
/// longer read as a declaration tag fail fast with a descriptive error
/// rather than producing corrupted source, since corrupted output would
/// reach a firmware compiler undetected.
pub fn apply_parameter_values(
	source: &str,
	parameters: &[FirmwareParameter],
	values: &HashMap<String, String>,
) -> RemapFwResult<String> {
	let mut output = String::with_capacity(source.len());
	let mut cursor = 0usize;

	for parameter in parameters {
		let span = parameter.span;

		if span.start < cursor {
			return Err(RemapFwError::UnorderedSpans {
				name: parameter.name.clone(),
				start: span.start,
			});
		}

		if span.end > source.len() || span.start > span.end {
			return Err(RemapFwError::SpanOutOfBounds {
				name: parameter.name.clone(),
				start: span.start,
				end: span.end,
				len: source.len(),
			});
		}

		// A stale span would splice the resolved value into the middle of
		// unrelated firmware code. Verify the span still reads as a
		// declaration tag before touching it.
		let tag = span.slice(source).filter(|tag| is_declaration_tag(tag));
		if tag.is_none() {
			return Err(RemapFwError::StaleSpan {
				name: parameter.name.clone(),
				start: span.start,
				end: span.end,
			});
		}

		let resolved = values
			.get(&parameter.name)
			.map_or(parameter.default.as_str(), String::as_str);

		output.push_str(&source[cursor..span.start]);
		output.push_str(resolved);
		cursor = span.end;
	}

	output.push_str(&source[cursor..]);
	Ok(output)
}

/// Check that a supplied value lies in the parameter's value domain:
/// `select` values must be one of the declared options, `number` values
/// must parse as a number, and `text` accepts anything.
///
/// The substitution engine itself does not call this; it splices whatever
/// literal it is given. Callers collecting user overrides run it before
/// rendering.
pub fn validate_parameter_value(
	parameter: &FirmwareParameter,
	value: &str,
) -> RemapFwResult<()> {
	match parameter.r#type {
		ParameterType::Select => {
			if parameter.options.iter().any(|option| option == value) {
				Ok(())
			} else {
				Err(RemapFwError::InvalidOption {
					name: parameter.name.clone(),
					value: value.to_string(),
					options: parameter.options.join(","),
				})
			}
		}
		ParameterType::Number => {
			if value.parse::<f64>().is_ok() {
				Ok(())
			} else {
				Err(RemapFwError::InvalidNumber {
					name: parameter.name.clone(),
					value: value.to_string(),
				})
			}
		}
		ParameterType::Text => Ok(()),
	}
}

/// Whether a source slice still reads as a full declaration tag.
fn is_declaration_tag(tag: &str) -> bool {
	tag.starts_with("<remap") && tag.ends_with("/>")
}
