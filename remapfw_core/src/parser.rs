use serde::Deserialize;
use serde::Serialize;

use crate::Span;
use crate::lexer::tokenize;
use crate::tokens::Token;
use crate::tokens::TokenGroup;

/// The recognized kinds of buildable firmware parameters. The kind decides
/// which editing control the surrounding application renders and how a
/// supplied value is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ParameterType {
	/// A choice from an enumerated, ordered set of options.
	Select,
	/// Free-form text.
	Text,
	/// A numeric value.
	Number,
}

impl ParameterType {
	/// Map a `type` attribute value to a parameter kind. Any other value
	/// makes the declaration invalid.
	fn from_keyword(keyword: &str) -> Option<Self> {
		match keyword {
			"select" => Some(Self::Select),
			"text" => Some(Self::Text),
			"number" => Some(Self::Number),
			_ => None,
		}
	}
}

impl std::fmt::Display for ParameterType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Select => write!(f, "select"),
			Self::Text => write!(f, "text"),
			Self::Number => write!(f, "number"),
		}
	}
}

/// A validated parameter declaration extracted from firmware source text.
///
/// Declarations are embedded in the source as self-contained tags:
///
/// ```c
/// <remap name="layers" type="select" default="4" options="2,4,8" />
/// ```
///
/// The [`span`](FirmwareParameter::span) records exactly where the tag sits
/// in the original source so the substitution engine can splice a resolved
/// value over it. Descriptors are ephemeral: they are only meaningful for
/// the source string they were extracted from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirmwareParameter {
	/// The parameter identifier. Uniqueness across a source is not enforced
	/// here; downstream consumers should treat `(name, span.start)` as the
	/// identity when duplicates are possible.
	pub name: String,
	/// The declared kind of the parameter.
	pub r#type: ParameterType,
	/// The ordered option set. Non-empty only for `select` declarations;
	/// always empty for `text` and `number`, even when the source carries a
	/// stray `options` attribute.
	pub options: Vec<String>,
	/// The literal value substituted when no override is supplied.
	pub default: String,
	/// Free-text annotation for display purposes. Has no effect on
	/// substitution.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub comment: Option<String>,
	/// The absolute byte span of the declaration tag in the original source.
	pub span: Span,
}

/// A diagnostic produced during extraction. These describe candidate tags
/// that were rejected; rejection is an expected input shape, so none of
/// them prevent extraction from completing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExtractDiagnostic {
	/// The candidate did not follow the `key="value"` attribute grammar.
	MalformedTag { span: Span },
	/// A required attribute (`name`, `type`, or `default`) was missing.
	MissingAttribute { attribute: String, span: Span },
	/// The `type` attribute named an unrecognized kind.
	UnknownType {
		name: String,
		type_name: String,
		span: Span,
	},
	/// A `select` declaration carried no `options` attribute.
	MissingOptions { name: String, span: Span },
}

impl ExtractDiagnostic {
	/// The span of the rejected candidate tag.
	pub fn span(&self) -> Span {
		match self {
			Self::MalformedTag { span }
			| Self::MissingAttribute { span, .. }
			| Self::UnknownType { span, .. }
			| Self::MissingOptions { span, .. } => *span,
		}
	}
}

impl std::fmt::Display for ExtractDiagnostic {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::MalformedTag { span } => {
				write!(f, "malformed declaration tag at {span}")
			}
			Self::MissingAttribute { attribute, span } => {
				write!(f, "declaration tag at {span} is missing `{attribute}`")
			}
			Self::UnknownType {
				name,
				type_name,
				span,
			} => {
				write!(
					f,
					"parameter `{name}` at {span} has unrecognized type `{type_name}`"
				)
			}
			Self::MissingOptions { name, span } => {
				write!(
					f,
					"select parameter `{name}` at {span} declares no options"
				)
			}
		}
	}
}

/// Scan firmware source text and return every valid parameter declaration
/// in source order.
///
/// Candidates that are malformed, carry an unrecognized `type`, or are
/// `select`-typed without an `options` attribute are silently omitted;
/// their tag text is left for the substitution engine to pass through
/// untouched. Firmware code may legitimately contain text that merely
/// resembles a declaration, so rejection is not an error.
pub fn extract_parameters(source: impl AsRef<str>) -> Vec<FirmwareParameter> {
	let (parameters, diagnostics) = extract_parameters_with_diagnostics(source);

	if !diagnostics.is_empty() {
		tracing::debug!(
			rejected = diagnostics.len(),
			"discarded candidate declaration tags"
		);
	}

	parameters
}

/// Like [`extract_parameters`], but also returns a diagnostic for every
/// rejected candidate tag so callers can surface them.
pub fn extract_parameters_with_diagnostics(
	source: impl AsRef<str>,
) -> (Vec<FirmwareParameter>, Vec<ExtractDiagnostic>) {
	let mut parameters = Vec::new();
	let mut diagnostics = Vec::new();

	for group in tokenize(source.as_ref()) {
		match parameter_from_group(&group) {
			Ok(parameter) => parameters.push(parameter),
			Err(diagnostic) => diagnostics.push(diagnostic),
		}
	}

	(parameters, diagnostics)
}

/// Build a parameter descriptor from a candidate token group, or explain
/// why the candidate is rejected.
fn parameter_from_group(group: &TokenGroup) -> Result<FirmwareParameter, ExtractDiagnostic> {
	let attributes = collect_attributes(group)
		.ok_or(ExtractDiagnostic::MalformedTag { span: group.span })?;

	let lookup = |key: &str| {
		attributes
			.iter()
			.rev()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	};

	let require = |key: &'static str| {
		lookup(key).ok_or(ExtractDiagnostic::MissingAttribute {
			attribute: key.to_string(),
			span: group.span,
		})
	};

	let name = require("name")?.to_string();
	let type_keyword = require("type")?;
	let default = require("default")?.to_string();

	let Some(r#type) = ParameterType::from_keyword(type_keyword) else {
		return Err(ExtractDiagnostic::UnknownType {
			name,
			type_name: type_keyword.to_string(),
			span: group.span,
		});
	};

	// Options only apply to `select` declarations. The value is a
	// comma-separated list taken literally, with no whitespace stripping.
	let options = if r#type == ParameterType::Select {
		let Some(raw) = lookup("options") else {
			return Err(ExtractDiagnostic::MissingOptions {
				name,
				span: group.span,
			});
		};
		raw.split(',').map(str::to_string).collect()
	} else {
		Vec::new()
	};

	let comment = lookup("comment").map(str::to_string);

	Ok(FirmwareParameter {
		name,
		r#type,
		options,
		default,
		comment,
		span: group.span,
	})
}

/// Collect `key="value"` pairs from a token group, in source order.
/// Returns `None` when the tokens between the markers do not form a clean
/// sequence of attribute assignments.
fn collect_attributes(group: &TokenGroup) -> Option<Vec<(String, String)>> {
	let mut attributes = Vec::new();
	let mut iter = group.tokens.iter();

	if iter.next() != Some(&Token::TagOpen) {
		return None;
	}

	loop {
		match iter.next()? {
			Token::SelfClose => break,
			Token::Ident(key) => {
				let Token::Equals = iter.next()? else {
					return None;
				};
				let Token::String(value) = iter.next()? else {
					return None;
				};
				attributes.push((key.clone(), value.clone()));
			}
			_ => return None,
		}
	}

	Some(attributes)
}
