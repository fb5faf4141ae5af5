use crate::FirmwareParameter;
use crate::ParameterType;
use crate::Span;

/// A template with one declaration of every recognized kind.
pub const SOURCE_WITH_ALL_TYPES: &str = r#"
        <remap name="foo" type="select" default="baz" options="bar,baz" />
        <remap name="bar" type="text" default="john" />
        <remap name="baz" type="number" default="20" />
      "#;

/// The same template, but the select declaration omits its options.
pub const SOURCE_SELECT_WITHOUT_OPTIONS: &str = r#"
        <remap name="foo" type="select" default="baz" />
        <remap name="bar" type="text" default="john" />
        <remap name="baz" type="number" default="20" />
      "#;

/// The middle declaration carries an unrecognized type.
pub const SOURCE_WITH_UNKNOWN_TYPE: &str = r#"
        <remap name="foo" type="select" options="bar,baz" default="baz" />
        <remap name="bar" type="unknown" default="john" />
        <remap name="baz" type="number" default="20" />
      "#;

/// Every declaration carries a comment annotation.
pub const SOURCE_WITH_COMMENTS: &str = r#"
        <remap name="foo" type="select" default="baz" options="bar,baz" comment="comment1" />
        <remap name="bar" type="text" default="john" comment="comment2" />
        <remap name="baz" type="number" default="20" comment="comment3 foobar" />
      "#;

pub fn parameter(
	name: &str,
	r#type: ParameterType,
	options: &[&str],
	default: &str,
	span: Span,
) -> FirmwareParameter {
	FirmwareParameter {
		name: name.to_string(),
		r#type,
		options: options.iter().map(ToString::to_string).collect(),
		default: default.to_string(),
		comment: None,
		span,
	}
}

pub fn parameter_with_comment(
	name: &str,
	r#type: ParameterType,
	options: &[&str],
	default: &str,
	comment: &str,
	span: Span,
) -> FirmwareParameter {
	FirmwareParameter {
		comment: Some(comment.to_string()),
		..parameter(name, r#type, options, default, span)
	}
}
