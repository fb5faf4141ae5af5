use std::fmt::Display;

use crate::Span;

/// Only tokenize the declaration tags, not the firmware code around them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
	/// `<remap`
	TagOpen,
	/// `/>`
	SelfClose,
	/// `=`
	Equals,
	/// An attribute key, e.g. `default`
	Ident(String),
	/// A double-quoted attribute value with the quotes stripped,
	/// e.g. `"bar,baz"` becomes `bar,baz`
	String(String),
}

impl Display for Token {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Token::TagOpen => write!(f, "<remap"),
			Token::SelfClose => write!(f, "/>"),
			Token::Equals => write!(f, "="),
			Token::Ident(ident) => write!(f, "{ident}"),
			Token::String(string) => write!(f, "\"{string}\""),
		}
	}
}

/// The tokens of a single candidate declaration tag together with its
/// absolute span in the original source.
///
/// Each `<remap ... />` candidate in the source is tokenized into one
/// `TokenGroup`. The span runs from the first byte of `<remap` to one past
/// the final byte of `/>`, measured against the full original source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenGroup {
	/// The sequence of tokens lexed from the candidate tag.
	pub tokens: Vec<Token>,
	/// The absolute byte span of the candidate tag in the source.
	pub span: Span,
}
