use logos::Logos;

use crate::Span;
use crate::tokens::Token;
use crate::tokens::TokenGroup;

/// Raw tokens produced by logos for flat tokenization of the firmware
/// source text. Anything the patterns below don't cover comes back as an
/// error token and is skipped outside of tags.
#[derive(Logos, Debug, PartialEq)]
enum RawToken {
	#[token("<remap")]
	TagOpen,
	#[token("/>")]
	SelfClose,
	#[token("=")]
	Equals,
	#[token("\n")]
	Newline,
	#[regex(r"[ \t\r]+")]
	Whitespace,
	#[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
	Ident,
	#[regex(r#""[^"]*""#)]
	DoubleQuotedString,
}

/// Context states for the state machine that drives context-dependent
/// token processing.
enum LexerContext {
	/// The lexer is currently outside of any declaration tag.
	Outside,
	/// The lexer is currently inside a `<remap ... />` candidate.
	Tag,
}

/// Walks the logos token stream with context-dependent rules, building a
/// `TokenGroup` for every candidate declaration tag.
///
/// Spans are taken directly from the logos byte ranges, so every group
/// span is absolute against the original source regardless of how many
/// earlier candidates were abandoned.
struct TagWalker<'a> {
	/// The source text being scanned.
	source: &'a str,
	/// The collected raw tokens and their byte spans.
	raw_tokens: Vec<(Result<RawToken, ()>, std::ops::Range<usize>)>,
	/// Current index into `raw_tokens`.
	cursor: usize,
	/// The current context.
	context: LexerContext,
	/// The token group being built, with the span of its opening marker.
	token_group: TokenGroup,
	/// Whether the opening marker was the last token consumed. The grammar
	/// requires whitespace between `<remap` and the first attribute.
	just_opened: bool,
	/// Collected candidate groups.
	groups: Vec<TokenGroup>,
}

impl<'a> TagWalker<'a> {
	fn new(source: &'a str) -> Self {
		let raw_tokens: Vec<_> = RawToken::lexer(source).spanned().collect();

		Self {
			source,
			raw_tokens,
			cursor: 0,
			context: LexerContext::Outside,
			token_group: TokenGroup {
				tokens: vec![],
				span: Span::new(0, 0),
			},
			just_opened: false,
			groups: vec![],
		}
	}

	/// Get the text slice for the current raw token.
	fn current_slice(&self) -> &'a str {
		let (_, span) = &self.raw_tokens[self.cursor];
		&self.source[span.clone()]
	}

	/// Get the byte span of the current raw token.
	fn current_span(&self) -> Span {
		let (_, span) = &self.raw_tokens[self.cursor];
		Span::new(span.start, span.end)
	}

	/// Add a token to the current token group and advance the cursor.
	fn push_token(&mut self, token: Token) {
		self.token_group.span.end = self.current_span().end;
		self.token_group.tokens.push(token);
		self.cursor += 1;
	}

	/// Begin a new token group at the current `<remap` marker.
	fn open_group(&mut self) {
		self.token_group = TokenGroup {
			tokens: vec![],
			span: self.current_span(),
		};
		self.push_token(Token::TagOpen);
		self.context = LexerContext::Tag;
		self.just_opened = true;
	}

	/// Finalize the current token group at the `/>` marker.
	fn close_group(&mut self) {
		self.push_token(Token::SelfClose);
		let group = std::mem::replace(
			&mut self.token_group,
			TokenGroup {
				tokens: vec![],
				span: Span::new(0, 0),
			},
		);
		self.groups.push(group);
		self.context = LexerContext::Outside;
	}

	/// Abandon the current token group without consuming the current raw
	/// token. The token is reprocessed in the `Outside` context, so a
	/// `<remap` marker appearing inside a malformed candidate still opens a
	/// fresh group.
	fn abandon_group(&mut self) {
		self.token_group.tokens.clear();
		self.context = LexerContext::Outside;
	}

	/// Main processing loop: walk the raw token stream with
	/// context-dependent rules.
	fn process(&mut self) {
		while self.cursor < self.raw_tokens.len() {
			let (result, _) = &self.raw_tokens[self.cursor];

			// Unrecognized bytes: skip them outside of tags, abandon the
			// candidate inside a tag.
			let Ok(raw) = result else {
				match self.context {
					LexerContext::Outside => self.cursor += 1,
					LexerContext::Tag => {
						self.abandon_group();
						self.cursor += 1;
					}
				}
				continue;
			};

			match self.context {
				LexerContext::Outside => {
					match raw {
						RawToken::TagOpen => self.open_group(),
						// Everything that isn't an opening marker is
						// ordinary firmware code.
						_ => self.cursor += 1,
					}
				}
				LexerContext::Tag => {
					if self.just_opened
						&& !matches!(raw, RawToken::Whitespace | RawToken::Newline)
					{
						// No separator after `<remap` means this was never a
						// declaration tag (e.g. `<remapped`).
						self.abandon_group();
						continue;
					}

					match raw {
						RawToken::SelfClose => self.close_group(),
						RawToken::TagOpen => {
							// A nested opening marker invalidates the current
							// candidate; restart from here.
							self.abandon_group();
						}
						RawToken::Equals => self.push_token(Token::Equals),
						RawToken::Ident => {
							let ident = self.current_slice().to_string();
							self.push_token(Token::Ident(ident));
						}
						RawToken::DoubleQuotedString => {
							let slice = self.current_slice();
							let inner = slice[1..slice.len() - 1].to_string();
							self.push_token(Token::String(inner));
						}
						RawToken::Whitespace | RawToken::Newline => {
							// Attribute order and spacing are free-form; the
							// group span tracks the markers, so whitespace is
							// not recorded.
							self.just_opened = false;
							self.cursor += 1;
						}
					}
				}
			}
		}
	}
}

/// Tokenize firmware source text into one `TokenGroup` per candidate
/// declaration tag, in source order. Candidates that never reach a closing
/// `/>` marker are dropped here; attribute validation happens later in the
/// parser.
pub(crate) fn tokenize(source: &str) -> Vec<TokenGroup> {
	let mut walker = TagWalker::new(source);
	walker.process();
	walker.groups
}
