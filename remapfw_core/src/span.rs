use std::fmt::Display;
use std::ops::Range;

use serde::Deserialize;
use serde::Serialize;

/// The absolute byte offsets of a declaration tag within the original,
/// unmodified firmware source. `start` points at the `<` of the opening
/// marker and `end` is one past the final `>` of the self-closing marker,
/// so `&source[span.start..span.end]` reproduces the tag text exactly.
///
/// Spans are always measured against the full original source, never a
/// trimmed or re-indexed copy, which keeps them valid even when other
/// candidate tags in the same source are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
	/// Byte offset of the first character of the opening marker.
	pub start: usize,
	/// Byte offset one past the last character of the closing marker.
	pub end: usize,
}

impl Span {
	pub fn new(start: usize, end: usize) -> Self {
		Self { start, end }
	}

	/// The length of the tag text in bytes.
	pub fn len(&self) -> usize {
		self.end.saturating_sub(self.start)
	}

	pub fn is_empty(&self) -> bool {
		self.end <= self.start
	}

	/// Slice the original source at this span. Returns `None` when the span
	/// is out of bounds or does not fall on character boundaries, which
	/// indicates the span is stale for the given source.
	pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
		source.get(self.start..self.end)
	}
}

impl From<Range<usize>> for Span {
	fn from(range: Range<usize>) -> Self {
		Self::new(range.start, range.end)
	}
}

impl From<Span> for Range<usize> {
	fn from(span: Span) -> Self {
		span.start..span.end
	}
}

impl Display for Span {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}..{}", self.start, self.end)
	}
}
