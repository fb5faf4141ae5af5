//! `remapfw_core` is the parameterization engine for buildable keyboard
//! firmware templates. Firmware authors embed typed parameter declarations
//! in their source as self-contained tags, end users pick values for them,
//! and the engine produces a concrete, compilable source file by splicing
//! the resolved literals over the declaration spans.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Firmware source template
//!   → Lexer (tokenizes `<remap ... />` candidates into TokenGroups)
//!   → Parser (validates attributes, builds FirmwareParameter descriptors)
//!   → caller collects value overrides (UI, CLI, build workflow)
//!   → Engine (splices resolved values over the declaration spans)
//! ```
//!
//! ## Key Types
//!
//! - [`FirmwareParameter`] — A validated declaration with its name, kind,
//!   options, default, optional comment, and exact source [`Span`].
//! - [`ParameterType`] — The recognized kinds: `select`, `text`, `number`.
//! - [`ExtractDiagnostic`] — Why a candidate tag was rejected, for callers
//!   that want to surface rejections.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use remapfw_core::apply_parameter_values;
//! use remapfw_core::extract_parameters;
//!
//! let source = r#"#define LAYERS <remap name="layers" type="number" default="4" />"#;
//! let parameters = extract_parameters(source);
//! assert_eq!(parameters.len(), 1);
//!
//! let overrides = HashMap::from([("layers".to_string(), "8".to_string())]);
//! let resolved = apply_parameter_values(source, &parameters, &overrides).unwrap();
//! assert_eq!(resolved, "#define LAYERS 8");
//! ```
//!
//! Both stages are pure, synchronous functions over in-memory strings: no
//! I/O, no shared state, nothing to cancel. Descriptors are only valid for
//! the exact source string they were extracted from.

pub use engine::*;
pub use error::*;
pub use parser::*;
pub use span::*;

mod engine;
mod error;
pub(crate) mod lexer;
mod parser;
mod span;
pub(crate) mod tokens;

#[cfg(test)]
mod __fixtures;
