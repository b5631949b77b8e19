//! Crate root: wires together the translation pipeline.
//!
//! The stages are intentionally small and composable so they can be evolved
//! independently:
//! - `tokenizer` normalizes the raw text and produces a flat token stream.
//! - `comments` removes nested block comments, then line comments.
//! - `directives` pulls `%%`-prefixed declarations out of the stream.
//! - `words` rewrites symbolic operators into label-safe canonical names.
//! - `segmenter` splits the stream into `: name ... ;` definitions and
//!   validates each one into a `FunctionDefinition`.
//! - `codegen` lowers the definitions into NASM assembly text.
//! - `error` centralises the fatal-error taxonomy shared by all stages.

pub mod comments;
pub mod context;
pub mod directives;
pub mod error;
pub mod segmenter;
pub mod tokenizer;
pub mod words;

mod codegen;

pub use context::{Context, FunctionDefinition};
pub use error::{TranslateError, TranslateResult};

/// Translate a Sig source string into NASM assembly. `source_name` is used
/// only in diagnostics. A fresh context is created per call; nothing is
/// shared across translation units.
pub fn translate(source: &str, source_name: &str) -> TranslateResult<String> {
  let mut ctx = Context::new(source_name);
  let tokens = tokenizer::tokenize(source);
  let tokens = comments::strip_block_comments(tokens, &ctx)?;
  let tokens = comments::strip_line_comments(tokens);
  let tokens = directives::extract(tokens, &mut ctx)?;
  let tokens = words::translate(tokens);
  let defs = segmenter::segment(tokens, &ctx)?;
  // All names are registered here, before any body is lowered, so forward
  // and mutual calls between user functions resolve.
  let funcs = segmenter::build(defs, &mut ctx)?;
  codegen::generate(&funcs, &ctx)
}
