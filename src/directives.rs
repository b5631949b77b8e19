//! Directive extraction: `%%`-prefixed tokens that declare things to the
//! compiler rather than emit code.
//!
//! Each recognized directive consumes a fixed window of tokens (the marker
//! plus its arguments); the window never reaches the output stream. The only
//! directive today is `%%var name value`, a global-variable declaration.

use crate::context::Context;
use crate::error::{TranslateError, TranslateResult};
use crate::tokenizer::Token;

pub const DIRECTIVE_MARKER: &str = "%%";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
  /// `%%var name value` – declares a global variable with an initial value.
  Var,
}

/// A recorded directive: its kind plus the argument tokens, marker excluded.
#[derive(Debug, Clone)]
pub struct Directive {
  pub kind: DirectiveKind,
  pub args: Vec<Token>,
}

/// Total token count consumed per directive, marker included.
fn arity(name: &str) -> Option<(DirectiveKind, usize)> {
  match name {
    "var" => Some((DirectiveKind::Var, 3)),
    _ => None,
  }
}

/// Scan for directive markers, record each directive into the context, and
/// return the stream with the consumed windows removed.
pub fn extract(tokens: Vec<Token>, ctx: &mut Context) -> TranslateResult<Vec<Token>> {
  let mut kept = Vec::with_capacity(tokens.len());
  let mut i = 0;

  while i < tokens.len() {
    let token = &tokens[i];
    let Some(name) = token.text.strip_prefix(DIRECTIVE_MARKER) else {
      kept.push(token.clone());
      i += 1;
      continue;
    };

    let Some((kind, consumed)) = arity(name) else {
      return Err(TranslateError::unknown_directive(ctx.source_name(), token));
    };
    if i + consumed > tokens.len() {
      return Err(TranslateError::truncated_directive(ctx.source_name(), token));
    }

    let args = tokens[i + 1..i + consumed].to_vec();
    ctx.record_directive(Directive { kind, args });
    i += consumed;
  }

  Ok(kept)
}
