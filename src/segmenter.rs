//! Function segmentation and building.
//!
//! Segmentation is a two-state machine over the flat token stream: outside a
//! definition only `:` is legal, inside one everything is collected until the
//! terminating `;`. Building then peels the delimiters off each raw
//! definition and runs the naming checks, registering each accepted name
//! before the next definition is validated.

use crate::context::{Context, FunctionDefinition};
use crate::error::{TranslateError, TranslateResult};
use crate::tokenizer::Token;
use crate::words;

pub const DEF_START: &str = ":";
pub const DEF_END: &str = ";";

/// Split the stream into one raw sub-sequence per `: ... ;` definition, the
/// delimiters included. Every token must belong to some definition – Sig has
/// no top-level script context.
pub fn segment(tokens: Vec<Token>, ctx: &Context) -> TranslateResult<Vec<Vec<Token>>> {
  let mut defs = Vec::new();
  let mut current: Vec<Token> = Vec::new();

  for token in tokens {
    if current.is_empty() {
      if token.text != DEF_START {
        return Err(TranslateError::token_outside_function(ctx.source_name(), &token));
      }
      current.push(token);
    } else {
      let done = token.text == DEF_END;
      current.push(token);
      if done {
        defs.push(std::mem::take(&mut current));
      }
    }
  }

  // Input ended while still inside a definition; report the name if we got
  // that far, otherwise the opening ':'.
  if let Some(token) = current.get(1).or_else(|| current.first()) {
    return Err(TranslateError::unterminated_function(ctx.source_name(), token));
  }

  Ok(defs)
}

/// Turn every raw definition into a validated `FunctionDefinition`,
/// registering each name as it goes so later definitions (and the code
/// generator) can resolve calls to it.
pub fn build(defs: Vec<Vec<Token>>, ctx: &mut Context) -> TranslateResult<Vec<FunctionDefinition>> {
  defs.into_iter().map(|raw| build_one(raw, ctx)).collect()
}

fn build_one(raw: Vec<Token>, ctx: &mut Context) -> TranslateResult<FunctionDefinition> {
  // The segmenter guarantees raw = [":", ..., ";"], so the name is the
  // second token and the body is everything between it and the terminator.
  let Some(name) = raw.get(1).cloned() else {
    // Cannot happen for segmenter output; treat it as an unterminated
    // definition rather than panic.
    let fallback = Token::new(DEF_START, 0);
    let at = raw.first().unwrap_or(&fallback);
    return Err(TranslateError::unterminated_function(ctx.source_name(), at));
  };
  let body = raw.get(2..raw.len() - 1).map(<[Token]>::to_vec).unwrap_or_default();

  if ctx.is_user_function(&name.text) {
    return Err(TranslateError::redefinition(ctx.source_name(), &name, "user"));
  }
  if ctx.is_builtin(&name.text) {
    return Err(TranslateError::redefinition(ctx.source_name(), &name, "built-in"));
  }
  if words::is_number(&name.text) {
    return Err(TranslateError::invalid_name(ctx.source_name(), &name));
  }

  ctx.define_function(&name.text);
  Ok(FunctionDefinition { name, body })
}
