//! Comment removal: block comments first, then line comments.
//!
//! Both strippers are token-level filters. Block comments use standalone
//! `(` / `)` tokens and nest to arbitrary depth; line comments run from a
//! standalone `\` token to the next newline token. The block pass must run
//! first because its delimiters are ordinary tokens that a pending line
//! comment would otherwise swallow.

use crate::context::Context;
use crate::error::{TranslateError, TranslateResult};
use crate::tokenizer::Token;

/// Remove nested `( ... )` regions. The nesting depth must return to zero by
/// the end of input and may never go negative.
pub fn strip_block_comments(tokens: Vec<Token>, ctx: &Context) -> TranslateResult<Vec<Token>> {
  let mut kept = Vec::with_capacity(tokens.len());
  let mut depth: u32 = 0;
  // Line of the outermost unclosed '(' , reported if input ends mid-comment.
  let mut open = None;

  for token in tokens {
    match token.text.as_str() {
      "(" => {
        if depth == 0 {
          open = Some(token);
        }
        depth += 1;
      }
      ")" => {
        depth = match depth.checked_sub(1) {
          Some(depth) => depth,
          None => return Err(TranslateError::mismatched_comment(ctx.source_name(), &token)),
        };
      }
      _ if depth == 0 => kept.push(token),
      _ => {}
    }
  }

  if depth > 0
    && let Some(token) = open
  {
    return Err(TranslateError::mismatched_comment(ctx.source_name(), &token));
  }

  Ok(kept)
}

/// Remove `\ ... <newline>` regions. Newline tokens have no semantic role
/// past this stage, so they are dropped here as well.
pub fn strip_line_comments(tokens: Vec<Token>) -> Vec<Token> {
  let mut kept = Vec::with_capacity(tokens.len());
  let mut in_comment = false;

  for token in tokens {
    match token.text.as_str() {
      "\\" => in_comment = true,
      "\n" => in_comment = false,
      _ if !in_comment => kept.push(token),
      _ => {}
    }
  }

  kept
}
