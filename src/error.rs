//! Shared error utilities used across the translation pipeline.
//!
//! Every error is fatal: translation aborts on the first one and produces no
//! partial output. Each variant carries the source name and line of the
//! offending token so diagnostics stay actionable even after whitespace and
//! comments have been stripped away.

use snafu::Snafu;

use crate::tokenizer::Token;

pub type TranslateResult<T> = Result<T, TranslateError>;

#[derive(Debug, Snafu)]
pub enum TranslateError {
  #[snafu(display("{source_name}, line {line}: mismatched comment near \"{token}\""))]
  MismatchedComment {
    source_name: String,
    line: u32,
    token: String,
  },

  #[snafu(display("{source_name}, line {line}: unknown directive \"{token}\""))]
  UnknownDirective {
    source_name: String,
    line: u32,
    token: String,
  },

  #[snafu(display("{source_name}, line {line}: directive \"{token}\" is missing arguments"))]
  TruncatedDirective {
    source_name: String,
    line: u32,
    token: String,
  },

  #[snafu(display("{source_name}, line {line}: token \"{token}\" outside any function definition"))]
  TokenOutsideFunction {
    source_name: String,
    line: u32,
    token: String,
  },

  #[snafu(display("{source_name}, line {line}: redefinition of {kind} function \"{token}\""))]
  Redefinition {
    source_name: String,
    line: u32,
    token: String,
    kind: &'static str,
  },

  #[snafu(display("{source_name}, line {line}: function names cannot be numbers, got \"{token}\""))]
  InvalidName {
    source_name: String,
    line: u32,
    token: String,
  },

  #[snafu(display("{source_name}, line {line}: function \"{token}\" is never terminated with ';'"))]
  UnterminatedFunction {
    source_name: String,
    line: u32,
    token: String,
  },

  #[snafu(display("{source_name}, line {line}: unknown word \"{token}\""))]
  UnknownWord {
    source_name: String,
    line: u32,
    token: String,
  },
}

/// Constructors anchored at the token that triggered the error. Keeps the
/// call sites inside the pipeline stages down to a single line.
impl TranslateError {
  pub fn mismatched_comment(source_name: &str, token: &Token) -> Self {
    Self::MismatchedComment {
      source_name: source_name.to_string(),
      line: token.line,
      token: token.text.clone(),
    }
  }

  pub fn unknown_directive(source_name: &str, token: &Token) -> Self {
    Self::UnknownDirective {
      source_name: source_name.to_string(),
      line: token.line,
      token: token.text.clone(),
    }
  }

  pub fn truncated_directive(source_name: &str, token: &Token) -> Self {
    Self::TruncatedDirective {
      source_name: source_name.to_string(),
      line: token.line,
      token: token.text.clone(),
    }
  }

  pub fn token_outside_function(source_name: &str, token: &Token) -> Self {
    Self::TokenOutsideFunction {
      source_name: source_name.to_string(),
      line: token.line,
      token: token.text.clone(),
    }
  }

  pub fn redefinition(source_name: &str, token: &Token, kind: &'static str) -> Self {
    Self::Redefinition {
      source_name: source_name.to_string(),
      line: token.line,
      token: token.text.clone(),
      kind,
    }
  }

  pub fn invalid_name(source_name: &str, token: &Token) -> Self {
    Self::InvalidName {
      source_name: source_name.to_string(),
      line: token.line,
      token: token.text.clone(),
    }
  }

  pub fn unterminated_function(source_name: &str, token: &Token) -> Self {
    Self::UnterminatedFunction {
      source_name: source_name.to_string(),
      line: token.line,
      token: token.text.clone(),
    }
  }

  pub fn unknown_word(source_name: &str, token: &Token) -> Self {
    Self::UnknownWord {
      source_name: source_name.to_string(),
      line: token.line,
      token: token.text.clone(),
    }
  }
}
