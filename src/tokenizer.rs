//! Lexical analysis: turns the raw input string into a vector of tokens.
//!
//! The tokenizer is intentionally tiny – Sig splits on whitespace and nothing
//! else. The only subtlety is that newlines must survive as standalone `\n`
//! tokens because the line-comment stripper needs them as terminators, so the
//! text is normalized first to pad newlines with spaces and flatten tabs.

/// Smallest unit of source text after whitespace splitting. Tokens carry the
/// line they came from so later stages can report useful diagnostics even
/// after comment removal has discarded their neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub text: String,
  pub line: u32,
}

impl Token {
  pub fn new(text: impl Into<String>, line: u32) -> Self {
    Self {
      text: text.into(),
      line,
    }
  }

  /// True for the synthetic newline tokens produced by normalization.
  pub fn is_newline(&self) -> bool {
    self.text == "\n"
  }
}

/// Rewrite the raw text so that a plain split on spaces yields the token
/// stream: newlines become isolated tokens, tabs and carriage returns become
/// ordinary separators.
pub fn normalize(source: &str) -> String {
  let mut normalized = String::with_capacity(source.len() + source.len() / 8);
  for c in source.chars() {
    match c {
      '\n' => normalized.push_str(" \n "),
      '\t' | '\r' => normalized.push(' '),
      _ => normalized.push(c),
    }
  }
  normalized
}

/// Split the normalized source into non-empty tokens, preserving order and
/// tracking line numbers. Always succeeds for any input string.
pub fn tokenize(source: &str) -> Vec<Token> {
  let normalized = normalize(source);
  let mut tokens = Vec::new();
  let mut line = 1;

  for piece in normalized.split(' ') {
    if piece.is_empty() {
      continue;
    }
    tokens.push(Token::new(piece, line));
    if piece == "\n" {
      line += 1;
    }
  }

  tokens
}

#[cfg(test)]
mod tests {
  use super::*;

  fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
  }

  #[test]
  fn splits_on_runs_of_whitespace() {
    let tokens = tokenize("1   2\t\t3");
    assert_eq!(texts(&tokens), ["1", "2", "3"]);
  }

  #[test]
  fn newlines_survive_as_tokens() {
    let tokens = tokenize("a\nb");
    assert_eq!(texts(&tokens), ["a", "\n", "b"]);
  }

  #[test]
  fn tracks_line_numbers() {
    let tokens = tokenize("a\nb\nc");
    let lines: Vec<u32> = tokens.iter().filter(|t| !t.is_newline()).map(|t| t.line).collect();
    assert_eq!(lines, [1, 2, 3]);
  }

  #[test]
  fn empty_input_yields_no_tokens() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("  \t  ").is_empty());
  }
}
