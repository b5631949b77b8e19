//! Word-level knowledge shared by several stages: the built-in runtime
//! vocabulary, the symbolic-operator translation table, and the literal
//! classifiers.
//!
//! The translation table exists because NASM will not accept `+` or `u>=` as
//! a label, so symbolic operators are rewritten into the identifier-safe
//! names the runtime library exports.

use crate::tokenizer::Token;

/// Every operation the runtime library guarantees to implement. The code
/// generator may call these by name but never defines them, and no user
/// function may shadow one.
pub const BUILTINS: &[&str] = &[
  "addsig",
  "subsig",
  "mulsig",
  "divsig",
  "equalsig",
  "notequalsig",
  "greatersig",
  "lesssig",
  "greaterequalsig",
  "lessequalsig",
  "equalzerosig",
  "twodivsig",
  "twomulsig",
  "emit",
  "dup",
  "over",
  "swap",
  "rot",
  "nip",
  "tuck",
  "drop",
  "andsig",
  "orsig",
  "depth",
  "put",
  "get",
  "alloc",
  "free",
  "putchar",
  "getchar",
  "putdouble",
  "getdouble",
  "ugreater",
  "uless",
  "ugreaterequal",
  "ulessequal",
];

pub fn is_builtin(name: &str) -> bool {
  BUILTINS.contains(&name)
}

/// Canonical label-safe name for a symbolic operator, if it has one.
pub fn canonical(word: &str) -> Option<&'static str> {
  let name = match word {
    "+" => "addsig",
    "-" => "subsig",
    "*" => "mulsig",
    "/" => "divsig",
    "=" => "equalsig",
    "<>" => "notequalsig",
    ">" => "greatersig",
    "<" => "lesssig",
    ">=" => "greaterequalsig",
    "<=" => "lessequalsig",
    "0=" => "equalzerosig",
    "2/" => "twodivsig",
    "2*" => "twomulsig",
    "!" => "put",
    "@" => "get",
    "and" => "andsig",
    "or" => "orsig",
    "d!" => "putdouble",
    "d@" => "getdouble",
    "c!" => "putchar",
    "c@" => "getchar",
    "u>" => "ugreater",
    "u<" => "uless",
    "u>=" => "ugreaterequal",
    "u<=" => "ulessequal",
    _ => return None,
  };
  Some(name)
}

/// Rewrite symbolic operator tokens into their canonical names; everything
/// else passes through unchanged. Purely substitutive and idempotent, since
/// no canonical name is itself a key of the table.
pub fn translate(tokens: Vec<Token>) -> Vec<Token> {
  tokens
    .into_iter()
    .map(|token| match canonical(&token.text) {
      Some(name) => Token::new(name, token.line),
      None => token,
    })
    .collect()
}

/// Whether a word is a numeric literal: decimal digits, optionally negative,
/// or hexadecimal with a `0x` / `-0x` prefix. NASM understands `0x` literals
/// directly, so no value conversion is needed anywhere downstream.
pub fn is_number(word: &str) -> bool {
  let unsigned = word.strip_prefix('-').unwrap_or(word);
  if let Some(digits) = unsigned.strip_prefix("0x") {
    return !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit());
  }
  !unsigned.is_empty() && unsigned.bytes().all(|b| b.is_ascii_digit())
}

/// The value of a character literal: a two-character word of `'` followed by
/// one printable ASCII character. Returns `None` for anything else.
pub fn char_literal_value(word: &str) -> Option<char> {
  let bytes = word.as_bytes();
  if bytes.len() == 2 && bytes[0] == b'\'' && (0x20..=0x7e).contains(&bytes[1]) {
    Some(bytes[1] as char)
  } else {
    None
  }
}

pub fn is_char_literal(word: &str) -> bool {
  char_literal_value(word).is_some()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn recognises_decimal_and_hex_numbers() {
    assert!(is_number("123"));
    assert!(is_number("-42"));
    assert!(is_number("0xDEAD"));
    assert!(is_number("-0x10"));
  }

  #[test]
  fn rejects_non_numbers() {
    assert!(!is_number(""));
    assert!(!is_number("-"));
    assert!(!is_number("0x"));
    assert!(!is_number("-0x"));
    assert!(!is_number("12a"));
    assert!(!is_number("main"));
  }

  #[test]
  fn char_literals_are_exactly_two_chars() {
    assert_eq!(char_literal_value("'a"), Some('a'));
    assert_eq!(char_literal_value("' "), Some(' '));
    assert_eq!(char_literal_value("'ab"), None);
    assert_eq!(char_literal_value("'"), None);
    assert_eq!(char_literal_value("a"), None);
  }

  #[test]
  fn translation_covers_all_operators() {
    for op in ["+", "-", "*", "/", "=", "<>", ">", "<", ">=", "<=", "0=", "2/", "2*", "!", "@", "and", "or", "d!", "d@", "c!", "c@", "u>", "u<", "u>=", "u<="] {
      let name = canonical(op).expect("operator must translate");
      assert!(is_builtin(name), "{op} must map to a builtin, got {name}");
    }
  }

  #[test]
  fn canonical_names_pass_through() {
    assert_eq!(canonical("addsig"), None);
    assert_eq!(canonical("main"), None);
  }
}
