//! Negative tests: malformed input must fail with the right error, and the
//! diagnostic must name the source and line of the offending token.

use sigc::{TranslateError, translate};

fn fails(source: &str) -> TranslateError {
  match translate(source, "bad.sig") {
    Ok(out) => panic!("expected failure for {source:?}, got:\n{out}"),
    Err(err) => err,
  }
}

#[test]
fn stray_close_paren() {
  let err = fails(": main 1 ; )");
  assert!(matches!(err, TranslateError::MismatchedComment { .. }));
}

#[test]
fn unclosed_block_comment() {
  let err = fails("( never closed : main 1 ;");
  assert!(matches!(err, TranslateError::MismatchedComment { .. }));
}

#[test]
fn close_inside_nested_comment_still_balances() {
  // two opens, one close: still open at end of input
  let err = fails("( a ( b ) : main 1 ;");
  assert!(matches!(err, TranslateError::MismatchedComment { .. }));
}

#[test]
fn unknown_directive() {
  let err = fails("%%frob a b : main 1 ;");
  assert!(matches!(
    err,
    TranslateError::UnknownDirective { ref token, .. } if token == "%%frob"
  ));
}

#[test]
fn directive_cut_short_by_end_of_input() {
  let err = fails(": main 1 ; %%var counter");
  assert!(matches!(err, TranslateError::TruncatedDirective { .. }));
}

#[test]
fn token_outside_any_function() {
  let err = fails("1 2 +");
  assert!(matches!(
    err,
    TranslateError::TokenOutsideFunction { ref token, .. } if token == "1"
  ));
}

#[test]
fn trailing_token_after_last_function() {
  let err = fails(": main 1 ; stray");
  assert!(matches!(
    err,
    TranslateError::TokenOutsideFunction { ref token, .. } if token == "stray"
  ));
}

#[test]
fn redefining_a_builtin() {
  let err = fails(": dup 1 ;");
  assert!(matches!(
    err,
    TranslateError::Redefinition { kind: "built-in", ref token, .. } if token == "dup"
  ));
}

#[test]
fn redefining_a_builtin_through_translation() {
  // `+` is rewritten to addsig before segmentation, so this collides too
  let err = fails(": + 1 ;");
  assert!(matches!(
    err,
    TranslateError::Redefinition { kind: "built-in", ref token, .. } if token == "addsig"
  ));
}

#[test]
fn redefining_a_user_function() {
  let err = fails(": f 1 ; : f 2 ;");
  assert!(matches!(err, TranslateError::Redefinition { kind: "user", .. }));
}

#[test]
fn numeric_function_name() {
  let err = fails(": 123 1 ;");
  assert!(matches!(
    err,
    TranslateError::InvalidName { ref token, .. } if token == "123"
  ));
}

#[test]
fn unterminated_definition() {
  let err = fails(": main 1 2");
  assert!(matches!(
    err,
    TranslateError::UnterminatedFunction { ref token, .. } if token == "main"
  ));
}

#[test]
fn unknown_word_in_body() {
  let err = fails(": main frobnicate ;");
  assert!(matches!(
    err,
    TranslateError::UnknownWord { ref token, .. } if token == "frobnicate"
  ));
}

#[test]
fn diagnostics_carry_source_and_line() {
  let err = fails(": main 1 ;\n: second\nbogus ;");
  let message = err.to_string();
  assert!(message.contains("bad.sig"), "{message}");
  assert!(message.contains("line 3"), "{message}");
  assert!(message.contains("bogus"), "{message}");
}
