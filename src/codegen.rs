//! Code generation: lower validated function definitions into NASM text.
//!
//! Every body word is classified into exactly one of five classes before
//! anything is emitted; a word matching none of them is fatal. Literals are
//! checked before the symbol tables because a literal can never collide with
//! a declared name, which makes the precedence below total and unambiguous.

use crate::context::{Context, FunctionDefinition};
use crate::error::{TranslateError, TranslateResult};
use crate::tokenizer::Token;
use crate::words;

/// The function that receives the stack-initialization call.
const ENTRY_POINT: &str = "main";
/// Runtime routine that sets up the data stack, called once at entry.
const INIT_STACK: &str = "_initstack";
/// Runtime primitive that pushes `eax` onto the data stack.
const PUSH_STACK: &str = "_pushstack";
/// Prefix for global-variable slots, keeping them clear of function labels.
const GLOBAL_PREFIX: &str = "gvar_";

/// The five-way classification of a body word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordClass<'a> {
  Number(&'a str),
  CharLiteral(char),
  GlobalRef(&'a str),
  BuiltinCall(&'a str),
  UserCall(&'a str),
}

fn classify<'a>(token: &'a Token, ctx: &Context) -> TranslateResult<WordClass<'a>> {
  let word = token.text.as_str();
  if words::is_number(word) {
    return Ok(WordClass::Number(word));
  }
  if let Some(c) = words::char_literal_value(word) {
    return Ok(WordClass::CharLiteral(c));
  }
  if ctx.is_global(word) {
    return Ok(WordClass::GlobalRef(word));
  }
  if ctx.is_builtin(word) {
    return Ok(WordClass::BuiltinCall(word));
  }
  if ctx.is_user_function(word) {
    return Ok(WordClass::UserCall(word));
  }
  Err(TranslateError::unknown_word(ctx.source_name(), token))
}

/// Emit the full assembly unit: file prologue, data section for globals,
/// then one labelled block per function.
pub fn generate(funcs: &[FunctionDefinition], ctx: &Context) -> TranslateResult<String> {
  let mut asm = String::new();

  asm.push_str("bits 32\n\n");
  for name in ctx.user_functions() {
    asm.push_str(&format!("global {name}\n"));
  }
  asm.push_str(&format!("extern {INIT_STACK}\n"));
  asm.push_str(&format!("extern {PUSH_STACK}\n"));
  for builtin in words::BUILTINS {
    asm.push_str(&format!("extern {builtin}\n"));
  }

  if !ctx.globals().is_empty() {
    asm.push_str("\nsection .data\n");
    for (name, value) in ctx.globals() {
      asm.push_str(&format!("{GLOBAL_PREFIX}{name}: dd {value}\n"));
    }
  }

  asm.push_str("\nsection .text\n");
  for func in funcs {
    emit_function(func, ctx, &mut asm)?;
  }

  Ok(asm)
}

fn emit_function(func: &FunctionDefinition, ctx: &Context, asm: &mut String) -> TranslateResult<()> {
  asm.push_str(&format!("\n{}:\n", func.name.text));
  if func.name.text == ENTRY_POINT {
    asm.push_str(&format!("    call {INIT_STACK}\n"));
  }
  for word in &func.body {
    emit_word(word, ctx, asm)?;
  }
  asm.push_str("    ret\n");
  Ok(())
}

fn emit_word(token: &Token, ctx: &Context, asm: &mut String) -> TranslateResult<()> {
  match classify(token, ctx)? {
    WordClass::Number(value) => {
      asm.push_str(&format!("    mov eax, {value}\n"));
      asm.push_str(&format!("    call {PUSH_STACK}\n"));
    }
    WordClass::CharLiteral(c) => {
      asm.push_str(&format!("    mov eax, '{c}'\n"));
      asm.push_str(&format!("    call {PUSH_STACK}\n"));
    }
    // A global reference pushes the address of its data-section slot; the
    // memory words (get/put and the typed variants) operate on it.
    WordClass::GlobalRef(name) => {
      asm.push_str(&format!("    mov eax, {GLOBAL_PREFIX}{name}\n"));
      asm.push_str(&format!("    call {PUSH_STACK}\n"));
    }
    WordClass::BuiltinCall(name) | WordClass::UserCall(name) => {
      asm.push_str(&format!("    call {name}\n"));
    }
  }
  Ok(())
}
