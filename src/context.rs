//! Compilation context: the mutable state threaded through every stage.
//!
//! One context is created per translation unit and dropped when translation
//! finishes. Nothing is shared across units – redefinition detection depends
//! on the user-function and global tables starting empty every time.

use crate::directives::{Directive, DirectiveKind};
use crate::tokenizer::Token;
use crate::words;

pub struct Context {
  source_name: String,
  /// Insertion-ordered so the emitted `global` export lines are stable.
  user_functions: Vec<String>,
  /// (name, initial value) pairs collected from `%%var` directives.
  globals: Vec<(String, String)>,
  directives: Vec<Directive>,
}

impl Context {
  pub fn new(source_name: &str) -> Self {
    Self {
      source_name: source_name.to_string(),
      user_functions: Vec::new(),
      globals: Vec::new(),
      directives: Vec::new(),
    }
  }

  pub fn source_name(&self) -> &str {
    &self.source_name
  }

  pub fn is_builtin(&self, name: &str) -> bool {
    words::is_builtin(name)
  }

  pub fn is_user_function(&self, name: &str) -> bool {
    self.user_functions.iter().any(|f| f == name)
  }

  /// Register a validated user function. The caller (the function builder)
  /// is responsible for the no-overlap checks against both name sets.
  pub fn define_function(&mut self, name: &str) {
    self.user_functions.push(name.to_string());
  }

  pub fn user_functions(&self) -> &[String] {
    &self.user_functions
  }

  /// Record a directive. Directives accumulate and are never removed; a
  /// global-variable directive also seeds the global table.
  pub fn record_directive(&mut self, directive: Directive) {
    if directive.kind == DirectiveKind::Var
      && let [name, value] = directive.args.as_slice()
    {
      self.globals.push((name.text.clone(), value.text.clone()));
    }
    self.directives.push(directive);
  }

  pub fn is_global(&self, name: &str) -> bool {
    self.globals.iter().any(|(g, _)| g == name)
  }

  pub fn globals(&self) -> &[(String, String)] {
    &self.globals
  }

  pub fn directives(&self) -> &[Directive] {
    &self.directives
  }
}

/// A function definition that survived validation: the name token and the
/// body tokens strictly between `:` NAME and `;`, delimiters excluded.
#[derive(Debug, Clone)]
pub struct FunctionDefinition {
  pub name: Token,
  pub body: Vec<Token>,
}
