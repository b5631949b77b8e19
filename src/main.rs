use std::env;
use std::fs;
use std::process;

fn main() {
  let args: Vec<String> = env::args().collect();
  if args.len() != 2 {
    let program = args.first().map(String::as_str).unwrap_or("sigc");
    eprintln!("usage: {program} <source.sig>");
    process::exit(1);
  }

  let path = &args[1];
  let source = match fs::read_to_string(path) {
    Ok(source) => source,
    Err(err) => {
      eprintln!("{path}: {err}");
      process::exit(1);
    }
  };

  match sigc::translate(&source, path) {
    Ok(asm) => print!("{asm}"),
    Err(err) => {
      eprintln!("{err}");
      process::exit(1);
    }
  }
}
