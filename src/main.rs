use clap::Parser;
use lispy::config;
use lispy::config::{HELP_TEXT, WELCOME_FOOTER, WELCOME_MESSAGE, WELCOME_SUBTITLE};
use lispy::env::Environment;
use lispy::eval::eval;
use lispy::highlighter::LispHelper;
use lispy::value::Value;
use lispy::{builtins, parser, reader};
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};
use std::path::PathBuf;
use std::rc::Rc;

/// A small Lisp interpreter: no arguments starts the REPL, any number of
/// file arguments are `load`ed in order.
#[derive(Parser, Debug)]
#[command(name = "lispy")]
#[command(version = config::VERSION)]
#[command(about = "A small Lisp interpreter")]
struct CliArgs {
    /// Source files to load and evaluate (omit to start the REPL)
    files: Vec<PathBuf>,
}

fn main() {
    let args = CliArgs::parse();

    let env = Environment::new();
    builtins::register_builtins(&env);

    if args.files.is_empty() {
        repl(&env);
    } else {
        for path in &args.files {
            let result = builtins::io::load(&env, vec![Value::string(path.display().to_string())]);
            if let Err(e) = result {
                eprintln!("Error: {e}");
            }
        }
    }
}

fn repl(env: &Rc<Environment>) {
    let config = Config::builder().auto_add_history(true).build();
    let mut rl = match Editor::with_config(config) {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to initialize REPL: {e}");
            return;
        }
    };
    rl.set_helper(Some(LispHelper::new()));

    let history_file = ".lispy_history";
    let _ = rl.load_history(history_file);

    println!("{WELCOME_MESSAGE}");
    println!("{WELCOME_SUBTITLE}");
    println!("{WELCOME_FOOTER}");

    loop {
        let readline = rl.readline("lispy> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                match trimmed {
                    "(quit)" | "(exit)" => {
                        println!("Goodbye!");
                        break;
                    }
                    "(help)" => {
                        println!("{HELP_TEXT}");
                        continue;
                    }
                    _ => {}
                }

                match parser::parse_str(&line) {
                    Ok(root) => {
                        let program = reader::read(&root);
                        let result = eval(program, env);
                        println!("=> {result}");
                    }
                    Err(e) => eprintln!("Parse error: {e}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                eprintln!("Error: {err}");
                break;
            }
        }
    }

    let _ = rl.save_history(history_file);
}
