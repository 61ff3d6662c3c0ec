use std::fs;

use clap::Parser;
use shuntyard::evaluate_with;

/// shuntyard evaluates arithmetic expressions with decimal literals, the
/// operators `+ - * /`, parentheses, and an optional single variable.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells shuntyard to look at a file instead of an expression.
    #[arg(short, long)]
    file: bool,

    /// The value substituted for the expression's variable, if one is
    /// present.
    #[arg(short = 'x', long, default_value_t = 0.0)]
    variable: f64,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match evaluate_with(expression.trim_end(), args.variable) {
        Ok(value) => println!("{value}"),
        Err(e) => eprintln!("{e}"),
    }
}
