use std::process::exit;

use clap::Parser;

use polish::eval_raw;

#[derive(Parser)]
struct Cli {
    /// Expression to evaluate
    expression: String,
}

fn main() {
    let args = Cli::parse();

    match eval_raw(&args.expression) {
        Ok(value) => println!("{}", value),
        Err(error) => {
            eprintln!("{}", error.rendered(&args.expression));
            exit(1);
        }
    }
}
