use std::fs;

use clap::Parser;
use inline_calc::{
    inline::{InlineOptions, annotate_text},
    interpreter::context::{Context, DEFAULT_PRECISION, Rounding},
    solve_with,
};
use tracing_subscriber::EnvFilter;

/// inline-calc evaluates arithmetic expressions over fixed-precision decimals,
/// or annotates every line of a file with its answer.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as a file path and annotate each of its lines.
    #[arg(short, long)]
    file: bool,

    /// Number of significant digits (1 to 28).
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: u32,

    /// Rounding mode applied to every operation.
    #[arg(short, long, value_enum, default_value_t = Rounding::HalfEven)]
    rounding: Rounding,

    /// In file mode, put each answer on its own line.
    #[arg(short, long)]
    newline: bool,

    contents: String,
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                  EnvFilter::new("warn")
                                              }))
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let context = Context::new(args.precision, args.rounding).unwrap_or_else(|e| {
                                                                 eprintln!("{e}");
                                                                 std::process::exit(1);
                                                             });

    if args.file {
        let text = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        });
        let options = InlineOptions { newline: args.newline };
        print!("{}", annotate_text(&text, &context, options));
        return;
    }

    match solve_with(&args.contents, &context) {
        Ok(number) => println!("{number}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
