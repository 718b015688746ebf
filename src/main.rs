use std::{
    fs,
    io::{self, BufRead},
};

use aplish::{Session, run_script};
use clap::Parser;

/// aplish is a right-to-left calculator for integers and integer vectors in
/// the spirit of APL.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Runs the statements in this file instead of reading standard input,
    /// and prints the last value.
    #[arg(short, long)]
    file: Option<String>,

    /// Seeds the roll operator `?` so that runs are reproducible.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    if let Some(path) = args.file {
        let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                         eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                         std::process::exit(1);
                     });

        match run_script(&script, args.seed) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    let mut session = args.seed.map_or_else(Session::new, Session::with_seed);

    for line in io::stdin().lock().lines() {
        let Ok(line) = line else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match session.execute(&line) {
            Ok(value) => println!("{value}\n"),
            Err(e) => eprintln!("{e}\n"),
        }
    }
}
