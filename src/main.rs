use std::{
    fs::File,
    io::{self, BufReader},
    process,
};

use clap::Parser;
use deskcalc::calculator::session::Session;

/// deskcalc is a minimal desk calculator: statements of the form
/// `expression ;` are evaluated in order, one result per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells deskcalc to evaluate a file instead of an inline script.
    #[arg(short, long)]
    file: bool,

    /// Statements to evaluate; standard input is read when omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let result = match args.contents {
        Some(contents) if args.file => {
            let file = File::open(&contents).unwrap_or_else(|_| {
                           eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                           process::exit(1);
                       });
            Session::from_reader(Box::new(BufReader::new(file))).run(&mut out, &mut err)
        },

        Some(contents) => Session::from_source(&contents).run(&mut out, &mut err),

        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let result = Session::new(&mut input).run(&mut out, &mut err);
            result
        },
    };

    if let Err(error) = result {
        eprintln!("{error}");
        process::exit(1);
    }
}
