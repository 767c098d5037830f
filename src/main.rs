use std::path::Path;

use bna::{
    error::{EXIT_FILE_ERROR, EXIT_SUCCESS, Error},
    run_file,
    run_source,
};
use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Extension every BNA source file must carry.
const SOURCE_EXTENSION: &str = "bna";

/// bna runs programs written in BNA, a small line-oriented language that is
/// not assembly.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells bna to run `.bna` files instead of an inline script.
    #[arg(short, long)]
    file: bool,

    /// Logs every token line and decoded statement while compiling.
    #[arg(short, long)]
    verbose: bool,

    /// The source files to run in order, or the lines of an inline script.
    #[arg(required = true)]
    contents: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    if let Err(e) = SimpleLogger::new().with_level(level).env().init() {
        eprintln!("Failed to initialise logging: {e}");
    }

    if !args.file {
        exit_on_error(run_source(&args.contents.join("\n")));
        std::process::exit(EXIT_SUCCESS);
    }

    for path in &args.contents {
        if !Path::new(path).extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
            eprintln!("'{path}' is not a .{SOURCE_EXTENSION} file.");
            std::process::exit(EXIT_FILE_ERROR);
        }
        exit_on_error(run_file(path));
    }

    std::process::exit(EXIT_SUCCESS);
}

fn exit_on_error(result: Result<(), Error>) {
    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }
}
