use clap::Parser;
use std::process;

mod cli;

use cli::{Args, Command};
use pathdb::{create_formatter, diff, enumerate, load_json_input, make_db, LoadConfig};

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(args.log_level())
        .init();

    if let Err(err) = run(args) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    args.validate()?;

    let config = LoadConfig::from_env().with_overrides(args.max_file_size, args.max_depth);
    config.validate()?;
    tracing::debug!(?config, format = %args.format, "starting");
    let formatter = create_formatter(args.format);

    let output = match &args.command {
        Command::Paths { input } => {
            let root = load_json_input(input, &config)?;
            formatter.format_paths(&enumerate(&root)?)?
        }
        Command::Db { input, mode } => {
            let root = load_json_input(input, &config)?;
            formatter.format_db(&make_db(&root, *mode)?)?
        }
        Command::Diff { a, b, .. } => {
            let ignored = args.ignore_paths()?;
            let a = load_json_input(a, &config)?;
            let b = load_json_input(b, &config)?;
            let outcome = diff(&a, &b)?.filter_ignored(&ignored);
            formatter.format_diff(&outcome)?
        }
    };

    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
