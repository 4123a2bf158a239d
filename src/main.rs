use std::io::IsTerminal;
use std::path::Path;

use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;

use prodel::editor;
use prodel::rendering;
use prodel::scanning;
use prodel::scanning::CancelToken;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("prodel")
        .version(VERSION)
        .propagate_version(true)
        .about("The Prodel Procedures Language.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("outline")
                .about("Show the symbol outline of the given source file")
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for styling even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Emit the outline as JSON rather than as a tree."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the procedure source you want outlined."),
                ),
        )
        .subcommand(
            Command::new("lsp")
                .about("Run the Prodel language server, communicating over standard input and output"),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("outline", submatches)) => {
            let raw = submatches.get_flag("raw-control-chars");
            let json = submatches.get_flag("json");
            if let Some(filename) = submatches.get_one::<String>("filename") {
                outline_file(Path::new(filename), raw, json);
            }
        }
        Some(("lsp", _)) => {
            editor::run_language_server();
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: prodel [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn outline_file(filename: &Path, raw: bool, json: bool) {
    let content = match scanning::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            std::process::exit(1);
        }
    };

    let cancel = CancelToken::new();
    let symbols = scanning::outline(&content, &cancel).unwrap_or_default();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&symbols).expect("Outline trees always serialize")
        );
    } else {
        let colors = raw
            || std::io::stdout()
                .is_terminal();
        print!("{}", rendering::render(&symbols, colors));
    }
}
