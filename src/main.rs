use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use taglight::highlighting;
use taglight::host::{self, Document, DocumentKind, RenderedOutput, Session};
use taglight::language::{LoadingError, Rule};
use taglight::matching;
use taglight::output;
use taglight::rendering::{Identity, Render, Terminal};
use taglight::scanning::{self, Scanner};

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("taglight")
        .version(VERSION)
        .propagate_version(true)
        .about("Highlight XML element names by their ancestor path.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("highlight")
                .about("Print the given document with matching element names coloured")
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("rules")
                        .short('r')
                        .long("rules")
                        .help("JSON file containing the ordered list of path rules."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The XML document you want to highlight."),
                ),
        )
        .subcommand(
            Command::new("matches")
                .about("List each element name claimed by a rule, with its position and path")
                .arg(
                    Arg::new("rules")
                        .short('r')
                        .long("rules")
                        .help("JSON file containing the ordered list of path rules."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The XML document you want to inspect."),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Export the highlighted document as a standalone HTML page")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Target file to write, or '-' for standard out."),
                )
                .arg(
                    Arg::new("rules")
                        .short('r')
                        .long("rules")
                        .help("JSON file containing the ordered list of path rules."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The XML document you want to export."),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("highlight", submatches)) => {
            if let Some((text, rules, _)) = load_inputs(submatches) {
                let forced = submatches.get_flag("raw-control-chars");
                if forced
                    || std::io::stdout()
                        .is_terminal()
                {
                    run_session(Terminal, text, rules);
                } else {
                    run_session(Identity, text, rules);
                }
            }
        }
        Some(("matches", submatches)) => {
            if let Some((text, rules, _)) = load_inputs(submatches) {
                let compiled = matching::compile(&rules);
                for event in Scanner::new(&text) {
                    if let Some(hit) = matching::first_match(&compiled, &event.path) {
                        let (line, column) = event
                            .range
                            .position_in(&text);
                        let name = &text[event.range.start..event.range.end];
                        println!(
                            "{}:{}\t{}\t{}\t{}",
                            line + 1,
                            column + 1,
                            name,
                            event.path,
                            hit.rule
                                .path
                        );
                    }
                }
            }
        }
        Some(("render", submatches)) => {
            if let Some((text, rules, filename)) = load_inputs(submatches) {
                let groups = highlighting::scan(&text, &rules);
                let target = submatches
                    .get_one::<String>("output")
                    .map(Path::new);
                output::via_html(filename, &text, &groups, target);
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: taglight [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

/// Read the document and rule file named on the command line. A document
/// that is not XML is silently skipped (a no-op, not an error), matching
/// the behaviour of an editor host that only rescans XML buffers.
fn load_inputs(submatches: &ArgMatches) -> Option<(String, Vec<Rule>, &Path)> {
    let filename = Path::new(
        submatches
            .get_one::<String>("filename")
            .expect("filename is required")
            .as_str(),
    );

    if DocumentKind::classify(filename) != DocumentKind::Xml {
        debug!("{} is not an XML document; nothing to do", filename.display());
        return None;
    }

    let text = match scanning::load(filename) {
        Ok(text) => text,
        Err(error) => fail(&error),
    };

    let rules = match submatches.get_one::<String>("rules") {
        Some(rules_file) => match host::load_rules(Path::new(rules_file)) {
            Ok(rules) => rules,
            Err(error) => fail(&error),
        },
        None => vec![],
    };

    Some((text, rules, filename))
}

fn run_session(renderer: impl Render, text: String, rules: Vec<Rule>) {
    let mut session = Session::new(RenderedOutput::new(renderer, std::io::stdout()));
    session.rules_changed(rules);
    session.document_changed(Some(Document {
        kind: DocumentKind::Xml,
        text,
    }));
}

fn fail(error: &LoadingError) -> ! {
    eprintln!("{}: {}", "error".bright_red(), error);
    std::process::exit(1);
}
