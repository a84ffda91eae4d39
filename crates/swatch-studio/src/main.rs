//! Command-line gradient editor.
//!
//! Every command works on one gradient text, given as the last argument or,
//! when omitted, read from the `--store` file. Edits print the new canonical
//! text and write it back to the store.
//!
//! Usage:
//!   swatch [--store <PATH>] [--log <FILTER>] <command> [args] [GRADIENT]
//!   swatch insert 50 "linear-gradient(90deg, white 0%, black 100%)"
//!   swatch --store bg.txt recolor 1 "#ff000080"
mod commands;

use anyhow::Context;
use clap::{Arg, ArgMatches, Command, value_parser};
use swatch_engine::logging::{LoggingConfig, init_logging};
use swatch_engine::paint::{GradientKind, RadialShape};
use swatch_engine::session::GradientEditor;
use swatch_engine::store::{FileStore, ValueStore};

use commands::{Action, apply};

fn gradient_arg() -> Arg {
    Arg::new("gradient")
        .help("Gradient text; defaults to the stored value")
        .required(false)
        .allow_hyphen_values(true)
}

fn index_arg() -> Arg {
    Arg::new("index")
        .help("Stop index, in position order, starting at 0")
        .required(true)
        .value_parser(value_parser!(usize))
}

fn percent_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .help(help)
        .required(true)
        .allow_negative_numbers(true)
        .value_parser(value_parser!(f32))
}

fn cli() -> Command {
    Command::new("swatch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and edit CSS gradients")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("store")
                .long("store")
                .global(true)
                .value_name("PATH")
                .help("File holding the persisted gradient value"),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .global(true)
                .value_name("FILTER")
                .help("Log filter, e.g. `debug` (overrides RUST_LOG)"),
        )
        .subcommand(
            Command::new("normalize")
                .about("Print the canonical form")
                .arg(gradient_arg()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show kind, direction and stops")
                .arg(gradient_arg()),
        )
        .subcommand(
            Command::new("sample")
                .about("Print the color shown at a track position")
                .arg(percent_arg("position", "Track position in percent"))
                .arg(gradient_arg()),
        )
        .subcommand(
            Command::new("insert")
                .about("Add a stop at a track position, colored from its neighbors")
                .arg(percent_arg("position", "Track position in percent"))
                .arg(gradient_arg()),
        )
        .subcommand(
            Command::new("append")
                .about("Copy the last stop a little further along")
                .arg(gradient_arg()),
        )
        .subcommand(
            Command::new("move")
                .about("Set a stop's position")
                .arg(index_arg())
                .arg(percent_arg("position", "New position in percent"))
                .arg(gradient_arg()),
        )
        .subcommand(
            Command::new("drag")
                .about("Drag a stop by a distance in percent of the track")
                .arg(index_arg())
                .arg(percent_arg("delta", "Pointer travel in percent"))
                .arg(gradient_arg()),
        )
        .subcommand(
            Command::new("remove")
                .about("Remove a stop (at least two are kept)")
                .arg(index_arg())
                .arg(gradient_arg()),
        )
        .subcommand(
            Command::new("recolor")
                .about("Set a stop's color (hex, rgb(), rgba() or a name)")
                .arg(index_arg())
                .arg(Arg::new("color").required(true))
                .arg(gradient_arg()),
        )
        .subcommand(
            Command::new("kind")
                .about("Switch between linear and radial")
                .arg(
                    Arg::new("kind")
                        .required(true)
                        .value_parser(|s: &str| s.parse::<GradientKind>()),
                )
                .arg(gradient_arg()),
        )
        .subcommand(
            Command::new("angle")
                .about("Set the linear angle in degrees")
                .arg(
                    Arg::new("degrees")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(i32)),
                )
                .arg(gradient_arg()),
        )
        .subcommand(
            Command::new("shape")
                .about("Set the radial shape")
                .arg(
                    Arg::new("shape")
                        .required(true)
                        .value_parser(|s: &str| s.parse::<RadialShape>()),
                )
                .arg(gradient_arg()),
        )
}

fn main() {
    let matches = cli().get_matches();

    // Global flags are read from the subcommand, where clap propagates them.
    let filter = matches
        .subcommand()
        .and_then(|(_, sub)| sub.get_one::<String>("log"))
        .cloned();
    init_logging(LoggingConfig::with_filter(filter));

    if let Err(e) = run(&matches) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let (name, sub) = matches.subcommand().context("no command given")?;
    let action = Action::from_matches(name, sub)?;

    let mut store = sub.get_one::<String>("store").map(FileStore::new);
    let text = match (sub.get_one::<String>("gradient"), &store) {
        (Some(text), _) => text.clone(),
        (None, Some(store)) => store.load()?.unwrap_or_default(),
        (None, None) => String::new(),
    };
    log::debug!("{name} on {text:?}");

    let mut editor = GradientEditor::load(&text);
    let output = apply(&mut editor, &action)?;
    println!("{output}");

    if action.mutates() {
        if let Some(store) = store.as_mut() {
            store.save(&editor.value())?;
            log::info!("saved to {}", store.path().display());
        }
    }
    Ok(())
}
