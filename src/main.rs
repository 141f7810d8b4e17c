use crate::config::AirportLayout;
use crate::facility::FacilityKind;
use crate::time::Timestamp;
use crate::tower::Tower;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod aircraft;
mod arrival;
mod config;
mod error;
mod facility;
mod registry;
mod time;
mod tower;
mod view;

#[derive(Parser)]
struct Args {
    /// Path to a JSON airport layout (runway and terminal names)
    #[arg(short, long, value_name = "FILE")]
    layout: Option<PathBuf>,

    /// Log every state change to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let mut candidates = Vec::new();

        for cmd in &self.commands {
            if cmd.starts_with(line) {
                candidates.push(Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                });
            }
        }

        Ok((0, candidates))
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "apron=debug" } else { "apron=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn parse_kind(arg: Option<&&str>) -> Option<FacilityKind> {
    arg.and_then(|s| FacilityKind::parse(s))
}

/// `<id> <flight> <origin...>`; an origin may span several words.
fn arrival_fields<'a>(args: &[&'a str]) -> (Option<&'a str>, Option<&'a str>, Option<String>) {
    let origin = match args.get(2..) {
        Some(words) if !words.is_empty() => Some(words.join(" ")),
        _ => None,
    };
    (args.first().copied(), args.get(1).copied(), origin)
}

fn print_help() {
    println!("\nAvailable Commands:");
    println!("  arrive <id> <flight> <origin> - Register an arriving aircraft");
    println!("  log [--json]                  - Show the arrival log");
    println!("  ls [r|t]                      - Show runways, terminals, or both");
    println!("  assign <r|t>                  - Put the first waiting aircraft on a free runway or terminal");
    println!("  release <r|t> <name>          - Free a runway or terminal");
    println!("  free <r|t>                    - List available runways or terminals");
    println!("  time <r|t> <name>             - Minutes a runway or terminal has been occupied");
    println!("  where <id>                    - Find the runway or terminal holding an aircraft");
    println!("  help / ?                      - Show this help menu");
    println!("  exit / quit                   - Leave the tower\n");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let layout = match &args.layout {
        Some(path) => AirportLayout::load_from_file(path)?,
        None => AirportLayout::default(),
    };
    let mut tower = Tower::new(&layout)?;
    let runways = tower.registry(FacilityKind::Runway).len();
    let terminals = tower.registry(FacilityKind::Terminal).len();
    info!(runways, terminals, "layout loaded");
    println!("Tower online at {}. {} runways, {} terminals.", Timestamp::now(), runways, terminals);

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: ["arrive", "log", "ls", "assign", "release", "free", "time", "where", "help", "exit"]
            .map(String::from)
            .to_vec(),
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "arrive" => {
                        let (aircraft_id, flight_number, origin) = arrival_fields(&parts[1..]);
                        match tower.register_arrival(aircraft_id, flight_number, origin.as_deref()) {
                            Ok(record) => {
                                println!(
                                    "Arrival registered: {} ({} from {}) at {}",
                                    record.flight_number, record.aircraft_id, record.origin, record.arrival_time
                                );
                                println!("{} aircraft waiting.", tower.arrivals.waiting_count());
                            },
                            Err(e) => println!("{} {}", "Error:".red(), e),
                        }
                    },
                    "log" => {
                        if parts.get(1) == Some(&"--json") {
                            println!("{}", serde_json::to_string_pretty(tower.arrivals.as_slice())?);
                        } else if tower.arrivals.is_empty() {
                            println!("No arrivals registered.");
                        } else {
                            println!("{}", view::arrivals_table(tower.arrivals.iter()));
                            println!(
                                "{} arrivals, {} waiting.",
                                tower.arrivals.len(),
                                tower.arrivals.waiting_count()
                            );
                        }
                    },
                    "ls" => {
                        let kinds = match parse_kind(parts.get(1)) {
                            Some(kind) => vec![kind],
                            None => vec![FacilityKind::Runway, FacilityKind::Terminal],
                        };
                        let now = Timestamp::now();
                        for kind in kinds {
                            let registry = tower.registry(kind);
                            println!("{}s", registry.kind());
                            println!("{}", view::facility_table(registry, now));
                        }
                    },
                    "assign" => {
                        if let Some(kind) = parse_kind(parts.get(1)) {
                            match tower.assign_next(kind) {
                                Ok(a) => println!("Aircraft {} assigned to {} {}", a.aircraft, a.kind, a.facility),
                                Err(denied) => println!("{} {}", "Denied:".yellow(), denied),
                            }
                        } else {
                            println!("Usage: assign <runway|terminal>");
                        }
                    },
                    "release" => {
                        if let (Some(kind), Some(name)) = (parse_kind(parts.get(1)), parts.get(2)) {
                            match tower.release(kind, name) {
                                Ok(()) => println!("{} {} released", kind, name),
                                Err(denied) => println!("{} {}", "Denied:".yellow(), denied),
                            }
                        } else {
                            println!("Usage: release <runway|terminal> <name>");
                        }
                    },
                    "free" => {
                        if let Some(kind) = parse_kind(parts.get(1)) {
                            let available = tower.available(kind);
                            if available.is_empty() {
                                println!("No {}s available.", kind);
                            } else {
                                println!("{}", available.join(", "));
                            }
                        } else {
                            println!("Usage: free <runway|terminal>");
                        }
                    },
                    "time" => {
                        if let (Some(kind), Some(name)) = (parse_kind(parts.get(1)), parts.get(2)) {
                            match tower.minutes_occupied(kind, name) {
                                Ok(Some(minutes)) => println!("{} occupied for {} min", name, minutes),
                                Ok(None) => println!("{} is not occupied", name),
                                Err(denied) => println!("{} {}", "Denied:".yellow(), denied),
                            }
                        } else {
                            println!("Usage: time <runway|terminal> <name>");
                        }
                    },
                    "where" => {
                        match parts.get(1).and_then(|raw| aircraft::normalize(raw)) {
                            Some(id) => match tower.locate(&id) {
                                Some((kind, name)) => println!("{} is on {} {}", id, kind, name),
                                None => println!("{} holds no runway or terminal", id),
                            },
                            None => println!("Usage: where <aircraft_id>"),
                        }
                    },
                    "help" | "?" => print_help(),
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
