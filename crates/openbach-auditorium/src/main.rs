//! Command-line entry point: build a scenario, emit its document.

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, Command};
use openbach_auditorium::{scenarios, ScenarioObserver};
use openbach_scenario::Scenario;
use tracing_subscriber::EnvFilter;

fn output_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the document to this file instead of stdout"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .action(ArgAction::SetTrue)
                .help("Render the document human-readable"),
        )
}

fn cli() -> Command {
    Command::new("openbach-auditorium")
        .version(openbach_auditorium::VERSION)
        .about("Build OpenBACH scenarios and emit their documents")
        .subcommand_required(true)
        .subcommand(output_args(
            Command::new("ping")
                .about("RTT measurement with fping")
                .arg(Arg::new("entity").long("entity").required(true).help("Agent entity running the probe"))
                .arg(Arg::new("destination-ip").long("destination-ip").required(true).help("Address to probe"))
                .arg(
                    Arg::new("duration")
                        .long("duration")
                        .default_value("30")
                        .value_parser(value_parser!(u32))
                        .help("Probe duration in seconds"),
                ),
        ))
        .subcommand(output_args(
            Command::new("rate")
                .about("TCP goodput measurement with iperf3")
                .arg(Arg::new("client-entity").long("client-entity").required(true).help("Entity running the iperf3 client"))
                .arg(Arg::new("server-entity").long("server-entity").required(true).help("Entity running the iperf3 server"))
                .arg(Arg::new("server-ip").long("server-ip").required(true).help("Address the client connects to"))
                .arg(
                    Arg::new("duration")
                        .long("duration")
                        .default_value("30")
                        .value_parser(value_parser!(u32))
                        .help("Transmission duration in seconds"),
                ),
        ))
        .subcommand(
            Command::new("validate")
                .about("Run the dependency-graph pass over a scenario document")
                .arg(Arg::new("path").required(true).help("Path to the scenario JSON document")),
        )
}

fn run() -> anyhow::Result<()> {
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("ping", args)) => {
            let scenario = scenarios::ping(
                args.get_one::<String>("entity").unwrap(),
                args.get_one::<String>("destination-ip").unwrap(),
                *args.get_one::<u32>("duration").unwrap(),
            );
            emit(args, &scenario)
        }
        Some(("rate", args)) => {
            let scenario = scenarios::rate(
                args.get_one::<String>("client-entity").unwrap(),
                args.get_one::<String>("server-entity").unwrap(),
                args.get_one::<String>("server-ip").unwrap(),
                *args.get_one::<u32>("duration").unwrap(),
            );
            emit(args, &scenario)
        }
        Some(("validate", args)) => {
            let path = args.get_one::<String>("path").unwrap();
            let document =
                std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            let scenario = Scenario::from_json(&document).context("decoding scenario document")?;
            let report = openbach_graph::validate(&scenario)?;
            println!(
                "{}: {} functions, {} edges, {} scenarios checked",
                scenario.name(),
                report.function_count,
                report.edge_count,
                report.scenarios_checked
            );
            Ok(())
        }
        _ => unreachable!("subcommand is required"),
    }
}

fn emit(args: &clap::ArgMatches, scenario: &Scenario) -> anyhow::Result<()> {
    let mut observer = ScenarioObserver::new().pretty(args.get_flag("pretty"));
    if let Some(path) = args.get_one::<String>("output") {
        observer = observer.with_output_file(path);
    }
    observer.launch(scenario)?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(error) = run() {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
