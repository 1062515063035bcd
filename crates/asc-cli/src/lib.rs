//! ASC command-line front end
//!
//! Subcommands:
//! - `plan <QUERY>`: run one query through the full pipeline
//! - `topology --roles .. --pattern ..`: build a graph for a given team
//! - `simulate --initial .. --target ..`: run the convergence simulator
//! - `demo`: the research-assistant demo with analytics
//!
//! [`execute`] returns the rendered output instead of printing it.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod render;

use anyhow::{Context, Result};
use asc_catalog::AgentRole;
use asc_core::{run_demo, AscConfig, Coordinator, TaskRequest};
use asc_optimize::ConvergenceSimulator;
use asc_planning::DEFAULT_DOMAIN;
use asc_topology::build_graph_from_label;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the `asc` command
#[must_use]
pub fn build_cli() -> Command {
    Command::new("asc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Adaptive squad coordinator: plan, wire and simulate agent teams")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON"),
        )
        .subcommand(
            Command::new("plan")
                .about("Classify a query, form a team and simulate it")
                .arg(Arg::new("query").required(true).help("Query text"))
                .arg(
                    Arg::new("domain")
                        .long("domain")
                        .default_value(DEFAULT_DOMAIN)
                        .help("Problem domain"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("topology")
                .about("Build the communication graph for a team")
                .arg(
                    Arg::new("roles")
                        .long("roles")
                        .required(true)
                        .value_delimiter(',')
                        .value_parser(|s: &str| s.parse::<AgentRole>())
                        .help("Comma-separated roles, e.g. IO,TOT,WEB"),
                )
                .arg(
                    Arg::new("pattern")
                        .long("pattern")
                        .required(true)
                        .help("Collaboration pattern label"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("simulate")
                .about("Run the convergence simulator")
                .arg(
                    Arg::new("initial")
                        .long("initial")
                        .required(true)
                        .value_parser(value_parser!(f64))
                        .help("Starting performance"),
                )
                .arg(
                    Arg::new("target")
                        .long("target")
                        .required(true)
                        .value_parser(value_parser!(f64))
                        .help("Target performance"),
                )
                .arg(
                    Arg::new("max-iterations")
                        .long("max-iterations")
                        .value_parser(value_parser!(usize))
                        .help("Override the configured iteration cap"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("demo")
                .about("Run the research-assistant demo")
                .arg(json_flag()),
        )
}

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` overrides the default `info` filter. Logs go to stderr so
/// command output stays clean.
pub fn init_tracing(json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("failed to create tracing filter")?;

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
    };
    installed.context("failed to initialize tracing")
}

/// Matches of the selected subcommand, where global args are visible
#[must_use]
pub fn leaf(matches: &ArgMatches) -> &ArgMatches {
    matches.subcommand().map_or(matches, |(_, sub)| sub)
}

/// Load the configuration named by `--config`, or the defaults
pub fn load_config(matches: &ArgMatches) -> Result<AscConfig> {
    match leaf(matches).get_one::<PathBuf>("config") {
        Some(path) => AscConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display())),
        None => Ok(AscConfig::default()),
    }
}

/// Run the selected subcommand and return its rendered output
pub async fn execute(matches: &ArgMatches) -> Result<String> {
    let config = load_config(matches)?;
    let mut out = String::new();

    match matches.subcommand() {
        Some(("plan", args)) => {
            let query = args
                .get_one::<String>("query")
                .context("missing query")?;
            let domain = args
                .get_one::<String>("domain")
                .map_or("", String::as_str);

            let coordinator = Coordinator::new(config)?;
            let request = TaskRequest::new(query.as_str()).with_domain(domain);
            request.validate()?;
            let outcome = coordinator.process_cooperative(&request.query, &request.domain).await;

            if args.get_flag("json") {
                out = serde_json::to_string_pretty(&outcome)?;
            } else {
                render::outcome(&mut out, &outcome)?;
            }
        }
        Some(("topology", args)) => {
            let roles: Vec<AgentRole> = args
                .get_many::<AgentRole>("roles")
                .context("missing roles")?
                .copied()
                .collect();
            let pattern = args
                .get_one::<String>("pattern")
                .context("missing pattern")?;

            let graph = build_graph_from_label(&roles, pattern);
            if args.get_flag("json") {
                out = serde_json::to_string_pretty(&graph)?;
            } else {
                render::graph(&mut out, &graph)?;
            }
        }
        Some(("simulate", args)) => {
            let initial = *args.get_one::<f64>("initial").context("missing initial")?;
            let target = *args.get_one::<f64>("target").context("missing target")?;

            let mut simulator = ConvergenceSimulator::new(config.simulation.step_policy());
            if let Some(&cap) = args.get_one::<usize>("max-iterations") {
                simulator = simulator.with_max_iterations(cap);
            }
            let trace = simulator.simulate_cooperative(initial, target).await;

            if args.get_flag("json") {
                out = serde_json::to_string_pretty(&trace)?;
            } else {
                render::trace(&mut out, &trace)?;
            }
        }
        Some(("demo", args)) => {
            let coordinator = Coordinator::new(config)?;
            let report = run_demo(&coordinator);

            if args.get_flag("json") {
                out = serde_json::to_string_pretty(&report)?;
            } else {
                render::demo(&mut out, &report)?;
            }
        }
        Some((other, _)) => anyhow::bail!("unknown subcommand: {other}"),
        None => anyhow::bail!("no subcommand given"),
    }

    Ok(out)
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(args: &[&str]) -> ArgMatches {
        build_cli().try_get_matches_from(args).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn roles_are_parsed_as_labels() {
        let m = matches(&["asc", "topology", "--roles", "io,TOT,web", "--pattern", "ring"]);
        let (_, args) = m.subcommand().unwrap();
        let roles: Vec<AgentRole> = args.get_many::<AgentRole>("roles").unwrap().copied().collect();
        assert_eq!(roles, vec![AgentRole::Io, AgentRole::Tot, AgentRole::Web]);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let result = build_cli().try_get_matches_from([
            "asc", "topology", "--roles", "IO,PILOT", "--pattern", "sequential",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(build_cli().try_get_matches_from(["asc"]).is_err());
    }

    #[tokio::test]
    async fn unknown_pattern_falls_back_to_placeholder() {
        let m = matches(&[
            "asc", "topology", "--roles", "IO,TOT,WEB", "--pattern", "ring", "--json",
        ]);
        let out = execute(&m).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["shape"], "placeholder");
        assert_eq!(json["edges"].as_array().unwrap().len(), 3);
        assert_eq!(json["connectivity"], 0.5);
    }

    #[tokio::test]
    async fn simulate_respects_cap() {
        let m = matches(&[
            "asc", "simulate", "--initial", "0.1", "--target", "0.9", "--max-iterations", "2",
            "--json",
        ]);
        let out = execute(&m).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["values"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn blank_plan_query_is_an_error() {
        let m = matches(&["asc", "plan", "  "]);
        assert!(execute(&m).await.is_err());
    }
}
