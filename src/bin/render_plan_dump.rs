use linear_viz::api::{OperationOutcome, VisualizerSession};
use linear_viz::layout::LayoutConfig;
use linear_viz::render::{NullRenderer, RenderPlan};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

const USAGE: &str =
    "usage: render_plan_dump [--verbose] [--layout <path>] <structure:operation[:value]|reset>...";

#[derive(Debug)]
enum Command {
    Apply {
        structure: String,
        operation: String,
        value: String,
    },
    Reset,
}

#[derive(Debug)]
struct CliArgs {
    verbose: bool,
    layout: Option<PathBuf>,
    commands: Vec<Command>,
}

#[derive(Debug, Serialize)]
struct DumpReport<'a> {
    outcomes: Vec<String>,
    plans: Vec<&'a RenderPlan>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let Some(args) = parse_args()? else {
        println!("{USAGE}");
        return Ok(());
    };
    let _ = if args.verbose {
        linear_viz::telemetry::init_tracing_with_filter("linear_viz=trace")
    } else {
        linear_viz::telemetry::init_default_tracing()
    };

    let config = match &args.layout {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            LayoutConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => LayoutConfig::default(),
    };

    let mut session =
        VisualizerSession::new(NullRenderer::default(), config).map_err(|err| err.to_string())?;
    let mut outcomes = Vec::with_capacity(args.commands.len());
    for command in &args.commands {
        match command {
            Command::Apply {
                structure,
                operation,
                value,
            } => {
                let outcome: OperationOutcome = session
                    .apply_named(structure, operation, value)
                    .map_err(|err| err.to_string())?;
                outcomes.push(outcome.to_string());
            }
            Command::Reset => {
                session.reset().map_err(|err| err.to_string())?;
                outcomes.push("reset all structures".to_owned());
            }
        }
    }

    let report = DumpReport {
        outcomes,
        plans: session.canvas().plans().collect(),
    };
    let json = serde_json::to_string_pretty(&report)
        .map_err(|err| format!("failed to serialize report: {err}"))?;
    println!("{json}");
    Ok(())
}

/// Returns `None` when help was requested.
fn parse_args() -> Result<Option<CliArgs>, String> {
    parse_arg_list(std::env::args().skip(1))
}

fn parse_arg_list(args: impl IntoIterator<Item = String>) -> Result<Option<CliArgs>, String> {
    let mut args = args.into_iter();
    let mut verbose = false;
    let mut layout = None::<PathBuf>;
    let mut commands = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--layout" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --layout".to_owned())?;
                layout = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Ok(None),
            "--verbose" | "-v" => verbose = true,
            "reset" => commands.push(Command::Reset),
            other => commands.push(parse_command(other)?),
        }
    }

    if commands.is_empty() {
        return Err(USAGE.to_owned());
    }
    Ok(Some(CliArgs {
        verbose,
        layout,
        commands,
    }))
}

fn parse_command(raw: &str) -> Result<Command, String> {
    let mut parts = raw.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(structure), Some(operation), value) if !structure.is_empty() => Ok(Command::Apply {
            structure: structure.to_owned(),
            operation: operation.to_owned(),
            value: value.unwrap_or_default().to_owned(),
        }),
        _ => Err(format!("malformed command `{raw}`\n{USAGE}")),
    }
}
