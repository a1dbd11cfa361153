use anyhow::{Context, bail};
use log::info;
use lot_flow::{FlowConfig, FlowView, LotPayload, build_all, to_json, to_mermaid_sankey};
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

#[derive(Debug, Clone, Copy, Default)]
enum OutputFormat {
    #[default]
    Json,
    Mermaid,
    View,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "mermaid" | "sankey" => Ok(Self::Mermaid),
            "view" => Ok(Self::View),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    diagnosis: Option<String>,
    format: OutputFormat,
    config: Option<String>,
    pretty: bool,
    all: bool,
}

fn usage() -> &'static str {
    "lot-flow\n\
\n\
USAGE:\n\
  lot-flow [--diagnosis <code>] [--format json|mermaid|view] [--pretty] [--config <path>] [<path>|-]\n\
  lot-flow --all [--pretty] [--config <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the payload is read from stdin.\n\
  - Without --diagnosis the first diagnosis in the payload is used.\n\
  - --all prints the view of every diagnosis as a JSON array.\n\
"
}

fn parse_args(argv: &[String]) -> anyhow::Result<Args> {
    let mut args = Args::default();
    let mut it = argv.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--pretty" => args.pretty = true,
            "--all" => args.all = true,
            "--diagnosis" => {
                let Some(code) = it.next() else { bail!(usage()) };
                args.diagnosis = Some(code.clone());
            }
            "--format" => {
                let Some(fmt) = it.next() else { bail!(usage()) };
                args.format = fmt.parse().map_err(|()| anyhow::anyhow!(usage()))?;
            }
            "--config" => {
                let Some(path) = it.next() else { bail!(usage()) };
                args.config = Some(path.clone());
            }
            "-h" | "--help" => bail!(usage()),
            other if other.starts_with("--") => bail!(usage()),
            path => {
                if args.input.is_some() {
                    bail!(usage());
                }
                args.input = Some(path.to_string());
            }
        }
    }
    Ok(args)
}

fn read_input(input: Option<&str>) -> anyhow::Result<String> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read payload from stdin")?;
            Ok(buf)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read payload file: {path}")),
    }
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&argv)?;

    let config = match args.config.as_deref() {
        Some(path) => FlowConfig::from_path(Path::new(path))
            .with_context(|| format!("Failed to load configuration: {path}"))?,
        None => FlowConfig::default(),
    };

    let start = Instant::now();
    let payload = LotPayload::from_json_str(&read_input(args.input.as_deref())?)
        .context("Failed to decode line-of-therapy payload")?;
    info!(
        "Loaded {} diagnoses in {:?}",
        payload.len(),
        start.elapsed()
    );

    if args.all {
        println!("{}", to_json(&build_all(&payload, &config), args.pretty)?);
        return Ok(());
    }

    let view = FlowView::from_selection(payload.select(args.diagnosis.as_deref()), &config);
    match (args.format, view.graph()) {
        (OutputFormat::View, _) => println!("{}", to_json(&view, args.pretty)?),
        (OutputFormat::Json, Some(graph)) => println!("{}", to_json(graph, args.pretty)?),
        (OutputFormat::Mermaid, Some(graph)) => print!("{}", to_mermaid_sankey(graph)),
        (_, None) => {
            // Nothing to draw; the view carries which empty state applies
            println!("{}", to_json(&view, args.pretty)?);
        }
    }

    Ok(())
}
