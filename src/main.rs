use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use log::error;

use route_planner::planner::{DisplaySink, RoutePlanner};
use route_planner::resolver::{CoordinateResolver, FallbackResolver, StaticResolver, SyntheticResolver};
use route_planner::{Algorithm, ErrorKind, PlannerConfig, RouteResult};

/// Plans a multi-stop route between a start and an end point
#[derive(Parser)]
#[command(name = "route-planner")]
#[command(about = "Orders waypoints between a start and an end using great-circle distances")]
struct Cli {
    /// Start place name
    #[arg(long, required_unless_present = "list_algorithms")]
    start: Option<String>,

    /// End place name (same as the start for a loop)
    #[arg(long, required_unless_present = "list_algorithms")]
    end: Option<String>,

    /// Waypoint place name, may be repeated
    #[arg(short, long = "waypoint")]
    waypoints: Vec<String>,

    /// File with one waypoint name per line
    #[arg(long)]
    waypoints_file: Option<PathBuf>,

    /// Ordering strategy: nearest or dijkstra
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use synthetic coordinates for names that cannot be resolved
    #[arg(long)]
    synthetic_fallback: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// List the available algorithms and exit
    #[arg(long)]
    list_algorithms: bool,
}

/// Prints results to stdout and errors to the log
struct ConsoleSink {
    json: bool,
    failed: bool,
}

impl DisplaySink for ConsoleSink {
    fn on_route_computed(&mut self, result: &RouteResult) {
        if self.json {
            match serde_json::to_string_pretty(result) {
                Ok(json_str) => println!("{json_str}"),
                Err(e) => {
                    error!("Failed to serialize result: {e}");
                    self.failed = true;
                }
            }
        } else {
            println!("{result}");
        }
    }

    fn on_error(&mut self, kind: ErrorKind, message: &str) {
        error!("{kind:?}: {message}");
        self.failed = true;
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.list_algorithms {
        for algorithm in Algorithm::ALL {
            println!("{}: {}", algorithm.name(), algorithm.description());
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => PlannerConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => PlannerConfig::default(),
    };
    if cli.synthetic_fallback {
        config.allow_synthetic_fallback = true;
    }

    let (Some(start), Some(end)) = (cli.start.as_deref(), cli.end.as_deref()) else {
        bail!("both --start and --end are required");
    };

    let gazetteer = StaticResolver::with_builtin_cities();
    let resolver: Box<dyn CoordinateResolver> = if config.allow_synthetic_fallback {
        Box::new(FallbackResolver::new(gazetteer, SyntheticResolver))
    } else {
        Box::new(gazetteer)
    };

    let planner = RoutePlanner::new(config);
    let mut request = planner.request(&resolver, start, end, &cli.waypoints, cli.algorithm)?;
    if let Some(path) = &cli.waypoints_file {
        planner
            .import_waypoints_file(&resolver, &mut request, path)
            .with_context(|| format!("importing waypoints from {}", path.display()))?;
    }

    let mut sink = ConsoleSink {
        json: cli.json,
        failed: false,
    };
    planner.plan_with_sink(&request, &mut sink);

    if sink.failed {
        bail!("route calculation failed");
    }
    Ok(())
}
