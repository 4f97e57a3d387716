//! Terminal driver for the searoute planner core.
//!
//! # Responsibility
//! - Measure routes and port-to-port lines without a map host.
//! - Replay scripted planner sessions for quick local sanity checks.

mod script;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use searoute_core::{
    init_logging_from_config, polyline_distance, Distance, LatLng, PlannerConfig, PortCatalog,
    PortRole, PortSelection, Polyline, RoutePlanner,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON config file (log level, log directory, map view)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in port catalog
    Ports,
    /// Measure one polyline given as `lat,lng` vertices
    Measure {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        vertices: Vec<LatLng>,
    },
    /// Straight-line distance between two catalog ports
    PortRoute { origin: String, destination: String },
    /// Replay a JSON planner script and print the resulting route details
    Replay {
        script: PathBuf,
        /// Print the final planner snapshot as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => PlannerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PlannerConfig::default(),
    };
    init_logging_from_config(&config).map_err(anyhow::Error::msg)?;
    log::info!(
        "event=cli_start module=cli status=ok version={} zoom={}",
        searoute_core::core_version(),
        config.map_view.zoom
    );

    match args.command {
        Command::Ports => print_ports(),
        Command::Measure { vertices } => {
            print_distance(polyline_distance(&Polyline::new(vertices)));
        }
        Command::PortRoute {
            origin,
            destination,
        } => print_port_route(&origin, &destination)?,
        Command::Replay { script: path, json } => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading script {}", path.display()))?;
            let steps = script::parse(&raw)
                .with_context(|| format!("parsing script {}", path.display()))?;
            let planner = RoutePlanner::with_map_view(config.map_view);
            let (planner, _) = script::replay(planner, &steps)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&planner.snapshot())?);
            } else {
                print_planner(&planner);
            }
        }
    }

    Ok(())
}

fn print_ports() {
    for port in PortCatalog::builtin().iter() {
        println!(
            "{:<6} {:<28} {}",
            port.id,
            port.option_label(),
            port.coordinates
        );
    }
}

fn print_port_route(origin: &str, destination: &str) -> Result<()> {
    let catalog = PortCatalog::builtin();
    let mut selection = PortSelection::default();
    for (role, id) in [(PortRole::Origin, origin), (PortRole::Destination, destination)] {
        let Some(port) = catalog.get(id) else {
            bail!("unknown port id `{id}`; run `searoute ports` for the list");
        };
        println!("{:<16} {}", role.label(), port.option_label());
        selection.select(role, id);
    }

    let Some(route) = selection.route(&catalog) else {
        bail!("origin and destination must be different ports");
    };
    print_distance(route.direct_distance());
    Ok(())
}

fn print_planner(planner: &RoutePlanner) {
    for landmark in planner.landmarks().iter() {
        println!(
            "{:<14} {} ({})",
            landmark.role.label(),
            landmark.name,
            landmark.coordinates
        );
    }
    if let Some(title) = planner.route_title() {
        println!("Route          {title}");
    }
    match planner.distance() {
        Some(distance) => print_distance(distance),
        None => println!("No route drawn"),
    }
}

fn print_distance(distance: Distance) {
    for (label, value) in distance.readout().lines() {
        println!("{label:<14} {value}");
    }
}
