//! # Gridwalk Simulator Entry Point
//!
//! Runs the navigator headless: picks targets from the command line or at random,
//! ticks the agent along each route, and logs or prints what happened.

use clap::Parser;
use gridwalk::{
    FollowerMode, GridwalkError, GridwalkResult, Navigator, NavigatorConfig, Ray, SearchStatus,
    TargetSurface, Vec3,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::path::PathBuf;
#[cfg(feature = "dev-tools")]
use tracing::{info, warn, Level};

#[cfg(not(feature = "dev-tools"))]
use log::{info, warn};

/// Command line arguments for the Gridwalk simulator.
#[derive(Parser, Debug)]
#[command(name = "gridwalk")]
#[command(about = "Plan and follow grid routes for an agent in 3D space")]
#[command(version)]
struct Args {
    /// Agent start position as x,y,z
    #[arg(long, value_parser = parse_vec3, default_value = "2.5,0,2.5", allow_hyphen_values = true)]
    start: Vec3,

    /// Goal position as x,y,z
    #[arg(
        long,
        value_parser = parse_vec3,
        allow_hyphen_values = true,
        conflicts_with = "ray_origin"
    )]
    goal: Option<Vec3>,

    /// Pick ray origin as x,y,z, intersected with the ground plane
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true, requires = "ray_dir")]
    ray_origin: Option<Vec3>,

    /// Pick ray direction as x,y,z
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true, requires = "ray_origin")]
    ray_dir: Option<Vec3>,

    /// Number of additional random clicks on the ground
    #[arg(long, default_value_t = 0)]
    clicks: usize,

    /// Random seed for click generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Half extent of the square area random clicks land in
    #[arg(long, default_value_t = 10.0)]
    area: f32,

    /// Distance moved per tick (overrides the config file)
    #[arg(long)]
    step: Option<f32>,

    /// JSON navigator configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Give up on a route after this many ticks
    #[arg(long, default_value_t = 10_000)]
    max_ticks: usize,

    /// Disable blending toward the next waypoint
    #[arg(long)]
    no_smoothing: bool,

    /// Print a JSON report of every route to stdout
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// What happened while following one route.
#[derive(Debug, Serialize)]
struct LegReport {
    goal: [f32; 3],
    status: SearchStatus,
    nodes_expanded: usize,
    waypoints: Vec<[f32; 3]>,
    ticks: usize,
    arrived: bool,
    final_position: [f32; 3],
}

fn main() -> GridwalkResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level)?;

    info!("Starting Gridwalk v{}", gridwalk::VERSION);

    let config = load_config(&args)?;
    let mut navigator = Navigator::new(config, args.start)?;
    let surface = TargetSurface::ground();
    let mut legs = Vec::new();

    if let Some(goal) = args.goal {
        navigator.retarget(goal);
        legs.push(follow_route(&mut navigator, goal, args.max_ticks));
    } else if let (Some(origin), Some(direction)) = (args.ray_origin, args.ray_dir) {
        let ray = Ray::new(origin, direction);
        if navigator.handle_pointer(&ray, &surface).is_some() {
            let goal = navigator.target().unwrap_or(origin);
            legs.push(follow_route(&mut navigator, goal, args.max_ticks));
        } else {
            warn!("Pick ray {:?} does not hit the ground plane", ray);
        }
    } else if args.clicks == 0 {
        return Err(GridwalkError::InvalidArgument(
            "nothing to do: pass --goal, --ray-origin/--ray-dir or --clicks".to_string(),
        ));
    }

    let seed = args.seed.unwrap_or(12345);
    let mut rng = StdRng::seed_from_u64(seed);
    let area = args.area.abs().max(f32::EPSILON);
    if args.clicks > 0 {
        info!("Simulating {} clicks with seed {}", args.clicks, seed);
    }

    for _ in 0..args.clicks {
        let spot = Vec3::new(rng.gen_range(-area..area), 0.0, rng.gen_range(-area..area));
        let ray = Ray::new(spot + Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        if navigator.handle_pointer(&ray, &surface).is_some() {
            legs.push(follow_route(&mut navigator, spot, args.max_ticks));
        }
    }

    let arrived = legs.iter().filter(|leg| leg.arrived).count();
    info!("Finished {} routes, {} arrived", legs.len(), arrived);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&legs)?);
    }

    Ok(())
}

/// Loads the configuration file, if any, and applies command line overrides.
fn load_config(args: &Args) -> GridwalkResult<NavigatorConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            NavigatorConfig::load(path)?
        }
        None => NavigatorConfig::default(),
    };

    if let Some(step) = args.step {
        config.step_distance = step;
    }
    if args.no_smoothing {
        config.corner_smoothing = false;
    }
    config.validate()?;
    Ok(config)
}

/// Ticks the navigator until its route is exhausted or `max_ticks` runs out.
fn follow_route(navigator: &mut Navigator, goal: Vec3, max_ticks: usize) -> LegReport {
    let (status, nodes_expanded) = navigator
        .last_search()
        .map(|result| (result.status, result.nodes_expanded))
        .unwrap_or((SearchStatus::Exhausted, 0));
    let waypoints = navigator.path().waypoints().map(|w| w.to_array()).collect();

    info!(
        "Route to {:?}: {:?}, {} waypoints, {} nodes expanded",
        goal,
        status,
        navigator.path().len(),
        nodes_expanded
    );

    let mut ticks = 0;
    let mut arrived = false;
    while navigator.mode() == FollowerMode::Following && ticks < max_ticks {
        arrived = navigator.update().arrived;
        ticks += 1;
    }

    if navigator.mode() == FollowerMode::Following {
        warn!("Gave up after {} ticks at {:?}", ticks, navigator.position());
    } else if arrived {
        info!("Arrived at {:?} after {} ticks", navigator.position(), ticks);
    }

    LegReport {
        goal: goal.to_array(),
        status,
        nodes_expanded,
        waypoints,
        ticks,
        arrived,
        final_position: navigator.position().to_array(),
    }
}

/// Parses a vector written as `x,y,z`.
fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts = s
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number in '{}': {}", s, e))?;

    match parts.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(format!("expected x,y,z but got '{}'", s)),
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) -> GridwalkResult<()> {
    #[cfg(feature = "dev-tools")]
    {
        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::INFO,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        let filter: log::LevelFilter = log_level.parse().map_err(|_| {
            GridwalkError::InvalidArgument(format!("unknown log level '{}'", log_level))
        })?;
        env_logger::Builder::new()
            .filter_level(filter)
            .format_target(false)
            .init();
    }

    Ok(())
}
